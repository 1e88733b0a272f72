//! Split a free-form personal name into title, first, middle and last names,
//! nicknames and suffixes.
//!
//! ```
//! use fullname_parser::parse_fullname;
//!
//! let name = parse_fullname("de la Vega, Dr. Juan Q. Xavier III");
//! assert_eq!(name.title, "Dr.");
//! assert_eq!(name.first, "Juan");
//! assert_eq!(name.middle, "Q. Xavier");
//! assert_eq!(name.last, "de la Vega");
//! assert_eq!(name.suffix, "III");
//! ```

mod assign;
mod join;
pub mod lexicon;
mod matcher;
mod nickname;
mod token;

pub use fullname_types::ParsedName;

use lexicon::{CONJUNCTION_LEXICON, PREFIX_LEXICON, SUFFIX_LEXICON, TITLE_LEXICON};

/// Parse one full name. Never fails: unusual input just yields a sparser record.
///
/// Passes run in a fixed order over the working parts:
/// nicknames → split → suffixes → titles → particles → conjunctions →
/// extra comma suffixes → last / first / middle.
pub fn parse_fullname(fullname: &str) -> ParsedName {
    log::debug!("parsing full name: {fullname:?}");
    let mut name = ParsedName::default();

    let nicknames = nickname::extract_nicknames(fullname);
    name.nick = nicknames.names.join(",");

    let mut parts = token::split_name(&nicknames.remainder);

    if parts.len() > 1 {
        name.suffix = matcher::take_matches(&mut parts, &SUFFIX_LEXICON).join(", ");
    }

    if parts.len() > 1 {
        name.title = matcher::take_matches(&mut parts, &TITLE_LEXICON).join(", ");
    }
    log::debug!("{} part(s) after suffixes and titles", parts.len());

    if parts.len() > 1 {
        parts = join::join_prefixes(parts, &PREFIX_LEXICON);
    }

    if parts.len() > 1 {
        parts = join::join_conjunctions(parts, &CONJUNCTION_LEXICON);
    }

    if parts.len() > 1 {
        let extra = assign::take_extra_suffixes(&mut parts);
        if !extra.is_empty() {
            let extra = extra.join(", ");
            if name.suffix.is_empty() {
                name.suffix = extra;
            } else {
                name.suffix = format!("{}, {extra}", name.suffix);
            }
        }
    }

    let assigned = assign::assign_names(parts);
    name.first = assigned.first;
    name.middle = assigned.middle;
    name.last = assigned.last;

    log::debug!("parsing complete: {name:?}");
    name
}
