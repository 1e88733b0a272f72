use crate::token::NameParts;

/// Parts that survive every earlier pass, split into the three name slots.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Assigned {
    pub first: String,
    pub middle: String,
    pub last: String,
}

/// Treat comma-marked parts past the first two positions as extra suffixes.
///
/// Only kicks in when at least two parts carry a comma ("Vega, Juan, PhD").
/// Positions 0 and 1 are reserved for the first/last name candidates and
/// are never taken. The result is in right-to-left order.
pub(crate) fn take_extra_suffixes(parts: &mut NameParts) -> Vec<String> {
    let mut extra = Vec::new();
    if parts.comma_count() < 2 {
        return extra;
    }

    for index in (2..parts.len()).rev() {
        if parts.0[index].comma {
            extra.push(parts.0.remove(index).text);
        }
    }

    log::debug!("found {} extra suffix(es): {extra:?}", extra.len());
    extra
}

/// Assign last, first and middle names, consuming the remaining parts.
///
/// The last name is the rightmost comma-marked part, or the final part when
/// there is no comma. The first name is whatever then sits at the front, and
/// everything else becomes the middle name.
pub(crate) fn assign_names(parts: NameParts) -> Assigned {
    let mut parts = parts.0;
    let mut assigned = Assigned::default();
    if parts.is_empty() {
        return assigned;
    }

    let last_index = parts
        .iter()
        .rposition(|t| t.comma)
        .unwrap_or(parts.len() - 1);
    assigned.last = parts.remove(last_index).text;
    log::debug!("last name: {:?}", assigned.last);

    let mut rest = parts.into_iter().map(|t| t.text);
    if let Some(first) = rest.next() {
        assigned.first = first;
        log::debug!("first name: {:?}", assigned.first);
    }

    let middle: Vec<String> = rest.collect();
    if !middle.is_empty() {
        assigned.middle = middle.join(" ");
        log::debug!("middle name(s): {:?}", assigned.middle);
    }

    assigned
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::token::{Token, split_name};

    #[test]
    fn test_extra_suffixes_after_second_comma() {
        let mut parts = split_name("Vega, Juan Q. Xavier, CPA, Genius");
        let extra = take_extra_suffixes(&mut parts);
        assert_eq!(extra, ["CPA", "Xavier"]);
        assert_eq!(
            parts.0,
            vec![
                Token::new("Vega", true),
                Token::new("Juan", false),
                Token::new("Q.", false),
                Token::new("Genius", false),
            ]
        );
    }

    #[test]
    fn test_single_comma_is_not_a_suffix_marker() {
        let mut parts = split_name("Vega, Juan Xavier");
        assert!(take_extra_suffixes(&mut parts).is_empty());
        assert_eq!(parts.len(), 3);
    }

    #[test]
    fn test_first_two_positions_are_protected() {
        let mut parts = split_name("Vega, Juan,");
        assert!(take_extra_suffixes(&mut parts).is_empty());
        assert_eq!(parts.comma_count(), 2);
    }

    #[test]
    fn test_last_name_from_comma() {
        let assigned = assign_names(split_name("de_la_Vega, Juan Q. Xavier"));
        assert_eq!(
            assigned,
            Assigned {
                first: "Juan".into(),
                middle: "Q. Xavier".into(),
                last: "de_la_Vega".into(),
            }
        );
    }

    #[test]
    fn test_last_name_without_comma() {
        let assigned = assign_names(split_name("Juan Q. R. Xavier"));
        assert_eq!(assigned.first, "Juan");
        assert_eq!(assigned.middle, "Q. R.");
        assert_eq!(assigned.last, "Xavier");
    }

    #[test]
    fn test_comma_on_first_part_is_still_last_name() {
        let assigned = assign_names(split_name("Xavier, Juan"));
        assert_eq!(assigned.last, "Xavier");
        assert_eq!(assigned.first, "Juan");
        assert!(assigned.middle.is_empty());
    }

    #[test]
    fn test_single_and_empty_parts() {
        assert_eq!(assign_names(split_name("Cotter")).last, "Cotter");
        assert_eq!(assign_names(split_name("")), Assigned::default());
        assert_eq!(assign_names(NameParts::default()), Assigned::default());
    }
}
