use regex::Regex;
use std::fmt;
use std::sync::LazyLock;

// Runs of two or more ASCII whitespace or Unicode space-separator (Zs) chars.
// Line and paragraph separators (U+2028, U+2029, U+0085) are not in the class.
static RE_WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\t\n\x0C\r \p{Zs}]{2,}").unwrap());

/// One name part plus whether a comma followed it in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Token {
    pub text: String,
    pub comma: bool,
}

impl Token {
    pub fn new(text: impl Into<String>, comma: bool) -> Self {
        Self {
            text: text.into(),
            comma,
        }
    }
}

/// The working list of name parts, consumed pass by pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct NameParts(pub Vec<Token>);

impl NameParts {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn comma_count(&self) -> usize {
        self.0.iter().filter(|t| t.comma).count()
    }
}

impl fmt::Display for NameParts {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .0
            .iter()
            .map(|t| {
                if t.comma {
                    format!("{:?},", t.text)
                } else {
                    format!("{:?}", t.text)
                }
            })
            .collect();
        write!(f, "[{}]", parts.join(" "))
    }
}

/// Replace each whitespace run of length two or more with a single space.
pub(crate) fn collapse_whitespace(s: &str) -> String {
    RE_WHITESPACE_RUN.replace_all(s, " ").into_owned()
}

/// Split a nickname-free name into parts, recording trailing commas.
///
/// Empty input yields a single empty part; later passes tolerate it.
pub(crate) fn split_name(raw: &str) -> NameParts {
    log::debug!("splitting name: {raw:?}");
    let collapsed = collapse_whitespace(raw);

    let parts = NameParts(
        collapsed
            .trim()
            .split(' ')
            .map(|piece| {
                let piece = piece.trim();
                match piece.strip_suffix(',') {
                    Some(stripped) => Token::new(stripped, true),
                    None => Token::new(piece, false),
                }
            })
            .collect(),
    );

    log::debug!("split parts: {parts}");
    parts
}
