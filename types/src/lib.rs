use serde::{Deserialize, Serialize};

// ── Parsed name ──────────────────────────────────────────────────────────

/// A free-form personal name broken into its conventional Western parts.
///
/// Every field is a plain string and is empty when the part was not found.
/// `title` and `suffix` may carry several values joined by `", "`; `nick`
/// joins several nicknames with a bare `","`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParsedName {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub first: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub middle: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub last: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub nick: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub suffix: String,
}

impl ParsedName {
    /// True when no part of the name was assigned.
    pub fn is_empty(&self) -> bool {
        self.title.is_empty()
            && self.first.is_empty()
            && self.middle.is_empty()
            && self.last.is_empty()
            && self.nick.is_empty()
            && self.suffix.is_empty()
    }

    /// Field name / value pairs in display order, including empty ones.
    pub fn fields(&self) -> [(&'static str, &str); 6] {
        [
            ("title", self.title.as_str()),
            ("first", self.first.as_str()),
            ("middle", self.middle.as_str()),
            ("last", self.last.as_str()),
            ("nick", self.nick.as_str()),
            ("suffix", self.suffix.as_str()),
        ]
    }
}
