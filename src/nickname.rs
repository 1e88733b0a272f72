use regex::Regex;
use std::sync::LazyLock;

// A quoted or bracketed span, optionally preceded by one ASCII whitespace char:
//   Juan "Doc" Xavier   →  "Doc"
//   Juan Xavier (Doc)   →  " (Doc)"
// The inner text may not contain brackets or closing quote characters, so
// unbalanced delimiters never match and stay in the name.
static RE_NICKNAME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"[\t\n\x0C\r ]?['"(\[]([^\[\])'"]+)['")\]]"#).unwrap());

/// Nicknames pulled out of a raw name, plus what is left of the name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Nicknames {
    pub names: Vec<String>,
    pub remainder: String,
}

/// Find every nickname span in `raw` and delete it.
///
/// Each matched span is removed everywhere it occurs literally, so a
/// nickname written twice in exactly the same way leaves no trace.
pub(crate) fn extract_nicknames(raw: &str) -> Nicknames {
    let mut names = Vec::new();
    let mut spans = Vec::new();

    for caps in RE_NICKNAME.captures_iter(raw) {
        if let (Some(whole), Some(inner)) = (caps.get(0), caps.get(1)) {
            spans.push(whole.as_str());
            names.push(inner.as_str().to_string());
        }
    }
    log::debug!("found {} nickname(s): {names:?}", names.len());

    let mut remainder = raw.to_string();
    for span in spans {
        remainder = remainder.replace(span, "");
    }
    log::debug!("name without nicknames: {remainder:?}");

    Nicknames { names, remainder }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bracketed_nickname() {
        let n = extract_nicknames("Dr. Juan Xavier (Doc Vega)");
        assert_eq!(n.names, ["Doc Vega"]);
        assert_eq!(n.remainder, "Dr. Juan Xavier");
    }

    #[test]
    fn test_quoted_nicknames_in_order() {
        let n = extract_nicknames(r#"Juan "JJ" Xavier [Doc]"#);
        assert_eq!(n.names, ["JJ", "Doc"]);
        assert_eq!(n.remainder, "Juan Xavier");
    }

    #[test]
    fn test_nickname_before_comma_keeps_comma() {
        let n = extract_nicknames("Juan Xavier III (Doc Vega), Jr.");
        assert_eq!(n.names, ["Doc Vega"]);
        assert_eq!(n.remainder, "Juan Xavier III, Jr.");
    }

    #[test]
    fn test_repeated_identical_span_removed_everywhere() {
        let n = extract_nicknames("Juan (Doc) Xavier (Doc)");
        assert_eq!(n.names, ["Doc", "Doc"]);
        assert_eq!(n.remainder, "Juan Xavier");
    }

    #[test]
    fn test_unbalanced_delimiters_pass_through() {
        let n = extract_nicknames("Juan (Doc Xavier");
        assert!(n.names.is_empty());
        assert_eq!(n.remainder, "Juan (Doc Xavier");

        let n = extract_nicknames("Juan [Doc] ] Xavier");
        assert_eq!(n.names, ["Doc"]);
        assert_eq!(n.remainder, "Juan ] Xavier");
    }

    #[test]
    fn test_only_ascii_whitespace_is_taken_before_span() {
        let n = extract_nicknames("Juan\u{2028}(Doc) Xavier");
        assert_eq!(n.names, ["Doc"]);
        assert_eq!(n.remainder, "Juan\u{2028} Xavier");
    }

    #[test]
    fn test_empty_brackets_do_not_match() {
        let n = extract_nicknames("Juan () Xavier");
        assert!(n.names.is_empty());
        assert_eq!(n.remainder, "Juan () Xavier");
    }
}
