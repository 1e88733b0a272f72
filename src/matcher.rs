use crate::lexicon::Lexicon;
use crate::token::NameParts;

/// Pull every part that matches `lexicon` out of `parts`, in reading order.
///
/// Matching lower-cases the part and drops one trailing period; blank parts
/// are skipped. Removal looks each match up by value and drops the first
/// part with that exact text. When the dropped part carried a comma and was
/// not the last part, the comma moves onto the part that slides into its
/// place, so "III, Jr." loses "III" without losing the comma boundary.
pub(crate) fn take_matches(parts: &mut NameParts, lexicon: &Lexicon) -> Vec<String> {
    let found: Vec<String> = parts
        .0
        .iter()
        .filter(|t| !t.text.is_empty() && lexicon.matches_normalized(&t.text))
        .map(|t| t.text.clone())
        .collect();

    log::debug!("found {} {} part(s): {found:?}", found.len(), lexicon.name());

    for word in &found {
        let Some(index) = parts.0.iter().position(|t| &t.text == word) else {
            continue;
        };
        let removed = parts.0.remove(index);
        if removed.comma {
            if let Some(next) = parts.0.get_mut(index) {
                next.comma = true;
            }
        }
    }

    log::trace!("parts after {} removal: {parts}", lexicon.name());
    found
}
