//! Fusing particles and conjunctions into multi-word name parts.
//!
//! Both joins read the parts right to left and push onto a new list, so a
//! part is always joined with the already-fused material to its right:
//! "de la Vega" becomes "la Vega" and then "de la Vega". A fused part keeps
//! the comma of its rightmost piece.

use crate::lexicon::Lexicon;
use crate::token::{NameParts, Token};

/// Fuse every particle onto the part that follows it.
///
/// A particle in the final position has nothing to its right and stays on
/// its own.
pub(crate) fn join_prefixes(parts: NameParts, prefixes: &Lexicon) -> NameParts {
    // `fused` is built back to front; its last element is the part to the
    // right of the one being read.
    let mut fused: Vec<Token> = Vec::with_capacity(parts.len());

    for token in parts.0.into_iter().rev() {
        if prefixes.contains(&token.text) {
            if let Some(head) = fused.pop() {
                fused.push(Token::new(format!("{} {}", token.text, head.text), head.comma));
                continue;
            }
        }
        fused.push(token);
    }

    fused.reverse();
    let joined = NameParts(fused);
    log::debug!("prefixes joined: {joined}");
    joined
}

/// Fuse "A and B" style triples into one part.
///
/// Runs only with at least three parts. The conjunction must sit strictly
/// between two other parts, so one in the first or last position is left
/// alone.
pub(crate) fn join_conjunctions(parts: NameParts, conjunctions: &Lexicon) -> NameParts {
    if parts.len() < 3 {
        return parts;
    }

    let mut fused: Vec<Token> = Vec::with_capacity(parts.len());

    for token in parts.0.into_iter().rev() {
        let starts_triple = fused.len() >= 2
            && fused
                .last()
                .is_some_and(|next| conjunctions.contains(&next.text));
        if starts_triple {
            if let (Some(conj), Some(right)) = (fused.pop(), fused.pop()) {
                fused.push(Token::new(
                    format!("{} {} {}", token.text, conj.text, right.text),
                    right.comma,
                ));
                continue;
            }
        }
        fused.push(token);
    }

    fused.reverse();
    let joined = NameParts(fused);
    log::debug!("conjunctions joined: {joined}");
    joined
}
