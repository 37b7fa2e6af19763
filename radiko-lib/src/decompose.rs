// Word decomposition: strip, regenerate, validate, select.
//
// The strip phase removes at most one preposition, then prefixes and suffixes
// greedily down to a minimal core (possibly empty). Every combination of
// reattached prefixes and suffixes is then tried against the dictionary and
// the longest valid root wins.
//
// If nothing validates after stripping a preposition, the search runs again
// with the preposition left in place ({dezert} is a root, {de} + {zert} is
// not). When no single root validates either way, the same candidates are
// tried as compounds of several roots ({bon}+{humor}). Only when that also
// fails is the word reported unresolved.

use tracing::{debug, trace};

use crate::affix;
use crate::candidate;
use crate::compound;
use crate::error::DecomposeError;
use crate::lexicon::Lexicon;
use crate::select;
use crate::types::{Decomposition, StrippingState};
use crate::validate::RootValidator;

/// Decompose a single word.
///
/// Never fails. An empty word yields an empty [`Decomposition`]; characters
/// outside the alphabet are matched literally like any other. Use
/// [`try_decompose`] to reject such input instead.
pub fn decompose(word: &str, lexicon: &Lexicon) -> Decomposition {
    if word.is_empty() {
        return Decomposition::default();
    }

    let stripped = affix::strip_all(word, lexicon, true);
    if let Some(found) = search(&stripped, lexicon) {
        return found;
    }

    let whole = stripped.preposition.is_some().then(|| {
        debug!(word, "no valid root after preposition, retrying without it");
        affix::strip_all(word, lexicon, false)
    });
    if let Some(found) = whole.as_ref().and_then(|w| search(w, lexicon)) {
        return found;
    }

    let joined = compound_search(&stripped, lexicon)
        .or_else(|| whole.as_ref().and_then(|w| compound_search(w, lexicon)));
    if let Some(found) = joined {
        return found;
    }

    let remainder = stripped
        .preposition
        .as_deref()
        .and_then(|prep| word.strip_prefix(prep))
        .unwrap_or(word);
    debug!(word, remainder, "no valid root");
    Decomposition::unresolved(stripped.preposition, remainder)
}

/// Like [`decompose`], but rejects empty words and words containing
/// non-alphabetic characters.
pub fn try_decompose(word: &str, lexicon: &Lexicon) -> Result<Decomposition, DecomposeError> {
    if word.is_empty() {
        return Err(DecomposeError::EmptyWord);
    }
    if let Some(ch) = word.chars().find(|c| !c.is_alphabetic()) {
        return Err(DecomposeError::NonAlphabetic {
            word: word.to_string(),
            ch,
        });
    }
    Ok(decompose(word, lexicon))
}

/// Generate, validate and select over one stripping result.
fn search(state: &StrippingState, lexicon: &Lexicon) -> Option<Decomposition> {
    debug!(
        preposition = ?state.preposition,
        prefixes = ?state.prefixes,
        core = %state.remainder,
        suffixes = ?state.suffixes,
        "stripped"
    );

    let validator = RootValidator::for_lexicon(lexicon);
    let candidates = candidate::generate(&state.remainder, &state.prefixes, &state.suffixes);
    let total = candidates.len();

    let valid = candidates.into_iter().filter(|c| {
        let ok = validator.is_valid(c);
        trace!(
            root = %c.reconstructed_root,
            prefixes = c.reattached_prefix_count,
            suffixes = c.reattached_suffix_count,
            valid = ok,
            "candidate"
        );
        ok
    });

    let best = select::select(valid)?;
    debug!(
        root = %best.reconstructed_root,
        root_length = best.root_length,
        affix_count = best.affix_count,
        candidates = total,
        "selected"
    );
    Some(best.into_decomposition(state.preposition.clone()))
}

/// Like [`search`], but accepts roots that split into several dictionary
/// roots. Candidates are ranked the same way.
fn compound_search(state: &StrippingState, lexicon: &Lexicon) -> Option<Decomposition> {
    let candidates = candidate::generate(&state.remainder, &state.prefixes, &state.suffixes);
    let (best, parts) = candidates
        .into_iter()
        .filter_map(|c| {
            let parts = compound::split_compound(&c.reconstructed_root, lexicon)?;
            Some((c, parts))
        })
        .min_by(|(a, _), (b, _)| select::compare(a, b))?;
    debug!(root = %best.reconstructed_root, parts = ?parts, "selected compound");

    let mut found = best.into_decomposition(state.preposition.clone());
    found.compound = parts;
    Some(found)
}
