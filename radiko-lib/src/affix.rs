// Greedy affix stripping.
//
// Each stripper is a pure function from one StrippingState to the next:
//   preposition (at most one) -> prefixes (left to right) -> suffixes (right to left)

use crate::lexicon::Lexicon;
use crate::types::{AffixList, Boundary, StrippingState};

/// What a strip step may leave behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Remainder {
    /// The affix may not be the whole word.
    NonEmpty,
    /// The affix may consume everything that is left.
    MayBeEmpty,
}

/// Find the longest affix in `affixes` that sits at `boundary` of `word`.
///
/// The list is scanned in order (longest first) and the first literal match
/// decides: if stripping it would violate `remainder`, nothing matches.
pub fn match_affix<'a>(
    word: &str,
    affixes: &'a AffixList,
    boundary: Boundary,
    remainder: Remainder,
) -> Option<&'a str> {
    let (affix, rest) = affixes.iter().find_map(|affix| {
        let rest = match boundary {
            Boundary::Start => word.strip_prefix(affix),
            Boundary::End => word.strip_suffix(affix),
        }?;
        Some((affix, rest))
    })?;

    if rest.is_empty() && remainder == Remainder::NonEmpty {
        return None;
    }
    Some(affix)
}

/// Strip at most one leading preposition. A preposition is never stripped
/// from itself, so `en` alone stays whole.
pub fn strip_preposition(word: &str, prepositions: &AffixList) -> StrippingState {
    match match_affix(word, prepositions, Boundary::Start, Remainder::NonEmpty) {
        Some(prep) => StrippingState {
            remainder: word[prep.len()..].to_string(),
            preposition: Some(prep.to_string()),
            ..StrippingState::default()
        },
        None => StrippingState::unstripped(word),
    }
}

/// Strip leading prefixes until none match. Each new prefix sits inside the
/// ones already stripped, so it is appended.
pub fn strip_prefixes(state: StrippingState, prefixes: &AffixList) -> StrippingState {
    let StrippingState {
        remainder,
        preposition,
        prefixes: mut stripped,
        suffixes,
    } = state;

    let mut rest = remainder.as_str();
    while let Some(prefix) = match_affix(rest, prefixes, Boundary::Start, Remainder::MayBeEmpty) {
        stripped.push(prefix.to_string());
        rest = &rest[prefix.len()..];
    }

    StrippingState {
        remainder: rest.to_string(),
        preposition,
        prefixes: stripped,
        suffixes,
    }
}

/// Strip trailing suffixes until none match. Stripping runs from the right
/// edge inward, so the collected suffixes are reversed into word order and
/// placed in front of any stripped earlier.
pub fn strip_suffixes(state: StrippingState, suffixes: &AffixList) -> StrippingState {
    let StrippingState {
        remainder,
        preposition,
        prefixes,
        suffixes: outer,
    } = state;

    let mut rest = remainder.as_str();
    let mut stripped = Vec::new();
    while let Some(suffix) = match_affix(rest, suffixes, Boundary::End, Remainder::MayBeEmpty) {
        stripped.push(suffix.to_string());
        rest = &rest[..rest.len() - suffix.len()];
    }
    stripped.reverse();
    stripped.extend(outer);

    StrippingState {
        remainder: rest.to_string(),
        preposition,
        prefixes,
        suffixes: stripped,
    }
}

/// Run the full strip phase. With `with_preposition` false the word is
/// treated as having no preposition at all.
pub fn strip_all(word: &str, lexicon: &Lexicon, with_preposition: bool) -> StrippingState {
    let state = if with_preposition {
        strip_preposition(word, lexicon.prepositions())
    } else {
        StrippingState::unstripped(word)
    };
    let state = strip_prefixes(state, lexicon.prefixes());
    strip_suffixes(state, lexicon.suffixes())
}
