use crate::lexicon::{AmbiguousRoot, Lexicon, RootDictionary};
use crate::types::Candidate;

/// Decides whether a reconstructed root is acceptable for one candidate.
///
/// Membership in the dictionary (roots or immune cores) is the whole test,
/// except for ambiguous root/prefix words: those are gated on the suffixes
/// left over in the same candidate.
#[derive(Debug, Clone, Copy)]
pub struct RootValidator<'a> {
    dictionary: &'a RootDictionary,
    ambiguous: &'a [AmbiguousRoot],
}

impl<'a> RootValidator<'a> {
    pub fn new(dictionary: &'a RootDictionary, ambiguous: &'a [AmbiguousRoot]) -> Self {
        Self {
            dictionary,
            ambiguous,
        }
    }

    pub fn for_lexicon(lexicon: &'a Lexicon) -> Self {
        Self::new(lexicon.dictionary(), lexicon.ambiguous())
    }

    pub fn is_valid(&self, candidate: &Candidate<'_>) -> bool {
        self.accepts(
            &candidate.reconstructed_root,
            candidate.remaining_prefixes,
            candidate.remaining_suffixes,
        )
    }

    /// `remaining_prefixes` is part of the contract but no current rule looks
    /// at it.
    pub fn accepts(
        &self,
        root: &str,
        _remaining_prefixes: &[String],
        remaining_suffixes: &[String],
    ) -> bool {
        if root.is_empty() || !self.dictionary.contains(root) {
            return false;
        }
        match self.ambiguous.iter().find(|rule| rule.word() == root) {
            Some(rule) => rule.permits(remaining_suffixes),
            None => true,
        }
    }
}
