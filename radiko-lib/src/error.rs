use thiserror::Error;

/// Errors raised while building a lexicon from external data.
#[derive(Error, Debug)]
pub enum LexiconError {
    #[error("lexicon JSON is invalid: {0}")]
    Json(#[from] serde_json::Error),

    #[error("cannot read lexicon: {0}")]
    Io(#[from] std::io::Error),

    /// An ambiguous root/prefix entry with an empty word.
    #[error("ambiguous root entry has an empty word")]
    EmptyAmbiguousWord,
}

/// Input rejected by [`try_decompose`](crate::decompose::try_decompose).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecomposeError {
    #[error("cannot decompose an empty word")]
    EmptyWord,

    #[error("word {word:?} contains non-alphabetic character {ch:?}")]
    NonAlphabetic { word: String, ch: char },
}
