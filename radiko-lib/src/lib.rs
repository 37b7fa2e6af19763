pub mod types;
pub mod error;
pub mod lexicon;
pub mod affix;
pub mod candidate;
pub mod validate;
pub mod compound;
pub mod select;
pub mod decompose;
pub mod ending;
pub mod text;
pub mod output;

pub use decompose::{decompose, try_decompose};
pub use ending::analyze_word;
pub use error::{DecomposeError, LexiconError};
pub use lexicon::{AmbiguousRoot, Lexicon, RootDictionary};
pub use text::analyze_text;
pub use types::{AffixList, Decomposition, TextAnalysis, WordAnalysis};
