// Grammatical endings: plural {-j}, accusative {-n}, and the part-of-speech
// or verb ending that closes every content word.

use crate::decompose::decompose;
use crate::lexicon::Lexicon;
use crate::types::{Decomposition, Ending, WordAnalysis};

const VERB_ENDINGS: &[&str] = &["as", "is", "os", "us"];
const VOWEL_ENDINGS: &[&str] = &["o", "a", "e", "i", "u"];

impl Ending {
    pub fn is_empty(&self) -> bool {
        self.surface.is_empty()
    }

    /// True for the infinitive, the imperative and the finite verb endings.
    pub fn is_verbal(&self) -> bool {
        matches!(self.vowel.as_str(), "i" | "u") || VERB_ENDINGS.contains(&self.vowel.as_str())
    }

    /// The ending a dictionary headword carries: `i` for verbs, otherwise
    /// the vowel as written.
    pub fn headword_ending(&self) -> &str {
        if self.is_verbal() {
            "i"
        } else {
            &self.vowel
        }
    }
}

/// Split the grammatical ending off `word`. `stem + ending.surface == word`.
///
/// Particles carry no ending. At least one character is always left in the
/// stem.
pub fn split_ending<'w>(word: &'w str, lexicon: &Lexicon) -> (&'w str, Ending) {
    let mut ending = Ending::default();
    if lexicon.is_particle(word) {
        return (word, ending);
    }

    let mut stem = word;
    if let Some(rest) = stem.strip_suffix("jn").filter(|r| !r.is_empty()) {
        ending.plural = true;
        ending.accusative = true;
        stem = rest;
    } else if let Some(rest) = stem.strip_suffix('n').filter(|r| !r.is_empty()) {
        ending.accusative = true;
        stem = rest;
    } else if let Some(rest) = stem.strip_suffix('j').filter(|r| !r.is_empty()) {
        ending.plural = true;
        stem = rest;
    }

    // {kiun} is {kiu} + {-n}: a particle may still take the accusative.
    if !lexicon.is_particle(stem) {
        let vowel = VERB_ENDINGS
            .iter()
            .chain(VOWEL_ENDINGS)
            .find(|e| stem.strip_suffix(**e).is_some_and(|r| !r.is_empty()));
        if let Some(vowel) = vowel {
            stem = &stem[..stem.len() - vowel.len()];
            ending.vowel = vowel.to_string();
        }
    }

    ending.surface = word[stem.len()..].to_string();
    (stem, ending)
}

/// Split the ending off a full word and decompose what is left.
pub fn analyze_word(word: &str, lexicon: &Lexicon) -> WordAnalysis {
    let (stem, ending) = split_ending(word, lexicon);
    let decomposition = decompose(stem, lexicon);
    let headword = decomposition
        .resolved
        .then(|| headword_for(&decomposition, ending.headword_ending(), lexicon));

    WordAnalysis {
        word: word.to_string(),
        decomposition,
        ending,
        headword,
    }
}

/// Analyse a part of a hyphenated word other than the last (`bon` in
/// `bon-humora`). Such parts usually drop their ending, so the whole part is
/// decomposed first and read as a noun; if no root is found it is analysed
/// as an ordinary word (`nigra` in `nigra-blanka`).
pub fn analyze_leading_part(part: &str, lexicon: &Lexicon) -> WordAnalysis {
    if lexicon.is_particle(part) {
        return analyze_word(part, lexicon);
    }
    let decomposition = decompose(part, lexicon);
    if !decomposition.resolved {
        return analyze_word(part, lexicon);
    }

    let headword = Some(headword_for(&decomposition, "o", lexicon));
    WordAnalysis {
        word: part.to_string(),
        decomposition,
        ending: Ending::default(),
        headword,
    }
}

/// Dictionary form: the root plus `ending`, or plus `i` when the last suffix
/// forms verbs.
fn headword_for(decomposition: &Decomposition, ending: &str, lexicon: &Lexicon) -> String {
    let verb_suffix = decomposition
        .suffixes
        .last()
        .is_some_and(|s| lexicon.is_verb_suffix(s));
    let tail = if verb_suffix { "i" } else { ending };
    format!("{}{}", decomposition.root, tail)
}
