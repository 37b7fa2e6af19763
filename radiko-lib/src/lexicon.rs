use std::collections::HashSet;
use std::io::Read;

use crate::error::LexiconError;
use crate::types::{AffixList, AmbiguousEntry, EmbeddedData};

const EMBEDDED_JSON: &[u8] = include_bytes!(concat!(env!("OUT_DIR"), "/lexicon.json"));

/// Valid roots plus the cores accepted by exception.
#[derive(Debug, Clone, Default)]
pub struct RootDictionary {
    roots: HashSet<String>,
    immune: HashSet<String>,
}

impl RootDictionary {
    pub fn new<R, I, S, T>(roots: R, immune: I) -> Self
    where
        R: IntoIterator<Item = S>,
        I: IntoIterator<Item = T>,
        S: Into<String>,
        T: Into<String>,
    {
        Self {
            roots: roots.into_iter().map(Into::into).collect(),
            immune: immune.into_iter().map(Into::into).collect(),
        }
    }

    /// True if `core` is a listed root or an immune core.
    pub fn contains(&self, core: &str) -> bool {
        self.roots.contains(core) || self.immune.contains(core)
    }

    pub fn is_immune(&self, core: &str) -> bool {
        self.immune.contains(core)
    }

    pub fn len(&self) -> usize {
        self.roots.len() + self.immune.difference(&self.roots).count()
    }

    pub fn is_empty(&self) -> bool {
        self.roots.is_empty() && self.immune.is_empty()
    }
}

/// A word that is both a valid root and a prefix (Esperanto `ne`).
///
/// As a root it may only be followed by nothing, or by exactly one suffix
/// from `allowed_suffixes`; anywhere else it has to be read as a prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AmbiguousRoot {
    word: String,
    allowed_suffixes: HashSet<String>,
}

impl AmbiguousRoot {
    pub fn new<I, S>(word: impl Into<String>, allowed_suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            word: word.into(),
            allowed_suffixes: allowed_suffixes.into_iter().map(Into::into).collect(),
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    /// Whether the word may stand as a root given the suffixes left after it.
    pub fn permits(&self, remaining_suffixes: &[String]) -> bool {
        match remaining_suffixes {
            [] => true,
            [only] => self.allowed_suffixes.contains(only),
            _ => false,
        }
    }
}

impl TryFrom<AmbiguousEntry> for AmbiguousRoot {
    type Error = LexiconError;

    fn try_from(entry: AmbiguousEntry) -> Result<Self, Self::Error> {
        if entry.word.is_empty() {
            return Err(LexiconError::EmptyAmbiguousWord);
        }
        Ok(Self::new(entry.word, entry.allowed_suffixes))
    }
}

/// Everything a decomposition consults: the affix lists, the root dictionary
/// and the ambiguous-root rules. Immutable once built and safe to share
/// across threads by reference.
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    prepositions: AffixList,
    prefixes: AffixList,
    suffixes: AffixList,
    dictionary: RootDictionary,
    ambiguous: Vec<AmbiguousRoot>,
    particles: HashSet<String>,
    verb_suffixes: HashSet<String>,
}

impl Lexicon {
    pub fn new(
        prepositions: AffixList,
        prefixes: AffixList,
        suffixes: AffixList,
        dictionary: RootDictionary,
    ) -> Self {
        Self {
            prepositions,
            prefixes,
            suffixes,
            dictionary,
            ..Self::default()
        }
    }

    pub fn with_ambiguous(mut self, rule: AmbiguousRoot) -> Self {
        self.ambiguous.push(rule);
        self
    }

    /// Words that take no grammatical ending. Like [`Lexicon::from_data`],
    /// this also accepts them as cores.
    pub fn with_particles<I, S>(mut self, particles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for particle in particles {
            let particle = particle.into();
            self.dictionary.immune.insert(particle.clone());
            self.particles.insert(particle);
        }
        self
    }

    pub fn with_verb_suffixes<I, S>(mut self, suffixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.verb_suffixes.extend(suffixes.into_iter().map(Into::into));
        self
    }

    /// Load the Esperanto lexicon compiled in from `data/`.
    pub fn embedded() -> Self {
        let data: EmbeddedData =
            serde_json::from_slice(EMBEDDED_JSON).expect("embedded lexicon JSON is invalid");
        Self::from_data(data).expect("embedded lexicon is invalid")
    }

    pub fn from_json(json: &str) -> Result<Self, LexiconError> {
        let data: EmbeddedData = serde_json::from_str(json)?;
        Self::from_data(data)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, LexiconError> {
        let data: EmbeddedData = serde_json::from_reader(reader)?;
        Self::from_data(data)
    }

    /// Build a lexicon from raw lists. Particles are valid cores, so they
    /// join the immune set of the root dictionary.
    pub fn from_data(data: EmbeddedData) -> Result<Self, LexiconError> {
        let ambiguous = data
            .ambiguous
            .into_iter()
            .map(AmbiguousRoot::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        let immune = data.immune.into_iter().chain(data.particles.iter().cloned());
        let dictionary = RootDictionary::new(data.roots, immune);

        Ok(Self {
            prepositions: AffixList::new(data.prepositions),
            prefixes: AffixList::new(data.prefixes),
            suffixes: AffixList::new(data.suffixes),
            dictionary,
            ambiguous,
            particles: data.particles.into_iter().collect(),
            verb_suffixes: data.verb_suffixes.into_iter().collect(),
        })
    }

    pub fn prepositions(&self) -> &AffixList {
        &self.prepositions
    }

    pub fn prefixes(&self) -> &AffixList {
        &self.prefixes
    }

    pub fn suffixes(&self) -> &AffixList {
        &self.suffixes
    }

    pub fn dictionary(&self) -> &RootDictionary {
        &self.dictionary
    }

    pub fn ambiguous(&self) -> &[AmbiguousRoot] {
        &self.ambiguous
    }

    pub fn is_particle(&self, word: &str) -> bool {
        self.particles.contains(word)
    }

    pub fn is_verb_suffix(&self, suffix: &str) -> bool {
        self.verb_suffixes.contains(suffix)
    }
}
