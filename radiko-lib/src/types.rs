use serde::{Deserialize, Serialize};

/// Which end of a word an affix is matched against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Boundary {
    Start,
    End,
}

/// Role of a segment within a decomposed word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MorphemeRole {
    Preposition,
    Prefix,
    Root,
    /// Vowel joining two roots of a compound ({puŝ-o-ŝip}).
    Linking,
    Suffix,
}

/// Known affix strings for one boundary, sorted longest-first.
///
/// Construction sorts (stable, then lexicographically among equal lengths)
/// and drops empty and duplicate entries, so a scan in list order always
/// finds the longest literal match first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct AffixList(Vec<String>);

impl AffixList {
    pub fn new<I, S>(affixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut list: Vec<String> = affixes
            .into_iter()
            .map(Into::into)
            .filter(|a| !a.is_empty())
            .collect();
        list.sort_by(|a, b| {
            b.chars()
                .count()
                .cmp(&a.chars().count())
                .then_with(|| a.cmp(b))
        });
        list.dedup();
        Self(list)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn contains(&self, affix: &str) -> bool {
        self.0.iter().any(|a| a == affix)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<String>> for AffixList {
    fn from(affixes: Vec<String>) -> Self {
        Self::new(affixes)
    }
}

impl From<AffixList> for Vec<String> {
    fn from(list: AffixList) -> Self {
        list.0
    }
}

/// Result of the strip phase.
///
/// `prefixes` are in word order (outermost first). `suffixes` are in word
/// order too, which puts the one adjacent to the core first.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StrippingState {
    /// What is left between the stripped prefixes and suffixes. May be empty.
    pub remainder: String,
    pub preposition: Option<String>,
    pub prefixes: Vec<String>,
    pub suffixes: Vec<String>,
}

impl StrippingState {
    /// A state with nothing stripped yet.
    pub fn unstripped(word: &str) -> Self {
        Self {
            remainder: word.to_string(),
            ..Self::default()
        }
    }
}

/// One hypothesis for how many stripped affixes go back onto the core.
///
/// The remaining affixes borrow from the [`StrippingState`] they came from:
/// remaining prefixes are always a leading slice of the stripped prefixes and
/// remaining suffixes a trailing slice of the stripped suffixes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate<'a> {
    pub reattached_prefix_count: usize,
    pub reattached_suffix_count: usize,
    pub reconstructed_root: String,
    pub remaining_prefixes: &'a [String],
    pub remaining_suffixes: &'a [String],
    /// Length of `reconstructed_root` in characters.
    pub root_length: usize,
    /// Number of affixes left outside the root.
    pub affix_count: usize,
}

impl Candidate<'_> {
    pub fn into_decomposition(self, preposition: Option<String>) -> Decomposition {
        Decomposition {
            preposition,
            prefixes: self.remaining_prefixes.to_vec(),
            root: self.reconstructed_root,
            suffixes: self.remaining_suffixes.to_vec(),
            compound: vec![],
            resolved: true,
        }
    }
}

/// Final segmentation of a word.
///
/// `preposition + prefixes + root + suffixes` always reproduces the input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preposition: Option<String>,
    pub prefixes: Vec<String>,
    pub root: String,
    pub suffixes: Vec<String>,
    /// Roots and linking vowels of a compound root, in word order; they
    /// concatenate to `root`. Empty when the root is a single dictionary
    /// entry.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub compound: Vec<String>,
    /// False when no candidate validated and `root` is the unresolved
    /// remainder.
    pub resolved: bool,
}

impl Decomposition {
    /// The fallback when no candidate validates: the remainder after the
    /// preposition is reported whole.
    pub fn unresolved(preposition: Option<String>, remainder: &str) -> Self {
        Self {
            preposition,
            prefixes: vec![],
            root: remainder.to_string(),
            suffixes: vec![],
            compound: vec![],
            resolved: false,
        }
    }

    pub fn is_compound(&self) -> bool {
        !self.compound.is_empty()
    }

    pub fn is_empty(&self) -> bool {
        self.preposition.is_none()
            && self.prefixes.is_empty()
            && self.root.is_empty()
            && self.suffixes.is_empty()
    }

    /// Concatenate all segments back into the surface form.
    pub fn surface(&self) -> String {
        let mut out = String::new();
        if let Some(prep) = &self.preposition {
            out.push_str(prep);
        }
        for p in &self.prefixes {
            out.push_str(p);
        }
        out.push_str(&self.root);
        for s in &self.suffixes {
            out.push_str(s);
        }
        out
    }

    /// Segments in word order, with dash notation for bound affixes
    /// (`ne-`, `-ig`).
    pub fn components(&self) -> Vec<Component> {
        let mut out = Vec::new();
        if let Some(prep) = &self.preposition {
            out.push(Component {
                text: prep.clone(),
                entry_name: prep.clone(),
                role: MorphemeRole::Preposition,
            });
        }
        out.extend(self.prefixes.iter().map(|p| Component {
            text: p.clone(),
            entry_name: format!("{p}-"),
            role: MorphemeRole::Prefix,
        }));
        if self.is_compound() {
            out.extend(self.compound.iter().map(|part| {
                let role = if part.chars().count() == 1 {
                    MorphemeRole::Linking
                } else {
                    MorphemeRole::Root
                };
                Component {
                    text: part.clone(),
                    entry_name: part.clone(),
                    role,
                }
            }));
        } else if !self.root.is_empty() {
            out.push(Component {
                text: self.root.clone(),
                entry_name: self.root.clone(),
                role: MorphemeRole::Root,
            });
        }
        out.extend(self.suffixes.iter().map(|s| Component {
            text: s.clone(),
            entry_name: format!("-{s}"),
            role: MorphemeRole::Suffix,
        }));
        out
    }
}

/// A single segment of a decomposition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Component {
    /// Surface text (e.g. `ne`, `ig`).
    pub text: String,
    /// Dash notation (e.g. `ne-`, `-ig`).
    pub entry_name: String,
    pub role: MorphemeRole,
}

/// Grammatical ending split off a full word before decomposition.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ending {
    /// Part-of-speech or verb ending (`o`, `a`, `e`, `i`, `u`, `as`, `is`,
    /// `os`, `us`), empty when absent.
    pub vowel: String,
    pub plural: bool,
    pub accusative: bool,
    /// Exact text removed from the end of the word.
    pub surface: String,
}

/// Decomposition of a full word, ending included.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordAnalysis {
    pub word: String,
    pub decomposition: Decomposition,
    pub ending: Ending,
    /// Dictionary form of the root (e.g. `kompreni` for `nekompreneble`), or
    /// `None` when the root did not validate.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub headword: Option<String>,
}

/// Analyses for every word of an input line.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextAnalysis {
    pub input: String,
    pub words: Vec<WordAnalysis>,
}

/// Lexicon data as embedded by build.rs or loaded from JSON.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmbeddedData {
    #[serde(default)]
    pub prepositions: Vec<String>,
    #[serde(default)]
    pub prefixes: Vec<String>,
    #[serde(default)]
    pub suffixes: Vec<String>,
    #[serde(default)]
    pub roots: Vec<String>,
    /// Cores accepted by exception, even when absent from `roots`.
    #[serde(default)]
    pub immune: Vec<String>,
    /// Little words that take no ending; also accepted as cores.
    #[serde(default)]
    pub particles: Vec<String>,
    #[serde(default)]
    pub verb_suffixes: Vec<String>,
    #[serde(default)]
    pub ambiguous: Vec<AmbiguousEntry>,
}

/// A word that is both a root and a prefix, with the suffixes that let it
/// stand as a root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmbiguousEntry {
    pub word: String,
    #[serde(default)]
    pub allowed_suffixes: Vec<String>,
}
