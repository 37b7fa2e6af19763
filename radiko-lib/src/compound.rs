// Compound cores: two or more roots written together, optionally joined by a
// linking vowel ({vapor}+{ŝip}, {puŝ}+{o}+{ŝip}, {mult}+{e}+{hom}).

use crate::lexicon::Lexicon;

const LINKING_VOWELS: &[char] = &['o', 'a', 'e', 'i'];

/// Shortest root accepted inside a compound, in characters. Anything shorter
/// is a linking vowel.
const MIN_ROOT_CHARS: usize = 2;

/// Split `core` into dictionary roots, keeping linking vowels as separate
/// one-letter parts. `None` unless at least two roots are found.
///
/// The split with the fewest roots wins; among those, the one found first
/// with the longest leading root. Ambiguous root/prefix words (`ne`) never
/// stand as part of a compound.
pub fn split_compound(core: &str, lexicon: &Lexicon) -> Option<Vec<String>> {
    let parts = split_from(core, lexicon, false)?;
    Some(parts.into_iter().map(str::to_string).collect())
}

fn split_from<'w>(rest: &'w str, lexicon: &Lexicon, whole: bool) -> Option<Vec<&'w str>> {
    if whole && is_root(rest, lexicon) {
        return Some(vec![rest]);
    }

    let mut best: Option<Vec<&str>> = None;
    let boundaries: Vec<usize> = rest
        .char_indices()
        .skip(MIN_ROOT_CHARS)
        .map(|(i, _)| i)
        .collect();
    for &i in boundaries.iter().rev() {
        let (head, tail) = rest.split_at(i);
        if !is_root(head, lexicon) {
            continue;
        }
        let joined = split_from(tail, lexicon, true);
        let linked = linked(tail, lexicon);
        let found = match (joined, linked) {
            (Some(a), Some(b)) if root_count(&b) < root_count(&a) => Some(b),
            (Some(a), _) => Some(a),
            (None, b) => b,
        };
        if let Some(mut parts) = found {
            parts.insert(0, head);
            if best.as_ref().map_or(true, |b| root_count(&parts) < root_count(b)) {
                best = Some(parts);
            }
        }
    }
    best
}

/// `tail` read as a linking vowel followed by more roots.
fn linked<'w>(tail: &'w str, lexicon: &Lexicon) -> Option<Vec<&'w str>> {
    let vowel = tail.chars().next().filter(|c| LINKING_VOWELS.contains(c))?;
    let (link, rest) = tail.split_at(vowel.len_utf8());
    let mut parts = split_from(rest, lexicon, true)?;
    parts.insert(0, link);
    Some(parts)
}

fn is_root(part: &str, lexicon: &Lexicon) -> bool {
    part.chars().count() >= MIN_ROOT_CHARS
        && lexicon.dictionary().contains(part)
        && !lexicon.ambiguous().iter().any(|rule| rule.word() == part)
}

fn root_count(parts: &[&str]) -> usize {
    parts
        .iter()
        .filter(|p| p.chars().count() >= MIN_ROOT_CHARS)
        .count()
}
