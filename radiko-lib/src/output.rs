// Output formatting for decompositions.

use crate::types::*;

/// Join all segments with `+`, e.g. `en+sum+ig`.
pub fn to_plus_notation(d: &Decomposition) -> String {
    d.components()
        .iter()
        .map(|c| c.text.as_str())
        .collect::<Vec<_>>()
        .join("+")
}

/// Convert a decomposition to bracketed component format.
///
/// Format:
///   Preposition: `{en:prep}`
///   Prefixes:    `{ne-:pref}` (trailing dash)
///   Root:        `{ebl:root}` (no dash)
///   Linking:     `{o:link}` (between compound roots)
///   Suffixes:    `{-ig:suff}` (leading dash)
pub fn to_bracketed(d: &Decomposition) -> String {
    d.components()
        .iter()
        .map(|c| {
            let name = &c.entry_name;
            let tag = role_tag(c.role);
            format!("{{{name}:{tag}}}")
        })
        .collect::<Vec<_>>()
        .join(", ")
}

fn role_tag(role: MorphemeRole) -> &'static str {
    match role {
        MorphemeRole::Preposition => "prep",
        MorphemeRole::Prefix => "pref",
        MorphemeRole::Root => "root",
        MorphemeRole::Linking => "link",
        MorphemeRole::Suffix => "suff",
    }
}

/// One-line summary: `word = parts+ending`, optionally followed by the
/// headword lookup result.
///
/// ```text
/// parolanto = parol+ant+o
/// nekompreneble = ne+kompren+ebl+e [lookup: kompreni | FOUND]
/// ksplo = kspl+o [lookup: ksplo | NOT FOUND]
/// ```
pub fn format_analysis(a: &WordAnalysis, verify: bool) -> String {
    let mut breakdown = to_plus_notation(&a.decomposition);
    if !a.ending.is_empty() {
        if !breakdown.is_empty() {
            breakdown.push('+');
        }
        breakdown.push_str(&a.ending.surface);
    }

    let mut out = format!("{} = {breakdown}", a.word);
    if verify {
        match &a.headword {
            Some(headword) => out.push_str(&format!(" [lookup: {headword} | FOUND]")),
            None => out.push_str(&format!(" [lookup: {} | NOT FOUND]", a.word)),
        }
    }
    out
}
