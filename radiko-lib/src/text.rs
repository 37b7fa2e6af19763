// Line-level analysis: split into words and analyse each independently.
// Hyphenated words ({bon-humora}) are analysed part by part.

use crate::ending::{analyze_leading_part, analyze_word};
use crate::lexicon::Lexicon;
use crate::types::TextAnalysis;

/// Split on whitespace and trim punctuation from both ends of every token.
/// Tokens that are nothing but punctuation are dropped.
pub fn split_words(input: &str) -> Vec<&str> {
    input
        .split_whitespace()
        .map(|token| token.trim_matches(|c: char| !c.is_alphanumeric()))
        .filter(|token| !token.is_empty())
        .collect()
}

/// Analyse every word of `input`, lowercased. Each part of a hyphenated word
/// gets its own analysis; only the last part is expected to carry an ending.
pub fn analyze_text(input: &str, lexicon: &Lexicon) -> TextAnalysis {
    let mut words = Vec::new();
    for token in split_words(input) {
        let token = token.to_lowercase();
        let parts: Vec<&str> = token.split('-').filter(|p| !p.is_empty()).collect();
        if let Some((last, leading)) = parts.split_last() {
            words.extend(leading.iter().map(|p| analyze_leading_part(p, lexicon)));
            words.push(analyze_word(last, lexicon));
        }
    }
    TextAnalysis {
        input: input.to_string(),
        words,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_strips_punctuation() {
        assert_eq!(
            split_words("unu du bonfaras, kie?"),
            vec!["unu", "du", "bonfaras", "kie"]
        );
    }

    #[test]
    fn test_split_unicode_quotes() {
        assert_eq!(split_words("“Ĉu vi?” — jes."), vec!["Ĉu", "vi", "jes"]);
    }

    #[test]
    fn test_split_elided_article() {
        assert_eq!(split_words("l' ĉambro"), vec!["l", "ĉambro"]);
    }

    #[test]
    fn test_split_keeps_hyphenated_word() {
        assert_eq!(split_words("-- bon-humora!"), vec!["bon-humora"]);
    }

    #[test]
    fn test_analyze_hyphenated_parts() {
        let lex = Lexicon::embedded();
        let parsed = analyze_text("Bon-humora", &lex);
        assert_eq!(parsed.words.len(), 2);
        assert_eq!(parsed.words[0].word, "bon");
        assert_eq!(parsed.words[0].decomposition.root, "bon");
        assert!(parsed.words[0].ending.is_empty());
        assert_eq!(parsed.words[1].word, "humora");
        assert_eq!(parsed.words[1].decomposition.root, "humor");
        assert_eq!(parsed.words[1].ending.vowel, "a");
    }

    #[test]
    fn test_analyze_text_lowercases() {
        let lex = Lexicon::embedded();
        let parsed = analyze_text("Malbona kato.", &lex);
        assert_eq!(parsed.words.len(), 2);
        assert_eq!(parsed.words[0].word, "malbona");
        assert_eq!(parsed.words[0].decomposition.root, "bon");
        assert_eq!(parsed.words[1].decomposition.root, "kat");
    }
}
