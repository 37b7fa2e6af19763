// Reads the word lists under data/ and embeds them as JSON at compile time.

use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Serialize)]
struct EmbeddedData {
    prepositions: Vec<String>,
    prefixes: Vec<String>,
    suffixes: Vec<String>,
    roots: Vec<String>,
    immune: Vec<String>,
    particles: Vec<String>,
    verb_suffixes: Vec<String>,
    ambiguous: Vec<AmbiguousRaw>,
}

#[derive(Serialize)]
struct AmbiguousRaw {
    word: String,
    allowed_suffixes: Vec<String>,
}

fn main() {
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap();
    let data_dir = Path::new(&manifest_dir).join("../data");
    let out_dir = std::env::var("OUT_DIR").unwrap();
    let out_path = Path::new(&out_dir).join("lexicon.json");

    let data = EmbeddedData {
        prepositions: read_list(&data_dir, "prepositions.txt"),
        prefixes: read_list(&data_dir, "prefixes.txt"),
        suffixes: read_list(&data_dir, "suffixes.txt"),
        roots: read_list(&data_dir, "roots.txt"),
        immune: read_list(&data_dir, "immune.txt"),
        particles: read_list(&data_dir, "particles.txt"),
        verb_suffixes: read_list(&data_dir, "verb_suffixes.txt"),
        ambiguous: read_list(&data_dir, "ambiguous.txt")
            .iter()
            .map(|line| parse_ambiguous(line))
            .collect(),
    };

    let json = serde_json::to_string(&data).expect("JSON serialization failed");
    fs::write(&out_path, json).expect("cannot write lexicon.json");

    println!("cargo:rerun-if-changed=build.rs");
}

fn data_file(data_dir: &Path, name: &str) -> PathBuf {
    let path = data_dir.join(name);
    println!("cargo:rerun-if-changed={}", path.display());
    path
}

/// Read one entry per line, skipping blank lines and `#` comments.
fn read_list(data_dir: &Path, name: &str) -> Vec<String> {
    let path = data_file(data_dir, name);
    let content = fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("cannot read {}: {e}", path.display()));
    parse_list(&content)
}

fn parse_list(content: &str) -> Vec<String> {
    content
        .lines()
        .map(|l| l.split('#').next().unwrap_or("").trim())
        .filter(|l| !l.is_empty())
        .map(|l| l.to_string())
        .collect()
}

/// Parse `word: suffix suffix ...`.
fn parse_ambiguous(line: &str) -> AmbiguousRaw {
    let (word, rest) = line
        .split_once(':')
        .unwrap_or_else(|| panic!("ambiguous entry without ':' in {line:?}"));
    AmbiguousRaw {
        word: word.trim().to_string(),
        allowed_suffixes: rest.split_whitespace().map(|s| s.to_string()).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_list_skips_comments() {
        let parsed = parse_list("# header\nmal\n\n  ne  # negation\n");
        assert_eq!(parsed, vec!["mal".to_string(), "ne".to_string()]);
    }

    #[test]
    fn test_parse_ambiguous() {
        let raw = parse_ambiguous("ne: ig ul");
        assert_eq!(raw.word, "ne");
        assert_eq!(raw.allowed_suffixes, vec!["ig".to_string(), "ul".to_string()]);
    }
}
