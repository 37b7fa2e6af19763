// Regression tests for known decompositions against the built-in lexicon.

use radiko_lib::output::{to_bracketed, to_plus_notation};
use radiko_lib::{analyze_text, decompose, Decomposition, Lexicon};

fn lexicon() -> Lexicon {
    Lexicon::embedded()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn assert_parts(d: &Decomposition, prefixes: &[&str], root: &str, suffixes: &[&str]) {
    assert_eq!(d.prefixes, strings(prefixes), "prefixes of {d:?}");
    assert_eq!(d.root, root, "root of {d:?}");
    assert_eq!(d.suffixes, strings(suffixes), "suffixes of {d:?}");
}

#[test]
fn ekvilibrigit_keeps_longest_root() {
    let d = decompose("ekvilibrigit", &lexicon());
    assert_eq!(d.preposition, None);
    assert_parts(&d, &[], "ekvilibr", &["ig", "it"]);
}

#[test]
fn neig_treats_ne_as_root() {
    let d = decompose("neig", &lexicon());
    assert_eq!(d.preposition, None);
    assert_parts(&d, &[], "ne", &["ig"]);
}

#[test]
fn neul_treats_ne_as_root() {
    assert_parts(&decompose("neul", &lexicon()), &[], "ne", &["ul"]);
}

#[test]
fn neebl_treats_ne_as_prefix() {
    let d = decompose("neebl", &lexicon());
    assert_eq!(d.preposition, None);
    assert_parts(&d, &["ne"], "ebl", &[]);
}

#[test]
fn neind_treats_ne_as_prefix() {
    assert_parts(&decompose("neind", &lexicon()), &["ne"], "ind", &[]);
}

#[test]
fn unknown_word_falls_back_whole() {
    let d = decompose("xkcdq", &lexicon());
    assert!(!d.resolved);
    assert_eq!(d.preposition, None);
    assert_parts(&d, &[], "xkcdq", &[]);
}

#[test]
fn ensumig_separates_preposition() {
    let d = decompose("ensumig", &lexicon());
    assert_eq!(d.preposition.as_deref(), Some("en"));
    assert_parts(&d, &[], "sum", &["ig"]);
}

#[test]
fn ensumigit_keeps_suffix_order() {
    let d = decompose("ensumigit", &lexicon());
    assert_eq!(d.preposition.as_deref(), Some("en"));
    assert_parts(&d, &[], "sum", &["ig", "it"]);
}

#[test]
fn multiple_prefixes_in_word_order() {
    assert_parts(&decompose("malnedir", &lexicon()), &["mal", "ne"], "dir", &[]);
}

#[test]
fn multiple_suffixes_in_word_order() {
    assert_parts(&decompose("paroligit", &lexicon()), &[], "parol", &["ig", "it"]);
    assert_parts(&decompose("malsanulej", &lexicon()), &["mal"], "san", &["ul", "ej"]);
}

#[test]
fn suffix_lookalike_reattached() {
    // {kat} ends in {-at}, {okul} in {-ul}; both are whole roots.
    assert_parts(&decompose("kat", &lexicon()), &[], "kat", &[]);
    assert_parts(&decompose("okul", &lexicon()), &[], "okul", &[]);
}

#[test]
fn prefix_lookalike_reattached() {
    assert_parts(&decompose("ekip", &lexicon()), &[], "ekip", &[]);
    assert_parts(&decompose("disciplin", &lexicon()), &[], "disciplin", &[]);
    assert_parts(&decompose("nederland", &lexicon()), &[], "nederland", &[]);
}

#[test]
fn preposition_lookalike_retried_whole() {
    for word in ["dezert", "elektr", "fort"] {
        let d = decompose(word, &lexicon());
        assert_eq!(d.preposition, None, "{word} should not lose a preposition");
        assert_parts(&d, &[], word, &[]);
    }
}

#[test]
fn preposition_used_as_root() {
    let d = decompose("forig", &lexicon());
    assert_eq!(d.preposition, None);
    assert_parts(&d, &[], "for", &["ig"]);
}

#[test]
fn compounds_split_into_roots() {
    let cases: &[(&str, &[&str])] = &[
        ("vaporŝip", &["vapor", "ŝip"]),
        ("bonhumor", &["bon", "humor"]),
        ("dikfingr", &["dik", "fingr"]),
        ("ruĝfarb", &["ruĝ", "farb"]),
        ("bluokul", &["blu", "okul"]),
        ("laŭtleg", &["laŭt", "leg"]),
    ];
    for (word, parts) in cases {
        let d = decompose(word, &lexicon());
        assert!(d.resolved, "{word} should resolve");
        assert_eq!(d.preposition, None, "{word}");
        assert_parts(&d, &[], word, &[]);
        assert_eq!(d.compound, strings(parts), "{word}");
    }
}

#[test]
fn compounds_with_linking_vowel() {
    let cases: &[(&str, &[&str])] = &[
        ("puŝoŝip", &["puŝ", "o", "ŝip"]),
        ("lastatemp", &["last", "a", "temp"]),
        ("pagipov", &["pag", "i", "pov"]),
        ("pagopov", &["pag", "o", "pov"]),
        ("multehom", &["mult", "e", "hom"]),
        ("multekost", &["mult", "e", "kost"]),
    ];
    for (word, parts) in cases {
        let d = decompose(word, &lexicon());
        assert_eq!(d.compound, strings(parts), "{word}");
        assert_eq!(to_plus_notation(&d), parts.join("+"));
    }
}

#[test]
fn simple_root_is_not_compound() {
    let d = decompose("parol", &lexicon());
    assert!(d.compound.is_empty());
    assert_parts(&d, &[], "parol", &[]);
}

#[test]
fn hyphenated_word_analysed_per_part() {
    let parsed = analyze_text("bon-humora", &lexicon());
    let roots: Vec<&str> = parsed
        .words
        .iter()
        .map(|a| a.decomposition.root.as_str())
        .collect();
    assert_eq!(roots, vec!["bon", "humor"]);
    assert!(parsed.words.iter().all(|a| a.decomposition.resolved));
}

#[test]
fn empty_input_is_empty_decomposition() {
    assert!(decompose("", &lexicon()).is_empty());
}

#[test]
fn allow_set_is_configurable() {
    let json = r#"{
        "prefixes": ["ne"],
        "suffixes": ["ig", "ul", "et"],
        "immune": ["ne"],
        "ambiguous": [{"word": "ne", "allowed_suffixes": ["ig", "ul", "et"]}]
    }"#;
    let lex = Lexicon::from_json(json).unwrap();
    assert_parts(&decompose("neet", &lex), &[], "ne", &["et"]);
    // The built-in lexicon does not allow {-et} after {ne}.
    assert!(!decompose("neet", &lexicon()).resolved);
}

#[test]
fn shared_lexicon_across_threads() {
    let lex = lexicon();
    let words = ["ekvilibrigit", "neig", "neebl", "ensumig", "malsanulej"];
    let expected: Vec<Decomposition> = words.iter().map(|w| decompose(w, &lex)).collect();

    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| words.iter().map(|w| decompose(w, &lex)).collect::<Vec<_>>()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn text_bracketed() {
    let parsed = analyze_text("Mi neigas, ke la ensumigo malsanulejon.", &lexicon());
    let bracketed: Vec<String> = parsed
        .words
        .iter()
        .map(|w| to_bracketed(&w.decomposition))
        .collect();
    assert_eq!(bracketed[1], "{ne:root}, {-ig:suff}");
    assert_eq!(bracketed[4], "{en:prep}, {sum:root}, {-ig:suff}");
    assert_eq!(
        to_plus_notation(&parsed.words[5].decomposition),
        "mal+san+ul+ej"
    );
    assert_eq!(parsed.words[5].ending.surface, "on");
}
