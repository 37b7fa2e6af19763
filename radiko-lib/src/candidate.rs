use crate::types::Candidate;

/// Enumerate every way to put stripped affixes back onto `core`.
///
/// Prefixes are reattached from the innermost end (the last `p` stripped),
/// suffixes from the innermost end too (the first `s` stripped), for every
/// `p` in `0..=prefixes.len()` and `s` in `0..=suffixes.len()`. Candidates
/// come out with `p` in the outer loop and `s` in the inner loop, both
/// ascending; selection relies on that order for residual ties.
pub fn generate<'a>(core: &str, prefixes: &'a [String], suffixes: &'a [String]) -> Vec<Candidate<'a>> {
    let mut out = Vec::with_capacity((prefixes.len() + 1) * (suffixes.len() + 1));

    for p in 0..=prefixes.len() {
        let (remaining_prefixes, reattached_prefixes) = prefixes.split_at(prefixes.len() - p);
        for s in 0..=suffixes.len() {
            let (reattached_suffixes, remaining_suffixes) = suffixes.split_at(s);

            let mut root = reattached_prefixes.concat();
            root.push_str(core);
            root.push_str(&reattached_suffixes.concat());

            out.push(Candidate {
                reattached_prefix_count: p,
                reattached_suffix_count: s,
                root_length: root.chars().count(),
                reconstructed_root: root,
                remaining_prefixes,
                remaining_suffixes,
                affix_count: remaining_prefixes.len() + remaining_suffixes.len(),
            });
        }
    }

    out
}
