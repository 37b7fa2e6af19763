// Ranking of valid candidates.

use std::cmp::Ordering;

use crate::types::Candidate;

/// Compare two candidates for sorting (best first).
/// Longer root wins; on equal length, more affixes left outside the root wins.
pub fn compare(a: &Candidate<'_>, b: &Candidate<'_>) -> Ordering {
    b.root_length
        .cmp(&a.root_length)
        .then_with(|| b.affix_count.cmp(&a.affix_count))
}

/// Pick the best candidate. Among candidates that compare equal the first
/// one in input order is kept.
pub fn select<'a, I>(valid: I) -> Option<Candidate<'a>>
where
    I: IntoIterator<Item = Candidate<'a>>,
{
    valid.into_iter().min_by(compare)
}
