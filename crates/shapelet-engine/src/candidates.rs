//! Candidate Counting

/// Shortest subsequence length that contributes an allocation weight
pub const MIN_WEIGHTED_LENGTH: usize = 3;

/// Number of (series, offset) candidates of length `l` in `n` series of length `m`.
///
/// `l` is clamped to `m`, so the full-length window still counts once per series.
pub fn candidate_count(n: usize, m: usize, l: usize) -> usize {
    assert!(l > 0, "The window length has to be greater than zero");
    let l = l.min(m);
    n * (m - l + 1)
}

/// Allocation weights for lengths `MIN_WEIGHTED_LENGTH..=m`, one per bucket
pub fn length_weights(n: usize, m: usize) -> Vec<usize> {
    (MIN_WEIGHTED_LENGTH..=m)
        .map(|l| candidate_count(n, m, l))
        .collect()
}
