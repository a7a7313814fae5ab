//! Length Allocation Planning
//!
//! Spreads the candidate budget over shapelet lengths in proportion to how
//! many candidates each length has, then repairs rounding drift so the
//! allocation sums to the budget exactly.

use crate::candidates::MIN_WEIGHTED_LENGTH;
use crate::error::ShapeletError;
use rand::Rng;
use tracing::debug;

/// Sampling length of the first allocation bucket.
///
/// Bucket `i` is weighted with the candidate count of length `i + 3` but
/// sampled at length `i + 2`.
pub const FIRST_SAMPLED_LENGTH: usize = 2;

/// Total number of shapelets for `n` series, never below one
pub fn candidate_budget(n: usize, keep_candidates_percentage: f64) -> usize {
    let budget = (n as f64 * keep_candidates_percentage) as usize;
    if budget < 1 {
        debug!(
            "Candidate budget for {} series at {} clamped to 1",
            n, keep_candidates_percentage
        );
        return 1;
    }
    budget
}

/// Number of shapelets to draw per length bucket
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LengthAllocation {
    counts: Vec<usize>,
}

impl LengthAllocation {
    /// Allocate `budget` shapelets proportionally to `weights`
    pub fn plan<R: Rng + ?Sized>(
        budget: usize,
        weights: &[usize],
        rng: &mut R,
    ) -> Result<Self, ShapeletError> {
        let total_weight: usize = weights.iter().sum();
        if weights.is_empty() || total_weight == 0 {
            return Err(ShapeletError::SeriesTooShort {
                length: weights.len() + FIRST_SAMPLED_LENGTH,
                minimum: MIN_WEIGHTED_LENGTH,
            });
        }

        let ratio = budget as f64 / total_weight as f64;
        let mut counts: Vec<usize> = weights
            .iter()
            .map(|&c| (ratio * c as f64).round_ties_even() as usize)
            .collect();

        let allocated: usize = counts.iter().sum();
        let buckets = counts.len();

        if allocated < budget {
            let missing = budget - allocated;
            debug!("Distributing {} missing shapelets over {} lengths", missing, buckets);
            for _ in 0..missing {
                counts[rng.gen_range(0..buckets)] += 1;
            }
        } else if allocated > budget {
            let surplus = allocated - budget;
            debug!("Collecting {} surplus shapelets from {} lengths", surplus, buckets);
            for _ in 0..surplus {
                let start = rng.gen_range(0..buckets);
                if let Some(idx) = (0..buckets)
                    .map(|offset| (start + offset) % buckets)
                    .find(|&idx| counts[idx] > 0)
                {
                    counts[idx] -= 1;
                }
            }
        }

        Ok(Self { counts })
    }

    /// Per-bucket counts, bucket `i` sampled at length `i + FIRST_SAMPLED_LENGTH`
    pub fn counts(&self) -> &[usize] {
        &self.counts
    }

    /// Total allocated shapelets
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of length buckets
    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Count for a sampling length, zero outside the allocated range
    pub fn count_for_length(&self, length: usize) -> usize {
        length
            .checked_sub(FIRST_SAMPLED_LENGTH)
            .and_then(|idx| self.counts.get(idx))
            .copied()
            .unwrap_or(0)
    }

    /// `(sampling length, count)` pairs in ascending length order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .map(|(idx, &count)| (idx + FIRST_SAMPLED_LENGTH, count))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::candidates::length_weights;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_budget_truncates_and_clamps() {
        assert_eq!(candidate_budget(5, 0.2), 1);
        assert_eq!(candidate_budget(1, 1.0), 1);
        assert_eq!(candidate_budget(3, 0.1), 1);
        assert_eq!(candidate_budget(100, 0.25), 25);
        assert_eq!(candidate_budget(19, 0.5), 9);
    }

    #[test]
    fn test_shortfall_is_distributed() {
        // Every share rounds to zero
        let mut rng = ChaCha8Rng::seed_from_u64(3);
        let weights = [10; 8];
        let allocation = LengthAllocation::plan(3, &weights, &mut rng).unwrap();
        assert_eq!(allocation.total(), 3);
    }

    #[test]
    fn test_surplus_is_collected() {
        // Shares of 1.5 round to 2, one over budget
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        let allocation = LengthAllocation::plan(3, &[1, 1], &mut rng).unwrap();
        assert_eq!(allocation.counts().iter().sum::<usize>(), 3);

        let weights = vec![3, 3, 3, 3, 3, 3, 3];
        // 4 / 21 * 3 = 0.571 rounds to 1 in all seven buckets
        let allocation = LengthAllocation::plan(4, &weights, &mut rng).unwrap();
        assert_eq!(allocation.total(), 4);
        assert!(allocation.counts().iter().all(|&c| c <= 1));
    }

    #[test]
    fn test_exact_proportions_need_no_correction() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let allocation = LengthAllocation::plan(6, &[2, 4], &mut rng).unwrap();
        assert_eq!(allocation.counts(), &[2, 4]);
    }

    #[test]
    fn test_length_indexing() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        let allocation = LengthAllocation::plan(6, &[2, 4], &mut rng).unwrap();
        assert_eq!(allocation.count_for_length(2), 2);
        assert_eq!(allocation.count_for_length(3), 4);
        assert_eq!(allocation.count_for_length(1), 0);
        assert_eq!(allocation.count_for_length(4), 0);
        assert_eq!(allocation.iter().collect::<Vec<_>>(), vec![(2, 2), (3, 4)]);
    }

    #[test]
    fn test_no_buckets_is_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(matches!(
            LengthAllocation::plan(1, &[], &mut rng),
            Err(ShapeletError::SeriesTooShort { .. })
        ));
    }

    #[test]
    fn test_allocation_from_candidate_weights() {
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        let weights = length_weights(40, 25);
        let allocation = LengthAllocation::plan(10, &weights, &mut rng).unwrap();
        assert_eq!(allocation.len(), 23);
        assert_eq!(allocation.total(), 10);
    }
}
