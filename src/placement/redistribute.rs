//! Slow-path redistribution: even re-spacing of a whole tier.

use crate::tier::{round_score, TierRange};

/// Re-spaces `ordered` (item IDs in final descending-preference order)
/// evenly across `range`, returning each item's new score in the same order.
///
/// The item at index `i` of `n` receives `span * (n - i) / n + min`, rounded
/// to 3 decimals: the top item gets the band's max, the bottom item sits one
/// even step above the band's min. Scores are strictly decreasing and
/// independent of any previously accumulated drift.
pub fn redistribute(range: TierRange, ordered: &[i64]) -> Vec<(i64, f64)> {
    let n = ordered.len();
    let span = range.span();
    ordered
        .iter()
        .enumerate()
        .map(|(i, &id)| {
            let score = span * (n - i) as f64 / n as f64 + range.min;
            (id, round_score(score))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tier::Tier;

    #[test]
    fn test_ten_liked_items_land_on_whole_steps() {
        let ids: Vec<i64> = (1..=10).collect();
        let scores = redistribute(Tier::Liked.range(), &ids);
        let expected = [10.0, 9.65, 9.3, 8.95, 8.6, 8.25, 7.9, 7.55, 7.2, 6.85];
        for ((id, score), (want_id, want)) in scores.iter().zip(ids.iter().zip(expected.iter())) {
            assert_eq!(id, want_id);
            assert!((score - want).abs() < 1e-9, "{id}: {score} != {want}");
        }
    }

    #[test]
    fn test_top_item_gets_band_max() {
        for tier in [Tier::Disliked, Tier::Fine, Tier::Liked] {
            let scores = redistribute(tier.range(), &[1, 2, 3]);
            assert_eq!(scores[0].1, tier.range().max);
        }
    }

    #[test]
    fn test_bottom_item_stays_above_band_min() {
        for tier in [Tier::Disliked, Tier::Fine, Tier::Liked] {
            for n in 1..=25usize {
                let ids: Vec<i64> = (1..=n as i64).collect();
                let scores = redistribute(tier.range(), &ids);
                let bottom = scores[n - 1].1;
                assert!(
                    bottom > tier.range().min,
                    "{tier:?} n={n}: bottom {bottom} not above min"
                );
            }
        }
    }

    #[test]
    fn test_adjacent_gaps_are_even() {
        let ids: Vec<i64> = (1..=7).collect();
        let range = Tier::Fine.range();
        let scores = redistribute(range, &ids);
        let step = range.span() / 7.0;
        for pair in scores.windows(2) {
            let gap = pair[0].1 - pair[1].1;
            // rounding to 3 decimals perturbs each score by at most 5e-4
            assert!((gap - step).abs() <= 1e-3, "gap {gap} != step {step}");
        }
    }

    #[test]
    fn test_single_item_takes_max() {
        let scores = redistribute(Tier::Disliked.range(), &[42]);
        assert_eq!(scores, vec![(42, 3.5)]);
    }

    #[test]
    fn test_scores_strictly_decreasing() {
        let ids: Vec<i64> = (1..=50).collect();
        let scores = redistribute(Tier::Disliked.range(), &ids);
        for pair in scores.windows(2) {
            assert!(pair[0].1 > pair[1].1);
        }
    }
}
