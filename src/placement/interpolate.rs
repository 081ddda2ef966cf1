//! Fast-path score interpolation.

use crate::tier::{round_score, RankedItem, TierRange};

/// Step applied when the candidate lands above the current top or below the
/// current bottom of the tier.
pub const EDGE_STEP: f64 = 0.1;

/// Floor offset keeping a new bottom score strictly above the band's
/// exclusive lower bound.
pub const BOTTOM_FLOOR: f64 = 0.001;

/// Computes the candidate's score for insertion at `position` into
/// `existing` (sorted descending, non-empty), without touching any other
/// score.
///
/// - position 0 (new top): current top score plus [`EDGE_STEP`], capped at
///   the band's max.
/// - position n (new bottom): current bottom score minus [`EDGE_STEP`],
///   floored at `min + `[`BOTTOM_FLOOR`].
/// - interior: midpoint of the two neighbor scores.
///
/// The result is rounded to 3 decimals. Returns `None` when the rounded
/// score escapes the open interval `(min, max)` — the edge formulas approach
/// the band boundaries asymptotically and can drift out of bounds, in which
/// case the caller falls back to redistribution.
pub fn interpolate(range: TierRange, existing: &[RankedItem], position: usize) -> Option<f64> {
    let n = existing.len();
    debug_assert!(n > 0, "interpolation requires at least one existing item");

    let raw = if position == 0 {
        (existing[0].score + EDGE_STEP).min(range.max)
    } else if position == n {
        (existing[n - 1].score - EDGE_STEP).max(range.min + BOTTOM_FLOOR)
    } else {
        (existing[position - 1].score + existing[position].score) / 2.0
    };

    let score = round_score(raw);
    (score > range.min && score < range.max).then_some(score)
}
