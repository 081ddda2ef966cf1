//! Tier and item types.

/// One of the three fixed preference categories.
///
/// The set is closed by design: a fourth tier means touching every
/// `match` on this enum, which is exactly the point of keeping it an
/// enum rather than a free-form string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Lowest band, scores in (0.0, 3.5].
    Disliked,
    /// Middle band, scores in (3.5, 6.5].
    Fine,
    /// Highest band, scores in (6.5, 10.0].
    Liked,
}

/// The numeric band owned by a tier.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TierRange {
    /// Exclusive lower bound of the band.
    pub min: f64,
    /// Inclusive upper bound of the band.
    pub max: f64,
}

impl TierRange {
    /// Width of the band.
    pub fn span(&self) -> f64 {
        self.max - self.min
    }
}

impl Tier {
    /// Returns the score band owned by this tier.
    pub const fn range(self) -> TierRange {
        match self {
            Tier::Disliked => TierRange { min: 0.0, max: 3.5 },
            Tier::Fine => TierRange { min: 3.5, max: 6.5 },
            Tier::Liked => TierRange { min: 6.5, max: 10.0 },
        }
    }

    /// Whether `score` lies inside this tier's band.
    ///
    /// Half-open: `min < score <= max`. Shared boundary values (3.5, 6.5)
    /// therefore belong to the lower of the two adjacent tiers.
    pub fn contains(self, score: f64) -> bool {
        let range = self.range();
        range.min < score && score <= range.max
    }
}

/// An item with a tier and a score, sortable within its tier.
///
/// Items are identified by caller-provided `i64` IDs.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankedItem {
    /// Caller-provided item ID.
    pub id: i64,
    /// The tier this item was assigned to.
    pub tier: Tier,
    /// Score within the tier's band, rounded to 3 decimals.
    pub score: f64,
}

impl RankedItem {
    /// Creates an item with its score rounded to 3 decimals.
    pub fn new(id: i64, tier: Tier, score: f64) -> Self {
        Self {
            id,
            tier,
            score: round_score(score),
        }
    }
}

/// Rounds a score to 3 decimal places.
///
/// Applied on every score write to bound floating-point drift.
pub fn round_score(score: f64) -> f64 {
    (score * 1000.0).round() / 1000.0
}
