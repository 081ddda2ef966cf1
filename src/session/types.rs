//! Session-facing types.

use crate::tier::RankedItem;

/// One pending "which do you prefer" question.
///
/// The caller presents `candidate` against `against` and answers with
/// [`RankingSession::advance`](super::RankingSession::advance):
/// `true` means the candidate is preferred.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Comparison {
    /// The item being inserted (not yet scored).
    pub candidate: i64,
    /// The already-ranked item it is compared against.
    pub against: RankedItem,
}
