//! Error types for tier-rank.
//!
//! Only invalid input is surfaced to callers. Range violations during score
//! interpolation are resolved internally by falling back to redistribution,
//! and reading an incomplete session's result yields `None` rather than an
//! error. Persistence failures belong to the store implementation.

use crate::tier::Tier;
use thiserror::Error;

/// Input validation errors, rejected before a session starts.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingError {
    /// The candidate is already present in the supplied tier list.
    #[error("candidate {0} is already ranked in the supplied tier")]
    DuplicateCandidate(i64),

    /// A supplied item carries a different tier than the session targets.
    #[error("item {item} belongs to {found:?}, session targets {expected:?}")]
    TierMismatch {
        /// The offending item's ID.
        item: i64,
        /// The tier the session was started for.
        expected: Tier,
        /// The tier found on the supplied item.
        found: Tier,
    },
}
