//! Persistence seam.
//!
//! The engine itself never touches storage; the collaborator implements
//! [`TierStore`] and the engine's results are shaped around its two write
//! patterns:
//!
//! - a **primary** write for the inserted item, which also marks the item
//!   recently active (feeding any activity/recency-ordered view), and
//! - a **batch** write for redistribution siblings, which must NOT touch
//!   the last-modified marker — re-spacing is a maintenance detail, not a
//!   user action.
//!
//! The two writes fail independently by design: losing perfectly even
//! spacing is an acceptable degraded state, losing the primary placement is
//! not. [`commit`] encodes that policy.

mod types;

pub use types::{commit, CommitReport, TierStore};
