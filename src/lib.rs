//! Tiered preference ranking engine.
//!
//! Given a coarse, user-assigned category ("tier") for an item, this crate
//! derives a fine-grained numeric score for that item relative to every other
//! item already placed in the same tier, using a sequence of pairwise
//! "which do you prefer" comparisons answered by an external decision-maker:
//!
//! - **Tier model**: three fixed tiers (disliked / fine / liked), each owning
//!   a closed numeric score band.
//! - **Ranking session**: a resumable binary-insertion-search state machine
//!   that converges on an insertion index in O(log n) comparisons. One
//!   comparison is outstanding at a time; the caller answers each with a
//!   boolean and may skip to the bottom of the tier instead.
//! - **Placement**: an O(1) fast path interpolating a single score between
//!   neighbors, and an O(n) slow path that re-spaces the whole tier evenly.
//!   A resolver picks between them using periodic and collision heuristics,
//!   so most insertions stay O(1) after the comparison phase.
//! - **Store seam**: the persistence collaborator is a trait; results are
//!   shaped around its two write patterns (single row vs batch).
//!
//! # Architecture
//!
//! The engine is a pure, synchronous library with no internal concurrency.
//! Each comparison suspends the insertion pending a human decision, so the
//! session is an explicit value type (serializable with the `serde` feature)
//! plus pure transition functions, never a blocking call. The caller is
//! responsible for serializing sessions per (user, tier); the engine assumes
//! single-writer access to one tier at a time.

pub mod error;
pub mod placement;
pub mod session;
pub mod store;
pub mod tier;
