//! Placement: turning a converged insertion position into scores.
//!
//! Two strategies exist:
//!
//! - **Fast path** ([`interpolate`]): O(1) — a single score for the candidate,
//!   interpolated between its neighbors (midpoint) or bumped past the current
//!   top/bottom by a fixed step.
//! - **Slow path** ([`redistribute`]): O(n) — every item in the tier is
//!   re-spaced evenly across the tier's band, erasing accumulated drift.
//!
//! The [`resolver`] picks between them. Most insertions take the fast path;
//! the slow path runs periodically and whenever the fast path would collide
//! with a neighbor or a band boundary. This keeps the amortized cost of an
//! insertion at O(1) after the O(log n) comparison phase.

pub mod interpolate;
pub mod redistribute;
pub mod resolver;

pub use resolver::{Placement, PlacementResult, ScoreWrite};
