//! Ranking session: binary insertion search driven by an external
//! decision-maker.
//!
//! A session locates the insertion index for one candidate item inside one
//! tier using classic binary insertion search, except the comparator is a
//! human: the session exposes exactly one pending comparison at a time and
//! the caller answers it with a boolean. Convergence takes O(log n) answers.
//!
//! A comparison may stay unanswered for seconds or forever, so the session
//! is a plain value (serializable with the `serde` feature) advanced by pure
//! transitions rather than a blocking call. The caller owns scheduling and
//! must serialize sessions per (user, tier); the engine assumes a single
//! writer per tier.

mod engine;
mod types;

pub use engine::RankingSession;
pub use types::Comparison;
