//! Tier model: fixed preference bands and the items ranked inside them.
//!
//! A tier is one of three coarse categories, each owning a distinct numeric
//! score band. Within a tier, items are totally ordered by score (descending
//! score = descending preference) and every score lies inside the tier's
//! band.
//!
//! # Boundary ownership
//!
//! Adjacent bands share their boundary values (disliked/fine meet at 3.5,
//! fine/liked at 6.5). Membership is half-open on the low side —
//! `min < score <= max` — so a shared boundary belongs to the band below it.
//! Whether that asymmetry is intended has never been clarified by product;
//! the comparison operators are kept exactly as-is rather than symmetrized.

mod types;

pub use types::{round_score, RankedItem, Tier, TierRange};
