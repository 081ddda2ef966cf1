//! Store trait and the split-commit helper.

use crate::placement::{PlacementResult, ScoreWrite};
use crate::tier::{RankedItem, Tier};
use tracing::warn;

/// Durable storage for ranked items, implemented by the collaborator.
///
/// # Examples
///
/// ```ignore
/// struct SqlStore { pool: Pool }
///
/// impl TierStore for SqlStore {
///     type Error = sqlx::Error;
///
///     fn load_tier(&self, tier: Tier) -> Result<Vec<RankedItem>, Self::Error> {
///         // any order; the session sorts before searching
///     }
///
///     fn write_primary(&mut self, tier: Tier, write: &ScoreWrite) -> Result<(), Self::Error> {
///         // UPDATE ... SET score = ?, last_modified = now() WHERE id = ?
///     }
///
///     fn write_batch(&mut self, tier: Tier, writes: &[ScoreWrite]) -> Result<(), Self::Error> {
///         // UPDATE ... SET score = ? WHERE id = ?  -- last_modified untouched
///     }
/// }
/// ```
pub trait TierStore {
    /// Storage-level error type.
    type Error: std::fmt::Display;

    /// Reads every item currently in `tier`, in any order.
    fn load_tier(&self, tier: Tier) -> Result<Vec<RankedItem>, Self::Error>;

    /// Writes one item's score and updates its last-modified marker.
    fn write_primary(&mut self, tier: Tier, write: &ScoreWrite) -> Result<(), Self::Error>;

    /// Writes a batch of sibling scores without touching last-modified.
    fn write_batch(&mut self, tier: Tier, writes: &[ScoreWrite]) -> Result<(), Self::Error>;
}

/// Outcome of [`commit`]: the primary write succeeded; the batch may not
/// have.
#[must_use]
#[derive(Debug)]
pub struct CommitReport<E> {
    /// The batch error, when the sibling rewrite failed. The caller may
    /// retry the batch; the tier stays validly ordered either way, merely
    /// unevenly spaced.
    pub batch_error: Option<E>,
}

impl<E> CommitReport<E> {
    /// Whether both writes landed.
    pub fn fully_committed(&self) -> bool {
        self.batch_error.is_none()
    }
}

/// Commits a placement through the two-pattern write contract.
///
/// The primary write runs first and is mandatory: its failure is the outer
/// `Err` and nothing else is attempted. For a redistributed placement the
/// sibling batch runs second; its failure is demoted to
/// [`CommitReport::batch_error`] and logged, never escalated.
pub fn commit<S: TierStore>(
    store: &mut S,
    tier: Tier,
    result: &PlacementResult,
) -> Result<CommitReport<S::Error>, S::Error> {
    let placement = result.placement();
    store.write_primary(
        tier,
        &ScoreWrite {
            item: placement.item,
            score: placement.score,
        },
    )?;

    let batch_error = match result.siblings() {
        None => None,
        Some(siblings) => match store.write_batch(tier, siblings) {
            Ok(()) => None,
            Err(e) => {
                warn!(
                    ?tier,
                    item = placement.item,
                    error = %e,
                    "sibling batch write failed; tier left unevenly spaced"
                );
                Some(e)
            }
        },
    };

    Ok(CommitReport { batch_error })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::Placement;
    use crate::tier::round_score;
    use std::collections::HashMap;

    /// In-memory store tracking which writes touched last-modified.
    #[derive(Default)]
    struct MemoryStore {
        scores: HashMap<(Tier, i64), f64>,
        touched: Vec<i64>,
        fail_primary: bool,
        fail_batch: bool,
    }

    impl TierStore for MemoryStore {
        type Error = String;

        fn load_tier(&self, tier: Tier) -> Result<Vec<RankedItem>, Self::Error> {
            Ok(self
                .scores
                .iter()
                .filter(|((t, _), _)| *t == tier)
                .map(|(&(t, id), &score)| RankedItem::new(id, t, score))
                .collect())
        }

        fn write_primary(&mut self, tier: Tier, write: &ScoreWrite) -> Result<(), Self::Error> {
            if self.fail_primary {
                return Err("primary write refused".into());
            }
            self.scores.insert((tier, write.item), round_score(write.score));
            self.touched.push(write.item);
            Ok(())
        }

        fn write_batch(&mut self, tier: Tier, writes: &[ScoreWrite]) -> Result<(), Self::Error> {
            if self.fail_batch {
                return Err("batch write refused".into());
            }
            for write in writes {
                self.scores.insert((tier, write.item), round_score(write.score));
            }
            Ok(())
        }
    }

    fn direct(item: i64, score: f64) -> PlacementResult {
        PlacementResult::Direct(Placement {
            item,
            position: 0,
            score,
        })
    }

    fn redistributed(item: i64, score: f64, others: Vec<ScoreWrite>) -> PlacementResult {
        PlacementResult::Redistributed {
            primary: Placement {
                item,
                position: 1,
                score,
            },
            others,
        }
    }

    #[test]
    fn test_direct_commit_touches_only_primary() {
        let mut store = MemoryStore::default();
        let report = commit(&mut store, Tier::Fine, &direct(5, 5.5)).unwrap();
        assert!(report.fully_committed());
        assert_eq!(store.scores[&(Tier::Fine, 5)], 5.5);
        assert_eq!(store.touched, vec![5]);
    }

    #[test]
    fn test_redistributed_commit_writes_both_patterns() {
        let mut store = MemoryStore::default();
        let result = redistributed(
            9,
            1.75,
            vec![ScoreWrite { item: 1, score: 3.5 }],
        );
        let report = commit(&mut store, Tier::Disliked, &result).unwrap();
        assert!(report.fully_committed());
        assert_eq!(store.scores[&(Tier::Disliked, 9)], 1.75);
        assert_eq!(store.scores[&(Tier::Disliked, 1)], 3.5);
        // siblings never count as user activity
        assert_eq!(store.touched, vec![9]);
    }

    #[test]
    fn test_batch_failure_keeps_primary_and_reports() {
        let mut store = MemoryStore {
            fail_batch: true,
            ..MemoryStore::default()
        };
        let result = redistributed(
            9,
            1.75,
            vec![ScoreWrite { item: 1, score: 3.5 }],
        );
        let report = commit(&mut store, Tier::Disliked, &result).unwrap();
        assert!(!report.fully_committed());
        assert_eq!(report.batch_error.as_deref(), Some("batch write refused"));
        // primary landed despite the degraded batch
        assert_eq!(store.scores[&(Tier::Disliked, 9)], 1.75);
        assert!(!store.scores.contains_key(&(Tier::Disliked, 1)));
    }

    #[test]
    fn test_primary_failure_aborts_commit() {
        let mut store = MemoryStore {
            fail_primary: true,
            ..MemoryStore::default()
        };
        let err = commit(&mut store, Tier::Fine, &direct(5, 5.5)).unwrap_err();
        assert_eq!(err, "primary write refused");
        assert!(store.scores.is_empty());
    }

    #[test]
    fn test_load_then_session_round() {
        // load_tier output feeds a session unsorted; end-to-end smoke.
        let mut store = MemoryStore::default();
        for (id, score) in [(1, 4.0), (2, 6.0), (3, 5.0)] {
            store.scores.insert((Tier::Fine, id), score);
        }
        let existing = store.load_tier(Tier::Fine).unwrap();
        let mut session =
            crate::session::RankingSession::begin(99, Tier::Fine, existing).unwrap();
        while let Some(cmp) = session.current_comparison() {
            session = session.advance(cmp.against.id != 2);
        }
        let result = session.into_placement().unwrap();
        assert_eq!(result.position(), 1);
        assert_eq!(result.score(), 5.5);
        let report = commit(&mut store, Tier::Fine, &result).unwrap();
        assert!(report.fully_committed());
        assert_eq!(store.scores[&(Tier::Fine, 99)], 5.5);
    }
}
