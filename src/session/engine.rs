//! The binary-search state machine.

use crate::error::RankingError;
use crate::placement::{resolver, PlacementResult};
use crate::tier::{RankedItem, Tier};
use tracing::debug;

use super::types::Comparison;

/// A single-use insertion session for one (candidate, tier) pair.
///
/// The session holds the tier's existing items sorted descending by score
/// (index 0 = most preferred) and binary-search bounds into that list. Each
/// [`advance`](Self::advance) consumes one user decision and either narrows
/// the bounds or completes with an insertion position. All transitions are
/// pure: they consume the session value and return the successor state, so a
/// snapshot can be persisted mid-search and resumed later.
///
/// # Examples
///
/// ```
/// use tier_rank::session::RankingSession;
/// use tier_rank::tier::{RankedItem, Tier};
///
/// let existing = vec![
///     RankedItem::new(1, Tier::Fine, 6.0),
///     RankedItem::new(2, Tier::Fine, 5.0),
///     RankedItem::new(3, Tier::Fine, 4.0),
/// ];
/// let mut session = RankingSession::begin(42, Tier::Fine, existing).unwrap();
/// while let Some(cmp) = session.current_comparison() {
///     // ask the user; here: prefer the candidate over item 2 only
///     session = session.advance(cmp.against.id == 2);
/// }
/// let placement = session.into_placement().unwrap();
/// assert_eq!(placement.position(), 1);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RankingSession {
    candidate: i64,
    tier: Tier,
    /// Sorted descending by score; index 0 = most preferred.
    existing: Vec<RankedItem>,
    // Search bounds are signed: `right = middle - 1` legitimately passes
    // below zero when the candidate beats the current top item.
    left: isize,
    right: isize,
    middle: isize,
    comparisons: usize,
    complete: bool,
    position: usize,
}

impl RankingSession {
    /// Starts an insertion session for `candidate` into `tier`.
    ///
    /// The supplied items are not trusted to arrive sorted; they are sorted
    /// descending by score here. Rejects a candidate already present in the
    /// list and any item whose tier differs from the session's.
    ///
    /// An empty tier needs no comparisons: the first item in a tier is
    /// maximally preferred by definition, so the session completes
    /// immediately at position 0.
    pub fn begin(
        candidate: i64,
        tier: Tier,
        mut existing: Vec<RankedItem>,
    ) -> Result<Self, RankingError> {
        for item in &existing {
            if item.id == candidate {
                return Err(RankingError::DuplicateCandidate(candidate));
            }
            if item.tier != tier {
                return Err(RankingError::TierMismatch {
                    item: item.id,
                    expected: tier,
                    found: item.tier,
                });
            }
        }

        existing.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let n = existing.len() as isize;
        if n == 0 {
            return Ok(Self {
                candidate,
                tier,
                existing,
                left: 0,
                right: -1,
                middle: 0,
                comparisons: 0,
                complete: true,
                position: 0,
            });
        }

        Ok(Self {
            candidate,
            tier,
            existing,
            left: 0,
            right: n - 1,
            middle: (n - 1) / 2,
            comparisons: 0,
            complete: false,
            position: 0,
        })
    }

    /// The pending comparison, or `None` when the session is complete.
    pub fn current_comparison(&self) -> Option<Comparison> {
        if self.complete {
            return None;
        }
        Some(Comparison {
            candidate: self.candidate,
            against: self.existing[self.middle as usize],
        })
    }

    /// Consumes one user decision and advances the search.
    ///
    /// `prefer_candidate = true` means the candidate outranks the item it
    /// was compared against, so the search continues strictly above it;
    /// `false` continues strictly below. Advancing a completed session is a
    /// no-op: every reachable state has a defined transition.
    pub fn advance(mut self, prefer_candidate: bool) -> Self {
        if self.complete {
            return self;
        }
        self.comparisons += 1;

        if prefer_candidate {
            self.right = self.middle - 1;
            if self.left > self.right {
                let position = self.middle as usize;
                return self.finish(position);
            }
        } else {
            self.left = self.middle + 1;
            if self.left > self.right {
                let position = (self.middle + 1) as usize;
                return self.finish(position);
            }
        }
        self.middle = (self.left + self.right) / 2;
        self
    }

    /// Terminal escape hatch: the user declines to compare.
    ///
    /// Forces the insertion position to the bottom of the tier and completes
    /// the session; placement then proceeds normally. This is the only
    /// defined mid-session cancellation. No-op when already complete.
    pub fn skip_to_bottom(self) -> Self {
        if self.complete {
            return self;
        }
        let bottom = self.existing.len();
        self.finish(bottom)
    }

    fn finish(mut self, position: usize) -> Self {
        self.complete = true;
        self.position = position;
        debug!(
            candidate = self.candidate,
            tier = ?self.tier,
            position,
            comparisons = self.comparisons,
            "ranking session complete"
        );
        self
    }

    /// Whether the search has converged.
    pub fn is_complete(&self) -> bool {
        self.complete
    }

    /// The converged insertion position, or `None` while comparisons remain.
    ///
    /// Position `p` means every item at an index `< p` is preferred over the
    /// candidate and every item at `>= p` is not.
    pub fn position(&self) -> Option<usize> {
        self.complete.then_some(self.position)
    }

    /// Number of decisions consumed so far.
    pub fn comparisons_made(&self) -> usize {
        self.comparisons
    }

    /// The candidate item's ID.
    pub fn candidate(&self) -> i64 {
        self.candidate
    }

    /// The tier this session inserts into.
    pub fn tier(&self) -> Tier {
        self.tier
    }

    /// The tier's existing items, sorted descending by score.
    pub fn existing(&self) -> &[RankedItem] {
        &self.existing
    }

    /// Resolves the completed session into a placement.
    ///
    /// Returns `None` while the session is incomplete — callers must check
    /// [`is_complete`](Self::is_complete) first. Consumes the session: a
    /// placement is produced exactly once.
    pub fn into_placement(self) -> Option<PlacementResult> {
        if !self.complete {
            return None;
        }
        Some(resolver::place(
            self.tier,
            &self.existing,
            self.candidate,
            self.position,
        ))
    }
}
