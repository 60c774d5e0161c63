use super::domain::{SessionError, SwipeDirection};
use crate::compat::CompatibilityResult;
use crate::profiles::{Profile, ProfileId};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A right-swiped candidate and whatever verdict had resolved by then.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchEntry {
    pub profile: Profile,
    /// Absent when the user swiped before the estimate resolved.
    pub compatibility: Option<CompatibilityResult>,
}

impl MatchEntry {
    /// Score shown in match listings; an unresolved estimate reads as 0.
    pub fn score(&self) -> u8 {
        self.compatibility
            .as_ref()
            .map(|result| result.score)
            .unwrap_or(0)
    }
}

/// Result of a recorded swipe decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SwipeOutcome {
    pub profile: Profile,
    pub direction: SwipeDirection,
    pub matched: bool,
    pub next_cursor: usize,
}

/// Linear pass over the candidate catalog.
///
/// The cursor only moves forward, one candidate per decision, until every
/// candidate has been seen; `review_again` is the single way back to the
/// start. That monotonicity is what keeps the match list free of duplicates
/// within a pass without any uniqueness check.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiscoverDeck {
    candidates: Vec<Profile>,
    cursor: usize,
    matches: Vec<MatchEntry>,
    pending_estimate: Option<CompatibilityResult>,
}

impl DiscoverDeck {
    pub fn new(candidates: Vec<Profile>) -> Self {
        Self {
            candidates,
            cursor: 0,
            matches: Vec::new(),
            pending_estimate: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Candidate currently on the card, if any remain.
    pub fn current(&self) -> Option<&Profile> {
        self.candidates.get(self.cursor)
    }

    pub fn is_exhausted(&self) -> bool {
        self.cursor >= self.candidates.len()
    }

    pub fn matches(&self) -> &[MatchEntry] {
        &self.matches
    }

    pub fn find_match(&self, id: &ProfileId) -> Option<&MatchEntry> {
        self.matches.iter().find(|entry| &entry.profile.id == id)
    }

    /// Verdict held for the candidate currently on the card.
    pub fn current_estimate(&self) -> Option<&CompatibilityResult> {
        self.pending_estimate.as_ref()
    }

    /// Deliver a resolved estimate. Returns false when the cursor has
    /// already moved past the candidate it was issued for; the late result
    /// is dropped rather than written into a stale slot.
    pub fn record_estimate(&mut self, candidate: &ProfileId, result: CompatibilityResult) -> bool {
        match self.current() {
            Some(profile) if &profile.id == candidate => {
                self.pending_estimate = Some(result);
                true
            }
            _ => {
                debug!(%candidate, "dropping estimate for a candidate no longer on the card");
                false
            }
        }
    }

    /// Record a decision for the current candidate and advance the cursor.
    ///
    /// A right swipe commits the candidate together with whatever estimate
    /// had resolved; swiping before resolution commits with no verdict.
    pub fn swipe(&mut self, direction: SwipeDirection) -> Result<SwipeOutcome, SessionError> {
        let profile = self.current().cloned().ok_or(SessionError::NoCandidate)?;
        let estimate = self.pending_estimate.take();

        let matched = direction == SwipeDirection::Right;
        if matched {
            self.matches.push(MatchEntry {
                profile: profile.clone(),
                compatibility: estimate,
            });
        }
        self.cursor += 1;

        Ok(SwipeOutcome {
            profile,
            direction,
            matched,
            next_cursor: self.cursor,
        })
    }

    /// Restart the pass from the first candidate. Only reachable from the
    /// exhausted state; existing matches are retained.
    pub fn review_again(&mut self) -> Result<(), SessionError> {
        if !self.is_exhausted() {
            return Err(SessionError::CandidatesRemaining);
        }
        self.cursor = 0;
        self.pending_estimate = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compat::analyze;
    use crate::profiles::demo_candidates;

    fn deck() -> DiscoverDeck {
        DiscoverDeck::new(demo_candidates())
    }

    fn verdict_for(deck: &DiscoverDeck) -> CompatibilityResult {
        let viewer = demo_candidates().pop().expect("catalog is non-empty");
        analyze(&viewer, deck.current().expect("candidate present"))
    }

    #[test]
    fn left_swipe_advances_without_matching() {
        let mut deck = deck();
        let outcome = deck.swipe(SwipeDirection::Left).expect("candidate present");
        assert!(!outcome.matched);
        assert_eq!(outcome.next_cursor, 1);
        assert!(deck.matches().is_empty());
    }

    #[test]
    fn right_swipe_commits_exactly_one_match() {
        let mut deck = deck();
        let verdict = verdict_for(&deck);
        let id = deck.current().expect("candidate present").id.clone();
        assert!(deck.record_estimate(&id, verdict.clone()));

        let outcome = deck.swipe(SwipeDirection::Right).expect("candidate present");
        assert!(outcome.matched);
        assert_eq!(deck.cursor(), 1);
        assert_eq!(deck.matches().len(), 1);
        assert_eq!(deck.matches()[0].profile.id, id);
        assert_eq!(deck.matches()[0].compatibility, Some(verdict));
    }

    #[test]
    fn swipe_before_estimate_commits_without_a_verdict() {
        let mut deck = deck();
        let id = deck.current().expect("candidate present").id.clone();
        deck.swipe(SwipeDirection::Right).expect("candidate present");

        let entry = deck.find_match(&id).expect("match committed");
        assert_eq!(entry.compatibility, None);
        assert_eq!(entry.score(), 0);
    }

    #[test]
    fn late_estimate_for_a_passed_candidate_is_dropped() {
        let mut deck = deck();
        let verdict = verdict_for(&deck);
        let first = deck.current().expect("candidate present").id.clone();
        deck.swipe(SwipeDirection::Left).expect("candidate present");

        assert!(!deck.record_estimate(&first, verdict));
        assert!(deck.current_estimate().is_none());
    }

    #[test]
    fn swiping_past_the_end_is_rejected() {
        let mut deck = deck();
        for _ in 0..deck.candidate_count() {
            deck.swipe(SwipeDirection::Left).expect("candidate present");
        }
        assert!(deck.is_exhausted());
        assert_eq!(deck.swipe(SwipeDirection::Right), Err(SessionError::NoCandidate));
    }

    #[test]
    fn review_again_requires_exhaustion_and_keeps_matches() {
        let mut deck = deck();
        assert_eq!(deck.review_again(), Err(SessionError::CandidatesRemaining));

        deck.swipe(SwipeDirection::Right).expect("candidate present");
        for _ in 1..deck.candidate_count() {
            deck.swipe(SwipeDirection::Left).expect("candidate present");
        }
        deck.review_again().expect("deck exhausted");

        assert_eq!(deck.cursor(), 0);
        assert_eq!(deck.matches().len(), 1);
    }
}
