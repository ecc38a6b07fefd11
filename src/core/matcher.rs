use thiserror::Error;

use crate::core::schema::AttributeView;
use crate::core::scoring::calculate_match_score;
use crate::models::{CandidateProfile, MatchPreferences, RankedMatch, ScoringWeights};

/// Errors signalled by the ranking entrypoint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MatchError {
    /// The requester has never saved match preferences. Refusing here protects
    /// the caller from a meaningless all-zero ranking.
    #[error("Preferences not set")]
    PreferencesNotSet,
}

/// Result of one ranking pass.
#[derive(Debug)]
pub struct RankResult {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
    /// Candidates skipped for having no personality record. These are
    /// incomplete profiles, expected in steady state, not errors.
    pub skipped_incomplete: usize,
}

/// Ranks a candidate pool against one requester's preferences.
///
/// # Pipeline
/// 1. Skip candidates without a personality record
/// 2. Score each remaining (preferences, candidate) pair
/// 3. Retain scores at or above the acceptance threshold
/// 4. Stable sort by raw score descending, truncate scores for the payload
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
}

impl Matcher {
    pub fn new(weights: ScoringWeights) -> Self {
        Self { weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    /// Ranking entrypoint for a request. Refuses when the requester has no
    /// preferences record; an empty pool is a valid empty result.
    pub fn rank_request(
        &self,
        preferences: Option<&MatchPreferences>,
        candidates: Vec<CandidateProfile>,
    ) -> Result<RankResult, MatchError> {
        let preferences = preferences.ok_or(MatchError::PreferencesNotSet)?;
        Ok(self.rank(preferences, candidates))
    }

    /// Score, filter, and order a candidate pool.
    ///
    /// The pool is expected to already exclude the requester. Ties in score
    /// keep the discovery order of the pool (stable sort).
    pub fn rank(
        &self,
        preferences: &MatchPreferences,
        candidates: Vec<CandidateProfile>,
    ) -> RankResult {
        let total_candidates = candidates.len();
        let mut skipped_incomplete = 0usize;

        let mut scored: Vec<(f64, CandidateProfile)> = candidates
            .into_iter()
            .filter_map(|candidate| {
                let view = match AttributeView::of(&candidate) {
                    Some(view) => view,
                    None => {
                        skipped_incomplete += 1;
                        return None;
                    }
                };

                let score = calculate_match_score(preferences, &view, &self.weights);
                if score >= self.weights.threshold {
                    Some((score, candidate))
                } else {
                    None
                }
            })
            .collect();

        // sort_by is stable, so equal scores keep pool order
        scored.sort_by(|a, b| b.0.total_cmp(&a.0));

        let matches = scored
            .into_iter()
            .map(|(score, candidate)| RankedMatch {
                user_id: candidate.user_id,
                nickname: candidate.nickname().map(str::to_string),
                // truncation toward zero, matching the integer payload contract
                score: score as i64,
                profile_pic: candidate.profile_pic,
            })
            .collect();

        RankResult {
            matches,
            total_candidates,
            skipped_incomplete,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
