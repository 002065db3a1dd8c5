use rayon::prelude::*;
use crate::models::{Candidate, MatchResult, Profile, RankedMatch, ScoringWeights};
use crate::core::scoring::{calculate_compatibility, DEFAULT_COMPATIBLE_THRESHOLD};

/// Result of ranking a batch of candidates
#[derive(Debug)]
pub struct RankedCandidates {
    pub matches: Vec<RankedMatch>,
    pub total_candidates: usize,
}

/// Compatibility matcher holding the configured weights and threshold
#[derive(Debug, Clone)]
pub struct Matcher {
    weights: ScoringWeights,
    compatible_threshold: u8,
}

impl Matcher {
    pub fn new(weights: ScoringWeights, compatible_threshold: u8) -> Self {
        Self {
            weights,
            compatible_threshold,
        }
    }

    pub fn with_default_weights() -> Self {
        Self::new(ScoringWeights::default(), DEFAULT_COMPATIBLE_THRESHOLD)
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    pub fn compatible_threshold(&self) -> u8 {
        self.compatible_threshold
    }

    /// Score two profiles against each other
    pub fn score(&self, a: &Profile, b: &Profile) -> MatchResult {
        calculate_compatibility(a, b, &self.weights, self.compatible_threshold)
    }

    /// Rank candidates by compatibility with `user`
    ///
    /// # Arguments
    /// * `user_id` - Id of the requesting user, excluded from the results
    /// * `user` - The requesting user's profile
    /// * `candidates` - Profiles to score
    /// * `limit` - Maximum number of matches to return
    ///
    /// # Returns
    /// Matches sorted by score (descending), ties broken by id
    pub fn rank(
        &self,
        user_id: Option<&str>,
        user: &Profile,
        candidates: Vec<Candidate>,
        limit: usize,
    ) -> RankedCandidates {
        let total_candidates = candidates.len();

        let mut matches: Vec<RankedMatch> = candidates
            .into_par_iter()
            .filter(|candidate| user_id != Some(candidate.id.as_str()))
            .map(|candidate| {
                let result = self.score(user, &candidate.profile);
                RankedMatch {
                    id: candidate.id,
                    score: result.score,
                    compatible: result.compatible,
                    breakdown: result.breakdown,
                }
            })
            .collect();

        matches.sort_by(|a, b| b.score.cmp(&a.score).then_with(|| a.id.cmp(&b.id)));
        matches.truncate(limit);

        tracing::trace!(
            "Ranked {} of {} candidates (limit {})",
            matches.len(),
            total_candidates,
            limit
        );

        RankedCandidates {
            matches,
            total_candidates,
        }
    }
}

impl Default for Matcher {
    fn default() -> Self {
        Self::with_default_weights()
    }
}
