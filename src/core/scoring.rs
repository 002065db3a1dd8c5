use crate::models::{MatchResult, Profile, ScoreBreakdown, ScoringWeights};
use crate::core::factors::{
    calculate_age_score, calculate_education_score, calculate_hobbies_score,
    calculate_job_score, calculate_lifestyle_score, calculate_location_score,
};

/// Minimum score at which two profiles are reported as compatible
pub const DEFAULT_COMPATIBLE_THRESHOLD: u8 = 70;

/// Compute every sub-score for a pair of profiles
pub fn calculate_breakdown(a: &Profile, b: &Profile) -> ScoreBreakdown {
    ScoreBreakdown {
        hobbies: calculate_hobbies_score(&a.interests, &b.interests),
        job: calculate_job_score(a.job_title.as_deref(), b.job_title.as_deref()),
        age: calculate_age_score(a.age, b.age),
        location: calculate_location_score(a.location.as_deref(), b.location.as_deref()),
        lifestyle: calculate_lifestyle_score(&a.lifestyle, &b.lifestyle),
        education: calculate_education_score(a.education.as_deref(), b.education.as_deref()),
    }
}

/// Weighted blend of the breakdown, rounded and clamped to 0-100
///
/// Scoring formula:
/// score = (
///     hobbies * 0.60 +
///     job * 0.05 +
///     age * 0.10 +
///     location * 0.10 +
///     lifestyle * 0.10 +
///     education * 0.05
/// )
pub fn weighted_score(breakdown: &ScoreBreakdown, weights: &ScoringWeights) -> u8 {
    let total = breakdown.hobbies * weights.hobbies
        + breakdown.job * weights.job
        + breakdown.age * weights.age
        + breakdown.location * weights.location
        + breakdown.lifestyle * weights.lifestyle
        + breakdown.education * weights.education;

    if !total.is_finite() {
        return 0;
    }

    total.round().clamp(0.0, 100.0) as u8
}

/// Score a pair of profiles with explicit weights and threshold
pub fn calculate_compatibility(
    a: &Profile,
    b: &Profile,
    weights: &ScoringWeights,
    compatible_threshold: u8,
) -> MatchResult {
    let breakdown = calculate_breakdown(a, b);
    let score = weighted_score(&breakdown, weights);

    MatchResult {
        score,
        compatible: score >= compatible_threshold,
        breakdown,
    }
}

/// Score a pair of profiles with the default weights
pub fn score(a: &Profile, b: &Profile) -> MatchResult {
    calculate_compatibility(a, b, &ScoringWeights::default(), DEFAULT_COMPATIBLE_THRESHOLD)
}
