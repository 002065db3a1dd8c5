// Core algorithm exports
pub mod factors;
pub mod matcher;
pub mod scoring;

pub use factors::{
    calculate_age_score, calculate_education_score, calculate_hobbies_score,
    calculate_job_score, calculate_lifestyle_score, calculate_location_score, NEUTRAL_SCORE,
};
pub use matcher::{Matcher, RankedCandidates};
pub use scoring::{calculate_breakdown, calculate_compatibility, score, weighted_score, DEFAULT_COMPATIBLE_THRESHOLD};
