// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Candidate, Interest, Lifestyle, MatchResult, Profile, RankedMatch, ScoreBreakdown, ScoringWeights};
pub use requests::{RankRequest, ScoreRequest};
pub use responses::{ErrorResponse, HealthResponse, RankResponse};
