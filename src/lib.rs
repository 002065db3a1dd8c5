//! FriendFinder compatibility - profile matching for the FriendFinder app
//!
//! This library provides the compatibility scoring shared by the app's clients
//! and its HTTP service: six weighted sub-scores blended into a 0-100 score.

pub mod config;
pub mod core;
pub mod error;
pub mod models;
pub mod routes;

// Re-export commonly used types
pub use crate::core::{score, Matcher, RankedCandidates};
pub use error::{AppError, ValidationError};
pub use models::{Candidate, Interest, Lifestyle, MatchResult, Profile, ScoreBreakdown, ScoringWeights};
