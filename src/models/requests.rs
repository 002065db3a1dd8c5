use serde::{Deserialize, Serialize};
use validator::Validate;
use crate::models::domain::{Candidate, Profile};

/// Request to score two profiles against each other
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ScoreRequest {
    #[validate(nested)]
    pub user1: Profile,
    #[validate(nested)]
    pub user2: Profile,
}

/// Request to rank candidates for one user
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RankRequest {
    #[serde(alias = "user_id", rename = "userId", default)]
    pub user_id: Option<String>,
    #[validate(nested)]
    pub user: Profile,
    #[validate(nested)]
    pub candidates: Vec<Candidate>,
    #[serde(default)]
    pub limit: Option<u16>,
}
