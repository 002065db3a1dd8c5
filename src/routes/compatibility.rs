use actix_web::{web, HttpResponse, Responder};
use validator::Validate;
use crate::config::MatchingSettings;
use crate::core::Matcher;
use crate::error::ValidationError;
use crate::models::{ErrorResponse, HealthResponse, RankRequest, RankResponse, ScoreRequest};

/// Application state shared across all handlers
#[derive(Clone, Default)]
pub struct AppState {
    pub matcher: Matcher,
    pub matching: MatchingSettings,
}

/// Configure all compatibility routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg
        .route("/health", web::get().to(health_check))
        .route("/compatibility/score", web::post().to(score_pair))
        .route("/compatibility/rank", web::post().to(rank_candidates));
}

fn validation_failed(err: ValidationError) -> HttpResponse {
    HttpResponse::BadRequest().json(ErrorResponse {
        error: "Validation failed".to_string(),
        message: err.to_string(),
        status_code: 400,
    })
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Score two profiles
///
/// POST /api/v1/compatibility/score
///
/// Request body:
/// ```json
/// {
///   "user1": { "interests": ["Music"], "age": 30, "location": "Austin, TX" },
///   "user2": { "interests": [{ "name": "music" }], "age": 32 }
/// }
/// ```
async fn score_pair(
    state: web::Data<AppState>,
    req: web::Json<ScoreRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for score request: {}", errors);
        return validation_failed(errors.into());
    }

    let result = state.matcher.score(&req.user1, &req.user2);

    tracing::debug!(
        "Scored pair: score={}, compatible={}, breakdown={:?}",
        result.score,
        result.compatible,
        result.breakdown
    );

    HttpResponse::Ok().json(result)
}

/// Rank candidates for a user
///
/// POST /api/v1/compatibility/rank
///
/// Request body:
/// ```json
/// {
///   "userId": "string",
///   "user": { ... },
///   "candidates": [{ "id": "string", "profile": { ... } }],
///   "limit": 20
/// }
/// ```
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    let max_candidates = state.matching.max_candidates;
    if req.candidates.len() > max_candidates {
        return validation_failed(ValidationError::TooManyCandidates {
            count: req.candidates.len(),
            max: max_candidates,
        });
    }

    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {}", errors);
        return validation_failed(errors.into());
    }

    let limit = req
        .limit
        .unwrap_or(state.matching.default_limit)
        .min(state.matching.max_limit) as usize;

    let RankRequest { user_id, user, candidates, .. } = req.into_inner();

    tracing::info!(
        "Ranking {} candidates for user {}, limit: {}",
        candidates.len(),
        user_id.as_deref().unwrap_or("<anonymous>"),
        limit
    );

    let result = state
        .matcher
        .rank(user_id.as_deref(), &user, candidates, limit);

    HttpResponse::Ok().json(RankResponse {
        matches: result.matches,
        total_candidates: result.total_candidates,
    })
}
