use actix_web::{web, HttpRequest, HttpResponse, Responder};
use std::sync::Arc;

use crate::core::{MatchError, Matcher};
use crate::models::{HealthResponse, MessageResponse};
use crate::services::{authenticate, AuthError, CacheManager, PostgresClient};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<PostgresClient>,
    pub cache: Arc<CacheManager>,
    pub matcher: Matcher,
    pub jwt_secret: String,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches", web::get().to(get_matches));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let db_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if db_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Ranked matches endpoint
///
/// GET /matches
///
/// Bearer token identifies the requester. Returns the JSON array of
/// candidates whose compatibility score clears the acceptance threshold,
/// sorted by score descending.
async fn get_matches(state: web::Data<AppState>, req: HttpRequest) -> impl Responder {
    let user_id = match authenticate(&req, &state.jwt_secret) {
        Ok(id) => id,
        Err(e) => {
            tracing::debug!("Rejected /matches request: {}", e);
            let message = match e {
                AuthError::MissingToken => "Missing bearer token",
                _ => "Invalid token",
            };
            return HttpResponse::Unauthorized().json(MessageResponse::new(message));
        }
    };

    // Resolve the requester before anything else
    let user = match state.store.get_user(user_id).await {
        Ok(Some(user)) => user,
        Ok(None) => {
            return HttpResponse::NotFound().json(MessageResponse::new("User not found"));
        }
        Err(e) => {
            tracing::error!("Failed to fetch user {}: {}", user_id, e);
            return HttpResponse::InternalServerError()
                .json(MessageResponse::new("Failed to fetch user"));
        }
    };

    // Preferences are read fresh on every request
    let preferences = match state.store.get_preferences(user_id).await {
        Ok(prefs) => prefs,
        Err(e) => {
            tracing::error!("Failed to fetch preferences for {}: {}", user_id, e);
            return HttpResponse::InternalServerError()
                .json(MessageResponse::new("Failed to fetch preferences"));
        }
    };

    // Candidate pool: same account type as the requester, served from the
    // short-TTL cache when possible
    let account_type = user.account_type.as_deref();
    let pool = match state.cache.get_candidates(account_type).await {
        Some(pool) => pool,
        None => match state.store.get_candidates(account_type).await {
            Ok(candidates) => state.cache.insert_candidates(account_type, candidates).await,
            Err(e) => {
                tracing::error!("Failed to query candidates for {}: {}", user_id, e);
                return HttpResponse::InternalServerError()
                    .json(MessageResponse::new("Failed to query candidates"));
            }
        },
    };

    // The pool is cached per account type, so the requester is dropped here
    let candidates: Vec<_> = pool
        .iter()
        .filter(|c| c.user_id != user_id)
        .cloned()
        .collect();

    let result = match state.matcher.rank_request(preferences.as_ref(), candidates) {
        Ok(result) => result,
        Err(MatchError::PreferencesNotSet) => {
            return HttpResponse::BadRequest().json(MessageResponse::new("Preferences not set"));
        }
    };

    tracing::info!(
        "Returning {} matches for user {} ({} candidates, {} incomplete skipped)",
        result.matches.len(),
        user_id,
        result.total_candidates,
        result.skipped_incomplete
    );

    HttpResponse::Ok().json(result.matches)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_shape() {
        let body = serde_json::to_value(MessageResponse::new("Preferences not set")).unwrap();
        assert_eq!(body, serde_json::json!({"message": "Preferences not set"}));
    }
}
