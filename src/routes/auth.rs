use axum::body::Bytes;
use axum::extract::State;
use axum::routing::{get, post};
use axum::{middleware, Extension, Json, Router};
use chrono::Utc;
use tracing::{error, info, warn};

use crate::auth::{require_bearer, AuthUser, TOKEN_TTL_HOURS};
use crate::errors::AppError;
use crate::models::{DashboardResponse, LoginRequest, TokenResponse};
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/login", post(login))
}

/// Routes that only answer to a valid bearer token.
pub fn protected_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/dashboard", get(dashboard))
        .route_layer(middleware::from_fn_with_state(state, require_bearer))
}

pub async fn login(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<TokenResponse>, AppError> {
    info!("POST /login - Login attempt");
    // Decoded by hand so the Content-Type header does not matter.
    let request: LoginRequest = serde_json::from_slice(&body).map_err(|e| {
        warn!("Rejected login body: {}", e);
        AppError::InvalidRequest
    })?;

    if !state.credentials.matches(&request.username, &request.password) {
        warn!("Failed login for user {:?}", request.username);
        return Err(AppError::Unauthorized);
    }

    let token = state.jwt.issue(&request.username, Utc::now())
        .map_err(|e| {
            error!("Failed to sign token for {}: {}", request.username, e);
            e
        })?;
    info!("Issued {}h token for {}", TOKEN_TTL_HOURS, request.username);
    Ok(Json(TokenResponse { token }))
}

pub async fn dashboard(
    Extension(user): Extension<AuthUser>
) -> Json<DashboardResponse> {
    info!("GET /dashboard - Serving dashboard for {}", user.username);
    Json(DashboardResponse {
        message: "Welcome to your dashboard!".to_string(),
        username: user.username,
    })
}
