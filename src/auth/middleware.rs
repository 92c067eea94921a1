use axum::{
    extract::State,
    http::{header, HeaderMap, Request},
    middleware::Next,
    response::Response,
};
use tracing::warn;

use crate::errors::AppError;
use crate::state::AppState;

/// Identity taken from a verified bearer token, available to protected
/// handlers as a request extension.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub username: String,
}

pub async fn require_bearer(
    State(state): State<AppState>,
    mut req: Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_bearer(req.headers()).map_err(|e| {
        warn!("Rejected request to {}: {}", req.uri().path(), e);
        e
    })?;

    let claims = state.jwt.verify(token).map_err(|e| {
        warn!("Rejected request to {}: {}", req.uri().path(), e);
        e
    })?;

    req.extensions_mut().insert(AuthUser {
        username: claims.username,
    });

    Ok(next.run(req).await)
}

fn extract_bearer(headers: &HeaderMap) -> Result<&str, AppError> {
    let value = match headers.get(header::AUTHORIZATION) {
        Some(value) if !value.is_empty() => value,
        _ => return Err(AppError::TokenRequired),
    };

    let value = value.to_str().map_err(|_| AppError::InvalidAuthHeader)?;

    let mut parts = value.split(' ');
    match (parts.next(), parts.next(), parts.next()) {
        (Some("Bearer"), Some(token), None) => Ok(token),
        _ => Err(AppError::InvalidAuthHeader),
    }
}
