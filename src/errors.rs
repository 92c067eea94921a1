use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::json;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Database error: {0}")]
    Db(sqlx::Error),
    #[error("Invalid request")]
    InvalidRequest,
    #[error("Unauthorized")]
    Unauthorized,
    #[error("Authorization token required")]
    TokenRequired,
    #[error("Invalid Authorization header format")]
    InvalidAuthHeader,
    #[error("Invalid or expired token")]
    InvalidToken,
    #[error("Token signing failed: {0}")]
    TokenCreation(jsonwebtoken::errors::Error),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Db(_) | AppError::TokenCreation(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InvalidRequest => StatusCode::BAD_REQUEST,
            AppError::Unauthorized
            | AppError::TokenRequired
            | AppError::InvalidAuthHeader
            | AppError::InvalidToken => StatusCode::UNAUTHORIZED,
        }
    }

    // Message shown to clients. Internal details stay in the logs.
    fn public_message(&self) -> String {
        match self {
            AppError::Db(_) => "Error retrieving data".to_string(),
            AppError::TokenCreation(_) => "Could not generate token".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        (self.status(), Json(json!({ "error": self.public_message() }))).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(value: sqlx::Error) -> Self {
        AppError::Db(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_database_errors_hide_detail() {
        let err = AppError::from(sqlx::Error::PoolTimedOut);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_message(), "Error retrieving data");
    }

    #[test]
    fn test_auth_errors_are_unauthorized() {
        for err in [
            AppError::Unauthorized,
            AppError::TokenRequired,
            AppError::InvalidAuthHeader,
            AppError::InvalidToken,
        ] {
            assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        }
        assert_eq!(AppError::InvalidRequest.status(), StatusCode::BAD_REQUEST);
    }
}
