use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::AppError;

pub const TOKEN_TTL_HOURS: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    pub username: String,
    /// Expiry as unix seconds.
    pub exp: i64,
}

/// HS256 signing and verification keys derived from one shared secret.
#[derive(Clone)]
pub struct JwtKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    validation: Validation,
}

impl JwtKeys {
    pub fn new(secret: &[u8]) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        Self {
            encoding: EncodingKey::from_secret(secret),
            decoding: DecodingKey::from_secret(secret),
            validation,
        }
    }

    pub fn issue(&self, username: &str, now: DateTime<Utc>) -> Result<String, AppError> {
        let claims = Claims {
            username: username.to_string(),
            exp: (now + Duration::hours(TOKEN_TTL_HOURS)).timestamp(),
        };

        jsonwebtoken::encode(&Header::new(Algorithm::HS256), &claims, &self.encoding)
            .map_err(AppError::TokenCreation)
    }

    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        jsonwebtoken::decode::<Claims>(token, &self.decoding, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                debug!("Rejected token: {}", e);
                AppError::InvalidToken
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    #[test]
    fn test_issued_token_round_trips_username() {
        let keys = JwtKeys::new(b"test-secret");
        let now = Utc::now();

        let token = keys.issue("admin", now).unwrap();
        let claims = keys.verify(&token).unwrap();

        assert_eq!(claims.username, "admin");
        assert_eq!(claims.exp, (now + Duration::hours(2)).timestamp());
    }

    #[test]
    fn test_expired_token_is_rejected() {
        let keys = JwtKeys::new(b"test-secret");
        let issued = Utc::now() - Duration::hours(3);

        let token = keys.issue("admin", issued).unwrap();

        assert!(matches!(keys.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_foreign_secret_is_rejected() {
        let ours = JwtKeys::new(b"test-secret");
        let theirs = JwtKeys::new(b"another-secret");

        let token = theirs.issue("admin", Utc::now()).unwrap();

        assert!(matches!(ours.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_other_hmac_algorithm_is_rejected() {
        let keys = JwtKeys::new(b"test-secret");
        let claims = Claims {
            username: "admin".to_string(),
            exp: (Utc::now() + Duration::hours(1)).timestamp(),
        };
        let token = encode(
            &Header::new(Algorithm::HS512),
            &claims,
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(keys.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_token_without_username_is_rejected() {
        let keys = JwtKeys::new(b"test-secret");
        let token = encode(
            &Header::new(Algorithm::HS256),
            &serde_json::json!({ "exp": (Utc::now() + Duration::hours(1)).timestamp() }),
            &EncodingKey::from_secret(b"test-secret"),
        )
        .unwrap();

        assert!(matches!(keys.verify(&token), Err(AppError::InvalidToken)));
    }

    #[test]
    fn test_garbage_is_rejected() {
        let keys = JwtKeys::new(b"test-secret");
        assert!(matches!(keys.verify("not.a.jwt"), Err(AppError::InvalidToken)));
    }
}
