mod credentials;
mod jwt;
mod middleware;

pub use credentials::Credentials;
pub use jwt::{JwtKeys, TOKEN_TTL_HOURS};
pub use middleware::{require_bearer, AuthUser};
