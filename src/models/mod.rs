mod auth;
mod stock;

pub use auth::{DashboardResponse, LoginRequest, TokenResponse};
pub use stock::Stock;
