use std::sync::Arc;

use crate::auth::{Credentials, JwtKeys};
use crate::store::StockStore;

#[derive(Clone)]
pub struct AppState {
    pub stocks: Arc<dyn StockStore>,
    pub jwt: Arc<JwtKeys>,
    pub credentials: Arc<Credentials>,
}
