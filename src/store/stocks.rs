use async_trait::async_trait;
use sqlx::PgPool;

use crate::db;
use crate::models::Stock;

/// Read access to the price observation table.
#[async_trait]
pub trait StockStore: Send + Sync {
    async fn all(&self) -> Result<Vec<Stock>, sqlx::Error>;

    async fn latest_per_ticker(&self) -> Result<Vec<Stock>, sqlx::Error>;

    async fn by_ticker(&self, ticker: &str) -> Result<Vec<Stock>, sqlx::Error>;

    /// Cheap round trip used by the health check.
    async fn ping(&self) -> Result<(), sqlx::Error>;
}

#[derive(Clone)]
pub struct PgStockStore {
    pool: PgPool,
    table: String,
}

impl PgStockStore {
    /// `table` must already be validated as a bare SQL identifier.
    pub fn new(pool: PgPool, table: impl Into<String>) -> Self {
        Self {
            pool,
            table: table.into(),
        }
    }
}

#[async_trait]
impl StockStore for PgStockStore {
    async fn all(&self) -> Result<Vec<Stock>, sqlx::Error> {
        db::stock_queries::fetch_all(&self.pool, &self.table).await
    }

    async fn latest_per_ticker(&self) -> Result<Vec<Stock>, sqlx::Error> {
        db::stock_queries::fetch_latest_per_ticker(&self.pool, &self.table).await
    }

    async fn by_ticker(&self, ticker: &str) -> Result<Vec<Stock>, sqlx::Error> {
        db::stock_queries::fetch_by_ticker(&self.pool, &self.table, ticker).await
    }

    async fn ping(&self) -> Result<(), sqlx::Error> {
        db::stock_queries::ping(&self.pool).await
    }
}
