use sqlx::PgPool;

use crate::models::Stock;

// The ingester lower-cases the provider's column names, so the split ratio
// lands in a column with a space in it.
const STOCK_COLUMNS: &str =
    r#"datetime, open, high, low, close, volume, dividends, "stock splits" AS stock_splits, ticker"#;

fn fetch_all_sql(table: &str) -> String {
    format!(
        "SELECT {STOCK_COLUMNS}
         FROM {table}
         ORDER BY ticker, datetime ASC"
    )
}

fn fetch_latest_per_ticker_sql(table: &str) -> String {
    format!(
        "SELECT DISTINCT ON (ticker) {STOCK_COLUMNS}
         FROM {table}
         ORDER BY ticker, datetime DESC"
    )
}

fn fetch_by_ticker_sql(table: &str) -> String {
    format!(
        "SELECT {STOCK_COLUMNS}
         FROM {table}
         WHERE ticker = $1
         ORDER BY datetime ASC"
    )
}

pub async fn fetch_all(
    pool: &PgPool,
    table: &str,
) -> Result<Vec<Stock>, sqlx::Error> {
    let sql = fetch_all_sql(table);
    sqlx::query_as::<_, Stock>(&sql)
        .fetch_all(pool)
        .await
}

/// Most recent observation for every ticker in the table.
pub async fn fetch_latest_per_ticker(
    pool: &PgPool,
    table: &str,
) -> Result<Vec<Stock>, sqlx::Error> {
    let sql = fetch_latest_per_ticker_sql(table);
    sqlx::query_as::<_, Stock>(&sql)
        .fetch_all(pool)
        .await
}

pub async fn fetch_by_ticker(
    pool: &PgPool,
    table: &str,
    ticker: &str,
) -> Result<Vec<Stock>, sqlx::Error> {
    let sql = fetch_by_ticker_sql(table);
    sqlx::query_as::<_, Stock>(&sql)
        .bind(ticker)
        .fetch_all(pool)
        .await
}

pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query("SELECT 1")
        .execute(pool)
        .await
        .map(|_| ())
}
