use axum::extract::{Path, State};
use axum::routing::get;
use axum::{Json, Router};
use tracing::{error, info};

use crate::errors::AppError;
use crate::models::Stock;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/stocks", get(list_stocks))
        .route("/stocks/:ticker", get(get_stocks_by_ticker))
        .route("/latest", get(get_latest))
}

pub async fn list_stocks(
    State(state): State<AppState>
) -> Result<Json<Vec<Stock>>, AppError> {
    info!("GET /stocks - Fetching all price observations");
    let stocks = state.stocks.all().await
        .map_err(|e| {
            error!("Failed to fetch stocks: {}", e);
            AppError::Db(e)
        })?;
    Ok(Json(stocks))
}

pub async fn get_latest(
    State(state): State<AppState>
) -> Result<Json<Vec<Stock>>, AppError> {
    info!("GET /latest - Fetching latest observation per ticker");
    let stocks = state.stocks.latest_per_ticker().await
        .map_err(|e| {
            error!("Failed to fetch latest observations: {}", e);
            AppError::Db(e)
        })?;
    Ok(Json(stocks))
}

pub async fn get_stocks_by_ticker(
    Path(ticker): Path<String>,
    State(state): State<AppState>
) -> Result<Json<Vec<Stock>>, AppError> {
    info!("GET /stocks/{} - Fetching price history", ticker);
    let stocks = state.stocks.by_ticker(&ticker).await
        .map_err(|e| {
            error!("Failed to fetch price history for {}: {}", ticker, e);
            AppError::Db(e)
        })?;
    Ok(Json(stocks))
}
