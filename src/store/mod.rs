mod stocks;

pub use stocks::{PgStockStore, StockStore};
