use crate::AppState;
use crate::error::Result;
use crate::models::{WatchedStock, WatchedStockRequest};

pub async fn list(state: &AppState) -> Result<Vec<WatchedStock>> {
    state.api.get("/watchlist").await
}

/// Fails with `Conflict` when the backend already watches the symbol.
pub async fn add(
    state: &AppState,
    symbol: &str,
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> Result<WatchedStock> {
    let payload = WatchedStockRequest {
        symbol: symbol.to_string(),
        min_price,
        max_price,
    };

    state.api.post("/watchlist", &payload).await
}

/// Update the thresholds of an existing entry. The symbol travels in the
/// payload but is not mutable through this operation.
pub async fn update(
    state: &AppState,
    id: i64,
    symbol: &str,
    min_price: Option<f64>,
    max_price: Option<f64>,
) -> Result<WatchedStock> {
    let payload = WatchedStockRequest {
        symbol: symbol.to_string(),
        min_price,
        max_price,
    };

    state.api.put(&format!("/watchlist/{id}"), &payload).await
}

pub async fn remove(state: &AppState, id: i64) -> Result<()> {
    state.api.delete(&format!("/watchlist/{id}")).await
}
