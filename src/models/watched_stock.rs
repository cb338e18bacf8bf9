use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedStock {
    pub id: i64,

    pub symbol: String,

    pub min_price: Option<f64>,
    pub max_price: Option<f64>,

    pub created_at: NaiveDateTime,
    pub active: bool,
}

/// Payload for add/update; the backend ignores symbol changes on update.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WatchedStockRequest {
    pub symbol: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<f64>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<f64>,
}
