use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Alert {
    pub id: i64,

    pub symbol: String,

    pub current_price: f64,
    pub threshold_price: f64,
    pub alert_type: AlertType,

    pub triggered_at: NaiveDateTime,

    // monotonic: once true it never reverts
    pub read: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertType {
    MinPriceExceeded,
    MaxPriceExceeded,
}
