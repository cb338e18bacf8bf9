//! Terminal rendering for the dashboard binary. This is the "view layer":
//! it turns typed data and typed failures into the static strings a user
//! sees, and owns the error-taxonomy-to-message table.

use crate::error::ApiError;
use crate::models::{Alert, AlertType, WatchedStock};
use crate::trending::TrendingStock;

fn fmt2(x: f64) -> String {
    format!("{:.2}", x)
}

// ---------------- Error messages ----------------

/// Map a typed failure to the message shown to the user. Auth-related
/// failures always win over the caller's context message.
pub fn error_line(err: &ApiError, fallback: &str) -> String {
    match err {
        ApiError::Unauthenticated => "Session expired - please login again.".to_string(),
        ApiError::InvalidCredentials => "Invalid login credentials".to_string(),
        ApiError::RegistrationFailed(_) => "Registration failed".to_string(),
        _ => fallback.to_string(),
    }
}

// ---------------- Dashboard ----------------

pub fn watchlist_table(stocks: &[WatchedStock]) -> String {
    if stocks.is_empty() {
        return "Your watchlist is empty. Add a stock with `stockwatch watch add <SYMBOL>`.\n"
            .to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:>4}  {:<8}{:>10}{:>10}  {:<12}{}\n",
        "id", "symbol", "min", "max", "since", "status"
    ));

    for stock in stocks {
        let min = stock.min_price.map(fmt2).unwrap_or_else(|| "-".to_string());
        let max = stock.max_price.map(fmt2).unwrap_or_else(|| "-".to_string());
        let status = if stock.active { "active" } else { "paused" };

        out.push_str(&format!(
            "{:>4}  {:<8}{:>10}{:>10}  {:<12}{}\n",
            stock.id,
            stock.symbol,
            min,
            max,
            stock.created_at.format("%Y-%m-%d"),
            status
        ));
    }

    out
}

pub fn unread_badge(count: i64) -> String {
    match count {
        0 => "No unread alerts.".to_string(),
        1 => "1 unread alert.".to_string(),
        n => format!("{n} unread alerts."),
    }
}

// ---------------- Alerts ----------------

pub fn alert_line(alert: &Alert) -> String {
    let type_text = match alert.alert_type {
        AlertType::MaxPriceExceeded => "rose above",
        AlertType::MinPriceExceeded => "dropped below",
    };

    let marker = if alert.read { " " } else { "*" };

    format!(
        "{marker} [{}] {} Stock {} {} threshold of ${}. Current price: ${}",
        alert.id,
        alert.triggered_at.format("%Y-%m-%d %H:%M"),
        alert.symbol,
        type_text,
        fmt2(alert.threshold_price),
        fmt2(alert.current_price),
    )
}

pub fn alerts_list(alerts: &[Alert]) -> String {
    if alerts.is_empty() {
        return "No alerts.\n".to_string();
    }

    let mut out = String::new();
    for alert in alerts {
        out.push_str(&alert_line(alert));
        out.push('\n');
    }
    out
}

// ---------------- Trending ----------------

pub fn trending_table(stocks: &[TrendingStock]) -> String {
    if stocks.is_empty() {
        return "No trending stocks in this category.\n".to_string();
    }

    let mut out = String::new();
    out.push_str(&format!(
        "{:<8}{:<26}{:>10}{:>9}{:>8}  {:<12}{}\n",
        "symbol", "name", "price", "change", "%", "mkt cap", "category"
    ));

    for stock in stocks {
        out.push_str(&format!(
            "{:<8}{:<26}{:>10}{:>9}{:>8}  {:<12}{}\n",
            stock.symbol,
            stock.name,
            fmt2(stock.price),
            fmt2(stock.change),
            fmt2(stock.change_percent),
            stock.market_cap,
            stock.category
        ));
    }

    out
}
