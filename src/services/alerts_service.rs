use crate::AppState;
use crate::error::Result;
use crate::models::Alert;

pub const DEFAULT_PAGE: u32 = 0;
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// Page through the alert history; parameters are passed to the backend
/// verbatim, nothing is cached across pages.
pub async fn list(state: &AppState, page: u32, size: u32) -> Result<Vec<Alert>> {
    state
        .api
        .get_query(
            "/alerts",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
}

pub async fn list_unread(state: &AppState) -> Result<Vec<Alert>> {
    state.api.get("/alerts/unread").await
}

/// Unread total for the badge. Never propagates an error: the badge is a
/// non-critical affordance, so an unreachable backend reads as zero.
pub async fn unread_count(state: &AppState) -> i64 {
    match state.api.get::<i64>("/alerts/unread/count").await {
        Ok(count) => count,
        Err(err) => {
            tracing::warn!("unread count unavailable: {err}");
            0
        }
    }
}

/// Mark the given alerts read. Idempotent on the backend: re-marking an
/// already-read alert is a no-op.
pub async fn mark_as_read(state: &AppState, ids: &[i64]) -> Result<()> {
    state.api.put_unit("/alerts/mark-read", &ids).await
}

/// Mark every unread alert in `alerts` read in one call. Skips the network
/// round-trip entirely when nothing is unread.
pub async fn mark_all_as_read(state: &AppState, alerts: &[Alert]) -> Result<usize> {
    let unread_ids: Vec<i64> = alerts.iter().filter(|a| !a.read).map(|a| a.id).collect();

    if unread_ids.is_empty() {
        return Ok(0);
    }

    mark_as_read(state, &unread_ids).await?;
    Ok(unread_ids.len())
}
