//! Client-state layer for the StockWatch backend.
//!
//! All business logic (price monitoring, alert generation, persistence)
//! lives server-side; this crate is the typed access layer on top of it:
//! session bookkeeping, the authenticated HTTP client, and the three domain
//! services. This file exists mainly to make service tests easy (integration
//! tests under `tests/` can import the app state, client, services, stores).

use std::sync::Arc;

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod pages;
pub mod services;
pub mod session;
pub mod trending;

#[derive(Clone)]
pub struct AppState {
    pub settings: config::Settings,
    pub api: client::ApiClient,
    pub session: Arc<dyn session::SessionStore>,
}
