pub mod alerts_service;
pub mod auth_service;
pub mod watchlist_service;
