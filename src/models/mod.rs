pub mod alert;
pub mod auth;
pub mod user;
pub mod watched_stock;

pub use alert::{Alert, AlertType};
pub use auth::{AuthResponse, LoginRequest, RegisterRequest};
pub use user::User;
pub use watched_stock::{WatchedStock, WatchedStockRequest};
