use serde::{Deserialize, Serialize};

/// Profile half of the cached session, mirrored from the auth response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    pub email: String,
}
