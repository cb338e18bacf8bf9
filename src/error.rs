use thiserror::Error;

pub type Result<T> = std::result::Result<T, ApiError>;

/// Failure taxonomy surfaced to the view layer.
///
/// `Unauthenticated` is special: the HTTP client raises it after clearing the
/// cached session, so a caller seeing it knows the user must log in again.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("unauthorized - please login again")]
    Unauthenticated,

    #[error("invalid username or password")]
    InvalidCredentials,

    #[error("registration rejected: {0}")]
    RegistrationFailed(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),

    #[error("api error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("request failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("session storage error: {0}")]
    Storage(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ApiError {
    pub fn api(status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            status,
            message: message.into(),
        }
    }

    /// True when the backend actively refused the request (4xx), as opposed
    /// to the request never completing or the server blowing up.
    pub fn is_rejection(&self) -> bool {
        match self {
            Self::Unauthenticated
            | Self::InvalidCredentials
            | Self::RegistrationFailed(_)
            | Self::NotFound(_)
            | Self::Conflict(_) => true,
            Self::Api { status, .. } => (400..500).contains(status),
            _ => false,
        }
    }
}
