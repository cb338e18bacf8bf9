use crate::AppState;
use crate::error::{ApiError, Result};
use crate::models::{AuthResponse, LoginRequest, RegisterRequest, User};
use crate::session::Session;

/// Persist the token/user pair from a successful auth exchange.
///
/// This runs before the response is handed back, so by the time the caller
/// regains control every follow-up request already carries the new token.
fn persist(state: &AppState, resp: &AuthResponse) -> Result<()> {
    state.session.save(&Session {
        token: resp.token.clone(),
        user: User {
            username: resp.username.clone(),
            email: resp.email.clone(),
        },
    })
}

pub async fn login(state: &AppState, username: &str, password: &str) -> Result<AuthResponse> {
    let payload = LoginRequest {
        username: username.to_string(),
        password: password.to_string(),
    };

    let resp: AuthResponse = match state.api.post("/auth/login", &payload).await {
        Ok(resp) => resp,
        // Any 4xx here means the backend refused the pair; the transport
        // failures keep their own identity.
        Err(err) if err.is_rejection() => return Err(ApiError::InvalidCredentials),
        Err(err) => return Err(err),
    };

    persist(state, &resp)?;
    Ok(resp)
}

pub async fn register(
    state: &AppState,
    username: &str,
    email: &str,
    password: &str,
) -> Result<AuthResponse> {
    let payload = RegisterRequest {
        username: username.to_string(),
        email: email.to_string(),
        password: password.to_string(),
    };

    let resp: AuthResponse = match state.api.post("/auth/register", &payload).await {
        Ok(resp) => resp,
        Err(err) if err.is_rejection() => {
            return Err(ApiError::RegistrationFailed(err.to_string()));
        }
        Err(err) => return Err(err),
    };

    persist(state, &resp)?;
    Ok(resp)
}

/// Pure local operation, no network call.
pub fn logout(state: &AppState) {
    state.session.clear();
}

pub fn is_authenticated(state: &AppState) -> bool {
    state.session.is_authenticated()
}

pub fn current_user(state: &AppState) -> Option<User> {
    state.session.load().map(|s| s.user)
}
