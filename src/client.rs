//! Single point of egress for all backend calls.
//!
//! Two policies live here so the services never reimplement them: every
//! outgoing request carries the cached bearer token when one exists, and any
//! 401 answer clears the session before surfacing as `Unauthenticated`.

use std::sync::Arc;
use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response, StatusCode};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::Settings;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

/// Error body shape the backend reports on non-2xx answers.
#[derive(Debug, serde::Deserialize)]
struct BackendError {
    message: Option<String>,
}

#[derive(Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    session: Arc<dyn SessionStore>,
}

impl ApiClient {
    pub fn new(settings: &Settings, session: Arc<dyn SessionStore>) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(settings.http_timeout_secs))
            .build()?;

        Ok(Self {
            http,
            base_url: settings.api_base_url.trim_end_matches('/').to_string(),
            session,
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Attach the bearer credential if a session exists; otherwise the
    /// request goes out unauthenticated and the backend decides.
    fn authorize(&self, req: RequestBuilder) -> RequestBuilder {
        match self.session.token() {
            Some(token) => req.bearer_auth(token),
            None => req,
        }
    }

    async fn dispatch(&self, req: RequestBuilder) -> Result<Response> {
        let res = self.authorize(req).send().await?;
        let status = res.status();

        if status.is_success() {
            return Ok(res);
        }

        if status == StatusCode::UNAUTHORIZED {
            // Token expired or invalid: drop the cached session before
            // surfacing, whatever the response body says.
            tracing::debug!("401 from backend, clearing cached session");
            self.session.clear();
            return Err(ApiError::Unauthenticated);
        }

        let message = Self::error_message(res).await;
        match status {
            StatusCode::NOT_FOUND => Err(ApiError::NotFound(message)),
            StatusCode::CONFLICT => Err(ApiError::Conflict(message)),
            _ => Err(ApiError::api(status.as_u16(), message)),
        }
    }

    async fn error_message(res: Response) -> String {
        let body = res.text().await.unwrap_or_default();
        serde_json::from_str::<BackendError>(&body)
            .ok()
            .and_then(|e| e.message)
            .unwrap_or(body)
    }

    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let res = self.dispatch(self.http.get(self.url(path))).await?;
        Ok(res.json().await?)
    }

    pub async fn get_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
    ) -> Result<T> {
        let req = self.http.get(self.url(path)).query(query);
        let res = self.dispatch(req).await?;
        Ok(res.json().await?)
    }

    pub async fn post<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let req = self.http.post(self.url(path)).json(body);
        let res = self.dispatch(req).await?;
        Ok(res.json().await?)
    }

    pub async fn put<B: Serialize, T: DeserializeOwned>(&self, path: &str, body: &B) -> Result<T> {
        let req = self.http.put(self.url(path)).json(body);
        let res = self.dispatch(req).await?;
        Ok(res.json().await?)
    }

    /// PUT whose success answer has no body worth decoding.
    pub async fn put_unit<B: Serialize>(&self, path: &str, body: &B) -> Result<()> {
        let req = self.http.put(self.url(path)).json(body);
        self.dispatch(req).await?;
        Ok(())
    }

    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(self.http.delete(self.url(path))).await?;
        Ok(())
    }
}
