//! HTTP client for the user-administration backend. Every call reads the base URL
//! from the [`ConfigStore`] at send time, so a change made on the login view is
//! used by the very next request. Calls are never retried.

use super::{
    errors::AppError,
    types::{ErrorBody, LoginRequest, LoginResponse, UpdateDisableRequest},
};
use crate::{
    config::ConfigStore,
    model::{DisableFlag, User},
};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info_span, Instrument};
use url::Url;

/// Default request timeout applied by the native client.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);
/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

#[cfg(not(target_arch = "wasm32"))]
static APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: Client,
    config: ConfigStore,
}

impl ApiClient {
    /// # Errors
    /// Returns `AppError::Config` if the underlying HTTP client cannot be built.
    pub fn new(config: ConfigStore) -> Result<Self, AppError> {
        Self::with_timeout(config, DEFAULT_TIMEOUT)
    }

    /// Builds a client with an explicit request timeout. The timeout is ignored on
    /// `wasm32`, where the browser owns request lifetimes.
    ///
    /// # Errors
    /// Returns `AppError::Config` if the underlying HTTP client cannot be built.
    pub fn with_timeout(config: ConfigStore, timeout: Duration) -> Result<Self, AppError> {
        Ok(Self {
            http: build_http(timeout)?,
            config,
        })
    }

    #[must_use]
    pub fn config(&self) -> &ConfigStore {
        &self.config
    }

    /// `GET /users`
    ///
    /// # Errors
    /// Returns an error on transport failure, non-2xx status or an undecodable body.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        let url = self.endpoint(&["users"])?;
        let span = info_span!("api.list_users", http.method = "GET", url = %url);
        let response = send(self.http.get(url)).instrument(span).await?;

        handle_json_response(response).await
    }

    /// `GET /user/{uid}`
    ///
    /// # Errors
    /// Returns `AppError::NotFound` on 404, otherwise the same errors as
    /// [`ApiClient::list_users`].
    pub async fn get_user(&self, uid: &str) -> Result<User, AppError> {
        let uid = require_uid(uid)?;
        let url = self.endpoint(&["user", uid])?;
        let span = info_span!("api.get_user", http.method = "GET", url = %url);
        let response = send(self.http.get(url)).instrument(span).await?;

        if response.status() == StatusCode::NOT_FOUND {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::NotFound(error_message(&body)));
        }

        handle_json_response(response).await
    }

    /// `PUT /userupdate/{uid}` with `{"disable": 0|1}`. The response body is ignored.
    ///
    /// # Errors
    /// Returns an error on transport failure or a non-2xx status.
    pub async fn update_disable(&self, uid: &str, value: DisableFlag) -> Result<(), AppError> {
        let uid = require_uid(uid)?;
        let url = self.endpoint(&["userupdate", uid])?;
        let span = info_span!(
            "api.update_disable",
            http.method = "PUT",
            url = %url,
            disable = value.as_u8()
        );
        let body = UpdateDisableRequest { disable: value };
        let response = send(self.http.put(url).json(&body))
            .instrument(span)
            .await?;

        handle_empty_response(response).await
    }

    /// `POST /login`. Any 2xx is a successful login whatever the body holds;
    /// on a non-2xx status the backend's `error` text is returned unchanged in
    /// `AppError::Http`.
    ///
    /// # Errors
    /// Returns an error on transport failure or rejected credentials.
    pub async fn login(&self, request: &LoginRequest) -> Result<LoginResponse, AppError> {
        let url = self.endpoint(&["login"])?;
        // Never record the credentials on the span.
        let span = info_span!("api.login", http.method = "POST", url = %url);
        let response = send(self.http.post(url).json(request))
            .instrument(span)
            .await?;

        handle_login_response(response).await
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, AppError> {
        endpoint_url(&self.config.get(), segments)
    }
}

/// Joins path segments onto a base URL. Each segment is percent-encoded, so a uid
/// containing `/` stays a single segment.
///
/// # Errors
/// Returns `AppError::Config` if the base URL cannot be parsed or cannot carry a path.
pub fn endpoint_url(base_url: &str, segments: &[&str]) -> Result<Url, AppError> {
    let base = base_url.trim();
    let mut url = Url::parse(base)
        .map_err(|err| AppError::Config(format!("Invalid backend address '{base}': {err}")))?;

    url.path_segments_mut()
        .map_err(|()| AppError::Config(format!("Invalid backend address '{base}'")))?
        .pop_if_empty()
        .extend(segments);

    Ok(url)
}

fn require_uid(uid: &str) -> Result<&str, AppError> {
    let trimmed = uid.trim();
    if trimmed.is_empty() {
        Err(AppError::Config("User id is required.".to_string()))
    } else {
        Ok(trimmed)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn build_http(timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .user_agent(APP_USER_AGENT)
        .timeout(timeout)
        .build()
        .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))
}

#[cfg(target_arch = "wasm32")]
fn build_http(_timeout: Duration) -> Result<Client, AppError> {
    Client::builder()
        .build()
        .map_err(|err| AppError::Config(format!("Failed to build HTTP client: {err}")))
}

async fn send(request: reqwest::RequestBuilder) -> Result<Response, AppError> {
    debug!("sending request");
    let response = request.send().await.map_err(map_request_error)?;
    debug!(status = response.status().as_u16(), "response received");
    Ok(response)
}

/// Maps transport errors into `AppError` variants with timeout detection.
fn map_request_error(err: reqwest::Error) -> AppError {
    if err.is_timeout() {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else if err.is_builder() {
        AppError::Serialization(format!("Failed to build request: {err}"))
    } else {
        AppError::Network(format!("Unable to reach the server: {err}"))
    }
}

async fn handle_json_response<T: DeserializeOwned>(response: Response) -> Result<T, AppError> {
    if response.status().is_success() {
        response
            .json::<T>()
            .await
            .map_err(|err| AppError::Parse(format!("Failed to decode response: {err}")))
    } else {
        Err(http_error(response).await)
    }
}

async fn handle_login_response(response: Response) -> Result<LoginResponse, AppError> {
    if response.status().is_success() {
        let body = response.text().await.unwrap_or_default();
        Ok(login_response(&body))
    } else {
        Err(http_error(response).await)
    }
}

/// Takes `message` from a JSON object body, otherwise the trimmed text. An
/// empty body gives an empty message.
fn login_response(body: &str) -> LoginResponse {
    match serde_json::from_str::<serde_json::Value>(body) {
        Ok(value @ serde_json::Value::Object(_)) => {
            serde_json::from_value(value).unwrap_or_default()
        }
        _ => LoginResponse {
            message: body.trim().chars().take(MAX_ERROR_CHARS).collect(),
        },
    }
}

async fn handle_empty_response(response: Response) -> Result<(), AppError> {
    if response.status().is_success() {
        Ok(())
    } else {
        Err(http_error(response).await)
    }
}

async fn http_error(response: Response) -> AppError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    AppError::Http {
        status,
        message: error_message(&body),
    }
}

/// Prefers the backend's `{"error": ...}` text verbatim and falls back to the
/// sanitized raw body.
fn error_message(body: &str) -> String {
    match serde_json::from_str::<ErrorBody>(body) {
        Ok(ErrorBody { error }) if !error.trim().is_empty() => error,
        _ => sanitize_body(body),
    }
}

/// Trims and truncates error bodies for user-facing messages.
fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
