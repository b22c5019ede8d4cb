//! Shared HTTP plumbing for the backend API
//!
//! One `reqwest::Client` serves every wrapper. Each call is a single
//! attempt: no retries, no timeout handling beyond the transport default
//! configured at construction. Authenticated requests fail fast with
//! `NoSession` before anything is sent when no token is stored; non-2xx
//! responses are normalized into `ApiError` with the backend's `detail`
//! text carried verbatim.

use std::time::Duration;

use reqwest::multipart;
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::config::ApiConfig;
use crate::session::store::SessionStore;
use crate::utils::errors::{ApiError, ApiErrorKind, EventPassError, Result};

/// Shared request machinery for all API services
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
    store: SessionStore,
}

impl ApiClient {
    /// Create a new ApiClient instance
    pub fn new(config: &ApiConfig, store: SessionStore) -> Result<Self> {
        let http = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(&config.user_agent)
            .build()
            .map_err(EventPassError::Http)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            store,
        })
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// The stored token, or the local `NoSession` precondition failure
    fn bearer(&self) -> Result<String> {
        self.store.load_token()?.ok_or(EventPassError::NoSession)
    }

    /// GET with auth, JSON response
    pub async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let token = self.bearer()?;
        let request = self.http.get(self.endpoint(path)).bearer_auth(token);
        Self::read_json(self.send(path, request).await?).await
    }

    /// GET with auth, raw binary response
    pub async fn get_bytes(&self, path: &str) -> Result<Vec<u8>> {
        let token = self.bearer()?;
        let request = self.http.get(self.endpoint(path)).bearer_auth(token);
        let response = Self::check_status(self.send(path, request).await?).await?;
        let bytes = response.bytes().await.map_err(Self::transport_error)?;
        Ok(bytes.to_vec())
    }

    /// POST with auth, JSON body, JSON response
    pub async fn post<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let token = self.bearer()?;
        let request = self.http.post(self.endpoint(path)).bearer_auth(token).json(body);
        Self::read_json(self.send(path, request).await?).await
    }

    /// POST with auth and an empty body, JSON response
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let token = self.bearer()?;
        let request = self.http.post(self.endpoint(path)).bearer_auth(token);
        Self::read_json(self.send(path, request).await?).await
    }

    /// POST with auth and one multipart file part, JSON response
    pub async fn post_file<T: DeserializeOwned>(
        &self,
        path: &str,
        file_name: &str,
        mime: &str,
        bytes: Vec<u8>,
    ) -> Result<T> {
        let token = self.bearer()?;
        let part = multipart::Part::bytes(bytes)
            .file_name(file_name.to_string())
            .mime_str(mime)?;
        let form = multipart::Form::new().part("file", part);
        let request = self
            .http
            .post(self.endpoint(path))
            .bearer_auth(token)
            .multipart(form);
        Self::read_json(self.send(path, request).await?).await
    }

    /// PATCH with auth, JSON body, JSON response
    pub async fn patch<T: DeserializeOwned, B: Serialize>(&self, path: &str, body: &B) -> Result<T> {
        let token = self.bearer()?;
        let request = self.http.patch(self.endpoint(path)).bearer_auth(token).json(body);
        Self::read_json(self.send(path, request).await?).await
    }

    /// DELETE with auth, JSON response
    pub async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let token = self.bearer()?;
        let request = self.http.delete(self.endpoint(path)).bearer_auth(token);
        Self::read_json(self.send(path, request).await?).await
    }

    /// POST without auth, JSON body, JSON response
    pub async fn post_public<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        let request = self.http.post(self.endpoint(path)).json(body);
        Self::read_json(self.send(path, request).await?).await
    }

    /// POST without auth, form-urlencoded body, JSON response
    pub async fn post_form_public<T: DeserializeOwned, B: Serialize + ?Sized>(
        &self,
        path: &str,
        form: &B,
    ) -> Result<T> {
        let request = self.http.post(self.endpoint(path)).form(form);
        Self::read_json(self.send(path, request).await?).await
    }

    async fn send(&self, path: &str, request: RequestBuilder) -> Result<Response> {
        debug!(path = path, "Issuing API request");
        request.send().await.map_err(Self::transport_error)
    }

    fn transport_error(e: reqwest::Error) -> EventPassError {
        let api = if e.is_timeout() {
            ApiError::network("request timed out")
        } else if e.is_connect() {
            ApiError::network("could not reach the backend")
        } else {
            ApiError::network(e.to_string())
        };
        api.into()
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }
        let body = response.bytes().await.unwrap_or_default();
        Err(ApiError::from_response(status.as_u16(), &body).into())
    }

    async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        response.json::<T>().await.map_err(|e| {
            ApiError::new(ApiErrorKind::Unknown, format!("malformed response body: {e}")).into()
        })
    }
}
