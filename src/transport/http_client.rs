use crate::config::Config;
use crate::constants::USER_AGENT;
use crate::error::AppError;
use crate::session::TokenStore;
use async_trait::async_trait;
use reqwest::multipart::Form;
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, error};

/// Interface for the HTTP transport every resource service dispatches through
///
/// Implementations resolve the final URL from the configured base URL plus
/// the caller-supplied path, attach `Authorization: Bearer <token>` when a
/// token is stored (and omit the header entirely when none is), and map
/// non-success statuses to [`AppError`].
#[async_trait]
pub trait SwaplyHttpClient: Send + Sync {
    /// Makes a request with an optional JSON body, deserializing the
    /// response payload
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// Makes a request whose response body is discarded (204 or plain-text
    /// acknowledgements)
    async fn request_no_content<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), AppError>
    where
        B: Serialize + Sync;

    /// Posts a multipart form, deserializing the response payload
    ///
    /// No Content-Type is set on the request; the underlying client assigns
    /// the multipart boundary header itself.
    async fn upload<T>(&self, path: &str, form: Form) -> Result<T, AppError>
    where
        T: DeserializeOwned + Send;
}

/// HTTP transport backed by a shared `reqwest` client
///
/// Every call is an independent network request: no caching, no in-flight
/// deduplication, no queueing. Timeouts come from the configured client;
/// failures propagate unchanged to the caller.
pub struct SwaplyHttpClientImpl {
    config: Arc<Config>,
    tokens: TokenStore,
    http_client: Client,
}

impl SwaplyHttpClientImpl {
    /// Creates a new transport from the configuration and an injected
    /// token store
    pub fn new(config: Arc<Config>, tokens: TokenStore) -> Result<Self, AppError> {
        let http_client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(config.rest_api.timeout))
            .build()?;

        Ok(Self {
            config,
            tokens,
            http_client,
        })
    }

    /// Gets the token store this transport reads from
    pub fn tokens(&self) -> &TokenStore {
        &self.tokens
    }

    /// Resolves a request path against the configured base URL
    ///
    /// Absolute URLs pass through untouched so callers can follow
    /// backend-provided links.
    fn endpoint(&self, path: &str) -> String {
        if path.starts_with("http") {
            return path.to_string();
        }
        let base = self.config.rest_api.base_url.trim_end_matches('/');
        let path = path.trim_start_matches('/');
        format!("{base}/{path}")
    }

    /// Attaches the bearer token when one is stored; requests without a
    /// token carry no Authorization header at all
    async fn with_auth(&self, request: RequestBuilder) -> RequestBuilder {
        match self.tokens.get().await {
            Some(token) => request.header("Authorization", format!("Bearer {token}")),
            None => request,
        }
    }

    async fn send<B: Serialize + Sync>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<Response, AppError> {
        let url = self.endpoint(path);
        debug!("{} {}", method, url);

        let mut request = self
            .http_client
            .request(method, &url)
            .header("Accept", "application/json");
        request = self.with_auth(request).await;

        if let Some(b) = body {
            request = request.json(b);
        }

        let response = request.send().await?;
        check_status(response).await
    }
}

#[async_trait]
impl SwaplyHttpClient for SwaplyHttpClientImpl {
    async fn request<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<T, AppError>
    where
        B: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let response = self.send(method, path, body).await?;
        Ok(response.json().await?)
    }

    async fn request_no_content<B>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
    ) -> Result<(), AppError>
    where
        B: Serialize + Sync,
    {
        self.send(method, path, body).await?;
        Ok(())
    }

    async fn upload<T>(&self, path: &str, form: Form) -> Result<T, AppError>
    where
        T: DeserializeOwned + Send,
    {
        let url = self.endpoint(path);
        debug!("POST {} (multipart)", url);

        // Only Accept is set here; reqwest assigns the multipart boundary
        let mut request = self
            .http_client
            .post(&url)
            .header("Accept", "application/json");
        request = self.with_auth(request).await;

        let response = request.multipart(form).send().await?;
        let response = check_status(response).await?;
        Ok(response.json().await?)
    }
}

/// Maps a non-success response to an [`AppError`], consuming the body for
/// the backend's diagnostic message
pub async fn check_status(response: Response) -> Result<Response, AppError> {
    let status = response.status();
    debug!("Response status: {}", status);

    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    error!("Request failed with status {}: {}", status, body);

    match status {
        StatusCode::UNAUTHORIZED => Err(AppError::Unauthorized),
        StatusCode::FORBIDDEN => Err(AppError::Forbidden(body)),
        StatusCode::NOT_FOUND => Err(AppError::NotFound(body)),
        StatusCode::BAD_REQUEST => Err(AppError::InvalidInput(body)),
        StatusCode::CONFLICT => Err(AppError::Conflict(body)),
        _ => Err(AppError::Unexpected(status)),
    }
}
