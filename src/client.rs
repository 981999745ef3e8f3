use std::path::Path;
use std::time::Duration;

use bytes::Bytes;
use reqwest::multipart;
use reqwest::{Body, Method, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio_util::io::ReaderStream;

use crate::config::ClientConfig;
use crate::error::{ApiError, ApiResult, ConfigError};

/// Per-call request settings.
#[derive(Debug, Default, Clone)]
pub struct RequestOptions {
    timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Abort the call if no response arrives within `timeout`. Overrides the
    /// session-wide timeout from [`ClientConfig::with_timeout`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Client for the ecoDMS API.
///
/// Holds one HTTP session bound to `{scheme}://{host}:{port}/api` with HTTP
/// Basic authentication. Immutable after construction and cheap to clone;
/// concurrent calls share the same connection pool.
///
/// The operation methods live on the traits in [`crate::api`]. The request
/// helpers on this type are public so callers can issue calls the traits do
/// not cover.
#[derive(Debug, Clone)]
pub struct Client {
    http_client: reqwest::Client,
    base_url: String,
    username: String,
    password: String,
}

impl Client {
    /// Validate `config` and build a client.
    ///
    /// Performs no network I/O; use [`crate::api::ConnectionApi::test`] to
    /// verify connectivity afterwards.
    pub fn new(config: ClientConfig) -> Result<Self, ConfigError> {
        let normalized = config.validate()?;

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = normalized.timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder.build().map_err(ConfigError::HttpClient)?;

        Ok(Self {
            http_client,
            base_url: normalized.base_url(),
            username: normalized.username,
            password: normalized.password,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn build_url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, path: &str, options: &RequestOptions) -> RequestBuilder {
        tracing::debug!(target: "ecodms_api", %method, path, "sending request");

        let mut builder = self
            .http_client
            .request(method, self.build_url(path))
            .basic_auth(&self.username, Some(&self.password));

        if let Some(timeout) = options.timeout {
            builder = builder.timeout(timeout);
        }

        builder
    }

    /// Map a non-2xx response to [`ApiError::Status`], keeping the remote
    /// error payload when it parses as JSON.
    async fn check(response: reqwest::Response) -> ApiResult<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        tracing::debug!(target: "ecodms_api", status = status.as_u16(), "server rejected request");
        let body = response.json::<serde_json::Value>().await.ok();
        Err(ApiError::Status {
            status: status.as_u16(),
            body,
        })
    }

    async fn execute<T: DeserializeOwned>(&self, builder: RequestBuilder) -> ApiResult<T> {
        let response = builder.send().await.map_err(ApiError::Transport)?;
        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// GET `path` and decode the JSON response body.
    pub async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.execute(self.request(Method::GET, path, &options)).await
    }

    /// GET `path` and return the raw response body (document content,
    /// preview images).
    pub async fn get_bytes(&self, path: &str, options: RequestOptions) -> ApiResult<Bytes> {
        let response = self
            .request(Method::GET, path, &options)
            .send()
            .await
            .map_err(ApiError::Transport)?;
        let response = Self::check(response).await?;
        Ok(response.bytes().await?)
    }

    /// POST a JSON `body` to `path` and decode the JSON response body.
    pub async fn post<B, T>(&self, path: &str, body: &B, options: RequestOptions) -> ApiResult<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        self.execute(self.request(Method::POST, path, &options).json(body))
            .await
    }

    /// POST a multipart `form` to `path` and decode the JSON response body.
    pub async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: multipart::Form,
        options: RequestOptions,
    ) -> ApiResult<T> {
        self.execute(self.request(Method::POST, path, &options).multipart(form))
            .await
    }

    /// Build a multipart part that streams the file at `path` instead of
    /// loading it into memory. Fails with [`ApiError::FileIo`] before any
    /// request is sent if the file cannot be opened; the open handle is owned
    /// by the part and dropped when the request finishes, successfully or not.
    pub(crate) async fn file_part(path: &Path) -> ApiResult<multipart::Part> {
        let file = tokio::fs::File::open(path)
            .await
            .map_err(|source| ApiError::FileIo {
                path: path.to_path_buf(),
                source,
            })?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "file".to_string());

        let body = Body::wrap_stream(ReaderStream::new(file));
        Ok(multipart::Part::stream(body)
            .file_name(file_name)
            .mime_str("application/octet-stream")?)
    }
}
