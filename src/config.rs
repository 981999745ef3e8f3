use std::time::Duration;

use url::Url;

use crate::error::ConfigError;

/// Port the ecoDMS API server listens on unless configured otherwise.
pub const DEFAULT_PORT: u16 = 8180;

/// Raw connection parameters for an ecoDMS server.
///
/// Validation happens in [`ClientConfig::validate`], which is run by
/// [`crate::Client::new`]; until then any value is accepted.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    origin: String,
    port: Option<u16>,
    username: String,
    password: String,
    timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(
        origin: impl Into<String>,
        username: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            origin: origin.into(),
            port: None,
            username: username.into(),
            password: password.into(),
            timeout: None,
        }
    }

    /// Override the API port (default 8180).
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Session-wide request timeout. Individual calls can still override it
    /// through [`crate::client::RequestOptions`].
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Check every constraint and apply defaults.
    ///
    /// Either fully succeeds with a [`NormalizedConfig`] or fails with
    /// [`ConfigError::Invalid`] listing all violations. Synchronous and
    /// side-effect-free.
    pub fn validate(&self) -> Result<NormalizedConfig, ConfigError> {
        let mut violations = Vec::new();

        let origin = match Url::parse(&self.origin) {
            Ok(url) => {
                if url.host_str().is_none() {
                    violations.push(format!("origin `{}` has no host", self.origin));
                    None
                } else {
                    Some(url)
                }
            }
            Err(err) => {
                violations.push(format!("origin `{}` is not a valid URL: {err}", self.origin));
                None
            }
        };

        if self.username.is_empty() {
            violations.push("username is required".to_string());
        }
        if self.password.is_empty() {
            violations.push("password is required".to_string());
        }

        let origin = match origin {
            Some(url) if violations.is_empty() => url,
            _ => return Err(ConfigError::Invalid(violations)),
        };

        Ok(NormalizedConfig {
            origin,
            port: self.port.unwrap_or(DEFAULT_PORT),
            username: self.username.clone(),
            password: self.password.clone(),
            timeout: self.timeout,
        })
    }
}

/// Fully validated configuration with defaults applied.
#[derive(Debug, Clone)]
pub struct NormalizedConfig {
    pub origin: Url,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub timeout: Option<Duration>,
}

impl NormalizedConfig {
    /// Base URL of the API: `{scheme}://{host}:{port}/api`.
    ///
    /// Any path, query, or explicit port on the configured origin is
    /// discarded; the configured API port always applies.
    pub fn base_url(&self) -> String {
        format!(
            "{}://{}:{}/api",
            self.origin.scheme(),
            // host presence checked during validation
            self.origin.host_str().unwrap_or_default(),
            self.port
        )
    }
}
