// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Client configuration
//!
//! [`ClientConfig`] is the only state shared between calls. It is validated
//! once at construction and immutable afterwards, so a client can never be
//! built without a usable base URL and API key.

use std::{fmt, str::FromStr, time::Duration};

use base64::{Engine, engine::general_purpose::STANDARD as b64};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::{
    credentials::{ConfigProvider, CredentialResolver},
    error::{ApiError, ApiResult},
    non_empty_string::NonEmptyString,
};

/// Default request timeout
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// How the API key is presented in the `Authorization` header
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthScheme {
    /// `Authorization: Basic base64("<api key>:")`
    #[default]
    Basic,
    /// `Authorization: Bearer <api key>`
    Bearer,
}

impl AuthScheme {
    /// Render the `Authorization` header value for `api_key`
    pub fn header_value(self, api_key: &str) -> String {
        match self {
            Self::Basic => format!("Basic {}", b64.encode(format!("{api_key}:"))),
            Self::Bearer => format!("Bearer {api_key}"),
        }
    }
}

impl fmt::Display for AuthScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Basic => f.write_str("basic"),
            Self::Bearer => f.write_str("bearer"),
        }
    }
}

impl FromStr for AuthScheme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "basic" => Ok(Self::Basic),
            "bearer" => Ok(Self::Bearer),
            other => Err(format!(
                "unsupported auth scheme '{other}', expected 'basic' or 'bearer'"
            )),
        }
    }
}

/// Names of the settings read by [`ClientConfig::from_provider`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigKeys {
    /// Base URL of the API, required
    pub base_url: &'static str,
    /// API key, required
    pub api_key: &'static str,
    /// Auth scheme (`basic` or `bearer`), optional
    pub auth_scheme: &'static str,
    /// Request timeout in whole seconds, optional
    pub timeout_seconds: &'static str,
}

/// Validated, immutable client configuration
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: NonEmptyString,
    api_key: NonEmptyString,
    auth_scheme: AuthScheme,
    timeout: Duration,
}

impl ClientConfig {
    /// Build a configuration with the default auth scheme and timeout
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigurationMissing`] if either value is blank and
    /// [`ApiError::ConfigurationInvalid`] if the base URL is not an absolute
    /// `http` or `https` URL.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> ApiResult<Self> {
        let base_url = NonEmptyString::new(base_url).map_err(|_| ApiError::ConfigurationMissing {
            key: "base_url".to_string(),
            hint: "provide the API base URL".to_string(),
        })?;
        let api_key = NonEmptyString::new(api_key).map_err(|_| ApiError::ConfigurationMissing {
            key: "api_key".to_string(),
            hint: "provide the API key".to_string(),
        })?;
        Self::from_parts(base_url, api_key, "base_url")
    }

    fn from_parts(
        base_url: NonEmptyString,
        api_key: NonEmptyString,
        base_url_key: &str,
    ) -> ApiResult<Self> {
        let parsed = Url::parse(base_url.as_str())
            .map_err(|e| ApiError::invalid_config(base_url_key, e))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ApiError::invalid_config(
                base_url_key,
                format!("unsupported URL scheme '{}'", parsed.scheme()),
            ));
        }
        if parsed.query().is_some() || parsed.fragment().is_some() {
            return Err(ApiError::invalid_config(
                base_url_key,
                "base URL must not carry a query string or fragment",
            ));
        }
        let base_url = base_url
            .trim_end_slashes()
            .ok_or_else(|| ApiError::invalid_config(base_url_key, "URL has no host"))?;

        Ok(Self {
            base_url,
            api_key,
            auth_scheme: AuthScheme::default(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        })
    }

    /// Resolve a configuration from `provider` using the given key names
    ///
    /// The base URL and API key are required; the auth scheme and timeout fall
    /// back to their defaults when unset.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigurationMissing`] for absent required values and
    /// [`ApiError::ConfigurationInvalid`] for values that do not parse.
    pub fn from_provider<P: ConfigProvider>(provider: P, keys: &ConfigKeys) -> ApiResult<Self> {
        let resolver = CredentialResolver::new(provider);
        let api_key = resolver.resolve(keys.api_key)?;
        let base_url = resolver.resolve(keys.base_url)?;

        let mut config = Self::from_parts(base_url, api_key, keys.base_url)?;

        if let Some(scheme) = resolver.resolve_optional(keys.auth_scheme) {
            let scheme = scheme
                .as_str()
                .parse::<AuthScheme>()
                .map_err(|message| ApiError::invalid_config(keys.auth_scheme, message))?;
            config = config.with_auth_scheme(scheme);
        }

        if let Some(timeout) = resolver.resolve_optional(keys.timeout_seconds) {
            let seconds = timeout
                .as_str()
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|seconds| *seconds > 0)
                .ok_or_else(|| {
                    ApiError::invalid_config(
                        keys.timeout_seconds,
                        format!("expected a positive number of seconds, got '{timeout}'"),
                    )
                })?;
            config = config.with_timeout(Duration::from_secs(seconds));
        }

        Ok(config)
    }

    /// Use `auth_scheme` for the `Authorization` header
    #[must_use]
    pub fn with_auth_scheme(mut self, auth_scheme: AuthScheme) -> Self {
        self.auth_scheme = auth_scheme;
        self
    }

    /// Use `timeout` as the per-request timeout
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Base URL without trailing slash
    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// API key
    pub fn api_key(&self) -> &str {
        self.api_key.as_str()
    }

    /// Selected auth scheme
    pub fn auth_scheme(&self) -> AuthScheme {
        self.auth_scheme
    }

    /// Per-request timeout
    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// `Authorization` header value for this configuration
    pub fn authorization(&self) -> String {
        self.auth_scheme.header_value(self.api_key.as_str())
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("auth_scheme", &self.auth_scheme)
            .field("timeout", &self.timeout)
            .finish()
    }
}
