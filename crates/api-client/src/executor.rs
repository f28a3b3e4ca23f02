// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! HTTP request executor
//!
//! [`Executor`] owns the only pooled resource of the client: a
//! `reqwest::Client` configured once with the fixed header set
//! (`Accept: application/json` and the `Authorization` header derived from
//! [`ClientConfig`]). Every call to [`Executor::send`] issues exactly one
//! request and turns the outcome into an [`ApiResult`] via [`classify`].

use std::time::Duration;

use reqwest::{
    Client, Method, StatusCode,
    header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderValue, RETRY_AFTER},
};
use serde_json::Value;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};

use crate::{
    config::ClientConfig,
    error::{ApiError, ApiResult, RetryAfter},
    query::Query,
};

const USER_AGENT: &str = concat!("zerion-sdk/", env!("CARGO_PKG_VERSION"));

/// Issues authenticated requests against a single API base URL
///
/// `Executor` is `Send + Sync` and holds no per-call state, so one instance can
/// be shared (typically behind an `Arc`) by any number of concurrent calls.
#[derive(Debug)]
pub struct Executor {
    client: Client,
    config: ClientConfig,
}

impl Executor {
    /// Build an executor and its fixed header set
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigurationInvalid`] if the API key cannot be
    /// used in an HTTP header, or [`ApiError::Transport`] if the HTTP client
    /// cannot be created.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        let mut authorization = HeaderValue::from_str(&config.authorization())
            .map_err(|e| ApiError::invalid_config("api_key", e))?;
        authorization.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(AUTHORIZATION, authorization);

        let client = Client::builder()
            .default_headers(headers)
            .timeout(config.timeout())
            .user_agent(USER_AGENT)
            .build()
            .map_err(ApiError::transport)?;

        debug!(
            base_url = config.base_url(),
            auth_scheme = %config.auth_scheme(),
            timeout_seconds = config.timeout().as_secs(),
            "created API executor"
        );

        Ok(Self { client, config })
    }

    /// Configuration this executor was built from
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Absolute URL for `path` (without query string)
    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url(), path)
    }

    /// `GET path?query`
    pub async fn get(&self, path: &str, query: &Query) -> ApiResult {
        self.send(Method::GET, path, query, None).await
    }

    /// Send one request and classify the response
    ///
    /// The body, when given, is sent as JSON. No retry is attempted whatever
    /// the outcome.
    pub async fn send(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
    ) -> ApiResult {
        let url = self.url(path);
        debug!(%method, path, query = ?query.pairs(), "sending API request");

        let mut request = self.client.request(method.clone(), &url);
        if !query.is_empty() {
            request = request.query(query.pairs());
        }
        if let Some(body) = body {
            request = request.json(body);
        }

        let limit = self.config.timeout();
        let exchange = async {
            let response = request.send().await?;
            let status = response.status();
            let retry_after = response
                .headers()
                .get(RETRY_AFTER)
                .and_then(|value| value.to_str().ok())
                .map(str::to_owned);
            let body = response.bytes().await?;
            Ok::<_, reqwest::Error>((status, retry_after, body))
        };

        let (status, retry_after, body) = timeout(limit, exchange)
            .await
            .map_err(|_| timed_out(limit))?
            .map_err(|e| {
                if e.is_timeout() {
                    timed_out(limit)
                } else {
                    ApiError::transport(e)
                }
            })
            .inspect_err(|e| warn!(%method, path, error = %e, "API request failed in transport"))?;

        debug!(%method, path, status = status.as_u16(), "received API response");

        classify(status, retry_after.as_deref(), &body).inspect_err(|e| match e {
            ApiError::RateLimited { retry_after } => {
                warn!(%method, path, %retry_after, "API rate limit exceeded");
            }
            ApiError::Api { status, .. } => {
                warn!(%method, path, status, "API returned an error response");
            }
            _ => {}
        })
    }

    /// Like [`Executor::send`], but resolves to a `cancelled` transport error
    /// as soon as `token` is cancelled
    ///
    /// A cancelled call never yields a partially read response.
    pub async fn send_with_cancellation(
        &self,
        method: Method,
        path: &str,
        query: &Query,
        body: Option<&Value>,
        token: &CancellationToken,
    ) -> ApiResult {
        tokio::select! {
            biased;
            () = token.cancelled() => {
                debug!(path, "API request cancelled");
                Err(ApiError::transport("cancelled"))
            }
            result = self.send(method, path, query, body) => result,
        }
    }
}

fn timed_out(limit: Duration) -> ApiError {
    ApiError::transport(format!("request timed out after {}s", limit.as_secs()))
}

/// Map a received response onto an [`ApiResult`]
///
/// - `429` becomes [`ApiError::RateLimited`] with the parsed `Retry-After` hint.
/// - Any other non-2xx becomes [`ApiError::Api`]; the body is kept as decoded
///   JSON, or as a JSON string holding the raw text when it is not JSON.
/// - A 2xx body is decoded as JSON (an empty body decodes to `null`); a body
///   that does not decode becomes [`ApiError::MalformedResponse`].
pub fn classify(status: StatusCode, retry_after: Option<&str>, body: &[u8]) -> ApiResult {
    if status == StatusCode::TOO_MANY_REQUESTS {
        return Err(ApiError::RateLimited {
            retry_after: RetryAfter::from_header(retry_after),
        });
    }

    if !status.is_success() {
        let detail = serde_json::from_slice(body)
            .unwrap_or_else(|_| Value::String(String::from_utf8_lossy(body).into_owned()));
        return Err(ApiError::Api {
            status: status.as_u16(),
            detail,
        });
    }

    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(Value::Null);
    }

    serde_json::from_slice(body).map_err(ApiError::malformed)
}
