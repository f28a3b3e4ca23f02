// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error taxonomy for the request pipeline
//!
//! Every fallible operation in this crate (and in the domain facades built on
//! top of it) returns [`ApiResult`]. The variants split into two groups:
//!
//! - **Setup errors** ([`ApiError::is_setup_error`]): missing or invalid
//!   configuration, unknown endpoint names, missing or unusable path
//!   parameters. These are programming or deployment mistakes and are raised
//!   before any network I/O.
//! - **Call errors**: transport failures, rate limiting, non-success API
//!   responses and undecodable payloads. These describe the outcome of exactly
//!   one HTTP request.
//!
//! Nothing is retried; the caller decides what to do with each variant.

use std::fmt;

use serde_json::Value;
use thiserror::Error;

/// Result of a single API call: the decoded JSON payload or a typed failure
pub type ApiResult<T = Value> = Result<T, ApiError>;

/// Retry hint carried by [`ApiError::RateLimited`]
///
/// Displays as the number of seconds, or `unknown` when the server did not
/// send a usable `Retry-After` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryAfter {
    /// Server asked the client to wait this many seconds
    Seconds(u64),
    /// Header absent or not a non-negative integer
    Unknown,
}

impl RetryAfter {
    /// Parse a raw `Retry-After` header value
    ///
    /// Only the delay-seconds form is understood; HTTP dates map to
    /// [`RetryAfter::Unknown`].
    pub fn from_header(value: Option<&str>) -> Self {
        value
            .and_then(|raw| raw.trim().parse::<u64>().ok())
            .map_or(Self::Unknown, Self::Seconds)
    }

    /// Number of seconds, if known
    pub fn seconds(self) -> Option<u64> {
        match self {
            Self::Seconds(seconds) => Some(seconds),
            Self::Unknown => None,
        }
    }
}

impl fmt::Display for RetryAfter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Seconds(seconds) => write!(f, "{seconds}"),
            Self::Unknown => f.write_str("unknown"),
        }
    }
}

/// Errors produced by the request pipeline
#[derive(Debug, Error)]
#[allow(missing_docs)]
pub enum ApiError {
    /// A required configuration value is absent or blank
    #[error("configuration value {key} is missing: {hint}")]
    ConfigurationMissing { key: String, hint: String },

    /// A configuration value is present but cannot be used
    #[error("configuration value {key} is invalid: {message}")]
    ConfigurationInvalid { key: String, message: String },

    /// The endpoint name is not in the registry
    #[error("unknown endpoint: {name}")]
    UnknownEndpoint { name: String },

    /// A path placeholder had no value
    #[error("endpoint {endpoint} requires parameter {parameter}")]
    MissingParameter { endpoint: String, parameter: String },

    /// A path parameter value cannot be used as a single path segment
    #[error("endpoint {endpoint} cannot use '{value}' as {parameter}")]
    InvalidParameter {
        endpoint: String,
        parameter: String,
        value: String,
    },

    /// The request never produced an HTTP response (DNS, TCP, TLS, timeout, cancellation)
    #[error("transport error: {message}")]
    Transport { message: String },

    /// The server answered 429
    #[error("rate limit exceeded, retry after {retry_after} seconds")]
    RateLimited { retry_after: RetryAfter },

    /// The server answered with a non-success status; `detail` is the body as returned
    #[error("API request failed with status {status}: {detail}")]
    Api { status: u16, detail: Value },

    /// A success response whose body is not valid JSON
    #[error("malformed response: {message}")]
    MalformedResponse { message: String },
}

impl ApiError {
    /// Create a transport error
    pub fn transport<T: ToString>(message: T) -> Self {
        Self::Transport {
            message: message.to_string(),
        }
    }

    /// Create a malformed-response error
    pub fn malformed<T: ToString>(message: T) -> Self {
        Self::MalformedResponse {
            message: message.to_string(),
        }
    }

    /// Create an invalid-configuration error
    pub fn invalid_config<K: ToString, M: ToString>(key: K, message: M) -> Self {
        Self::ConfigurationInvalid {
            key: key.to_string(),
            message: message.to_string(),
        }
    }

    /// Whether the error was raised before any request was issued
    pub fn is_setup_error(&self) -> bool {
        matches!(
            self,
            Self::ConfigurationMissing { .. }
                | Self::ConfigurationInvalid { .. }
                | Self::UnknownEndpoint { .. }
                | Self::MissingParameter { .. }
                | Self::InvalidParameter { .. }
        )
    }

    /// HTTP status of the response that caused the error, if one was received
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RateLimited { .. } => Some(429),
            Self::Api { status, .. } => Some(*status),
            _ => None,
        }
    }
}
