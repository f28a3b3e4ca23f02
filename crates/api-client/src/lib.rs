// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Authenticated JSON request pipeline for REST API integrations
//!
//! This crate contains everything between a domain facade and the network:
//! configuration, credential lookup, the authenticated HTTP executor, and the
//! error taxonomy every call returns.
//!
//! # Core Abstractions
//!
//! - **[`ClientConfig`]**: validated base URL, API key, [`AuthScheme`] and timeout
//! - **[`ConfigProvider`] / [`CredentialResolver`]**: injected configuration lookup
//!   that fails fast with [`ApiError::ConfigurationMissing`]
//! - **[`Executor`]**: one authenticated request per call, classified by [`classify`]
//! - **[`ApiError`] / [`ApiResult`]**: typed failures; payloads stay generic
//!   `serde_json::Value`s so the remote document round-trips untouched
//!
//! # Example
//!
//! ```rust,no_run
//! use api_client::{AuthScheme, ClientConfig, Executor, Query};
//!
//! # async fn example() -> api_client::ApiResult<()> {
//! let config = ClientConfig::new("https://api.zerion.io/v1", "zk_dev_123")?
//!     .with_auth_scheme(AuthScheme::Basic);
//! let executor = Executor::new(config)?;
//!
//! let payload = executor
//!     .get("/wallets/0x42/transactions", &Query::new().with("limit", 10))
//!     .await?;
//! println!("{payload}");
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod credentials;
pub mod error;
pub mod executor;
pub mod non_empty_string;
pub mod query;

pub use config::{AuthScheme, ClientConfig, ConfigKeys, DEFAULT_TIMEOUT_SECONDS};
pub use credentials::{ConfigProvider, CredentialResolver, EnvProvider};
pub use error::{ApiError, ApiResult, RetryAfter};
pub use executor::{Executor, classify};
pub use non_empty_string::{EmptyStringError, NonEmptyString};
pub use query::Query;
pub use reqwest::Method;
pub use tokio_util::sync::CancellationToken;
