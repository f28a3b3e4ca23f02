// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Zerion client bundle
//!
//! [`ZerionClient`] owns one shared [`Executor`] and hands out the wallet,
//! token and protocol facades. Cloning the client or any facade only clones
//! the `Arc`, so all of them reuse the same connection pool.

use std::sync::Arc;

use api_client::{
    ApiResult, ClientConfig, ConfigKeys, ConfigProvider, EnvProvider, Executor, Query,
};
use tracing::{info, instrument};

use crate::{protocol::ProtocolApi, registry::EndpointRegistry, token::TokenApi, wallet::WalletApi};

/// Environment variable holding the API base URL
pub const API_BASE_URL_ENV_VAR: &str = "ZERION_API_BASE_URL";
/// Environment variable holding the API key
pub const API_KEY_ENV_VAR: &str = "ZERION_API_KEY";
/// Environment variable selecting `basic` or `bearer` authorization
pub const AUTH_SCHEME_ENV_VAR: &str = "ZERION_AUTH_SCHEME";
/// Environment variable holding the request timeout in seconds
pub const TIMEOUT_ENV_VAR: &str = "ZERION_TIMEOUT_SECONDS";

/// Configuration keys read by [`ZerionClient::from_provider`]
pub const CONFIG_KEYS: ConfigKeys = ConfigKeys {
    base_url: API_BASE_URL_ENV_VAR,
    api_key: API_KEY_ENV_VAR,
    auth_scheme: AUTH_SCHEME_ENV_VAR,
    timeout_seconds: TIMEOUT_ENV_VAR,
};

/// Entry point to the Zerion API
#[derive(Debug, Clone)]
pub struct ZerionClient {
    executor: Arc<Executor>,
}

impl ZerionClient {
    /// Create a client from an explicit configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the executor cannot be built from `config`.
    pub fn new(config: ClientConfig) -> ApiResult<Self> {
        info!(
            base_url = config.base_url(),
            auth_scheme = %config.auth_scheme(),
            "creating Zerion client"
        );
        Ok(Self::with_executor(Arc::new(Executor::new(config)?)))
    }

    /// Wrap an existing executor
    pub fn with_executor(executor: Arc<Executor>) -> Self {
        Self { executor }
    }

    /// Create a client from the `ZERION_*` settings of `provider`
    ///
    /// # Errors
    ///
    /// Returns [`api_client::ApiError::ConfigurationMissing`] when the base URL
    /// or API key is not set; no request is issued in that case.
    pub fn from_provider<P: ConfigProvider>(provider: P) -> ApiResult<Self> {
        Self::new(ClientConfig::from_provider(provider, &CONFIG_KEYS)?)
    }

    /// Create a client from the process environment
    pub fn from_env() -> ApiResult<Self> {
        Self::from_provider(EnvProvider)
    }

    /// Shared executor
    pub fn executor(&self) -> &Arc<Executor> {
        &self.executor
    }

    /// Wallet endpoints
    pub fn wallets(&self) -> WalletApi {
        WalletApi::new(Arc::clone(&self.executor))
    }

    /// Token endpoints
    pub fn tokens(&self) -> TokenApi {
        TokenApi::new(Arc::clone(&self.executor))
    }

    /// Protocol endpoints
    pub fn protocols(&self) -> ProtocolApi {
        ProtocolApi::new(Arc::clone(&self.executor))
    }

    /// `GET` any registered endpoint by name
    ///
    /// # Errors
    ///
    /// Fails with [`api_client::ApiError::UnknownEndpoint`] or
    /// [`api_client::ApiError::MissingParameter`] before any request is sent,
    /// otherwise with the executor's result.
    #[instrument(skip(self, query))]
    pub async fn get(&self, endpoint: &str, params: &[(&str, &str)], query: &Query) -> ApiResult {
        let path = EndpointRegistry::resolve(endpoint, params)?;
        self.executor.get(&path, query).await
    }
}
