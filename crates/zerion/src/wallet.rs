// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet endpoints
//!
//! Every method returns the API document verbatim; shapes differ per endpoint
//! (usually `{"data": ...}` with `type`/`id`/`attributes` items) and are left
//! for the caller to interpret.

use std::sync::Arc;

use api_client::{ApiResult, Executor, Query};
use tracing::instrument;

use crate::{page::Page, registry::Endpoint};

/// Wallet facade
#[derive(Debug, Clone)]
pub struct WalletApi {
    executor: Arc<Executor>,
}

impl WalletApi {
    /// Create a facade over a shared executor
    pub fn new(executor: Arc<Executor>) -> Self {
        Self { executor }
    }

    /// Wallet summary
    #[instrument(skip(self))]
    pub async fn info(&self, address: &str) -> ApiResult {
        self.fetch(Endpoint::WalletInfo, address, &Query::new()).await
    }

    /// Fungible and DeFi positions held by the wallet
    #[instrument(skip(self))]
    pub async fn positions(&self, address: &str) -> ApiResult {
        self.fetch(Endpoint::WalletPositions, address, &Query::new()).await
    }

    /// One page of transaction history
    #[instrument(skip(self))]
    pub async fn transactions(&self, address: &str, page: &Page) -> ApiResult {
        self.fetch(Endpoint::WalletTransactions, address, &page.to_query()).await
    }

    /// Protocols the wallet interacts with
    #[instrument(skip(self))]
    pub async fn protocols(&self, address: &str) -> ApiResult {
        self.fetch(Endpoint::WalletProtocols, address, &Query::new()).await
    }

    /// Aggregated portfolio value
    #[instrument(skip(self))]
    pub async fn portfolio(&self, address: &str) -> ApiResult {
        self.fetch(Endpoint::WalletPortfolio, address, &Query::new()).await
    }

    /// One page of NFT holdings
    #[instrument(skip(self))]
    pub async fn nfts(&self, address: &str, page: &Page) -> ApiResult {
        self.fetch(Endpoint::WalletNfts, address, &page.to_query()).await
    }

    /// Token balances held by the wallet
    #[instrument(skip(self))]
    pub async fn assets(&self, address: &str) -> ApiResult {
        self.fetch(Endpoint::WalletAssets, address, &Query::new()).await
    }

    async fn fetch(&self, endpoint: Endpoint, address: &str, query: &Query) -> ApiResult {
        let path = endpoint.resolve(&[("address", address)])?;
        self.executor.get(&path, query).await
    }
}
