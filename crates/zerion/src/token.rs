// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Token endpoints

use std::sync::Arc;

use api_client::{ApiResult, Executor, Query};
use tracing::instrument;

use crate::registry::Endpoint;

/// Token facade
#[derive(Debug, Clone)]
pub struct TokenApi {
    executor: Arc<Executor>,
}

impl TokenApi {
    /// Create a facade over a shared executor
    pub fn new(executor: Arc<Executor>) -> Self {
        Self { executor }
    }

    /// Token metadata
    #[instrument(skip(self))]
    pub async fn info(&self, token_id: &str) -> ApiResult {
        self.fetch(Endpoint::TokenInfo, token_id).await
    }

    /// Current price
    #[instrument(skip(self))]
    pub async fn price(&self, token_id: &str) -> ApiResult {
        self.fetch(Endpoint::TokenPrice, token_id).await
    }

    /// Largest holders
    #[instrument(skip(self))]
    pub async fn holders(&self, token_id: &str) -> ApiResult {
        self.fetch(Endpoint::TokenHolders, token_id).await
    }

    /// Recent transfers of the token
    #[instrument(skip(self))]
    pub async fn transactions(&self, token_id: &str) -> ApiResult {
        self.fetch(Endpoint::TokenTransactions, token_id).await
    }

    async fn fetch(&self, endpoint: Endpoint, token_id: &str) -> ApiResult {
        let path = endpoint.resolve(&[("token_id", token_id)])?;
        self.executor.get(&path, &Query::new()).await
    }
}
