// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Protocol endpoints

use std::sync::Arc;

use api_client::{ApiResult, Executor, Query};
use tracing::instrument;

use crate::registry::Endpoint;

/// Protocol facade
#[derive(Debug, Clone)]
pub struct ProtocolApi {
    executor: Arc<Executor>,
}

impl ProtocolApi {
    /// Create a facade over a shared executor
    pub fn new(executor: Arc<Executor>) -> Self {
        Self { executor }
    }

    /// Protocol description and headline figures
    #[instrument(skip(self))]
    pub async fn info(&self, protocol_id: &str) -> ApiResult {
        self.fetch(Endpoint::ProtocolInfo, protocol_id).await
    }

    /// Liquidity pools of the protocol
    #[instrument(skip(self))]
    pub async fn pools(&self, protocol_id: &str) -> ApiResult {
        self.fetch(Endpoint::ProtocolPools, protocol_id).await
    }

    /// Tokens issued or listed by the protocol
    #[instrument(skip(self))]
    pub async fn tokens(&self, protocol_id: &str) -> ApiResult {
        self.fetch(Endpoint::ProtocolTokens, protocol_id).await
    }

    /// TVL, volume and usage statistics
    #[instrument(skip(self))]
    pub async fn stats(&self, protocol_id: &str) -> ApiResult {
        self.fetch(Endpoint::ProtocolStats, protocol_id).await
    }

    async fn fetch(&self, endpoint: Endpoint, protocol_id: &str) -> ApiResult {
        let path = endpoint.resolve(&[("protocol_id", protocol_id)])?;
        self.executor.get(&path, &Query::new()).await
    }
}
