// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Wallet, token and protocol facades over the Zerion portfolio API
//!
//! This crate binds the Zerion endpoint table to the generic request pipeline
//! in [`api_client`]. Facades return the decoded JSON document untouched;
//! interpreting `data`/`attributes` is up to the caller.
//!
//! # Architecture
//!
//! - **Endpoint Registry**: [`registry`] - operation name to path template, with
//!   percent-encoded substitution
//! - **Facades**: [`wallet::WalletApi`], [`token::TokenApi`], [`protocol::ProtocolApi`]
//! - **Client Bundle**: [`client::ZerionClient`] - one shared executor, built from
//!   explicit configuration or from `ZERION_*` settings
//!
//! # Example
//!
//! ```rust,no_run
//! use zerion::{Page, ZerionClient};
//!
//! # async fn example() -> api_client::ApiResult<()> {
//! let client = ZerionClient::from_env()?;
//! let page = Page::new().limit(10);
//! let transactions = client
//!     .wallets()
//!     .transactions("0x1234567890123456789012345678901234567890", &page)
//!     .await?;
//! println!("{transactions:#}");
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod page;
pub mod protocol;
pub mod registry;
pub mod token;
pub mod wallet;

pub use client::{
    API_BASE_URL_ENV_VAR, API_KEY_ENV_VAR, AUTH_SCHEME_ENV_VAR, CONFIG_KEYS, TIMEOUT_ENV_VAR,
    ZerionClient,
};
pub use page::Page;
pub use protocol::ProtocolApi;
pub use registry::{Endpoint, EndpointRegistry, EndpointTemplate};
pub use token::TokenApi;
pub use wallet::WalletApi;
