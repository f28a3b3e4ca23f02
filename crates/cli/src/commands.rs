// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Command tree
//!
//! Parsing is clap's job; every command either lists the registry or makes
//! exactly one call through a facade.

use std::path::PathBuf;

use api_client::{ApiResult, AuthScheme, Query};
use clap::{Args, Parser, Subcommand};
use zerion::{Page, ZerionClient};

use crate::config::keys;

/// Query the Zerion portfolio API
#[derive(Debug, Parser)]
#[command(name = "zerion", version, about)]
pub struct Cli {
    #[command(flatten)]
    pub connection: ConnectionArgs,

    /// Print JSON on a single line
    #[arg(long, global = true)]
    pub compact: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Flags overriding file and environment settings
#[derive(Debug, Clone, Default, Args)]
pub struct ConnectionArgs {
    /// Configuration file to use instead of `zerion.{toml,json,yaml}`
    #[arg(long, env = "ZERION_CONFIG", global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// API base URL
    #[arg(long, global = true, value_name = "URL")]
    pub base_url: Option<String>,

    /// API key
    #[arg(long, global = true, value_name = "KEY")]
    pub api_key: Option<String>,

    /// How the API key is sent
    #[arg(long, global = true, value_name = "SCHEME")]
    pub auth_scheme: Option<AuthScheme>,

    /// Request timeout in seconds
    #[arg(long, global = true, value_name = "SECS", value_parser = clap::value_parser!(u64).range(1..))]
    pub timeout: Option<u64>,
}

impl ConnectionArgs {
    /// Flag values keyed by setting name
    pub fn overrides(&self) -> [(&'static str, Option<String>); 4] {
        [
            (keys::API_BASE_URL, self.base_url.clone()),
            (keys::API_KEY, self.api_key.clone()),
            (keys::AUTH_SCHEME, self.auth_scheme.map(|scheme| scheme.to_string())),
            (keys::TIMEOUT_SECONDS, self.timeout.map(|secs| secs.to_string())),
        ]
    }
}

/// Top-level commands
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Commands that make one API call
    #[command(flatten)]
    Api(ApiCommand),
    /// List the endpoint registry
    Endpoints,
}

/// Commands backed by one facade or registry call
#[derive(Debug, Subcommand)]
#[allow(missing_docs)]
pub enum ApiCommand {
    /// Wallet data
    Wallet {
        #[command(subcommand)]
        command: WalletCommand,
    },
    /// Token data
    Token {
        #[command(subcommand)]
        command: TokenCommand,
    },
    /// Protocol data
    Protocol {
        #[command(subcommand)]
        command: ProtocolCommand,
    },
    /// Call any registered endpoint by name
    Get(GetArgs),
}

#[derive(Debug, Subcommand)]
#[allow(missing_docs)]
pub enum WalletCommand {
    /// Wallet summary
    Info { address: String },
    /// Fungible and DeFi positions
    Positions { address: String },
    /// Transaction history
    Transactions {
        address: String,
        #[command(flatten)]
        page: PageArgs,
    },
    /// Protocols the wallet interacts with
    Protocols { address: String },
    /// Aggregated portfolio value
    Portfolio { address: String },
    /// Token balances
    Assets { address: String },
    /// NFT holdings
    Nfts {
        address: String,
        #[command(flatten)]
        page: PageArgs,
    },
}

#[derive(Debug, Subcommand)]
#[allow(missing_docs)]
pub enum TokenCommand {
    /// Token metadata
    Info { token_id: String },
    /// Current price
    Price { token_id: String },
    /// Largest holders
    Holders { token_id: String },
    /// Recent transfers
    Transactions { token_id: String },
}

#[derive(Debug, Subcommand)]
#[allow(missing_docs)]
pub enum ProtocolCommand {
    /// Protocol metadata
    Info { protocol_id: String },
    /// Liquidity pools
    Pools { protocol_id: String },
    /// Tokens listed by the protocol
    Tokens { protocol_id: String },
    /// Aggregate statistics
    Stats { protocol_id: String },
}

/// Pagination flags
#[derive(Debug, Clone, Default, Args)]
pub struct PageArgs {
    /// Maximum number of items
    #[arg(long)]
    pub limit: Option<u32>,
    /// Cursor from a previous response
    #[arg(long)]
    pub cursor: Option<String>,
}

impl From<&PageArgs> for Page {
    fn from(args: &PageArgs) -> Self {
        Page {
            limit: args.limit,
            cursor: args.cursor.clone(),
        }
    }
}

/// Arguments of `zerion get`
#[derive(Debug, Clone, Args)]
pub struct GetArgs {
    /// Registered endpoint name, see `zerion endpoints`
    pub endpoint: String,

    /// Path parameter, e.g. `--param address=0x42`
    #[arg(long = "param", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub params: Vec<(String, String)>,

    /// Query parameter, e.g. `--query limit=10`
    #[arg(long = "query", value_name = "KEY=VALUE", value_parser = parse_key_value)]
    pub query: Vec<(String, String)>,
}

/// Split `KEY=VALUE` at the first `=`
pub fn parse_key_value(raw: &str) -> Result<(String, String), String> {
    let (key, value) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected KEY=VALUE, got '{raw}'"))?;
    if key.is_empty() {
        return Err(format!("missing key in '{raw}'"));
    }
    Ok((key.to_string(), value.to_string()))
}

impl ApiCommand {
    /// Issue the call behind this command
    pub async fn execute(&self, client: &ZerionClient) -> ApiResult {
        match self {
            Self::Wallet { command } => command.execute(client).await,
            Self::Token { command } => command.execute(client).await,
            Self::Protocol { command } => command.execute(client).await,
            Self::Get(args) => {
                let params: Vec<(&str, &str)> = args
                    .params
                    .iter()
                    .map(|(key, value)| (key.as_str(), value.as_str()))
                    .collect();
                let query = args
                    .query
                    .iter()
                    .fold(Query::new(), |query, (key, value)| query.with(key.as_str(), value));
                client.get(&args.endpoint, &params, &query).await
            }
        }
    }
}

impl WalletCommand {
    async fn execute(&self, client: &ZerionClient) -> ApiResult {
        let wallets = client.wallets();
        match self {
            Self::Info { address } => wallets.info(address).await,
            Self::Positions { address } => wallets.positions(address).await,
            Self::Transactions { address, page } => {
                wallets.transactions(address, &page.into()).await
            }
            Self::Protocols { address } => wallets.protocols(address).await,
            Self::Portfolio { address } => wallets.portfolio(address).await,
            Self::Assets { address } => wallets.assets(address).await,
            Self::Nfts { address, page } => wallets.nfts(address, &page.into()).await,
        }
    }
}

impl TokenCommand {
    async fn execute(&self, client: &ZerionClient) -> ApiResult {
        let tokens = client.tokens();
        match self {
            Self::Info { token_id } => tokens.info(token_id).await,
            Self::Price { token_id } => tokens.price(token_id).await,
            Self::Holders { token_id } => tokens.holders(token_id).await,
            Self::Transactions { token_id } => tokens.transactions(token_id).await,
        }
    }
}

impl ProtocolCommand {
    async fn execute(&self, client: &ZerionClient) -> ApiResult {
        let protocols = client.protocols();
        match self {
            Self::Info { protocol_id } => protocols.info(protocol_id).await,
            Self::Pools { protocol_id } => protocols.pools(protocol_id).await,
            Self::Tokens { protocol_id } => protocols.tokens(protocol_id).await,
            Self::Stats { protocol_id } => protocols.stats(protocol_id).await,
        }
    }
}
