// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Endpoint registry
//!
//! Static table mapping each logical operation of the Zerion API to its URL
//! path template. Templates use `{name}` placeholders; resolving an endpoint
//! substitutes every placeholder with a percent-encoded path segment, so a
//! caller-supplied identifier can never introduce extra segments, a query
//! string or a fragment. The dot segments `.` and `..` are rejected outright:
//! URL parsers collapse them (encoded or not) into a different path.

use std::{fmt, str::FromStr};

use api_client::{ApiError, ApiResult};
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Everything outside the RFC 3986 unreserved set is encoded
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// A named URL path template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EndpointTemplate {
    /// Logical operation name, e.g. `wallet_positions`
    pub name: &'static str,
    /// Path with `{param}` placeholders, e.g. `/wallets/{address}/positions`
    pub path: &'static str,
}

impl EndpointTemplate {
    /// Placeholder names in order of appearance
    pub fn placeholders(&self) -> impl Iterator<Item = &'static str> {
        let path = self.path;
        path.match_indices('{').filter_map(move |(open, _)| {
            path[open + 1..]
                .find('}')
                .map(|len| &path[open + 1..open + 1 + len])
        })
    }

    /// Substitute every placeholder with its value from `params`
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::MissingParameter`] if a placeholder has no value or
    /// an empty one, and [`ApiError::InvalidParameter`] for a dot segment.
    pub fn render(&self, params: &[(&str, &str)]) -> ApiResult<String> {
        let mut rendered = String::with_capacity(self.path.len() + 48);
        let mut rest = self.path;

        while let Some(open) = rest.find('{') {
            let Some(len) = rest[open + 1..].find('}') else {
                break;
            };
            let parameter = &rest[open + 1..open + 1 + len];
            let value = params
                .iter()
                .find(|(key, _)| *key == parameter)
                .map(|(_, value)| *value)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ApiError::MissingParameter {
                    endpoint: self.name.to_string(),
                    parameter: parameter.to_string(),
                })?;
            if matches!(value, "." | "..") {
                return Err(ApiError::InvalidParameter {
                    endpoint: self.name.to_string(),
                    parameter: parameter.to_string(),
                    value: value.to_string(),
                });
            }

            rendered.push_str(&rest[..open]);
            rendered.extend(utf8_percent_encode(value, PATH_SEGMENT));
            rest = &rest[open + len + 2..];
        }

        rendered.push_str(rest);
        Ok(rendered)
    }
}

/// Every operation the facades expose
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum Endpoint {
    WalletInfo,
    WalletPositions,
    WalletTransactions,
    WalletProtocols,
    WalletPortfolio,
    WalletNfts,
    WalletAssets,
    TokenInfo,
    TokenPrice,
    TokenHolders,
    TokenTransactions,
    ProtocolInfo,
    ProtocolPools,
    ProtocolTokens,
    ProtocolStats,
}

impl Endpoint {
    /// All endpoints in registry order
    pub const ALL: [Self; 15] = [
        Self::WalletInfo,
        Self::WalletPositions,
        Self::WalletTransactions,
        Self::WalletProtocols,
        Self::WalletPortfolio,
        Self::WalletNfts,
        Self::WalletAssets,
        Self::TokenInfo,
        Self::TokenPrice,
        Self::TokenHolders,
        Self::TokenTransactions,
        Self::ProtocolInfo,
        Self::ProtocolPools,
        Self::ProtocolTokens,
        Self::ProtocolStats,
    ];

    /// Template for this endpoint
    pub const fn template(self) -> EndpointTemplate {
        let (name, path) = match self {
            Self::WalletInfo => ("wallet_info", "/wallets/{address}"),
            Self::WalletPositions => ("wallet_positions", "/wallets/{address}/positions"),
            Self::WalletTransactions => ("wallet_transactions", "/wallets/{address}/transactions"),
            Self::WalletProtocols => ("wallet_protocols", "/wallets/{address}/protocols"),
            Self::WalletPortfolio => ("wallet_portfolio", "/wallets/{address}/portfolio"),
            Self::WalletNfts => ("wallet_nfts", "/wallets/{address}/nfts"),
            Self::WalletAssets => ("wallet_assets", "/wallets/{address}/assets"),
            Self::TokenInfo => ("token_info", "/tokens/{token_id}"),
            Self::TokenPrice => ("token_price", "/tokens/{token_id}/price"),
            Self::TokenHolders => ("token_holders", "/tokens/{token_id}/holders"),
            Self::TokenTransactions => ("token_transactions", "/tokens/{token_id}/transactions"),
            Self::ProtocolInfo => ("protocol_info", "/protocols/{protocol_id}"),
            Self::ProtocolPools => ("protocol_pools", "/protocols/{protocol_id}/pools"),
            Self::ProtocolTokens => ("protocol_tokens", "/protocols/{protocol_id}/tokens"),
            Self::ProtocolStats => ("protocol_stats", "/protocols/{protocol_id}/stats"),
        };
        EndpointTemplate { name, path }
    }

    /// Logical name, as accepted by [`EndpointRegistry::resolve`]
    pub const fn name(self) -> &'static str {
        self.template().name
    }

    /// Resolve this endpoint's path
    pub fn resolve(self, params: &[(&str, &str)]) -> ApiResult<String> {
        self.template().render(params)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Endpoint {
    type Err = ApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|endpoint| endpoint.name() == s)
            .ok_or_else(|| ApiError::UnknownEndpoint {
                name: s.to_string(),
            })
    }
}

/// Name-based access to the endpoint table
#[derive(Debug, Clone, Copy, Default)]
pub struct EndpointRegistry;

impl EndpointRegistry {
    /// Template registered under `name`
    pub fn get(name: &str) -> Option<EndpointTemplate> {
        name.parse::<Endpoint>().ok().map(Endpoint::template)
    }

    /// Resolve `name` to a fully substituted path
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnknownEndpoint`] for names not in the table and
    /// [`ApiError::MissingParameter`] for placeholders without a value, and
    /// [`ApiError::InvalidParameter`] for dot-segment values.
    pub fn resolve(name: &str, params: &[(&str, &str)]) -> ApiResult<String> {
        name.parse::<Endpoint>()?.resolve(params)
    }

    /// All templates in registry order
    pub fn templates() -> impl Iterator<Item = EndpointTemplate> {
        Endpoint::ALL.into_iter().map(Endpoint::template)
    }

    /// All registered names in registry order
    pub fn names() -> impl Iterator<Item = &'static str> {
        Endpoint::ALL.into_iter().map(Endpoint::name)
    }
}
