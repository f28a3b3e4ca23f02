// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Credential and setting lookup
//!
//! The client never reads process-wide state on its own. Configuration is
//! fetched through a [`ConfigProvider`] supplied by the caller, and
//! [`CredentialResolver`] turns absent or blank values into
//! [`ApiError::ConfigurationMissing`] before any request can be built.

use std::collections::HashMap;

use tracing::debug;

use crate::{
    error::{ApiError, ApiResult},
    non_empty_string::NonEmptyString,
};

/// Source of configuration values keyed by name
#[cfg_attr(test, mockall::automock)]
pub trait ConfigProvider {
    /// Look up `key`, returning `None` when it is not set
    fn get(&self, key: &str) -> Option<String>;
}

/// Reads values from the process environment
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvProvider;

impl ConfigProvider for EnvProvider {
    fn get(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

impl<S: std::hash::BuildHasher> ConfigProvider for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<String> {
        HashMap::get(self, key).cloned()
    }
}

impl<P: ConfigProvider + ?Sized> ConfigProvider for &P {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }
}

/// Resolves required and optional settings from a [`ConfigProvider`]
#[derive(Debug)]
pub struct CredentialResolver<P> {
    provider: P,
}

impl<P: ConfigProvider> CredentialResolver<P> {
    /// Wrap a provider
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    /// Resolve a required value
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::ConfigurationMissing`] when the key is absent, empty
    /// or whitespace-only.
    pub fn resolve(&self, key: &str) -> ApiResult<NonEmptyString> {
        self.resolve_optional(key)
            .ok_or_else(|| ApiError::ConfigurationMissing {
                key: key.to_string(),
                hint: format!(
                    "set the {key} environment variable or add it to your .env file"
                ),
            })
    }

    /// Resolve a value that may legitimately be unset
    ///
    /// Blank values are treated the same as absent ones.
    pub fn resolve_optional(&self, key: &str) -> Option<NonEmptyString> {
        let value = self
            .provider
            .get(key)
            .and_then(|raw| NonEmptyString::new(raw).ok());
        debug!(key, found = value.is_some(), "resolved configuration value");
        value
    }
}
