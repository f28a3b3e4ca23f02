// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! CLI configuration
//!
//! Settings are loaded with the config crate from hierarchical sources, later
//! sources overriding earlier ones:
//! 1. Configuration file: `zerion.{toml,json,yaml}` in the working directory
//!    (optional), or the file passed with `--config` (required)
//! 2. Environment variables with the `ZERION_` prefix; a `.env` file is loaded
//!    into the environment by the binary beforehand
//! 3. Command-line flags
//!
//! The result is handed to [`zerion::ZerionClient::from_provider`], which does
//! the actual validation.

use std::{fmt, path::Path};

use api_client::ConfigProvider;
use config::{Config, ConfigError, Environment, File, Map, Source};
use serde::Deserialize;
use zerion::{API_BASE_URL_ENV_VAR, API_KEY_ENV_VAR, AUTH_SCHEME_ENV_VAR, TIMEOUT_ENV_VAR};

/// Base name of the optional configuration file
pub const DEFAULT_CONFIG_NAME: &str = "zerion";
/// Prefix of the environment variables read as settings
pub const ENV_PREFIX: &str = "ZERION";

/// Setting keys, as they appear in configuration files
pub mod keys {
    /// API base URL
    pub const API_BASE_URL: &str = "api_base_url";
    /// API key
    pub const API_KEY: &str = "api_key";
    /// `basic` or `bearer`
    pub const AUTH_SCHEME: &str = "auth_scheme";
    /// Request timeout in seconds
    pub const TIMEOUT_SECONDS: &str = "timeout_seconds";
}

/// Raw, unvalidated settings
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// API base URL
    pub api_base_url: Option<String>,
    /// API key
    pub api_key: Option<String>,
    /// Auth scheme name
    pub auth_scheme: Option<String>,
    /// Timeout in seconds, kept as text until the client validates it
    pub timeout_seconds: Option<String>,
}

impl Settings {
    /// Load settings from the configuration file, the process environment and
    /// `overrides`
    ///
    /// `overrides` pairs a setting key from [`keys`] with a flag value; `None`
    /// leaves lower layers untouched.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if an explicit file is missing or any source
    /// cannot be parsed.
    pub fn load(
        config_file: Option<&Path>,
        overrides: &[(&str, Option<String>)],
    ) -> Result<Self, ConfigError> {
        let file = match config_file {
            Some(path) => File::from(path).required(true),
            None => File::with_name(DEFAULT_CONFIG_NAME).required(false),
        };
        let environment = Environment::with_prefix(ENV_PREFIX).prefix_separator("_");
        Self::layered(file, environment, overrides)
    }

    /// Same layering with an explicit environment map instead of the process
    /// environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if any source cannot be parsed.
    pub fn load_with_env<S>(
        file: S,
        env: Map<String, String>,
        overrides: &[(&str, Option<String>)],
    ) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let environment = Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .source(Some(env));
        Self::layered(file, environment, overrides)
    }

    fn layered<S>(
        file: S,
        environment: Environment,
        overrides: &[(&str, Option<String>)],
    ) -> Result<Self, ConfigError>
    where
        S: Source + Send + Sync + 'static,
    {
        let mut builder = Config::builder().add_source(file).add_source(environment);
        for (key, value) in overrides {
            builder = builder.set_override_option(*key, value.clone())?;
        }
        builder.build()?.try_deserialize()
    }
}

impl ConfigProvider for Settings {
    fn get(&self, key: &str) -> Option<String> {
        match key {
            API_BASE_URL_ENV_VAR => self.api_base_url.clone(),
            API_KEY_ENV_VAR => self.api_key.clone(),
            AUTH_SCHEME_ENV_VAR => self.auth_scheme.clone(),
            TIMEOUT_ENV_VAR => self.timeout_seconds.clone(),
            _ => None,
        }
    }
}

impl fmt::Debug for Settings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Settings")
            .field("api_base_url", &self.api_base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("auth_scheme", &self.auth_scheme)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}
