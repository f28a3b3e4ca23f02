// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Error handling module
//!
//! Every failure of a command ends up as a [`CliError`], which knows its
//! process exit status and how to describe itself on stderr.

use std::process::ExitCode;

use api_client::ApiError;
use config::ConfigError;
use thiserror::Error;

/// Exit status for API, transport and response failures
pub const EXIT_CALL_FAILURE: u8 = 1;
/// Exit status for configuration and usage errors
pub const EXIT_USAGE: u8 = 2;

/// Errors surfaced by the command-line front-end
#[derive(Error, Debug)]
pub enum CliError {
    /// A configuration source could not be loaded
    #[error("failed to load configuration: {0}")]
    Config(#[from] ConfigError),

    /// The client or the call failed
    #[error(transparent)]
    Api(#[from] ApiError),

    /// The payload could not be rendered
    #[error("failed to render response: {0}")]
    Render(#[from] serde_json::Error),
}

impl CliError {
    /// Process exit status for this error
    pub fn exit_code(&self) -> ExitCode {
        ExitCode::from(self.exit_status())
    }

    fn exit_status(&self) -> u8 {
        match self {
            Self::Config(_) => EXIT_USAGE,
            Self::Api(error) if error.is_setup_error() => EXIT_USAGE,
            Self::Api(_) | Self::Render(_) => EXIT_CALL_FAILURE,
        }
    }

    /// Message for stderr
    ///
    /// API error bodies are pretty-printed below the status line.
    pub fn report(&self) -> String {
        match self {
            Self::Api(ApiError::Api { status, detail }) => {
                let detail = serde_json::to_string_pretty(detail).unwrap_or_else(|_| detail.to_string());
                format!("error: API request failed with status {status}\n{detail}")
            }
            other => format!("error: {other}"),
        }
    }
}

/// Result alias for CLI operations
pub type CliResult<T> = Result<T, CliError>;
