// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! Zerion command-line front-end
//!
//! The binary stays thin: it parses arguments, loads configuration, issues one
//! call through a facade and prints the JSON document it got back.
//!
//! # Module Structure
//!
//! - [`commands`]: clap command tree and the call each command makes
//! - [`config`]: layered settings (file, `ZERION_*` environment, flags)
//! - [`error`]: [`CliError`] and the exit status of each failure
//! - [`output`]: pretty or compact JSON rendering
//!
//! # Cancellation
//!
//! [`run`] races the call against a `CancellationToken`; the binary cancels it
//! on Ctrl-C, which drops the in-flight request and reports a transport error.

pub mod commands;
pub mod config;
pub mod error;
pub mod output;

use api_client::ApiError;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use zerion::ZerionClient;

pub use commands::{ApiCommand, Cli, Command};
pub use config::Settings;
pub use error::{CliError, CliResult};
pub use output::OutputFormat;

/// Run `cli` and return what should be written to stdout
///
/// # Errors
///
/// Returns [`CliError`] for configuration, call and rendering failures.
pub async fn run(cli: &Cli, cancellation_token: &CancellationToken) -> CliResult<String> {
    let command = match &cli.command {
        Command::Endpoints => return Ok(output::render_endpoints()),
        Command::Api(command) => command,
    };

    let settings = Settings::load(cli.connection.config.as_deref(), &cli.connection.overrides())?;
    debug!(?settings, "loaded settings");
    let client = ZerionClient::from_provider(&settings)?;

    let payload = tokio::select! {
        biased;
        () = cancellation_token.cancelled() => Err(ApiError::transport("cancelled")),
        result = command.execute(&client) => result,
    }?;

    let mut rendered = OutputFormat::from_compact_flag(cli.compact).render(&payload)?;
    rendered.push('\n');
    Ok(rendered)
}

/// Cancel `cancellation_token` on SIGINT (Ctrl-C) or SIGTERM
pub async fn cancel_on_signal(cancellation_token: CancellationToken) {
    let signal_received = async {
        #[cfg(unix)]
        {
            use tokio::signal::unix::{SignalKind, signal};

            match (
                signal(SignalKind::interrupt()),
                signal(SignalKind::terminate()),
            ) {
                (Ok(mut sigint), Ok(mut sigterm)) => tokio::select! {
                    _ = sigint.recv() => "SIGINT",
                    _ = sigterm.recv() => "SIGTERM",
                },
                (Err(error), _) | (_, Err(error)) => {
                    warn!(%error, "failed to register signal handlers");
                    std::future::pending().await
                }
            }
        }

        #[cfg(not(unix))]
        {
            match tokio::signal::ctrl_c().await {
                Ok(()) => "CTRL+C",
                Err(error) => {
                    warn!(%error, "failed to install CTRL+C handler");
                    std::future::pending().await
                }
            }
        }
    };

    tokio::select! {
        signal_name = signal_received => {
            warn!(signal = signal_name, "cancelling in-flight request");
            cancellation_token.cancel();
        },
        () = cancellation_token.cancelled() => {},
    }
}
