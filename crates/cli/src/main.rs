// SPDX-FileCopyrightText: 2025 Semiotic Labs
//
// SPDX-License-Identifier: Apache-2.0

//! `zerion` command-line tool

use std::{io::Write, process::ExitCode};

use anyhow::{Context, Result};
use clap::Parser;
use tokio_util::sync::CancellationToken;
use tracing::{debug, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};
use zerion_cli::{Cli, cancel_on_signal, run};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    // Must happen before parsing, `--config` falls back to ZERION_CONFIG
    let dotenv = dotenvy::dotenv();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .context("failed to install tracing subscriber")?;

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env file"),
        Err(error) if error.not_found() => {}
        Err(error) => warn!(%error, "ignoring unreadable .env file"),
    }

    let cli = Cli::parse();

    let cancellation_token = CancellationToken::new();
    let signal_handler = tokio::spawn(cancel_on_signal(cancellation_token.clone()));

    let outcome = run(&cli, &cancellation_token).await;
    cancellation_token.cancel();
    signal_handler.abort();

    match outcome {
        Ok(output) => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(output.as_bytes())
                .and_then(|()| stdout.flush())
                .context("failed to write to stdout")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(error) => {
            eprintln!("{}", error.report());
            Ok(error.exit_code())
        }
    }
}
