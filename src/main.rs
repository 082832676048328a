// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use replica_drift::cli::{Cli, Commands};
use replica_drift::config::Config;
use replica_drift::constants::DEFAULT_LOG_FILTER;
use replica_drift::drift::PollScheduler;
use replica_drift::kubernetes::create_client;
use replica_drift::report::stdout_reporter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_or_exit();

    // Initialize tracing; stdout is reserved for reports
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let Commands::ReplicaDrift(args) = cli.command;
    let config = Config::from_args(args)?;
    info!("Configuration loaded: resource={}", config.resource);

    let client = create_client(&config).await?;

    let reporter = stdout_reporter(config.output);
    let mut scheduler = PollScheduler::new(client, config, reporter);

    scheduler
        .run(async {
            if tokio::signal::ctrl_c().await.is_err() {
                // Without a signal handler only a fatal error stops the loop
                std::future::pending::<()>().await;
            }
        })
        .await?;

    info!("Stopped");
    Ok(())
}
