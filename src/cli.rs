// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Command line surface

use crate::constants::poll::{DEFAULT_CONCURRENCY, DEFAULT_INTERVAL_SECS};
use crate::types::WorkloadKind;
use clap::error::ErrorKind;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "k8s-config-drift")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Watch a named workload across every namespace of a cluster")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Periodically report the observed replica count of a workload per namespace
    #[command(name = "replicaDrift", alias = "replica-drift")]
    ReplicaDrift(ReplicaDriftArgs),
}

#[derive(Args, Debug, Clone)]
pub struct ReplicaDriftArgs {
    /// Name of the workload to watch
    #[arg(long = "deployment", visible_alias = "name", value_name = "NAME")]
    pub name: String,

    /// Kind of the workload to watch
    #[arg(long, value_enum, default_value_t = WorkloadKind::Deployment)]
    pub kind: WorkloadKind,

    /// Path to the kubeconfig file (defaults to the standard location or in-cluster config)
    #[arg(long, value_name = "PATH")]
    pub kubeconfig: Option<PathBuf>,

    /// Kubeconfig context to use instead of the current one
    #[arg(long)]
    pub context: Option<String>,

    /// Seconds to wait between two sweeps
    #[arg(long, default_value_t = DEFAULT_INTERVAL_SECS, value_name = "SECONDS")]
    pub interval: u64,

    /// Maximum number of namespaces queried at the same time
    #[arg(long, default_value_t = DEFAULT_CONCURRENCY)]
    pub concurrency: usize,

    /// Report format
    #[arg(long, short, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Human readable blocks
    #[default]
    Text,
    /// One JSON object per sweep
    Json,
}

impl Cli {
    /// Parse the process arguments.
    /// Usage errors exit with status 1; `--help` and `--version` exit with 0.
    pub fn parse_or_exit() -> Self {
        match Cli::try_parse() {
            Ok(cli) => cli,
            Err(e) => {
                let _ = e.print();
                std::process::exit(exit_code(e.kind()));
            }
        }
    }
}

/// Exit status for a failed parse: 0 when help or version was asked for, 1 otherwise
pub fn exit_code(kind: ErrorKind) -> i32 {
    match kind {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => 0,
        _ => 1,
    }
}
