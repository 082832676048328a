// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::cli::{OutputFormat, ReplicaDriftArgs};
use crate::error::{DriftError, Result};
use crate::types::ResourceIdentity;
use std::path::PathBuf;
use std::time::Duration;

/// Configuration built once at startup from the command line
#[derive(Debug, Clone)]
pub struct Config {
    /// The workload watched in every namespace
    pub resource: ResourceIdentity,
    /// Explicit kubeconfig file; inferred from the environment when unset
    pub kubeconfig: Option<PathBuf>,
    pub context: Option<String>,
    /// Wait between the end of one sweep and the start of the next
    pub poll_interval: Duration,
    pub concurrency: usize,
    pub output: OutputFormat,
}

impl Config {
    /// Validate the `replicaDrift` arguments into a configuration
    pub fn from_args(args: ReplicaDriftArgs) -> Result<Self> {
        let name = args.name.trim();
        if name.is_empty() {
            return Err(DriftError::InvalidConfig(format!(
                "{} name must not be empty",
                args.kind
            )));
        }
        if args.interval == 0 {
            return Err(DriftError::InvalidConfig(
                "poll interval must be at least 1 second".to_string(),
            ));
        }
        if args.concurrency == 0 {
            return Err(DriftError::InvalidConfig(
                "concurrency must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            resource: ResourceIdentity::new(args.kind, name),
            kubeconfig: args.kubeconfig,
            context: args.context,
            poll_interval: Duration::from_secs(args.interval),
            concurrency: args.concurrency,
            output: args.output,
        })
    }
}
