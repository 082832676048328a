// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Periodic driver: enumerate, sweep, report, wait, repeat.

use crate::config::Config;
use crate::drift::snapshotter::sweep;
use crate::error::{DriftError, Result};
use crate::kubernetes::list_namespaces;
use crate::report::Reporter;
use crate::types::SweepReport;
use kube::Client;
use std::future::Future;
use tokio::time::sleep;
use tracing::{error, info, instrument};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    /// Sweeping on every tick
    Running,
    /// Stopped after a fatal error; terminal
    Halted,
}

/// Repeatedly sweeps all namespaces and hands each result to a [`Reporter`].
pub struct PollScheduler<R> {
    client: Client,
    config: Config,
    reporter: R,
    state: SchedulerState,
}

impl<R: Reporter> PollScheduler<R> {
    pub fn new(client: Client, config: Config, reporter: R) -> Self {
        Self {
            client,
            config,
            reporter,
            state: SchedulerState::Running,
        }
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    /// Run until `shutdown` resolves or a fatal error occurs.
    ///
    /// A graceful stop returns `Ok(())`. Failing to list namespaces or to write
    /// a report halts the scheduler and returns the error. Shutdown is observed
    /// both while sweeping and while waiting for the next cycle.
    /// A halted scheduler never runs again and returns [`DriftError::Halted`].
    pub async fn run<F>(&mut self, shutdown: F) -> Result<()>
    where
        F: Future<Output = ()>,
    {
        if self.state == SchedulerState::Halted {
            return Err(DriftError::Halted);
        }
        tokio::pin!(shutdown);
        info!(
            "Polling {} every {:?}",
            self.config.resource, self.config.poll_interval
        );

        loop {
            let cycle = tokio::select! {
                result = self.run_cycle() => result,
                _ = &mut shutdown => {
                    info!("Shutdown requested, abandoning current sweep");
                    return Ok(());
                }
            };

            if let Err(e) = cycle {
                error!("Halting: {}", e);
                self.state = SchedulerState::Halted;
                return Err(e);
            }

            tokio::select! {
                _ = sleep(self.config.poll_interval) => {}
                _ = &mut shutdown => {
                    info!("Shutdown requested, stopping");
                    return Ok(());
                }
            }
        }
    }

    /// One full cycle: enumerate, sweep, report
    #[instrument(skip(self), fields(workload = %self.config.resource))]
    pub async fn run_cycle(&mut self) -> Result<SweepReport> {
        let namespaces = list_namespaces(&self.client).await?;
        let report = sweep(
            &self.client,
            &namespaces,
            &self.config.resource,
            self.config.concurrency,
        )
        .await;
        self.reporter.report(&self.config.resource, &report)?;
        Ok(report)
    }
}
