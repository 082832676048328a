// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Polling configuration
pub mod poll {
    /// Seconds to wait between two sweeps
    pub const DEFAULT_INTERVAL_SECS: u64 = 10;
    /// Maximum number of namespaces fetched at the same time within a sweep
    pub const DEFAULT_CONCURRENCY: usize = 8;
}

/// Report formatting
pub mod report {
    /// Line printed after every snapshot block
    pub const DIVIDER: &str = "--------------------";
}

/// Default log filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "warn";
