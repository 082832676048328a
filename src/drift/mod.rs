// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace sweeping and the polling loop around it.

pub mod fetcher;
pub mod scheduler;
pub mod snapshotter;

pub use fetcher::{classify, fetch};
pub use scheduler::{PollScheduler, SchedulerState};
pub use snapshotter::{fold, sweep};
