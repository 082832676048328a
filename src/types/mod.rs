// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Domain types shared by the fetcher, the sweep and the reporters.

pub mod snapshot;
pub mod workload;

pub use snapshot::{FetchOutcome, NamespaceFailure, Snapshot, SweepReport};
pub use workload::{ReplicatedWorkload, ResourceIdentity, WorkloadKind};
