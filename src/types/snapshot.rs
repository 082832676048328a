// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Per-namespace fetch outcomes and the snapshot they fold into

use serde::Serialize;
use std::collections::BTreeMap;

/// Result of looking up the tracked resource in one namespace during one cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The resource exists and reports this many replicas
    Found { replicas: i32 },
    /// The resource does not exist in the namespace
    NotFound,
    /// Any other failure, isolated to this namespace
    Error { cause: String },
}

/// Namespace -> observed replica count for one cycle.
/// Only namespaces where the resource was found are present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Snapshot {
    replicas: BTreeMap<String, i32>,
}

impl Snapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an observation, replacing any earlier one for the same namespace
    pub fn insert(&mut self, namespace: impl Into<String>, replicas: i32) {
        self.replicas.insert(namespace.into(), replicas);
    }

    pub fn get(&self, namespace: &str) -> Option<i32> {
        self.replicas.get(namespace).copied()
    }

    pub fn len(&self) -> usize {
        self.replicas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.replicas.is_empty()
    }

    /// Entries ordered by namespace name
    pub fn iter(&self) -> impl Iterator<Item = (&str, i32)> {
        self.replicas.iter().map(|(ns, n)| (ns.as_str(), *n))
    }
}

impl<S: Into<String>> FromIterator<(S, i32)> for Snapshot {
    fn from_iter<I: IntoIterator<Item = (S, i32)>>(iter: I) -> Self {
        let mut snapshot = Snapshot::new();
        for (namespace, replicas) in iter {
            snapshot.insert(namespace, replicas);
        }
        snapshot
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NamespaceFailure {
    pub namespace: String,
    pub cause: String,
}

/// Everything one sweep learned: the snapshot plus the namespaces left out of it
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SweepReport {
    pub snapshot: Snapshot,
    pub not_found: Vec<String>,
    pub failed: Vec<NamespaceFailure>,
}

impl SweepReport {
    /// Add one namespace's outcome to the report.
    /// Callers record each namespace at most once; see `drift::fold` for deduplication.
    pub fn record(&mut self, namespace: String, outcome: FetchOutcome) {
        match outcome {
            FetchOutcome::Found { replicas } => self.snapshot.insert(namespace, replicas),
            FetchOutcome::NotFound => self.not_found.push(namespace),
            FetchOutcome::Error { cause } => self.failed.push(NamespaceFailure { namespace, cause }),
        }
    }
}
