// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! One sweep over all namespaces, folded into a [`SweepReport`]

use crate::drift::fetcher::fetch;
use crate::types::{FetchOutcome, ResourceIdentity, SweepReport};
use futures::stream::{self, StreamExt};
use kube::Client;
use std::collections::HashMap;
use tracing::{info, instrument};

/// Fetch the resource in every namespace and fold the outcomes.
///
/// At most `concurrency` lookups are in flight at once. Outcomes are folded in
/// enumeration order once all lookups completed, so no state is shared while
/// fetching. A failing namespace never stops the sweep.
#[instrument(skip(client, namespaces, resource), fields(workload = %resource, namespace_count = namespaces.len()))]
pub async fn sweep(
    client: &Client,
    namespaces: &[String],
    resource: &ResourceIdentity,
    concurrency: usize,
) -> SweepReport {
    let outcomes: Vec<(String, FetchOutcome)> = stream::iter(namespaces)
        .map(|namespace| async move {
            let outcome = fetch(client, namespace, resource).await;
            (namespace.clone(), outcome)
        })
        .buffered(concurrency.max(1))
        .collect()
        .await;

    let report = fold(outcomes);
    info!(
        "Sweep complete: {} found, {} not found, {} failed",
        report.snapshot.len(),
        report.not_found.len(),
        report.failed.len()
    );
    report
}

/// Fold per-namespace outcomes into a report; a later outcome for a namespace wins
pub fn fold(outcomes: impl IntoIterator<Item = (String, FetchOutcome)>) -> SweepReport {
    let outcomes: Vec<(String, FetchOutcome)> = outcomes.into_iter().collect();

    let mut last_seen: HashMap<&str, usize> = HashMap::with_capacity(outcomes.len());
    for (index, (namespace, _)) in outcomes.iter().enumerate() {
        last_seen.insert(namespace.as_str(), index);
    }
    let keep: Vec<bool> = outcomes
        .iter()
        .enumerate()
        .map(|(index, (namespace, _))| last_seen[namespace.as_str()] == index)
        .collect();

    outcomes
        .into_iter()
        .zip(keep)
        .filter(|(_, keep)| *keep)
        .fold(SweepReport::default(), |mut report, ((namespace, outcome), _)| {
            report.record(namespace, outcome);
            report
        })
}
