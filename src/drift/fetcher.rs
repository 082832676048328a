// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Fetch the tracked workload in one namespace and classify the outcome

use crate::types::{FetchOutcome, ReplicatedWorkload, ResourceIdentity, WorkloadKind};
use http::StatusCode;
use k8s_openapi::api::apps::v1::{Deployment, ReplicaSet, StatefulSet};
use kube::{Api, Client};
use tracing::{debug, instrument, warn};

/// Look up the tracked resource in `namespace`.
/// Never fails: errors are folded into [`FetchOutcome::Error`].
#[instrument(skip(client, resource), fields(workload = %resource))]
pub async fn fetch(client: &Client, namespace: &str, resource: &ResourceIdentity) -> FetchOutcome {
    let outcome = match resource.kind {
        WorkloadKind::Deployment => {
            fetch_workload::<Deployment>(client, namespace, &resource.name).await
        }
        WorkloadKind::StatefulSet => {
            fetch_workload::<StatefulSet>(client, namespace, &resource.name).await
        }
        WorkloadKind::ReplicaSet => {
            fetch_workload::<ReplicaSet>(client, namespace, &resource.name).await
        }
    };

    match &outcome {
        FetchOutcome::Found { replicas } => debug!("Found with {} replica(s)", replicas),
        FetchOutcome::NotFound => debug!("Not found in namespace {}", namespace),
        FetchOutcome::Error { cause } => {
            warn!("Failed to get {} in namespace {}: {}", resource, namespace, cause)
        }
    }
    outcome
}

async fn fetch_workload<K: ReplicatedWorkload>(
    client: &Client,
    namespace: &str,
    name: &str,
) -> FetchOutcome {
    let api: Api<K> = Api::namespaced(client.clone(), namespace);
    classify(api.get(name).await.map(|w| w.observed_replicas()))
}

/// Map a lookup result onto an outcome. Only an API 404 means "not found";
/// every other error stays isolated to the namespace as [`FetchOutcome::Error`].
pub fn classify(result: Result<i32, kube::Error>) -> FetchOutcome {
    match result {
        Ok(replicas) => FetchOutcome::Found { replicas },
        Err(kube::Error::Api(err)) if err.code == StatusCode::NOT_FOUND.as_u16() => {
            FetchOutcome::NotFound
        }
        Err(e) => FetchOutcome::Error {
            cause: e.to_string(),
        },
    }
}
