// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Namespace enumeration

use crate::error::{DriftError, Result};
use k8s_openapi::api::core::v1::Namespace;
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// List the names of all namespaces visible to the client, in API order.
/// Any failure is fatal for the caller: without namespaces nothing can be swept.
#[instrument(skip(client))]
pub async fn list_namespaces(client: &Client) -> Result<Vec<String>> {
    let namespaces: Api<Namespace> = Api::all(client.clone());
    let namespace_list = namespaces
        .list(&ListParams::default())
        .await
        .map_err(DriftError::NamespaceListError)?;

    let names: Vec<String> = namespace_list
        .items
        .into_iter()
        .filter_map(|ns| ns.metadata.name)
        .collect();

    debug!("Discovered {} namespace(s)", names.len());
    Ok(names)
}
