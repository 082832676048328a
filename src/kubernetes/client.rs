// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation

use crate::config::Config;
use crate::error::{DriftError, Result};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from the configured kubeconfig,
/// or from the environment when no path was given
#[instrument(skip(config), fields(kubeconfig = ?config.kubeconfig))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let options = KubeConfigOptions {
        context: config.context.clone(),
        ..Default::default()
    };

    let client_config = match &config.kubeconfig {
        Some(path) => {
            let kubeconfig = load_kubeconfig(path)?;
            KConfig::from_custom_kubeconfig(kubeconfig, &options)
                .await
                .map_err(|e| {
                    DriftError::KubeconfigError(format!("Failed to create config: {}", e))
                })?
        }
        None if options.context.is_some() => KConfig::from_kubeconfig(&options)
            .await
            .map_err(|e| DriftError::KubeconfigError(format!("Failed to load config: {}", e)))?,
        None => KConfig::infer()
            .await
            .map_err(|e| DriftError::KubeconfigError(format!("Failed to infer config: {}", e)))?,
    };

    debug!("Using cluster {}", client_config.cluster_url);

    let client = Client::try_from(client_config)
        .map_err(|e| DriftError::KubeconfigError(format!("Failed to create client: {}", e)))?;
    info!("Connected to Kubernetes cluster");
    Ok(client)
}

/// Read a kubeconfig file. Relative certificate and key paths are resolved
/// against the file's own directory.
fn load_kubeconfig(path: &Path) -> Result<Kubeconfig> {
    Kubeconfig::read_from(path).map_err(|e| {
        DriftError::KubeconfigError(format!("Failed to read {}: {}", path.display(), e))
    })
}
