// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DriftError {
    #[error("Failed to load kubeconfig: {0}")]
    KubeconfigError(String),

    #[error("Failed to list namespaces: {0}")]
    NamespaceListError(#[source] kube::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to write report: {0}")]
    OutputError(#[from] std::io::Error),

    #[error("Scheduler halted after a fatal error")]
    Halted,
}

pub type Result<T> = std::result::Result<T, DriftError>;
