// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Tracked workload kinds and the identity of the watched resource

use k8s_openapi::api::apps::v1::{Deployment, ReplicaSet, StatefulSet};
use k8s_openapi::NamespaceResourceScope;
use kube::Resource;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;

/// A namespaced workload that reports how many replicas it currently runs.
pub trait ReplicatedWorkload:
    Resource<Scope = NamespaceResourceScope, DynamicType = ()>
    + Clone
    + DeserializeOwned
    + fmt::Debug
    + Send
    + Sync
    + 'static
{
    /// Replica count from the object's status, 0 when no status was reported yet
    fn observed_replicas(&self) -> i32;
}

impl ReplicatedWorkload for Deployment {
    fn observed_replicas(&self) -> i32 {
        self.status
            .as_ref()
            .and_then(|s| s.replicas)
            .unwrap_or(0)
    }
}

impl ReplicatedWorkload for StatefulSet {
    fn observed_replicas(&self) -> i32 {
        self.status.as_ref().map_or(0, |s| s.replicas)
    }
}

impl ReplicatedWorkload for ReplicaSet {
    fn observed_replicas(&self) -> i32 {
        self.status.as_ref().map_or(0, |s| s.replicas)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum WorkloadKind {
    #[default]
    Deployment,
    #[value(name = "statefulset", alias = "sts")]
    StatefulSet,
    #[value(name = "replicaset", alias = "rs")]
    ReplicaSet,
}

impl WorkloadKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkloadKind::Deployment => "deployment",
            WorkloadKind::StatefulSet => "statefulset",
            WorkloadKind::ReplicaSet => "replicaset",
        }
    }
}

impl fmt::Display for WorkloadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The (kind, name) pair being watched. Fixed for the lifetime of the process.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResourceIdentity {
    pub kind: WorkloadKind,
    pub name: String,
}

impl ResourceIdentity {
    pub fn new(kind: WorkloadKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

impl fmt::Display for ResourceIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.kind, self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use k8s_openapi::api::apps::v1::{DeploymentStatus, ReplicaSetStatus, StatefulSetStatus};

    #[test]
    fn test_deployment_replicas_from_status() {
        let deployment = Deployment {
            status: Some(DeploymentStatus {
                replicas: Some(3),
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(deployment.observed_replicas(), 3);
    }

    #[test]
    fn test_deployment_without_status_has_zero_replicas() {
        assert_eq!(Deployment::default().observed_replicas(), 0);

        let deployment = Deployment {
            status: Some(DeploymentStatus::default()),
            ..Default::default()
        };
        assert_eq!(deployment.observed_replicas(), 0);
    }

    #[test]
    fn test_statefulset_and_replicaset_replicas() {
        let sts = StatefulSet {
            status: Some(StatefulSetStatus {
                replicas: 2,
                ..Default::default()
            }),
            ..Default::default()
        };
        let rs = ReplicaSet {
            status: Some(ReplicaSetStatus {
                replicas: 5,
                ..Default::default()
            }),
            ..Default::default()
        };

        assert_eq!(sts.observed_replicas(), 2);
        assert_eq!(rs.observed_replicas(), 5);
        assert_eq!(StatefulSet::default().observed_replicas(), 0);
    }

    #[test]
    fn test_resource_identity_display() {
        let id = ResourceIdentity::new(WorkloadKind::Deployment, "api");
        assert_eq!(id.to_string(), "deployment/api");

        let id = ResourceIdentity::new(WorkloadKind::StatefulSet, "db");
        assert_eq!(id.to_string(), "statefulset/db");
    }
}
