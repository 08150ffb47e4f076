// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test fixtures for cluster, subscription and role documents.

use crate::types::cluster::{
    ClusterProfile, ClusterProperties, PlatformWorkloadIdentityProfile, ServicePrincipalProfile,
};
use crate::types::roles::{PlatformWorkloadIdentityRole, PlatformWorkloadIdentityRoleSet};
use crate::types::{OpenShiftCluster, PlatformWorkloadIdentity, RoleCatalog, SecretLocation, Subscription};

/// A workload identity cluster in eastus with an OIDC issuer set
pub fn make_workload_identity_cluster(identities: Vec<PlatformWorkloadIdentity>) -> OpenShiftCluster {
    OpenShiftCluster {
        id: "/subscriptions/sub1/resourceGroups/rg/providers/Microsoft.RedHatOpenShift/openShiftClusters/test-cluster".to_string(),
        name: "test-cluster".to_string(),
        location: "eastus".to_string(),
        properties: ClusterProperties {
            cluster_profile: ClusterProfile {
                version: "4.14.16".to_string(),
                oidc_issuer: Some("https://issuer.example/test-cluster".to_string()),
            },
            service_principal_profile: None,
            platform_workload_identity_profile: Some(PlatformWorkloadIdentityProfile {
                platform_workload_identities: identities,
            }),
        },
    }
}

pub fn make_service_principal_cluster() -> OpenShiftCluster {
    let mut cluster = make_workload_identity_cluster(vec![]);
    cluster.properties.platform_workload_identity_profile = None;
    cluster.properties.service_principal_profile = Some(ServicePrincipalProfile {
        client_id: "sp-client".to_string(),
    });
    cluster
}

pub fn make_identity(operator_name: &str, client_id: &str) -> PlatformWorkloadIdentity {
    PlatformWorkloadIdentity {
        operator_name: operator_name.to_string(),
        client_id: client_id.to_string(),
        resource_id: None,
        object_id: None,
    }
}

pub fn make_subscription() -> Subscription {
    Subscription {
        id: "sub1".to_string(),
        tenant_id: "tenant1".to_string(),
    }
}

fn make_location(namespace: &str, name: &str) -> SecretLocation {
    SecretLocation {
        namespace: namespace.to_string(),
        name: name.to_string(),
    }
}

/// Build a catalog from `(operator, namespace, name)` triples
pub fn make_catalog(roles: &[(&str, &str, &str)]) -> RoleCatalog {
    roles
        .iter()
        .map(|(operator, namespace, name)| (*operator, make_location(namespace, name)))
        .collect()
}

pub fn make_role_set(version: &str, roles: &[(&str, &str, &str)]) -> PlatformWorkloadIdentityRoleSet {
    PlatformWorkloadIdentityRoleSet {
        openshift_version: version.to_string(),
        platform_workload_identity_roles: roles
            .iter()
            .map(|(operator, namespace, name)| PlatformWorkloadIdentityRole {
                operator_name: operator.to_string(),
                role_definition_name: String::new(),
                role_definition_id: String::new(),
                service_account_names: vec![],
                secret_location: make_location(namespace, name),
            })
            .collect(),
    }
}
