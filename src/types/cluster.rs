// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use serde::{Deserialize, Serialize};

/// Cluster provisioning record as stored in the cluster document store
#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct OpenShiftCluster {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub location: String,
    pub properties: ClusterProperties,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterProperties {
    pub cluster_profile: ClusterProfile,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_principal_profile: Option<ServicePrincipalProfile>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_workload_identity_profile: Option<PlatformWorkloadIdentityProfile>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterProfile {
    #[serde(default)]
    pub version: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oidc_issuer: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct ServicePrincipalProfile {
    pub client_id: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(rename_all = "camelCase")]
pub struct PlatformWorkloadIdentityProfile {
    #[serde(default)]
    pub platform_workload_identities: Vec<PlatformWorkloadIdentity>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PlatformWorkloadIdentity {
    pub operator_name: String,
    pub client_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resource_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object_id: Option<String>,
}

impl OpenShiftCluster {
    /// A cluster authenticates through workload identities when it declares an
    /// identity profile and no service principal.
    pub fn uses_workload_identity(&self) -> bool {
        self.properties.platform_workload_identity_profile.is_some()
            && self.properties.service_principal_profile.is_none()
    }

    /// Declared platform workload identities, empty for service principal clusters
    pub fn platform_workload_identities(&self) -> &[PlatformWorkloadIdentity] {
        self.properties
            .platform_workload_identity_profile
            .as_ref()
            .map(|p| p.platform_workload_identities.as_slice())
            .unwrap_or_default()
    }

    pub fn oidc_issuer(&self) -> Option<&str> {
        self.properties.cluster_profile.oidc_issuer.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{make_identity, make_service_principal_cluster, make_workload_identity_cluster};

    #[test]
    fn test_uses_workload_identity_with_profile() {
        let cluster = make_workload_identity_cluster(vec![]);
        assert!(cluster.uses_workload_identity());
    }

    #[test]
    fn test_uses_workload_identity_with_service_principal() {
        let cluster = make_service_principal_cluster();
        assert!(!cluster.uses_workload_identity());
    }

    #[test]
    fn test_uses_workload_identity_with_both_profiles() {
        let mut cluster = make_workload_identity_cluster(vec![]);
        cluster.properties.service_principal_profile = Some(ServicePrincipalProfile {
            client_id: "sp-client".to_string(),
        });

        assert!(!cluster.uses_workload_identity());
    }

    #[test]
    fn test_uses_workload_identity_with_neither_profile() {
        let mut cluster = make_service_principal_cluster();
        cluster.properties.service_principal_profile = None;

        assert!(!cluster.uses_workload_identity());
    }

    #[test]
    fn test_platform_workload_identities_without_profile() {
        let cluster = make_service_principal_cluster();
        assert!(cluster.platform_workload_identities().is_empty());
    }

    #[test]
    fn test_platform_workload_identities_preserves_order() {
        let cluster = make_workload_identity_cluster(vec![
            make_identity("cloud-controller-manager", "ccm"),
            make_identity("ingress", "ing"),
        ]);

        let names: Vec<&str> = cluster
            .platform_workload_identities()
            .iter()
            .map(|i| i.operator_name.as_str())
            .collect();
        assert_eq!(names, vec!["cloud-controller-manager", "ingress"]);
    }

    #[test]
    fn test_deserialize_cluster_document() {
        let doc = serde_json::json!({
            "id": "/subscriptions/sub1/resourceGroups/rg/providers/Microsoft.RedHatOpenShift/openShiftClusters/c1",
            "name": "c1",
            "location": "eastus",
            "properties": {
                "clusterProfile": {
                    "version": "4.14.16",
                    "oidcIssuer": "https://issuer.example/c1"
                },
                "platformWorkloadIdentityProfile": {
                    "platformWorkloadIdentities": [
                        { "operatorName": "ingress", "clientId": "abc" }
                    ]
                }
            }
        });

        let cluster: OpenShiftCluster = serde_json::from_value(doc).unwrap();

        assert!(cluster.uses_workload_identity());
        assert_eq!(cluster.oidc_issuer(), Some("https://issuer.example/c1"));
        assert_eq!(cluster.platform_workload_identities()[0].client_id, "abc");
        assert_eq!(cluster.properties.cluster_profile.version, "4.14.16");
    }
}
