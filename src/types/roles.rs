// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Platform workload identity roles and the secret locations they map to

use crate::error::{GeneratorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::debug;

/// Namespace and name of the Secret an operator reads its credentials from
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SecretLocation {
    pub namespace: String,
    pub name: String,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlatformWorkloadIdentityRole {
    pub operator_name: String,
    #[serde(default)]
    pub role_definition_name: String,
    #[serde(default)]
    pub role_definition_id: String,
    #[serde(default)]
    pub service_account_names: Vec<String>,
    pub secret_location: SecretLocation,
}

/// All roles defined for one OpenShift minor version
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(rename_all = "camelCase")]
pub struct PlatformWorkloadIdentityRoleSet {
    pub openshift_version: String,
    pub platform_workload_identity_roles: Vec<PlatformWorkloadIdentityRole>,
}

/// Read-only lookup from operator name to secret location
#[derive(Clone, Debug, Default)]
pub struct RoleCatalog {
    locations: BTreeMap<String, SecretLocation>,
}

impl RoleCatalog {
    pub fn get(&self, operator_name: &str) -> Option<&SecretLocation> {
        self.locations.get(operator_name)
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }
}

impl<S: Into<String>> FromIterator<(S, SecretLocation)> for RoleCatalog {
    fn from_iter<I: IntoIterator<Item = (S, SecretLocation)>>(iter: I) -> Self {
        Self {
            locations: iter.into_iter().map(|(k, v)| (k.into(), v)).collect(),
        }
    }
}

impl From<&PlatformWorkloadIdentityRoleSet> for RoleCatalog {
    fn from(set: &PlatformWorkloadIdentityRoleSet) -> Self {
        set.platform_workload_identity_roles
            .iter()
            .map(|role| (role.operator_name.clone(), role.secret_location.clone()))
            .collect()
    }
}

/// Role sets for every supported OpenShift minor version
#[derive(Clone, Debug, Default)]
pub struct RoleSetCatalog {
    sets: Vec<PlatformWorkloadIdentityRoleSet>,
}

impl RoleSetCatalog {
    pub fn new(sets: Vec<PlatformWorkloadIdentityRoleSet>) -> Self {
        Self { sets }
    }

    /// Resolve the role catalog for a cluster version such as `4.14.16`
    pub fn for_version(&self, version: &str) -> Result<RoleCatalog> {
        let minor = minor_version(version)?;

        let set = self
            .sets
            .iter()
            .find(|s| s.openshift_version == minor)
            .ok_or_else(|| GeneratorError::UnsupportedVersion {
                version: version.to_string(),
            })?;

        debug!(
            "Using role set {} with {} roles for version {}",
            set.openshift_version,
            set.platform_workload_identity_roles.len(),
            version
        );
        Ok(RoleCatalog::from(set))
    }
}

/// Reduce a version to its `major.minor` form
fn minor_version(version: &str) -> Result<String> {
    let invalid = || GeneratorError::InvalidVersion {
        version: version.to_string(),
    };

    let mut parts = version.trim().split('.');
    let major = parts.next().filter(|p| p.parse::<u32>().is_ok()).ok_or_else(invalid)?;
    let minor = parts.next().filter(|p| p.parse::<u32>().is_ok()).ok_or_else(invalid)?;

    Ok(format!("{}.{}", major, minor))
}
