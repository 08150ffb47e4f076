// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Derivation of workload identity manifests from a cluster document.

pub mod authentication;
pub mod manifest;
pub mod secrets;

pub use authentication::authentication_config;
pub use manifest::{render, write_all, Manifest, Manifests};
pub use secrets::{identity_secrets, operator_secret};

use crate::constants;
use crate::error::{GeneratorError, Result};
use crate::types::{OpenShiftCluster, RoleCatalog, Subscription};
use kube::ResourceExt;
use tracing::{info, instrument};

/// Generate every workload identity manifest for a cluster, keyed by filename.
///
/// Either all manifests are returned or the first error encountered.
#[instrument(skip_all, fields(cluster = %cluster.name))]
pub fn generate(
    cluster: &OpenShiftCluster,
    subscription: &Subscription,
    roles: &RoleCatalog,
) -> Result<Manifests> {
    if !cluster.uses_workload_identity() {
        return Err(GeneratorError::NotApplicable {
            cluster: cluster.name.clone(),
        });
    }

    let mut manifests = Manifests::new();

    for secret in identity_secrets(cluster, subscription, roles)? {
        let key = format!(
            "{}-{}-credentials.yaml",
            secret.namespace().unwrap_or_default(),
            secret.name_any()
        );
        manifests.insert(key, Manifest::from(secret));
    }

    manifests.insert(
        constants::operator_secret::FILENAME.to_string(),
        Manifest::from(operator_secret(subscription)?),
    );

    manifests.insert(
        constants::authentication::FILENAME.to_string(),
        Manifest::from(authentication_config(cluster)?),
    );

    info!("Generated {} workload identity manifests", manifests.len());
    Ok(manifests)
}
