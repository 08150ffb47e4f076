// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Credential secrets for platform workload identities and the cloud credential operator

use crate::constants::{operator_secret, secret_keys, AZURE_FEDERATED_TOKEN_FILE, SECRET_TYPE_OPAQUE};
use crate::error::Result;
use crate::types::{OpenShiftCluster, RoleCatalog, Subscription};
use k8s_openapi::api::core::v1::Secret;
use kube::api::ObjectMeta;
use std::collections::BTreeMap;
use tracing::{debug, instrument};

/// Build one credentials secret per platform workload identity known to the role catalog.
///
/// Identities whose operator has no role in the catalog are skipped.
#[instrument(skip_all, fields(cluster = %cluster.name))]
pub fn identity_secrets(
    cluster: &OpenShiftCluster,
    subscription: &Subscription,
    roles: &RoleCatalog,
) -> Result<Vec<Secret>> {
    let mut secrets = Vec::new();

    for identity in cluster.platform_workload_identities() {
        let Some(location) = roles.get(&identity.operator_name) else {
            debug!(
                "No role for operator {}, skipping its credentials secret",
                identity.operator_name
            );
            continue;
        };

        let string_data = BTreeMap::from([
            (secret_keys::CLIENT_ID.to_string(), identity.client_id.clone()),
            (secret_keys::SUBSCRIPTION_ID.to_string(), subscription.id.clone()),
            (secret_keys::TENANT_ID.to_string(), subscription.tenant_id.clone()),
            (secret_keys::REGION.to_string(), cluster.location.clone()),
            (
                secret_keys::FEDERATED_TOKEN_FILE.to_string(),
                AZURE_FEDERATED_TOKEN_FILE.to_string(),
            ),
        ]);

        secrets.push(opaque_secret(&location.namespace, &location.name, string_data));
    }

    Ok(secrets)
}

/// Build the tenant secret read by the cloud credential operator
pub fn operator_secret(subscription: &Subscription) -> Result<Secret> {
    let string_data = BTreeMap::from([(
        secret_keys::TENANT_ID.to_string(),
        subscription.tenant_id.clone(),
    )]);

    Ok(opaque_secret(
        operator_secret::NAMESPACE,
        operator_secret::NAME,
        string_data,
    ))
}

fn opaque_secret(namespace: &str, name: &str, string_data: BTreeMap<String, String>) -> Secret {
    Secret {
        metadata: ObjectMeta {
            name: Some(name.to_string()),
            namespace: Some(namespace.to_string()),
            ..Default::default()
        },
        string_data: Some(string_data),
        type_: Some(SECRET_TYPE_OPAQUE.to_string()),
        ..Default::default()
    }
}
