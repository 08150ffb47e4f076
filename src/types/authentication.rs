// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use kube::CustomResource;
use serde::{Deserialize, Serialize};

/// Cluster-wide authentication config read by the kube-apiserver operator
#[derive(CustomResource, Serialize, Deserialize, Clone, Debug, Default, PartialEq, schemars::JsonSchema)]
#[kube(group = "config.openshift.io", version = "v1", kind = "Authentication")]
#[kube(derive = "PartialEq")]
#[serde(rename_all = "camelCase")]
pub struct AuthenticationSpec {
    /// Issuer of the tokens minted for bound service accounts
    pub service_account_issuer: String,
}
