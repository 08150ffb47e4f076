// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Where the projected service account token is mounted in operator pods
pub const AZURE_FEDERATED_TOKEN_FILE: &str = "/var/run/secrets/openshift/serviceaccount/token";

/// Cloud credential operator secret
pub mod operator_secret {
    pub const NAMESPACE: &str = "openshift-cloud-credential-operator";
    pub const NAME: &str = "azure-credentials";
    /// Output key of the operator secret manifest
    pub const FILENAME: &str = "azure-ad-pod-identity-webhook-config.yaml";
}

/// Cluster authentication config
pub mod authentication {
    pub const NAME: &str = "cluster";
    /// Output key of the authentication config manifest
    pub const FILENAME: &str = "cluster-authentication-02-config.yaml";
}

/// String data keys written into credential secrets
pub mod secret_keys {
    pub const CLIENT_ID: &str = "azure_client_id";
    pub const SUBSCRIPTION_ID: &str = "azure_subscription_id";
    pub const TENANT_ID: &str = "azure_tenant_id";
    pub const REGION: &str = "azure_region";
    pub const FEDERATED_TOKEN_FILE: &str = "azure_federated_token_file";
}

pub const SECRET_TYPE_OPAQUE: &str = "Opaque";
