// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeneratorError {
    #[error("workload identity resources requested for cluster {cluster}, which is not configured for workload identity")]
    NotApplicable { cluster: String },

    #[error("oidcIssuer not present in cluster document {cluster}")]
    MissingIssuer { cluster: String },

    #[error("Invalid OpenShift version: {version}")]
    InvalidVersion { version: String },

    #[error("No platform workload identity role set for OpenShift version {version}")]
    UnsupportedVersion { version: String },

    /// Only reachable through non-string map keys or failing `Serialize` impls,
    /// neither of which the generated Secret and Authentication types have.
    #[error("Failed to render manifest: {0}")]
    Serialization(#[from] serde_yaml::Error),
}

pub type Result<T> = std::result::Result<T, GeneratorError>;
