// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;

/// Generator configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Cluster document (JSON)
    pub cluster_document: PathBuf,
    /// Subscription document (JSON)
    pub subscription_document: PathBuf,
    /// Platform workload identity role sets for all supported versions (JSON list)
    pub role_sets: PathBuf,
    /// Manifests are written here when set, otherwise streamed to stdout
    pub output_dir: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let required = |key: &str| {
            lookup(key)
                .filter(|v| !v.is_empty())
                .map(PathBuf::from)
                .with_context(|| format!("{} environment variable not set", key))
        };

        Ok(Config {
            cluster_document: required("CLUSTER_DOCUMENT")?,
            subscription_document: required("SUBSCRIPTION_DOCUMENT")?,
            role_sets: required("ROLE_SETS")?,
            output_dir: lookup("OUTPUT_DIR").filter(|v| !v.is_empty()).map(PathBuf::from),
        })
    }
}
