// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::{Context, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::Path;
use tracing::info;
use tracing_subscriber::EnvFilter;

use wi_resources::config::Config;
use wi_resources::generator::{generate, render, write_all};
use wi_resources::types::roles::PlatformWorkloadIdentityRoleSet;
use wi_resources::types::{OpenShiftCluster, RoleSetCatalog, Subscription};

fn main() -> Result<()> {
    // Logs go to stderr, stdout is reserved for manifests
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: cluster_document={}",
        config.cluster_document.display()
    );

    let cluster: OpenShiftCluster = read_json(&config.cluster_document)?;
    let subscription: Subscription = read_json(&config.subscription_document)?;
    let role_sets: Vec<PlatformWorkloadIdentityRoleSet> = read_json(&config.role_sets)?;

    let version = &cluster.properties.cluster_profile.version;
    let roles = RoleSetCatalog::new(role_sets)
        .for_version(version)
        .with_context(|| format!("Failed to resolve roles for cluster {}", cluster.name))?;
    info!("Resolved {} platform workload identity roles for version {}", roles.len(), version);

    let manifests = generate(&cluster, &subscription, &roles)
        .with_context(|| format!("Failed to generate manifests for cluster {}", cluster.name))?;

    match &config.output_dir {
        Some(dir) => write_all(dir, &manifests)?,
        None => print!("{}", render(&manifests)?),
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let raw = fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("Failed to parse {}", path.display()))
}
