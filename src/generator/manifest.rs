// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Generated objects and their YAML rendering

use crate::error::Result;
use crate::types::Authentication;
use anyhow::{bail, Context};
use k8s_openapi::api::core::v1::Secret;
use kube::{Resource, ResourceExt};
use serde::Serialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, MAIN_SEPARATOR};
use tracing::info;

/// A generated object, ready to be applied verbatim
#[derive(Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum Manifest {
    OpaqueSecret(Secret),
    AuthenticationConfig(Authentication),
}

/// Generated objects keyed by manifest filename
pub type Manifests = BTreeMap<String, Manifest>;

impl Manifest {
    pub fn kind(&self) -> String {
        match self {
            Manifest::OpaqueSecret(_) => Secret::kind(&()).into_owned(),
            Manifest::AuthenticationConfig(_) => Authentication::kind(&()).into_owned(),
        }
    }

    pub fn api_version(&self) -> String {
        match self {
            Manifest::OpaqueSecret(_) => Secret::api_version(&()).into_owned(),
            Manifest::AuthenticationConfig(_) => Authentication::api_version(&()).into_owned(),
        }
    }

    pub fn name(&self) -> String {
        match self {
            Manifest::OpaqueSecret(s) => s.name_any(),
            Manifest::AuthenticationConfig(a) => a.name_any(),
        }
    }

    /// Namespace of the object, `None` for cluster-scoped objects
    pub fn namespace(&self) -> Option<String> {
        match self {
            Manifest::OpaqueSecret(s) => s.namespace(),
            Manifest::AuthenticationConfig(a) => a.namespace(),
        }
    }

    pub fn as_secret(&self) -> Option<&Secret> {
        match self {
            Manifest::OpaqueSecret(s) => Some(s),
            Manifest::AuthenticationConfig(_) => None,
        }
    }

    pub fn as_authentication(&self) -> Option<&Authentication> {
        match self {
            Manifest::AuthenticationConfig(a) => Some(a),
            Manifest::OpaqueSecret(_) => None,
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml::to_string(self)?)
    }
}

impl From<Secret> for Manifest {
    fn from(secret: Secret) -> Self {
        Manifest::OpaqueSecret(secret)
    }
}

impl From<Authentication> for Manifest {
    fn from(auth: Authentication) -> Self {
        Manifest::AuthenticationConfig(auth)
    }
}

/// Render every manifest as one YAML document stream, in key order
pub fn render(manifests: &Manifests) -> Result<String> {
    let mut out = String::new();
    for (filename, manifest) in manifests {
        out.push_str("---\n");
        out.push_str(&format!("# {}\n", filename));
        out.push_str(&manifest.to_yaml()?);
    }
    Ok(out)
}

/// Write each manifest to `<dir>/<key>`, creating `dir` if needed.
///
/// Keys come partly from the role catalog, so a key holding a path separator
/// is refused before anything is written.
pub fn write_all(dir: &Path, manifests: &Manifests) -> anyhow::Result<()> {
    if let Some(filename) = manifests.keys().find(|k| !is_plain_filename(k)) {
        bail!("Refusing to write manifest with unsafe filename {:?}", filename);
    }

    fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))?;

    for (filename, manifest) in manifests {
        let path = dir.join(filename);
        fs::write(&path, manifest.to_yaml()?)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(
            "Wrote {} {} {} to {}",
            manifest.api_version(),
            manifest.kind(),
            manifest.name(),
            path.display()
        );
    }

    Ok(())
}

fn is_plain_filename(key: &str) -> bool {
    !key.is_empty()
        && key != "."
        && key != ".."
        && !key.contains('/')
        && !key.contains('\\')
        && !key.contains(MAIN_SEPARATOR)
}
