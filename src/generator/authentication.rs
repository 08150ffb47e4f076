// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::authentication;
use crate::error::{GeneratorError, Result};
use crate::types::{Authentication, AuthenticationSpec, OpenShiftCluster};
use tracing::instrument;

/// Build the cluster authentication config pointing service account tokens at the OIDC issuer
#[instrument(skip_all, fields(cluster = %cluster.name))]
pub fn authentication_config(cluster: &OpenShiftCluster) -> Result<Authentication> {
    let Some(issuer) = cluster.oidc_issuer() else {
        return Err(GeneratorError::MissingIssuer {
            cluster: cluster.name.clone(),
        });
    };

    Ok(Authentication::new(
        authentication::NAME,
        AuthenticationSpec {
            service_account_issuer: issuer.to_string(),
        },
    ))
}
