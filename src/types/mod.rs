// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Input documents and the custom resources generated from them.

pub mod authentication;
pub mod cluster;
pub mod roles;
pub mod subscription;

pub use authentication::{Authentication, AuthenticationSpec};
pub use cluster::{OpenShiftCluster, PlatformWorkloadIdentity};
pub use roles::{RoleCatalog, RoleSetCatalog, SecretLocation};
pub use subscription::Subscription;
