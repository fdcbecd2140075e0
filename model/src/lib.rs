/*!

This library provides the data model for describing an EKS cluster blueprint: the user-facing
`ClusterConfig`, the Kubernetes version profiles, and the add-on, team, node group and network
descriptors that are handed to a provisioner.

!*/

#![deny(
    clippy::expect_used,
    clippy::get_unwrap,
    clippy::panic,
    clippy::panic_in_result_fn,
    clippy::panicking_unwrap,
    clippy::unwrap_in_result,
    clippy::unwrap_used
)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::panic))]

pub use add_on::{AddOn, AddOnKind};
pub use cluster_config::{AddOnToggles, ClusterConfig};
pub use cluster_provider::{
    AmiType, CapacityType, FargateProfileSpec, FargateSelector, NodeGroupSpec,
};
pub use configuration::Configuration;
pub use error::{Error, Result};
pub use k8s_version::K8sVersion;
pub use resolved::{NetworkRequest, ResolvedCluster};
pub use team::{role_arn, RoleRequest, TeamBinding};
pub use version_profile::VersionProfile;

mod add_on;
mod cluster_config;
mod cluster_provider;
mod configuration;
pub mod constants;
mod error;
mod k8s_version;
mod resolved;
mod team;
mod version_profile;
