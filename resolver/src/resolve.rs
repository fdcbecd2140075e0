use crate::error::{MissingFieldSnafu, Result};
use blueprint_model::constants::{BLUEPRINT_ID_SUFFIX, DEFAULT_K8S_VERSION};
use blueprint_model::{
    AddOn, AddOnKind, AddOnToggles, ClusterConfig, FargateProfileSpec, NetworkRequest,
    NodeGroupSpec, ResolvedCluster, RoleRequest, TeamBinding, VersionProfile,
};
use log::{debug, info, warn};
use snafu::ensure;
use std::collections::HashSet;

/// Select the version profile for `version`.
///
/// Only `1.21`, `1.22` and `1.23` are recognized, and only as exact strings. Anything else falls
/// back to the default profile rather than failing.
pub fn resolve_version(version: &str) -> VersionProfile {
    if !VersionProfile::is_supported(version) {
        debug!(
            "Kubernetes version '{}' is not supported, using '{}'",
            version, DEFAULT_K8S_VERSION
        );
    }
    VersionProfile::for_version(version).clone()
}

/// The platform team followed by one application team per namespace, in the order given.
/// Duplicate namespaces are kept, and every binding gets a role request with a construct id no
/// other binding uses.
pub fn build_teams<S: AsRef<str>>(account: &str, namespaces: &[S]) -> Vec<TeamBinding> {
    let mut construct_ids = HashSet::new();
    let mut teams = Vec::with_capacity(namespaces.len() + 1);
    teams.push(TeamBinding::platform(account));
    for namespace in namespaces {
        let namespace = namespace.as_ref();
        let mut occurrence = 1;
        let mut role = RoleRequest::for_namespace(namespace, occurrence, account);
        while !construct_ids.insert(role.construct_id.clone()) {
            occurrence += 1;
            role = RoleRequest::for_namespace(namespace, occurrence, account);
        }
        if occurrence > 1 {
            debug!(
                "Namespace '{}' is repeated, its role is '{}'",
                namespace, role.construct_id
            );
        }
        teams.push(TeamBinding::application(namespace, role));
    }
    teams
}

/// The required add-ons followed by each optional add-on whose toggle is set. Ordering is fixed
/// by [`AddOnKind::REQUIRED`] and [`AddOnKind::OPTIONAL`] regardless of which toggles are set.
pub fn build_add_ons(toggles: &AddOnToggles, profile: &VersionProfile) -> Vec<AddOn> {
    if toggles.karpenter {
        warn!(
            "Karpenter is presently disabled, see \
             https://github.com/aws-quickstart/cdk-eks-blueprints/issues/587"
        );
    }
    if toggles.nginx_ingress {
        debug!("'nginxIngress' is set but no ingress add-on is installed");
    }
    if toggles.argo_cd {
        debug!("'argoCd' is set but no Argo CD add-on is installed");
    }

    AddOnKind::REQUIRED
        .into_iter()
        .chain(AddOnKind::OPTIONAL)
        .filter(|kind| toggles.is_enabled(*kind))
        .filter_map(|kind| AddOn::new(kind, profile))
        .collect()
}

/// A request for a new VPC named after the stack.
pub fn resolve_network(config: &ClusterConfig) -> NetworkRequest {
    if let Some(vpc_id) = &config.vpc_id {
        // TODO: look up the VPC by id once its name tag can be resolved.
        warn!(
            "Using an existing VPC is not supported, ignoring vpcId '{}' and creating VPC '{}'",
            vpc_id, config.stack_name
        );
    }
    NetworkRequest {
        vpc_name: config.stack_name.clone(),
        cidr: config.vpc_cidr.clone(),
    }
}

/// Resolve `config` into the descriptors a provisioner needs. Nothing is created.
pub fn resolve(config: &ClusterConfig) -> Result<ResolvedCluster> {
    ensure!(
        !config.stack_name.trim().is_empty(),
        MissingFieldSnafu { field: "stackName" }
    );
    ensure!(
        !config.account.trim().is_empty(),
        MissingFieldSnafu { field: "account" }
    );
    ensure!(
        !config.region.trim().is_empty(),
        MissingFieldSnafu { field: "region" }
    );

    let version = resolve_version(&config.k8_version);
    let resolved = ResolvedCluster {
        blueprint_id: format!("{}{}", config.stack_name, BLUEPRINT_ID_SUFFIX),
        stack_name: config.stack_name.clone(),
        cluster_name: config.cluster_name().to_string(),
        account: config.account.clone(),
        region: config.region.clone(),
        network: resolve_network(config),
        teams: build_teams(&config.account, config.namespaces()),
        add_ons: build_add_ons(&config.add_ons, &version),
        version,
        node_groups: NodeGroupSpec::bottlerocket_defaults(),
        fargate_profiles: FargateProfileSpec::defaults(),
    };
    info!(
        "Resolved cluster '{}' at version {} with {} add-ons and {} teams",
        resolved.cluster_name,
        resolved.version.control_plane,
        resolved.add_ons.len(),
        resolved.teams.len()
    );
    Ok(resolved)
}
