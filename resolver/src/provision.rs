use crate::error::{BuildSnafu, NetworkSnafu, Result, RoleSnafu};
use crate::provisioner::{Blueprint, ClusterProvider, Provisioner, Team};
use blueprint_model::{ResolvedCluster, TeamBinding};
use log::{debug, info};
use snafu::ResultExt;

/// Drive `provisioner` over `resolved`: network first, then one role per namespace team, then
/// the blueprint build.
pub fn provision<P>(resolved: &ResolvedCluster, provisioner: &mut P) -> Result<P::Output>
where
    P: Provisioner,
{
    info!("Creating network '{}'", resolved.network.vpc_name);
    let network = provisioner
        .create_network(&resolved.network)
        .context(NetworkSnafu {
            vpc_name: &resolved.network.vpc_name,
        })?;
    debug!("Network '{}' is '{}'", network.vpc_name, network.vpc_ref);

    let mut teams = Vec::with_capacity(resolved.teams.len());
    for binding in &resolved.teams {
        let team = match binding {
            TeamBinding::Platform {
                name,
                user_role_arn,
            } => Team {
                name: name.clone(),
                namespace: None,
                user_role_arn: user_role_arn.clone(),
            },
            TeamBinding::Application {
                name,
                namespace,
                role,
            } => {
                info!("Creating role '{}' for namespace '{}'", role.construct_id, namespace);
                let user_role_arn = provisioner.create_role(role).context(RoleSnafu {
                    construct_id: &role.construct_id,
                })?;
                Team {
                    name: name.clone(),
                    namespace: Some(namespace.clone()),
                    user_role_arn,
                }
            }
        };
        teams.push(team);
    }

    let blueprint = Blueprint {
        id: resolved.blueprint_id.clone(),
        account: resolved.account.clone(),
        region: resolved.region.clone(),
        network,
        cluster_provider: ClusterProvider {
            cluster_name: resolved.cluster_name.clone(),
            version: resolved.version.control_plane,
            managed_node_groups: resolved.node_groups.clone(),
            fargate_profiles: resolved.fargate_profiles.clone(),
        },
        add_ons: resolved.add_ons.clone(),
        teams,
    };
    for add_on in &blueprint.add_ons {
        match add_on.version() {
            Some(version) => debug!("Add-on '{}' pinned to '{}'", add_on.kind(), version),
            None => debug!("Add-on '{}'", add_on.kind()),
        }
    }
    info!("Building blueprint '{}'", blueprint.id);
    provisioner.build(blueprint).context(BuildSnafu {
        blueprint_id: &resolved.blueprint_id,
    })
}
