use crate::{AddOn, FargateProfileSpec, NodeGroupSpec, TeamBinding, VersionProfile};
use serde::{Deserialize, Serialize};

/// A request to create a new, isolated VPC for the cluster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkRequest {
    /// The VPC's `Name`, which is the stack name.
    pub vpc_name: String,

    /// The VPC CIDR. When absent the provisioner picks its default.
    pub cidr: Option<String>,
}

/// Everything the blueprint builder needs to create a cluster, with no cloud resources created
/// yet.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedCluster {
    /// Identifies the blueprint within the deployment, `<stackName>-eks`.
    pub blueprint_id: String,
    pub stack_name: String,
    pub cluster_name: String,
    pub account: String,
    pub region: String,
    pub network: NetworkRequest,
    pub teams: Vec<TeamBinding>,
    pub version: VersionProfile,
    pub add_ons: Vec<AddOn>,
    pub node_groups: Vec<NodeGroupSpec>,
    pub fargate_profiles: Vec<FargateProfileSpec>,
}

