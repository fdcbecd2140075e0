mod error;

pub use self::error::{IntoProvisionError, ProvisionError, ProvisionResult, Resources};
use blueprint_model::{
    AddOn, FargateProfileSpec, K8sVersion, NetworkRequest, NodeGroupSpec, RoleRequest,
};
use serde::{Deserialize, Serialize};

/// You implement the [`Provisioner`] trait to turn a
/// [`ResolvedCluster`](blueprint_model::ResolvedCluster) into something
/// deployable. The resolver never creates anything itself; it calls these functions in a fixed
/// order from [`provision`](crate::provision):
///
/// 1. `create_network` once,
/// 2. `create_role` once per namespace team, in team order,
/// 3. `build` once, with the network and role ARNs filled in.
///
/// `Output` is whatever your `build` produces, for example a rendered manifest or a handle to a
/// running deployment. Any retry or rollback is the provisioner's business; the first error stops
/// provisioning and is returned to the caller unchanged.
pub trait Provisioner {
    type Output;

    /// Create the VPC described by `request`.
    fn create_network(&mut self, request: &NetworkRequest) -> ProvisionResult<NetworkReference>;

    /// Create the IAM role described by `request` and return its ARN.
    fn create_role(&mut self, request: &RoleRequest) -> ProvisionResult<String>;

    /// Assemble the blueprint into a deployable unit.
    fn build(&mut self, blueprint: Blueprint) -> ProvisionResult<Self::Output>;
}

/// A network that exists, or will exist once the deployment runs.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NetworkReference {
    pub vpc_name: String,
    /// The provisioner's handle for the VPC, e.g. a VPC id or a construct path.
    pub vpc_ref: String,
    pub cidr: Option<String>,
}

/// A team binding whose IAM role exists.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub name: String,
    /// `None` for the platform team, which is cluster-wide.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
    pub user_role_arn: String,
}

/// The cluster itself: control plane version and compute.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClusterProvider {
    pub cluster_name: String,
    pub version: K8sVersion,
    pub managed_node_groups: Vec<NodeGroupSpec>,
    pub fargate_profiles: Vec<FargateProfileSpec>,
}

/// The input to [`Provisioner::build`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub id: String,
    pub account: String,
    pub region: String,
    pub network: NetworkReference,
    pub cluster_provider: ClusterProvider,
    pub add_ons: Vec<AddOn>,
    pub teams: Vec<Team>,
}
