use crate::{AddOnKind, Configuration};
use serde::{Deserialize, Serialize};

/// The user-facing description of a cluster stack.
///
/// Field names follow the stack properties that deployment tooling already passes around, e.g.
///
/// ```yaml
/// stackName: payments
/// account: "111122223333"
/// region: us-west-2
/// k8Version: "1.22"
/// namespaces: [team-a, team-b]
/// certManager: true
/// ```
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ClusterConfig {
    /// The AWS account the stack is deployed to.
    #[serde(default)]
    pub account: String,

    /// The AWS region the stack is deployed to.
    #[serde(default)]
    pub region: String,

    /// The name of the stack. Also used to name the VPC and, unless `cluster_name` is given, the
    /// cluster.
    pub stack_name: String,

    /// The name of the EKS cluster. Defaults to `stack_name`.
    pub cluster_name: Option<String>,

    /// The desired Kubernetes version (e.g. "1.22"). Make sure this is quoted so that it is
    /// interpreted as a YAML string (not a number). Unsupported values fall back to the default
    /// version.
    #[serde(default)]
    pub k8_version: String,

    /// An existing VPC to place the cluster in. Lookup is not supported yet; a new VPC is created
    /// regardless.
    pub vpc_id: Option<String>,

    /// The CIDR for the VPC that is created for the cluster.
    pub vpc_cidr: Option<String>,

    /// Namespaces that each get an application team with its own IAM role.
    pub namespaces: Option<Vec<String>>,

    #[serde(flatten)]
    pub add_ons: AddOnToggles,
}

impl ClusterConfig {
    /// The cluster name, falling back to the stack name.
    pub fn cluster_name(&self) -> &str {
        self.cluster_name.as_deref().unwrap_or(&self.stack_name)
    }

    /// The namespaces that get application teams, in the order given.
    pub fn namespaces(&self) -> &[String] {
        self.namespaces.as_deref().unwrap_or_default()
    }
}

impl Configuration for ClusterConfig {}

/// One switch per optional add-on. All default to off.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct AddOnToggles {
    #[serde(default)]
    pub cert_manager: bool,
    #[serde(default)]
    pub lb_controller: bool,
    #[serde(default)]
    pub metrics_server: bool,
    #[serde(default)]
    pub opa_gate_keeper: bool,
    #[serde(default)]
    pub kube_cost: bool,
    /// Karpenter is presently disabled; setting this only produces a warning.
    #[serde(default)]
    pub karpenter: bool,
    /// Accepted for compatibility with existing stack definitions. No add-on is installed.
    #[serde(default)]
    pub nginx_ingress: bool,
    /// Accepted for compatibility with existing stack definitions. No add-on is installed.
    #[serde(default)]
    pub argo_cd: bool,
}

impl AddOnToggles {
    /// Whether the toggle for `kind` is set. Required add-ons are always enabled.
    pub fn is_enabled(&self, kind: AddOnKind) -> bool {
        match kind {
            AddOnKind::VpcCni | AddOnKind::SecretsStore | AddOnKind::CoreDns => true,
            AddOnKind::CertManager => self.cert_manager,
            AddOnKind::AwsLoadBalancerController => self.lb_controller,
            AddOnKind::MetricsServer => self.metrics_server,
            AddOnKind::OpaGatekeeper => self.opa_gate_keeper,
            AddOnKind::Kubecost => self.kube_cost,
            AddOnKind::Karpenter => self.karpenter,
        }
    }

    /// Enable the toggle for `kind`. Required add-ons have no toggle and are left alone.
    pub fn enable(&mut self, kind: AddOnKind) -> &mut Self {
        match kind {
            AddOnKind::VpcCni | AddOnKind::SecretsStore | AddOnKind::CoreDns => {}
            AddOnKind::CertManager => self.cert_manager = true,
            AddOnKind::AwsLoadBalancerController => self.lb_controller = true,
            AddOnKind::MetricsServer => self.metrics_server = true,
            AddOnKind::OpaGatekeeper => self.opa_gate_keeper = true,
            AddOnKind::Kubecost => self.kube_cost = true,
            AddOnKind::Karpenter => self.karpenter = true,
        }
        self
    }
}
