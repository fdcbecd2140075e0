use crate::VersionProfile;
use serde::{Deserialize, Serialize};
use serde_plain::{derive_display_from_serialize, derive_fromstr_from_deserialize};

/// Every kind of add-on the blueprint knows about.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AddOnKind {
    VpcCni,
    SecretsStore,
    CoreDns,
    CertManager,
    AwsLoadBalancerController,
    MetricsServer,
    OpaGatekeeper,
    Kubecost,
    /// Accepted by the configuration surface but never installed. Karpenter stays disabled until
    /// https://github.com/aws-quickstart/cdk-eks-blueprints/issues/587 is resolved.
    Karpenter,
}

derive_display_from_serialize!(AddOnKind);
derive_fromstr_from_deserialize!(AddOnKind);

impl AddOnKind {
    /// Add-ons that every cluster gets, in installation order.
    pub const REQUIRED: [AddOnKind; 3] = [Self::VpcCni, Self::SecretsStore, Self::CoreDns];

    /// Add-ons that are installed when their toggle is set, in installation order.
    pub const OPTIONAL: [AddOnKind; 5] = [
        Self::CertManager,
        Self::AwsLoadBalancerController,
        Self::MetricsServer,
        Self::OpaGatekeeper,
        Self::Kubecost,
    ];
}

/// A single add-on that the blueprint builder should install.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum AddOn {
    VpcCni { version: String },
    SecretsStore,
    CoreDns { version: String },
    CertManager,
    AwsLoadBalancerController,
    MetricsServer,
    OpaGatekeeper,
    /// Cost visibility comes from Kubecost's own blueprint add-on rather than the core library.
    Kubecost,
}

impl AddOn {
    /// Create the descriptor for `kind`, taking pinned versions from `profile`. Returns `None` for
    /// kinds that are not installable.
    pub fn new(kind: AddOnKind, profile: &VersionProfile) -> Option<Self> {
        let add_on = match kind {
            AddOnKind::VpcCni => Self::VpcCni {
                version: profile.vpc_cni.clone(),
            },
            AddOnKind::SecretsStore => Self::SecretsStore,
            AddOnKind::CoreDns => Self::CoreDns {
                version: profile.core_dns.clone(),
            },
            AddOnKind::CertManager => Self::CertManager,
            AddOnKind::AwsLoadBalancerController => Self::AwsLoadBalancerController,
            AddOnKind::MetricsServer => Self::MetricsServer,
            AddOnKind::OpaGatekeeper => Self::OpaGatekeeper,
            AddOnKind::Kubecost => Self::Kubecost,
            AddOnKind::Karpenter => return None,
        };
        Some(add_on)
    }

    pub fn kind(&self) -> AddOnKind {
        match self {
            Self::VpcCni { .. } => AddOnKind::VpcCni,
            Self::SecretsStore => AddOnKind::SecretsStore,
            Self::CoreDns { .. } => AddOnKind::CoreDns,
            Self::CertManager => AddOnKind::CertManager,
            Self::AwsLoadBalancerController => AddOnKind::AwsLoadBalancerController,
            Self::MetricsServer => AddOnKind::MetricsServer,
            Self::OpaGatekeeper => AddOnKind::OpaGatekeeper,
            Self::Kubecost => AddOnKind::Kubecost,
        }
    }

    /// The pinned version, for add-ons that have one.
    pub fn version(&self) -> Option<&str> {
        match self {
            Self::VpcCni { version } | Self::CoreDns { version } => Some(version.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod test {
    use super::{AddOn, AddOnKind};
    use crate::VersionProfile;
    use std::str::FromStr;

    #[test]
    fn kind_round_trips_through_descriptor() {
        let profile = VersionProfile::default_profile();
        for kind in AddOnKind::REQUIRED.iter().chain(AddOnKind::OPTIONAL.iter()) {
            assert_eq!(AddOn::new(*kind, profile).unwrap().kind(), *kind);
        }
        assert!(AddOn::new(AddOnKind::Karpenter, profile).is_none());
    }

    #[test]
    fn versions_come_from_profile() {
        let profile = VersionProfile::for_version("1.21");
        let dns = AddOn::new(AddOnKind::CoreDns, profile).unwrap();
        assert_eq!(dns.version(), Some("v1.8.4"));
        let cni = AddOn::new(AddOnKind::VpcCni, profile).unwrap();
        assert_eq!(cni.version(), Some("v1.11.4-eksbuild.1"));
        assert_eq!(AddOn::SecretsStore.version(), None);
    }

    #[test]
    fn kind_display() {
        assert_eq!(AddOnKind::AwsLoadBalancerController.to_string(), "awsLoadBalancerController");
        assert_eq!(AddOnKind::from_str("kubecost").unwrap(), AddOnKind::Kubecost);
        assert!(AddOnKind::from_str("nginx").is_err());
    }

    #[test]
    fn descriptor_is_tagged() {
        let value = serde_json::to_value(AddOn::CoreDns {
            version: "v1.8.7".into(),
        })
        .unwrap();
        assert_eq!(
            value,
            serde_json::json!({"kind": "coreDns", "version": "v1.8.7"})
        );
    }
}
