use crate::constants::{
    BOTTLEROCKET_ON_DEMAND_INSTANCES, BOTTLEROCKET_ON_DEMAND_NODE_GROUP,
    BOTTLEROCKET_SPOT_INSTANCES, BOTTLEROCKET_SPOT_NODE_GROUP, FARGATE_NAMESPACE,
    FARGATE_PROFILE_ID, FARGATE_PROFILE_NAME, NODE_GROUP_DISK_SIZE_GIB,
};
use serde::{Deserialize, Serialize};
use serde_plain::{derive_display_from_serialize, derive_fromstr_from_deserialize};

#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CapacityType {
    Spot,
    OnDemand,
}

derive_display_from_serialize!(CapacityType);
derive_fromstr_from_deserialize!(CapacityType);

/// The EKS managed node group AMI types that the blueprint uses.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum AmiType {
    #[serde(rename = "BOTTLEROCKET_x86_64")]
    BottlerocketX86_64,
}

derive_display_from_serialize!(AmiType);
derive_fromstr_from_deserialize!(AmiType);

/// A managed node group backing the cluster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeGroupSpec {
    pub id: String,
    pub ami_type: AmiType,
    pub instance_types: Vec<String>,
    /// Root volume size in GiB.
    pub disk_size: u32,
    pub capacity_type: CapacityType,
}

impl NodeGroupSpec {
    /// The two Bottlerocket node groups every cluster gets: one spot, one on-demand.
    pub fn bottlerocket_defaults() -> Vec<Self> {
        vec![
            Self::bottlerocket(
                BOTTLEROCKET_SPOT_NODE_GROUP,
                BOTTLEROCKET_SPOT_INSTANCES,
                CapacityType::Spot,
            ),
            Self::bottlerocket(
                BOTTLEROCKET_ON_DEMAND_NODE_GROUP,
                BOTTLEROCKET_ON_DEMAND_INSTANCES,
                CapacityType::OnDemand,
            ),
        ]
    }

    fn bottlerocket(id: &str, instance_types: &[&str], capacity_type: CapacityType) -> Self {
        Self {
            id: id.to_string(),
            ami_type: AmiType::BottlerocketX86_64,
            instance_types: instance_types.iter().map(|s| s.to_string()).collect(),
            disk_size: NODE_GROUP_DISK_SIZE_GIB,
            capacity_type,
        }
    }
}

/// A Fargate profile that schedules pods from `selectors` onto Fargate.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FargateProfileSpec {
    pub id: String,
    pub fargate_profile_name: String,
    pub selectors: Vec<FargateSelector>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FargateSelector {
    pub namespace: String,
}

impl FargateProfileSpec {
    /// The single profile every cluster gets, selecting the `fargate` namespace.
    pub fn defaults() -> Vec<Self> {
        vec![Self {
            id: FARGATE_PROFILE_ID.to_string(),
            fargate_profile_name: FARGATE_PROFILE_NAME.to_string(),
            selectors: vec![FargateSelector {
                namespace: FARGATE_NAMESPACE.to_string(),
            }],
        }]
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn node_group_defaults() {
        let groups = NodeGroupSpec::bottlerocket_defaults();
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].id, "bottleRocketX86Spot");
        assert_eq!(groups[0].capacity_type, CapacityType::Spot);
        assert_eq!(groups[1].id, "bottleRocketX86OnDemand");
        assert_eq!(groups[1].capacity_type, CapacityType::OnDemand);
        for group in &groups {
            assert_eq!(group.ami_type, AmiType::BottlerocketX86_64);
            assert_eq!(group.disk_size, 50);
            assert!(!group.instance_types.is_empty());
        }
    }

    #[test]
    fn fargate_defaults() {
        let profiles = FargateProfileSpec::defaults();
        assert_eq!(profiles.len(), 1);
        assert_eq!(profiles[0].fargate_profile_name, "fargate");
        assert_eq!(profiles[0].selectors[0].namespace, "fargate");
    }

    #[test]
    fn enum_names() {
        assert_eq!(AmiType::BottlerocketX86_64.to_string(), "BOTTLEROCKET_x86_64");
        assert_eq!(CapacityType::OnDemand.to_string(), "ON_DEMAND");
        assert_eq!("SPOT".parse::<CapacityType>().unwrap(), CapacityType::Spot);
    }
}
