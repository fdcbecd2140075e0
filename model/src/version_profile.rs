use crate::K8sVersion;
use lazy_static::lazy_static;
use maplit::btreemap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

const VPC_CNI_VERSION: &str = "v1.11.4-eksbuild.1";

/// The control-plane version together with the managed add-on versions that are known to work
/// with it.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VersionProfile {
    pub control_plane: K8sVersion,
    pub core_dns: String,
    pub vpc_cni: String,
}

impl VersionProfile {
    fn new(control_plane: K8sVersion, core_dns: &str, vpc_cni: &str) -> Self {
        Self {
            control_plane,
            core_dns: core_dns.to_string(),
            vpc_cni: vpc_cni.to_string(),
        }
    }

    /// Look up the profile for `version`. Only the exact literals in
    /// [`VersionProfile::supported`] match; anything else, including an empty string, yields the
    /// default profile.
    pub fn for_version(version: &str) -> &'static VersionProfile {
        PROFILES.get(version).unwrap_or_else(Self::default_profile)
    }

    /// Whether `version` is one of the supported literals.
    pub fn is_supported(version: &str) -> bool {
        PROFILES.contains_key(version)
    }

    pub fn default_profile() -> &'static VersionProfile {
        &DEFAULT_PROFILE
    }

    /// All supported version literals and their profiles, in ascending version order.
    pub fn supported() -> impl Iterator<Item = (&'static str, &'static VersionProfile)> {
        PROFILES.iter().map(|(version, profile)| (*version, profile))
    }
}

lazy_static! {
    static ref PROFILES: BTreeMap<&'static str, VersionProfile> = btreemap! {
        "1.21" => VersionProfile::new(K8sVersion::new(1, 21), "v1.8.4", VPC_CNI_VERSION),
        "1.22" => VersionProfile::new(K8sVersion::new(1, 22), "v1.8.7", VPC_CNI_VERSION),
        "1.23" => VersionProfile::new(K8sVersion::new(1, 23), "v1.8.7-eksbuild.2", VPC_CNI_VERSION),
    };
    static ref DEFAULT_PROFILE: VersionProfile = VersionProfile::new(
        K8sVersion::new(1, 23),
        "v1.8.7-eksbuild.2",
        VPC_CNI_VERSION,
    );
}
