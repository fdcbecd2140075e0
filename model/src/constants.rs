/// Helper macro to avoid retyping the base domain-like name of the blueprint API when creating
/// further string constants from it. When given no parameters, this returns the base name. When
/// given a string literal parameter it adds `/parameter` to the end.
macro_rules! blueprint {
    () => {
        "blueprint.eks.aws"
    };
    ($s:literal) => {
        concat!(blueprint!(), "/", $s)
    };
}

// Manifest identifiers
pub const API_VERSION: &str = blueprint!("v1");
pub const BLUEPRINT_KIND: &str = "EksBlueprint";
pub const LABEL_STACK_NAME: &str = blueprint!("stack-name");
pub const LABEL_K8S_VERSION: &str = blueprint!("k8s-version");

// Kubernetes versions
pub const DEFAULT_K8S_VERSION: &str = "1.23";

// Teams
pub const PLATFORM_TEAM_NAME: &str = "platformteam";
pub const PLATFORM_ADMIN_ROLE_NAME: &str = "Admin";
/// Namespace role construct ids are this prefix followed by the namespace name.
pub const NAMESPACE_ROLE_PREFIX: &str = "NSRole";

// Node groups
pub const BOTTLEROCKET_SPOT_NODE_GROUP: &str = "bottleRocketX86Spot";
pub const BOTTLEROCKET_ON_DEMAND_NODE_GROUP: &str = "bottleRocketX86OnDemand";
pub const NODE_GROUP_DISK_SIZE_GIB: u32 = 50;
pub const BOTTLEROCKET_SPOT_INSTANCES: &[&str] =
    &["t3.large", "t3a.large", "m5.large", "m5a.large"];
pub const BOTTLEROCKET_ON_DEMAND_INSTANCES: &[&str] = &["m5.large"];

// Fargate
pub const FARGATE_PROFILE_ID: &str = "MainFargateProfile";
pub const FARGATE_PROFILE_NAME: &str = "fargate";
pub const FARGATE_NAMESPACE: &str = "fargate";

/// Blueprint ids are the stack name followed by this suffix.
pub const BLUEPRINT_ID_SUFFIX: &str = "-eks";
