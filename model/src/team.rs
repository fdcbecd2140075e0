use crate::constants::{NAMESPACE_ROLE_PREFIX, PLATFORM_ADMIN_ROLE_NAME, PLATFORM_TEAM_NAME};
use serde::{Deserialize, Serialize};

/// An access-control mapping from an IAM identity to a scope in the cluster.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum TeamBinding {
    /// Cluster-wide administrative access.
    #[serde(rename_all = "camelCase")]
    Platform { name: String, user_role_arn: String },

    /// Access scoped to a single namespace. The role does not exist yet; it is created by the
    /// provisioner from `role`.
    #[serde(rename_all = "camelCase")]
    Application {
        name: String,
        namespace: String,
        role: RoleRequest,
    },
}

impl TeamBinding {
    /// The platform team, bound to the account's `Admin` role.
    pub fn platform<S: AsRef<str>>(account: S) -> Self {
        Self::Platform {
            name: PLATFORM_TEAM_NAME.to_string(),
            user_role_arn: role_arn(account, PLATFORM_ADMIN_ROLE_NAME),
        }
    }

    /// An application team named after, and scoped to, `namespace`, using the role that
    /// `role` asks for.
    pub fn application<S: Into<String>>(namespace: S, role: RoleRequest) -> Self {
        let namespace = namespace.into();
        Self::Application {
            name: namespace.clone(),
            namespace,
            role,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Self::Platform { name, .. } | Self::Application { name, .. } => name.as_str(),
        }
    }
}

/// A request to create an IAM role that can be assumed by principals in `trusted_account`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleRequest {
    /// Identifies the role within the stack, e.g. `NSRoleteam-a`, or `NSRoleteam-a-2` for the
    /// second binding of `team-a`.
    pub construct_id: String,
    pub trusted_account: String,
}

impl RoleRequest {
    /// The role for a binding of `namespace`. `occurrence` tells repeated bindings of the same
    /// namespace apart: `1` gives `NSRole<namespace>`, `n > 1` gives `NSRole<namespace>-<n>`.
    pub fn for_namespace<S: Into<String>>(namespace: &str, occurrence: usize, account: S) -> Self {
        let construct_id = if occurrence > 1 {
            format!("{}{}-{}", NAMESPACE_ROLE_PREFIX, namespace, occurrence)
        } else {
            format!("{}{}", NAMESPACE_ROLE_PREFIX, namespace)
        };
        Self {
            construct_id,
            trusted_account: account.into(),
        }
    }
}

/// Format the ARN of the role named `role_name` in `account`.
pub fn role_arn<S1, S2>(account: S1, role_name: S2) -> String
where
    S1: AsRef<str>,
    S2: AsRef<str>,
{
    format!("arn:aws:iam::{}:role/{}", account.as_ref(), role_name.as_ref())
}
