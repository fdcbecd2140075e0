//! A [`Provisioner`] that creates nothing and renders the blueprint as a manifest document
//! instead, so a deployment tool (or a person) can review exactly what would be built.

use crate::provisioner::{
    Blueprint, NetworkReference, ProvisionError, ProvisionResult, Provisioner, Resources,
};
use blueprint_model::constants::{
    API_VERSION, BLUEPRINT_KIND, LABEL_K8S_VERSION, LABEL_STACK_NAME,
};
use blueprint_model::{role_arn, NetworkRequest, RoleRequest};
use log::debug;
use maplit::btreemap;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// IAM rejects role names longer than this.
const MAX_ROLE_NAME_LEN: usize = 64;

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ManifestMetadata {
    pub name: String,
    pub labels: BTreeMap<String, String>,
}

/// The rendered form of a [`Blueprint`].
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlueprintManifest {
    pub api_version: String,
    pub kind: String,
    pub metadata: ManifestMetadata,
    pub spec: Blueprint,
}

/// Names roles and networks deterministically from the stack name instead of creating them.
#[derive(Debug, Clone)]
pub struct ManifestProvisioner {
    stack_name: String,
    role_names: Vec<String>,
}

impl ManifestProvisioner {
    pub fn new<S: Into<String>>(stack_name: S) -> Self {
        Self {
            stack_name: stack_name.into(),
            role_names: Vec::new(),
        }
    }

    /// The role names handed out so far, in request order.
    pub fn role_names(&self) -> &[String] {
        &self.role_names
    }
}

impl Provisioner for ManifestProvisioner {
    type Output = BlueprintManifest;

    fn create_network(&mut self, request: &NetworkRequest) -> ProvisionResult<NetworkReference> {
        Ok(NetworkReference {
            vpc_name: request.vpc_name.clone(),
            vpc_ref: format!("{}/EKSVPC", self.stack_name),
            cidr: request.cidr.clone(),
        })
    }

    fn create_role(&mut self, request: &RoleRequest) -> ProvisionResult<String> {
        let role_name = format!("{}-{}", self.stack_name, request.construct_id);
        if role_name.len() > MAX_ROLE_NAME_LEN {
            return Err(ProvisionError::new(
                Resources::Clear,
                format!(
                    "Role name '{}' is longer than {} characters",
                    role_name, MAX_ROLE_NAME_LEN
                ),
            ));
        }
        let arn = role_arn(&request.trusted_account, &role_name);
        debug!("Role '{}' will be '{}'", request.construct_id, arn);
        self.role_names.push(role_name);
        Ok(arn)
    }

    fn build(&mut self, blueprint: Blueprint) -> ProvisionResult<BlueprintManifest> {
        Ok(BlueprintManifest {
            api_version: API_VERSION.to_string(),
            kind: BLUEPRINT_KIND.to_string(),
            metadata: ManifestMetadata {
                name: blueprint.id.clone(),
                labels: btreemap! {
                    LABEL_STACK_NAME.to_string() => self.stack_name.clone(),
                    LABEL_K8S_VERSION.to_string() => blueprint.cluster_provider.version.to_string(),
                },
            },
            spec: blueprint,
        })
    }
}
