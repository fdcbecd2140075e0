use blueprint_model::{NetworkRequest, RoleRequest};
use blueprint_resolver::provisioner::{
    Blueprint, IntoProvisionError, NetworkReference, ProvisionResult, Resources,
};
use blueprint_resolver::Provisioner;

/// A provisioner call, recorded in the order it was made.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Call {
    Network(String),
    Role(String),
    Build(String),
}

/// Records every call and fails the first call that matches `fail_on`.
#[derive(Debug, Default)]
pub struct MockProvisioner {
    pub calls: Vec<Call>,
    pub fail_on: Option<Call>,
}

impl MockProvisioner {
    pub fn failing_on(call: Call) -> Self {
        Self {
            calls: Vec::new(),
            fail_on: Some(call),
        }
    }

    fn record(&mut self, call: Call) -> ProvisionResult<()> {
        let failed = self.fail_on.as_ref() == Some(&call);
        self.calls.push(call);
        if failed {
            Err(std::io::Error::new(std::io::ErrorKind::Other, "mock failure"))
                .context(Resources::Remaining, "The mock provisioner was told to fail")
        } else {
            Ok(())
        }
    }
}

impl Provisioner for MockProvisioner {
    type Output = Blueprint;

    fn create_network(&mut self, request: &NetworkRequest) -> ProvisionResult<NetworkReference> {
        self.record(Call::Network(request.vpc_name.clone()))?;
        Ok(NetworkReference {
            vpc_name: request.vpc_name.clone(),
            vpc_ref: "vpc-mock".to_string(),
            cidr: request.cidr.clone(),
        })
    }

    fn create_role(&mut self, request: &RoleRequest) -> ProvisionResult<String> {
        self.record(Call::Role(request.construct_id.clone()))?;
        Ok(format!("arn:mock:{}", request.construct_id))
    }

    fn build(&mut self, blueprint: Blueprint) -> ProvisionResult<Blueprint> {
        self.record(Call::Build(blueprint.id.clone()))?;
        Ok(blueprint)
    }
}
