use crate::provisioner::ProvisionError;
use snafu::Snafu;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub enum Error {
    #[snafu(display("'{}' is required but was empty", field))]
    MissingField { field: &'static str },

    #[snafu(display("Unable to create network '{}': {}", vpc_name, source))]
    Network {
        vpc_name: String,
        source: ProvisionError,
    },

    #[snafu(display("Unable to create role '{}': {}", construct_id, source))]
    Role {
        construct_id: String,
        source: ProvisionError,
    },

    #[snafu(display("Unable to build blueprint '{}': {}", blueprint_id, source))]
    Build {
        blueprint_id: String,
        source: ProvisionError,
    },
}

impl Error {
    /// Whether the failed operation may have left cloud resources behind.
    pub fn resources(&self) -> Option<crate::provisioner::Resources> {
        match self {
            Error::MissingField { .. } => None,
            Error::Network { source, .. }
            | Error::Role { source, .. }
            | Error::Build { source, .. } => Some(source.resources()),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
