use crate::error::{self, Result};
use serde::de::DeserializeOwned;
use serde::Serialize;
use snafu::ResultExt;
use std::fmt::Debug;

/// The `Configuration` trait is for the "plain old data" documents that people write by hand and
/// hand to the resolver, such as `ClusterConfig`. Documents are YAML; JSON is accepted too since
/// YAML is a superset of it.
pub trait Configuration:
    Serialize + DeserializeOwned + Clone + Debug + Default + Send + Sync + Sized + 'static
{
    /// Parse the `Configuration` object from a YAML (or JSON) document.
    fn from_yaml_str(s: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(s).context(error::YamlDeserializationSnafu)?)
    }
}
