use snafu::Snafu;

#[derive(Debug, Snafu)]
pub struct Error(OpaqueError);
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub(crate)))]
pub(crate) enum OpaqueError {
    #[snafu(display("Unable to parse YAML document: {}", source))]
    YamlDeserialization { source: serde_yaml::Error },

    #[snafu(display("Unable to parse '{}' as a k8s version: {}", input, reason))]
    K8sVersionParse { input: String, reason: String },
}
