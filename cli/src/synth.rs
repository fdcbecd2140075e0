use crate::input::{render, ConfigArgs};
use anyhow::{Context, Result};
use blueprint_resolver::{provision, resolve, Error, ManifestProvisioner};
use clap::{value_parser, Parser};
use log::info;
use std::fs::write;
use std::path::PathBuf;

/// Render the blueprint manifest for a stack configuration.
#[derive(Debug, Parser)]
pub(crate) struct Synth {
    #[clap(flatten)]
    config: ConfigArgs,

    /// Output the manifest in JSON format.
    #[clap(long = "json")]
    json: bool,

    /// Write the manifest to this file instead of stdout.
    #[clap(long, short = 'o', value_parser = value_parser!(PathBuf))]
    output: Option<PathBuf>,
}

impl Synth {
    pub(crate) fn run(self) -> Result<()> {
        let config = self.config.load()?;
        let resolved = resolve(&config)
            .context(format!("Unable to resolve stack '{}'", config.stack_name))?;
        let mut provisioner = ManifestProvisioner::new(&resolved.stack_name);
        let manifest = provision(&resolved, &mut provisioner).map_err(|e| {
            let context = failure_context(&resolved.blueprint_id, &e);
            anyhow::Error::new(e).context(context)
        })?;
        if !provisioner.role_names().is_empty() {
            info!("Namespace roles: {}", provisioner.role_names().join(", "));
        }
        let rendered = render(&manifest, self.json)?;
        match &self.output {
            Some(path) => {
                write(path, rendered)
                    .context(format!("Unable to write manifest to '{}'", path.display()))?;
                info!("Wrote blueprint '{}' to '{}'", manifest.metadata.name, path.display());
            }
            None => println!("{}", rendered),
        }
        Ok(())
    }
}

/// Describe a provisioning failure, including what the failed step left in the account.
fn failure_context(blueprint_id: &str, error: &Error) -> String {
    match error.resources() {
        Some(resources) => format!("Unable to synthesize '{}', {}", blueprint_id, resources),
        None => format!("Unable to synthesize '{}'", blueprint_id),
    }
}

#[cfg(test)]
mod test {
    use super::failure_context;
    use blueprint_resolver::provisioner::{ProvisionError, Resources};
    use blueprint_resolver::Error;

    #[test]
    fn context_reports_resources() {
        let error = Error::Role {
            construct_id: "NSRoleteam-a".into(),
            source: ProvisionError::new(Resources::Remaining, "Throttled"),
        };
        assert_eq!(
            failure_context("dev-eks", &error),
            "Unable to synthesize 'dev-eks', the failed step left resources behind"
        );
    }

    #[test]
    fn context_without_provisioning() {
        let error = Error::MissingField { field: "account" };
        assert_eq!(failure_context("dev-eks", &error), "Unable to synthesize 'dev-eks'");
    }
}
