use anyhow::{Context, Result};
use blueprint_model::{AddOnKind, ClusterConfig, Configuration};
use clap::{value_parser, Parser};
use log::debug;
use serde::Serialize;
use std::fs::read_to_string;
use std::path::PathBuf;

/// Where to read the stack configuration from, plus values that override it.
#[derive(Debug, Parser)]
pub(crate) struct ConfigArgs {
    /// Path to the stack configuration YAML (or JSON) file.
    #[clap(value_parser = value_parser!(PathBuf))]
    path: PathBuf,

    /// The AWS account to deploy to. Overrides `account` in the file.
    #[clap(long, env = "AWS_ACCOUNT_ID")]
    account: Option<String>,

    /// The AWS region to deploy to. Overrides `region` in the file.
    #[clap(long, env = "AWS_REGION")]
    region: Option<String>,

    /// Turn on an optional add-on in addition to those enabled in the file, e.g.
    /// `--enable certManager`. May be repeated.
    #[clap(long = "enable", value_name = "ADD_ON")]
    enable: Vec<AddOnKind>,
}

impl ConfigArgs {
    pub(crate) fn load(&self) -> Result<ClusterConfig> {
        let contents = read_to_string(&self.path)
            .context(format!("Unable to read '{}'", self.path.display()))?;
        let mut config = ClusterConfig::from_yaml_str(&contents).context(format!(
            "Unable to parse stack configuration '{}'",
            self.path.display()
        ))?;
        if let Some(account) = &self.account {
            debug!("Using account '{}' from the command line", account);
            config.account = account.clone();
        }
        if let Some(region) = &self.region {
            debug!("Using region '{}' from the command line", region);
            config.region = region.clone();
        }
        for kind in &self.enable {
            debug!("Enabling add-on '{}' from the command line", kind);
            config.add_ons.enable(*kind);
        }
        Ok(config)
    }
}

/// Render `value` as pretty JSON or YAML.
pub(crate) fn render<T: Serialize>(value: &T, json: bool) -> Result<String> {
    if json {
        serde_json::to_string_pretty(value).context("Could not create JSON string")
    } else {
        serde_yaml::to_string(value).context("Could not create YAML string")
    }
}
