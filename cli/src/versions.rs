use crate::input::render;
use anyhow::Result;
use blueprint_model::constants::DEFAULT_K8S_VERSION;
use blueprint_model::VersionProfile;
use clap::Parser;
use serde::Serialize;

/// List the supported Kubernetes versions.
#[derive(Debug, Parser)]
pub(crate) struct Versions {
    /// Output the results in JSON format.
    #[clap(long = "json")]
    json: bool,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SupportedVersion<'a> {
    version: &'a str,
    default: bool,
    #[serde(flatten)]
    profile: &'a VersionProfile,
}

impl Versions {
    pub(crate) fn run(self) -> Result<()> {
        let versions: Vec<SupportedVersion<'_>> = VersionProfile::supported()
            .map(|(version, profile)| SupportedVersion {
                version,
                default: version == DEFAULT_K8S_VERSION,
                profile,
            })
            .collect();
        if self.json {
            println!("{}", render(&versions, true)?);
        } else {
            for v in &versions {
                println!(
                    "{}{}\tcoredns {}\tvpc-cni {}",
                    v.version,
                    if v.default { " (default)" } else { "" },
                    v.profile.core_dns,
                    v.profile.vpc_cni
                );
            }
        }
        Ok(())
    }
}
