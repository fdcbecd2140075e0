use crate::input::{render, ConfigArgs};
use anyhow::{Context, Result};
use clap::Parser;

/// Resolve a stack configuration and print the result.
#[derive(Debug, Parser)]
pub(crate) struct Resolve {
    #[clap(flatten)]
    config: ConfigArgs,

    /// Output the results in JSON format.
    #[clap(long = "json")]
    json: bool,
}

impl Resolve {
    pub(crate) fn run(self) -> Result<()> {
        let config = self.config.load()?;
        let resolved = blueprint_resolver::resolve(&config)
            .context(format!("Unable to resolve stack '{}'", config.stack_name))?;
        println!("{}", render(&resolved, self.json)?);
        Ok(())
    }
}
