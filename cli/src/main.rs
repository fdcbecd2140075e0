/*!

This is the command line interface for resolving EKS cluster blueprints and rendering them for a
deployment tool.

!*/

mod input;
mod resolve;
mod synth;
mod versions;

use anyhow::Result;
use clap::Parser;
use env_logger::Builder;
use log::LevelFilter;

/// Resolve EKS cluster blueprints from a stack configuration file.
#[derive(Debug, Parser)]
#[clap(author, version, about)]
struct Args {
    /// Set logging verbosity [trace|debug|info|warn|error]. If the environment variable `RUST_LOG`
    /// is present, it overrides the default logging behavior. See https://docs.rs/env_logger/latest
    #[clap(long = "log-level", default_value = "info")]
    log_level: LevelFilter,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Parser)]
enum Command {
    /// Resolve a stack configuration into network, team, version and add-on descriptors.
    Resolve(resolve::Resolve),
    /// Render the blueprint manifest for a stack configuration without creating anything.
    Synth(synth::Synth),
    /// List the supported Kubernetes versions and their add-on versions.
    Versions(versions::Versions),
}

fn main() {
    let args = Args::parse();
    init_logger(args.log_level);
    if let Err(e) = run(args) {
        eprintln!("{:#}", e);
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Resolve(resolve) => resolve.run(),
        Command::Synth(synth) => synth.run(),
        Command::Versions(versions) => versions.run(),
    }
}

/// Initialize the logger with the value passed by `--log-level` (or its default) when the
/// `RUST_LOG` environment variable is not present. If present, the `RUST_LOG` environment variable
/// overrides `--log-level`/`level`.
fn init_logger(level: LevelFilter) {
    match std::env::var(env_logger::DEFAULT_FILTER_ENV).ok() {
        Some(_) => {
            // RUST_LOG exists; env_logger will use it.
            Builder::from_default_env().init();
        }
        None => {
            // RUST_LOG does not exist; use default log level for our crates only.
            Builder::new()
                .filter_level(LevelFilter::Error)
                .filter(Some(env!("CARGO_CRATE_NAME")), level)
                .filter(Some("blueprint_model"), level)
                .filter(Some("blueprint_resolver"), level)
                .init();
        }
    }
}
