//! CLI definitions and command implementations for the chain registry.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use verifier_chains::config::load_config;
use verifier_chains::{ChainId, EnvCredentials, Error, StaticCredentials};

pub mod check;
pub mod init;
pub mod list;

/// Chain registry for smart-contract source verification.
#[derive(Debug, Parser)]
#[command(name = "verifier-chains")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Log filter used when `RUST_LOG` is not set.
    #[arg(long, global = true, default_value = "warn")]
    pub log_level: String,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Generate a credentials file template.
    Init {
        /// Output path for the credentials file.
        #[arg(short, long, default_value = "credentials.toml")]
        output: PathBuf,

        /// Overwrite the file if it already exists.
        #[arg(long, default_value_t = false)]
        force: bool,
    },

    /// Print the resolved registry as JSON.
    List {
        #[command(flatten)]
        source: SourceArgs,

        /// Print only this chain.
        #[arg(long)]
        chain: Option<ChainId>,

        /// Print only monitored chains.
        #[arg(long, default_value_t = false)]
        monitored: bool,
    },

    /// Build the registry and fail if any chain cannot be registered.
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

/// Where credentials are read from.
#[derive(Debug, Args)]
pub struct SourceArgs {
    /// TOML credentials file; its entries override the environment.
    #[arg(short, long, env = "CREDENTIALS")]
    pub credentials: Option<PathBuf>,

    /// Dotenv file to load instead of `./.env`.
    #[arg(long)]
    pub env_file: Option<PathBuf>,
}

impl SourceArgs {
    /// Loads the env file, snapshots the environment, and applies the
    /// credentials file on top.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit env file or the credentials file
    /// cannot be loaded, or a reference in it is unresolved.
    pub fn load(&self) -> Result<StaticCredentials, Error> {
        match &self.env_file {
            Some(path) => load_env_file(path)?,
            None => {
                dotenvy::dotenv().ok();
            }
        }
        let env = StaticCredentials::from(EnvCredentials::snapshot());

        match &self.credentials {
            Some(path) => {
                let file = load_config(path)?;
                tracing::debug!(
                    keys = file.credentials.len(),
                    path = %path.display(),
                    "applying credentials file"
                );
                file.apply(env)
            }
            None => Ok(env),
        }
    }
}

fn load_env_file(path: &Path) -> Result<(), Error> {
    dotenvy::from_path(path)
        .map_err(|e| Error::config_with(format!("failed to load '{}'", path.display()), e))
}
