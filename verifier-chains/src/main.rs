//! Chain registry CLI.
//!
//! Resolves the built-in chain table against the current credentials and
//! prints or checks the result.
//!
//! ```sh
//! verifier-chains init                 # Generate credentials.toml
//! verifier-chains list                 # Print the registry as JSON
//! verifier-chains list --chain 137     # Print one chain
//! verifier-chains check                # Fail if any chain cannot register
//! ```

mod cmd;
#[cfg(feature = "telemetry")]
mod telemetry;

use clap::Parser;
use cmd::{Cli, Commands};

#[allow(clippy::print_stderr)]
fn main() {
    let cli = Cli::parse();

    #[cfg(feature = "telemetry")]
    telemetry::Telemetry::new()
        .with_log_level(cli.log_level.clone())
        .register();

    let result = match cli.command {
        Commands::Init { output, force } => cmd::init::run(&output, force),
        Commands::List {
            source,
            chain,
            monitored,
        } => cmd::list::run(&source, chain, monitored),
        Commands::Check { source } => cmd::check::run(&source),
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
