//! `verifier-chains list` command — print the resolved registry as JSON.

use std::collections::BTreeMap;

use verifier_chains::{ChainId, ChainRegistry, Error};

use super::SourceArgs;

/// Execute the `list` command.
///
/// Chains that fail to resolve are logged and left out of the output.
///
/// # Errors
///
/// Returns an error if credentials cannot be loaded, the chain table is
/// inconsistent, or the requested chain is not registered.
#[allow(clippy::print_stdout)]
pub fn run(source: &SourceArgs, chain: Option<ChainId>, monitored: bool) -> Result<(), Error> {
    let credentials = source.load()?;
    let registry = ChainRegistry::from_credentials(&credentials)?.registry;

    let json = if let Some(id) = chain {
        let config = registry.get(id).ok_or(Error::UnknownChain(id))?;
        serde_json::to_string_pretty(config)
    } else if monitored {
        let chains: BTreeMap<_, _> = registry.monitored().collect();
        serde_json::to_string_pretty(&chains)
    } else {
        serde_json::to_string_pretty(&registry)
    }?;

    println!("{json}");
    Ok(())
}
