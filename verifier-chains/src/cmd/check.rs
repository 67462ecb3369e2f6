//! `verifier-chains check` command — verify every chain can be registered.

use verifier_chains::{BuildReport, ChainRegistry, Error, chain::table};

use super::SourceArgs;

/// Execute the `check` command.
///
/// Prints one line per chain that failed to register, then a summary.
///
/// # Errors
///
/// Returns [`Error::Check`] if any chain failed, or an error if credentials
/// cannot be loaded or the chain table is inconsistent.
#[allow(clippy::print_stdout)]
pub fn run(source: &SourceArgs) -> Result<(), Error> {
    let credentials = source.load()?;
    let report = ChainRegistry::from_credentials(&credentials)?;

    for failure in &report.failures {
        let name = table::find(failure.chain_id).map_or("", |d| d.name);
        println!("FAIL {name} ({failure})");
    }
    println!(
        "{} of {} chains registered",
        report.registry.len(),
        report.total()
    );

    verdict(&report)
}

/// Maps a build report to the command outcome; any failure is an error.
fn verdict(report: &BuildReport) -> Result<(), Error> {
    if report.is_complete() {
        Ok(())
    } else {
        Err(Error::Check {
            failed: report.failures.len(),
            total: report.total(),
        })
    }
}

#[cfg(test)]
mod tests {
    use verifier_chains::StaticCredentials;
    use verifier_chains::credentials::{ALCHEMY_ID, INFURA_ID, NODE_ADDRESS};

    use super::*;

    #[test]
    fn any_failed_chain_fails_the_check() {
        let report = ChainRegistry::from_credentials(&StaticCredentials::new()).unwrap();
        assert!(!report.is_complete());

        let err = verdict(&report).unwrap_err();
        assert!(
            matches!(
                err,
                Error::Check { failed, total }
                    if failed == report.failures.len() && total == table::ALL.len()
            ),
            "{err}"
        );
    }

    #[test]
    fn complete_registry_passes_the_check() {
        let credentials = StaticCredentials::new()
            .with(ALCHEMY_ID, "abc123")
            .with(INFURA_ID, "inf456")
            .with(NODE_ADDRESS, "http://10.0.0.5")
            .with("NODE_PORT_MAINNET", "8545")
            .with("NODE_PORT_ROPSTEN", "8546")
            .with("NODE_PORT_RINKEBY", "8547")
            .with("NODE_PORT_GOERLI", "8548")
            .with("NODE_PORT_SEPOLIA", "8549");
        let report = ChainRegistry::from_credentials(&credentials).unwrap();

        assert!(verdict(&report).is_ok());
    }
}
