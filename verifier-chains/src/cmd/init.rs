//! `verifier-chains init` command — write the credentials file template.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::Path;

use verifier_chains::Error;
use verifier_chains::config::generate_default_config;

/// Execute the `init` command.
///
/// Writes the credentials template to `output`. Without `force`, an
/// existing file is left untouched.
///
/// # Errors
///
/// Returns an error if the file already exists (without `--force`) or if
/// creating or writing it fails.
#[allow(clippy::print_stderr)]
pub fn run(output: &Path, force: bool) -> Result<(), Error> {
    write_template(output, force)?;
    eprintln!("Credentials template written to {}", output.display());
    Ok(())
}

fn write_template(output: &Path, force: bool) -> Result<(), Error> {
    let mut options = OpenOptions::new();
    options.write(true);
    if force {
        options.create(true).truncate(true);
    } else {
        options.create_new(true);
    }

    let mut file = options.open(output).map_err(|e| match e.kind() {
        ErrorKind::AlreadyExists => Error::config(format!(
            "'{}' already exists, use --force to overwrite",
            output.display()
        )),
        _ => Error::config_with(format!("failed to create '{}'", output.display()), e),
    })?;
    file.write_all(generate_default_config().as_bytes())
        .map_err(|e| Error::config_with(format!("failed to write '{}'", output.display()), e))
}
