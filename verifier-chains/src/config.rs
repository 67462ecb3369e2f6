//! Credentials file loading and default template generation.
//!
//! This module provides:
//!
//! - [`CredentialsFile`] — the `[credentials]` table of a TOML file.
//! - [`load_config`] — reads and parses a credentials file.
//! - [`generate_default_config`] — produces a commented TOML template.
//!
//! # File Format
//!
//! ```toml
//! [credentials]
//! ALCHEMY_ID = "$ALCHEMY_ID"
//! NODE_ADDRESS = "http://10.0.0.5"
//! NODE_PORT_MAINNET = "${MAINNET_PORT}"
//! ```
//!
//! Values are literals or environment references (`$VAR` / `${VAR}`),
//! resolved against the environment snapshot when the file is applied.

use std::collections::BTreeMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::credentials::{CredentialSource, StaticCredentials};
use crate::error::Error;

/// Parsed credentials file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CredentialsFile {
    /// Credential keys and their literal or referenced values.
    #[serde(default)]
    pub credentials: BTreeMap<String, String>,
}

impl CredentialsFile {
    /// Resolves every value against `env`.
    ///
    /// # Errors
    ///
    /// Returns an error if a `$VAR` / `${VAR}` reference is not set in `env`.
    pub fn resolve(&self, env: &dyn CredentialSource) -> Result<StaticCredentials, Error> {
        self.credentials
            .iter()
            .map(|(key, raw)| Ok::<_, Error>((key.clone(), resolve_env(raw, env)?)))
            .collect()
    }

    /// Resolves this file against `env` and lays the result over it.
    ///
    /// Entries in the file win over environment variables of the same name.
    ///
    /// # Errors
    ///
    /// See [`CredentialsFile::resolve`].
    pub fn apply(&self, env: StaticCredentials) -> Result<StaticCredentials, Error> {
        let overrides = self.resolve(&env)?;
        let mut merged = env;
        merged.extend(overrides);
        Ok(merged)
    }
}

/// Resolve an environment-variable reference (`$VAR` or `${VAR}`), returning
/// the literal string unchanged if it does not match either pattern.
fn resolve_env(value: &str, env: &dyn CredentialSource) -> Result<String, Error> {
    let lookup = |var_name: &str| {
        env.get(var_name).map(str::to_owned).ok_or_else(|| {
            Error::config(format!(
                "env var '{var_name}' not found (referenced as '{value}')"
            ))
        })
    };
    // ${VAR} syntax
    if let Some(var_name) = value.strip_prefix("${").and_then(|v| v.strip_suffix('}')) {
        return lookup(var_name);
    }
    // $VAR syntax
    if let Some(var_name) = value.strip_prefix('$')
        && !var_name.is_empty()
        && var_name.chars().all(|c| c.is_alphanumeric() || c == '_')
    {
        return lookup(var_name);
    }
    Ok(value.to_owned())
}

/// Load a credentials file from the given path.
///
/// # Errors
///
/// Returns an error if the file cannot be resolved, read, or parsed.
pub fn load_config(path: &Path) -> Result<CredentialsFile, Error> {
    let config_path = path.canonicalize().map_err(|e| {
        Error::config_with(format!("failed to resolve '{}'", path.display()), e)
    })?;
    let content = std::fs::read_to_string(&config_path).map_err(|e| {
        Error::config_with(format!("failed to read '{}'", config_path.display()), e)
    })?;
    toml::from_str(&content).map_err(|e| {
        Error::config_with(
            format!("failed to parse TOML '{}'", config_path.display()),
            e,
        )
    })
}

/// Generate a default credentials file template.
#[must_use]
pub fn generate_default_config() -> String {
    String::from(
        r#"# verifier-chains credentials
#
# Values are literals or environment references: "$VAR" or "${VAR}".
# Entries here override variables of the same name in the environment.

[credentials]
# Managed Alchemy endpoints (Ethereum, Polygon, Arbitrum, Optimism).
ALCHEMY_ID = "$ALCHEMY_ID"

# Infura endpoints (Palm).
INFURA_ID = "$INFURA_ID"

# Operator-run nodes, listed ahead of managed endpoints.
# NODE_ADDRESS must include the scheme; ports are keyed by network name.
# NODE_ADDRESS = "http://10.0.0.5"
# NODE_PORT_MAINNET = "8545"
# NODE_PORT_ROPSTEN = "8546"
# NODE_PORT_RINKEBY = "8547"
# NODE_PORT_GOERLI = "8548"
# NODE_PORT_SEPOLIA = "8549"
"#,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env() -> StaticCredentials {
        StaticCredentials::new()
            .with("ALCHEMY_ID", "abc123")
            .with("MAINNET_PORT", "8545")
    }

    #[test]
    fn resolves_both_reference_forms_and_literals() {
        let env = env();
        assert_eq!(resolve_env("$ALCHEMY_ID", &env).unwrap(), "abc123");
        assert_eq!(resolve_env("${MAINNET_PORT}", &env).unwrap(), "8545");
        assert_eq!(
            resolve_env("http://10.0.0.5", &env).unwrap(),
            "http://10.0.0.5"
        );
        assert_eq!(resolve_env("$", &env).unwrap(), "$");
        assert_eq!(resolve_env("$not-a-var", &env).unwrap(), "$not-a-var");
    }

    #[test]
    fn unresolved_reference_is_an_error() {
        let err = resolve_env("${INFURA_ID}", &env()).unwrap_err();
        assert!(err.to_string().contains("INFURA_ID"));
    }

    #[test]
    fn parses_and_resolves_credentials_table() {
        let file: CredentialsFile = toml::from_str(
            r#"
[credentials]
ALCHEMY_ID = "$ALCHEMY_ID"
NODE_ADDRESS = "http://10.0.0.5"
NODE_PORT_MAINNET = "${MAINNET_PORT}"
"#,
        )
        .unwrap();

        let creds = file.resolve(&env()).unwrap();
        assert_eq!(creds.get("ALCHEMY_ID"), Some("abc123"));
        assert_eq!(creds.get("NODE_ADDRESS"), Some("http://10.0.0.5"));
        assert_eq!(creds.get("NODE_PORT_MAINNET"), Some("8545"));
    }

    #[test]
    fn file_entries_override_the_environment() {
        let env = env()
            .with("NODE_ADDRESS", "http://127.0.0.1")
            .with("INFURA_ID", "from-env");
        let file: CredentialsFile = toml::from_str(
            r#"
[credentials]
NODE_ADDRESS = "http://10.0.0.5"
ALCHEMY_ID = "${INFURA_ID}"
"#,
        )
        .unwrap();

        let merged = file.apply(env).unwrap();
        assert_eq!(merged.get("NODE_ADDRESS"), Some("http://10.0.0.5"));
        // References resolve against the environment, not the file.
        assert_eq!(merged.get("ALCHEMY_ID"), Some("from-env"));
        assert_eq!(merged.get("INFURA_ID"), Some("from-env"));
        assert_eq!(merged.get("MAINNET_PORT"), Some("8545"));
    }

    #[test]
    fn apply_fails_on_unresolved_reference() {
        let file = CredentialsFile {
            credentials: [("ALCHEMY_ID".to_owned(), "$UNSET_ALCHEMY".to_owned())].into(),
        };
        assert!(matches!(file.apply(env()), Err(Error::Config(_))));
    }

    #[test]
    fn default_template_parses() {
        let file: CredentialsFile = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(
            file.credentials.keys().collect::<Vec<_>>(),
            ["ALCHEMY_ID", "INFURA_ID"]
        );
    }
}
