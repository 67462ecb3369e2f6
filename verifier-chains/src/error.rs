//! Unified error types for the chain registry.
//!
//! - [`BuildError`] — a single endpoint, template, or pattern failed to resolve.
//! - [`ChainFailure`] — a [`BuildError`] tagged with the chain it belongs to.
//! - [`RegistryError`] — the chain table itself is inconsistent.
//! - [`Error`] — top-level error returned by the CLI commands.

use thiserror::Error;

use crate::chain::ChainId;

/// Failure while resolving one endpoint, template, or pattern for a chain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A required key was absent (or blank) in the credential source.
    #[error("missing credential '{key}'")]
    MissingCredential {
        /// The credential key that was looked up.
        key: String,
    },

    /// A template did not contain its placeholder exactly once.
    #[error("template '{template}' must contain '{placeholder}' exactly once")]
    MalformedTemplate {
        /// The offending template.
        template: String,
        /// The placeholder token that was expected.
        placeholder: &'static str,
    },

    /// A produced endpoint is not a usable URL.
    #[error("invalid URL '{url}': {reason}")]
    InvalidUrl {
        /// The endpoint string that failed to parse.
        url: String,
        /// Parser or scheme check message.
        reason: String,
    },

    /// A transaction regex failed to compile or has the wrong group count.
    #[error("invalid tx regex '{pattern}': {reason}")]
    InvalidRegex {
        /// The regex source string.
        pattern: String,
        /// Compiler message or group-count mismatch.
        reason: String,
    },
}

impl BuildError {
    pub(crate) fn missing(key: impl Into<String>) -> Self {
        Self::MissingCredential { key: key.into() }
    }
}

/// A chain that could not be registered, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("chain {chain_id}: {error}")]
pub struct ChainFailure {
    /// The chain whose entry was dropped.
    pub chain_id: ChainId,
    /// Why it was dropped.
    pub error: BuildError,
}

/// Fatal inconsistency in the chain table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Two definitions share the same chain ID.
    #[error("duplicate chain id {0} in chain table")]
    DuplicateChainId(ChainId),
}

/// Top-level error type for the `verifier-chains` binary.
#[derive(Debug, Error)]
pub enum Error {
    /// Credentials file or env file could not be resolved, read, or parsed.
    #[error("config: {0}")]
    Config(String),

    /// Command output could not be serialised.
    #[error("output: {0}")]
    Output(#[from] serde_json::Error),

    /// The chain table is inconsistent.
    #[error("registry: {0}")]
    Registry(#[from] RegistryError),

    /// A requested chain is not present in the registry.
    #[error("chain {0} is not registered")]
    UnknownChain(ChainId),

    /// One or more chains failed to register.
    #[error("{failed} of {total} chains failed to register")]
    Check {
        /// Number of chains that failed.
        failed: usize,
        /// Number of chains in the table.
        total: usize,
    },
}

impl Error {
    /// Configuration error with a plain message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Configuration error wrapping an underlying cause.
    pub fn config_with(msg: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Config(format!("{}: {err}", msg.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serialisation_failure_is_an_output_error() {
        let err: Error = serde_json::from_str::<u8>("x").unwrap_err().into();
        assert!(matches!(err, Error::Output(_)));
        assert!(err.to_string().starts_with("output: "), "{err}");
    }

    #[test]
    fn chain_failure_names_the_chain() {
        let failure = ChainFailure {
            chain_id: ChainId::new(137),
            error: BuildError::missing("ALCHEMY_ID"),
        };
        assert_eq!(
            failure.to_string(),
            "chain 137: missing credential 'ALCHEMY_ID'"
        );
    }
}
