//! Credential sources consulted while building the chain registry.
//!
//! Registry construction never reads the process environment directly.
//! Callers take a snapshot ([`EnvCredentials::snapshot`]) or assemble a
//! [`StaticCredentials`] map and pass it in as a [`CredentialSource`].
//!
//! # Recognised keys
//!
//! | Key | Used by |
//! |-----|---------|
//! | `ALCHEMY_ID` | managed Alchemy endpoints |
//! | `INFURA_ID` | Infura URL templates |
//! | `NODE_ADDRESS` | operator-run node base address (with scheme) |
//! | `NODE_PORT_<NODE>` | per-node port, `<NODE>` upper-cased |

use std::collections::BTreeMap;
use std::ffi::OsString;

use crate::error::BuildError;

/// Shared Alchemy API identifier.
pub const ALCHEMY_ID: &str = "ALCHEMY_ID";

/// Shared Infura project identifier.
pub const INFURA_ID: &str = "INFURA_ID";

/// Base address of the operator-run node, e.g. `http://10.0.0.5`.
pub const NODE_ADDRESS: &str = "NODE_ADDRESS";

/// Key holding the operator node port for the given node name.
#[must_use]
pub fn node_port_key(node: &str) -> String {
    format!("NODE_PORT_{}", node.to_uppercase())
}

/// Read-only key/value lookup for provider secrets and node addresses.
pub trait CredentialSource {
    /// Returns the raw value for `key`, if present.
    fn get(&self, key: &str) -> Option<&str>;

    /// Returns the trimmed value for `key`, treating blank values as absent.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::MissingCredential`] if the key is absent or blank.
    fn require(&self, key: &str) -> Result<&str, BuildError> {
        self.get(key)
            .map(str::trim)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BuildError::missing(key))
    }
}

/// In-memory credential map.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StaticCredentials(BTreeMap<String, String>);

impl StaticCredentials {
    /// Creates an empty credential map.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a key, returning the updated map.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts or replaces a key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Removes a key, returning the previous value.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Number of keys held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the map holds no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl CredentialSource for StaticCredentials {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StaticCredentials {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl IntoIterator for StaticCredentials {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<K: Into<String>, V: Into<String>> Extend<(K, V)> for StaticCredentials {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (k, v) in iter {
            self.insert(k, v);
        }
    }
}

/// Snapshot of the process environment.
///
/// Taken once, after `.env` loading, so later changes to the environment
/// do not leak into an already-built registry.
#[derive(Debug, Clone, Default)]
pub struct EnvCredentials(StaticCredentials);

impl EnvCredentials {
    /// Captures every valid UTF-8 environment variable.
    ///
    /// Variables whose name or value is not valid UTF-8 are skipped.
    #[must_use]
    pub fn snapshot() -> Self {
        Self::from_os_vars(std::env::vars_os())
    }

    fn from_os_vars(vars: impl IntoIterator<Item = (OsString, OsString)>) -> Self {
        Self(
            vars.into_iter()
                .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
                .collect(),
        )
    }
}

impl CredentialSource for EnvCredentials {
    fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key)
    }
}

impl From<EnvCredentials> for StaticCredentials {
    fn from(env: EnvCredentials) -> Self {
        env.0
    }
}
