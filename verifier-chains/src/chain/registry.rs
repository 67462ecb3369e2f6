//! Chain registry construction and lookup.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use super::config::{ChainConfig, ChainDefinition, ChainId};
use super::table;
use crate::credentials::CredentialSource;
use crate::error::{ChainFailure, RegistryError};

/// Immutable map from chain ID to resolved [`ChainConfig`], ordered by ID.
///
/// Serialised as a JSON object keyed by decimal chain-ID strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChainRegistry {
    chains: BTreeMap<ChainId, ChainConfig>,
}

/// Outcome of [`ChainRegistry::build`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildReport {
    /// Chains that resolved successfully.
    pub registry: ChainRegistry,
    /// Chains that were dropped, in table order.
    pub failures: Vec<ChainFailure>,
}

impl BuildReport {
    /// Whether every definition was registered.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Number of definitions the build was attempted for.
    #[must_use]
    pub fn total(&self) -> usize {
        self.registry.len() + self.failures.len()
    }
}

impl ChainRegistry {
    /// Builds a registry from the built-in [`table::ALL`].
    ///
    /// # Errors
    ///
    /// See [`ChainRegistry::build`].
    pub fn from_credentials(
        credentials: &dyn CredentialSource,
    ) -> Result<BuildReport, RegistryError> {
        Self::build(table::ALL, credentials)
    }

    /// Resolves every definition against `credentials`.
    ///
    /// A definition that fails to resolve is left out and reported in
    /// [`BuildReport::failures`]; the rest still register.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::DuplicateChainId`] if two definitions share a
    /// chain ID. Nothing is resolved in that case.
    pub fn build(
        definitions: &[ChainDefinition],
        credentials: &dyn CredentialSource,
    ) -> Result<BuildReport, RegistryError> {
        ensure_unique(definitions)?;

        let mut chains = BTreeMap::new();
        let mut failures = Vec::new();
        for definition in definitions {
            match definition.resolve(credentials) {
                Ok(config) => {
                    tracing::debug!(
                        chain_id = %definition.id,
                        name = definition.name,
                        rpc = config.rpc_urls().len(),
                        "registered chain"
                    );
                    chains.insert(definition.id, config);
                }
                Err(error) => {
                    tracing::warn!(
                        chain_id = %definition.id,
                        name = definition.name,
                        %error,
                        "chain not registered"
                    );
                    failures.push(ChainFailure {
                        chain_id: definition.id,
                        error,
                    });
                }
            }
        }

        tracing::info!(
            registered = chains.len(),
            failed = failures.len(),
            "chain registry built"
        );
        Ok(BuildReport {
            registry: Self { chains },
            failures,
        })
    }

    /// Looks up a chain.
    #[must_use]
    pub fn get(&self, id: ChainId) -> Option<&ChainConfig> {
        self.chains.get(&id)
    }

    /// Looks up a chain by its decimal string ID; `None` if it does not parse.
    #[must_use]
    pub fn get_str(&self, id: &str) -> Option<&ChainConfig> {
        id.parse().ok().and_then(|id| self.get(id))
    }

    /// Whether the chain is registered.
    #[must_use]
    pub fn contains(&self, id: ChainId) -> bool {
        self.chains.contains_key(&id)
    }

    /// Number of registered chains.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chains.len()
    }

    /// Whether no chains are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chains.is_empty()
    }

    /// All chains in ascending ID order.
    pub fn iter(&self) -> impl Iterator<Item = (ChainId, &ChainConfig)> {
        self.chains.iter().map(|(id, config)| (*id, config))
    }

    /// Chains flagged `supported`.
    pub fn supported(&self) -> impl Iterator<Item = (ChainId, &ChainConfig)> {
        self.iter().filter(|(_, c)| c.supported)
    }

    /// Chains flagged `monitored`.
    pub fn monitored(&self) -> impl Iterator<Item = (ChainId, &ChainConfig)> {
        self.iter().filter(|(_, c)| c.monitored)
    }
}

fn ensure_unique(definitions: &[ChainDefinition]) -> Result<(), RegistryError> {
    let mut seen = BTreeSet::new();
    for definition in definitions {
        if !seen.insert(definition.id) {
            return Err(RegistryError::DuplicateChainId(definition.id));
        }
    }
    Ok(())
}
