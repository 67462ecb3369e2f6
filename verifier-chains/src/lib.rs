//! Chain metadata registry for smart-contract source verification.
//!
//! Maps an EIP-155 chain ID to where contract pages are fetched, which RPC
//! endpoints to query, and how to spot the creation transaction in explorer
//! HTML. The registry is built once from a [`CredentialSource`] snapshot and
//! is read-only afterwards.
//!
//! ```no_run
//! use verifier_chains::{ChainRegistry, EnvCredentials};
//!
//! let report = ChainRegistry::from_credentials(&EnvCredentials::snapshot())?;
//! for failure in &report.failures {
//!     eprintln!("{failure}");
//! }
//! let mainnet = report.registry.get_str("1");
//! # Ok::<(), verifier_chains::RegistryError>(())
//! ```

pub mod chain;
pub mod config;
pub mod credentials;
pub mod endpoint;
pub mod error;

pub use chain::{BuildReport, ChainConfig, ChainDefinition, ChainId, ChainRegistry};
pub use credentials::{CredentialSource, EnvCredentials, StaticCredentials};
pub use error::{BuildError, ChainFailure, Error, RegistryError};
