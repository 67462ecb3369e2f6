//! Chain metadata types, the built-in chain table, and registry construction.
//!
//! - [`config`] — [`ChainId`], resolved [`ChainConfig`], and literal [`ChainDefinition`]s.
//! - [`registry`] — [`ChainRegistry`] construction with per-chain failure isolation.
//! - [`table`] — the hand-maintained list of supported chains.

mod config;
mod registry;
pub mod table;

pub use self::config::*;
pub use self::registry::*;
