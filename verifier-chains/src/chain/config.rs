//! Chain identifiers, resolved chain metadata, and literal chain definitions.

use std::fmt;
use std::str::FromStr;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::credentials::CredentialSource;
use crate::endpoint::{
    self, ADDRESS_PLACEHOLDER, BLOCKSCOUT_SUFFIX, ETHERSCAN_SUFFIX, ETHERSCAN_TX_REGEX,
    METER_SUFFIX, ProviderFamily, TELOS_SUFFIX,
};
use crate::error::BuildError;

/// Numeric EIP-155 chain identifier.
///
/// Displayed and serialised as its decimal string, e.g. `"137"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChainId(u64);

impl ChainId {
    /// Wraps a numeric chain ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the numeric chain ID.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for ChainId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl fmt::Display for ChainId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Error returned when a string is not a decimal, non-negative chain ID.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid chain id '{0}': expected a non-negative decimal integer")]
pub struct ParseChainIdError(String);

impl FromStr for ChainId {
    type Err = ParseChainIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseChainIdError(s.to_owned()));
        }
        s.parse::<u64>()
            .map(Self)
            .map_err(|_| ParseChainIdError(s.to_owned()))
    }
}

impl Serialize for ChainId {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ChainId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        use serde::de::Visitor;

        struct ChainIdVisitor;

        impl Visitor<'_> for ChainIdVisitor {
            type Value = ChainId;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a chain id as a decimal string or unsigned integer")
            }

            fn visit_u64<E>(self, v: u64) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                Ok(ChainId(v))
            }

            fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
            where
                E: serde::de::Error,
            {
                v.parse().map_err(E::custom)
            }
        }

        deserializer.deserialize_any(ChainIdVisitor)
    }
}

/// Verification metadata for one chain, as served to consumers.
///
/// `tx_regex` stays a source string so it survives JSON round-trips; use
/// [`ChainConfig::compile_tx_regex`] at the point of use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    /// Chain is known to the verifier.
    pub supported: bool,
    /// Chain is watched by the deployment monitor.
    pub monitored: bool,
    /// Explorer contract page with an `${ADDRESS}` placeholder.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contract_fetch_address: Option<String>,
    /// GraphQL indexer endpoint, for chains without an HTML explorer.
    #[serde(
        rename = "graphQLFetchAddress",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub graphql_fetch_address: Option<String>,
    /// RPC endpoints, most preferred first.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rpc: Option<Vec<String>>,
    /// Regex source with one capture group yielding the creation tx hash.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tx_regex: Option<String>,
}

impl ChainConfig {
    /// RPC endpoints in preference order; empty when none are configured.
    #[must_use]
    pub fn rpc_urls(&self) -> &[String] {
        self.rpc.as_deref().unwrap_or_default()
    }

    /// Explorer contract page for `address`.
    #[must_use]
    pub fn contract_fetch_url(&self, address: &str) -> Option<String> {
        self.contract_fetch_address
            .as_deref()
            .map(|template| template.replace(ADDRESS_PLACEHOLDER, address))
    }

    /// Compiles `tx_regex`, if set.
    #[must_use]
    pub fn compile_tx_regex(&self) -> Option<Result<Regex, regex::Error>> {
        self.tx_regex.as_deref().map(Regex::new)
    }
}

/// Where contract pages for a chain are fetched from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    /// Etherscan-family explorer base URL.
    Etherscan(&'static str),
    /// Blockscout explorer base URL.
    Blockscout(&'static str),
    /// Telos EVM API base URL.
    Telos(&'static str),
    /// Meter API base URL.
    Meter(&'static str),
    /// GraphQL indexer endpoint.
    GraphQl(&'static str),
}

/// Resolved fetch endpoints: `(contract_fetch_address, graphql_fetch_address)`.
type FetchAddresses = (Option<String>, Option<String>);

impl FetchSource {
    fn resolve(self) -> Result<FetchAddresses, BuildError> {
        let page = |base: &str, suffix: &str| -> Result<FetchAddresses, BuildError> {
            endpoint::explorer_fetch_url(base, suffix).map(|u| (Some(u), None))
        };
        match self {
            Self::Etherscan(base) => page(base, ETHERSCAN_SUFFIX),
            Self::Blockscout(base) => page(base, BLOCKSCOUT_SUFFIX),
            Self::Telos(base) => page(base, TELOS_SUFFIX),
            Self::Meter(base) => page(base, METER_SUFFIX),
            Self::GraphQl(url) => {
                endpoint::validate_url(url)?;
                Ok((None, Some(url.to_owned())))
            }
        }
    }
}

/// Preference tier of an RPC endpoint; lower tiers are tried first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RpcTier {
    /// Operator-run node.
    Private,
    /// Managed provider with an API key.
    Managed,
    /// Keyless public endpoint.
    Public,
}

/// One RPC endpoint of a chain, before credential resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RpcSource {
    /// Operator-run node at `NODE_ADDRESS:NODE_PORT_<NODE>`.
    PrivateNode {
        /// Node name used for the port lookup.
        node: &'static str,
    },
    /// Managed Alchemy endpoint.
    Alchemy {
        /// Network name in the endpoint subdomain.
        network: &'static str,
        /// Chain group selecting subdomain prefix and domain.
        family: ProviderFamily,
    },
    /// Infura URL template containing `{INFURA_API_KEY}`.
    Infura {
        /// The template.
        template: &'static str,
    },
    /// Public endpoint, used as-is.
    Public(&'static str),
}

impl RpcSource {
    /// Preference tier of this source.
    #[must_use]
    pub const fn tier(self) -> RpcTier {
        match self {
            Self::PrivateNode { .. } => RpcTier::Private,
            Self::Alchemy { .. } | Self::Infura { .. } => RpcTier::Managed,
            Self::Public(_) => RpcTier::Public,
        }
    }

    /// Resolves and validates the endpoint URL.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if a credential is missing, a template is
    /// malformed, or the result is not a valid URL.
    pub fn resolve(self, credentials: &dyn CredentialSource) -> Result<String, BuildError> {
        let url = match self {
            Self::PrivateNode { node } => endpoint::private_node_url(node, credentials)?,
            Self::Alchemy { network, family } => {
                endpoint::alchemy_url(network, family, false, credentials)?
            }
            Self::Infura { template } => endpoint::infura_url(template, credentials)?,
            Self::Public(url) => url.to_owned(),
        };
        endpoint::validate_url(&url)?;
        Ok(url)
    }
}

/// Transaction-link pattern family of a chain's explorer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TxPattern {
    /// Etherscan-family "at txn" link.
    Etherscan,
    /// Blockscout `transaction_hash_link`, under an optional path prefix.
    Blockscout {
        /// Explorer path prefix, e.g. `/xdai/mainnet`; empty for root.
        prefix: &'static str,
    },
}

impl TxPattern {
    /// Regex source for this family, checked to compile with one group.
    ///
    /// # Errors
    ///
    /// Returns a [`BuildError`] if the template is malformed or the result
    /// is not a one-group regex.
    pub fn source(self) -> Result<String, BuildError> {
        let source = match self {
            Self::Etherscan => ETHERSCAN_TX_REGEX.to_owned(),
            Self::Blockscout { prefix } => endpoint::blockscout_tx_regex(prefix)?,
        };
        endpoint::validate_tx_regex(&source)?;
        Ok(source)
    }
}

/// Literal, hand-maintained description of one chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainDefinition {
    /// EIP-155 chain ID.
    pub id: ChainId,
    /// Human-readable name, for logs and CLI output.
    pub name: &'static str,
    /// Chain is known to the verifier.
    pub supported: bool,
    /// Chain is watched by the deployment monitor.
    pub monitored: bool,
    /// Contract page or indexer source.
    pub fetch: Option<FetchSource>,
    /// RPC sources; reordered by [`RpcTier`] on resolution.
    pub rpc: &'static [RpcSource],
    /// Transaction-link pattern family.
    pub tx: Option<TxPattern>,
}

impl ChainDefinition {
    /// Resolves every endpoint of this chain against `credentials`.
    ///
    /// RPC sources are emitted in [`RpcTier`] order; sources within a tier
    /// keep their table order.
    ///
    /// # Errors
    ///
    /// Returns the first [`BuildError`] hit; no partial entry is produced.
    pub fn resolve(&self, credentials: &dyn CredentialSource) -> Result<ChainConfig, BuildError> {
        let (contract_fetch_address, graphql_fetch_address) =
            self.fetch.map(FetchSource::resolve).transpose()?.unwrap_or_default();

        let rpc = if self.rpc.is_empty() {
            None
        } else {
            let mut sources = self.rpc.to_vec();
            sources.sort_by_key(|s| s.tier());
            let urls = sources
                .into_iter()
                .map(|s| s.resolve(credentials))
                .collect::<Result<Vec<_>, _>>()?;
            Some(urls)
        };

        let tx_regex = self.tx.map(TxPattern::source).transpose()?;

        Ok(ChainConfig {
            supported: self.supported,
            monitored: self.monitored,
            contract_fetch_address,
            graphql_fetch_address,
            rpc,
            tx_regex,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::{ALCHEMY_ID, NODE_ADDRESS, StaticCredentials};

    const MAINNET: ChainDefinition = ChainDefinition {
        id: ChainId::new(1),
        name: "Ethereum Mainnet",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://etherscan.io/")),
        rpc: &[
            RpcSource::Public("https://cloudflare-eth.com"),
            RpcSource::Alchemy {
                network: "mainnet",
                family: ProviderFamily::Eth,
            },
            RpcSource::PrivateNode { node: "mainnet" },
        ],
        tx: Some(TxPattern::Etherscan),
    };

    fn creds() -> StaticCredentials {
        StaticCredentials::new()
            .with(ALCHEMY_ID, "abc123")
            .with(NODE_ADDRESS, "http://10.0.0.5")
            .with("NODE_PORT_MAINNET", "8545")
    }

    #[test]
    fn chain_id_parses_decimal_only() {
        assert_eq!("137".parse::<ChainId>(), Ok(ChainId::new(137)));
        assert_eq!(
            "11297108109".parse::<ChainId>(),
            Ok(ChainId::new(11_297_108_109))
        );
        assert!("".parse::<ChainId>().is_err());
        assert!("-1".parse::<ChainId>().is_err());
        assert!("+1".parse::<ChainId>().is_err());
        assert!("0x89".parse::<ChainId>().is_err());
        assert!("99999999999999999999999".parse::<ChainId>().is_err());
    }

    #[test]
    fn chain_id_serialises_as_string() {
        assert_eq!(serde_json::to_string(&ChainId::new(56)).unwrap(), r#""56""#);
        assert_eq!(
            serde_json::from_str::<ChainId>(r#""56""#).unwrap(),
            ChainId::new(56)
        );
        assert_eq!(serde_json::from_str::<ChainId>("56").unwrap(), ChainId::new(56));
    }

    #[test]
    fn resolve_orders_rpc_by_tier() {
        let config = MAINNET.resolve(&creds()).unwrap();
        assert_eq!(
            config.rpc_urls(),
            [
                "http://10.0.0.5:8545",
                "https://eth-mainnet.alchemyapi.io/v2/abc123",
                "https://cloudflare-eth.com",
            ]
        );
        assert_eq!(
            config.contract_fetch_address.as_deref(),
            Some("https://etherscan.io/address/${ADDRESS}")
        );
        assert_eq!(config.tx_regex.as_deref(), Some(ETHERSCAN_TX_REGEX));
    }

    #[test]
    fn resolve_fails_whole_chain_on_missing_credential() {
        let mut creds = creds();
        creds.remove(NODE_ADDRESS);
        let err = MAINNET.resolve(&creds).unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingCredential {
                key: NODE_ADDRESS.to_owned()
            }
        );
    }

    #[test]
    fn node_address_with_path_fails_the_chain() {
        let creds = creds().with(NODE_ADDRESS, "http://10.0.0.5/rpc");
        let err = RpcSource::PrivateNode { node: "mainnet" }
            .resolve(&creds)
            .unwrap_err();
        assert!(matches!(err, BuildError::InvalidUrl { .. }), "{err}");
        assert!(matches!(
            MAINNET.resolve(&creds),
            Err(BuildError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn definition_without_endpoints_resolves_without_credentials() {
        let moonbeam = ChainDefinition {
            id: ChainId::new(1284),
            name: "Moonbeam",
            supported: true,
            monitored: false,
            fetch: None,
            rpc: &[],
            tx: None,
        };
        let config = moonbeam.resolve(&StaticCredentials::new()).unwrap();
        assert_eq!(config.rpc, None);
        assert!(config.rpc_urls().is_empty());
        assert_eq!(config.contract_fetch_address, None);
        assert_eq!(config.tx_regex, None);
    }

    #[test]
    fn graphql_source_fills_graphql_field_only() {
        let (contract, graphql) = FetchSource::GraphQl("https://rinkeby-indexer.arbitrum.io/graphql")
            .resolve()
            .unwrap();
        assert_eq!(contract, None);
        assert_eq!(
            graphql.as_deref(),
            Some("https://rinkeby-indexer.arbitrum.io/graphql")
        );
    }

    #[test]
    fn json_uses_camel_case_and_string_regex() {
        let config = MAINNET.resolve(&creds()).unwrap();
        let json = serde_json::to_value(&config).unwrap();

        assert_eq!(json["supported"], true);
        assert_eq!(json["contractFetchAddress"], "https://etherscan.io/address/${ADDRESS}");
        assert_eq!(json["txRegex"], ETHERSCAN_TX_REGEX);
        assert!(json.get("graphQLFetchAddress").is_none());

        let back: ChainConfig = serde_json::from_value(json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn contract_fetch_url_and_regex_resolve_on_demand() {
        let config = MAINNET.resolve(&creds()).unwrap();
        assert_eq!(
            config.contract_fetch_url("0xabc").as_deref(),
            Some("https://etherscan.io/address/0xabc")
        );

        let regex = config.compile_tx_regex().unwrap().unwrap();
        let html = "at txn <a href='/tx/0x1234'>0x1234</a>";
        assert_eq!(&regex.captures(html).unwrap()[1], "0x1234");
    }
}
