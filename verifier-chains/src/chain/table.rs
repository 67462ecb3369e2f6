//! Built-in chain table: the single source of truth for supported chains.
//!
//! Entries are resolved against a credential source by
//! [`ChainRegistry::build`](super::ChainRegistry::build). Chain IDs must be
//! unique; a duplicate aborts the build.

use super::config::{ChainDefinition, ChainId, FetchSource, RpcSource, TxPattern};
use crate::endpoint::ProviderFamily;

const fn alchemy(network: &'static str, family: ProviderFamily) -> RpcSource {
    RpcSource::Alchemy { network, family }
}

const fn own_node(node: &'static str) -> RpcSource {
    RpcSource::PrivateNode { node }
}

const fn blockscout(prefix: &'static str) -> Option<TxPattern> {
    Some(TxPattern::Blockscout { prefix })
}

const ETHERSCAN: Option<TxPattern> = Some(TxPattern::Etherscan);

/// Every chain known to the verifier.
pub const ALL: &[ChainDefinition] = &[
    // Ethereum
    ChainDefinition {
        id: ChainId::new(1),
        name: "Ethereum Mainnet",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://etherscan.io/")),
        rpc: &[own_node("mainnet"), alchemy("mainnet", ProviderFamily::Eth)],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(3),
        name: "Ropsten",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://ropsten.etherscan.io/")),
        rpc: &[own_node("ropsten"), alchemy("ropsten", ProviderFamily::Eth)],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(4),
        name: "Rinkeby",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://rinkeby.etherscan.io/")),
        rpc: &[own_node("rinkeby"), alchemy("rinkeby", ProviderFamily::Eth)],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(5),
        name: "Goerli",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://goerli.etherscan.io/")),
        rpc: &[own_node("goerli"), alchemy("goerli", ProviderFamily::Eth)],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(42),
        name: "Kovan",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://kovan.etherscan.io/")),
        rpc: &[alchemy("kovan", ProviderFamily::Eth)],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(11_155_111),
        name: "Sepolia",
        supported: true,
        monitored: true,
        fetch: None,
        rpc: &[own_node("sepolia")],
        tx: None,
    },
    // BNB Smart Chain
    ChainDefinition {
        id: ChainId::new(56),
        name: "BNB Smart Chain",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Etherscan("https://bscscan.com/")),
        rpc: &[],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(97),
        name: "BNB Smart Chain Testnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Etherscan("https://testnet.bscscan.com/")),
        rpc: &[],
        tx: ETHERSCAN,
    },
    // POA / Gnosis
    ChainDefinition {
        id: ChainId::new(77),
        name: "POA Sokol",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Blockscout("https://blockscout.com/poa/sokol/")),
        rpc: &[],
        tx: blockscout("/poa/sokol"),
    },
    ChainDefinition {
        id: ChainId::new(100),
        name: "Gnosis Chain",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Blockscout("https://blockscout.com/xdai/mainnet/")),
        rpc: &[],
        tx: blockscout("/xdai/mainnet"),
    },
    // Meter
    ChainDefinition {
        id: ChainId::new(82),
        name: "Meter Mainnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Meter("https://api.meter.io:8000/")),
        rpc: &[],
        tx: None,
    },
    ChainDefinition {
        id: ChainId::new(83),
        name: "Meter Testnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Meter("https://api.meter.io:4000/")),
        rpc: &[],
        tx: None,
    },
    // Polygon
    ChainDefinition {
        id: ChainId::new(137),
        name: "Polygon Mainnet",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://polygonscan.com/")),
        rpc: &[alchemy("mainnet", ProviderFamily::Polygon)],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(80_001),
        name: "Polygon Mumbai",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://mumbai.polygonscan.com/")),
        rpc: &[alchemy("mumbai", ProviderFamily::Polygon)],
        tx: ETHERSCAN,
    },
    // Celo
    ChainDefinition {
        id: ChainId::new(42_220),
        name: "Celo Mainnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout("https://explorer.celo.org/")),
        rpc: &[],
        tx: blockscout(""),
    },
    ChainDefinition {
        id: ChainId::new(44_787),
        name: "Celo Alfajores",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout(
            "https://alfajores-blockscout.celo-testnet.org/",
        )),
        rpc: &[],
        tx: blockscout(""),
    },
    ChainDefinition {
        id: ChainId::new(62_320),
        name: "Celo Baklava",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout(
            "https://baklava-blockscout.celo-testnet.org/",
        )),
        rpc: &[],
        tx: blockscout(""),
    },
    // Arbitrum
    ChainDefinition {
        id: ChainId::new(421_611),
        name: "Arbitrum Rinkeby",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::GraphQl(
            "https://rinkeby-indexer.arbitrum.io/graphql",
        )),
        rpc: &[alchemy("rinkeby", ProviderFamily::Arb)],
        tx: None,
    },
    ChainDefinition {
        id: ChainId::new(42_161),
        name: "Arbitrum One",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://arbiscan.io/")),
        rpc: &[alchemy("mainnet", ProviderFamily::Arb)],
        tx: ETHERSCAN,
    },
    // Avalanche
    ChainDefinition {
        id: ChainId::new(43_113),
        name: "Avalanche Fuji",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Etherscan("https://testnet.snowtrace.io/")),
        rpc: &[],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(43_114),
        name: "Avalanche C-Chain",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Etherscan("https://snowtrace.io/")),
        rpc: &[],
        tx: ETHERSCAN,
    },
    // Syscoin
    ChainDefinition {
        id: ChainId::new(57),
        name: "Syscoin Mainnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout("https://explorer.syscoin.org/")),
        rpc: &[],
        tx: blockscout(""),
    },
    ChainDefinition {
        id: ChainId::new(5700),
        name: "Syscoin Tanenbaum",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout("https://tanenbaum.io/")),
        rpc: &[],
        tx: blockscout(""),
    },
    // Telos
    ChainDefinition {
        id: ChainId::new(40),
        name: "Telos EVM Mainnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Telos("https://mainnet.telos.net/")),
        rpc: &[],
        tx: None,
    },
    ChainDefinition {
        id: ChainId::new(41),
        name: "Telos EVM Testnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Telos("https://testnet.telos.net/")),
        rpc: &[],
        tx: None,
    },
    ChainDefinition {
        id: ChainId::new(8),
        name: "Ubiq",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Etherscan("https://ubiqscan.io/")),
        rpc: &[],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(4_216_137_055),
        name: "OneLedger Frankenstein",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout(
            "https://frankenstein-explorer.oneledger.network/",
        )),
        rpc: &[],
        tx: blockscout(""),
    },
    // Optimism
    ChainDefinition {
        id: ChainId::new(10),
        name: "Optimism",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan("https://optimistic.etherscan.io/")),
        rpc: &[alchemy("mainnet", ProviderFamily::Opt)],
        tx: ETHERSCAN,
    },
    ChainDefinition {
        id: ChainId::new(69),
        name: "Optimism Kovan",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Etherscan(
            "https://kovan-optimistic.etherscan.io/",
        )),
        rpc: &[alchemy("kovan", ProviderFamily::Opt)],
        tx: ETHERSCAN,
    },
    // Boba
    ChainDefinition {
        id: ChainId::new(28),
        name: "Boba Rinkeby",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Blockscout(
            "https://blockexplorer.rinkeby.boba.network/",
        )),
        rpc: &[],
        tx: blockscout(""),
    },
    ChainDefinition {
        id: ChainId::new(288),
        name: "Boba Network",
        supported: true,
        monitored: true,
        fetch: Some(FetchSource::Blockscout("https://blockexplorer.boba.network/")),
        rpc: &[],
        tx: blockscout(""),
    },
    ChainDefinition {
        id: ChainId::new(106),
        name: "Velas EVM",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout("https://evmexplorer.velas.com/")),
        rpc: &[],
        tx: blockscout(""),
    },
    // Aurora
    ChainDefinition {
        id: ChainId::new(1_313_161_554),
        name: "Aurora Mainnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout(
            "https://explorer.mainnet.aurora.dev/",
        )),
        rpc: &[],
        tx: blockscout(""),
    },
    ChainDefinition {
        id: ChainId::new(1_313_161_555),
        name: "Aurora Testnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout(
            "https://explorer.testnet.aurora.dev/",
        )),
        rpc: &[],
        tx: blockscout(""),
    },
    // Moonbeam family: no explorer scraping or RPC yet
    ChainDefinition {
        id: ChainId::new(1284),
        name: "Moonbeam",
        supported: true,
        monitored: false,
        fetch: None,
        rpc: &[],
        tx: None,
    },
    ChainDefinition {
        id: ChainId::new(1285),
        name: "Moonriver",
        supported: true,
        monitored: false,
        fetch: None,
        rpc: &[],
        tx: None,
    },
    ChainDefinition {
        id: ChainId::new(1287),
        name: "Moonbase Alpha",
        supported: true,
        monitored: false,
        fetch: None,
        rpc: &[],
        tx: None,
    },
    // Palm
    ChainDefinition {
        id: ChainId::new(11_297_108_109),
        name: "Palm",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout("https://explorer.palm.io/")),
        rpc: &[RpcSource::Infura {
            template: "https://palm-mainnet.infura.io/v3/{INFURA_API_KEY}",
        }],
        tx: blockscout(""),
    },
    ChainDefinition {
        id: ChainId::new(11_297_108_099),
        name: "Palm Testnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout("https://explorer.palm-uat.xyz/")),
        rpc: &[RpcSource::Infura {
            template: "https://palm-testnet.infura.io/v3/{INFURA_API_KEY}",
        }],
        tx: blockscout(""),
    },
    ChainDefinition {
        id: ChainId::new(122),
        name: "Fuse Mainnet",
        supported: true,
        monitored: false,
        fetch: Some(FetchSource::Blockscout("https://explorer.fuse.io/")),
        rpc: &[],
        tx: blockscout(""),
    },
];

/// Looks up a definition by chain ID.
#[must_use]
pub fn find(id: ChainId) -> Option<&'static ChainDefinition> {
    ALL.iter().find(|c| c.id == id)
}
