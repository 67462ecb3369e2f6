//! Endpoint template builders.
//!
//! Pure functions that turn a handful of literal parameters plus a
//! [`CredentialSource`] into concrete endpoint strings:
//!
//! - [`alchemy_url`] / [`private_node_url`] — managed or operator-run RPC nodes.
//! - [`substitute_secret`] / [`infura_url`] — provider URL templates with a key slot.
//! - [`explorer_fetch_url`] — explorer contract pages with an `${ADDRESS}` slot.
//! - [`blockscout_tx_regex`] — transaction-link patterns, kept as source strings.
//!
//! Every builder returns a [`BuildError`] instead of emitting a string with a
//! hole in it.

use regex::Regex;
use url::Url;

use crate::credentials::{ALCHEMY_ID, CredentialSource, INFURA_ID, NODE_ADDRESS, node_port_key};
use crate::error::BuildError;

/// Placeholder resolved by callers with the contract address.
pub const ADDRESS_PLACEHOLDER: &str = "${ADDRESS}";

/// Placeholder in Infura URL templates.
pub const INFURA_PLACEHOLDER: &str = "{INFURA_API_KEY}";

/// Placeholder in the Blockscout regex template.
pub const BLOCKSCOUT_PREFIX_PLACEHOLDER: &str = "${BLOCKSCOUT_PREFIX}";

/// Etherscan-family contract page suffix.
pub const ETHERSCAN_SUFFIX: &str = "address/${ADDRESS}";

/// Blockscout-family contract page suffix.
pub const BLOCKSCOUT_SUFFIX: &str = "address/${ADDRESS}/transactions";

/// Telos EVM contract API suffix.
pub const TELOS_SUFFIX: &str = "v2/evm/get_contract?contract=${ADDRESS}";

/// Meter accounts API suffix.
pub const METER_SUFFIX: &str = "api/accounts/${ADDRESS}";

/// Matches the creator-transaction link on Etherscan-family contract pages.
pub const ETHERSCAN_TX_REGEX: &str = r"at txn\s+<a href='\/tx\/(.*?)'";

/// Blockscout transaction-link pattern, before prefix substitution.
pub const BLOCKSCOUT_TX_TEMPLATE: &str =
    r#"transaction_hash_link" href="${BLOCKSCOUT_PREFIX}/tx/(.*?)""#;

/// Address substituted into fetch templates when validating them.
const SAMPLE_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Chain group of a managed Alchemy endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProviderFamily {
    /// Ethereum L1 networks.
    Eth,
    /// Polygon PoS networks.
    Polygon,
    /// Arbitrum networks.
    Arb,
    /// Optimism networks.
    Opt,
}

impl ProviderFamily {
    /// Host prefix used in the endpoint subdomain.
    #[must_use]
    pub const fn group(self) -> &'static str {
        match self {
            Self::Eth => "eth",
            Self::Polygon => "polygon",
            Self::Arb => "arb",
            Self::Opt => "opt",
        }
    }

    /// Provider domain serving this family.
    #[must_use]
    pub const fn domain(self) -> &'static str {
        match self {
            Self::Eth => "alchemyapi.io",
            Self::Polygon | Self::Arb | Self::Opt => "g.alchemy.com",
        }
    }
}

/// Replaces the single occurrence of `placeholder` in `template` with `value`.
///
/// # Errors
///
/// Returns [`BuildError::MalformedTemplate`] unless the placeholder occurs
/// exactly once.
pub fn fill_placeholder(
    template: &str,
    placeholder: &'static str,
    value: &str,
) -> Result<String, BuildError> {
    if template.matches(placeholder).count() != 1 {
        return Err(BuildError::MalformedTemplate {
            template: template.to_owned(),
            placeholder,
        });
    }
    Ok(template.replacen(placeholder, value, 1))
}

/// Builds an Alchemy endpoint, or the operator node endpoint when
/// `prefer_private` is set.
///
/// ```text
/// https://<group>-<network>.<domain>/v2/<ALCHEMY_ID>
/// ```
///
/// # Errors
///
/// Returns [`BuildError::MissingCredential`] if the ID (or the node
/// address/port) is not configured.
pub fn alchemy_url(
    network: &str,
    family: ProviderFamily,
    prefer_private: bool,
    credentials: &dyn CredentialSource,
) -> Result<String, BuildError> {
    if prefer_private {
        return private_node_url(network, credentials);
    }
    let id = credentials.require(ALCHEMY_ID)?;
    Ok(format!(
        "https://{}-{network}.{}/v2/{id}",
        family.group(),
        family.domain()
    ))
}

/// Builds `<NODE_ADDRESS>:<NODE_PORT_{NODE}>` for an operator-run node.
///
/// The port key is derived from `node` alone, independent of any provider
/// family. `NODE_ADDRESS` must be a bare origin: scheme and host only, with
/// no path, query, fragment or port of its own.
///
/// # Errors
///
/// Returns [`BuildError::MissingCredential`] naming whichever key is absent,
/// or [`BuildError::InvalidUrl`] if the address is not a bare origin or the
/// port is not a valid port number.
pub fn private_node_url(
    node: &str,
    credentials: &dyn CredentialSource,
) -> Result<String, BuildError> {
    let address = credentials.require(NODE_ADDRESS)?;
    let port = credentials.require(&node_port_key(node))?;

    let invalid = |reason: &str| BuildError::InvalidUrl {
        url: address.to_owned(),
        reason: reason.to_owned(),
    };
    let mut url = validate_url(address)?;
    if url.host().is_none() {
        return Err(invalid("node address has no host"));
    }
    if !matches!(url.path(), "" | "/") || url.query().is_some() || url.fragment().is_some() {
        return Err(invalid("node address must not carry a path, query or fragment"));
    }
    // Default ports are elided by the parser, so look at the raw authority too.
    if url.port().is_some() || has_explicit_port(address) {
        return Err(invalid("node address must not carry a port"));
    }
    let port: u16 = port.parse().map_err(|_| BuildError::InvalidUrl {
        url: format!("{address}:{port}"),
        reason: format!("invalid port '{port}'"),
    })?;
    url.set_port(Some(port))
        .map_err(|()| invalid("node address cannot take a port"))?;
    Ok(url.as_str().trim_end_matches('/').to_owned())
}

fn has_explicit_port(address: &str) -> bool {
    let rest = address.split_once("://").map_or(address, |(_, rest)| rest);
    let authority = rest.split(['/', '?', '#']).next().unwrap_or_default();
    let host_port = authority.rsplit('@').next().unwrap_or_default();
    // Skip over a bracketed IPv6 literal before looking for ':'.
    host_port
        .rsplit_once(']')
        .map_or(host_port, |(_, tail)| tail)
        .contains(':')
}

/// Substitutes the credential stored under `key` into `template`.
///
/// The template is checked before the credential is looked up, so a broken
/// template is reported even when the secret is missing.
///
/// # Errors
///
/// Returns [`BuildError::MalformedTemplate`] or
/// [`BuildError::MissingCredential`].
pub fn substitute_secret(
    template: &str,
    placeholder: &'static str,
    key: &str,
    credentials: &dyn CredentialSource,
) -> Result<String, BuildError> {
    fill_placeholder(template, placeholder, "")?;
    let secret = credentials.require(key)?;
    fill_placeholder(template, placeholder, secret)
}

/// Fills `{INFURA_API_KEY}` in an Infura URL template with `INFURA_ID`.
///
/// # Errors
///
/// See [`substitute_secret`].
pub fn infura_url(template: &str, credentials: &dyn CredentialSource) -> Result<String, BuildError> {
    substitute_secret(template, INFURA_PLACEHOLDER, INFURA_ID, credentials)
}

/// Joins an explorer base URL with a contract-page suffix.
///
/// The result keeps its `${ADDRESS}` placeholder for the caller to resolve.
///
/// # Errors
///
/// Returns [`BuildError::MalformedTemplate`] if the joined template does not
/// contain `${ADDRESS}` exactly once, or [`BuildError::InvalidUrl`] if it
/// does not parse once an address is substituted.
pub fn explorer_fetch_url(base: &str, suffix: &str) -> Result<String, BuildError> {
    let separator = if base.ends_with('/') { "" } else { "/" };
    let template = format!("{base}{separator}{suffix}");
    let sample = fill_placeholder(&template, ADDRESS_PLACEHOLDER, SAMPLE_ADDRESS)?;
    validate_url(&sample)?;
    Ok(template)
}

/// Blockscout transaction-link regex source for the given path prefix.
///
/// Pass `""` for explorers served from the domain root.
///
/// # Errors
///
/// Returns [`BuildError::MalformedTemplate`] if the template lost its
/// placeholder.
pub fn blockscout_tx_regex(prefix: &str) -> Result<String, BuildError> {
    fill_placeholder(BLOCKSCOUT_TX_TEMPLATE, BLOCKSCOUT_PREFIX_PLACEHOLDER, prefix)
}

/// Parses `endpoint` and checks it uses an HTTP or WebSocket scheme.
///
/// # Errors
///
/// Returns [`BuildError::InvalidUrl`] on parse failure or unsupported scheme.
pub fn validate_url(endpoint: &str) -> Result<Url, BuildError> {
    let url = Url::parse(endpoint).map_err(|e| BuildError::InvalidUrl {
        url: endpoint.to_owned(),
        reason: e.to_string(),
    })?;
    match url.scheme() {
        "http" | "https" | "ws" | "wss" => Ok(url),
        other => Err(BuildError::InvalidUrl {
            url: endpoint.to_owned(),
            reason: format!("unsupported scheme '{other}'"),
        }),
    }
}

/// Compiles `pattern` and checks it has exactly one capture group.
///
/// # Errors
///
/// Returns [`BuildError::InvalidRegex`] on compile failure or wrong group count.
pub fn validate_tx_regex(pattern: &str) -> Result<Regex, BuildError> {
    let regex = Regex::new(pattern).map_err(|e| BuildError::InvalidRegex {
        pattern: pattern.to_owned(),
        reason: e.to_string(),
    })?;
    // captures_len counts the implicit whole-match group.
    let groups = regex.captures_len() - 1;
    if groups != 1 {
        return Err(BuildError::InvalidRegex {
            pattern: pattern.to_owned(),
            reason: format!("expected 1 capture group, found {groups}"),
        });
    }
    Ok(regex)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::StaticCredentials;

    fn creds() -> StaticCredentials {
        StaticCredentials::new()
            .with(ALCHEMY_ID, "abc123")
            .with(INFURA_ID, "inf456")
            .with(NODE_ADDRESS, "http://10.0.0.5/")
            .with("NODE_PORT_MAINNET", "8545")
    }

    #[test]
    fn alchemy_eth_uses_legacy_domain() {
        let url = alchemy_url("mainnet", ProviderFamily::Eth, false, &creds()).unwrap();
        assert_eq!(url, "https://eth-mainnet.alchemyapi.io/v2/abc123");
    }

    #[test]
    fn alchemy_l2_families_share_domain() {
        let creds = creds();
        assert_eq!(
            alchemy_url("mumbai", ProviderFamily::Polygon, false, &creds).unwrap(),
            "https://polygon-mumbai.g.alchemy.com/v2/abc123"
        );
        assert_eq!(
            alchemy_url("mainnet", ProviderFamily::Arb, false, &creds).unwrap(),
            "https://arb-mainnet.g.alchemy.com/v2/abc123"
        );
        assert_eq!(
            alchemy_url("kovan", ProviderFamily::Opt, false, &creds).unwrap(),
            "https://opt-kovan.g.alchemy.com/v2/abc123"
        );
    }

    #[test]
    fn private_node_joins_address_and_port() {
        let url = alchemy_url("mainnet", ProviderFamily::Eth, true, &creds()).unwrap();
        assert_eq!(url, "http://10.0.0.5:8545");
    }

    #[test]
    fn private_node_rejects_address_with_path_or_query() {
        for address in ["http://10.0.0.5/rpc", "http://10.0.0.5/?key=1", "http://10.0.0.5/#x"] {
            let creds = creds().with(NODE_ADDRESS, address);
            let err = private_node_url("mainnet", &creds).unwrap_err();
            assert!(
                matches!(&err, BuildError::InvalidUrl { url, .. } if url == address),
                "{address}: {err}"
            );
        }
    }

    #[test]
    fn private_node_rejects_address_with_port() {
        for address in ["http://10.0.0.5:8000", "http://10.0.0.5:80", "https://[::1]:443"] {
            let creds = creds().with(NODE_ADDRESS, address);
            assert!(
                matches!(
                    private_node_url("mainnet", &creds),
                    Err(BuildError::InvalidUrl { .. })
                ),
                "{address}"
            );
        }
    }

    #[test]
    fn private_node_rejects_bad_port_and_scheme() {
        let creds = creds().with("NODE_PORT_MAINNET", "85a45");
        assert!(matches!(
            private_node_url("mainnet", &creds),
            Err(BuildError::InvalidUrl { .. })
        ));

        let creds = self::creds().with(NODE_ADDRESS, "10.0.0.5");
        assert!(matches!(
            private_node_url("mainnet", &creds),
            Err(BuildError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn private_node_accepts_ipv6_and_hostnames() {
        let creds = creds().with(NODE_ADDRESS, "http://[::1]");
        assert_eq!(private_node_url("mainnet", &creds).unwrap(), "http://[::1]:8545");

        let creds = self::creds().with(NODE_ADDRESS, "wss://node.internal");
        assert_eq!(
            private_node_url("mainnet", &creds).unwrap(),
            "wss://node.internal:8545"
        );
    }

    #[test]
    fn private_node_reports_missing_port_key() {
        let err = private_node_url("goerli", &creds()).unwrap_err();
        assert_eq!(
            err,
            BuildError::MissingCredential {
                key: "NODE_PORT_GOERLI".to_owned()
            }
        );
    }

    #[test]
    fn missing_alchemy_id_is_an_error() {
        let mut creds = creds();
        creds.remove(ALCHEMY_ID);
        let err = alchemy_url("mainnet", ProviderFamily::Eth, false, &creds).unwrap_err();
        assert!(matches!(err, BuildError::MissingCredential { key } if key == ALCHEMY_ID));
    }

    #[test]
    fn infura_template_is_filled() {
        let url = infura_url("https://palm-mainnet.infura.io/v3/{INFURA_API_KEY}", &creds()).unwrap();
        assert_eq!(url, "https://palm-mainnet.infura.io/v3/inf456");
    }

    #[test]
    fn template_without_placeholder_is_malformed_even_without_secret() {
        let err = infura_url(
            "https://palm-mainnet.infura.io/v3/",
            &StaticCredentials::new(),
        )
        .unwrap_err();
        assert!(matches!(
            err,
            BuildError::MalformedTemplate {
                placeholder: INFURA_PLACEHOLDER,
                ..
            }
        ));
    }

    #[test]
    fn blockscout_prefix_precedes_anchor() {
        let source = blockscout_tx_regex("/xdai/mainnet").unwrap();
        assert!(source.contains("/xdai/mainnet/tx/"));
        assert!(!source.contains(BLOCKSCOUT_PREFIX_PLACEHOLDER));

        let root = blockscout_tx_regex("").unwrap();
        assert_eq!(root, r#"transaction_hash_link" href="/tx/(.*?)""#);
    }

    #[test]
    fn tx_regexes_capture_the_hash() {
        let etherscan = validate_tx_regex(ETHERSCAN_TX_REGEX).unwrap();
        let html = "Contract Creator: <a href='/address/0x1'>0x1</a> at txn  <a href='/tx/0xfeed'>";
        assert_eq!(&etherscan.captures(html).unwrap()[1], "0xfeed");

        let blockscout = validate_tx_regex(&blockscout_tx_regex("/poa/sokol").unwrap()).unwrap();
        let html = r#"<a class="transaction_hash_link" href="/poa/sokol/tx/0xbeef">"#;
        assert_eq!(&blockscout.captures(html).unwrap()[1], "0xbeef");
    }

    #[test]
    fn tx_regex_group_count_is_enforced() {
        assert!(matches!(
            validate_tx_regex("no groups"),
            Err(BuildError::InvalidRegex { .. })
        ));
        assert!(matches!(
            validate_tx_regex("(a)(b)"),
            Err(BuildError::InvalidRegex { .. })
        ));
        assert!(matches!(
            validate_tx_regex("(unclosed"),
            Err(BuildError::InvalidRegex { .. })
        ));
    }

    #[test]
    fn explorer_fetch_url_keeps_placeholder() {
        let url = explorer_fetch_url("https://etherscan.io/", ETHERSCAN_SUFFIX).unwrap();
        assert_eq!(url, "https://etherscan.io/address/${ADDRESS}");

        let joined = explorer_fetch_url("https://api.meter.io:8000", METER_SUFFIX).unwrap();
        assert_eq!(joined, "https://api.meter.io:8000/api/accounts/${ADDRESS}");
    }

    #[test]
    fn explorer_fetch_url_rejects_bad_templates() {
        assert!(matches!(
            explorer_fetch_url("https://etherscan.io/", "address/"),
            Err(BuildError::MalformedTemplate { .. })
        ));
        assert!(matches!(
            explorer_fetch_url("https://etherscan.io/", "${ADDRESS}/${ADDRESS}"),
            Err(BuildError::MalformedTemplate { .. })
        ));
        assert!(matches!(
            explorer_fetch_url("etherscan.io/", ETHERSCAN_SUFFIX),
            Err(BuildError::InvalidUrl { .. })
        ));
    }

    #[test]
    fn validate_url_rejects_non_http_schemes() {
        assert!(validate_url("wss://node.example.com").is_ok());
        assert!(matches!(
            validate_url("localhost:8545"),
            Err(BuildError::InvalidUrl { .. })
        ));
        assert!(matches!(
            validate_url("10.0.0.5:8545"),
            Err(BuildError::InvalidUrl { .. })
        ));
    }
}
