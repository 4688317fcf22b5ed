//! Supported Sui network identifiers.
//!
//! The deployed FutureBox package lives on testnet; the other networks
//! are selectable for development against a local or alternative node.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Networks the client can point at.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Sui testnet (where the FutureBox package is deployed).
    #[default]
    Testnet,
    /// Sui devnet.
    Devnet,
    /// Sui mainnet.
    Mainnet,
    /// A locally running node.
    Localnet,
}

impl Network {
    /// All selectable networks.
    pub const ALL: [Network; 4] = [
        Self::Testnet,
        Self::Devnet,
        Self::Mainnet,
        Self::Localnet,
    ];

    /// Default fullnode RPC URL for this network.
    pub const fn fullnode_url(self) -> &'static str {
        match self {
            Self::Testnet => "https://fullnode.testnet.sui.io:443",
            Self::Devnet => "https://fullnode.devnet.sui.io:443",
            Self::Mainnet => "https://fullnode.mainnet.sui.io:443",
            Self::Localnet => "http://127.0.0.1:9000",
        }
    }

    /// Chain tag attached to transaction requests (e.g. `sui:testnet`).
    pub const fn chain_tag(self) -> &'static str {
        match self {
            Self::Testnet => "sui:testnet",
            Self::Devnet => "sui:devnet",
            Self::Mainnet => "sui:mainnet",
            Self::Localnet => "sui:localnet",
        }
    }

    /// Lowercase name, matching the serde form.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Testnet => "testnet",
            Self::Devnet => "devnet",
            Self::Mainnet => "mainnet",
            Self::Localnet => "localnet",
        }
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when a network name is not recognized.
#[derive(Debug, Clone)]
pub struct UnknownNetworkError(pub String);

impl fmt::Display for UnknownNetworkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown network '{}'; expected one of: {}",
            self.0,
            Network::ALL
                .iter()
                .map(|n| n.name())
                .collect::<Vec<_>>()
                .join(", ")
        )
    }
}

impl std::error::Error for UnknownNetworkError {}

impl FromStr for Network {
    type Err = UnknownNetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "testnet" => Ok(Self::Testnet),
            "devnet" => Ok(Self::Devnet),
            "mainnet" => Ok(Self::Mainnet),
            "localnet" | "local" => Ok(Self::Localnet),
            _ => Err(UnknownNetworkError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_all_networks() {
        for network in Network::ALL {
            let back: Network = network.name().parse().unwrap();
            assert_eq!(network, back);
        }
    }

    #[test]
    fn unknown_network_rejected() {
        let err = "ropsten".parse::<Network>().unwrap_err();
        assert!(err.to_string().contains("ropsten"));
        assert!(err.to_string().contains("testnet"));
    }

    #[test]
    fn default_is_testnet() {
        assert_eq!(Network::default(), Network::Testnet);
    }

    #[test]
    fn chain_tags_carry_network_name() {
        for network in Network::ALL {
            assert!(network.chain_tag().starts_with("sui:"));
            assert!(network.chain_tag().ends_with(network.name()));
        }
    }

    #[test]
    fn serde_uses_lowercase_name() {
        let json = serde_json::to_string(&Network::Testnet).unwrap();
        assert_eq!(json, "\"testnet\"");
        let back: Network = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Network::Testnet);
    }
}
