//! Contract configuration.
//!
//! The package and shared-object identifiers of the deployed FutureBox
//! Move module are compiled in; only the network and RPC URL are
//! selectable at startup.

use crate::network::Network;
use crate::types::ObjectId;

/// Deployed FutureBox package id on testnet.
pub const PACKAGE_ID: &str = "0x8f42c6bd2c46e70b9cbd8a63d9a740ab9b24b1cf2ca1a2ff4cf35b0aee6ea204";

/// Shared registry object holding every submitted capsule as a dynamic
/// field.
pub const CAPSULE_REGISTRY_ID: &str =
    "0x3e1d90ab41b2cc7a8f4c26b1adf05d2761a409eb6a6f1c3de2b6978c5fb0d9a1";

/// Shared pool object targeted by vote and deposit calls.
pub const VOTE_POOL_ID: &str =
    "0x5c7be294d06dd7e21f7430cf94bfa3f1cb4d6c9af26d804a51e8ac03b7d1f6e8";

/// Move module name within the package.
pub const MODULE_NAME: &str = "futurebox";

/// Entry point creating a capsule (arity varies with content kind).
pub const FN_CREATE: &str = "create_single_box";
/// Entry point recording a batch vote of five capsule ids.
pub const FN_VOTE: &str = "vote_box";
/// Entry point depositing an owned FutureBox NFT into the pool.
pub const FN_DEPOSIT: &str = "deposit_box";

/// Resolved application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Network to connect to.
    pub network: Network,
    /// Optional fullnode URL override.
    pub rpc_url: Option<String>,
    /// FutureBox package id.
    pub package_id: ObjectId,
    /// Capsule registry shared object.
    pub registry_id: ObjectId,
    /// Vote/deposit pool shared object.
    pub pool_id: ObjectId,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            network: Network::default(),
            rpc_url: None,
            package_id: ObjectId::from_static(PACKAGE_ID),
            registry_id: ObjectId::from_static(CAPSULE_REGISTRY_ID),
            pool_id: ObjectId::from_static(VOTE_POOL_ID),
        }
    }
}

impl Config {
    /// Configuration for a specific network with the compiled-in ids.
    pub fn for_network(network: Network) -> Self {
        Self {
            network,
            ..Self::default()
        }
    }

    /// The fullnode URL, honoring an explicit override.
    pub fn effective_rpc_url(&self) -> &str {
        self.rpc_url
            .as_deref()
            .unwrap_or_else(|| self.network.fullnode_url())
    }

    /// Fully qualified entry-point target, `package::module::function`.
    pub fn target(&self, function: &str) -> String {
        format!("{}::{}::{}", self.package_id, MODULE_NAME, function)
    }

    /// Struct type of the FutureBox NFT, used as the owned-objects filter.
    pub fn nft_struct_type(&self) -> String {
        format!("{}::{}::FutureBox", self.package_id, MODULE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_ids_parse() {
        let config = Config::default();
        assert_eq!(config.network, Network::Testnet);
        assert_eq!(config.package_id.as_str(), PACKAGE_ID);
    }

    #[test]
    fn target_is_fully_qualified() {
        let config = Config::default();
        let target = config.target(FN_VOTE);
        assert_eq!(target, format!("{PACKAGE_ID}::futurebox::vote_box"));
    }

    #[test]
    fn nft_struct_type_names_module() {
        let config = Config::default();
        assert!(config.nft_struct_type().ends_with("::futurebox::FutureBox"));
    }

    #[test]
    fn rpc_url_override_wins() {
        let mut config = Config::for_network(Network::Localnet);
        assert_eq!(config.effective_rpc_url(), "http://127.0.0.1:9000");
        config.rpc_url = Some("http://10.0.0.1:9000".to_string());
        assert_eq!(config.effective_rpc_url(), "http://10.0.0.1:9000");
    }
}
