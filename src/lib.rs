//! # futurebox
//!
//! Umbrella crate for **FutureBox** — a terminal client for a capsule
//! dApp on the Sui test network.
//!
//! Re-exports the domain types and the chain client so embedders can
//! depend on a single crate.

pub use futurebox_core::{
    Capsule, CapsuleContent, Config, Network, ObjectId, SelectionSet, Submission, SuiAddress,
};
pub use futurebox_sui::{
    build_deposit, build_submit, build_vote, fetch_capsules, fetch_owned_nfts, SuiClient,
    TransactionRequest, WalletSession,
};

/// Returns the library version string.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn version_is_set() {
        assert!(!version().is_empty());
    }
}
