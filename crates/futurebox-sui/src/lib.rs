//! # futurebox-sui
//!
//! The chain-facing half of FutureBox: a thin JSON-RPC client for a Sui
//! fullnode, the capsule/NFT fetch adapters, the entry-point transaction
//! builders, and the wallet-session seam through which signed execution
//! is delegated.

pub mod client;
pub mod fetch;
pub mod rpc;
pub mod tx;
pub mod wallet;

pub use client::{ClientError, SuiClient};
pub use fetch::{fetch_capsules, fetch_owned_nfts};
pub use tx::{build_deposit, build_submit, build_vote, CallArg, MoveCall, TransactionRequest};
pub use wallet::{
    execute_with_deadline, ExecuteResponse, StaticWallet, WalletError, WalletSession,
    DEPOSIT_DEADLINE,
};
