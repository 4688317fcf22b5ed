//! Wallet session seam.
//!
//! The signing provider is external; the application only ever sees this
//! trait. Implementations own the connected account (if any) and the
//! sign-and-execute flow.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use futurebox_core::types::SuiAddress;

use crate::tx::TransactionRequest;

/// Deadline for the batch-deposit submission; elapsing is treated as a
/// generic failure.
pub const DEPOSIT_DEADLINE: Duration = Duration::from_secs(5);

/// Errors from wallet operations.
#[derive(Debug, Error)]
pub enum WalletError {
    #[error("no account connected")]
    NotConnected,
    #[error("transaction timed out")]
    Timeout,
    #[error("wallet rejected the transaction: {0}")]
    Rejected(String),
    #[error("{0}")]
    Unsupported(String),
}

/// Outcome of a successfully executed transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExecuteResponse {
    /// Transaction digest reported by the node.
    pub digest: String,
}

/// A connected wallet able to sign and execute transaction requests.
///
/// `address` returns `None` when no account is connected; every write
/// path checks this before building a transaction.
#[async_trait]
pub trait WalletSession: Send + Sync {
    /// The connected account, if any.
    fn address(&self) -> Option<SuiAddress>;

    /// Sign `request` and submit it for execution.
    async fn sign_and_execute(
        &self,
        request: &TransactionRequest,
    ) -> Result<ExecuteResponse, WalletError>;
}

/// Race `sign_and_execute` against a fixed deadline.
///
/// A call that neither resolves nor rejects in time surfaces as
/// [`WalletError::Timeout`]. No retry is attempted.
pub async fn execute_with_deadline(
    wallet: &dyn WalletSession,
    request: &TransactionRequest,
    deadline: Duration,
) -> Result<ExecuteResponse, WalletError> {
    match tokio::time::timeout(deadline, wallet.sign_and_execute(request)).await {
        Ok(result) => result,
        Err(_) => {
            info!(target = %request.call.target, "transaction deadline elapsed");
            Err(WalletError::Timeout)
        }
    }
}

/// A watch-only session: carries an optional address and refuses to sign.
///
/// Used by the shipped binary when no signing provider is wired in, and
/// as a test double.
#[derive(Debug, Clone, Default)]
pub struct StaticWallet {
    address: Option<SuiAddress>,
}

impl StaticWallet {
    /// A session with no connected account.
    pub fn disconnected() -> Self {
        Self::default()
    }

    /// A watch-only session for `address`.
    pub fn watch_only(address: SuiAddress) -> Self {
        Self {
            address: Some(address),
        }
    }
}

#[async_trait]
impl WalletSession for StaticWallet {
    fn address(&self) -> Option<SuiAddress> {
        self.address.clone()
    }

    async fn sign_and_execute(
        &self,
        _request: &TransactionRequest,
    ) -> Result<ExecuteResponse, WalletError> {
        match &self.address {
            Some(_) => Err(WalletError::Unsupported(
                "watch-only session: no signing provider configured".to_string(),
            )),
            None => Err(WalletError::NotConnected),
        }
    }
}
