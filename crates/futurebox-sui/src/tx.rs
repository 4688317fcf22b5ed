//! Transaction building for the FutureBox entry points.
//!
//! Builders are pure: each constructs a request with exactly one call to
//! a named entry point and typed positional arguments. Signing and
//! execution are the wallet session's job.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use futurebox_core::config::{Config, FN_CREATE, FN_DEPOSIT, FN_VOTE};
use futurebox_core::content::{CapsuleContent, Submission};
use futurebox_core::selection::{SelectionSet, MAX_SELECTED};
use futurebox_core::types::ObjectId;

/// Errors from transaction building.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TxError {
    #[error("a batch vote needs exactly {MAX_SELECTED} capsules, got {selected}")]
    SelectionIncomplete {
        /// How many ids were selected.
        selected: usize,
    },
}

/// A positional argument to an entry-point call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CallArg {
    /// A UTF-8 string.
    Pure(String),
    /// A small unsigned integer tag.
    PureU8(u8),
    /// A single object reference (owned or shared).
    Object(ObjectId),
    /// A list of object ids.
    ObjectVec(Vec<ObjectId>),
}

/// One call to a named entry point.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveCall {
    /// Fully qualified `package::module::function` target.
    pub target: String,
    /// Positional arguments matching the target's signature.
    pub args: Vec<CallArg>,
}

/// A transaction ready to hand to the wallet for signing and execution.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionRequest {
    /// The single entry-point call.
    pub call: MoveCall,
    /// Chain tag the wallet should execute against (e.g. `sui:testnet`).
    pub chain: String,
}

impl TransactionRequest {
    fn new(config: &Config, function: &str, args: Vec<CallArg>) -> Self {
        Self {
            call: MoveCall {
                target: config.target(function),
                args,
            },
            chain: config.network.chain_tag().to_string(),
        }
    }
}

/// Build a capsule-creation transaction.
///
/// Argument arity follows the content variant: the title and kind tag
/// always lead, then text, image, or both.
pub fn build_submit(config: &Config, submission: &Submission) -> TransactionRequest {
    let mut args = vec![
        CallArg::Pure(submission.title.clone()),
        CallArg::PureU8(submission.content.kind_tag()),
    ];
    match &submission.content {
        CapsuleContent::Text(text) => args.push(CallArg::Pure(text.clone())),
        CapsuleContent::Image(image) => args.push(CallArg::Pure(image.clone())),
        CapsuleContent::Both { text, image } => {
            args.push(CallArg::Pure(text.clone()));
            args.push(CallArg::Pure(image.clone()));
        }
    }
    TransactionRequest::new(config, FN_CREATE, args)
}

/// Build a batch-vote transaction from a complete selection.
///
/// The view layer is the primary gate on selection size; this check is a
/// backstop so an incomplete batch can never reach the wallet.
pub fn build_vote(config: &Config, selection: &SelectionSet) -> Result<TransactionRequest, TxError> {
    if !selection.is_complete() {
        return Err(TxError::SelectionIncomplete {
            selected: selection.len(),
        });
    }
    let args = vec![
        CallArg::ObjectVec(selection.ids().to_vec()),
        CallArg::Object(config.pool_id.clone()),
    ];
    Ok(TransactionRequest::new(config, FN_VOTE, args))
}

/// Build a transaction depositing one owned NFT into the pool.
pub fn build_deposit(config: &Config, nft: &ObjectId) -> TransactionRequest {
    let args = vec![
        CallArg::Object(config.pool_id.clone()),
        CallArg::Object(nft.clone()),
    ];
    TransactionRequest::new(config, FN_DEPOSIT, args)
}
