//! Background task runner.
//!
//! Interprets [`Effect`]s from the app state: fetches run against the
//! fullnode client, write flows go through the wallet session. Every
//! task reports back over the message channel; nothing blocks the UI.

use std::sync::Arc;

use tokio::sync::mpsc::UnboundedSender;
use tracing::debug;

use futurebox_core::config::Config;
use futurebox_sui::client::SuiClient;
use futurebox_sui::fetch::{fetch_capsules, fetch_owned_nfts};
use futurebox_sui::wallet::{execute_with_deadline, WalletError, WalletSession, DEPOSIT_DEADLINE};

use crate::app::{AppMsg, Effect, TxKind};
use crate::notify::error_message;

/// Spawns async work for effects and routes results back to the app.
pub struct TaskRunner {
    client: Arc<SuiClient>,
    wallet: Arc<dyn WalletSession>,
    config: Config,
    msg_tx: UnboundedSender<AppMsg>,
}

impl TaskRunner {
    /// Wire a runner to the shared client, wallet, and message channel.
    pub fn new(
        client: Arc<SuiClient>,
        wallet: Arc<dyn WalletSession>,
        config: Config,
        msg_tx: UnboundedSender<AppMsg>,
    ) -> Self {
        Self {
            client,
            wallet,
            config,
            msg_tx,
        }
    }

    /// Spawn the task for one effect.
    pub fn run(&self, effect: Effect) {
        debug!(?effect, "spawning effect");
        match effect {
            Effect::FetchCapsules { generation } => {
                let client = self.client.clone();
                let registry = self.config.registry_id.clone();
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let result = fetch_capsules(&client, &registry)
                        .await
                        .map_err(|err| error_message(&err));
                    let _ = tx.send(AppMsg::Capsules { generation, result });
                });
            }
            Effect::FetchNfts { generation } => {
                let client = self.client.clone();
                let wallet = self.wallet.clone();
                let struct_type = self.config.nft_struct_type();
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let result = match wallet.address() {
                        Some(owner) => fetch_owned_nfts(&client, &owner, &struct_type)
                            .await
                            .map_err(|err| error_message(&err)),
                        None => Err(error_message(&WalletError::NotConnected)),
                    };
                    let _ = tx.send(AppMsg::Nfts { generation, result });
                });
            }
            Effect::SubmitTx(request) => {
                let wallet = self.wallet.clone();
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let result = wallet
                        .sign_and_execute(&request)
                        .await
                        .map_err(|err| error_message(&err));
                    let _ = tx.send(AppMsg::TxDone {
                        kind: TxKind::Submit,
                        result,
                    });
                });
            }
            Effect::VoteTx(request) => {
                let wallet = self.wallet.clone();
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let result = execute_with_deadline(wallet.as_ref(), &request, DEPOSIT_DEADLINE)
                        .await
                        .map_err(|err| error_message(&err));
                    let _ = tx.send(AppMsg::TxDone {
                        kind: TxKind::Vote,
                        result,
                    });
                });
            }
            Effect::DepositTx(request) => {
                let wallet = self.wallet.clone();
                let tx = self.msg_tx.clone();
                tokio::spawn(async move {
                    let result = wallet
                        .sign_and_execute(&request)
                        .await
                        .map_err(|err| error_message(&err));
                    let _ = tx.send(AppMsg::TxDone {
                        kind: TxKind::Deposit,
                        result,
                    });
                });
            }
        }
    }
}
