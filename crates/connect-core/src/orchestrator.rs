//! Connect → balance → send flow.
//!
//! The [`Orchestrator`] owns the [`DisplayState`] shown by the views and is the
//! only thing that mutates it. Every external call is isolated: a failure is
//! logged, recorded in the state where the user needs to see it, and never
//! blocks an unrelated action.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use alloy_primitives::{B256, U256};
use chain_eth::transaction::build_transfer;
use chain_eth::units::format_ether;
use parking_lot::RwLock;
use tracing::{debug, error, info, warn};

use crate::config::ConnectConfig;
use crate::error::ConnectError;
use crate::format::format_wei_balance;
use crate::notify::{ClipboardNotifier, CopyOutcome};
use crate::provider::{ChainClient, WalletProvider};
use crate::signer::TransferSigner;
use crate::types::{ConnectionStatus, DisplayState, TxNotice, TxPhase, UserInfoState};

/// Inline message shown when the wallet type has no profile.
pub const USER_INFO_UNAVAILABLE: &str =
    "Error fetching user info: the connected wallet does not provide a profile.";

/// Held while a logical action is running; releases the flag on drop.
struct InFlight<'a>(&'a AtomicBool);

impl<'a> InFlight<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self(flag))
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// One send attempt. If it is dropped before settling, the phase is marked
/// failed so the UI does not stay stuck on `Sending`.
struct SendAttempt<'a> {
    state: &'a RwLock<DisplayState>,
    settled: bool,
    _flag: InFlight<'a>,
}

impl SendAttempt<'_> {
    fn settle(mut self, phase: TxPhase) {
        self.state.write().tx = phase;
        self.settled = true;
    }
}

impl Drop for SendAttempt<'_> {
    fn drop(&mut self) {
        if !self.settled {
            warn!("send attempt dropped before completion");
            self.state.write().tx = TxPhase::Failed("send attempt abandoned".into());
        }
    }
}

pub struct Orchestrator {
    wallet: Arc<dyn WalletProvider>,
    chain: Arc<dyn ChainClient>,
    transfer_amount: U256,
    state: RwLock<DisplayState>,
    balance_in_flight: AtomicBool,
    send_in_flight: AtomicBool,
}

impl Orchestrator {
    pub fn new(
        wallet: Arc<dyn WalletProvider>,
        chain: Arc<dyn ChainClient>,
        transfer_amount: U256,
    ) -> Self {
        Self {
            wallet,
            chain,
            transfer_amount,
            state: RwLock::new(DisplayState::default()),
            balance_in_flight: AtomicBool::new(false),
            send_in_flight: AtomicBool::new(false),
        }
    }

    pub fn from_config(
        wallet: Arc<dyn WalletProvider>,
        chain: Arc<dyn ChainClient>,
        config: &ConnectConfig,
    ) -> Result<Self, ConnectError> {
        let amount = config.transfer_amount_wei()?;
        Ok(Self::new(wallet, chain, amount))
    }

    /// Clone of the current view model.
    pub fn snapshot(&self) -> DisplayState {
        self.state.read().clone()
    }

    /// Current view model rendered as JSON for a UI host.
    pub fn to_json(&self) -> Result<String, ConnectError> {
        Ok(serde_json::to_string(&*self.state.read())?)
    }

    /// Demo transfer amount in ether, e.g. `"0.01"`.
    pub fn transfer_amount_label(&self) -> String {
        format_ether(self.transfer_amount)
    }

    /// Send button text: `"Send 0.01"`, or `"Sending..."` while in flight.
    pub fn send_button_label(&self) -> String {
        self.state.read().tx.button_label(&self.transfer_amount_label())
    }

    pub fn set_recipient(&self, recipient: impl Into<String>) {
        self.state.write().recipient = recipient.into();
    }

    pub fn can_send(&self) -> bool {
        self.state.read().can_send() && !self.send_in_flight.load(Ordering::Acquire)
    }

    /// Re-reads the wallet provider and re-derives whatever the change made
    /// stale. Returns whether the account or chain changed.
    pub async fn sync_connection(&self) -> bool {
        let status = self.wallet.status();
        let address = self.wallet.address();
        let chain_id = self.wallet.chain_id();

        let (changed, became_connected) = {
            let mut state = self.state.write();
            let became_connected = status.is_connected() && !state.status.is_connected();
            state.status = status;

            let changed = state.address != address || state.chain_id != chain_id;
            if changed {
                info!(?address, ?chain_id, status = status.label(), "connection changed");
                state.address = address;
                state.chain_id = chain_id;
                state.invalidate_account_data();
            }
            (changed, became_connected)
        };

        if !status.is_connected() || address.is_none() {
            return changed;
        }

        if changed {
            // Errors are logged inside. A fetch that is already running
            // notices the change and fetches again for the new connection.
            let _ = self.fetch_balance().await;
        }
        if changed || became_connected {
            self.load_user_info().await;
        }
        changed
    }

    /// Queries the chain client and stores the formatted balance.
    ///
    /// On failure the previously displayed balance is left untouched. If the
    /// account or chain changes while the query runs, the result is dropped
    /// and the balance is fetched again for the current connection; after a
    /// disconnect the call ends with [`ConnectError::ConnectionChanged`].
    pub async fn fetch_balance(&self) -> Result<String, ConnectError> {
        let (mut address, mut chain_id) = {
            let state = self.state.read();
            let address = state.address.ok_or(ConnectError::NotConnected)?;
            (address, state.chain_id)
        };

        let Some(flag) = InFlight::acquire(&self.balance_in_flight) else {
            debug!(%address, "balance fetch already running");
            return Err(ConnectError::BalanceFetchInFlight);
        };

        loop {
            let fetched = self.chain.get_balance(address).await;

            let mut state = self.state.write();
            if state.address == Some(address) && state.chain_id == chain_id {
                let result = match fetched {
                    Ok(wei) => {
                        debug!(%address, %wei, "balance fetched");
                        let formatted = format_wei_balance(wei);
                        state.balance = Some(formatted.clone());
                        Ok(formatted)
                    }
                    Err(e) => {
                        error!(%address, error = %e, "Error fetching balance");
                        Err(e.into())
                    }
                };
                // Released under the state lock: a connection change landing
                // after this point finds the flag free and starts its own fetch.
                drop(flag);
                return result;
            }

            let Some(current) = state.address else {
                debug!(%address, "discarding balance, wallet disconnected");
                drop(flag);
                return Err(ConnectError::ConnectionChanged);
            };
            debug!(stale = %address, %current, "connection changed during balance fetch, fetching again");
            address = current;
            chain_id = state.chain_id;
        }
    }

    /// Looks up the user's profile. Wallets without one end up `Unavailable`.
    pub async fn load_user_info(&self) -> UserInfoState {
        self.state.write().user_info = UserInfoState::Loading;

        let next = match self.wallet.user_info().await {
            Ok(info) => UserInfoState::Loaded(info),
            Err(e) => {
                warn!(error = %e, "Error fetching user info");
                UserInfoState::Unavailable(USER_INFO_UNAVAILABLE.to_string())
            }
        };

        self.state.write().user_info = next.clone();
        next
    }

    /// Disconnects the wallet. On failure the displayed state is kept as is.
    pub async fn disconnect(&self) -> Result<(), ConnectError> {
        if let Err(e) = self.wallet.disconnect().await {
            error!(error = %e, "Error disconnecting");
            return Err(e.into());
        }

        let mut state = self.state.write();
        state.status = ConnectionStatus::Disconnected;
        state.address = None;
        state.chain_id = None;
        state.invalidate_account_data();
        info!("wallet disconnected");
        Ok(())
    }

    /// Sends the configured demo amount to the recipient entered by the user.
    pub async fn send_demo_transfer(
        &self,
        signer: &dyn TransferSigner,
    ) -> Result<B256, ConnectError> {
        let recipient = self.state.read().recipient.clone();
        self.send_transaction(&recipient, self.transfer_amount, signer)
            .await
    }

    /// Submits a value transfer through `signer`.
    ///
    /// Rejected up front, without touching the state, when the recipient is
    /// empty or another send is still running. Anything that goes wrong after
    /// that settles the attempt as `Failed`.
    pub async fn send_transaction(
        &self,
        recipient: &str,
        amount: U256,
        signer: &dyn TransferSigner,
    ) -> Result<B256, ConnectError> {
        if recipient.trim().is_empty() {
            return Err(ConnectError::EmptyRecipient);
        }

        let Some(flag) = InFlight::acquire(&self.send_in_flight) else {
            warn!("send requested while another is in flight");
            return Err(ConnectError::SendInFlight);
        };

        self.state.write().tx = TxPhase::Sending;
        let attempt = SendAttempt {
            state: &self.state,
            settled: false,
            _flag: flag,
        };

        match self.submit(recipient, amount, signer).await {
            Ok((hash, chain_id)) => {
                info!(%hash, chain_id, backend = signer.name(), "Transaction sent");
                attempt.settle(TxPhase::Succeeded { hash, chain_id });
                Ok(hash)
            }
            Err(e) => {
                error!(error = %e, backend = signer.name(), "Failed to send transaction");
                attempt.settle(TxPhase::Failed(e.to_string()));
                Err(e)
            }
        }
    }

    /// Returns the hash and the chain the transfer was submitted on.
    async fn submit(
        &self,
        recipient: &str,
        amount: U256,
        signer: &dyn TransferSigner,
    ) -> Result<(B256, u64), ConnectError> {
        let (from, chain_id) = {
            let state = self.state.read();
            (state.address, state.chain_id)
        };
        let chain_id = chain_id.ok_or(ConnectError::NotConnected)?;

        let request = build_transfer(chain_id, from, recipient, amount)?;
        debug!(to = %request.to, value = %request.value, chain_id, "submitting transfer");

        let hash = signer.submit_transfer(&request).await?;
        Ok((hash, request.chain_id))
    }

    /// Copies the full connected address. No-op while disconnected.
    pub async fn copy_address(&self, notifier: &ClipboardNotifier) -> CopyOutcome {
        let address = self.state.read().address_string();
        notifier.copy(&address, None).await
    }

    /// Explorer link for the last successful transaction, on the chain it
    /// was submitted to.
    pub fn tx_notice(&self) -> Option<TxNotice> {
        self.state.read().tx.notice()
    }
}
