use alloy_primitives::{Address, B256};
use serde::{Deserialize, Serialize};

use crate::format::truncate_address;

/// Wallet connection status as reported by the wallet provider
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ConnectionStatus {
    Connecting,
    Connected,
    Disconnected,
    #[default]
    Unknown,
}

impl ConnectionStatus {
    /// Status line shown to the user
    pub fn label(&self) -> &'static str {
        match self {
            ConnectionStatus::Connecting => "Connecting...",
            ConnectionStatus::Connected => "Connected",
            ConnectionStatus::Disconnected => "Disconnected",
            ConnectionStatus::Unknown => "Unknown",
        }
    }

    pub fn is_connected(&self) -> bool {
        matches!(self, ConnectionStatus::Connected)
    }
}

/// Profile of the connected user, when the wallet type has one
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserInfo {
    pub name: Option<String>,
    pub avatar: Option<String>,
}

impl UserInfo {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .filter(|n| !n.is_empty())
            .unwrap_or("N/A")
    }
}

/// Lifecycle of the user profile lookup
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "camelCase")]
pub enum UserInfoState {
    #[default]
    NotRequested,
    Loading,
    Loaded(UserInfo),
    /// Inline message explaining why no profile is shown
    Unavailable(String),
}

/// Transaction attempt state machine: `Idle -> Sending -> Succeeded | Failed`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "value", rename_all = "camelCase")]
pub enum TxPhase {
    #[default]
    Idle,
    Sending,
    /// Carries the chain the transaction was submitted on, which may no
    /// longer be the active one.
    #[serde(rename_all = "camelCase")]
    Succeeded { hash: B256, chain_id: u64 },
    Failed(String),
}

impl TxPhase {
    pub fn is_sending(&self) -> bool {
        matches!(self, TxPhase::Sending)
    }

    pub fn hash(&self) -> Option<B256> {
        match self {
            TxPhase::Succeeded { hash, .. } => Some(*hash),
            _ => None,
        }
    }

    /// Explorer link for a successful transaction.
    pub fn notice(&self) -> Option<TxNotice> {
        match self {
            TxPhase::Succeeded { hash, chain_id } => TxNotice::new(*chain_id, *hash),
            _ => None,
        }
    }

    /// Label for the send button
    pub fn button_label(&self, amount: &str) -> String {
        if self.is_sending() {
            "Sending...".to_string()
        } else {
            format!("Send {amount}")
        }
    }
}

/// Link to a submitted transaction on the chain's block explorer
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TxNotice {
    pub hash: B256,
    pub short_hash: String,
    pub explorer_url: String,
}

impl TxNotice {
    /// Builds the notice for a hash on a given chain. Unknown chains have no
    /// explorer and yield `None`.
    pub fn new(chain_id: u64, hash: B256) -> Option<Self> {
        let chain = chain_eth::chains::get_chain(chain_id)?;
        Some(Self {
            hash,
            short_hash: truncate_address(&hash.to_string()),
            explorer_url: chain.tx_url(&hash),
        })
    }
}

/// Everything a view needs to render the connected wallet.
///
/// Owned by the orchestrator and only mutated through its operations; views
/// receive clones.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DisplayState {
    pub status: ConnectionStatus,
    pub address: Option<Address>,
    pub chain_id: Option<u64>,
    /// Formatted balance; `None` until the first successful fetch
    pub balance: Option<String>,
    pub user_info: UserInfoState,
    pub recipient: String,
    pub tx: TxPhase,
}

impl DisplayState {
    /// Checksummed address, or an empty string when disconnected
    pub fn address_string(&self) -> String {
        self.address
            .map(|a| a.to_checksum(None))
            .unwrap_or_default()
    }

    pub fn short_address(&self) -> String {
        truncate_address(&self.address_string())
    }

    pub fn balance_label(&self) -> &str {
        self.balance.as_deref().unwrap_or("Loading...")
    }

    pub fn can_send(&self) -> bool {
        !self.recipient.trim().is_empty() && !self.tx.is_sending()
    }

    /// Drops everything derived from the previous account or chain. An
    /// in-flight send keeps its phase until it settles.
    pub(crate) fn invalidate_account_data(&mut self) {
        self.balance = None;
        self.user_info = UserInfoState::NotRequested;
        if !self.tx.is_sending() {
            self.tx = TxPhase::Idle;
        }
    }
}
