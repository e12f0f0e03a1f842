use alloy_primitives::B256;
use thiserror::Error;

use crate::config::ConfigError;

/// Failures reported by the wallet provider or chain client.
#[derive(Debug, Clone, Error)]
pub enum ProviderError {
    #[error("User info unavailable: {0}")]
    UserInfoUnavailable(String),

    #[error("Provider request failed: {0}")]
    Request(String),

    #[error("Disconnect failed: {0}")]
    Disconnect(String),
}

/// Failures reported by a signer backend.
#[derive(Debug, Clone, Error)]
pub enum SignerError {
    #[error("Transaction rejected: {0}")]
    Rejected(String),

    #[error("Broadcast failed: {0}")]
    Broadcast(String),

    #[error("No receipt returned for transaction {0}")]
    MissingReceipt(B256),

    #[error("Transaction {0} reverted")]
    Reverted(B256),
}

#[derive(Debug, Error)]
pub enum ConnectError {
    #[error("No wallet connected")]
    NotConnected,

    #[error("Recipient address is empty")]
    EmptyRecipient,

    #[error("A transaction is already being sent")]
    SendInFlight,

    #[error("A balance fetch is already running")]
    BalanceFetchInFlight,

    #[error("Connection changed while the request was running")]
    ConnectionChanged,

    #[error(transparent)]
    Provider(#[from] ProviderError),

    #[error(transparent)]
    Signer(#[from] SignerError),

    #[error("ETH: {0}")]
    Eth(#[from] chain_eth::error::EthError),

    #[error("Config: {0}")]
    Config(#[from] ConfigError),

    #[error("Serialization failed: {0}")]
    Serialization(String),
}

impl From<serde_json::Error> for ConnectError {
    fn from(e: serde_json::Error) -> Self {
        ConnectError::Serialization(e.to_string())
    }
}
