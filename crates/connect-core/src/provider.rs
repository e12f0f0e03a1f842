//! Seams to the external wallet SDK.
//!
//! Nothing in this module is implemented here: the host application supplies
//! adapters for its wallet/auth provider, chain client and signing clients.

use alloy_primitives::{Address, B256, U256};
use async_trait::async_trait;
use chain_eth::transaction::TransferRequest;

use crate::error::ProviderError;
use crate::types::{ConnectionStatus, UserInfo};

/// Wallet/auth provider: who is connected, on which chain.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    fn status(&self) -> ConnectionStatus;

    /// Connected account, `None` when disconnected.
    fn address(&self) -> Option<Address>;

    /// Active chain, `None` when disconnected.
    fn chain_id(&self) -> Option<u64>;

    /// Profile lookup. Fails for wallet types without a profile.
    async fn user_info(&self) -> Result<UserInfo, ProviderError>;

    async fn disconnect(&self) -> Result<(), ProviderError>;
}

/// Read access to the active chain.
#[async_trait]
pub trait ChainClient: Send + Sync {
    /// Native balance of `address` in wei.
    async fn get_balance(&self, address: Address) -> Result<U256, ProviderError>;
}

/// The wallet's own client: signs and broadcasts in one call.
#[async_trait]
pub trait WalletClient: Send + Sync {
    async fn send_transaction(&self, request: &TransferRequest) -> Result<B256, ProviderError>;
}

/// Mined transaction receipt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    pub transaction_hash: B256,
    pub block_number: Option<u64>,
    pub success: bool,
}

/// Generic provider adapter: broadcast returns a pending hash and the receipt
/// has to be awaited separately.
#[async_trait]
pub trait TransactionProvider: Send + Sync {
    async fn send_transaction(&self, request: &TransferRequest) -> Result<B256, ProviderError>;

    /// Waits for the transaction to be mined. `Ok(None)` means the provider
    /// gave up without a receipt.
    async fn wait_for_receipt(&self, hash: B256) -> Result<Option<Receipt>, ProviderError>;
}
