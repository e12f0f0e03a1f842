//! Signer backends.
//!
//! Both backends expose the same capability, "submit a transfer and return its
//! hash", so the orchestrator never branches on which one it was given.

use alloy_primitives::B256;
use async_trait::async_trait;
use chain_eth::transaction::TransferRequest;
use tracing::{debug, warn};

use crate::error::SignerError;
use crate::provider::{TransactionProvider, WalletClient};

#[async_trait]
pub trait TransferSigner: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    async fn submit_transfer(&self, request: &TransferRequest) -> Result<B256, SignerError>;
}

/// Signs through the connected wallet's native client.
pub struct WalletClientSigner<C> {
    client: C,
}

impl<C: WalletClient> WalletClientSigner<C> {
    pub fn new(client: C) -> Self {
        Self { client }
    }
}

#[async_trait]
impl<C: WalletClient> TransferSigner for WalletClientSigner<C> {
    fn name(&self) -> &'static str {
        "wallet-client"
    }

    async fn submit_transfer(&self, request: &TransferRequest) -> Result<B256, SignerError> {
        self.client
            .send_transaction(request)
            .await
            .map_err(|e| SignerError::Rejected(e.to_string()))
    }
}

/// Signs through a generic provider adapter and waits for the receipt.
pub struct ProviderAdapterSigner<P> {
    provider: P,
}

impl<P: TransactionProvider> ProviderAdapterSigner<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }
}

#[async_trait]
impl<P: TransactionProvider> TransferSigner for ProviderAdapterSigner<P> {
    fn name(&self) -> &'static str {
        "provider-adapter"
    }

    async fn submit_transfer(&self, request: &TransferRequest) -> Result<B256, SignerError> {
        let pending = self
            .provider
            .send_transaction(request)
            .await
            .map_err(|e| SignerError::Rejected(e.to_string()))?;
        debug!(%pending, "transaction broadcast, waiting for receipt");

        match self.provider.wait_for_receipt(pending).await {
            Ok(Some(receipt)) if receipt.success => Ok(receipt.transaction_hash),
            Ok(Some(receipt)) => {
                warn!(hash = %receipt.transaction_hash, block = ?receipt.block_number, "transaction reverted");
                Err(SignerError::Reverted(receipt.transaction_hash))
            }
            Ok(None) => {
                warn!(%pending, "provider returned no receipt");
                Err(SignerError::MissingReceipt(pending))
            }
            Err(e) => Err(SignerError::Broadcast(e.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::provider::Receipt;
    use alloy_primitives::U256;
    use chain_eth::transaction::build_transfer;

    struct EchoClient(Result<B256, ProviderError>);

    #[async_trait]
    impl WalletClient for EchoClient {
        async fn send_transaction(&self, _: &TransferRequest) -> Result<B256, ProviderError> {
            self.0.clone()
        }
    }

    struct ReceiptProvider(Option<Receipt>);

    #[async_trait]
    impl TransactionProvider for ReceiptProvider {
        async fn send_transaction(&self, _: &TransferRequest) -> Result<B256, ProviderError> {
            Ok(B256::repeat_byte(0x0a))
        }

        async fn wait_for_receipt(&self, _: B256) -> Result<Option<Receipt>, ProviderError> {
            Ok(self.0.clone())
        }
    }

    fn request() -> TransferRequest {
        build_transfer(
            11155111,
            None,
            "0x000000000000000000000000000000000000dEaD",
            U256::from(1u64),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn wallet_client_returns_hash() {
        let signer = WalletClientSigner::new(EchoClient(Ok(B256::repeat_byte(0x42))));
        assert_eq!(signer.submit_transfer(&request()).await.unwrap(), B256::repeat_byte(0x42));
    }

    #[tokio::test]
    async fn wallet_client_rejection_is_mapped() {
        let signer = WalletClientSigner::new(EchoClient(Err(ProviderError::Request(
            "user rejected".into(),
        ))));
        let err = signer.submit_transfer(&request()).await.unwrap_err();
        assert!(matches!(err, SignerError::Rejected(msg) if msg.contains("user rejected")));
    }

    #[tokio::test]
    async fn provider_adapter_returns_receipt_hash() {
        let receipt = Receipt {
            transaction_hash: B256::repeat_byte(0x0a),
            block_number: Some(7),
            success: true,
        };
        let signer = ProviderAdapterSigner::new(ReceiptProvider(Some(receipt)));
        assert_eq!(signer.submit_transfer(&request()).await.unwrap(), B256::repeat_byte(0x0a));
    }

    #[tokio::test]
    async fn provider_adapter_without_receipt_is_an_error() {
        let signer = ProviderAdapterSigner::new(ReceiptProvider(None));
        let err = signer.submit_transfer(&request()).await.unwrap_err();
        assert!(matches!(err, SignerError::MissingReceipt(h) if h == B256::repeat_byte(0x0a)));
    }

    #[tokio::test]
    async fn provider_adapter_reverted_receipt_is_an_error() {
        let receipt = Receipt {
            transaction_hash: B256::repeat_byte(0x09),
            block_number: Some(12),
            success: false,
        };
        let signer = ProviderAdapterSigner::new(ReceiptProvider(Some(receipt)));
        let err = signer.submit_transfer(&request()).await.unwrap_err();
        assert!(matches!(err, SignerError::Reverted(h) if h == B256::repeat_byte(0x09)));
    }

    #[tokio::test]
    async fn backends_are_interchangeable() {
        let backends: Vec<Box<dyn TransferSigner>> = vec![
            Box::new(WalletClientSigner::new(EchoClient(Ok(B256::repeat_byte(0x0a))))),
            Box::new(ProviderAdapterSigner::new(ReceiptProvider(Some(Receipt {
                transaction_hash: B256::repeat_byte(0x0a),
                block_number: None,
                success: true,
            })))),
        ];

        for backend in &backends {
            assert_eq!(
                backend.submit_transfer(&request()).await.unwrap(),
                B256::repeat_byte(0x0a),
                "{} should return the hash",
                backend.name()
            );
        }
    }
}
