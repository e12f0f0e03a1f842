use thiserror::Error;

/// Ethereum chain operation errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EthError {
    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("invalid amount: {0}")]
    InvalidAmount(String),

    #[error("unsupported chain: {0}")]
    UnsupportedChain(u64),
}
