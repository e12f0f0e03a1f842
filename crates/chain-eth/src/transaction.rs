use alloy_primitives::{Address, Bytes, U256};
use serde::Serialize;

use crate::address::parse_address;
use crate::chains::get_chain;
use crate::error::EthError;

/// A native-asset value transfer handed to a signer backend.
///
/// Signing, nonce and fee selection belong to the wallet; this only carries
/// what the user asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    pub chain_id: u64,
    /// Sending account, when the wallet exposes one.
    pub from: Option<Address>,
    pub to: Address,
    /// Transfer value in wei.
    pub value: U256,
    /// Calldata (empty for simple transfers).
    pub data: Bytes,
}

impl TransferRequest {
    /// Whether this is a plain value transfer with no contract interaction.
    pub fn is_simple_transfer(&self) -> bool {
        self.data.is_empty()
    }
}

/// Builds a simple value transfer with an empty payload.
///
/// The recipient is parsed from user input and the chain must be one the
/// registry knows about.
pub fn build_transfer(
    chain_id: u64,
    from: Option<Address>,
    to: &str,
    value_wei: U256,
) -> Result<TransferRequest, EthError> {
    if get_chain(chain_id).is_none() {
        return Err(EthError::UnsupportedChain(chain_id));
    }

    let to = parse_address(to)?;

    Ok(TransferRequest {
        chain_id,
        from,
        to,
        value: value_wei,
        data: Bytes::new(),
    })
}
