use std::str::FromStr;

use alloy_primitives::Address;

use crate::error::EthError;

/// Parses a recipient address entered by the user.
///
/// Checks that the address has the correct format (0x + 40 hex characters).
/// If the address contains mixed case, the EIP-55 checksum must match.
/// Surrounding whitespace is ignored.
pub fn parse_address(input: &str) -> Result<Address, EthError> {
    let address = input.trim();

    let hex_part = address
        .strip_prefix("0x")
        .or_else(|| address.strip_prefix("0X"))
        .ok_or_else(|| EthError::InvalidAddress("address must start with 0x".into()))?;

    if hex_part.len() != 40 {
        return Err(EthError::InvalidAddress(format!(
            "expected 40 hex characters, got {}",
            hex_part.len()
        )));
    }

    if !hex_part.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(EthError::InvalidAddress(
            "address contains non-hex characters".into(),
        ));
    }

    // All-lowercase or all-uppercase carries no checksum.
    let is_all_lower = hex_part.chars().all(|c| !c.is_ascii_uppercase());
    let is_all_upper = hex_part.chars().all(|c| !c.is_ascii_lowercase());

    if is_all_lower || is_all_upper {
        return Address::from_str(hex_part)
            .map_err(|e| EthError::InvalidAddress(e.to_string()));
    }

    Address::parse_checksummed(format!("0x{hex_part}"), None)
        .map_err(|_| EthError::InvalidAddress(format!("bad EIP-55 checksum: {address}")))
}
