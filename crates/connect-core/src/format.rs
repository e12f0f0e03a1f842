//! Display formatting for balances, addresses and transaction hashes.
//!
//! Everything here is pure and never panics, whatever the input.

use alloy_primitives::U256;
use chain_eth::units::format_ether;

/// Maximum number of fractional digits kept by [`format_balance`].
pub const BALANCE_FRACTION_DIGITS: usize = 5;

/// Filler used when a balance has no fractional part.
const EMPTY_FRACTION: &str = "0000";

/// Leading characters kept by [`truncate_address`].
const ADDRESS_HEAD: usize = 6;

/// Trailing characters kept by [`truncate_address`].
const ADDRESS_TAIL: usize = 4;

/// Formats an ether decimal string for display.
///
/// The integer part is kept unchanged. The fractional part is truncated (not
/// rounded) to at most five digits; the sixth digit onwards is never looked at.
/// A missing or empty fractional part is rendered as `0000`. Short fractions
/// are not padded: `"0.1"` stays `"0.1"`.
pub fn format_balance(balance: &str) -> String {
    let mut parts = balance.split('.');
    let integer = parts.next().unwrap_or_default();
    let fraction = match parts.next() {
        Some(digits) if !digits.is_empty() => {
            digits.chars().take(BALANCE_FRACTION_DIGITS).collect::<String>()
        }
        _ => EMPTY_FRACTION.to_string(),
    };

    format!("{integer}.{fraction}")
}

/// Formats a raw wei balance as returned by a chain client.
pub fn format_wei_balance(wei: U256) -> String {
    format_balance(&format_ether(wei))
}

/// Shortens an address or hash to `0x1234...abcd`.
///
/// Empty input yields an empty string. Inputs shorter than ten characters are
/// not rejected: the head and tail overlap. Below four characters the tail
/// offset `len - 4` counts back from the end once more, so `"abc"` keeps only
/// `"c"` and anything shorter is kept whole.
pub fn truncate_address(address: &str) -> String {
    if address.is_empty() {
        return String::new();
    }

    let len = address.chars().count();
    let tail_start = if len >= ADDRESS_TAIL {
        len - ADDRESS_TAIL
    } else {
        len.saturating_sub(ADDRESS_TAIL - len)
    };
    let head: String = address.chars().take(ADDRESS_HEAD).collect();
    let tail: String = address.chars().skip(tail_start).collect();

    format!("{head}...{tail}")
}
