use alloy_primitives::U256;

use crate::error::EthError;

/// One ether expressed in wei (10^18).
pub fn wei_per_ether() -> U256 {
    U256::from(1_000_000_000_000_000_000u64)
}

/// Converts a wei amount into an ether decimal string.
///
/// The fractional part keeps every significant digit and drops trailing zeros,
/// so whole amounts render without a decimal point:
/// `10^18` -> `"1"`, `10^16` -> `"0.01"`, `0` -> `"0"`.
pub fn format_ether(wei: U256) -> String {
    let formatted = alloy_primitives::utils::format_ether(wei);
    match formatted.split_once('.') {
        Some((integer, fraction)) => match fraction.trim_end_matches('0') {
            "" => integer.to_string(),
            trimmed => format!("{integer}.{trimmed}"),
        },
        None => formatted,
    }
}

/// Parses an ether decimal string (e.g. `"0.01"`) into wei.
pub fn parse_ether(amount: &str) -> Result<U256, EthError> {
    let amount = amount.trim();
    if amount.is_empty() {
        return Err(EthError::InvalidAmount("amount is empty".into()));
    }

    alloy_primitives::utils::parse_ether(amount)
        .map_err(|e| EthError::InvalidAmount(format!("{amount}: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_one_ether() {
        assert_eq!(format_ether(wei_per_ether()), "1");
    }

    #[test]
    fn format_zero() {
        assert_eq!(format_ether(U256::ZERO), "0");
    }

    #[test]
    fn format_hundredth() {
        assert_eq!(format_ether(U256::from(10_000_000_000_000_000u64)), "0.01");
    }

    #[test]
    fn format_single_wei() {
        assert_eq!(format_ether(U256::from(1u64)), "0.000000000000000001");
    }

    #[test]
    fn format_keeps_all_significant_digits() {
        // 1.234567891234567891 ETH
        let wei = U256::from(1_234_567_891_234_567_891u64);
        assert_eq!(format_ether(wei), "1.234567891234567891");
    }

    #[test]
    fn format_large_balance() {
        let wei = wei_per_ether() * U256::from(1_000_000u64) + U256::from(500_000_000_000_000_000u64);
        assert_eq!(format_ether(wei), "1000000.5");
    }

    #[test]
    fn parse_demo_amount() {
        assert_eq!(
            parse_ether("0.01").unwrap(),
            U256::from(10_000_000_000_000_000u64)
        );
    }

    #[test]
    fn parse_whole_ether() {
        assert_eq!(parse_ether("1").unwrap(), wei_per_ether());
    }

    #[test]
    fn parse_then_format_is_stable() {
        let wei = parse_ether("12.5").unwrap();
        assert_eq!(format_ether(wei), "12.5");
    }

    #[test]
    fn parse_empty_errors() {
        assert!(matches!(parse_ether("  "), Err(EthError::InvalidAmount(_))));
    }

    #[test]
    fn parse_garbage_errors() {
        assert!(parse_ether("ten").is_err());
    }
}
