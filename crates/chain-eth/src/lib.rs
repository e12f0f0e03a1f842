//! Ethereum/EVM chain support for the connect demo.
//!
//! This crate provides:
//! - Ether/wei unit conversion without floating-point rounding
//! - Recipient address parsing (with EIP-55 checksum verification)
//! - Value-transfer request construction
//! - Definitions of the EVM networks the demo connects to

pub mod address;
pub mod chains;
pub mod error;
pub mod transaction;
pub mod units;
