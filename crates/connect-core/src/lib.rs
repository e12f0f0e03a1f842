//! Framework-independent core of the wallet connect demo.
//!
//! - [`format`]: balance and address display helpers
//! - [`notify`]: clipboard copy with a toast
//! - [`orchestrator`]: connect → balance → send flow over the wallet SDK seams in [`provider`]
//! - [`signer`]: the two interchangeable transfer backends

pub mod config;
pub mod error;
pub mod format;
pub mod logging;
pub mod notify;
pub mod orchestrator;
pub mod provider;
pub mod signer;
pub mod types;

pub use config::ConnectConfig;
pub use error::ConnectError;
pub use format::{format_balance, format_wei_balance, truncate_address};
pub use notify::{ClipboardNotifier, CopyOutcome};
pub use orchestrator::Orchestrator;
pub use signer::{ProviderAdapterSigner, TransferSigner, WalletClientSigner};
pub use types::{ConnectionStatus, DisplayState, TxNotice, TxPhase, UserInfo, UserInfoState};
