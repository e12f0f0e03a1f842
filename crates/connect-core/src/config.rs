//! Demo configuration.
//!
//! Credentials for the wallet SDK, the chains offered to the user, the amount
//! sent by the demo transfer and the default log filter.

use std::fs;
use std::path::Path;

use alloy_primitives::U256;
use chain_eth::chains::{get_chain, DEFAULT_CHAIN_IDS};
use chain_eth::units::parse_ether;
use serde::{Deserialize, Serialize};
use tracing::info;

pub const ENV_PROJECT_ID: &str = "CONNECT_PROJECT_ID";
pub const ENV_CLIENT_KEY: &str = "CONNECT_CLIENT_KEY";
pub const ENV_APP_ID: &str = "CONNECT_APP_ID";
pub const ENV_WALLETCONNECT_PROJECT_ID: &str = "CONNECT_WALLETCONNECT_PROJECT_ID";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectConfig {
    #[serde(default)]
    pub project_id: String,

    #[serde(default)]
    pub client_key: String,

    #[serde(default)]
    pub app_id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub walletconnect_project_id: Option<String>,

    /// Chain ids offered in the connect modal
    #[serde(default = "default_chains")]
    pub chains: Vec<u64>,

    /// Ether amount sent by the demo transfer
    #[serde(default = "default_transfer_amount")]
    pub transfer_amount: String,

    /// `tracing` filter used when `RUST_LOG` is not set
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_chains() -> Vec<u64> {
    DEFAULT_CHAIN_IDS.to_vec()
}

fn default_transfer_amount() -> String {
    "0.01".to_string()
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for ConnectConfig {
    fn default() -> Self {
        Self {
            project_id: String::new(),
            client_key: String::new(),
            app_id: String::new(),
            walletconnect_project_id: None,
            chains: default_chains(),
            transfer_amount: default_transfer_amount(),
            log_filter: default_log_filter(),
        }
    }
}

impl ConnectConfig {
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: ConnectConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        info!("Loading config from: {}", path.display());
        let contents = fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Build configuration from `CONNECT_*` environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required = |key: &'static str| lookup(key).ok_or(ConfigError::Missing(key));

        let config = Self {
            project_id: required(ENV_PROJECT_ID)?,
            client_key: required(ENV_CLIENT_KEY)?,
            app_id: required(ENV_APP_ID)?,
            walletconnect_project_id: lookup(ENV_WALLETCONNECT_PROJECT_ID)
                .filter(|id| !id.is_empty()),
            ..Self::default()
        };
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, value) in [
            ("project_id", &self.project_id),
            ("client_key", &self.client_key),
            ("app_id", &self.app_id),
        ] {
            if value.trim().is_empty() {
                return Err(ConfigError::Missing(name));
            }
        }

        if self.chains.is_empty() {
            return Err(ConfigError::NoChains);
        }
        if let Some(id) = self.chains.iter().find(|id| get_chain(**id).is_none()) {
            return Err(ConfigError::UnsupportedChain(*id));
        }

        self.transfer_amount_wei()?;
        Ok(())
    }

    /// Demo transfer amount in wei
    pub fn transfer_amount_wei(&self) -> Result<U256, ConfigError> {
        parse_ether(&self.transfer_amount)
            .map_err(|e| ConfigError::InvalidAmount(e.to_string()))
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Missing required setting: {0}")]
    Missing(&'static str),

    #[error("At least one chain must be configured")]
    NoChains,

    #[error("Unsupported chain id: {0}")]
    UnsupportedChain(u64),

    #[error("Invalid transfer amount: {0}")]
    InvalidAmount(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    const MINIMAL: &str = r#"
        project_id = "proj"
        client_key = "key"
        app_id = "app"
    "#;

    #[test]
    fn minimal_toml_uses_defaults() {
        let config = ConnectConfig::from_toml_str(MINIMAL).unwrap();
        assert_eq!(config.chains, vec![11155111, 84532, 43113]);
        assert_eq!(config.transfer_amount, "0.01");
        assert_eq!(config.log_filter, "info");
        assert_eq!(
            config.transfer_amount_wei().unwrap(),
            U256::from(10_000_000_000_000_000u64)
        );
    }

    #[test]
    fn missing_credentials_are_rejected() {
        let err = ConnectConfig::from_toml_str("project_id = \"p\"").unwrap_err();
        assert!(matches!(err, ConfigError::Missing("client_key")));
    }

    #[test]
    fn unknown_chain_is_rejected() {
        let toml = format!("{MINIMAL}\nchains = [1, 31337]");
        let err = ConnectConfig::from_toml_str(&toml).unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedChain(31337)));
    }

    #[test]
    fn bad_amount_is_rejected() {
        let toml = format!("{MINIMAL}\ntransfer_amount = \"lots\"");
        assert!(matches!(
            ConnectConfig::from_toml_str(&toml),
            Err(ConfigError::InvalidAmount(_))
        ));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        assert!(matches!(
            ConnectConfig::from_toml_str("project_id = "),
            Err(ConfigError::Toml(_))
        ));
    }

    #[test]
    fn env_lookup_builds_config() {
        let vars: HashMap<&str, &str> = [
            (ENV_PROJECT_ID, "proj"),
            (ENV_CLIENT_KEY, "key"),
            (ENV_APP_ID, "app"),
            (ENV_WALLETCONNECT_PROJECT_ID, ""),
        ]
        .into_iter()
        .collect();

        let config = ConnectConfig::from_lookup(|k| vars.get(k).map(|v| v.to_string())).unwrap();
        assert_eq!(config.project_id, "proj");
        assert_eq!(config.walletconnect_project_id, None);
    }

    #[test]
    fn env_lookup_reports_missing_variable() {
        let err = ConnectConfig::from_lookup(|_| None).unwrap_err();
        assert!(matches!(err, ConfigError::Missing(ENV_PROJECT_ID)));
    }

    #[test]
    fn load_reports_io_errors() {
        assert!(matches!(
            ConnectConfig::load("/nonexistent/connect.toml"),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn serialization_round_trip() {
        let config = ConnectConfig::from_toml_str(MINIMAL).unwrap();
        let toml = toml::to_string(&config).unwrap();
        let deserialized: ConnectConfig = toml::from_str(&toml).unwrap();
        assert_eq!(config, deserialized);
    }
}
