//! Runtime configuration for the wallet core
//!
//! Values come from `WALLET_CORE_*` environment variables (an optional `.env`
//! file is loaded first) layered over built-in defaults.

use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::utils::validate_storage_key;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub const ENV_PREFIX: &str = "WALLET_CORE";

/// Resolved wallet core configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletCoreConfig {
    /// Root directory for durable wallet storage
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
    /// Subdirectory of `data_dir` scoping this application's keys
    pub storage_namespace: String,
    /// Bech32 human-readable prefix for account addresses
    pub address_prefix: String,
    pub min_password_length: usize,
    pub log_filter: String,
}

fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("./secure_storage"))
        .join(DEFAULT_DATA_DIR_NAME)
}

impl Default for WalletCoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            storage_namespace: DEFAULT_STORAGE_NAMESPACE.to_string(),
            address_prefix: DEFAULT_ADDRESS_PREFIX.to_string(),
            min_password_length: PASSWORD_MIN_LENGTH,
            log_filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

impl WalletCoreConfig {
    /// Load from `.env` and the process environment
    pub fn load() -> Result<Self, WalletError> {
        dotenv::dotenv().ok();
        Self::build(config::Environment::with_prefix(ENV_PREFIX).try_parsing(true))
    }

    /// Load from an explicit variable map instead of the process environment
    pub fn load_from_vars(vars: HashMap<String, String>) -> Result<Self, WalletError> {
        let source = vars.into_iter().collect();
        Self::build(
            config::Environment::with_prefix(ENV_PREFIX)
                .try_parsing(true)
                .source(Some(source)),
        )
    }

    fn build(environment: config::Environment) -> Result<Self, WalletError> {
        let settings = config::Config::builder()
            .set_default("storage_namespace", DEFAULT_STORAGE_NAMESPACE)?
            .set_default("address_prefix", DEFAULT_ADDRESS_PREFIX)?
            .set_default("min_password_length", PASSWORD_MIN_LENGTH as i64)?
            .set_default("log_filter", DEFAULT_LOG_FILTER)?
            .add_source(environment)
            .build()?;

        let config: WalletCoreConfig = settings.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), WalletError> {
        validate_storage_key(&self.storage_namespace)
            .map_err(|e| WalletError::config(format!("storage_namespace: {}", e)))?;

        let hrp = bech32::Hrp::parse(&self.address_prefix)
            .map_err(|e| WalletError::config(format!("address_prefix: {}", e)))?;
        if hrp.as_str() != self.address_prefix.to_lowercase() {
            return Err(WalletError::config("address_prefix must be lower-case"));
        }

        if self.min_password_length == 0 || self.min_password_length > PASSWORD_MAX_LENGTH {
            return Err(WalletError::config(format!(
                "min_password_length must be between 1 and {}",
                PASSWORD_MAX_LENGTH
            )));
        }

        Ok(())
    }

    /// Directory holding this application's wallet files
    pub fn storage_dir(&self) -> PathBuf {
        self.data_dir.join(&self.storage_namespace)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_defaults() {
        let config = WalletCoreConfig::load_from_vars(HashMap::new())
            .expect("Failed to load default config");
        assert_eq!(config.storage_namespace, DEFAULT_STORAGE_NAMESPACE);
        assert_eq!(config.address_prefix, "inj");
        assert_eq!(config.min_password_length, 8);
        assert_eq!(config.log_filter, "info");
        assert!(config.data_dir.ends_with(DEFAULT_DATA_DIR_NAME));
    }

    #[test]
    fn test_environment_overrides() {
        let config = WalletCoreConfig::load_from_vars(vars(&[
            ("WALLET_CORE_DATA_DIR", "/tmp/portal-test"),
            ("WALLET_CORE_STORAGE_NAMESPACE", "testnet_wallet"),
            ("WALLET_CORE_MIN_PASSWORD_LENGTH", "12"),
            ("WALLET_CORE_LOG_FILTER", "debug"),
        ]))
        .expect("Failed to load config");

        assert_eq!(config.data_dir, PathBuf::from("/tmp/portal-test"));
        assert_eq!(config.storage_namespace, "testnet_wallet");
        assert_eq!(config.min_password_length, 12);
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.storage_dir(), PathBuf::from("/tmp/portal-test/testnet_wallet"));
    }

    #[test]
    fn test_invalid_namespace_rejected() {
        let result = WalletCoreConfig::load_from_vars(vars(&[
            ("WALLET_CORE_STORAGE_NAMESPACE", "../escape"),
        ]));
        assert!(matches!(result, Err(WalletError::Config(_))));
    }

    #[test]
    fn test_invalid_password_length_rejected() {
        let mut config = WalletCoreConfig::default();
        config.min_password_length = 0;
        assert!(config.validate().is_err());
        config.min_password_length = 129;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_prefix_rejected() {
        let mut config = WalletCoreConfig::default();
        config.address_prefix = "INJ".to_string();
        assert!(config.validate().is_err());
        config.address_prefix = String::new();
        assert!(config.validate().is_err());
    }
}
