//! Portal Wallet Core
//!
//! Self-custodial wallet core for the Injective ecosystem portal.
//! Handles key generation, encryption at rest and the lock/unlock session
//! in Rust.
//!
//! ## Architecture
//!
//! - **Core**: wallet session, crypto, encrypted storage
//! - **Domain**: entities and the balance interface
//! - **Infrastructure**: platform storage backends
//! - **Shared**: common types, constants, configuration and errors
//!
//! ## Security Features
//!
//! - Secrets held in zeroizing buffers, never logged
//! - PBKDF2-SHA256 (100,000 iterations) feeding AES-256-GCM at rest
//! - Explicit session object with no ambient global state
//!
//! ## Usage
//!
//! ```no_run
//! use std::sync::Arc;
//! use portal_wallet_core::{MemoryStorage, WalletCoreConfig, WalletSession};
//!
//! # async fn demo() -> Result<(), portal_wallet_core::WalletError> {
//! let config = WalletCoreConfig::load()?;
//! let mut session = WalletSession::open(Arc::new(MemoryStorage::new()), &config)?;
//!
//! let created = session.create_wallet("correct-horse-battery").await?;
//! println!("Back up these words: {}", created.mnemonic.as_str());
//!
//! let signature = session.sign_message(b"Welcome to the portal")?;
//! println!("{}", signature.signature);
//!
//! session.lock_wallet()?;
//! # Ok(())
//! # }
//! ```

pub mod core;
pub mod domain;
pub mod shared;
pub mod infrastructure;

#[cfg(feature = "ffi")]
pub mod ffi;

// Re-export specific components
pub use crate::core::wallet::{CreatedWallet, WalletSession};
pub use crate::core::crypto::keys::{KeyManager, SecurePrivateKey, SecureSeedPhrase};
pub use crate::core::crypto::signatures::{MessageSignature, SignatureManager};
pub use crate::core::storage::{SecretVault, WalletStore};
pub use crate::infrastructure::platform::{FileStorage, MemoryStorage, PlatformStorage};

// Re-export domain entities
pub use crate::domain::entities::{WalletAccount, WalletSecret};
pub use crate::domain::repositories::{BalanceRepository, StaticBalanceRepository};

// Re-export shared types
pub use crate::shared::config::WalletCoreConfig;
pub use crate::shared::error::WalletError;
pub use crate::shared::types::{Balance, SessionStatus, WalletResult};

// Version information
pub use crate::shared::constants::{AUTHORS, DESCRIPTION, NAME, VERSION};

/// Initialize logging with the default filter
///
/// Safe to call more than once; later calls are no-ops.
pub fn init() {
    init_logging(shared::constants::DEFAULT_LOG_FILTER);
}

/// Load configuration and initialize logging with its filter
pub fn init_with_config() -> Result<WalletCoreConfig, WalletError> {
    let config = WalletCoreConfig::load()?;
    init_logging(&config.log_filter);
    log::info!("{} v{} initialized", NAME, VERSION);
    Ok(config)
}

fn init_logging(default_filter: &str) {
    let env = env_logger::Env::default().default_filter_or(default_filter);
    // Err only means a logger is already installed
    let _ = env_logger::Builder::from_env(env).try_init();
}
