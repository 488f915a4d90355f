//! Error handling for the wallet core
//!
//! This module defines the error types used throughout the wallet core.
//! Every failure reaches the caller as a [`WalletError`]; nothing is swallowed.

use thiserror::Error;

/// Wallet error type
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WalletError {
    #[error("Invalid mnemonic: {0}")]
    InvalidMnemonic(String),

    #[error("Invalid private key: {0}")]
    InvalidPrivateKey(String),

    #[error("Wrong password")]
    WrongPassword,

    #[error("Encrypted wallet data is corrupt: {0}")]
    CorruptBlob(String),

    #[error("Wallet is locked")]
    NotUnlocked,

    #[error("No wallet found")]
    NoWalletFound,

    #[error("No mnemonic available for a wallet imported from a private key")]
    NoMnemonicAvailable,

    #[error("Wallet already exists: {0}")]
    WalletAlreadyExists(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cryptographic error: {0}")]
    Crypto(String),

    #[error("Entropy source failure: {0}")]
    Entropy(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Create an invalid mnemonic error
    pub fn invalid_mnemonic(message: impl Into<String>) -> Self {
        Self::InvalidMnemonic(message.into())
    }

    /// Create an invalid private key error
    pub fn invalid_private_key(message: impl Into<String>) -> Self {
        Self::InvalidPrivateKey(message.into())
    }

    /// Create a corrupt blob error
    pub fn corrupt_blob(message: impl Into<String>) -> Self {
        Self::CorruptBlob(message.into())
    }

    /// Create a wallet already exists error
    pub fn wallet_already_exists(message: impl Into<String>) -> Self {
        Self::WalletAlreadyExists(message.into())
    }

    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Create a cryptographic error
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }

    /// Create an entropy error
    pub fn entropy(message: impl Into<String>) -> Self {
        Self::Entropy(message.into())
    }

    /// Create a storage error
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage(message.into())
    }

    /// Create a network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network(message.into())
    }

    /// Create a configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Whether the UI can recover by retrying with different input.
    ///
    /// A corrupt blob is terminal for the stored wallet: the user has to
    /// delete it and re-import from a backed-up mnemonic. An entropy failure
    /// means the platform RNG is unusable.
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, Self::CorruptBlob(_) | Self::Entropy(_))
    }

    /// Stable numeric code for the C ABI
    pub fn error_code(&self) -> i32 {
        match self {
            Self::InvalidMnemonic(_) => 1,
            Self::InvalidPrivateKey(_) => 2,
            Self::WrongPassword => 3,
            Self::CorruptBlob(_) => 4,
            Self::NotUnlocked => 5,
            Self::NoWalletFound => 6,
            Self::NoMnemonicAvailable => 7,
            Self::WalletAlreadyExists(_) => 8,
            Self::Validation(_) => 9,
            Self::Crypto(_) => 10,
            Self::Entropy(_) => 11,
            Self::Storage(_) => 12,
            Self::Network(_) => 13,
            Self::Config(_) => 14,
            Self::Internal(_) => 15,
        }
    }
}

// Standard library error conversions
impl From<std::io::Error> for WalletError {
    fn from(err: std::io::Error) -> Self {
        Self::storage(format!("IO error: {}", err))
    }
}

impl From<hex::FromHexError> for WalletError {
    fn from(err: hex::FromHexError) -> Self {
        Self::validation(format!("Hex decoding error: {}", err))
    }
}

impl From<serde_json::Error> for WalletError {
    fn from(err: serde_json::Error) -> Self {
        Self::storage(format!("JSON error: {}", err))
    }
}

impl From<base64::DecodeError> for WalletError {
    fn from(err: base64::DecodeError) -> Self {
        Self::corrupt_blob(format!("Base64 decoding error: {}", err))
    }
}

impl From<tokio::task::JoinError> for WalletError {
    fn from(err: tokio::task::JoinError) -> Self {
        Self::internal(format!("Task join error: {}", err))
    }
}

impl From<config::ConfigError> for WalletError {
    fn from(err: config::ConfigError) -> Self {
        Self::config(err.to_string())
    }
}

// Cryptographic error conversions
impl From<secp256k1::Error> for WalletError {
    fn from(err: secp256k1::Error) -> Self {
        Self::crypto(format!("Secp256k1 error: {}", err))
    }
}
