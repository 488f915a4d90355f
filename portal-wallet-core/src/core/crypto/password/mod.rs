//! Password-based key derivation for the wallet core
//!
//! PBKDF2-HMAC-SHA256 turns the user's password into the vault's AES key.

pub mod password_hasher;
pub mod password_config;

// Re-export all public items from submodules
pub use password_hasher::*;
pub use password_config::*;
