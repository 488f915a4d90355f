//! Encryption functionality for the wallet core
//!
//! AES-256-GCM authenticated encryption and the salt/nonce/ciphertext blob layout.

pub mod encryption_manager;
pub mod encrypted_data;

// Re-export all public items from submodules
pub use encryption_manager::*;
pub use encrypted_data::*;
