//! Hashing functionality for the wallet core
//!
//! Keccak-256, the digest behind address derivation and message signing.

pub mod hash_manager;

// Re-export all public items from submodules
pub use hash_manager::*;
