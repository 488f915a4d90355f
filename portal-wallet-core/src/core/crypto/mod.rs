//! Cryptographic functionality for the wallet core
//!
//! Key generation and derivation, password-based key derivation, AES-256-GCM,
//! hashing and message signatures. Secret material is held in zeroizing
//! buffers throughout.

pub mod keys;
pub mod signatures;
pub mod encryption;
pub mod hashing;
pub mod password;

// Re-export all public items from submodules
pub use keys::*;
pub use signatures::*;
pub use encryption::*;
pub use hashing::*;
pub use password::*;
