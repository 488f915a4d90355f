//! Digital signature functionality for the wallet core
//!
//! Recoverable ECDSA over Keccak-256 message digests.

pub mod signature_manager;
pub mod message_signature;

// Re-export all public items from submodules
pub use signature_manager::*;
pub use message_signature::*;
