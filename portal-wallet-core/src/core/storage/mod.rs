//! Secure storage functionality
//!
//! [`SecretVault`] encrypts wallet secrets under the user's password and
//! [`WalletStore`] persists the result.

pub mod vault;
pub mod wallet_store;

pub use vault::*;
pub use wallet_store::*;
