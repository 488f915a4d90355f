//! Constants for the wallet core
//!
//! This module contains all constants used throughout the wallet core.

// Wallet constants
pub const VAULT_ENVELOPE_VERSION: u32 = 1;
pub const MNEMONIC_WORD_COUNT: usize = 12;
pub const MNEMONIC_ENTROPY_SIZE: usize = 16; // 128 bits -> 12 words
pub const DERIVATION_PATH: &str = "m/44'/60'/0'/0/0";
pub const DEFAULT_ADDRESS_PREFIX: &str = "inj";

// Security constants
pub const PRIVATE_KEY_SIZE: usize = 32;
pub const ADDRESS_SIZE: usize = 20;
pub const NONCE_SIZE: usize = 12;
pub const TAG_SIZE: usize = 16;
pub const SALT_SIZE: usize = 16;
pub const HASH_SIZE: usize = 32;
pub const RECOVERABLE_SIGNATURE_SIZE: usize = 65;

// Password constants
pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const PASSWORD_MAX_LENGTH: usize = 128;

// Cryptographic constants
pub const PBKDF2_ITERATIONS: u32 = 100_000;
pub const AES_KEY_SIZE: usize = 32;

// Storage constants
pub const DEFAULT_STORAGE_NAMESPACE: &str = "injective_wallet";
pub const DEFAULT_DATA_DIR_NAME: &str = "portal-wallet";
pub const ENCRYPTED_SECRET_KEY: &str = "injective_wallet_encrypted";
pub const ACCOUNT_ADDRESS_KEY: &str = "injective_wallet_address";
pub const STORAGE_FILE_EXTENSION: &str = "dat";
pub const MAX_STORAGE_KEY_LENGTH: usize = 100;

// Validation constants
pub const VALID_MNEMONIC_WORD_COUNTS: &[usize] = &[12, 15, 18, 21, 24];

// Balance constants
pub const NATIVE_DENOM: &str = "inj";
pub const NATIVE_DECIMALS: u8 = 18;
pub const BALANCE_DISPLAY_DECIMALS: u8 = 4;

// Logging
pub const DEFAULT_LOG_FILTER: &str = "info";

// Build information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_security_constants() {
        assert_eq!(PRIVATE_KEY_SIZE, 32);
        assert_eq!(HASH_SIZE, 32);
    }

    #[test]
    fn test_vault_layout_constants() {
        assert_eq!(SALT_SIZE, 16);
        assert_eq!(NONCE_SIZE, 12);
        assert_eq!(TAG_SIZE, 16);
        assert_eq!(PBKDF2_ITERATIONS, 100_000);
    }

    #[test]
    fn test_validation_constants() {
        assert!(VALID_MNEMONIC_WORD_COUNTS.contains(&MNEMONIC_WORD_COUNT));
        assert_eq!(MNEMONIC_ENTROPY_SIZE * 8 / 32 * 3, MNEMONIC_WORD_COUNT);
    }
}
