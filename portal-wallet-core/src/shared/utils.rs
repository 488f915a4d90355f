//! Utility functions for the wallet core
//!
//! This module contains common utility functions used throughout the wallet core.

use crate::shared::constants::*;
use crate::shared::error::WalletError;
use rand_core::OsRng;
use rand_core::RngCore;
use zeroize::Zeroizing;

/// Whether the input looks like a raw private key: 64 hex chars, optional `0x`.
pub fn is_private_key_hex(input: &str) -> bool {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);
    body.len() == PRIVATE_KEY_SIZE * 2 && body.chars().all(|c| c.is_ascii_hexdigit())
}

/// Trim, collapse whitespace and lower-case a seed phrase before validation
///
/// Built in place in a single zeroizing buffer so no per-word copies linger.
pub fn normalize_seed_phrase(seed_phrase: &str) -> Zeroizing<String> {
    // Lower-casing can grow non-ASCII input; reserve enough to avoid reallocating
    let mut normalized = Zeroizing::new(String::with_capacity(seed_phrase.len() * 3));
    for word in seed_phrase.split_whitespace() {
        if !normalized.is_empty() {
            normalized.push(' ');
        }
        normalized.extend(word.chars().flat_map(char::to_lowercase));
    }
    normalized
}

/// Validate password length against the configured minimum
pub fn validate_password(password: &str, min_length: usize) -> Result<(), WalletError> {
    let length = password.chars().count();
    if length < min_length {
        return Err(WalletError::validation(format!(
            "Password must be at least {} characters long",
            min_length
        )));
    }

    if length > PASSWORD_MAX_LENGTH {
        return Err(WalletError::validation(format!(
            "Password must be at most {} characters long",
            PASSWORD_MAX_LENGTH
        )));
    }

    Ok(())
}

/// Validate a key name for the key-value store
pub fn validate_storage_key(key: &str) -> Result<(), WalletError> {
    if key.is_empty() {
        return Err(WalletError::storage("Storage key cannot be empty"));
    }

    if key.len() > MAX_STORAGE_KEY_LENGTH {
        return Err(WalletError::storage("Storage key too long"));
    }

    if !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-') {
        return Err(WalletError::storage(format!("Storage key contains invalid characters: {}", key)));
    }

    Ok(())
}

/// Format a base-unit amount with decimals
pub fn format_amount(amount: &str, decimals: u8) -> Result<String, WalletError> {
    if amount.is_empty() {
        return Err(WalletError::validation("Amount cannot be empty"));
    }

    // Parse as u128 to handle large numbers
    let amount_u128 = amount.parse::<u128>()
        .map_err(|_| WalletError::validation("Invalid amount format"))?;

    let amount_str = amount_u128.to_string();
    let decimals = decimals as usize;

    if decimals == 0 {
        return Ok(amount_str);
    }

    if amount_str.len() <= decimals {
        let mut formatted = "0.".to_string();
        formatted.push_str(&"0".repeat(decimals - amount_str.len()));
        formatted.push_str(&amount_str);
        Ok(formatted)
    } else {
        let mut formatted = amount_str.clone();
        let decimal_pos = formatted.len() - decimals;
        formatted.insert(decimal_pos, '.');
        Ok(formatted)
    }
}

/// Cut a formatted decimal string down to `places` fractional digits (no rounding)
pub fn truncate_decimals(formatted: &str, places: u8) -> String {
    let places = places as usize;
    match formatted.split_once('.') {
        Some((whole, fraction)) => {
            if places == 0 {
                return whole.to_string();
            }
            let mut fraction: String = fraction.chars().take(places).collect();
            while fraction.len() < places {
                fraction.push('0');
            }
            format!("{}.{}", whole, fraction)
        }
        None if places == 0 => formatted.to_string(),
        None => format!("{}.{}", formatted, "0".repeat(places)),
    }
}

/// Fill a buffer from the OS entropy source.
///
/// The only failure mode is the platform RNG being unavailable, which is fatal.
pub fn fill_secure_random(buffer: &mut [u8]) -> Result<(), WalletError> {
    OsRng
        .try_fill_bytes(buffer)
        .map_err(|e| WalletError::entropy(e.to_string()))
}

/// Generate secure random bytes
pub fn generate_secure_random_bytes(length: usize) -> Result<Vec<u8>, WalletError> {
    let mut bytes = vec![0u8; length];
    fill_secure_random(&mut bytes)?;
    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_private_key_hex() {
        let key = "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef";
        assert!(is_private_key_hex(key));
        assert!(is_private_key_hex(&format!("0x{}", key)));
        assert!(is_private_key_hex(&format!("  0x{}\n", key)));
        assert!(!is_private_key_hex(&key[1..]));
        assert!(!is_private_key_hex("abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon abandon about"));
    }

    #[test]
    fn test_normalize_seed_phrase() {
        assert_eq!(
            normalize_seed_phrase("  Abandon   ABOUT\tzoo \n").as_str(),
            "abandon about zoo"
        );
        assert_eq!(normalize_seed_phrase("").as_str(), "");
    }

    #[test]
    fn test_validate_password() {
        assert!(validate_password("password123", PASSWORD_MIN_LENGTH).is_ok());
        assert!(validate_password(&"a".repeat(8), PASSWORD_MIN_LENGTH).is_ok());
        assert!(validate_password(&"a".repeat(128), PASSWORD_MIN_LENGTH).is_ok());

        assert!(validate_password("short", PASSWORD_MIN_LENGTH).is_err());
        assert!(validate_password(&"a".repeat(129), PASSWORD_MIN_LENGTH).is_err());
        assert!(validate_password("short", 4).is_ok());
    }

    #[test]
    fn test_validate_storage_key() {
        assert!(validate_storage_key("injective_wallet_encrypted").is_ok());
        assert!(validate_storage_key("a-b_c9").is_ok());
        assert!(validate_storage_key("").is_err());
        assert!(validate_storage_key("../etc/passwd").is_err());
        assert!(validate_storage_key("with space").is_err());
        assert!(validate_storage_key(&"k".repeat(101)).is_err());
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount("1000000", 6)
            .expect("Failed to format amount"), "1.000000");
        assert_eq!(format_amount("100000", 6)
            .expect("Failed to format amount"), "0.100000");
        assert_eq!(format_amount("1500000000000000000", 18)
            .expect("Failed to format amount"), "1.500000000000000000");
        assert_eq!(format_amount("42", 0)
            .expect("Failed to format amount"), "42");
        assert!(format_amount("", 6).is_err());
        assert!(format_amount("12.5", 6).is_err());
    }

    #[test]
    fn test_truncate_decimals() {
        assert_eq!(truncate_decimals("1.500000000000000000", 4), "1.5000");
        assert_eq!(truncate_decimals("0.123456", 4), "0.1234");
        assert_eq!(truncate_decimals("0.1", 4), "0.1000");
        assert_eq!(truncate_decimals("7", 4), "7.0000");
        assert_eq!(truncate_decimals("7.99", 0), "7");
    }

    #[test]
    fn test_random_bytes() {
        let bytes1 = generate_secure_random_bytes(32).expect("rng");
        let bytes2 = generate_secure_random_bytes(32).expect("rng");
        assert_eq!(bytes1.len(), 32);
        assert_eq!(bytes2.len(), 32);
        assert_ne!(bytes1, bytes2);
    }
}
