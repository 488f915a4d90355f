use crate::shared::constants::*;
use crate::shared::error::WalletError;
use secp256k1::SecretKey;
use zeroize::Zeroizing;

/// secp256k1 private key held in a zeroize-on-drop buffer
///
/// Key bytes only leave this type through [`SecurePrivateKey::with_key`] or
/// [`SecurePrivateKey::to_hex`], both of which hand out zeroizing values.
pub struct SecurePrivateKey {
    bytes: Zeroizing<[u8; PRIVATE_KEY_SIZE]>,
}

impl SecurePrivateKey {
    /// Wrap raw key bytes, rejecting anything that is not a valid secp256k1 scalar
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        if bytes.len() != PRIVATE_KEY_SIZE {
            return Err(WalletError::invalid_private_key(format!(
                "Expected {} bytes, got {}",
                PRIVATE_KEY_SIZE,
                bytes.len()
            )));
        }

        let mut key = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        key.copy_from_slice(bytes);

        SecretKey::from_byte_array(*key)
            .map_err(|_| WalletError::invalid_private_key("Key is outside the curve order"))?;

        Ok(Self { bytes: key })
    }

    /// Parse 64 hex characters with an optional `0x` prefix
    pub fn from_hex(input: &str) -> Result<Self, WalletError> {
        let trimmed = input.trim();
        let body = trimmed
            .strip_prefix("0x")
            .or_else(|| trimmed.strip_prefix("0X"))
            .unwrap_or(trimmed);

        if body.len() != PRIVATE_KEY_SIZE * 2 {
            return Err(WalletError::invalid_private_key(format!(
                "Expected {} hex characters",
                PRIVATE_KEY_SIZE * 2
            )));
        }

        let mut key = Zeroizing::new([0u8; PRIVATE_KEY_SIZE]);
        hex::decode_to_slice(body, &mut *key)
            .map_err(|_| WalletError::invalid_private_key("Key contains invalid hex characters"))?;

        Self::from_bytes(&*key)
    }

    /// Run an operation with the parsed secp256k1 key
    pub fn with_key<F, T>(&self, f: F) -> Result<T, WalletError>
    where
        F: FnOnce(&SecretKey) -> Result<T, WalletError>,
    {
        let mut secret_key = SecretKey::from_byte_array(*self.bytes)
            .map_err(|e| WalletError::crypto(format!("Invalid private key: {}", e)))?;
        let result = f(&secret_key);
        secret_key.non_secure_erase();
        result
    }

    /// `0x` + 64 lowercase hex characters
    pub fn to_hex(&self) -> Zeroizing<String> {
        let mut out = Zeroizing::new(String::with_capacity(2 + PRIVATE_KEY_SIZE * 2));
        out.push_str("0x");
        out.push_str(&hex::encode(*self.bytes));
        out
    }

    pub fn as_bytes(&self) -> &[u8; PRIVATE_KEY_SIZE] {
        &self.bytes
    }
}

// No Debug implementation to prevent key exposure in logs
// No Clone implementation to prevent accidental key duplication
