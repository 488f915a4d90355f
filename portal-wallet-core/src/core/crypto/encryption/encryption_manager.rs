use crate::shared::constants::{AES_KEY_SIZE, NONCE_SIZE};
use crate::shared::error::WalletError;
use crate::shared::utils::generate_secure_random_bytes;
use crate::shared::WalletResult;
use aes_gcm::aead::Aead;
use aes_gcm::{Aes256Gcm, Key, KeyInit, Nonce};
use zeroize::Zeroizing;

/// AES-256-GCM encryption manager
pub struct EncryptionManager;

impl EncryptionManager {
    /// Encrypt under a fresh random nonce; returns `(nonce, ciphertext‖tag)`
    pub fn encrypt(data: &[u8], key: &[u8; AES_KEY_SIZE]) -> WalletResult<(Vec<u8>, Vec<u8>)> {
        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        let nonce_bytes = generate_secure_random_bytes(NONCE_SIZE)?;
        let nonce = Nonce::from_slice(&nonce_bytes);

        let ciphertext = cipher
            .encrypt(nonce, data)
            .map_err(|e| WalletError::crypto(format!("AES-GCM encryption failed: {}", e)))?;

        Ok((nonce_bytes, ciphertext))
    }

    /// Decrypt and authenticate `ciphertext‖tag`
    pub fn decrypt(ciphertext: &[u8], nonce: &[u8], key: &[u8; AES_KEY_SIZE]) -> WalletResult<Zeroizing<Vec<u8>>> {
        if nonce.len() != NONCE_SIZE {
            return Err(WalletError::crypto(format!("AES-GCM requires a {}-byte nonce", NONCE_SIZE)));
        }

        let cipher = Aes256Gcm::new(Key::<Aes256Gcm>::from_slice(key));
        let nonce = Nonce::from_slice(nonce);

        let plaintext = cipher
            .decrypt(nonce, ciphertext)
            .map_err(|e| WalletError::crypto(format!("AES-GCM decryption failed: {}", e)))?;

        Ok(Zeroizing::new(plaintext))
    }
}
