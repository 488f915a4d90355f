//! Secret vault: password-based encryption of the wallet secret

use zeroize::Zeroizing;

use crate::core::crypto::encryption::{EncryptedBlob, EncryptionManager};
use crate::core::crypto::keys::KeyManager;
use crate::core::crypto::password::{PasswordConfig, WalletPasswordHasher};
use crate::domain::entities::{VaultEnvelope, WalletSecret};
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

/// PBKDF2-HMAC-SHA256 → AES-256-GCM, sealed as base64(`salt ‖ iv ‖ ciphertext‖tag`)
///
/// Every call to [`SecretVault::encrypt`] draws a fresh salt and IV.
#[derive(Debug, Clone, Default)]
pub struct SecretVault {
    config: PasswordConfig,
}

impl SecretVault {
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    /// Vault with a non-default PBKDF2 iteration count
    pub fn with_iterations(iterations: u32) -> Self {
        Self::new(PasswordConfig::with_iterations(iterations))
    }

    pub fn iterations(&self) -> u32 {
        self.config.iterations
    }

    /// Encrypt `plaintext` under `password`
    pub fn encrypt(&self, plaintext: &[u8], password: &str) -> WalletResult<String> {
        let hasher = WalletPasswordHasher::new(self.config.clone());
        let salt = hasher.generate_salt()?;
        let key = hasher.derive_key(password, &salt)?;
        let (nonce, ciphertext) = EncryptionManager::encrypt(plaintext, &key)?;

        Ok(EncryptedBlob { salt, nonce, ciphertext }.to_base64())
    }

    /// Decrypt a blob produced by [`SecretVault::encrypt`]
    ///
    /// Undecodable or truncated blobs fail with `CorruptBlob`; an
    /// authentication failure is reported as `WrongPassword`.
    pub fn decrypt(&self, blob: &str, password: &str) -> WalletResult<Zeroizing<Vec<u8>>> {
        let blob = EncryptedBlob::from_base64(blob)?;
        let hasher = WalletPasswordHasher::new(self.config.clone());
        let key = hasher.derive_key(password, &blob.salt)?;

        EncryptionManager::decrypt(&blob.ciphertext, &blob.nonce, &key)
            .map_err(|_| WalletError::WrongPassword)
    }

    /// Encrypt a wallet secret's envelope
    pub fn seal(&self, secret: &WalletSecret, password: &str) -> WalletResult<String> {
        let plaintext = secret.to_envelope().to_bytes()?;
        self.encrypt(&plaintext, password)
    }

    /// Decrypt and rebuild a wallet secret
    pub fn unseal(&self, blob: &str, password: &str, keys: &KeyManager) -> WalletResult<WalletSecret> {
        let plaintext = self.decrypt(blob, password)?;
        let envelope = VaultEnvelope::from_plaintext(&plaintext)?;
        keys.restore(&envelope)
    }
}
