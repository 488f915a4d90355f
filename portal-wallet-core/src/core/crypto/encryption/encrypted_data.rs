use base64::Engine;

use crate::shared::constants::{NONCE_SIZE, SALT_SIZE, TAG_SIZE};
use crate::shared::error::WalletError;

/// Sealed vault contents: `salt ‖ nonce ‖ ciphertext‖tag`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncryptedBlob {
    pub salt: Vec<u8>,
    pub nonce: Vec<u8>,
    /// AES-GCM output, tag included
    pub ciphertext: Vec<u8>,
}

impl EncryptedBlob {
    pub const MIN_LEN: usize = SALT_SIZE + NONCE_SIZE + TAG_SIZE;

    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.salt.len() + self.nonce.len() + self.ciphertext.len());
        out.extend_from_slice(&self.salt);
        out.extend_from_slice(&self.nonce);
        out.extend_from_slice(&self.ciphertext);
        out
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self, WalletError> {
        if bytes.len() < Self::MIN_LEN {
            return Err(WalletError::corrupt_blob(format!(
                "Blob is {} bytes, need at least {}",
                bytes.len(),
                Self::MIN_LEN
            )));
        }

        let (salt, rest) = bytes.split_at(SALT_SIZE);
        let (nonce, ciphertext) = rest.split_at(NONCE_SIZE);
        Ok(Self {
            salt: salt.to_vec(),
            nonce: nonce.to_vec(),
            ciphertext: ciphertext.to_vec(),
        })
    }

    /// Standard padded base64, the persisted form
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(self.to_bytes())
    }

    pub fn from_base64(encoded: &str) -> Result<Self, WalletError> {
        let bytes = base64::engine::general_purpose::STANDARD.decode(encoded.trim())?;
        Self::from_bytes(&bytes)
    }
}
