//! Wallet entity and related value objects
//!
//! [`WalletSecret`] is the in-memory secret held for the lifetime of an
//! unlocked session. [`WalletAccount`] is its public, freely shareable half.
//! [`VaultEnvelope`] is the plaintext that the vault encrypts.

use serde::{Deserialize, Serialize};
use zeroize::{Zeroize, Zeroizing};

use crate::core::crypto::keys::{SecurePrivateKey, SecureSeedPhrase};
use crate::shared::constants::VAULT_ENVELOPE_VERSION;
use crate::shared::error::WalletError;
use crate::shared::types::{Address, PublicKey};
use crate::shared::utils::is_private_key_hex;

/// Public identity of a wallet account
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct WalletAccount {
    /// `0x`-prefixed lowercase hex address
    pub address: Address,
    /// Bech32 account address (`inj1...`)
    pub bech32_address: Address,
    /// Base64 of the 33-byte compressed public key
    pub public_key: PublicKey,
}

/// Decrypted wallet secret
///
/// Does not implement Debug, Clone, Serialize, or Deserialize to prevent sensitive data exposure
pub struct WalletSecret {
    mnemonic: Option<SecureSeedPhrase>,
    private_key: SecurePrivateKey,
    account: WalletAccount,
}

impl WalletSecret {
    pub(crate) fn new(
        mnemonic: Option<SecureSeedPhrase>,
        private_key: SecurePrivateKey,
        account: WalletAccount,
    ) -> Self {
        Self {
            mnemonic,
            private_key,
            account,
        }
    }

    /// Seed phrase, absent for wallets imported from a raw private key
    pub fn mnemonic(&self) -> Option<&SecureSeedPhrase> {
        self.mnemonic.as_ref()
    }

    pub fn has_mnemonic(&self) -> bool {
        self.mnemonic.is_some()
    }

    pub fn private_key(&self) -> &SecurePrivateKey {
        &self.private_key
    }

    pub fn account(&self) -> &WalletAccount {
        &self.account
    }

    pub fn address(&self) -> &str {
        &self.account.address
    }

    /// Plaintext handed to the vault for encryption
    pub fn to_envelope(&self) -> VaultEnvelope {
        VaultEnvelope {
            version: VAULT_ENVELOPE_VERSION,
            mnemonic: self.mnemonic.as_ref().map(|m| m.as_str().to_string()),
            private_key: self.private_key.to_hex().to_string(),
        }
    }
}

/// Versioned plaintext stored inside the encrypted blob
#[derive(Serialize, Deserialize)]
pub struct VaultEnvelope {
    pub version: u32,
    pub mnemonic: Option<String>,
    pub private_key: String,
}

impl VaultEnvelope {
    pub fn to_bytes(&self) -> Result<Zeroizing<Vec<u8>>, WalletError> {
        Ok(Zeroizing::new(serde_json::to_vec(self)?))
    }

    /// Parse decrypted vault plaintext.
    ///
    /// Accepts the JSON envelope or a bare private-key hex string (blobs that
    /// only ever held the key). Anything else means the blob is corrupt.
    pub fn from_plaintext(plaintext: &[u8]) -> Result<Self, WalletError> {
        let text = std::str::from_utf8(plaintext)
            .map_err(|_| WalletError::corrupt_blob("Vault plaintext is not UTF-8"))?;
        let trimmed = text.trim();

        if trimmed.starts_with('{') {
            let envelope: VaultEnvelope = serde_json::from_str(trimmed)
                .map_err(|_| WalletError::corrupt_blob("Vault envelope is malformed"))?;
            if envelope.version != VAULT_ENVELOPE_VERSION {
                return Err(WalletError::corrupt_blob(format!(
                    "Unsupported vault envelope version {}",
                    envelope.version
                )));
            }
            return Ok(envelope);
        }

        if is_private_key_hex(trimmed) {
            return Ok(Self {
                version: VAULT_ENVELOPE_VERSION,
                mnemonic: None,
                private_key: trimmed.to_string(),
            });
        }

        Err(WalletError::corrupt_blob("Unrecognised vault plaintext"))
    }
}

impl Drop for VaultEnvelope {
    fn drop(&mut self) {
        self.mnemonic.zeroize();
        self.private_key.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    #[test]
    fn test_envelope_json_layout() {
        let envelope = VaultEnvelope {
            version: VAULT_ENVELOPE_VERSION,
            mnemonic: None,
            private_key: KEY_HEX.to_string(),
        };
        let bytes = envelope.to_bytes().expect("serialize");
        let json: serde_json::Value = serde_json::from_slice(&bytes).expect("parse");
        assert_eq!(json["version"], 1);
        assert!(json["mnemonic"].is_null());
        assert_eq!(json["private_key"], KEY_HEX);

        let parsed = VaultEnvelope::from_plaintext(&bytes).expect("from_plaintext");
        assert_eq!(parsed.private_key, KEY_HEX);
        assert!(parsed.mnemonic.is_none());
    }

    #[test]
    fn test_legacy_bare_key_plaintext() {
        let parsed = VaultEnvelope::from_plaintext(KEY_HEX[2..].as_bytes())
            .expect("legacy plaintext");
        assert_eq!(parsed.private_key, &KEY_HEX[2..]);
        assert!(parsed.mnemonic.is_none());
    }

    #[test]
    fn test_garbage_plaintext_is_corrupt() {
        let cases: [&[u8]; 4] = [
            b"hello",
            b"{\"version\":1}",
            b"{\"version\":2,\"mnemonic\":null,\"private_key\":\"00\"}",
            &[0xff, 0xfe],
        ];
        for bad in cases {
            assert!(matches!(
                VaultEnvelope::from_plaintext(bad),
                Err(WalletError::CorruptBlob(_))
            ));
        }
    }
}
