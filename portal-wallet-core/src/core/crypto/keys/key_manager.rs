//! Key generation and derivation
//!
//! BIP-39 mnemonics, BIP-32 derivation along `m/44'/60'/0'/0/0`, and the
//! hex and bech32 account addresses derived from the resulting secp256k1 key.

use std::str::FromStr;

use base64::Engine;
use bip32::{DerivationPath, XPrv};
use bip39::{Language, Mnemonic};
use secp256k1::{PublicKey, Secp256k1};
use zeroize::{Zeroize, Zeroizing};

use super::{SecurePrivateKey, SecureSeedPhrase};
use crate::core::crypto::hashing::HashManager;
use crate::domain::entities::{VaultEnvelope, WalletAccount, WalletSecret};
use crate::shared::constants::*;
use crate::shared::error::WalletError;
use crate::shared::utils::{fill_secure_random, is_private_key_hex, normalize_seed_phrase};

/// Key manager for cryptographic key operations
pub struct KeyManager {
    secp256k1: Secp256k1<secp256k1::All>,
    address_prefix: String,
}

impl KeyManager {
    /// Create a key manager producing bech32 addresses under `address_prefix`
    pub fn new(address_prefix: impl Into<String>) -> Self {
        Self {
            secp256k1: Secp256k1::new(),
            address_prefix: address_prefix.into(),
        }
    }

    pub fn address_prefix(&self) -> &str {
        &self.address_prefix
    }

    /// Generate a fresh 12-word wallet from OS entropy
    pub fn generate(&self) -> Result<WalletSecret, WalletError> {
        let mut entropy = Zeroizing::new([0u8; MNEMONIC_ENTROPY_SIZE]);
        fill_secure_random(&mut *entropy)?;

        let mnemonic = Mnemonic::from_entropy(&*entropy)
            .map_err(|e| WalletError::crypto(format!("Failed to encode mnemonic: {}", e)))?;
        let phrase = SecureSeedPhrase::new(mnemonic.to_string());

        log::debug!("Generated {}-word mnemonic", phrase.word_count());
        self.secret_from_phrase(phrase)
    }

    /// Restore a wallet from a BIP-39 phrase
    ///
    /// The checksum is verified before any derivation happens.
    pub fn import_from_mnemonic(&self, phrase: &str) -> Result<WalletSecret, WalletError> {
        let phrase = Self::validate_mnemonic(phrase)?;
        self.secret_from_phrase(phrase)
    }

    /// Restore a wallet from a raw private key; the result has no mnemonic
    pub fn import_from_private_key(&self, key_hex: &str) -> Result<WalletSecret, WalletError> {
        let private_key = SecurePrivateKey::from_hex(key_hex)?;
        let account = self.derive_account(&private_key)?;
        Ok(WalletSecret::new(None, private_key, account))
    }

    /// Import either form: 64 hex digits (optional `0x`) is a private key,
    /// anything else is treated as a mnemonic
    pub fn import(&self, mnemonic_or_key: &str) -> Result<WalletSecret, WalletError> {
        if is_private_key_hex(mnemonic_or_key) {
            self.import_from_private_key(mnemonic_or_key)
        } else {
            self.import_from_mnemonic(mnemonic_or_key)
        }
    }

    /// Rebuild a wallet from decrypted vault contents.
    ///
    /// When the envelope carries a mnemonic, the key derived from it must
    /// match the stored private key.
    pub fn restore(&self, envelope: &VaultEnvelope) -> Result<WalletSecret, WalletError> {
        let private_key = SecurePrivateKey::from_hex(&envelope.private_key)
            .map_err(|_| WalletError::corrupt_blob("Vault holds an invalid private key"))?;

        match envelope.mnemonic.as_deref() {
            Some(phrase) => {
                let secret = self
                    .import_from_mnemonic(phrase)
                    .map_err(|_| WalletError::corrupt_blob("Vault holds an invalid mnemonic"))?;
                if secret.private_key().as_bytes() != private_key.as_bytes() {
                    return Err(WalletError::corrupt_blob(
                        "Vault mnemonic does not match its private key",
                    ));
                }
                Ok(secret)
            }
            None => {
                let account = self.derive_account(&private_key)?;
                Ok(WalletSecret::new(None, private_key, account))
            }
        }
    }

    /// Normalise and checksum-validate a phrase
    pub fn validate_mnemonic(phrase: &str) -> Result<SecureSeedPhrase, WalletError> {
        let normalized = normalize_seed_phrase(phrase);
        let word_count = normalized.split(' ').filter(|w| !w.is_empty()).count();

        if !VALID_MNEMONIC_WORD_COUNTS.contains(&word_count) {
            return Err(WalletError::invalid_mnemonic(format!(
                "Expected 12, 15, 18, 21 or 24 words, got {}",
                word_count
            )));
        }

        let mnemonic = Mnemonic::parse_in_normalized(Language::English, &normalized)
            .map_err(|e| WalletError::invalid_mnemonic(e.to_string()))?;

        Ok(SecureSeedPhrase::new(mnemonic.to_string()))
    }

    /// Derive public key and both address forms for a private key
    pub fn derive_account(&self, private_key: &SecurePrivateKey) -> Result<WalletAccount, WalletError> {
        let public_key = private_key
            .with_key(|secret_key| Ok(PublicKey::from_secret_key(&self.secp256k1, secret_key)))?;

        let address_bytes = Self::address_bytes(&public_key);
        Ok(WalletAccount {
            address: format!("0x{}", hex::encode(address_bytes)),
            bech32_address: self.bech32_address(&address_bytes)?,
            public_key: base64::engine::general_purpose::STANDARD.encode(public_key.serialize()),
        })
    }

    /// Last 20 bytes of Keccak-256 over the uncompressed key without its `0x04` tag
    pub fn address_bytes(public_key: &PublicKey) -> [u8; ADDRESS_SIZE] {
        let uncompressed = public_key.serialize_uncompressed();
        let hash = HashManager::keccak256(&uncompressed[1..]);
        let mut address = [0u8; ADDRESS_SIZE];
        address.copy_from_slice(&hash[HASH_SIZE - ADDRESS_SIZE..]);
        address
    }

    /// `0x`-prefixed hex address for a public key
    pub fn hex_address(public_key: &PublicKey) -> String {
        format!("0x{}", hex::encode(Self::address_bytes(public_key)))
    }

    /// Bech32 account address for 20 address bytes
    pub fn bech32_address(&self, address_bytes: &[u8]) -> Result<String, WalletError> {
        let hrp = bech32::Hrp::parse(&self.address_prefix)
            .map_err(|e| WalletError::config(format!("Invalid address prefix: {}", e)))?;
        bech32::encode::<bech32::Bech32>(hrp, address_bytes)
            .map_err(|e| WalletError::crypto(format!("bech32 encode: {}", e)))
    }

    fn secret_from_phrase(&self, phrase: SecureSeedPhrase) -> Result<WalletSecret, WalletError> {
        let private_key = Self::derive_private_key_from_seed(&phrase)?;
        let account = self.derive_account(&private_key)?;
        Ok(WalletSecret::new(Some(phrase), private_key, account))
    }

    /// BIP-39 seed (empty passphrase) then BIP-32 along the Ethereum path
    fn derive_private_key_from_seed(phrase: &SecureSeedPhrase) -> Result<SecurePrivateKey, WalletError> {
        let mnemonic = Mnemonic::parse_in_normalized(Language::English, phrase.as_str())
            .map_err(|e| WalletError::invalid_mnemonic(e.to_string()))?;
        let seed = Zeroizing::new(mnemonic.to_seed_normalized(""));

        let derivation_path = DerivationPath::from_str(DERIVATION_PATH)
            .map_err(|e| WalletError::crypto(format!("Invalid derivation path: {}", e)))?;
        let child_xprv = XPrv::derive_from_path(&*seed, &derivation_path)
            .map_err(|e| WalletError::crypto(format!("Failed to derive child key: {}", e)))?;

        let mut private_key_bytes = child_xprv.private_key().to_bytes();
        let private_key = SecurePrivateKey::from_bytes(private_key_bytes.as_slice());
        private_key_bytes.as_mut_slice().zeroize();
        private_key
    }
}

impl Default for KeyManager {
    fn default() -> Self {
        Self::new(DEFAULT_ADDRESS_PREFIX)
    }
}
