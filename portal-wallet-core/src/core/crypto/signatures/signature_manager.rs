use base64::Engine;
use secp256k1::ecdsa::{RecoverableSignature, RecoveryId};
use secp256k1::{Message, PublicKey, Secp256k1};

use super::MessageSignature;
use crate::core::crypto::hashing::HashManager;
use crate::core::crypto::keys::{KeyManager, SecurePrivateKey};
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

/// Offset added to the recovery id to form `v`
const V_OFFSET: u8 = 27;

/// Digital signature manager
pub struct SignatureManager {
    secp: Secp256k1<secp256k1::All>,
}

impl SignatureManager {
    pub fn new() -> Self {
        Self {
            secp: Secp256k1::new(),
        }
    }

    /// Sign Keccak-256(`message`) with a recoverable ECDSA signature
    pub fn sign_message(&self, message: &[u8], private_key: &SecurePrivateKey) -> WalletResult<MessageSignature> {
        let digest = Message::from_digest(HashManager::keccak256(message));

        private_key.with_key(|secret_key| {
            let rec_sig: RecoverableSignature = self.secp.sign_ecdsa_recoverable(digest, secret_key);
            let (rec_id, compact) = rec_sig.serialize_compact();
            let v = V_OFFSET + i32::from(rec_id) as u8;
            Ok(MessageSignature::from_parts(&compact[..32], &compact[32..], v))
        })
    }

    /// Hex address of the key that produced `signature` over `message`
    pub fn recover_address(&self, message: &[u8], signature: &MessageSignature) -> WalletResult<String> {
        let public_key = self.recover_public_key(message, signature)?;
        Ok(KeyManager::hex_address(&public_key))
    }

    /// Whether `signature` over `message` was made by `public_key` (base64, compressed)
    pub fn verify_message(&self, message: &[u8], signature: &MessageSignature, public_key: &str) -> WalletResult<bool> {
        let key_bytes = base64::engine::general_purpose::STANDARD
            .decode(public_key)
            .map_err(|e| WalletError::validation(format!("Invalid public key encoding: {}", e)))?;
        let expected = PublicKey::from_slice(&key_bytes)
            .map_err(|e| WalletError::validation(format!("Invalid public key: {}", e)))?;

        match self.recover_public_key(message, signature) {
            Ok(recovered) => Ok(recovered == expected),
            Err(_) => Ok(false),
        }
    }

    fn recover_public_key(&self, message: &[u8], signature: &MessageSignature) -> WalletResult<PublicKey> {
        let bytes = hex::decode(signature.signature.trim_start_matches("0x"))?;
        if bytes.len() != 65 || signature.v < V_OFFSET {
            return Err(WalletError::validation("Malformed recoverable signature"));
        }

        let rec_id = RecoveryId::try_from(i32::from(signature.v - V_OFFSET))
            .map_err(|e| WalletError::validation(format!("Invalid recovery id: {}", e)))?;
        let rec_sig = RecoverableSignature::from_compact(&bytes[..64], rec_id)?;
        let digest = Message::from_digest(HashManager::keccak256(message));

        Ok(self.secp.recover_ecdsa(digest, &rec_sig)?)
    }
}

impl Default for SignatureManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY_HEX: &str = "0x4c0883a69102937d6231471b5dbb6204fe5129617082792ae468d01a3f362318";

    fn signer() -> (SecurePrivateKey, String, String) {
        let manager = KeyManager::default();
        let key = SecurePrivateKey::from_hex(KEY_HEX).expect("key");
        let account = manager.derive_account(&key).expect("account");
        (key, account.address, account.public_key)
    }

    #[test]
    fn test_sign_and_verify() {
        let manager = SignatureManager::new();
        let (key, address, public_key) = signer();

        let signature = manager.sign_message(b"Hello, Injective!", &key)
            .expect("Failed to sign message");
        assert!(signature.v == 27 || signature.v == 28);
        assert_eq!(signature.signature.len(), 2 + 65 * 2);

        assert!(manager.verify_message(b"Hello, Injective!", &signature, &public_key)
            .expect("verify"));
        assert!(!manager.verify_message(b"Hello, World!", &signature, &public_key)
            .expect("verify"));
        assert_eq!(
            manager.recover_address(b"Hello, Injective!", &signature).expect("recover"),
            address
        );
    }

    #[test]
    fn test_signing_is_deterministic() {
        // RFC 6979 nonces
        let manager = SignatureManager::new();
        let (key, _, _) = signer();
        let a = manager.sign_message(b"payload", &key).expect("sign");
        let b = manager.sign_message(b"payload", &key).expect("sign");
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_and_large_messages() {
        let manager = SignatureManager::new();
        let (key, _, public_key) = signer();
        for message in [Vec::new(), b"x".repeat(1000)] {
            let signature = manager.sign_message(&message, &key).expect("sign");
            assert!(manager.verify_message(&message, &signature, &public_key).expect("verify"));
        }
    }

    #[test]
    fn test_verify_rejects_bad_public_key() {
        let manager = SignatureManager::new();
        let (key, _, _) = signer();
        let signature = manager.sign_message(b"m", &key).expect("sign");
        assert!(manager.verify_message(b"m", &signature, "not-base64!").is_err());
    }
}
