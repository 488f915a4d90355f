use crate::shared::constants::AES_KEY_SIZE;
use crate::shared::error::WalletError;
use crate::shared::utils::generate_secure_random_bytes;
use crate::shared::WalletResult;
use pbkdf2::pbkdf2;
use zeroize::Zeroizing;
use super::PasswordConfig;

/// Derives symmetric keys from user passwords
pub struct WalletPasswordHasher {
    config: PasswordConfig,
}

impl WalletPasswordHasher {
    pub fn new(config: PasswordConfig) -> Self {
        Self { config }
    }

    /// Generate a secure random salt
    pub fn generate_salt(&self) -> WalletResult<Vec<u8>> {
        generate_secure_random_bytes(self.config.salt_length)
    }

    /// PBKDF2-HMAC-SHA256 over `password` and `salt`, yielding a 256-bit key
    pub fn derive_key(&self, password: &str, salt: &[u8]) -> WalletResult<Zeroizing<[u8; AES_KEY_SIZE]>> {
        if salt.len() != self.config.salt_length {
            return Err(WalletError::crypto(format!(
                "Expected {}-byte salt, got {}",
                self.config.salt_length,
                salt.len()
            )));
        }

        let mut key = Zeroizing::new([0u8; AES_KEY_SIZE]);
        pbkdf2::<hmac::Hmac<sha2::Sha256>>(
            password.as_bytes(),
            salt,
            self.config.iterations,
            &mut *key,
        ).map_err(|e| WalletError::crypto(format!("PBKDF2 error: {:?}", e)))?;
        Ok(key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fast_hasher() -> WalletPasswordHasher {
        WalletPasswordHasher::new(PasswordConfig::with_iterations(1_000))
    }

    #[test]
    fn test_rfc7914_vector() {
        // PBKDF2-HMAC-SHA256("passwd", "salt", 1) from RFC 7914 section 11
        let hasher = WalletPasswordHasher::new(PasswordConfig {
            salt_length: 4,
            iterations: 1,
        });
        let key = hasher.derive_key("passwd", b"salt").expect("derive");
        assert_eq!(
            hex::encode(*key),
            "55ac046e56e3089fec1691c22544b605f94185216dde0465e68b9d57c20dacbc"
        );
    }

    #[test]
    fn test_same_inputs_same_key() {
        let hasher = fast_hasher();
        let salt = hasher.generate_salt().expect("salt");
        let a = hasher.derive_key("my_secure_password", &salt).expect("derive");
        let b = hasher.derive_key("my_secure_password", &salt).expect("derive");
        assert_eq!(*a, *b);
    }

    #[test]
    fn test_different_password_or_salt_differs() {
        let hasher = fast_hasher();
        let salt1 = hasher.generate_salt().expect("salt");
        let salt2 = hasher.generate_salt().expect("salt");
        assert_ne!(salt1, salt2);

        let base = hasher.derive_key("my_secure_password", &salt1).expect("derive");
        let other_salt = hasher.derive_key("my_secure_password", &salt2).expect("derive");
        let other_password = hasher.derive_key("wrong_password", &salt1).expect("derive");
        assert_ne!(*base, *other_salt);
        assert_ne!(*base, *other_password);
    }

    #[test]
    fn test_rejects_wrong_salt_length() {
        let hasher = fast_hasher();
        assert!(hasher.derive_key("password", &[0u8; 8]).is_err());
    }
}
