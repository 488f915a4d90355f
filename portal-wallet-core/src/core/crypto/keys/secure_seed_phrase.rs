use zeroize::{Zeroize, Zeroizing};

/// Secure seed phrase wrapper
///
/// Holds a normalised, checksum-valid mnemonic. Construction goes through
/// `KeyManager`, which validates the phrase first.
pub struct SecureSeedPhrase {
    phrase: String,
}

impl SecureSeedPhrase {
    pub(crate) fn new(phrase: String) -> Self {
        Self { phrase }
    }

    /// Get the seed phrase as a &str
    pub fn as_str(&self) -> &str {
        &self.phrase
    }

    pub fn word_count(&self) -> usize {
        self.phrase.split_whitespace().count()
    }

    /// Copy of the phrase for handing to a caller
    pub fn to_zeroizing(&self) -> Zeroizing<String> {
        Zeroizing::new(self.phrase.clone())
    }
}

impl Drop for SecureSeedPhrase {
    fn drop(&mut self) {
        self.phrase.zeroize();
    }
}
