//! Persisted wallet state: the encrypted blob and the public address

use std::sync::Arc;

use crate::infrastructure::platform::PlatformStorage;
use crate::shared::constants::{ACCOUNT_ADDRESS_KEY, ENCRYPTED_SECRET_KEY};
use crate::shared::error::WalletError;
use crate::shared::WalletResult;

/// The two keyed values a wallet leaves on disk
///
/// Only ciphertext and the public address are ever written here.
#[derive(Clone)]
pub struct WalletStore {
    storage: Arc<dyn PlatformStorage>,
}

impl WalletStore {
    pub fn new(storage: Arc<dyn PlatformStorage>) -> Self {
        Self { storage }
    }

    pub fn has_blob(&self) -> WalletResult<bool> {
        self.storage.exists(ENCRYPTED_SECRET_KEY)
    }

    pub fn load_blob(&self) -> WalletResult<Option<String>> {
        match self.storage.retrieve(ENCRYPTED_SECRET_KEY)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(Some)
                .map_err(|_| WalletError::corrupt_blob("Stored blob is not UTF-8")),
            None => Ok(None),
        }
    }

    pub fn load_address(&self) -> WalletResult<Option<String>> {
        match self.storage.retrieve(ACCOUNT_ADDRESS_KEY)? {
            Some(bytes) => String::from_utf8(bytes)
                .map(|s| Some(s.trim().to_string()))
                .map_err(|_| WalletError::storage("Stored address is not UTF-8")),
            None => Ok(None),
        }
    }

    /// Write blob then address
    pub fn save(&self, blob: &str, address: &str) -> WalletResult<()> {
        self.storage.store(ENCRYPTED_SECRET_KEY, blob.as_bytes())?;
        self.save_address(address)
    }

    pub fn save_address(&self, address: &str) -> WalletResult<()> {
        self.storage.store(ACCOUNT_ADDRESS_KEY, address.as_bytes())
    }

    /// Remove blob then address
    pub fn clear(&self) -> WalletResult<()> {
        self.clear_blob()?;
        self.clear_address()
    }

    pub fn clear_blob(&self) -> WalletResult<()> {
        self.storage.delete(ENCRYPTED_SECRET_KEY)
    }

    pub fn clear_address(&self) -> WalletResult<()> {
        self.storage.delete(ACCOUNT_ADDRESS_KEY)
    }
}
