//! Platform storage implementations
//!
//! The wallet persists two small values through [`PlatformStorage`]: the
//! encrypted secret blob and the public account address. Embedders can bring
//! their own store (keychain, keystore, browser storage) by implementing the
//! trait; [`FileStorage`] and [`MemoryStorage`] ship with the crate.

use crate::shared::config::WalletCoreConfig;
use crate::shared::constants::STORAGE_FILE_EXTENSION;
use crate::shared::error::WalletError;
use crate::shared::utils::validate_storage_key;
use std::collections::HashMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Durable key-value store scoped to the application
pub trait PlatformStorage: Send + Sync {
    /// Store data, replacing any previous value
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WalletError>;

    /// Retrieve data, `None` when the key is absent
    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, WalletError>;

    /// Delete data; deleting an absent key is not an error
    fn delete(&self, key: &str) -> Result<(), WalletError>;

    /// Check if data exists
    fn exists(&self, key: &str) -> Result<bool, WalletError>;

    /// List all stored keys
    fn list_keys(&self) -> Result<Vec<String>, WalletError>;
}

/// One file per key under a storage directory
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    /// Open (creating if needed) a storage directory
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, WalletError> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&dir, fs::Permissions::from_mode(0o700))?;
        }
        log::debug!("File storage at {}", dir.display());
        Ok(Self { dir })
    }

    /// `<data_dir>/<namespace>` from configuration
    pub fn from_config(config: &WalletCoreConfig) -> Result<Self, WalletError> {
        Self::new(config.storage_dir())
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn file_path(&self, key: &str) -> Result<PathBuf, WalletError> {
        validate_storage_key(key)?;
        Ok(self.dir.join(format!("{}.{}", key, STORAGE_FILE_EXTENSION)))
    }

    fn create_private_file(path: &Path) -> Result<File, WalletError> {
        let file = File::create(path)?;
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            file.set_permissions(fs::Permissions::from_mode(0o600))?;
        }
        Ok(file)
    }
}

impl PlatformStorage for FileStorage {
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WalletError> {
        let path = self.file_path(key)?;
        let tmp_path = path.with_extension(format!("{}.tmp", STORAGE_FILE_EXTENSION));

        let mut file = Self::create_private_file(&tmp_path)?;
        file.write_all(data)?;
        file.sync_all()?;
        drop(file);

        if let Err(e) = fs::rename(&tmp_path, &path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(e.into());
        }

        log::debug!("Stored {} ({} bytes)", key, data.len());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, WalletError> {
        let path = self.file_path(key)?;
        match fs::read(&path) {
            Ok(data) => Ok(Some(data)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn delete(&self, key: &str) -> Result<(), WalletError> {
        let path = self.file_path(key)?;
        match fs::remove_file(&path) {
            Ok(()) => {
                log::debug!("Deleted {}", key);
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn exists(&self, key: &str) -> Result<bool, WalletError> {
        Ok(self.file_path(key)?.is_file())
    }

    fn list_keys(&self) -> Result<Vec<String>, WalletError> {
        let mut keys = vec![];
        for entry in fs::read_dir(&self.dir)?.flatten() {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some(STORAGE_FILE_EXTENSION) {
                continue;
            }
            if let Some(name) = path.file_stem().and_then(|n| n.to_str()) {
                keys.push(name.to_string());
            }
        }
        keys.sort();
        Ok(keys)
    }
}

/// In-process store for tests and embedders with their own persistence
#[derive(Default)]
pub struct MemoryStorage {
    data: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, HashMap<String, Vec<u8>>>, WalletError> {
        self.data
            .lock()
            .map_err(|_| WalletError::storage("Memory storage lock poisoned"))
    }
}

impl PlatformStorage for MemoryStorage {
    fn store(&self, key: &str, data: &[u8]) -> Result<(), WalletError> {
        validate_storage_key(key)?;
        self.lock()?.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn retrieve(&self, key: &str) -> Result<Option<Vec<u8>>, WalletError> {
        validate_storage_key(key)?;
        Ok(self.lock()?.get(key).cloned())
    }

    fn delete(&self, key: &str) -> Result<(), WalletError> {
        validate_storage_key(key)?;
        self.lock()?.remove(key);
        Ok(())
    }

    fn exists(&self, key: &str) -> Result<bool, WalletError> {
        validate_storage_key(key)?;
        Ok(self.lock()?.contains_key(key))
    }

    fn list_keys(&self) -> Result<Vec<String>, WalletError> {
        let mut keys: Vec<String> = self.lock()?.keys().cloned().collect();
        keys.sort();
        Ok(keys)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(storage: &dyn PlatformStorage) {
        assert_eq!(storage.retrieve("missing").expect("retrieve"), None);
        assert!(!storage.exists("missing").expect("exists"));

        storage.store("alpha", b"one").expect("store");
        storage.store("beta", b"two").expect("store");
        assert_eq!(storage.retrieve("alpha").expect("retrieve"), Some(b"one".to_vec()));
        assert!(storage.exists("alpha").expect("exists"));

        storage.store("alpha", b"replaced").expect("overwrite");
        assert_eq!(storage.retrieve("alpha").expect("retrieve"), Some(b"replaced".to_vec()));
        assert_eq!(storage.list_keys().expect("list"), vec!["alpha", "beta"]);

        storage.delete("alpha").expect("delete");
        storage.delete("alpha").expect("delete twice");
        assert!(!storage.exists("alpha").expect("exists"));
        assert_eq!(storage.list_keys().expect("list"), vec!["beta"]);
    }

    #[test]
    fn test_memory_storage() {
        exercise(&MemoryStorage::new());
    }

    #[test]
    fn test_file_storage() {
        let dir = TempDir::new().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("injective_wallet"))
            .expect("Failed to open file storage");
        exercise(&storage);
    }

    #[test]
    fn test_file_storage_persists_across_instances() {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("ns");
        FileStorage::new(&path).expect("open").store("key", b"value").expect("store");

        let reopened = FileStorage::new(&path).expect("reopen");
        assert_eq!(reopened.retrieve("key").expect("retrieve"), Some(b"value".to_vec()));
        assert!(path.join("key.dat").is_file());
        assert!(!path.join("key.dat.tmp").exists());
    }

    #[cfg(unix)]
    #[test]
    fn test_file_permissions() {
        use std::os::unix::fs::PermissionsExt;
        let dir = TempDir::new().expect("tempdir");
        let storage = FileStorage::new(dir.path().join("ns")).expect("open");
        storage.store("secret", b"x").expect("store");
        let mode = fs::metadata(storage.dir().join("secret.dat"))
            .expect("metadata")
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    fn assert_rejects_unsafe_keys(storage: &dyn PlatformStorage) {
        for key in ["", "../escape", "a/b", "with space"] {
            assert!(matches!(storage.store(key, b"x"), Err(WalletError::Storage(_))), "store {:?}", key);
            assert!(matches!(storage.retrieve(key), Err(WalletError::Storage(_))), "retrieve {:?}", key);
            assert!(matches!(storage.delete(key), Err(WalletError::Storage(_))), "delete {:?}", key);
            assert!(matches!(storage.exists(key), Err(WalletError::Storage(_))), "exists {:?}", key);
        }
    }

    #[test]
    fn test_rejects_unsafe_keys() {
        let dir = TempDir::new().expect("tempdir");
        assert_rejects_unsafe_keys(&FileStorage::new(dir.path()).expect("open"));
        assert_rejects_unsafe_keys(&MemoryStorage::new());
    }

    #[test]
    fn test_from_config() {
        let dir = TempDir::new().expect("tempdir");
        let config = WalletCoreConfig {
            data_dir: dir.path().to_path_buf(),
            ..WalletCoreConfig::default()
        };
        let storage = FileStorage::from_config(&config).expect("open");
        assert_eq!(storage.dir(), dir.path().join("injective_wallet"));
    }
}
