//! Wallet session: the lock/unlock lifecycle of a single wallet
//!
//! ```text
//! NoWallet --create/import--> Unlocked --lock--> Locked --unlock--> Unlocked
//!     ^                                                |
//!     +-------------------- delete (any state) --------+
//! ```
//!
//! Key derivation and vault work run on the blocking pool. State is only
//! committed once that work has finished, so dropping a pending call leaves
//! the session exactly as it was.

use std::sync::Arc;

use zeroize::Zeroizing;

use crate::core::crypto::keys::KeyManager;
use crate::core::crypto::signatures::{MessageSignature, SignatureManager};
use crate::core::storage::{SecretVault, WalletStore};
use crate::domain::entities::{WalletAccount, WalletSecret};
use crate::domain::repositories::BalanceRepository;
use crate::infrastructure::platform::{FileStorage, PlatformStorage};
use crate::shared::config::WalletCoreConfig;
use crate::shared::error::WalletError;
use crate::shared::types::{Balance, SessionStatus, WalletResult};
use crate::shared::utils::validate_password;

enum SessionState {
    NoWallet,
    /// Blob on disk; address if one was persisted alongside it
    Locked { address: Option<String> },
    Unlocked { secret: WalletSecret },
}

/// Result of creating a wallet: the account and the phrase to back up
pub struct CreatedWallet {
    pub account: WalletAccount,
    pub mnemonic: Zeroizing<String>,
}

/// Explicit wallet session owned by the UI layer
///
/// The async methods must be polled inside a tokio runtime; elsewhere they
/// fail with `WalletError::Internal`.
pub struct WalletSession {
    store: WalletStore,
    vault: SecretVault,
    keys: Arc<KeyManager>,
    signer: SignatureManager,
    min_password_length: usize,
    state: SessionState,
    balance: Option<Balance>,
}

impl WalletSession {
    /// App-start init: `Locked` when a blob is persisted, otherwise `NoWallet`
    pub fn open(storage: Arc<dyn PlatformStorage>, config: &WalletCoreConfig) -> WalletResult<Self> {
        config.validate()?;
        let store = WalletStore::new(storage);

        let state = if store.has_blob()? {
            let address = store.load_address()?;
            log::info!(
                "Found stored wallet {}",
                address.as_deref().unwrap_or("(address pending unlock)")
            );
            SessionState::Locked { address }
        } else {
            log::info!("No stored wallet");
            SessionState::NoWallet
        };

        Ok(Self {
            store,
            vault: SecretVault::default(),
            keys: Arc::new(KeyManager::new(config.address_prefix.clone())),
            signer: SignatureManager::new(),
            min_password_length: config.min_password_length,
            state,
            balance: None,
        })
    }

    /// Open against file storage under the configured data directory
    pub fn open_file(config: &WalletCoreConfig) -> WalletResult<Self> {
        let storage = FileStorage::from_config(config)?;
        Self::open(Arc::new(storage), config)
    }

    /// Replace the vault, e.g. with a lower iteration count in tests
    pub fn with_vault(mut self, vault: SecretVault) -> Self {
        self.vault = vault;
        self
    }

    pub fn status(&self) -> SessionStatus {
        match self.state {
            SessionState::NoWallet => SessionStatus::NoWallet,
            SessionState::Locked { .. } => SessionStatus::Locked,
            SessionState::Unlocked { .. } => SessionStatus::Unlocked,
        }
    }

    pub fn has_wallet(&self) -> bool {
        !matches!(self.state, SessionState::NoWallet)
    }

    pub fn is_unlocked(&self) -> bool {
        matches!(self.state, SessionState::Unlocked { .. })
    }

    /// Hex address whenever it is known
    pub fn address(&self) -> Option<&str> {
        match &self.state {
            SessionState::NoWallet => None,
            SessionState::Locked { address } => address.as_deref(),
            SessionState::Unlocked { secret } => Some(secret.address()),
        }
    }

    /// Full account details, available while unlocked
    pub fn account(&self) -> Option<&WalletAccount> {
        match &self.state {
            SessionState::Unlocked { secret } => Some(secret.account()),
            _ => None,
        }
    }

    /// Last balance fetched during this unlock
    pub fn balance(&self) -> Option<&Balance> {
        self.balance.as_ref()
    }

    /// Generate a new wallet, persist it encrypted and unlock it
    pub async fn create_wallet(&mut self, password: &str) -> WalletResult<CreatedWallet> {
        self.ensure_no_wallet()?;
        validate_password(password, self.min_password_length)?;

        let keys = self.keys.clone();
        let vault = self.vault.clone();
        let password = Zeroizing::new(password.to_string());
        let (secret, blob) = run_blocking(move || {
            let secret = keys.generate()?;
            let blob = vault.seal(&secret, &password)?;
            Ok((secret, blob))
        })
        .await?;

        let mnemonic = secret
            .mnemonic()
            .map(|m| m.to_zeroizing())
            .ok_or_else(|| WalletError::internal("Generated wallet has no mnemonic"))?;
        let account = self.commit_new_wallet(secret, &blob)?;
        Ok(CreatedWallet { account, mnemonic })
    }

    /// Import from a mnemonic or a raw private key, persist and unlock
    pub async fn import_wallet(&mut self, mnemonic_or_key: &str, password: &str) -> WalletResult<WalletAccount> {
        self.ensure_no_wallet()?;
        validate_password(password, self.min_password_length)?;

        let keys = self.keys.clone();
        let vault = self.vault.clone();
        let input = Zeroizing::new(mnemonic_or_key.to_string());
        let password = Zeroizing::new(password.to_string());
        let (secret, blob) = run_blocking(move || {
            let secret = keys.import(&input)?;
            let blob = vault.seal(&secret, &password)?;
            Ok((secret, blob))
        })
        .await
        .inspect_err(|e| log::warn!("Wallet import failed: {}", e))?;

        self.commit_new_wallet(secret, &blob)
    }

    /// Decrypt the stored wallet; a failed attempt leaves the state unchanged
    pub async fn unlock_wallet(&mut self, password: &str) -> WalletResult<&WalletAccount> {
        if !self.has_wallet() {
            return Err(WalletError::NoWalletFound);
        }

        let blob = match self.store.load_blob()? {
            Some(blob) => blob,
            None => {
                log::warn!("Stored wallet disappeared; resetting session");
                self.reset();
                return Err(WalletError::NoWalletFound);
            }
        };

        let keys = self.keys.clone();
        let vault = self.vault.clone();
        let password = Zeroizing::new(password.to_string());
        let secret = run_blocking(move || vault.unseal(&blob, &password, &keys))
            .await
            .inspect_err(|e| log::warn!("Unlock failed: {}", e))?;

        match self.store.load_address()? {
            Some(address) if address != secret.address() => {
                log::warn!("Stored address does not match decrypted wallet");
                return Err(WalletError::corrupt_blob(
                    "Stored address does not match the encrypted wallet",
                ));
            }
            Some(_) => {}
            None => {
                log::info!("Restoring missing address record");
                self.store.save_address(secret.address())?;
            }
        }

        log::info!("Wallet {} unlocked", secret.address());
        self.state = SessionState::Unlocked { secret };
        self.account().ok_or(WalletError::NotUnlocked)
    }

    /// Drop the in-memory secret
    pub fn lock_wallet(&mut self) -> WalletResult<()> {
        let address = match &self.state {
            SessionState::NoWallet => return Err(WalletError::NoWalletFound),
            SessionState::Locked { .. } => return Ok(()),
            SessionState::Unlocked { secret } => secret.address().to_string(),
        };

        log::info!("Wallet {} locked", address);
        self.state = SessionState::Locked { address: Some(address) };
        self.balance = None;
        Ok(())
    }

    /// Irreversibly erase the persisted wallet
    ///
    /// Callers are expected to have confirmed this with the user. Once the
    /// blob is gone the session drops its secret and returns to `NoWallet`,
    /// even if removing the address record then fails.
    pub fn delete_wallet(&mut self) -> WalletResult<()> {
        self.store.clear_blob()?;
        self.reset();
        log::info!("Wallet deleted");

        self.store
            .clear_address()
            .inspect_err(|e| log::warn!("Failed to remove stored address: {}", e))
    }

    pub fn export_mnemonic(&self) -> WalletResult<Zeroizing<String>> {
        let secret = self.unlocked_secret()?;
        secret
            .mnemonic()
            .map(|m| m.to_zeroizing())
            .ok_or(WalletError::NoMnemonicAvailable)
    }

    /// `0x` + 64 hex characters
    pub fn export_private_key(&self) -> WalletResult<Zeroizing<String>> {
        Ok(self.unlocked_secret()?.private_key().to_hex())
    }

    /// Recoverable signature over Keccak-256(`message`)
    pub fn sign_message(&self, message: &[u8]) -> WalletResult<MessageSignature> {
        let secret = self.unlocked_secret()?;
        self.signer.sign_message(message, secret.private_key())
    }

    /// Fetch and cache the balance; failures never change session state
    pub async fn refresh_balance(&mut self, repository: &dyn BalanceRepository) -> WalletResult<Balance> {
        let address = self.unlocked_secret()?.account().bech32_address.clone();

        let balance = repository.fetch_balance(&address).await.map_err(|e| match e {
            WalletError::Network(_) => e,
            other => WalletError::network(other.to_string()),
        });

        match balance {
            Ok(balance) => {
                log::debug!("Balance for {}: {} {}", address, balance.amount, balance.denom);
                self.balance = Some(balance.clone());
                Ok(balance)
            }
            Err(e) => {
                log::warn!("Balance refresh failed: {}", e);
                Err(e)
            }
        }
    }

    fn ensure_no_wallet(&self) -> WalletResult<()> {
        if let Some(address) = self.address() {
            return Err(WalletError::wallet_already_exists(address.to_string()));
        }
        if self.has_wallet() || self.store.has_blob()? {
            return Err(WalletError::wallet_already_exists("stored wallet"));
        }
        Ok(())
    }

    fn unlocked_secret(&self) -> WalletResult<&WalletSecret> {
        match &self.state {
            SessionState::Unlocked { secret } => Ok(secret),
            _ => Err(WalletError::NotUnlocked),
        }
    }

    fn commit_new_wallet(&mut self, secret: WalletSecret, blob: &str) -> WalletResult<WalletAccount> {
        if let Err(e) = self.store.save(blob, secret.address()) {
            log::warn!("Persisting new wallet failed: {}", e);
            if let Err(cleanup) = self.store.clear() {
                log::warn!("Cleanup after failed persist also failed: {}", cleanup);
            }
            return Err(e);
        }

        let account = secret.account().clone();
        log::info!("Wallet {} created and unlocked", account.address);
        self.state = SessionState::Unlocked { secret };
        self.balance = None;
        Ok(account)
    }

    fn reset(&mut self) {
        self.state = SessionState::NoWallet;
        self.balance = None;
    }
}

async fn run_blocking<F, T>(f: F) -> WalletResult<T>
where
    F: FnOnce() -> WalletResult<T> + Send + 'static,
    T: Send + 'static,
{
    let runtime = tokio::runtime::Handle::try_current()
        .map_err(|_| WalletError::internal("Wallet session must be driven by a tokio runtime"))?;
    runtime.spawn_blocking(f).await?
}
