//! Balance lookup consumed from the chain-integration layer

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::shared::error::WalletError;
use crate::shared::types::Balance;

/// Address → balance lookup
///
/// Implementations talk to the chain; the wallet core only calls this once
/// the session is unlocked and never depends on it succeeding.
#[async_trait]
pub trait BalanceRepository: Send + Sync {
    /// Balance of the bech32 account `address`
    async fn fetch_balance(&self, address: &str) -> Result<Balance, WalletError>;
}

/// Fixed balances keyed by address, for tests and offline use
#[derive(Default)]
pub struct StaticBalanceRepository {
    balances: Mutex<HashMap<String, Balance>>,
    failure: Mutex<Option<String>>,
}

impl StaticBalanceRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_balance(&self, address: impl Into<String>, balance: Balance) -> Result<(), WalletError> {
        self.balances
            .lock()
            .map_err(|_| WalletError::internal("Balance map lock poisoned"))?
            .insert(address.into(), balance);
        Ok(())
    }

    /// Make every lookup fail with a `Network` error until cleared
    pub fn set_failure(&self, message: Option<String>) -> Result<(), WalletError> {
        *self
            .failure
            .lock()
            .map_err(|_| WalletError::internal("Balance failure lock poisoned"))? = message;
        Ok(())
    }
}

#[async_trait]
impl BalanceRepository for StaticBalanceRepository {
    async fn fetch_balance(&self, address: &str) -> Result<Balance, WalletError> {
        if let Some(message) = self
            .failure
            .lock()
            .map_err(|_| WalletError::internal("Balance failure lock poisoned"))?
            .clone()
        {
            return Err(WalletError::network(message));
        }

        Ok(self
            .balances
            .lock()
            .map_err(|_| WalletError::internal("Balance map lock poisoned"))?
            .get(address)
            .cloned()
            .unwrap_or_else(Balance::zero))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_static_repository() {
        let repo = StaticBalanceRepository::new();
        assert_eq!(repo.fetch_balance("inj1unknown").await.expect("fetch"), Balance::zero());

        repo.set_balance("inj1abc", Balance::native("2500000000000000000")).expect("set");
        let balance = repo.fetch_balance("inj1abc").await.expect("fetch");
        assert_eq!(balance.display().expect("format"), "2.5000");

        repo.set_failure(Some("rpc down".to_string())).expect("set failure");
        assert!(matches!(repo.fetch_balance("inj1abc").await, Err(WalletError::Network(_))));
    }
}
