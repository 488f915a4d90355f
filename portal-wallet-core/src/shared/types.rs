use serde::{Deserialize, Serialize};

use crate::shared::constants::{BALANCE_DISPLAY_DECIMALS, NATIVE_DECIMALS, NATIVE_DENOM};
use crate::shared::utils::{format_amount, truncate_decimals};

// Basic types for wallet operations
pub type Address = String;
pub type PublicKey = String;
pub type Amount = String;

/// Lifecycle state of the wallet session as seen by callers
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    NoWallet,
    Locked,
    Unlocked,
}

impl SessionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionStatus::NoWallet => "no_wallet",
            SessionStatus::Locked => "locked",
            SessionStatus::Unlocked => "unlocked",
        }
    }
}

impl std::fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Account balance in base units of a single denomination
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Balance {
    pub denom: String,
    pub amount: Amount,
    pub decimals: u8,
}

impl Balance {
    pub fn new(denom: impl Into<String>, amount: impl Into<Amount>, decimals: u8) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
            decimals,
        }
    }

    /// Native INJ balance (18 decimals)
    pub fn native(amount: impl Into<Amount>) -> Self {
        Self::new(NATIVE_DENOM, amount, NATIVE_DECIMALS)
    }

    pub fn zero() -> Self {
        Self::native("0")
    }

    /// Display-unit rendering truncated to `places` fractional digits
    pub fn formatted(&self, places: u8) -> WalletResult<String> {
        let full = format_amount(&self.amount, self.decimals)?;
        Ok(truncate_decimals(&full, places))
    }

    /// Rendering used by the wallet screen
    pub fn display(&self) -> WalletResult<String> {
        self.formatted(BALANCE_DISPLAY_DECIMALS)
    }
}

// Result types for better error handling
pub type WalletResult<T> = Result<T, crate::shared::error::WalletError>;
