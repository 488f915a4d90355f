use serde::{Deserialize, Serialize};

use crate::shared::constants::RECOVERABLE_SIGNATURE_SIZE;
use crate::shared::error::WalletError;

/// Recoverable message signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageSignature {
    /// `0x`-prefixed 32-byte hex
    pub r: String,
    /// `0x`-prefixed 32-byte hex
    pub s: String,
    /// 27 or 28
    pub v: u8,
    /// `0x` + r ‖ s ‖ v, 65 bytes
    pub signature: String,
}

impl MessageSignature {
    pub fn from_parts(r: &[u8], s: &[u8], v: u8) -> Self {
        Self {
            r: format!("0x{}", hex::encode(r)),
            s: format!("0x{}", hex::encode(s)),
            v,
            signature: format!("0x{}{}{:02x}", hex::encode(r), hex::encode(s), v),
        }
    }

    /// Parse a 65-byte `r ‖ s ‖ v` hex signature
    pub fn from_hex(signature: &str) -> Result<Self, WalletError> {
        let bytes = hex::decode(signature.trim().trim_start_matches("0x"))?;
        if bytes.len() != RECOVERABLE_SIGNATURE_SIZE {
            return Err(WalletError::validation(format!(
                "Signature must be {} bytes",
                RECOVERABLE_SIGNATURE_SIZE
            )));
        }
        Ok(Self::from_parts(&bytes[..32], &bytes[32..64], bytes[64]))
    }

    pub fn to_hex(&self) -> String {
        self.signature.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_signature_from_parts() {
        let signature = MessageSignature::from_parts(&[0x11; 32], &[0x22; 32], 27);
        assert_eq!(signature.r, format!("0x{}", "11".repeat(32)));
        assert_eq!(signature.s, format!("0x{}", "22".repeat(32)));
        assert_eq!(signature.v, 27);
        assert_eq!(signature.to_hex(), format!("0x{}{}1b", "11".repeat(32), "22".repeat(32)));
    }

    #[test]
    fn test_message_signature_from_hex() {
        let original = MessageSignature::from_parts(&[0xab; 32], &[0xcd; 32], 28);
        let parsed = MessageSignature::from_hex(&original.signature).expect("parse");
        assert_eq!(parsed, original);

        assert!(MessageSignature::from_hex("0x1234").is_err());
        assert!(MessageSignature::from_hex("0xzz").is_err());
    }
}
