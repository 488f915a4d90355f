use crate::shared::constants::HASH_SIZE;
use sha3::{Digest, Keccak256};

/// Hash manager
pub struct HashManager;

impl HashManager {
    pub fn keccak256(data: &[u8]) -> [u8; HASH_SIZE] {
        let mut hasher = Keccak256::new();
        hasher.update(data);
        hasher.finalize().into()
    }
}
