use crate::shared::constants::{PBKDF2_ITERATIONS, SALT_SIZE};

/// Password key-derivation configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordConfig {
    pub salt_length: usize,
    pub iterations: u32,
}

impl PasswordConfig {
    /// Same layout with a different iteration count
    ///
    /// Lower counts are only meant for tests; blobs record no iteration
    /// count, so a vault must be opened with the count it was sealed with.
    pub fn with_iterations(iterations: u32) -> Self {
        Self {
            iterations,
            ..Self::default()
        }
    }
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            salt_length: SALT_SIZE,
            iterations: PBKDF2_ITERATIONS,
        }
    }
}
