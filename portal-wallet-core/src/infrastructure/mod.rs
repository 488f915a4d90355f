//! Infrastructure layer - platform-specific implementations
//!
//! Durable storage backends the wallet persists through.

pub mod platform;

// Re-export infrastructure components
pub use platform::*;
