//! Wallet session management
//!
//! This module owns the lock/unlock lifecycle of the single wallet held by
//! the application.

pub mod session;

pub use session::*;
