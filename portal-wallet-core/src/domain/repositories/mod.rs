//! Domain repositories
//!
//! Interfaces the wallet core consumes from collaborators outside it.

pub mod balance_repository;

// Re-export repositories
pub use balance_repository::*;
