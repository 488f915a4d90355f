//! Domain layer - entities and repositories
//!
//! Wallet entities and the interfaces the core consumes from collaborators.

pub mod entities;
pub mod repositories;

// Re-export domain components
pub use entities::*;
pub use repositories::*;
