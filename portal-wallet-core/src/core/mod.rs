//! Core wallet functionality
//!
//! This module contains the core wallet functionality including
//! the wallet session, cryptography and encrypted storage.

pub mod wallet;
pub mod crypto;
pub mod storage;
