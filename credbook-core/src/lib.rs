//! Credbook Core Library
//!
//! Core logic for a local credential-account manager:
//! - Account store (in-memory collection + best-effort persistence)
//! - Draft state and validation for account editing
//!
//! The storage layer is abstracted through the [`traits::BlobStore`]
//! trait, so any key-value backend can be injected.

pub mod error;
pub mod services;
pub mod traits;
pub mod types;

#[cfg(test)]
mod test_utils;

// Re-export common types
pub use error::{CoreError, CoreResult};
pub use services::{AccountStore, STORAGE_KEY};
pub use traits::BlobStore;
