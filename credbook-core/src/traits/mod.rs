//! Storage layer abstraction trait definition

mod blob_store;

pub use blob_store::BlobStore;
