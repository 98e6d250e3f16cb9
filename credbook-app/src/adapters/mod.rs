//! Storage adapters implementing the core `BlobStore` trait.

mod file_store;
mod memory_store;

pub use file_store::FileStore;
pub use memory_store::MemoryStore;
