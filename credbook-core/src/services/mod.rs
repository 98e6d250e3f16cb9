//! Business logic service layer

mod account_store;

pub use account_store::{AccountStore, STORAGE_KEY};
