//! Trait abstraction for key-value storage to enable substitution in tests

use crate::error::StoreError;

/// Key-value storage the profile store writes through
#[cfg_attr(test, mockall::automock)]
pub trait StorageBackend: Send {
    /// Read the value stored under `key`, `None` when nothing is stored
    fn read(&self, key: &str) -> Result<Option<String>, StoreError>;

    /// Replace the value stored under `key`
    fn write(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}
