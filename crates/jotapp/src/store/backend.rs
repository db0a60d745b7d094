use crate::error::Result;

/// Raw string key-value storage.
///
/// This trait handles the "where" of storage (filesystem vs memory), while
/// [`super::persistence::NotePersistence`] handles the "what" (encoding the
/// note collection). Methods take `&self`; backends that need to mutate use
/// interior mutability since jot is single-threaded.
pub trait StorageBackend {
    /// Read the value stored under `key`.
    /// Returns Ok(None) when nothing has been stored yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self, key: &str) -> Result<Option<String>>;

    /// Replace the value stored under `key`.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, key: &str, value: &str) -> Result<()>;
}
