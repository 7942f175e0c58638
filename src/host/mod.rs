//! Host environment interface
//!
//! The ledger runs as guest code inside an execution environment that
//! authenticates the caller, persists raw key/value state, and carries log
//! output. [`HostAdapter`] is that collaborator contract; the ledger never
//! touches storage except through it.
//!
//! Two adapters ship with the crate: [`InMemoryHost`] for tests and
//! [`FileHost`], a JSON-file-backed host used by the simulator binary.

pub mod file;
pub mod memory;

pub use file::{FileHost, FileHostConfig, HostError};
pub use memory::InMemoryHost;

/// The services a host environment provides to the ledger.
///
/// Caller authentication happens before dispatch; `current_caller` returns an
/// already-verified identity. Storage is a flat byte-valued key space shared
/// with nothing else, so the ledger applies its own key-prefix scheme.
pub trait HostAdapter {
    /// Identity of the account invoking the current operation
    fn current_caller(&self) -> String;

    /// Whether a key is present in persistent storage
    fn storage_has_key(&self, key: &str) -> bool;

    /// Read a value from persistent storage, `None` if absent
    fn storage_get(&self, key: &str) -> Option<Vec<u8>>;

    /// Write a value to persistent storage
    fn storage_set(&mut self, key: &str, value: &[u8]);

    /// Emit a log line / event message (best effort, never fails)
    fn emit_log(&mut self, message: &str);
}
