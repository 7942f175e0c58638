//! In-memory host adapter
//!
//! Backs storage with a `HashMap` and captures emitted logs, so tests can
//! assert on both. The caller identity is settable to simulate invocations
//! from different accounts.

use super::HostAdapter;
use std::collections::HashMap;

/// A host environment held entirely in memory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryHost {
    caller: String,
    storage: HashMap<String, Vec<u8>>,
    logs: Vec<String>,
}

impl InMemoryHost {
    /// Create an empty host with the given caller identity
    pub fn new(caller: &str) -> Self {
        Self {
            caller: caller.to_string(),
            storage: HashMap::new(),
            logs: Vec::new(),
        }
    }

    /// Change the caller identity for subsequent invocations
    pub fn set_caller(&mut self, caller: &str) {
        self.caller = caller.to_string();
    }

    /// Messages emitted so far, oldest first
    pub fn logs(&self) -> &[String] {
        &self.logs
    }

    /// Number of keys currently stored
    pub fn storage_len(&self) -> usize {
        self.storage.len()
    }
}

impl HostAdapter for InMemoryHost {
    fn current_caller(&self) -> String {
        self.caller.clone()
    }

    fn storage_has_key(&self, key: &str) -> bool {
        self.storage.contains_key(key)
    }

    fn storage_get(&self, key: &str) -> Option<Vec<u8>> {
        self.storage.get(key).cloned()
    }

    fn storage_set(&mut self, key: &str, value: &[u8]) {
        self.storage.insert(key.to_string(), value.to_vec());
    }

    fn emit_log(&mut self, message: &str) {
        self.logs.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_caller_identity() {
        let mut host = InMemoryHost::new("alice");
        assert_eq!(host.current_caller(), "alice");

        host.set_caller("bob");
        assert_eq!(host.current_caller(), "bob");
    }

    #[test]
    fn test_storage_round_trip() {
        let mut host = InMemoryHost::new("alice");

        assert!(!host.storage_has_key("k"));
        assert_eq!(host.storage_get("k"), None);

        host.storage_set("k", b"value");
        assert!(host.storage_has_key("k"));
        assert_eq!(host.storage_get("k").unwrap(), b"value");

        // Overwrite
        host.storage_set("k", b"other");
        assert_eq!(host.storage_get("k").unwrap(), b"other");
        assert_eq!(host.storage_len(), 1);
    }

    #[test]
    fn test_log_capture() {
        let mut host = InMemoryHost::new("alice");
        host.emit_log("first");
        host.emit_log("second");

        assert_eq!(host.logs(), &["first".to_string(), "second".to_string()]);
    }
}
