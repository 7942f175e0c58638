//! File-backed host adapter
//!
//! Persists the contract's key/value state as a JSON snapshot on disk so the
//! simulator binary can run one invocation per process. Writes go to a
//! temporary file first and land with an atomic rename. Values are raw bytes,
//! stored hex-encoded inside the JSON document.

use super::HostAdapter;
use log::debug;
use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufReader, BufWriter};
use std::path::PathBuf;
use thiserror::Error;

/// Host storage errors
#[derive(Error, Debug)]
pub enum HostError {
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// File host configuration
#[derive(Debug, Clone)]
pub struct FileHostConfig {
    pub data_dir: PathBuf,
    pub storage_file: String,
}

impl Default for FileHostConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(".token_ledger_data"),
            storage_file: "storage.json".to_string(),
        }
    }
}

/// A host environment whose key/value state lives in a JSON file.
///
/// The caller identity is fixed per instance; the simulator constructs one
/// host per invocation with the identity it is impersonating. Log emission
/// goes to the process logger.
pub struct FileHost {
    config: FileHostConfig,
    caller: String,
    // Hex-encoded values; BTreeMap keeps the snapshot diff-friendly
    storage: BTreeMap<String, String>,
    dirty: bool,
}

impl FileHost {
    /// Open (or create) the storage snapshot under `config.data_dir`
    pub fn open(config: FileHostConfig, caller: &str) -> Result<Self, HostError> {
        fs::create_dir_all(&config.data_dir)?;

        let path = config.data_dir.join(&config.storage_file);
        let storage: BTreeMap<String, String> = if path.exists() {
            let file = fs::File::open(&path)?;
            let reader = BufReader::new(file);
            serde_json::from_reader(reader)?
        } else {
            BTreeMap::new()
        };

        // Every stored value must be valid hex; a hand-edited snapshot that
        // fails here is rejected up front rather than read back as absent
        for (key, value) in &storage {
            if hex::decode(value).is_err() {
                return Err(HostError::InvalidData(format!(
                    "value at {} is not valid hex",
                    key
                )));
            }
        }

        debug!("opened file host at {:?} ({} keys)", path, storage.len());

        Ok(Self {
            config,
            caller: caller.to_string(),
            storage,
            dirty: false,
        })
    }

    /// Open with the default configuration
    pub fn with_defaults(caller: &str) -> Result<Self, HostError> {
        Self::open(FileHostConfig::default(), caller)
    }

    fn storage_path(&self) -> PathBuf {
        self.config.data_dir.join(&self.config.storage_file)
    }

    /// Persist the snapshot to disk if it changed
    pub fn save(&mut self) -> Result<(), HostError> {
        if !self.dirty {
            return Ok(());
        }

        // Write to a temporary file first, then rename into place
        let temp_path = self.config.data_dir.join("storage.tmp");
        let file = fs::File::create(&temp_path)?;
        let writer = BufWriter::new(file);
        serde_json::to_writer_pretty(writer, &self.storage)?;
        fs::rename(&temp_path, self.storage_path())?;

        self.dirty = false;
        Ok(())
    }
}

impl HostAdapter for FileHost {
    fn current_caller(&self) -> String {
        self.caller.clone()
    }

    fn storage_has_key(&self, key: &str) -> bool {
        self.storage.contains_key(key)
    }

    fn storage_get(&self, key: &str) -> Option<Vec<u8>> {
        // Values were hex-validated at open, so decode cannot fail here
        self.storage.get(key).and_then(|v| hex::decode(v).ok())
    }

    fn storage_set(&mut self, key: &str, value: &[u8]) {
        self.storage.insert(key.to_string(), hex::encode(value));
        self.dirty = true;
    }

    fn emit_log(&mut self, message: &str) {
        log::info!("{}", message);
    }
}
