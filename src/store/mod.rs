mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use thiserror::Error;

/// String key-value storage the form persists into.
///
/// The editor owns its store exclusively; no other writer is assumed. Backends
/// only need to survive a get/set round-trip — everything else (layout of the
/// stored string, when writes happen) is the session's business.
pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to write store file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to encode store contents")]
    Encode(#[from] serde_json::Error),
}
