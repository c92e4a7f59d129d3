use super::backend::StorageBackend;
use crate::error::{HabitzError, Result};
use std::cell::RefCell;
use std::path::PathBuf;

/// In-memory storage backend for testing.
///
/// Holds the file text itself, so everything above the backend (line format,
/// sanitization, ordering) runs exactly as it does against a real file.
/// Uses `RefCell` since habitz is single-threaded.
#[derive(Default)]
pub struct MemBackend {
    contents: RefCell<Option<Vec<u8>>>,
    simulate_write_error: RefCell<bool>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `contents` as the stored file.
    pub fn with_contents(contents: impl AsRef<[u8]>) -> Self {
        Self {
            contents: RefCell::new(Some(contents.as_ref().to_vec())),
            simulate_write_error: RefCell::new(false),
        }
    }

    /// Current stored text, or None if nothing was ever written.
    pub fn contents(&self) -> Option<String> {
        self.contents
            .borrow()
            .as_ref()
            .map(|bytes| String::from_utf8_lossy(bytes).into_owned())
    }

    /// Enable write error simulation for testing error handling.
    pub fn set_simulate_write_error(&self, simulate: bool) {
        *self.simulate_write_error.borrow_mut() = simulate;
    }
}

impl StorageBackend for MemBackend {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        Ok(self.contents.borrow().clone())
    }

    fn write(&self, contents: &str) -> Result<()> {
        if *self.simulate_write_error.borrow() {
            return Err(HabitzError::Io(std::io::Error::other(
                "Simulated write error",
            )));
        }
        *self.contents.borrow_mut() = Some(contents.as_bytes().to_vec());
        Ok(())
    }

    fn location(&self) -> PathBuf {
        PathBuf::from("memory://habits.jsonl")
    }
}
