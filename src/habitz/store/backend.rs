use crate::error::Result;
use std::path::PathBuf;

/// Abstract interface for raw storage I/O.
/// This trait handles the "how" of storage (filesystem vs memory),
/// while HabitStore handles the "what" (line format, sanitization).
pub trait StorageBackend {
    /// Read the whole habit file as raw bytes.
    /// Lines are decoded individually above this layer, so one corrupt line
    /// cannot make the rest unreadable.
    /// Returns Ok(None) if it does not exist yet.
    /// Returns Err only on actual I/O errors (permissions, disk failure).
    fn read(&self) -> Result<Option<Vec<u8>>>;

    /// Replace the whole habit file.
    /// MUST be atomic (e.g. write to tmp then rename) to avoid partial writes.
    fn write(&self, contents: &str) -> Result<()>;

    /// Where the habit file lives.
    /// For FsBackend, this is the real path. For MemBackend, a virtual path.
    fn location(&self) -> PathBuf;
}
