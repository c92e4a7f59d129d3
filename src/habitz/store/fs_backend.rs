use super::backend::StorageBackend;
use crate::error::{HabitzError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub struct FsBackend {
    path: PathBuf,
}

impl FsBackend {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn ensure_dir(&self, path: &Path) -> Result<()> {
        if !path.as_os_str().is_empty() && !path.exists() {
            fs::create_dir_all(path).map_err(HabitzError::Io)?;
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let file_name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "habits".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()))
    }
}

impl StorageBackend for FsBackend {
    fn read(&self) -> Result<Option<Vec<u8>>> {
        match fs::read(&self.path) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HabitzError::Io(e)),
        }
    }

    fn write(&self, contents: &str) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            self.ensure_dir(parent)?;
        }

        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, contents).map_err(HabitzError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(HabitzError::Io(e));
        }
        Ok(())
    }

    fn location(&self) -> PathBuf {
        self.path.clone()
    }
}
