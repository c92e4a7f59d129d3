use super::fs_backend::FsBackend;
use super::habit_store::HabitStore;
use std::path::PathBuf;

pub type FileStore = HabitStore<FsBackend>;

impl FileStore {
    /// A store backed by the habit file at `path`.
    /// The file and its directory are created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        HabitStore::with_backend(FsBackend::new(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Habit;
    use crate::store::DataStore;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn creates_directory_on_first_write() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("habits.jsonl");
        let mut store = FileStore::new(&path);

        assert!(store.load().unwrap().is_empty());
        assert!(!path.exists());

        store.upsert(Habit::new("Read")).unwrap();
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\"habit_name\":\"Read\",\"dates\":[]}\n"
        );
    }

    #[test]
    fn leaves_no_tmp_files_behind() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("habits.jsonl"));
        store.upsert(Habit::new("Read")).unwrap();
        store.upsert(Habit::new("Walk")).unwrap();
        store.delete("Read").unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap().to_string();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn survives_invalid_utf8_in_the_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("habits.jsonl");
        let mut bytes = b"{\"habit_name\":\"Read\",\"dates\":[\"2024-06-10\"]}\n".to_vec();
        bytes.extend_from_slice(b"{\"habit_name\":\"Bad\xff\",\"dates\":[]}\n");
        fs::write(&path, &bytes).unwrap();

        let mut store = FileStore::new(&path);
        let habits = store.load().unwrap();
        assert!(habits.contains("Read"));
        assert_eq!(habits.len(), 1);

        let report = store.compact().unwrap();
        assert!(report.rewritten);
        assert_eq!(report.repairs.skipped_lines, 1);
        assert_eq!(
            fs::read_to_string(&path).unwrap(),
            "{\"habit_name\":\"Read\",\"dates\":[\"2024-06-10\"]}\n"
        );
    }

    #[test]
    fn location_is_the_file_path() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("habits.jsonl");
        let store = FileStore::new(&path);
        assert_eq!(store.location(), path);
    }
}
