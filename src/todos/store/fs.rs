use super::KeyValueStore;
use crate::error::{Result, TodoError};
use std::fs;
use std::path::{Path, PathBuf};

/// Stores each key as `<root>/<key>.json`.
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn key_path(&self, key: &str) -> Result<PathBuf> {
        let valid = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\'])
            && !key.contains('\0');
        if !valid {
            return Err(TodoError::Store(format!("Invalid storage key: {:?}", key)));
        }
        Ok(self.root.join(format!("{}.json", key)))
    }

    fn ensure_dir(&self) -> Result<()> {
        if !self.root.exists() {
            fs::create_dir_all(&self.root).map_err(TodoError::Io)?;
        }
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let path = self.key_path(key)?;
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path).map_err(TodoError::Io)?;
        Ok(Some(content))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let path = self.key_path(key)?;
        self.ensure_dir()?;
        fs::write(path, value).map_err(TodoError::Io)?;
        Ok(())
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileStore::new(dir.path().to_path_buf());
        assert_eq!(store.get("todo-list").unwrap(), None);
    }

    #[test]
    fn set_creates_directory_and_persists_across_instances() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("nested").join("data");

        let mut store = FileStore::new(root.clone());
        store.set("todo-list", "[]").unwrap();
        assert!(root.join("todo-list.json").exists());

        let reopened = FileStore::new(root);
        assert_eq!(reopened.get("todo-list").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn rejects_keys_that_escape_the_root() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = FileStore::new(dir.path().to_path_buf());

        for key in ["", "..", "../other", "a/b", "a\\b"] {
            assert!(
                matches!(store.set(key, "x"), Err(TodoError::Store(_))),
                "key {:?} should be rejected",
                key
            );
        }
    }
}
