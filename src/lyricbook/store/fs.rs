use super::SongStore;
use crate::error::{LyricbookError, Result};
use crate::model::Song;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(LyricbookError::Io)?;
            }
        }
        Ok(())
    }
}

impl SongStore for FileStore {
    fn load(&self) -> Result<Vec<Song>> {
        if !self.path.exists() {
            debug!(path = %self.path.display(), "store file missing, starting empty");
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(LyricbookError::Io)?;
        let songs: Vec<Song> =
            serde_json::from_str(&content).map_err(|source| LyricbookError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;
        debug!(path = %self.path.display(), count = songs.len(), "loaded store");
        Ok(songs)
    }

    fn save(&mut self, songs: &[Song]) -> Result<()> {
        self.ensure_parent()?;
        let content = serde_json::to_string_pretty(songs).map_err(LyricbookError::Serialization)?;

        // Temp file lives next to the store so the rename stays on one filesystem
        let file_name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("lyricbook.json");
        let tmp_file = self
            .path
            .with_file_name(format!(".{}-{}.tmp", file_name, Uuid::new_v4()));
        fs::write(&tmp_file, content).map_err(LyricbookError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(LyricbookError::Io(e));
        }

        debug!(path = %self.path.display(), count = songs.len(), "saved store");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample() -> Vec<Song> {
        vec![
            Song::new("Adele", "Hello", "Hello, it's me").unwrap(),
            Song::new("Queen", "Bohemian Rhapsody", "Is this the real life?").unwrap(),
        ]
    }

    #[test]
    fn missing_file_loads_empty() {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("lyricbook.json"));
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_preserves_order() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("lyricbook.json"));
        store.save(&sample()).unwrap();

        assert_eq!(store.load().unwrap(), sample());
    }

    #[test]
    fn save_overwrites_previous_state() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("lyricbook.json"));
        store.save(&sample()).unwrap();
        store.save(&sample()[..1]).unwrap();

        assert_eq!(store.load().unwrap().len(), 1);
    }

    #[test]
    fn save_creates_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("deeper").join("book.json");
        let mut store = FileStore::new(&path);
        store.save(&sample()).unwrap();

        assert!(path.exists());
    }

    #[test]
    fn save_leaves_no_temp_files() {
        let dir = TempDir::new().unwrap();
        let mut store = FileStore::new(dir.path().join("lyricbook.json"));
        store.save(&sample()).unwrap();

        let entries: Vec<_> = fs::read_dir(dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn writes_pretty_json_array() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lyricbook.json");
        let mut store = FileStore::new(&path);
        store.save(&sample()[..1]).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.starts_with("[\n  {\n    \"artist\": \"Adele\""));
    }

    #[test]
    fn corrupt_file_is_reported() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lyricbook.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::new(&path);
        match store.load() {
            Err(LyricbookError::CorruptStore { path: p, .. }) => assert_eq!(p, path),
            other => panic!("Expected CorruptStore, got {:?}", other),
        }
    }

    #[test]
    fn wrong_shape_is_corrupt() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("lyricbook.json");
        fs::write(&path, r#"[{"artist": "Adele"}]"#).unwrap();

        let store = FileStore::new(&path);
        assert!(matches!(
            store.load(),
            Err(LyricbookError::CorruptStore { .. })
        ));
    }
}
