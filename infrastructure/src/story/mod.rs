//! JSON-file story store.
//!
//! Each story is one pretty-printed JSON file, `<dir>/<id>.json`.

use std::path::{Path, PathBuf};
use tracing::debug;
use tutor_application::{StoryRecord, StoryStore, StoryStoreError};

/// [`StoryStore`] keeping one JSON file per story.
pub struct JsonFileStoryStore {
    dir: PathBuf,
}

impl JsonFileStoryStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the directory of `path`, plus the story id taken from its file stem.
    pub fn for_file(path: &Path) -> Option<(Self, String)> {
        let id = path.file_stem()?.to_str()?.to_string();
        let dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        Some((Self::new(dir), id))
    }

    pub fn path_for(&self, id: &str) -> PathBuf {
        self.dir.join(format!("{}.json", id))
    }

    fn check_id(id: &str) -> Result<(), StoryStoreError> {
        let valid = !id.is_empty()
            && id != "."
            && id != ".."
            && !id.contains(['/', '\\']);
        if valid {
            Ok(())
        } else {
            Err(StoryStoreError::Malformed {
                id: id.to_string(),
                message: "story id must be a plain file name".to_string(),
            })
        }
    }
}

impl StoryStore for JsonFileStoryStore {
    fn load(&self, id: &str) -> Result<StoryRecord, StoryStoreError> {
        Self::check_id(id)?;
        let path = self.path_for(id);

        let raw = match std::fs::read_to_string(&path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(StoryStoreError::NotFound(id.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut story: StoryRecord =
            serde_json::from_str(&raw).map_err(|e| StoryStoreError::Malformed {
                id: id.to_string(),
                message: e.to_string(),
            })?;
        if story.id.is_empty() {
            story.id = id.to_string();
        }

        debug!(id, chars = story.content.chars().count(), "Loaded story");
        Ok(story)
    }

    fn save(&self, story: &StoryRecord) -> Result<(), StoryStoreError> {
        Self::check_id(&story.id)?;
        std::fs::create_dir_all(&self.dir)?;

        let json = serde_json::to_string_pretty(story).map_err(|e| StoryStoreError::Malformed {
            id: story.id.clone(),
            message: e.to_string(),
        })?;
        std::fs::write(self.path_for(&story.id), json)?;

        debug!(id = %story.id, "Saved story");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStoryStore::new(dir.path().join("stories"));
        let story = StoryRecord {
            id: "dragon".to_string(),
            genre: "Fantasy".to_string(),
            age: Some("9".to_string()),
            content: "The dragon yawned.".to_string(),
            ..Default::default()
        };

        store.save(&story).unwrap();
        assert_eq!(store.load("dragon").unwrap(), story);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("bare.json"), r#"{"content":"Hi."}"#).unwrap();

        let story = JsonFileStoryStore::new(dir.path()).load("bare").unwrap();
        assert_eq!(story.id, "bare");
        assert_eq!(story.title, "Untitled Story");
        assert_eq!(story.genre, "General");
        assert_eq!(story.content, "Hi.");
    }

    #[test]
    fn test_load_errors() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("broken.json"), "{ nope").unwrap();
        let store = JsonFileStoryStore::new(dir.path());

        assert!(matches!(store.load("absent"), Err(StoryStoreError::NotFound(_))));
        assert!(matches!(
            store.load("broken"),
            Err(StoryStoreError::Malformed { .. })
        ));
        assert!(matches!(
            store.load("../etc/passwd"),
            Err(StoryStoreError::Malformed { .. })
        ));
    }

    #[test]
    fn test_for_file_splits_dir_and_id() {
        let (store, id) = JsonFileStoryStore::for_file(Path::new("drafts/cave.json")).unwrap();
        assert_eq!(id, "cave");
        assert_eq!(store.path_for(&id), PathBuf::from("drafts/cave.json"));

        let (store, id) = JsonFileStoryStore::for_file(Path::new("cave.json")).unwrap();
        assert_eq!(store.path_for(&id), PathBuf::from("./cave.json"));
    }
}
