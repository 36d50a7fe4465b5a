//! File-backed prompt templates.
//!
//! Templates live in one directory as `<key>.txt` or versioned
//! `<key>_v<N>.txt`. The highest version wins; the unversioned file is used
//! only when no versioned one exists.

use std::path::PathBuf;
use tracing::{debug, warn};
use tutor_application::PromptTemplateRepository;

/// Reads prompt templates from a directory.
pub struct FilePromptRepository {
    dir: PathBuf,
}

impl FilePromptRepository {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Path of the template that `latest(key)` would read.
    pub fn resolve(&self, key: &str) -> Option<PathBuf> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!("Prompt directory {} unavailable: {}", self.dir.display(), e);
                return None;
            }
        };

        let mut unversioned = None;
        let mut best: Option<(u32, PathBuf)> = None;

        for entry in entries.flatten() {
            let path = entry.path();
            let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
                continue;
            };
            let Some(stem) = name.strip_suffix(".txt") else {
                continue;
            };

            if stem == key {
                unversioned = Some(path);
            } else if let Some(version) = parse_version(stem, key)
                && best.as_ref().is_none_or(|(v, _)| version > *v)
            {
                best = Some((version, path));
            }
        }

        best.map(|(_, path)| path).or(unversioned)
    }
}

/// `spark_v3` with key `spark` yields `Some(3)`.
fn parse_version(stem: &str, key: &str) -> Option<u32> {
    stem.strip_prefix(key)?
        .strip_prefix("_v")?
        .parse()
        .ok()
}

impl PromptTemplateRepository for FilePromptRepository {
    fn latest(&self, key: &str) -> Option<String> {
        let path = self.resolve(key)?;
        match std::fs::read_to_string(&path) {
            Ok(template) => {
                debug!(key, path = %path.display(), "Loaded prompt template");
                Some(template)
            }
            Err(e) => {
                warn!("Could not read prompt template {}: {}", path.display(), e);
                None
            }
        }
    }
}
