// src/system/comment_provider.rs

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Supplies the raw comment block attached to a handler.
///
/// Returning `Ok(None)` means the handler is unknown or not accessible, which
/// is reported to the user but is not an error.
pub trait CommentProvider {
    fn comment_for(&self, handler_id: &str) -> io::Result<Option<String>>;
}

/// Comments registered up front, keyed by handler id.
#[derive(Debug, Default, Clone)]
pub struct MapCommentProvider {
    comments: HashMap<String, String>,
}

impl MapCommentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, handler_id: impl Into<String>, comment: impl Into<String>) -> Self {
        self.insert(handler_id, comment);
        self
    }

    pub fn insert(&mut self, handler_id: impl Into<String>, comment: impl Into<String>) {
        self.comments.insert(handler_id.into(), comment.into());
    }
}

impl CommentProvider for MapCommentProvider {
    fn comment_for(&self, handler_id: &str) -> io::Result<Option<String>> {
        Ok(self.comments.get(handler_id).cloned())
    }
}

/// Reads each handler's comment from a file; the handler id is the file path,
/// resolved against an optional base directory.
#[derive(Debug, Default, Clone)]
pub struct FileCommentProvider {
    base_dir: Option<PathBuf>,
}

impl FileCommentProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_dir(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: Some(base_dir.into()),
        }
    }

    fn resolve(&self, handler_id: &str) -> PathBuf {
        match &self.base_dir {
            Some(dir) => dir.join(handler_id),
            None => Path::new(handler_id).to_path_buf(),
        }
    }
}

impl CommentProvider for FileCommentProvider {
    fn comment_for(&self, handler_id: &str) -> io::Result<Option<String>> {
        let path = self.resolve(handler_id);
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("No comment file at '{}'.", path.display());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_map_provider_lookup() {
        let provider = MapCommentProvider::new().with("pack", "/** Pack it */");
        assert_eq!(
            provider.comment_for("pack").unwrap().as_deref(),
            Some("/** Pack it */")
        );
        assert!(provider.comment_for("unpack").unwrap().is_none());
    }

    #[test]
    fn test_file_provider_reads_and_reports_missing() {
        // --- Setup ---
        let dir = TempDir::new().unwrap();
        let mut file = fs::File::create(dir.path().join("pack.txt")).unwrap();
        file.write_all(b"/**\n * Pack\n */").unwrap();
        file.flush().unwrap();

        // --- Execute ---
        let provider = FileCommentProvider::in_dir(dir.path());
        let found = provider.comment_for("pack.txt").unwrap();
        let missing = provider.comment_for("nope.txt").unwrap();

        // --- Assert ---
        assert_eq!(found.as_deref(), Some("/**\n * Pack\n */"));
        assert!(missing.is_none());
    }
}
