//! Page file storage
//!
//! Each page lives in its own file named `{title}.txt` whose content is the
//! raw body. Saving truncates and rewrites the file; loading reads it whole.
//! There is no store object: every call resolves the path from its
//! arguments and touches the filesystem once.

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::domain::{filename, Document, PAGE_EXTENSION};

/// Permission bits for newly created page files (owner read/write)
#[cfg(unix)]
const PAGE_MODE: u32 = 0o600;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to write page file: {}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to read page file: {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to list page directory: {}", path.display())]
    List {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl StoreError {
    /// Returns the path the failed operation targeted
    pub fn path(&self) -> &Path {
        match self {
            StoreError::Write { path, .. }
            | StoreError::Read { path, .. }
            | StoreError::List { path, .. } => path,
        }
    }

    /// Returns the kind of the underlying I/O error
    pub fn kind(&self) -> io::ErrorKind {
        match self {
            StoreError::Write { source, .. }
            | StoreError::Read { source, .. }
            | StoreError::List { source, .. } => source.kind(),
        }
    }

    /// Returns true if the target file or directory does not exist
    pub fn is_not_found(&self) -> bool {
        self.kind() == io::ErrorKind::NotFound
    }
}

/// Saves a document to `{title}.txt` in the working directory
pub fn save(doc: &Document) -> Result<(), StoreError> {
    write_page(PathBuf::from(doc.filename()), &doc.body)
}

/// Loads the document stored in `{title}.txt` in the working directory
pub fn load(title: &str) -> Result<Document, StoreError> {
    read_page(PathBuf::from(filename(title)), title)
}

/// Returns the path of a page file under `dir`
pub fn path_in(dir: &Path, title: &str) -> PathBuf {
    dir.join(filename(title))
}

/// Saves a document to `{dir}/{title}.txt`
pub fn save_in(dir: &Path, doc: &Document) -> Result<(), StoreError> {
    write_page(path_in(dir, &doc.title), &doc.body)
}

/// Loads the document stored in `{dir}/{title}.txt`
pub fn load_from(dir: &Path, title: &str) -> Result<Document, StoreError> {
    read_page(path_in(dir, title), title)
}

/// Checks if a page file exists under `dir`
pub fn exists_in(dir: &Path, title: &str) -> bool {
    path_in(dir, title).is_file()
}

/// Lists the titles of all page files directly under `dir`, sorted
///
/// Entries whose names are not valid UTF-8 are skipped.
pub fn list_in(dir: &Path) -> Result<Vec<String>, StoreError> {
    let list_err = |source: io::Error| StoreError::List {
        path: dir.to_path_buf(),
        source,
    };

    let mut titles = Vec::new();

    for entry in fs::read_dir(dir).map_err(list_err)? {
        let entry = entry.map_err(list_err)?;
        let path = entry.path();

        if !path.is_file() || !path.extension().is_some_and(|e| e == PAGE_EXTENSION) {
            continue;
        }

        if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
            titles.push(stem.to_string());
        }
    }

    titles.sort();
    Ok(titles)
}

/// Truncates (or creates) the file at `path` and writes `body` to it
fn write_page(path: PathBuf, body: &[u8]) -> Result<(), StoreError> {
    let mut options = OpenOptions::new();
    options.write(true).create(true).truncate(true);

    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(PAGE_MODE);
    }

    let result = options.open(&path).and_then(|mut file| file.write_all(body));

    result.map_err(|source| StoreError::Write { path, source })
}

fn read_page(path: PathBuf, title: &str) -> Result<Document, StoreError> {
    match fs::read(&path) {
        Ok(body) => Ok(Document::new(title, body)),
        Err(source) => Err(StoreError::Read { path, source }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use tempfile::TempDir;

    #[test]
    fn save_writes_exact_bytes() {
        let dir = TempDir::new().unwrap();
        let doc = Document::new("TestPage", "This is a test page");

        save_in(dir.path(), &doc).unwrap();

        let raw = fs::read(dir.path().join("TestPage.txt")).unwrap();
        assert_eq!(raw, b"This is a test page");
        assert_eq!(raw.len(), 19);
    }

    #[test]
    fn load_returns_saved_document() {
        let dir = TempDir::new().unwrap();
        let doc = Document::new("TestPage", "This is a test page");
        save_in(dir.path(), &doc).unwrap();

        let loaded = load_from(dir.path(), "TestPage").unwrap();
        assert_eq!(loaded, doc);
        assert_eq!(loaded.body_text(), "This is a test page");
    }

    #[test]
    fn save_overwrites_previous_body() {
        let dir = TempDir::new().unwrap();
        save_in(dir.path(), &Document::new("page", "a much longer first body")).unwrap();
        save_in(dir.path(), &Document::new("page", "short")).unwrap();

        let loaded = load_from(dir.path(), "page").unwrap();
        assert_eq!(loaded.body, b"short");
    }

    #[test]
    fn save_twice_matches_save_once() {
        let dir = TempDir::new().unwrap();
        let doc = Document::new("twice", "same content");

        save_in(dir.path(), &doc).unwrap();
        save_in(dir.path(), &doc).unwrap();

        let loaded = load_from(dir.path(), "twice").unwrap();
        assert_eq!(loaded.body, doc.body);
    }

    #[test]
    fn empty_body_round_trips() {
        let dir = TempDir::new().unwrap();
        save_in(dir.path(), &Document::new("empty", Vec::new())).unwrap();

        let loaded = load_from(dir.path(), "empty").unwrap();
        assert!(loaded.is_empty());
    }

    #[test]
    fn binary_body_round_trips() {
        let dir = TempDir::new().unwrap();
        let body: Vec<u8> = (0..=255).collect();
        save_in(dir.path(), &Document::new("bin", body.clone())).unwrap();

        assert_eq!(load_from(dir.path(), "bin").unwrap().body, body);
    }

    #[test]
    fn load_missing_page_is_read_error() {
        let dir = TempDir::new().unwrap();

        let err = load_from(dir.path(), "Nowhere").unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
        assert!(err.is_not_found());
        assert_eq!(err.path(), dir.path().join("Nowhere.txt"));
    }

    #[test]
    fn save_into_missing_directory_is_write_error() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing");

        let err = save_in(&missing, &Document::new("page", "body")).unwrap_err();
        assert!(matches!(err, StoreError::Write { .. }));
        assert!(err.is_not_found());
    }

    #[test]
    fn title_is_not_stored_in_file() {
        let dir = TempDir::new().unwrap();
        save_in(dir.path(), &Document::new("Original", "body")).unwrap();
        fs::rename(dir.path().join("Original.txt"), dir.path().join("Renamed.txt")).unwrap();

        let loaded = load_from(dir.path(), "Renamed").unwrap();
        assert_eq!(loaded.title, "Renamed");
        assert_eq!(loaded.body, b"body");
    }

    #[cfg(unix)]
    #[test]
    fn new_page_is_owner_only() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        save_in(dir.path(), &Document::new("private", "secret")).unwrap();

        let mode = fs::metadata(path_in(dir.path(), "private"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[test]
    fn list_returns_sorted_page_titles() {
        let dir = TempDir::new().unwrap();
        save_in(dir.path(), &Document::new("beta", "b")).unwrap();
        save_in(dir.path(), &Document::new("alpha", "a")).unwrap();
        fs::write(dir.path().join("notes.md"), "ignored").unwrap();
        fs::create_dir(dir.path().join("folder.txt")).unwrap();

        assert_eq!(list_in(dir.path()).unwrap(), vec!["alpha", "beta"]);
    }

    #[test]
    fn list_missing_directory_fails() {
        let dir = TempDir::new().unwrap();

        let err = list_in(&dir.path().join("missing")).unwrap_err();
        assert!(matches!(err, StoreError::List { .. }));
    }

    #[test]
    fn exists_tracks_saved_pages() {
        let dir = TempDir::new().unwrap();
        assert!(!exists_in(dir.path(), "page"));

        save_in(dir.path(), &Document::new("page", "")).unwrap();
        assert!(exists_in(dir.path(), "page"));
    }

    proptest! {
        #[test]
        fn round_trip_preserves_body(
            title in "[A-Za-z0-9_-]{1,24}",
            body in proptest::collection::vec(any::<u8>(), 0..512),
        ) {
            let dir = TempDir::new().unwrap();
            save_in(dir.path(), &Document::new(title.clone(), body.clone())).unwrap();

            let loaded = load_from(dir.path(), &title).unwrap();
            prop_assert_eq!(loaded.title, title);
            prop_assert_eq!(loaded.body, body);
        }

        #[test]
        fn last_save_wins(
            first in proptest::collection::vec(any::<u8>(), 0..256),
            second in proptest::collection::vec(any::<u8>(), 0..256),
        ) {
            let dir = TempDir::new().unwrap();
            save_in(dir.path(), &Document::new("page", first)).unwrap();
            save_in(dir.path(), &Document::new("page", second.clone())).unwrap();

            prop_assert_eq!(load_from(dir.path(), "page").unwrap().body, second);
        }
    }
}
