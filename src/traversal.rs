//! Single-directory enumeration over the platform primitive.

use std::fs::{self, FileType};
use std::path::MAIN_SEPARATOR;

use tracing::debug;

use crate::entry::{Entry, EntryKind};
use crate::WalkError;

/// Join a directory prefix and an entry name with the platform
/// separator.
pub(crate) fn join(prefix: &str, name: &str) -> String {
    format!("{prefix}{MAIN_SEPARATOR}{name}")
}

/// A scoped enumeration of one directory.
///
/// The handle is released at end-of-stream or on drop, whichever
/// comes first.
pub(crate) struct Traversal {
    prefix: String,
    handle: Option<fs::ReadDir>,
}

impl Traversal {
    /// Open a directory for enumeration.
    pub(crate) fn open(prefix: &str) -> Result<Self, WalkError> {
        match fs::read_dir(prefix) {
            Ok(handle) => Ok(Self {
                prefix: prefix.to_string(),
                handle: Some(handle),
            }),
            Err(error) => Err(WalkError::from_io(prefix, error)),
        }
    }

    /// Read, classify and join the next entry; `None` at end-of-stream.
    ///
    /// The platform enumerator already omits `.` and `..`. Entries
    /// whose metadata cannot be read keep the `Invalid` kind.
    pub(crate) fn advance(&mut self) -> Option<Entry> {
        let handle = self.handle.as_mut()?;

        loop {
            let Some(next) = handle.next() else {
                // end of stream: release the handle
                self.handle = None;
                return None;
            };

            let entry = match next {
                Ok(entry) => entry,
                Err(error) => {
                    debug!(directory = %self.prefix, %error, "skipping unreadable entry");
                    continue;
                }
            };

            let kind = entry.file_type().map_or(EntryKind::Invalid, classify);
            let path = join(&self.prefix, &entry.file_name().to_string_lossy());
            return Some(Entry::new(path, kind));
        }
    }
}

/// Map the platform file type onto an entry kind. The type of a
/// directory entry is read without following symlinks.
fn classify(file_type: FileType) -> EntryKind {
    if file_type.is_symlink() {
        EntryKind::Symlink
    } else if file_type.is_dir() {
        EntryKind::Directory
    } else if file_type.is_file() {
        EntryKind::File
    } else {
        EntryKind::Invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_missing_directory_fails() {
        let root = tempfile::tempdir().unwrap();
        let missing = join(&root.path().to_string_lossy(), "missing");
        assert!(matches!(
            Traversal::open(&missing),
            Err(WalkError::NotFound(_))
        ));
    }

    #[test]
    fn advance_yields_classified_entries_then_none() {
        let root = tempfile::tempdir().unwrap();
        std::fs::write(root.path().join("file.txt"), "x").unwrap();
        std::fs::create_dir(root.path().join("dir")).unwrap();

        let prefix = root.path().to_string_lossy().into_owned();
        let mut traversal = Traversal::open(&prefix).unwrap();

        let mut entries = Vec::new();
        while let Some(entry) = traversal.advance() {
            entries.push(entry);
        }
        assert!(traversal.advance().is_none());

        entries.sort_by(|a, b| a.path().cmp(b.path()));
        assert_eq!(entries.len(), 2);
        assert!(entries[0].path().ends_with("dir") && entries[0].is_dir());
        assert!(entries[1].path().ends_with("file.txt") && entries[1].is_file());
    }
}
