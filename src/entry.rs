//! Directory entries yielded by the walker.

/// Kind of a directory entry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EntryKind {
    /// Unknown or unsupported entry type.
    #[default]
    Invalid,
    /// Regular file.
    File,
    /// Directory.
    Directory,
    /// Symbolic link.
    Symlink,
}

/// A classified directory entry: a full path plus its kind.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Entry {
    path: String,
    kind: EntryKind,
}

impl Entry {
    pub(crate) fn new(path: String, kind: EntryKind) -> Self {
        Self { path, kind }
    }

    /// The full path, starting directory included.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// The entry kind.
    pub fn kind(&self) -> EntryKind {
        self.kind
    }

    /// Consume the entry, keeping the path.
    pub fn into_path(self) -> String {
        self.path
    }

    /// True if this entry is a regular file.
    pub fn is_file(&self) -> bool {
        self.kind == EntryKind::File
    }

    /// True if this entry is a directory.
    pub fn is_dir(&self) -> bool {
        self.kind == EntryKind::Directory
    }

    /// True if this entry is a symbolic link.
    pub fn is_symlink(&self) -> bool {
        self.kind == EntryKind::Symlink
    }
}
