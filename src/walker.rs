//! Pattern-driven directory walking.
//!
//! A [`Walker`] binds a compiled [`Pattern`]; [`Walker::iterate`]
//! starts a depth-first [`Walk`] that pulls classified entries from
//! one directory at a time and filters them through the pattern and
//! the [`WalkOptions`] type gates.

use std::env;
use std::fmt;
use std::path::is_separator;
use std::sync::Arc;

use tracing::debug;

use crate::entry::{Entry, EntryKind};
use crate::pattern::Pattern;
use crate::traversal::Traversal;
use crate::WalkError;

/// Callback invoked when a directory cannot be opened.
///
/// Receives the directory path and the error. Lets callers log or
/// collect failures without aborting the walk; the subtree is skipped
/// either way.
pub type ErrorCallback = Arc<dyn Fn(&str, &WalkError) + Send + Sync>;

/// Options controlling a walk.
#[derive(Clone)]
pub struct WalkOptions {
    /// Emit regular files (default `true`).
    pub files: bool,
    /// Emit entries whose base name starts with `.` (default `false`).
    /// Hidden directories are not descended into either.
    pub hidden: bool,
    /// Emit symbolic links (default `false`).
    pub symlinks: bool,
    /// Emit directories (default `false`).
    pub directories: bool,
    /// Starting directory. Defaults to the working directory read at
    /// construction.
    pub cwd: String,
    /// Optional callback for unreadable directories. Default `None`
    /// skips the subtree silently.
    pub on_error: Option<ErrorCallback>,
}

impl Default for WalkOptions {
    fn default() -> Self {
        Self {
            files: true,
            hidden: false,
            symlinks: false,
            directories: false,
            cwd: env::current_dir()
                .map_or_else(|_| String::new(), |dir| dir.to_string_lossy().into_owned()),
            on_error: None,
        }
    }
}

impl fmt::Debug for WalkOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalkOptions")
            .field("files", &self.files)
            .field("hidden", &self.hidden)
            .field("symlinks", &self.symlinks)
            .field("directories", &self.directories)
            .field("cwd", &self.cwd)
            .field("on_error", &self.on_error.as_ref().map(|_| "..."))
            .finish()
    }
}

/// A depth-first, pattern-filtered walk over a directory tree.
///
/// Pending directories form a LIFO queue, so within one directory
/// siblings are seen before their children, and subtrees discovered
/// later are visited before earlier siblings' subtrees. Entry order
/// within a directory is whatever the platform enumerator returns.
///
/// The iteration ends when the pending queue is empty and no
/// traversal is active.
pub struct Walk<'p> {
    pattern: &'p Pattern,
    options: WalkOptions,
    pending: Vec<String>,
    traversal: Option<Traversal>,
}

impl<'p> Walk<'p> {
    fn new(pattern: &'p Pattern, options: WalkOptions) -> Self {
        let pending = vec![options.cwd.clone()];
        Self {
            pattern,
            options,
            pending,
            traversal: None,
        }
    }

    /// Pull entries until one passes the gates, opening pending
    /// directories as traversals drain.
    fn advance(&mut self) -> Option<Entry> {
        loop {
            if self.traversal.is_none() {
                let directory = self.pending.pop()?;
                match Traversal::open(&directory) {
                    Ok(traversal) => self.traversal = Some(traversal),
                    Err(error) => {
                        debug!(%directory, %error, "skipping unreadable directory");
                        if let Some(ref callback) = self.options.on_error {
                            callback(&directory, &error);
                        }
                        continue;
                    }
                }
            }

            while let Some(entry) = self.traversal.as_mut().and_then(Traversal::advance) {
                if let Some(entry) = self.consider(entry) {
                    return Some(entry);
                }
            }
            self.traversal = None;
        }
    }

    /// Apply hidden gating, recursion and type gating to one entry.
    fn consider(&mut self, entry: Entry) -> Option<Entry> {
        if !self.options.hidden && hidden(entry.path()) {
            return None;
        }

        let emit = match entry.kind() {
            EntryKind::File => self.options.files && self.test(entry.path()),
            EntryKind::Symlink => self.options.symlinks && self.test(entry.path()),
            EntryKind::Directory => {
                // only recursive patterns can match below this level
                if self.pattern.recursive() {
                    self.pending.push(entry.path().to_string());
                }
                self.options.directories && self.test(entry.path())
            }
            EntryKind::Invalid => false,
        };
        emit.then_some(entry)
    }

    /// Match the pattern against the candidate input: the full path
    /// for absolute patterns, the cwd-relative remainder otherwise.
    fn test(&self, path: &str) -> bool {
        let candidate = if self.pattern.absolute() {
            path
        } else {
            path.get(self.options.cwd.len() + 1..).unwrap_or("")
        };
        self.pattern.matches(candidate)
    }
}

impl Iterator for Walk<'_> {
    type Item = Entry;

    fn next(&mut self) -> Option<Entry> {
        self.advance()
    }
}

/// Base name starts with a dot.
fn hidden(path: &str) -> bool {
    path.rsplit(is_separator)
        .next()
        .is_some_and(|name| name.starts_with('.'))
}

/// Binds a compiled pattern to an iteration entry point.
///
/// # Examples
/// ```no_run
/// use strider::{WalkOptions, Walker};
///
/// let walker = Walker::new("**/*.rs");
/// for entry in walker.iterate(WalkOptions::default()) {
///     println!("{}", entry.path());
/// }
/// ```
#[derive(Debug, Clone)]
pub struct Walker {
    pattern: Pattern,
}

impl Walker {
    /// Create a walker over a pattern.
    pub fn new(pattern: impl Into<Pattern>) -> Self {
        Self {
            pattern: pattern.into(),
        }
    }

    /// The bound pattern.
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    /// Start an iteration with the given options.
    pub fn iterate(&self, options: WalkOptions) -> Walk<'_> {
        Walk::new(&self.pattern, options)
    }
}

impl Default for Walker {
    /// A walker over the dynamic `**/*` pattern, which matches every
    /// entry below the starting directory.
    fn default() -> Self {
        Self::new("**/*")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_checks_the_base_name() {
        assert!(hidden(".git"));
        assert!(hidden("a/b/.hidden"));
        assert!(!hidden("a/.b/visible"));
        assert!(!hidden("plain"));
    }

    #[test]
    fn default_options() {
        let options = WalkOptions::default();
        assert!(options.files);
        assert!(!options.hidden);
        assert!(!options.symlinks);
        assert!(!options.directories);
        assert!(options.on_error.is_none());
    }

    #[test]
    fn default_walker_is_dynamic() {
        let walker = Walker::default();
        assert_eq!(walker.pattern().view(), "**/*");
        assert!(walker.pattern().globstar());
        assert!(walker.pattern().recursive());
    }
}
