//! strider: compiled glob patterns and a pattern-driven directory
//! walker.
//!
//! Provides:
//! - **glob_match**: direct shell-style glob matching with `*`, `**`,
//!   `?`, `[...]` classes, `{a,b,c}` alternation, `!` negation and
//!   `\` escapes
//! - **Pattern**: a glob compiled into classified slices, structural
//!   flags and a specialised match algorithm
//! - **Walker / Walk / WalkOptions**: depth-first directory iteration
//!   filtered through a compiled pattern
//!
//! The compiler and matcher are pure: no allocation after
//! compilation, no shared state, safe to run concurrently on distinct
//! inputs. Matching is total — malformed patterns fail to match
//! instead of erroring. The walker is synchronous and single-threaded;
//! unreadable subtrees are skipped, optionally reported through
//! [`WalkOptions::on_error`].
//!
//! ```
//! use strider::{glob_match, Pattern};
//!
//! assert!(glob_match("some/**/needle.{js,txt}", "some/path/to/needle.txt"));
//!
//! let pattern = Pattern::new("!*.log");
//! assert!(pattern.negated());
//! assert!(pattern.matches("src/main.rs"));
//! assert!(!pattern.matches("debug.log"));
//! ```

mod compile;
mod entry;
mod glob;
mod pattern;
mod slice;
mod traversal;
mod walker;

pub use entry::{Entry, EntryKind};
pub use glob::glob_match;
pub use pattern::Pattern;
pub use slice::{Hint, Slice};
pub use walker::{ErrorCallback, Walk, WalkOptions, Walker};

use thiserror::Error;

/// Errors surfaced through the walker's optional error channel.
///
/// Traversal failures never abort a walk; the affected subtree is
/// skipped and, when a callback is installed, reported.
#[derive(Debug, Error)]
pub enum WalkError {
    #[error("not found: {0}")]
    NotFound(String),
    #[error("permission denied: {0}")]
    PermissionDenied(String),
    #[error("io error: {0}: {1}")]
    Io(String, std::io::Error),
}

impl WalkError {
    pub(crate) fn from_io(path: &str, error: std::io::Error) -> Self {
        match error.kind() {
            std::io::ErrorKind::NotFound => Self::NotFound(path.to_string()),
            std::io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_string()),
            _ => Self::Io(path.to_string(), error),
        }
    }
}
