//! Immutable compiled glob patterns.

use crate::compile::{compile, Compiled};
use crate::slice::Slice;

/// A compiled glob pattern.
///
/// Compilation is pure and total: every string compiles, and matching
/// always produces a boolean. The pattern owns one contiguous buffer
/// (the glob with leading `!` stripped); its slices are views into
/// that buffer.
///
/// # Examples
/// ```
/// use strider::Pattern;
///
/// let pattern = Pattern::new("src/**/*.rs");
/// assert!(pattern.matches("src/walker/mod.rs"));
/// assert!(!pattern.matches("docs/index.md"));
/// assert!(pattern.recursive());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Pattern {
    encoded: Compiled,
}

impl Pattern {
    /// Compile a glob.
    pub fn new(glob: &str) -> Self {
        Self {
            encoded: compile(glob),
        }
    }

    /// True when the compiled prefix is empty. An empty pattern
    /// matches only the empty input.
    pub fn is_empty(&self) -> bool {
        self.encoded.prefix.is_empty()
    }

    /// True when the raw glob began with an odd number of `!`.
    pub fn negated(&self) -> bool {
        self.encoded.flags.negated
    }

    /// True when the pattern starts with a platform path separator.
    /// Absolute patterns are matched against full paths rather than
    /// cwd-relative ones.
    pub fn absolute(&self) -> bool {
        self.encoded.flags.absolute
    }

    /// True when the pattern consists solely of `*` and `**` segments
    /// with at least one `**`, and therefore matches every input.
    pub fn globstar(&self) -> bool {
        self.encoded.flags.globstar
    }

    /// True when matching may have to descend below the starting
    /// directory.
    pub fn recursive(&self) -> bool {
        self.encoded.slices.len() > 1 || self.globstar()
    }

    /// The stored glob, with leading `!` stripped.
    pub fn view(&self) -> &str {
        &self.encoded.prefix
    }

    /// The compiled slices. Resolve their views against
    /// [`Pattern::view`].
    pub fn slices(&self) -> &[Slice] {
        &self.encoded.slices
    }

    /// Match an input against the pattern.
    pub fn matches(&self, input: &str) -> bool {
        self.encoded.flags.negated
            != self
                .encoded
                .algorithm
                .invoke(&self.encoded.prefix, input)
    }
}

impl From<&str> for Pattern {
    fn from(glob: &str) -> Self {
        Pattern::new(glob)
    }
}

impl From<&String> for Pattern {
    fn from(glob: &String) -> Self {
        Pattern::new(glob)
    }
}

impl From<String> for Pattern {
    fn from(glob: String) -> Self {
        Pattern::new(&glob)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::glob::glob_match;

    #[test]
    fn empty_pattern_matches_only_empty_input() {
        let pattern = Pattern::default();
        assert!(pattern.is_empty());
        assert!(pattern.matches(""));
        assert!(!pattern.matches("a"));

        let compiled = Pattern::new("");
        assert!(compiled.matches(""));
        assert!(!compiled.matches("anything"));
    }

    #[test]
    fn negation_parity() {
        for count in 0..8 {
            let glob = format!("{}abc", "!".repeat(count));
            let pattern = Pattern::new(&glob);
            assert_eq!(pattern.negated(), count % 2 == 1, "{glob}");
            assert_eq!(pattern.matches("abc"), count % 2 == 0, "{glob}");
            assert_eq!(pattern.matches("xyz"), count % 2 == 1, "{glob}");
        }
    }

    #[test]
    fn double_negation_is_identity() {
        for glob in ["abc", "*.md", "a/**/b", "test.{jpg,png}"] {
            let plain = Pattern::new(glob);
            let doubled = Pattern::new(&format!("!!{glob}"));
            for input in ["abc", "a.md", "a/x/y/b", "test.png", ""] {
                assert_eq!(plain.matches(input), doubled.matches(input), "{glob} vs {input}");
            }
        }
    }

    #[test]
    fn globstar_patterns_match_everything() {
        for glob in ["**", "**/*", "*/**", "**/*/**"] {
            let pattern = Pattern::new(glob);
            assert!(pattern.globstar(), "{glob}");
            for input in ["", "a", "a/b", "a/b/c/d.txt"] {
                assert!(pattern.matches(input), "{glob} vs {input}");
            }
        }
    }

    #[test]
    fn compiled_agrees_with_direct_matcher() {
        let globs = [
            "abc",
            "**/*.md",
            "a/*/test",
            "a/**/test",
            "test.{jpg,png}",
            "[a-cx]",
            "!abc",
            "/etc/*",
        ];
        let inputs = [
            "",
            "abc",
            "a.md",
            "sub/c.md",
            "a/foo/test",
            "a/foo/bar/test",
            "test.png",
            "x",
            "/etc/passwd",
        ];
        for glob in globs {
            let pattern = Pattern::new(glob);
            for input in inputs {
                assert_eq!(
                    pattern.matches(input),
                    glob_match(glob, input),
                    "{glob} vs {input}"
                );
            }
        }
    }

    #[test]
    fn recursive_means_more_than_one_segment_or_globstar() {
        assert!(!Pattern::new("*.md").recursive());
        assert!(!Pattern::new("abc").recursive());
        assert!(Pattern::new("a/b").recursive());
        assert!(Pattern::new("**").recursive());
        assert!(Pattern::new("**/*.md").recursive());
    }

    #[test]
    fn view_round_trip() {
        for glob in ["!!!src/**/*.rs", "!*.md", "a/b/c"] {
            let pattern = Pattern::new(glob);
            let stripped = glob.trim_start_matches('!');
            assert_eq!(pattern.view(), stripped);

            let recompiled = Pattern::new(pattern.view());
            assert!(!recompiled.negated());
            assert_eq!(recompiled.absolute(), pattern.absolute());
            assert_eq!(recompiled.globstar(), pattern.globstar());
            assert_eq!(recompiled.recursive(), pattern.recursive());
            assert_eq!(recompiled.slices(), pattern.slices());
        }
    }

    #[test]
    fn slices_resolve_against_the_view() {
        let pattern = Pattern::new("!src/**/*.rs");
        let views: Vec<&str> = pattern
            .slices()
            .iter()
            .map(|slice| slice.view(pattern.view()))
            .collect();
        assert_eq!(views, vec!["src", "**", "rs"]);
    }
}
