//! Glob pattern compiler.
//!
//! Splits a glob into classified slices, derives structural flags,
//! and selects the cheapest matching algorithm the structure allows.
//! Compilation is pure and total: every string compiles.

use std::path::is_separator;

use crate::glob::{exact_match, extends_match, glob_match};
use crate::slice::{Hint, Slice};

/// Structural properties derived at compile time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct Flags {
    /// The outcome of matching is inverted.
    pub negated: bool,
    /// Only `*`/`**` segments with at least one `**`: matches anything.
    pub globstar: bool,
    /// The pattern starts with a path separator.
    pub absolute: bool,
    /// Every slice is literal.
    pub exact: bool,
}

/// The specialised matcher selected for a compiled pattern.
///
/// All variants share one contract: `(prefix, input) -> bool`, with
/// negation applied by the caller.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) enum Algorithm {
    /// Matches only the empty input.
    #[default]
    Empty,
    /// Byte-wise comparison, modulo escapes.
    Exact,
    /// Constant true.
    Any,
    /// Suffix comparison after the final `*`.
    Extends,
    /// The general backtracking matcher.
    Glob,
}

impl Algorithm {
    pub(crate) fn invoke(self, prefix: &str, input: &str) -> bool {
        match self {
            Algorithm::Empty => input.is_empty(),
            Algorithm::Exact => exact_match(prefix, input),
            Algorithm::Any => true,
            Algorithm::Extends => extends_match(prefix, input),
            Algorithm::Glob => glob_match(prefix, input),
        }
    }
}

/// A fully compiled pattern: the negation-stripped prefix, its
/// classified slices, the selected algorithm and the derived flags.
#[derive(Debug, Clone, Default)]
pub(crate) struct Compiled {
    pub prefix: String,
    pub slices: Vec<Slice>,
    pub algorithm: Algorithm,
    pub flags: Flags,
}

/// Compile a glob into its encoded form.
pub(crate) fn compile(glob: &str) -> Compiled {
    if glob.is_empty() {
        return Compiled::default();
    }

    let negation = glob.bytes().take_while(|&byte| byte == b'!').count();
    let prefix = glob[negation..].to_string();

    let slices = split(&prefix);
    let flags = Flags {
        negated: negation % 2 == 1,
        globstar: globstar_only(&slices),
        absolute: prefix
            .bytes()
            .next()
            .is_some_and(|byte| is_separator(byte as char)),
        exact: slices.iter().all(|slice| slice.hint() == Hint::Literal),
    };
    let algorithm = select(&prefix, &slices, flags);

    Compiled {
        prefix,
        slices,
        algorithm,
        flags,
    }
}

/// Split the working glob into slices at separator boundaries.
fn split(glob: &str) -> Vec<Slice> {
    let bytes = glob.as_bytes();
    let mut slices = Vec::new();
    let mut start = 0;
    let mut index = 0;

    while index < bytes.len() {
        index += 1;
        if is_separator(bytes[index - 1] as char) {
            emplace(glob, &mut slices, &mut start, index);
        }
    }
    emplace(glob, &mut slices, &mut start, index);

    slices
}

/// Classify and store the segment `[start, index)`.
///
/// Repeated separators collapse to nothing; only a leading empty
/// segment survives, so absolute patterns stay detectable.
fn emplace(glob: &str, slices: &mut Vec<Slice>, start: &mut usize, index: usize) {
    let mut offset = *start;
    let mut len = index - offset;

    // drop the separator captured with the segment
    let segment = &glob[offset..index];
    if segment.chars().next_back().is_some_and(is_separator) {
        len -= 1;
    }

    *start = index;
    if !slices.is_empty() && len == 0 {
        return;
    }

    let hint = categorize(&glob[offset..offset + len]);
    if hint == Hint::Extends {
        // the stored view is the text after '*.'
        offset += 2;
        len -= 2;
    }
    slices.push(Slice::new(offset, len, hint));
}

fn categorize(view: &str) -> Hint {
    if view == "*" {
        return Hint::Wildcard;
    }
    if view == "**" {
        return Hint::Globstar;
    }

    let extends = view.starts_with("*.");
    let body = if extends { &view[2..] } else { view };
    let special = body
        .bytes()
        .any(|byte| matches!(byte, b'*' | b'[' | b'{' | b'?'));

    if special {
        Hint::Special
    } else if extends {
        Hint::Extends
    } else {
        Hint::Literal
    }
}

/// True when the slices are only `*`/`**` with at least one `**`.
fn globstar_only(slices: &[Slice]) -> bool {
    let mut globstar = false;
    for slice in slices {
        match slice.hint() {
            Hint::Wildcard => {}
            Hint::Globstar => globstar = true,
            _ => return false,
        }
    }
    globstar
}

fn select(prefix: &str, slices: &[Slice], flags: Flags) -> Algorithm {
    if prefix.is_empty() {
        return Algorithm::Empty;
    }
    if flags.exact {
        return Algorithm::Exact;
    }
    if flags.globstar {
        return Algorithm::Any;
    }

    // a trailing '*.ext' preceded by nothing but '*'/'**' reduces to a
    // suffix comparison; anything else goes to the general matcher
    if let Some((last, rest)) = slices.split_last() {
        if last.hint() == Hint::Extends && (rest.is_empty() || globstar_only(rest)) {
            return Algorithm::Extends;
        }
    }
    Algorithm::Glob
}
