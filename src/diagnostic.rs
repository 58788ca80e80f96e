use std::cmp::Ordering;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::rule_set::Rule;

/// Byte range of a violation in the file content. `start == end` is used for
/// violations that point at a position rather than a span (e.g. a missing
/// final newline).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TextRange {
    pub start: usize,
    pub end: usize,
}

impl TextRange {
    pub fn new(start: usize, end: usize) -> Self {
        TextRange { start, end }
    }
}

/// 1-based row and column of a violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub row: usize,
    pub column: usize,
}

/// A replacement to perform in the file content to resolve a violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fix {
    pub content: String,
    pub start: usize,
    pub end: usize,
    /// Set when the fix should not be applied even though it exists, e.g.
    /// because it would overlap with another fix applied earlier.
    pub to_skip: bool,
}

impl Fix {
    pub fn empty() -> Self {
        Fix {
            content: String::new(),
            start: 0,
            end: 0,
            to_skip: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty() && self.start == 0 && self.end == 0
    }
}

/// Implemented by every rule: static information about what is reported.
pub trait Violation {
    fn name(&self) -> String;
    fn body(&self) -> String;
    fn suggestion(&self) -> Option<String> {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViolationData {
    pub name: String,
    pub body: String,
    pub suggestion: Option<String>,
}

impl ViolationData {
    pub fn new(name: String, body: String, suggestion: Option<String>) -> Self {
        ViolationData { name, body, suggestion }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub filename: PathBuf,
    /// Filled by `compute_lints_location` once the newline index is known.
    pub location: Option<Location>,
    pub range: TextRange,
    pub message: ViolationData,
    pub fix: Fix,
}

impl Diagnostic {
    pub fn new<V: Violation>(violation: V, range: TextRange, fix: Fix) -> Self {
        Diagnostic {
            filename: PathBuf::new(),
            location: None,
            range,
            message: ViolationData::new(
                violation.name(),
                violation.body(),
                violation.suggestion(),
            ),
            fix,
        }
    }

    pub fn rule(&self) -> Option<Rule> {
        Rule::from_name(&self.message.name)
    }

    pub fn has_safe_fix(&self) -> bool {
        !self.fix.is_empty() && self.rule().is_some_and(|r| r.has_safe_fix())
    }

    pub fn has_unsafe_fix(&self) -> bool {
        !self.fix.is_empty() && self.rule().is_some_and(|r| r.has_unsafe_fix())
    }
}

// Global ordering when diagnostics from several files are reported together:
// by file, then by position in the file.
impl Ord for Diagnostic {
    fn cmp(&self, other: &Self) -> Ordering {
        (&self.filename, self.range)
            .cmp(&(&other.filename, other.range))
            .then_with(|| self.message.name.cmp(&other.message.name))
    }
}

impl PartialOrd for Diagnostic {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
