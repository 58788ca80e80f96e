use rustc_hash::FxHashSet;

use crate::diagnostic::*;
use crate::utils::{split_on_key_colon, yaml_lines};

pub struct DuplicateKey {
    key: String,
}

/// ## What it does
///
/// Checks for a mapping key that appears twice at the same nesting level.
///
/// ## Why is this bad?
///
/// Most YAML parsers silently keep only the last occurrence, so one of the
/// two values is ignored without any warning.
///
/// The check is indentation-based: keys inside sequence items and flow
/// collections spanning several lines are not tracked.
impl Violation for DuplicateKey {
    fn name(&self) -> String {
        "duplicate_key".to_string()
    }
    fn body(&self) -> String {
        format!("Duplicate key `{}`.", self.key)
    }
    fn suggestion(&self) -> Option<String> {
        Some("Only the last value will be kept.".to_string())
    }
}

pub fn duplicate_key(contents: &str) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    // One set of seen keys per open indentation level.
    let mut stack: Vec<(usize, FxHashSet<String>)> = vec![];

    for line in yaml_lines(contents) {
        if line.in_block_scalar || line.is_blank() {
            continue;
        }
        if line.is_document_marker() {
            stack.clear();
            continue;
        }

        let body = &line.content[line.indent..];

        // A sequence item opens a fresh scope for anything nested deeper.
        if body.starts_with('-') {
            while stack.last().is_some_and(|(indent, _)| *indent > line.indent) {
                stack.pop();
            }
            continue;
        }

        let Some((key_part, _)) = split_on_key_colon(body) else {
            continue;
        };
        let key = normalize_key(key_part);
        if key.is_empty() {
            continue;
        }

        while stack.last().is_some_and(|(indent, _)| *indent > line.indent) {
            stack.pop();
        }

        let duplicated = match stack.last_mut() {
            Some((indent, keys)) if *indent == line.indent => !keys.insert(key.clone()),
            _ => {
                let mut keys = FxHashSet::default();
                keys.insert(key.clone());
                stack.push((line.indent, keys));
                false
            }
        };

        if duplicated {
            let key_start = line.offset + line.indent;
            let range = TextRange::new(key_start, key_start + key_part.trim_end().len());
            diagnostics.push(Diagnostic::new(DuplicateKey { key }, range, Fix::empty()));
        }
    }

    diagnostics
}

/// `"key"`, `'key'` and `key` all name the same mapping entry.
fn normalize_key(key_part: &str) -> String {
    let key = key_part.trim();
    let unquoted = key
        .strip_prefix('"')
        .and_then(|k| k.strip_suffix('"'))
        .or_else(|| key.strip_prefix('\'').and_then(|k| k.strip_suffix('\'')));
    unquoted.unwrap_or(key).to_string()
}
