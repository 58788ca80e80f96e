use std::sync::LazyLock;

use regex::Regex;

use crate::diagnostic::*;
use crate::utils::{split_on_key_colon, yaml_lines};

pub struct SpaceBeforeColon;
pub struct MissingSpaceAfterColon;

/// ## What it does
///
/// Checks the spacing around the mapping colon: no space before it, exactly
/// one space after it (`key: value`).
///
/// ## Why is this bad?
///
/// `key : value` and `key:value` are not mappings at all: YAML reads both as
/// a single plain scalar, which almost never is what was meant.
impl Violation for SpaceBeforeColon {
    fn name(&self) -> String {
        "colon_spacing".to_string()
    }
    fn body(&self) -> String {
        "Space before the mapping colon.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Write `key: value`.".to_string())
    }
}

impl Violation for MissingSpaceAfterColon {
    fn name(&self) -> String {
        "colon_spacing".to_string()
    }
    fn body(&self) -> String {
        "Missing space after the mapping colon.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Write `key: value`.".to_string())
    }
}

// A bare key immediately followed by `:` and a non-space character. Quoted
// keys and values like URLs (`http://`) never match from the start of the
// content, which is the point.
static MISSING_SPACE_AFTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([A-Za-z0-9_][A-Za-z0-9_.-]*):(\S)").unwrap());

pub fn colon_spacing(contents: &str) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];

    for line in yaml_lines(contents) {
        if line.in_block_scalar || line.is_blank() {
            continue;
        }
        let body = &line.content[line.indent..];
        let body_start = line.offset + line.indent;

        if let Some((key_part, _)) = split_on_key_colon(body) {
            let trimmed = key_part.trim_end();
            if trimmed.len() < key_part.len() && !trimmed.is_empty() {
                // `key :` with the colon at body[key_part.len()]
                let range = TextRange::new(
                    body_start + trimmed.len(),
                    body_start + key_part.len() + 1,
                );
                diagnostics.push(Diagnostic::new(
                    SpaceBeforeColon,
                    range,
                    Fix {
                        content: ":".to_string(),
                        start: range.start,
                        end: range.end,
                        to_skip: false,
                    },
                ));
            }
        } else if let Some(captures) = MISSING_SPACE_AFTER.captures(body) {
            let colon = captures.get(1).unwrap().end();
            let range = TextRange::new(body_start + colon, body_start + colon + 1);
            diagnostics.push(Diagnostic::new(
                MissingSpaceAfterColon,
                range,
                Fix {
                    content: ": ".to_string(),
                    start: range.start,
                    end: range.end,
                    to_skip: false,
                },
            ));
        }
    }

    diagnostics
}
