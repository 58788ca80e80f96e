use memchr::memchr_iter;

use crate::diagnostic::{Diagnostic, Location};

/// Byte offsets of every `\n` in the content. Used to convert byte ranges to
/// (row, column) locations once, after all rules have run.
pub fn find_new_lines_from_content(contents: &str) -> Vec<usize> {
    memchr_iter(b'\n', contents.as_bytes()).collect()
}

/// Fill in the 1-based (row, column) location of each diagnostic from its
/// byte range.
pub fn compute_lints_location(
    diagnostics: Vec<Diagnostic>,
    loc_new_lines: &[usize],
) -> Vec<Diagnostic> {
    diagnostics
        .into_iter()
        .map(|mut diagnostic| {
            let start = diagnostic.range.start;
            let idx = loc_new_lines.partition_point(|&pos| pos < start);
            let line_start = if idx == 0 { 0 } else { loc_new_lines[idx - 1] + 1 };
            diagnostic.location = Some(Location {
                row: idx + 1,
                column: start - line_start + 1,
            });
            diagnostic
        })
        .collect()
}

/// Lines of the content with their starting byte offset. The text excludes
/// the line terminator (`\n` and a trailing `\r` if present).
pub fn lines_with_offsets(contents: &str) -> Vec<(usize, &str)> {
    let mut lines = Vec::new();
    let mut start = 0;
    for pos in memchr_iter(b'\n', contents.as_bytes()) {
        let line = &contents[start..pos];
        lines.push((start, line.strip_suffix('\r').unwrap_or(line)));
        start = pos + 1;
    }
    if start < contents.len() {
        lines.push((start, &contents[start..]));
    }
    lines
}

/// A line of a YAML document, pre-classified for the scanner-based rules.
#[derive(Debug)]
pub struct YamlLine<'a> {
    /// Byte offset of the line start in the file.
    pub offset: usize,
    /// Line text without the terminator.
    pub text: &'a str,
    /// Number of leading whitespace bytes (spaces and tabs).
    pub indent: usize,
    /// Line content with any trailing comment removed (may be empty for
    /// blank and comment-only lines). Includes the indentation.
    pub content: &'a str,
    /// True when the line belongs to a block scalar (`|` / `>`), where
    /// mapping-oriented rules must not fire.
    pub in_block_scalar: bool,
}

impl YamlLine<'_> {
    pub fn is_blank(&self) -> bool {
        self.content.trim().is_empty()
    }

    /// `---` or `...` document markers.
    pub fn is_document_marker(&self) -> bool {
        let c = self.content.trim();
        c == "---" || c == "..."
    }
}

/// Strip a `#` comment from a YAML line, respecting single and double quotes.
/// A `#` only starts a comment at the beginning of the content or after
/// whitespace.
pub fn strip_yaml_comment(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut in_single = false;
    let mut in_double = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\'' if !in_double => in_single = !in_single,
            b'"' if !in_single => in_double = !in_double,
            b'#' if !in_single && !in_double => {
                if i == 0 || bytes[i - 1].is_ascii_whitespace() {
                    return text[..i].trim_end();
                }
            }
            _ => {}
        }
    }
    text.trim_end()
}

fn leading_whitespace_len(text: &str) -> usize {
    text.len() - text.trim_start_matches([' ', '\t']).len()
}

/// Whether the content of a line introduces a block scalar, i.e. its value
/// (after `:` or a leading `-`) is a `|` or `>` indicator.
fn introduces_block_scalar(content: &str) -> bool {
    let trimmed = content.trim();
    let value = if let Some((_, after_colon)) = split_on_key_colon(trimmed) {
        after_colon.trim()
    } else if let Some(rest) = trimmed.strip_prefix('-') {
        rest.trim()
    } else {
        return false;
    };
    let mut chars = value.chars();
    match chars.next() {
        Some('|') | Some('>') => chars.all(|c| matches!(c, '+' | '-' | '0'..='9')),
        _ => false,
    }
}

/// Split `key: value` content on the mapping colon: the first unquoted `:`
/// followed by whitespace or the end of the line. Returns (key, rest-after-
/// colon). Plain scalars like `a:b` or `http://x` do not split.
pub fn split_on_key_colon(content: &str) -> Option<(&str, &str)> {
    let bytes = content.as_bytes();
    let mut in_single = false;
    let mut in_double = false;
    for (i, &b) in bytes.iter().enumerate() {
        match b {
            b'\'' if !in_double => in_single = !in_single,
            b'"' if !in_single => in_double = !in_double,
            b':' if !in_single && !in_double => {
                if i + 1 == bytes.len() || bytes[i + 1].is_ascii_whitespace() {
                    return Some((&content[..i], &content[i + 1..]));
                }
            }
            _ => {}
        }
    }
    None
}

/// Pre-scan a YAML document into classified lines. This is the shared input
/// of the scanner-based rules; it only tracks enough state to know which
/// lines are inside block scalars.
pub fn yaml_lines(contents: &str) -> Vec<YamlLine<'_>> {
    let mut result = Vec::new();
    // (indent of the line that introduced the scalar)
    let mut block_scalar_indent: Option<usize> = None;

    for (offset, text) in lines_with_offsets(contents) {
        let indent = leading_whitespace_len(text);
        let blank = text.trim().is_empty();

        let in_block_scalar = match block_scalar_indent {
            Some(parent_indent) => {
                if blank || indent > parent_indent {
                    true
                } else {
                    block_scalar_indent = None;
                    false
                }
            }
            None => false,
        };

        let content = if in_block_scalar { "" } else { strip_yaml_comment(text) };

        if !in_block_scalar && introduces_block_scalar(content) {
            block_scalar_indent = Some(indent);
        }

        result.push(YamlLine { offset, text, indent, content, in_block_scalar });
    }

    result
}
