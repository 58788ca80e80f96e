use crate::diagnostic::*;
use crate::utils::lines_with_offsets;

pub struct TrailingWhitespace;

/// ## What it does
///
/// Checks for spaces or tabs at the end of a line.
///
/// ## Why is this bad?
///
/// Trailing whitespace is invisible, produces noisy diffs, and some YAML
/// tools treat it inconsistently inside block scalars.
impl Violation for TrailingWhitespace {
    fn name(&self) -> String {
        "trailing_whitespace".to_string()
    }
    fn body(&self) -> String {
        "Line has trailing whitespace.".to_string()
    }
}

pub fn trailing_whitespace(contents: &str) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];

    for (offset, line) in lines_with_offsets(contents) {
        let trimmed = line.trim_end_matches([' ', '\t']);
        if trimmed.len() < line.len() {
            let range = TextRange::new(offset + trimmed.len(), offset + line.len());
            diagnostics.push(Diagnostic::new(
                TrailingWhitespace,
                range,
                Fix {
                    content: String::new(),
                    start: range.start,
                    end: range.end,
                    to_skip: false,
                },
            ));
        }
    }

    diagnostics
}
