use crate::diagnostic::*;
use crate::utils::lines_with_offsets;

pub struct LineLength {
    max: usize,
}

/// ## What it does
///
/// Checks for lines longer than `max-line-length` characters (default 120,
/// configurable in `misconfig.toml`).
///
/// ## Why is this bad?
///
/// Very long lines usually hide deeply nested inline collections or long
/// unbroken scalars, both of which are hard to review.
impl Violation for LineLength {
    fn name(&self) -> String {
        "line_length".to_string()
    }
    fn body(&self) -> String {
        format!("Line is longer than {} characters.", self.max)
    }
}

pub fn line_length(contents: &str, max: usize) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];

    for (offset, line) in lines_with_offsets(contents) {
        let mut indices = line.char_indices();
        // The byte offset of the first character past the limit, if any.
        if let Some((byte_idx, _)) = indices.nth(max) {
            let range = TextRange::new(offset + byte_idx, offset + line.len());
            diagnostics.push(Diagnostic::new(LineLength { max }, range, Fix::empty()));
        }
    }

    diagnostics
}
