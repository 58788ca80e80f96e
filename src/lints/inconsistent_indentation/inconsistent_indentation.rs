use crate::diagnostic::*;
use crate::utils::yaml_lines;

pub struct InconsistentIndentation {
    indent_width: usize,
}

/// ## What it does
///
/// Checks that indentation is a multiple of `indent-width` spaces (default 2,
/// configurable in `misconfig.toml`).
///
/// ## Why is this bad?
///
/// Mixed indentation steps make the nesting ambiguous to readers and are the
/// most common cause of YAML files meaning something other than intended.
///
/// Block scalar content is excluded, since its indentation is free-form.
impl Violation for InconsistentIndentation {
    fn name(&self) -> String {
        "inconsistent_indentation".to_string()
    }
    fn body(&self) -> String {
        format!(
            "Indentation is not a multiple of {} spaces.",
            self.indent_width
        )
    }
}

pub fn inconsistent_indentation(contents: &str, indent_width: usize) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];
    if indent_width == 0 {
        return diagnostics;
    }

    for line in yaml_lines(contents) {
        if line.in_block_scalar || line.text.trim().is_empty() || line.is_document_marker() {
            continue;
        }
        let indent = &line.text[..line.indent];
        // Tabs are reported by tab_indentation.
        if indent.contains('\t') {
            continue;
        }
        if indent.len() % indent_width != 0 {
            let range = TextRange::new(line.offset, line.offset + line.indent);
            diagnostics.push(Diagnostic::new(
                InconsistentIndentation { indent_width },
                range,
                Fix::empty(),
            ));
        }
    }

    diagnostics
}
