use crate::diagnostic::*;
use crate::utils::yaml_lines;

pub struct TabIndentation;

/// ## What it does
///
/// Checks for tab characters in YAML indentation.
///
/// ## Why is this bad?
///
/// YAML forbids tabs in indentation; parsers either reject the document or
/// interpret the nesting differently from what the author sees in their
/// editor.
impl Violation for TabIndentation {
    fn name(&self) -> String {
        "tab_indentation".to_string()
    }
    fn body(&self) -> String {
        "Indentation contains tabs.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Use spaces instead.".to_string())
    }
}

pub fn tab_indentation(contents: &str) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];

    for line in yaml_lines(contents) {
        if line.in_block_scalar {
            continue;
        }
        let indent = &line.text[..line.indent];
        if let Some(first_tab) = indent.find('\t') {
            let range =
                TextRange::new(line.offset + first_tab, line.offset + line.indent);
            diagnostics.push(Diagnostic::new(TabIndentation, range, Fix::empty()));
        }
    }

    diagnostics
}
