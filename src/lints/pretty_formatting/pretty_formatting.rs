use serde_json::Value;

use crate::diagnostic::*;

pub struct PrettyFormatting;

/// ## What it does
///
/// Checks that a JSON file matches its canonical pretty-printed form
/// (2-space indentation, one key per line, trailing newline).
///
/// ## Why is this bad?
///
/// Hand-edited JSON drifts towards inconsistent indentation and packed
/// one-line objects, which makes diffs unreviewable.
///
/// The fix rewrites the whole file canonically. It is marked unsafe because
/// the rewrite sorts object keys.
impl Violation for PrettyFormatting {
    fn name(&self) -> String {
        "pretty_formatting".to_string()
    }
    fn body(&self) -> String {
        "File is not in canonical pretty-printed form.".to_string()
    }
    fn suggestion(&self) -> Option<String> {
        Some("Re-format with `--fix --unsafe-fixes`.".to_string())
    }
}

pub fn pretty_formatting(contents: &str, value: &Value) -> Vec<Diagnostic> {
    let Ok(pretty) = serde_json::to_string_pretty(value) else {
        return vec![];
    };
    let canonical = format!("{pretty}\n");
    if contents == canonical {
        return vec![];
    }

    vec![Diagnostic::new(
        PrettyFormatting,
        TextRange::new(0, 0),
        Fix {
            content: canonical,
            start: 0,
            end: contents.len(),
            to_skip: false,
        },
    )]
}
