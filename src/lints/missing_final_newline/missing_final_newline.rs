use crate::diagnostic::*;

pub struct MissingFinalNewline;

/// ## What it does
///
/// Checks that the file ends with a newline character.
///
/// ## Why is this bad?
///
/// POSIX defines a line as ending with a newline; tools that concatenate or
/// append to configuration files can silently corrupt the last entry when it
/// is missing.
impl Violation for MissingFinalNewline {
    fn name(&self) -> String {
        "missing_final_newline".to_string()
    }
    fn body(&self) -> String {
        "No newline at end of file.".to_string()
    }
}

pub fn missing_final_newline(contents: &str) -> Vec<Diagnostic> {
    if contents.is_empty() || contents.ends_with('\n') {
        return vec![];
    }

    let end = contents.len();
    vec![Diagnostic::new(
        MissingFinalNewline,
        TextRange::new(end, end),
        Fix {
            content: "\n".to_string(),
            start: end,
            end,
            to_skip: false,
        },
    )]
}
