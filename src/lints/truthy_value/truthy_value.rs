use crate::diagnostic::*;
use crate::utils::{split_on_key_colon, yaml_lines};

pub struct TruthyValue {
    value: String,
}

/// ## What it does
///
/// Checks for unquoted `yes`/`no`/`on`/`off` scalars used as mapping values.
///
/// ## Why is this bad?
///
/// YAML 1.1 parsers read these as booleans while YAML 1.2 parsers read them
/// as strings, so the same file means different things to different tools.
/// Use `true`/`false`, or quote the value if the string is intended.
impl Violation for TruthyValue {
    fn name(&self) -> String {
        "truthy_value".to_string()
    }
    fn body(&self) -> String {
        format!("Truthy value `{}` is ambiguous.", self.value)
    }
    fn suggestion(&self) -> Option<String> {
        Some("Use `true`/`false`, or quote the string.".to_string())
    }
}

const TRUTHY: [&str; 4] = ["yes", "no", "on", "off"];

pub fn truthy_value(contents: &str) -> Vec<Diagnostic> {
    let mut diagnostics = vec![];

    for line in yaml_lines(contents) {
        if line.in_block_scalar || line.is_blank() {
            continue;
        }
        let body = &line.content[line.indent..];
        let Some((key_part, rest)) = split_on_key_colon(body) else {
            continue;
        };

        let value = rest.trim();
        if !TRUTHY.iter().any(|t| value.eq_ignore_ascii_case(t)) {
            continue;
        }

        let value_start = line.offset
            + line.indent
            + key_part.len()
            + 1
            + (rest.len() - rest.trim_start().len());
        let range = TextRange::new(value_start, value_start + value.len());
        diagnostics.push(Diagnostic::new(
            TruthyValue { value: value.to_string() },
            range,
            Fix {
                content: format!("\"{value}\""),
                start: range.start,
                end: range.end,
                to_skip: false,
            },
        ));
    }

    diagnostics
}
