use rustc_hash::FxHashMap;

use crate::utils::{strip_yaml_comment, yaml_lines};

const IGNORE_FILE_PREFIX: &str = "misconfig-ignore-file";
const IGNORE_PREFIX: &str = "misconfig-ignore";

/// Rules suppressed by one directive comment. `All` is a bare
/// `# misconfig-ignore` with no rule list.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Suppressed {
    All,
    Rules(Vec<String>),
}

impl Suppressed {
    fn matches(&self, rule_name: &str) -> bool {
        match self {
            Suppressed::All => true,
            Suppressed::Rules(rules) => rules.iter().any(|r| r == rule_name),
        }
    }
}

/// Tracks `# misconfig-ignore` comment directives in a YAML file.
///
/// Two forms are recognized:
/// - `# misconfig-ignore: rule_a, rule_b` on a line with content suppresses
///   those rules on that line; on a comment-only line it suppresses them on
///   the next non-comment line.
/// - `# misconfig-ignore-file: rule_a` suppresses a rule everywhere in the
///   file (bare form: all rules).
///
/// JSON has no comments, so JSON files never have suppressions.
#[derive(Debug, Default)]
pub struct SuppressionManager {
    file_suppressions: Vec<Suppressed>,
    // 1-based row -> suppressions applying to that row
    line_suppressions: FxHashMap<usize, Vec<Suppressed>>,
}

impl SuppressionManager {
    pub fn from_content(contents: &str) -> Self {
        let mut manager = SuppressionManager::default();
        // Comment-only directives that still need a target line.
        let mut pending: Vec<Suppressed> = Vec::new();

        for (row0, line) in yaml_lines(contents).iter().enumerate() {
            let row = row0 + 1;
            // A `#` inside a block scalar is literal text, not a comment.
            if line.in_block_scalar {
                continue;
            }
            let content = line.content;
            let comment = extract_comment(line.text);

            let directive = comment.and_then(parse_directive);

            match directive {
                Some(Directive::File(suppressed)) => {
                    manager.file_suppressions.push(suppressed);
                }
                Some(Directive::Line(suppressed)) => {
                    if content.trim().is_empty() {
                        pending.push(suppressed);
                    } else {
                        manager.line_suppressions.entry(row).or_default().push(suppressed);
                    }
                }
                None => {
                    if !content.trim().is_empty() && !pending.is_empty() {
                        manager
                            .line_suppressions
                            .entry(row)
                            .or_default()
                            .append(&mut pending);
                    }
                }
            }
        }

        manager
    }

    pub fn is_suppressed(&self, rule_name: &str, row: usize) -> bool {
        if self.file_suppressions.iter().any(|s| s.matches(rule_name)) {
            return true;
        }
        self.line_suppressions
            .get(&row)
            .is_some_and(|list| list.iter().any(|s| s.matches(rule_name)))
    }
}

enum Directive {
    File(Suppressed),
    Line(Suppressed),
}

/// The comment part of a YAML line (after `#`), if any.
fn extract_comment(text: &str) -> Option<&str> {
    let content = strip_yaml_comment(text);
    let rest = text[content.len()..].trim_start();
    rest.strip_prefix('#').map(str::trim)
}

fn parse_directive(comment: &str) -> Option<Directive> {
    // `-file` must be tried first since the prefixes overlap.
    if let Some(rest) = comment.strip_prefix(IGNORE_FILE_PREFIX) {
        parse_rule_list(rest).map(Directive::File)
    } else if let Some(rest) = comment.strip_prefix(IGNORE_PREFIX) {
        parse_rule_list(rest).map(Directive::Line)
    } else {
        None
    }
}

fn parse_rule_list(rest: &str) -> Option<Suppressed> {
    let rest = rest.trim();
    if rest.is_empty() {
        return Some(Suppressed::All);
    }
    let rest = rest.strip_prefix(':')?.trim();
    if rest.is_empty() {
        return Some(Suppressed::All);
    }
    let rules = rest
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>();
    Some(Suppressed::Rules(rules))
}
