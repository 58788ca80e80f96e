/// Resolved configuration settings used within misconfig
#[derive(Debug, Default)]
pub struct Settings {
    pub linter: LinterSettings,
}

#[derive(Debug)]
pub struct LinterSettings {
    pub select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub max_line_length: Option<usize>,
    pub indent_width: Option<usize>,
}

impl Default for LinterSettings {
    /// Uses `None` to indicate "not configured", rather than empty vectors
    /// or the built-in defaults.
    fn default() -> Self {
        Self {
            select: None,
            ignore: None,
            max_line_length: None,
            indent_width: None,
        }
    }
}

/// Per-rule options after merging the defaults with `misconfig.toml`.
#[derive(Debug, Clone)]
pub struct ResolvedRuleOptions {
    pub max_line_length: usize,
    pub indent_width: usize,
}

impl Default for ResolvedRuleOptions {
    fn default() -> Self {
        ResolvedRuleOptions {
            max_line_length: 120,
            indent_width: 2,
        }
    }
}
