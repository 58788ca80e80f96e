use rustc_hash::FxHashSet;

use crate::filetype::FileType;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    TrailingWhitespace,
    MissingFinalNewline,
    LineLength,
    TabIndentation,
    InconsistentIndentation,
    DuplicateKey,
    TruthyValue,
    ColonSpacing,
    PrettyFormatting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FixStatus {
    #[default]
    None,
    Safe,
    Unsafe,
}

impl Rule {
    pub const ALL: [Rule; 9] = [
        Rule::TrailingWhitespace,
        Rule::MissingFinalNewline,
        Rule::LineLength,
        Rule::TabIndentation,
        Rule::InconsistentIndentation,
        Rule::DuplicateKey,
        Rule::TruthyValue,
        Rule::ColonSpacing,
        Rule::PrettyFormatting,
    ];

    pub fn all() -> &'static [Rule] {
        &Self::ALL
    }

    pub fn name(&self) -> &'static str {
        match self {
            Rule::TrailingWhitespace => "trailing_whitespace",
            Rule::MissingFinalNewline => "missing_final_newline",
            Rule::LineLength => "line_length",
            Rule::TabIndentation => "tab_indentation",
            Rule::InconsistentIndentation => "inconsistent_indentation",
            Rule::DuplicateKey => "duplicate_key",
            Rule::TruthyValue => "truthy_value",
            Rule::ColonSpacing => "colon_spacing",
            Rule::PrettyFormatting => "pretty_formatting",
        }
    }

    pub fn from_name(name: &str) -> Option<Rule> {
        Self::ALL.iter().copied().find(|r| r.name() == name)
    }

    pub fn fix_status(&self) -> FixStatus {
        match self {
            Rule::TrailingWhitespace | Rule::MissingFinalNewline => FixStatus::Safe,
            Rule::TruthyValue | Rule::ColonSpacing | Rule::PrettyFormatting => FixStatus::Unsafe,
            Rule::LineLength
            | Rule::TabIndentation
            | Rule::InconsistentIndentation
            | Rule::DuplicateKey => FixStatus::None,
        }
    }

    /// Whether the rule makes sense for the given file type. The line-based
    /// rules apply everywhere; the scanner rules are YAML-specific and the
    /// formatting check is JSON-specific.
    pub fn applies_to(&self, filetype: FileType) -> bool {
        match self {
            Rule::TrailingWhitespace | Rule::MissingFinalNewline | Rule::LineLength => true,
            Rule::TabIndentation
            | Rule::InconsistentIndentation
            | Rule::DuplicateKey
            | Rule::TruthyValue
            | Rule::ColonSpacing => filetype == FileType::Yaml,
            Rule::PrettyFormatting => filetype == FileType::Json,
        }
    }

    pub fn has_safe_fix(&self) -> bool {
        self.fix_status() == FixStatus::Safe
    }
    pub fn has_unsafe_fix(&self) -> bool {
        self.fix_status() == FixStatus::Unsafe
    }
    pub fn has_no_fix(&self) -> bool {
        self.fix_status() == FixStatus::None
    }
}

/// The set of rules enabled for a run.
#[derive(Debug, Clone, Default)]
pub struct RuleSet {
    rules: FxHashSet<Rule>,
}

impl RuleSet {
    pub fn empty() -> Self {
        RuleSet { rules: FxHashSet::default() }
    }

    /// All rules. There is no rule disabled by default for now.
    pub fn default_rules() -> Self {
        Rule::all().iter().copied().collect()
    }

    pub fn insert(&mut self, rule: Rule) {
        self.rules.insert(rule);
    }

    pub fn remove(&mut self, rule: &Rule) {
        self.rules.remove(rule);
    }

    pub fn contains(&self, rule: &Rule) -> bool {
        self.rules.contains(rule)
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Rule> {
        self.rules.iter()
    }
}

impl FromIterator<Rule> for RuleSet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        RuleSet { rules: iter.into_iter().collect() }
    }
}
