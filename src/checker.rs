use crate::diagnostic::Diagnostic;
use crate::rule_set::{Rule, RuleSet};
use crate::settings::ResolvedRuleOptions;

// The object that collects diagnostics in get_checks(). One per checked file.
#[derive(Debug)]
pub struct Checker {
    // The diagnostics to report (possibly empty).
    pub diagnostics: Vec<Diagnostic>,
    // The set of rules to apply for this file.
    pub rule_set: RuleSet,
    // Per-rule options resolved from configuration
    pub rule_options: ResolvedRuleOptions,
}

impl Checker {
    pub(crate) fn new(rule_options: ResolvedRuleOptions) -> Self {
        Self {
            diagnostics: vec![],
            rule_set: RuleSet::empty(),
            rule_options,
        }
    }

    pub(crate) fn report_diagnostics(&mut self, diagnostics: Vec<Diagnostic>) {
        self.diagnostics.extend(diagnostics);
    }

    pub(crate) fn is_rule_enabled(&self, rule: Rule) -> bool {
        self.rule_set.contains(&rule)
    }
}
