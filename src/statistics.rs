use colored::Colorize;
use std::collections::HashMap;

use crate::diagnostic::Diagnostic;
use crate::status::ExitStatus;

pub fn print_statistics(diagnostics: &[&Diagnostic], has_errors: bool) -> anyhow::Result<ExitStatus> {
    if diagnostics.is_empty() {
        if has_errors {
            return Ok(ExitStatus::Error);
        }
        println!("All checks passed!");
        return Ok(ExitStatus::Success);
    }

    // Hashmap with rule name as key, and (number of occurrences, has_fix) as
    // value.
    let mut hm: HashMap<&String, (usize, bool)> = HashMap::new();

    for diagnostic in diagnostics {
        let rule_name = &diagnostic.message.name;
        let entry = hm.entry(rule_name).or_default();
        entry.0 += 1;
        if diagnostic.has_safe_fix() || diagnostic.has_unsafe_fix() {
            entry.1 = true;
        }
    }

    // Most frequent rule first, then alphabetical for deterministic output.
    let mut sorted: Vec<_> = hm.iter().collect();
    sorted.sort_by(|a, b| b.1.0.cmp(&a.1.0).then_with(|| a.0.cmp(b.0)));

    for (key, value) in sorted {
        let star = if value.1 { "*" } else { " " };
        println!(
            "{:>5} [{}] {}",
            value.0.to_string().bold(),
            star,
            key.bold().red()
        );
    }

    println!("\nRules with `[*]` have an automatic fix.");

    if has_errors {
        return Ok(ExitStatus::Error);
    }

    Ok(ExitStatus::Failure)
}
