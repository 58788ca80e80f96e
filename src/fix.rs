use crate::diagnostic::{Diagnostic, Fix};

/// Apply the fixes attached to the given diagnostics to `contents`.
///
/// Fixes are applied in order of their start offset. A fix whose range
/// overlaps an already-applied fix is skipped; the caller re-lints and calls
/// this again until nothing is skipped (see `lint_fix`).
///
/// Returns `(has_skipped_fixes, new_content)`.
pub fn apply_fixes(
    diagnostics: &[Diagnostic],
    contents: &str,
    unsafe_fixes: bool,
) -> (bool, String) {
    let mut fixes: Vec<&Fix> = diagnostics
        .iter()
        .filter(|d| d.has_safe_fix() || (unsafe_fixes && d.has_unsafe_fix()))
        .map(|d| &d.fix)
        .filter(|fix| !fix.to_skip)
        .collect();
    fixes.sort_by_key(|fix| (fix.start, fix.end));

    let mut new_content = contents.to_string();
    let mut diff_length: isize = 0;
    let mut last_modified_pos: isize = 0;
    let mut has_skipped_fixes = false;

    for fix in fixes {
        let mut start = fix.start as isize;
        let mut end = fix.end as isize;

        start += diff_length;
        end += diff_length;

        if start < last_modified_pos {
            has_skipped_fixes = true;
            continue;
        }

        let length_change = fix.content.len() as isize - (fix.end as isize - fix.start as isize);
        diff_length += length_change;

        new_content.replace_range(start as usize..end as usize, &fix.content);
        last_modified_pos = end + length_change;
    }

    (has_skipped_fixes, new_content)
}
