use std::path::Path;

use path_absolutize::Absolutize;

pub fn has_yaml_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml")
    )
}

pub fn has_json_extension(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some(ext) if ext.eq_ignore_ascii_case("json")
    )
}

pub fn has_config_extension(path: &Path) -> bool {
    has_yaml_extension(path) || has_json_extension(path)
}

/// Render a path relative to the current directory when possible. Paths
/// outside the current directory are shown as-is.
pub fn relativize_path<P: AsRef<Path>>(path: P) -> String {
    let path = path.as_ref();
    if let Ok(cwd) = std::env::current_dir()
        && let Ok(abs) = path.absolutize()
        && let Ok(rel) = abs.strip_prefix(&cwd)
    {
        return rel.display().to_string();
    }
    path.display().to_string()
}
