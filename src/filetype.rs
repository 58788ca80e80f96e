use std::fmt::{self, Display};
use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// The configuration formats we know how to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum FileType {
    Yaml,
    Json,
}

impl FileType {
    /// Determine the file type from the extension. `.yml` counts as YAML.
    pub fn from_path(path: &Path) -> Option<FileType> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "yaml" | "yml" => Some(FileType::Yaml),
            "json" => Some(FileType::Json),
            _ => None,
        }
    }
}

impl Display for FileType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yaml => write!(f, "yaml"),
            Self::Json => write!(f, "json"),
        }
    }
}
