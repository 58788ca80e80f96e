use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::settings::{LinterSettings, Settings};

/// Parse `misconfig.toml` in the given directory, if there is one.
pub fn parse_misconfig_toml(dir: &Path) -> Result<Option<TomlOptions>, ParseTomlError> {
    let path = dir.join("misconfig.toml");
    if !path.exists() {
        return Ok(None);
    }
    let toml = fs::read_to_string(&path).map_err(|err| ParseTomlError::Read(path.clone(), err))?;
    toml::from_str(&toml)
        .map(Some)
        .map_err(|err| ParseTomlError::Deserialize(path, err))
}

#[derive(Debug, Error)]
pub enum ParseTomlError {
    #[error("Failed to read {path}: {1}", path = .0.display())]
    Read(PathBuf, io::Error),
    #[error("Failed to parse {path}: {1}", path = .0.display())]
    Deserialize(PathBuf, toml::de::Error),
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct TomlOptions {
    #[serde(flatten)]
    pub global: GlobalTomlOptions,
    pub linter: Option<LinterTomlOptions>,
}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct GlobalTomlOptions {}

#[derive(Clone, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(deny_unknown_fields, rename_all = "kebab-case")]
pub struct LinterTomlOptions {
    pub select: Option<Vec<String>>,
    pub ignore: Option<Vec<String>>,
    pub max_line_length: Option<usize>,
    pub indent_width: Option<usize>,
}

impl TomlOptions {
    pub fn into_settings(self) -> Settings {
        let linter = self.linter.unwrap_or_default();
        Settings {
            linter: LinterSettings {
                select: linter.select,
                ignore: linter.ignore,
                max_line_length: linter.max_line_length,
                indent_width: linter.indent_width,
            },
        }
    }
}
