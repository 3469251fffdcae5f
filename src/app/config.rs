use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use byte_unit::Byte;
use serde::Deserialize;

use crate::{container::DEFAULT_INDENT, error::ConfigError};

#[derive(Debug, Clone)]
#[cfg_attr(test, derive(PartialEq))]
pub struct Config {
    pub indent: usize,
    pub max_file_size: Option<Byte>,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            indent: DEFAULT_INDENT,
            max_file_size: None,
            log_level: String::from("warn"),
        }
    }
}

impl Config {
    /// Patches the defaults with `/etc/jset` and then `./.jset`. Unreadable or
    /// malformed files are skipped and reported back.
    pub fn load() -> (Self, Vec<ConfigError>) {
        Self::default().patch_from_files(&config_paths())
    }

    fn patch_from_files(self, files: &[PathBuf]) -> (Self, Vec<ConfigError>) {
        let mut errors = Vec::new();
        let config = files
            .iter()
            .filter_map(|path| read_patch(path).unwrap_or_else(|error| {
                errors.push(error);
                None
            }))
            .fold(self, Self::patch);

        (config, errors)
    }

    fn patch(mut self, patch: ConfigPatch) -> Self {
        if let Some(indent) = patch.indent {
            self.indent = indent
        }
        if let Some(max_file_size) = patch.max_file_size {
            self.max_file_size = Some(max_file_size)
        }
        if let Some(log_level) = patch.log_level {
            self.log_level = log_level
        }

        self
    }
}

#[cfg(test)]
impl Config {
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_max_file_size(mut self, max_file_size: Byte) -> Self {
        self.max_file_size = Some(max_file_size);
        self
    }

    pub fn with_log_level(mut self, log_level: &str) -> Self {
        self.log_level = log_level.to_string();
        self
    }
}

#[derive(Debug, Default, Deserialize)]
#[cfg_attr(test, derive(serde::Serialize))]
struct ConfigPatch {
    pub indent: Option<usize>,
    pub max_file_size: Option<Byte>,
    pub log_level: Option<String>,
}

fn config_paths() -> [PathBuf; 2] {
    [PathBuf::from("/etc/jset"), PathBuf::from(".jset")]
}

fn read_patch(path: &Path) -> Result<Option<ConfigPatch>, ConfigError> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(error) if error.kind() == ErrorKind::NotFound => return Ok(None),
        Err(source) => {
            return Err(ConfigError::IO {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    toml::from_str(&content)
        .map(Some)
        .map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        })
}
