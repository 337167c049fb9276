//! Configuration: notes location, editor command and note template.

use crate::template::NoteTemplate;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Default notes location, expanded at use time.
pub const DEFAULT_BASE_DIR: &str = "$HOME/.notes";

/// Default config file location, expanded at use time.
pub const DEFAULT_CONFIG_PATH: &str = "$HOME/.config/weeknote/config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Base directory for note files; may contain `$VAR` references.
    pub base_dir: String,
    /// Editor command used to open notes.
    pub editor: String,
    /// Template for newly created notes.
    pub template: NoteTemplate,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: DEFAULT_BASE_DIR.to_string(),
            editor: default_editor(),
            template: NoteTemplate::default(),
        }
    }
}

fn default_editor() -> String {
    env::var("EDITOR").unwrap_or_else(|_| "vim".to_string())
}

impl Config {
    /// Load configuration from `path`, or from the default location.
    ///
    /// An explicit `path` must exist and parse. The default location is
    /// optional: when the file is absent, the defaults are returned.
    pub fn load(path: Option<&Path>) -> Result<Config> {
        match path {
            Some(explicit) => Self::read(explicit),
            None => {
                let default_path = PathBuf::from(expand_env(DEFAULT_CONFIG_PATH));
                if default_path.exists() {
                    Self::read(&default_path)
                } else {
                    Ok(Config::default())
                }
            }
        }
    }

    fn read(path: &Path) -> Result<Config> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        Ok(config)
    }

    /// The notes base directory with environment variables expanded.
    pub fn notes_dir(&self) -> PathBuf {
        PathBuf::from(expand_env(&self.base_dir))
    }
}

/// Expand `$VAR` and `${VAR}` references against the process
/// environment. Unknown variables are left in place unchanged.
pub fn expand_env(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut rest = value;
    while let Some(pos) = rest.find('$') {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos..];
        let (name, consumed) = if let Some(braced) = tail.strip_prefix("${") {
            match braced.find('}') {
                Some(end) => (&braced[..end], end + 3),
                None => ("", 0),
            }
        } else {
            let len = tail[1..]
                .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
                .unwrap_or(tail.len() - 1);
            (&tail[1..1 + len], len + 1)
        };
        if name.is_empty() {
            // Lone '$', '${}' or unterminated '${'; keep the '$' verbatim.
            out.push('$');
            rest = &tail[1..];
            continue;
        }
        match env::var(name) {
            Ok(val) => out.push_str(&val),
            Err(_) => out.push_str(&tail[..consumed]),
        }
        rest = &tail[consumed..];
    }
    out.push_str(rest);
    out
}
