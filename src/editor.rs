use anyhow::{Context, Result};
use std::path::Path;
use std::process::{Command, ExitStatus};

/// Capability for opening a note in an editor.
///
/// The orchestration layer depends only on this trait, so everything up
/// to the editor hand-off can be exercised without spawning a process.
pub trait Editor {
    /// Open `path` and block until the editor exits.
    fn open(&self, path: &Path) -> Result<ExitStatus>;
}

/// Editor backed by an external command, e.g. `vim`.
#[derive(Debug, Clone)]
pub struct ExternalEditor {
    command: String,
}

impl ExternalEditor {
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

impl Editor for ExternalEditor {
    fn open(&self, path: &Path) -> Result<ExitStatus> {
        Command::new(&self.command)
            .arg(path)
            .status()
            .with_context(|| format!("failed to launch editor '{}'", self.command))
    }
}
