//! Weekly Notes Library
//!
//! This library keeps one markdown note per ISO work-week, stored as
//! `<base_dir>/<YYYY>/<MM-DD of Monday>.md`. A note is created from a
//! template the first time its week is opened, seeding the TODO and
//! Blockers sections from the previous week's note, and is afterwards
//! only ever opened for the user to edit.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **CLI Layer**: the `weeknote` binary - argument parsing and messages
//! - **Domain Layer**: `week` and `section` modules - date resolution
//!   and section extraction
//! - **Orchestration Layer**: [`NoteApp`] - note lifecycle and editor
//!   hand-off
//!
//! # Example
//!
//! ```no_run
//! use weeknote::{Config, ExternalEditor, NoteApp};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let config = Config::default();
//!     let editor = ExternalEditor::new(config.editor.clone());
//!     let app = NoteApp::new(config, Box::new(editor));
//!     app.open_note(None)?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod editor;
pub mod section;
pub mod template;
pub mod week;

use anyhow::{Context, Result};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};

// Re-export commonly used types
pub use config::Config;
pub use editor::{Editor, ExternalEditor};
pub use section::Section;
pub use template::NoteTemplate;
pub use week::ResolvedWeek;

/// Orchestrates note lookup, creation and editing.
///
/// Holds the configuration plus the injected [`Editor`] capability; the
/// rest of the crate is pure functions over dates and text.
pub struct NoteApp {
    config: Config,
    editor: Box<dyn Editor>,
}

impl NoteApp {
    pub fn new(config: Config, editor: Box<dyn Editor>) -> Self {
        Self { config, editor }
    }

    /// Canonical note path for the week the token resolves to.
    pub fn note_path_for(&self, token: Option<&str>) -> Result<PathBuf> {
        let date = week::resolve_date(token)?;
        week::note_path(&self.config.notes_dir(), date)
    }

    /// Body of `section` in the note the token resolves to.
    ///
    /// # Returns
    /// `Ok(None)` when the note file is missing or empty, or when the
    /// note has no such section. Only the date token failing to parse
    /// or an unreadable file is an error.
    pub fn section_text(&self, section: Section, token: Option<&str>) -> Result<Option<String>> {
        let path = self.note_path_for(token)?;
        if !has_content(&path) {
            return Ok(None);
        }
        let content = fs::read_to_string(&path)
            .with_context(|| format!("failed to read note {}", path.display()))?;
        Ok(section::section_body(&content, section.heading()).map(str::to_string))
    }

    /// Open the note for the resolved week, creating it first if absent.
    ///
    /// A new note is rendered from the configured template with TODO and
    /// Blockers seeded from last week's note when available; an existing
    /// non-empty note is never rewritten. The newly created file is
    /// restricted to owner read/write after the editor exits.
    pub fn open_note(&self, token: Option<&str>) -> Result<()> {
        let date = week::resolve_date(token)?;
        let resolved = week::resolve_week(date)?;
        let path = week::note_path(&self.config.notes_dir(), date)?;

        if let Some(dir) = path.parent() {
            create_notes_dir(dir)?;
        }

        if has_content(&path) {
            self.editor.open(&path)?;
            return Ok(());
        }

        let todo = self.carry_forward(Section::Todo);
        let blockers = self.carry_forward(Section::Blockers);

        let text = self
            .config
            .template
            .render(&resolved, todo.as_deref(), blockers.as_deref());
        fs::write(&path, text)
            .with_context(|| format!("failed to create note {}", path.display()))?;
        debug!("created note {}", path.display());

        self.editor.open(&path)?;
        tighten_permissions(&path);
        Ok(())
    }

    /// Last week's body of `section`, if any.
    ///
    /// Absence is normal here; a failed read is logged and treated the
    /// same, since carry-forward is a best-effort merge.
    fn carry_forward(&self, section: Section) -> Option<String> {
        match self.section_text(section, Some("last")) {
            Ok(found) => {
                if found.is_some() {
                    debug!("carrying forward {} from last week", section.heading());
                }
                found
            }
            Err(err) => {
                debug!("skipping {} carry-forward: {err:#}", section.heading());
                None
            }
        }
    }
}

/// True when the file exists with content; an empty file is treated the
/// same as a missing one.
fn has_content(path: &Path) -> bool {
    fs::metadata(path).map(|m| m.len() > 0).unwrap_or(false)
}

/// Create the year directory with owner-only access.
fn create_notes_dir(dir: &Path) -> Result<()> {
    let mut builder = fs::DirBuilder::new();
    builder.recursive(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::DirBuilderExt;
        builder.mode(0o700);
    }
    builder
        .create(dir)
        .with_context(|| format!("failed to create notes directory {}", dir.display()))
}

/// Restrict the note to owner read/write. Failure is ignored.
#[cfg(unix)]
fn tighten_permissions(path: &Path) {
    use std::os::unix::fs::PermissionsExt;
    let _ = fs::set_permissions(path, fs::Permissions::from_mode(0o600));
}

#[cfg(not(unix))]
fn tighten_permissions(_path: &Path) {}
