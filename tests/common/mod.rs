//! Common test utilities for integration tests

use anyhow::Result;
use chrono::NaiveDate;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitStatus;
use std::sync::{Arc, Mutex};
use tempfile::TempDir;
use weeknote::editor::Editor;
use weeknote::{Config, NoteApp};

/// Editor stub that records the paths it was asked to open.
#[derive(Clone, Default)]
pub struct RecordingEditor {
    opened: Arc<Mutex<Vec<PathBuf>>>,
}

impl RecordingEditor {
    pub fn opened(&self) -> Vec<PathBuf> {
        self.opened.lock().unwrap().clone()
    }
}

impl Editor for RecordingEditor {
    fn open(&self, path: &Path) -> Result<ExitStatus> {
        self.opened.lock().unwrap().push(path.to_path_buf());
        use std::os::unix::process::ExitStatusExt;
        Ok(ExitStatus::from_raw(0))
    }
}

/// Create a `NoteApp` rooted in a fresh temporary notes directory.
pub fn test_app() -> (NoteApp, RecordingEditor, TempDir) {
    let dir = TempDir::new().unwrap();
    let editor = RecordingEditor::default();
    let config = Config {
        base_dir: dir.path().to_str().unwrap().to_string(),
        ..Config::default()
    };
    let app = NoteApp::new(config, Box::new(editor.clone()));
    (app, editor, dir)
}

/// Write a note file for the week containing `date`, creating the year
/// directory as needed.
#[allow(dead_code)]
pub fn write_note(base: &Path, date: NaiveDate, content: &str) -> PathBuf {
    let path = weeknote::week::note_path(base, date).unwrap();
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, content).unwrap();
    path
}
