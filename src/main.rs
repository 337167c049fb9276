//! weeknote - Weekly Markdown Notes - Main Entry Point
//!
//! This is the main entry point for the weeknote CLI.
//! The actual implementation is in the `weeknote` library.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use weeknote::{Config, ExternalEditor, NoteApp, Section};

/// Create weekly markdown notes, organized as `YYYY/MM-DD.md` under the
/// notes directory.
///
/// Pass a date to open the note for the week containing it; omit the
/// date or use 'this' to create or open this week's note; use 'last'
/// for last week's. A missing note is created from a template, carrying
/// forward last week's TODO and Blockers sections.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Date for which to add/open a note; always uses the beginning of
    /// the week as the filename. Accepts 'this', 'today', 'last' or a
    /// date such as 2024-03-05
    date: Option<String>,

    /// Print the TODO section and exit
    #[arg(long)]
    todo: bool,

    /// Print the Blockers section and exit
    #[arg(long)]
    blockers: bool,

    /// Base directory; defaults to $HOME/.notes
    #[arg(long)]
    dir: Option<String>,

    /// Path to an alternate config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Logging is best-effort; a broken RUST_LOG must not break note-taking.
    let _logger = flexi_logger::Logger::try_with_env_or_str("warn")
        .and_then(|logger| logger.start())
        .ok();

    let mut config = Config::load(args.config.as_deref())?;
    if let Some(dir) = args.dir {
        config.base_dir = dir;
    }

    let editor = ExternalEditor::new(config.editor.clone());
    let app = NoteApp::new(config, Box::new(editor));

    if args.todo || args.blockers {
        let section = if args.todo {
            Section::Todo
        } else {
            Section::Blockers
        };
        match app.section_text(section, args.date.as_deref())? {
            Some(text) => println!("{text}"),
            None => match &args.date {
                Some(date) => println!("No notes found for date '{date}'"),
                None => println!("No notes found for this week"),
            },
        }
        return Ok(());
    }

    app.open_note(args.date.as_deref())
}
