//! Note template rendering.
//!
//! The template body and its header date format travel together as a
//! value object, so callers and tests can substitute their own without
//! touching any process-wide state.

use crate::week::ResolvedWeek;
use serde::{Deserialize, Serialize};

/// Body of a freshly created weekly note. Blank lines are significant.
pub const DEFAULT_TEMPLATE: &str = "# {year} W{week} ({week_start_date} - {week_end_date})\n\n\n## Done\n\n\n## TODO\n\n{todo}\n\n## Blockers\n\n{blockers}\n\n";

/// Date display format used in the note header.
pub const DEFAULT_DATE_FORMAT: &str = "%Y/%m/%d";

/// Template configuration for rendering a new note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoteTemplate {
    /// Template text with `{year}`, `{week}`, `{week_start_date}`,
    /// `{week_end_date}`, `{todo}` and `{blockers}` placeholders.
    pub body: String,
    /// chrono format string for the header dates.
    pub date_format: String,
}

impl Default for NoteTemplate {
    fn default() -> Self {
        Self {
            body: DEFAULT_TEMPLATE.to_string(),
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl NoteTemplate {
    /// Render the template for `week`, seeding the TODO and Blockers
    /// sections with carried-forward text when present.
    ///
    /// Substituted values are inserted literally and never re-scanned
    /// for placeholders; unknown placeholders pass through unchanged.
    pub fn render(
        &self,
        week: &ResolvedWeek,
        todo: Option<&str>,
        blockers: Option<&str>,
    ) -> String {
        // Carried-forward TODO text keeps a blank line between it and
        // the next heading.
        let todo = match todo {
            Some(text) if !text.is_empty() => format!("{text}\n"),
            _ => String::new(),
        };
        let blockers = blockers.unwrap_or("");

        let mut out = String::with_capacity(self.body.len() + todo.len() + blockers.len());
        let mut rest = self.body.as_str();
        while let Some(open) = rest.find('{') {
            out.push_str(&rest[..open]);
            let tail = &rest[open..];
            let Some(close) = tail.find('}') else {
                out.push_str(tail);
                rest = "";
                break;
            };
            match &tail[1..close] {
                "year" => out.push_str(&week.year.to_string()),
                "week" => out.push_str(&week.week.to_string()),
                "week_start_date" => {
                    out.push_str(&week.start.format(&self.date_format).to_string())
                }
                "week_end_date" => out.push_str(&week.end.format(&self.date_format).to_string()),
                "todo" => out.push_str(&todo),
                "blockers" => out.push_str(blockers),
                _ => out.push_str(&tail[..=close]),
            }
            rest = &tail[close + 1..];
        }
        out.push_str(rest);
        out
    }
}
