//! Markdown section extraction.
//!
//! A note is a flat markdown document whose `##` heading lines delimit
//! sections; a section's body runs from its heading line to the next
//! `##` line or the end of the document.

use std::str::FromStr;

/// The named note sections that can be queried and carried forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Todo,
    Blockers,
}

impl Section {
    /// The literal heading text, without the `## ` prefix.
    pub fn heading(&self) -> &'static str {
        match self {
            Section::Todo => "TODO",
            Section::Blockers => "Blockers",
        }
    }
}

impl FromStr for Section {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "todo" | "TODO" => Ok(Section::Todo),
            "blockers" | "Blockers" => Ok(Section::Blockers),
            _ => Err(format!(
                "Invalid section '{}'. Valid options are: todo, blockers",
                s
            )),
        }
    }
}

/// Extract the body of the section named `name` from `content`.
///
/// The heading must be a line reading exactly `## <name>`. The body is
/// all text strictly after that line, up to but not including the
/// nearest following line that starts with `##`, or to the end of
/// content when no such line exists. The extracted span is trimmed.
///
/// # Returns
/// `None` when the heading is not present. A heading that is present
/// with an empty body yields `Some("")`, which is distinct from a
/// missing section.
pub fn section_body<'a>(content: &'a str, name: &str) -> Option<&'a str> {
    let heading = format!("## {name}");
    let mut body_start = None;
    let mut pos = 0;
    for line in content.split_inclusive('\n') {
        let line_start = pos;
        pos += line.len();
        let text = line.strip_suffix('\n').unwrap_or(line);
        let text = text.strip_suffix('\r').unwrap_or(text);
        match body_start {
            None if text == heading => body_start = Some(pos),
            // The boundary is the nearest following heading, never a
            // later one.
            Some(start) if text.starts_with("##") => {
                return Some(content[start..line_start].trim());
            }
            _ => {}
        }
    }
    body_start.map(|start| content[start..].trim())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extracts_body_between_headings() {
        let content = "## TODO\n- buy milk\n\n## Blockers\n- none\n";
        assert_eq!(section_body(content, "TODO"), Some("- buy milk"));
        assert_eq!(section_body(content, "Blockers"), Some("- none"));
    }

    #[test]
    fn test_last_section_runs_to_end_of_content() {
        let content = "# header\n\n## TODO\n- a\n- b\n";
        assert_eq!(section_body(content, "TODO"), Some("- a\n- b"));
    }

    #[test]
    fn test_preceding_content_is_ignored() {
        let content = "# 2024 W11 (2024/03/11 - 2024/03/15)\n\n\n## Done\n\n- shipped\n\n## TODO\n\n- review\n\n## Blockers\n\n";
        assert_eq!(section_body(content, "TODO"), Some("- review"));
    }

    #[test]
    fn test_missing_section_is_none() {
        assert_eq!(section_body("## TODO\n- x\n", "Blockers"), None);
        assert_eq!(section_body("", "TODO"), None);
    }

    #[test]
    fn test_empty_body_is_found_not_missing() {
        let content = "## TODO\n\n## Blockers\n- stuck\n";
        assert_eq!(section_body(content, "TODO"), Some(""));
    }

    #[test]
    fn test_heading_match_is_exact() {
        // "## TODOS" is a different section, not a prefix match.
        assert_eq!(section_body("## TODOS\n- x\n", "TODO"), None);
        // Trailing text on the heading line disqualifies it too.
        assert_eq!(section_body("## TODO items\n- x\n", "TODO"), None);
    }

    #[test]
    fn test_deeper_heading_also_ends_the_section() {
        let content = "## TODO\n- x\n### details\n- y\n";
        assert_eq!(section_body(content, "TODO"), Some("- x"));
    }

    #[test]
    fn test_body_whitespace_is_trimmed() {
        let content = "## TODO\n\n  - padded  \n\n\n## Blockers\n";
        assert_eq!(section_body(content, "TODO"), Some("- padded"));
    }

    #[test]
    fn test_first_occurrence_wins() {
        let content = "## TODO\nfirst\n## Filler\n\n## TODO\nsecond\n";
        assert_eq!(section_body(content, "TODO"), Some("first"));
    }

    #[test]
    fn test_crlf_line_endings() {
        let content = "## TODO\r\n- buy milk\r\n\r\n## Blockers\r\n- none\r\n";
        assert_eq!(section_body(content, "TODO"), Some("- buy milk"));
    }

    #[test]
    fn test_section_from_str() {
        assert_eq!("todo".parse::<Section>().unwrap(), Section::Todo);
        assert_eq!("Blockers".parse::<Section>().unwrap(), Section::Blockers);
        assert!("done".parse::<Section>().is_err());
    }
}
