//! Sprint backlog editing.
//!
//! Sprint files keep pending feature ideas as a markdown checklist under a
//! `## Candidatos` heading. This crate finds that section and inserts new
//! items into it without touching any other line.

use std::fmt;

/// Heading of the candidates section.
pub const CANDIDATES_HEADING: &str = "## Candidatos";

/// Sprint file used when the caller does not name one.
pub const DEFAULT_SPRINT: &str = "sprint-01.md";

/// Platforms advertised for new features.
///
/// Advisory only: [`FeatureItem`] accepts any platform string.
pub const PLATFORMS: &[&str] = &["Android", "iOS", "Web", "Cross-platform"];

/// A pending feature line, rendered as `- [ ] <platform>: <title>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeatureItem {
    /// Target platform.
    pub platform: String,
    /// Feature title.
    pub title: String,
}

impl FeatureItem {
    /// Create an item.
    pub fn new(platform: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            platform: platform.into(),
            title: title.into(),
        }
    }
}

impl fmt::Display for FeatureItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "- [ ] {}: {}", self.platform, self.title)
    }
}

/// Where an item ended up.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Inside the candidates section, at this zero-based line.
    Section {
        /// Line index of the inserted item.
        line: usize,
    },
    /// Appended as the last line of the file.
    EndOfFile,
}

/// Result of [`insert_candidate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
    /// Full updated text.
    pub text: String,
    /// Where the item went.
    pub placement: Placement,
}

fn is_heading(line: &str) -> bool {
    line.strip_suffix('\r').unwrap_or(line) == CANDIDATES_HEADING
}

fn is_boundary(line: &str) -> bool {
    line.starts_with('#') || line.starts_with("---")
}

/// Locate the candidates section as `(heading, end)` line indices.
///
/// `end` is the first line after the section: the next line starting with
/// `#` or `---`, or the line count. Sub-headings end the section too.
fn find_section(lines: &[&str]) -> Option<(usize, usize)> {
    let heading = lines.iter().position(|l| is_heading(l))?;
    let end = lines[heading + 1..]
        .iter()
        .position(|l| is_boundary(l))
        .map(|i| heading + 1 + i)
        .unwrap_or(lines.len());
    Some((heading, end))
}

/// Insert a checklist line as the last item of the candidates section.
///
/// The item goes right after the last non-blank line of the section, so
/// blank separators before the next heading or rule stay where they are.
/// Without a section the item becomes the final line of the file; no
/// heading is created.
pub fn insert_candidate(text: &str, item: &str) -> Insertion {
    let lines: Vec<&str> = text.split('\n').collect();

    let Some((heading, end)) = find_section(&lines) else {
        return append_line(text, item);
    };

    let last_filled = (heading + 1..end)
        .rev()
        .find(|&i| !lines[i].trim().is_empty())
        .unwrap_or(heading);
    let at = last_filled + 1;

    let cr = if lines[heading].ends_with('\r') { "\r" } else { "" };
    let new_line = format!("{item}{cr}");

    let mut updated: Vec<&str> = Vec::with_capacity(lines.len() + 1);
    updated.extend_from_slice(&lines[..at]);
    updated.push(&new_line);
    updated.extend_from_slice(&lines[at..]);

    Insertion {
        text: updated.join("\n"),
        placement: Placement::Section { line: at },
    }
}

fn append_line(text: &str, item: &str) -> Insertion {
    let eol = if text.contains("\r\n") { "\r\n" } else { "\n" };
    let mut out = String::with_capacity(text.len() + item.len() + 2 * eol.len());
    out.push_str(text);
    if !out.is_empty() && !out.ends_with('\n') {
        out.push_str(eol);
    }
    out.push_str(item);
    out.push_str(eol);

    Insertion {
        text: out,
        placement: Placement::EndOfFile,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    const ITEM: &str = "- [ ] iOS: Add dark mode";

    #[test_case(
        "# Sprint 01\n\n## Candidatos\n- [ ] Web: Login\n- [ ] Android: Push\n\n---\n\n## Notas\n",
        "# Sprint 01\n\n## Candidatos\n- [ ] Web: Login\n- [ ] Android: Push\n- [ ] iOS: Add dark mode\n\n---\n\n## Notas\n"
        ; "before rule with blank separator")]
    #[test_case(
        "## Candidatos\n- [ ] Web: Login\n## Hecho\n",
        "## Candidatos\n- [ ] Web: Login\n- [ ] iOS: Add dark mode\n## Hecho\n"
        ; "directly before next heading")]
    #[test_case(
        "## Candidatos\n- [ ] Web: Login\n---\n",
        "## Candidatos\n- [ ] Web: Login\n- [ ] iOS: Add dark mode\n---\n"
        ; "rule without blank line keeps previous line intact")]
    #[test_case(
        "## Candidatos\n- [ ] Web: Login\n",
        "## Candidatos\n- [ ] Web: Login\n- [ ] iOS: Add dark mode\n"
        ; "section at end of file")]
    #[test_case(
        "## Candidatos\n- [ ] Web: Login",
        "## Candidatos\n- [ ] Web: Login\n- [ ] iOS: Add dark mode"
        ; "no trailing newline")]
    #[test_case(
        "## Candidatos\n\n## Hecho\n",
        "## Candidatos\n- [ ] iOS: Add dark mode\n\n## Hecho\n"
        ; "empty section")]
    #[test_case(
        "## Candidatos\n- [ ] Web: Login\n### Ideas\n- [ ] Web: Later\n",
        "## Candidatos\n- [ ] Web: Login\n- [ ] iOS: Add dark mode\n### Ideas\n- [ ] Web: Later\n"
        ; "sub heading ends the section")]
    #[test_case(
        "## Candidatos\r\n- [ ] Web: Login\r\n\r\n---\r\n",
        "## Candidatos\r\n- [ ] Web: Login\r\n- [ ] iOS: Add dark mode\r\n\r\n---\r\n"
        ; "crlf line endings")]
    fn test_insert_into_section(input: &str, expected: &str) {
        let insertion = insert_candidate(input, ITEM);
        assert_eq!(insertion.text, expected);
        assert!(matches!(insertion.placement, Placement::Section { .. }));
    }

    #[test_case("# Sprint 02\n\nSin candidatos.\n", "# Sprint 02\n\nSin candidatos.\n- [ ] iOS: Add dark mode\n" ; "trailing newline")]
    #[test_case("# Sprint 02", "# Sprint 02\n- [ ] iOS: Add dark mode\n" ; "no trailing newline")]
    #[test_case("", "- [ ] iOS: Add dark mode\n" ; "empty file")]
    #[test_case("### Candidatos\n- [ ] Web: a\n", "### Candidatos\n- [ ] Web: a\n- [ ] iOS: Add dark mode\n" ; "deeper heading is not the section")]
    fn test_append_without_section(input: &str, expected: &str) {
        let insertion = insert_candidate(input, ITEM);
        assert_eq!(insertion.text, expected);
        assert_eq!(insertion.placement, Placement::EndOfFile);
        assert!(!insertion.text.contains("\n## Candidatos"));
    }

    #[test]
    fn test_reports_inserted_line() {
        let insertion = insert_candidate("# S\n## Candidatos\n- [ ] Web: a\n", ITEM);
        assert_eq!(insertion.placement, Placement::Section { line: 3 });
        assert_eq!(insertion.text.split('\n').nth(3), Some(ITEM));
    }

    #[test]
    fn test_feature_item_display() {
        assert_eq!(FeatureItem::new("iOS", "Add dark mode").to_string(), ITEM);
        assert_eq!(
            FeatureItem::new("Desktop", "Tray icon").to_string(),
            "- [ ] Desktop: Tray icon"
        );
    }
}
