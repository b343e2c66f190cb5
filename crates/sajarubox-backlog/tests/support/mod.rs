//! Reads a sprint file's candidates section back as checklist items.

use sajarubox_backlog::CANDIDATES_HEADING;

/// A checklist line found in a sprint file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Checkbox {
    pub text: String,
    pub checked: bool,
    /// Zero-based line number in the source.
    pub line: usize,
}

/// Split a `- [ ] text` / `* [x] text` line into its state and text.
pub fn parse_checkbox_line(line: &str) -> Option<(bool, &str)> {
    let trimmed = line.trim();

    let checked = match trimmed.get(..5)? {
        "- [ ]" | "* [ ]" => false,
        "- [x]" | "- [X]" | "* [x]" | "* [X]" => true,
        _ => return None,
    };

    Some((checked, trimmed[5..].trim()))
}

/// Checklist items listed under the candidates section, in order.
pub fn candidates(text: &str) -> Vec<Checkbox> {
    let lines: Vec<&str> = text.split('\n').collect();
    let Some(heading) = lines
        .iter()
        .position(|l| l.trim_end_matches('\r') == CANDIDATES_HEADING)
    else {
        return Vec::new();
    };

    lines
        .iter()
        .enumerate()
        .skip(heading + 1)
        .take_while(|(_, l)| !l.starts_with('#') && !l.starts_with("---"))
        .filter_map(|(line, l)| {
            let (checked, text) = parse_checkbox_line(l)?;
            Some(Checkbox {
                text: text.to_string(),
                checked,
                line,
            })
        })
        .collect()
}
