//! Fixing source text to a constant number of display lines.

/// Number of lines every rendered snippet occupies unless configured otherwise.
pub const DEFAULT_MAX_LINES: usize = 47;

/// Source text clamped or padded to exactly `max_lines` lines.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NormalizedText {
    /// Exactly `max_lines` lines, without terminators.
    pub lines: Vec<String>,
    /// Line count of the input before clamping or padding.
    pub original_line_count: usize,
    /// Whether lines beyond `max_lines` were dropped.
    pub truncated: bool,
}

impl NormalizedText {
    /// Lines joined with `\n` (no trailing newline).
    pub fn as_text(&self) -> String {
        self.lines.join("\n")
    }

    /// Number of lines, always the `max_lines` the text was normalized to.
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// Clamp `text` to `max_lines` lines, padding with blank lines when shorter.
///
/// Lines split on `\n` and `\r\n`; a trailing terminator does not start an extra line.
pub fn normalize(text: &str, max_lines: usize) -> NormalizedText {
    let mut lines: Vec<String> = text.lines().map(str::to_owned).collect();
    let original_line_count = lines.len();
    let truncated = original_line_count > max_lines;

    if truncated {
        lines.truncate(max_lines);
    } else {
        lines.resize(max_lines, String::new());
    }

    NormalizedText {
        lines,
        original_line_count,
        truncated,
    }
}

#[cfg(test)]
#[path = "../tests/unit/normalize.rs"]
mod tests;
