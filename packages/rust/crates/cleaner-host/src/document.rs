//! In-memory text buffer.
//!
//! Edits are validated in full before the buffer is touched, so a rejected
//! edit leaves the text unchanged.

use cleaner_edit::{Position, Range, TextEdit};
use tracing::debug;

use crate::error::HostError;

/// The text-editing surface a command works against.
pub trait TextEditor {
    /// Full document text.
    fn text(&self) -> String;

    /// Delete `edit.range` and insert `edit.new_text` at its start, atomically.
    ///
    /// # Errors
    /// [`HostError::InvalidRange`] when the range does not address the document.
    fn apply_edit(&mut self, edit: TextEdit) -> Result<(), HostError>;
}

/// A text buffer with a version counter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    text: String,
    version: u64,
}

impl Document {
    /// Create a buffer at version 0.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            version: 0,
        }
    }

    /// Current text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Number of applied edits.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Number of `\n`-separated lines. An empty document has one line.
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Byte offset of `pos`.
    ///
    /// # Errors
    /// [`HostError::InvalidRange`] when the line does not exist, the column is
    /// past the end of the line, or the column splits a character.
    pub fn offset_at(&self, pos: Position) -> Result<usize, HostError> {
        let invalid = |reason: String| HostError::InvalidRange {
            range: Range::new(pos, pos),
            reason,
        };

        let mut line_start = 0;
        for (idx, line) in self.text.split('\n').enumerate() {
            if idx == pos.line {
                if pos.character > line.len() {
                    return Err(invalid(format!(
                        "column {} past end of line {} (length {})",
                        pos.character,
                        pos.line,
                        line.len()
                    )));
                }
                if !line.is_char_boundary(pos.character) {
                    return Err(invalid(format!(
                        "column {} is inside a character on line {}",
                        pos.character, pos.line
                    )));
                }
                return Ok(line_start + pos.character);
            }
            line_start += line.len() + 1;
        }
        Err(invalid(format!(
            "line {} past end of document ({} lines)",
            pos.line,
            self.line_count()
        )))
    }

    /// Apply one edit.
    ///
    /// # Errors
    /// See [`Document::offset_at`]; also rejects ranges whose end precedes
    /// their start.
    pub fn apply(&mut self, edit: &TextEdit) -> Result<(), HostError> {
        let start = self
            .offset_at(edit.range.start)
            .map_err(|err| with_range(err, edit.range))?;
        let end = self
            .offset_at(edit.range.end)
            .map_err(|err| with_range(err, edit.range))?;
        if end < start {
            return Err(HostError::InvalidRange {
                range: edit.range,
                reason: "end precedes start".to_string(),
            });
        }

        self.text.replace_range(start..end, &edit.new_text);
        self.version += 1;
        debug!(
            start,
            end,
            inserted = edit.new_text.len(),
            version = self.version,
            "applied edit"
        );
        Ok(())
    }
}

fn with_range(err: HostError, range: Range) -> HostError {
    match err {
        HostError::InvalidRange { reason, .. } => HostError::InvalidRange { range, reason },
        other => other,
    }
}

impl TextEditor for Document {
    fn text(&self) -> String {
        self.text.clone()
    }

    fn apply_edit(&mut self, edit: TextEdit) -> Result<(), HostError> {
        self.apply(&edit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn edit(start: (usize, usize), end: (usize, usize), text: &str) -> TextEdit {
        TextEdit {
            range: Range::new(Position::new(start.0, start.1), Position::new(end.0, end.1)),
            new_text: text.to_string(),
        }
    }

    #[test]
    fn test_replace_across_lines() {
        let mut doc = Document::new("one\ntwo\nthree");
        doc.apply(&edit((0, 1), (1, 2), "X")).expect("apply");
        assert_eq!(doc.as_str(), "oXo\nthree");
        assert_eq!(doc.version(), 1);
    }

    #[test]
    fn test_insert_at_end_of_line() {
        let mut doc = Document::new("ab\ncd");
        doc.apply(&edit((1, 2), (1, 2), "!")).expect("apply");
        assert_eq!(doc.as_str(), "ab\ncd!");
    }

    #[test]
    fn test_rejects_column_past_line_end() {
        let mut doc = Document::new("ab\ncd");
        let err = doc.apply(&edit((0, 0), (0, 3), "")).expect_err("reject");
        assert!(matches!(err, HostError::InvalidRange { .. }));
        assert_eq!(doc.as_str(), "ab\ncd");
        assert_eq!(doc.version(), 0);
    }

    #[test]
    fn test_rejects_missing_line() {
        let mut doc = Document::new("ab");
        assert!(doc.apply(&edit((0, 0), (4, 0), "")).is_err());
    }

    #[test]
    fn test_rejects_split_character() {
        let mut doc = Document::new("é");
        assert!(doc.apply(&edit((0, 1), (0, 2), "")).is_err());
        assert_eq!(doc.as_str(), "é");
    }

    #[test]
    fn test_rejects_reversed_range() {
        let mut doc = Document::new("abc");
        let err = doc.apply(&edit((0, 2), (0, 1), "")).expect_err("reject");
        assert_eq!(
            err,
            HostError::InvalidRange {
                range: Range::new(Position::new(0, 2), Position::new(0, 1)),
                reason: "end precedes start".to_string(),
            }
        );
    }
}
