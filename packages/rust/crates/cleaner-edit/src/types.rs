//! Core types shared by the cleaners.
//!
//! Positions, ranges and edits describe a single delete+insert over a document.
//! The style structs carry the formatting policy each cleaner applies.

use serde::{Deserialize, Serialize};

/// Zero-based position inside a document.
///
/// `character` is a byte column within the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    /// Line index (0-indexed).
    pub line: usize,
    /// Byte column within the line (0-indexed).
    pub character: usize,
}

impl Position {
    /// Create a position.
    #[must_use]
    pub const fn new(line: usize, character: usize) -> Self {
        Self { line, character }
    }
}

/// Half-open span between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    /// Inclusive start.
    pub start: Position,
    /// Exclusive end.
    pub end: Position,
}

impl Range {
    /// Create a range.
    #[must_use]
    pub const fn new(start: Position, end: Position) -> Self {
        Self { start, end }
    }

    /// Range covering whole lines `first..=last`, ending at the end of `last`.
    ///
    /// `last_len` is the byte length of line `last` (without its newline).
    #[must_use]
    pub const fn lines(first: usize, last: usize, last_len: usize) -> Self {
        Self {
            start: Position::new(first, 0),
            end: Position::new(last, last_len),
        }
    }
}

/// A single edit: delete `range`, then insert `new_text` at `range.start`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextEdit {
    /// Region being replaced.
    pub range: Range,
    /// Replacement text.
    pub new_text: String,
}

impl TextEdit {
    /// Apply the edit to `text` and return the new content.
    ///
    /// Out-of-range positions are clamped to the document; hosts that need to
    /// reject invalid ranges validate before calling this.
    #[must_use]
    pub fn apply_to(&self, text: &str) -> String {
        let start = offset_of(text, self.range.start);
        let end = offset_of(text, self.range.end).max(start);
        let mut out = String::with_capacity(text.len() + self.new_text.len());
        out.push_str(&text[..start]);
        out.push_str(&self.new_text);
        out.push_str(&text[end..]);
        out
    }
}

/// Byte offset of `pos` in `text`, clamped to line ends and char boundaries.
fn offset_of(text: &str, pos: Position) -> usize {
    let mut line_start = 0;
    for (idx, line) in text.split('\n').enumerate() {
        if idx == pos.line {
            let mut col = pos.character.min(line.len());
            while !line.is_char_boundary(col) {
                col -= 1;
            }
            return line_start + col;
        }
        line_start += line.len() + 1;
    }
    text.len()
}

/// Quote character used when re-quoting import paths.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuoteStyle {
    /// `'path'`
    #[default]
    Single,
    /// `"path"`
    Double,
}

impl QuoteStyle {
    /// The quote character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Single => '\'',
            Self::Double => '"',
        }
    }
}

/// Formatting policy for the import reorderer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImportStyle {
    /// Quote used around `from` paths.
    pub quote: QuoteStyle,
    /// Terminate each import with `;`.
    pub semicolons: bool,
    /// Pad import clauses so every `from` keyword lines up.
    pub align_from: bool,
    /// Put one blank line between import groups.
    pub separate_groups: bool,
    /// Path prefixes that form the framework group, ahead of other packages.
    pub framework_prefixes: Vec<String>,
}

impl Default for ImportStyle {
    fn default() -> Self {
        Self {
            quote: QuoteStyle::Single,
            semicolons: true,
            align_from: true,
            separate_groups: true,
            framework_prefixes: vec!["@angular/".to_string()],
        }
    }
}

/// Formatting policy for the constructor cleaner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConstructorStyle {
    /// One level of indentation inside the constructor.
    pub indent_unit: String,
    /// Place the opening brace on its own line.
    pub brace_on_new_line: bool,
}

impl Default for ConstructorStyle {
    fn default() -> Self {
        Self {
            indent_unit: "  ".to_string(),
            brace_on_new_line: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_replaces_line_span() {
        let text = "a\nb\nc";
        let edit = TextEdit {
            range: Range::lines(0, 1, 1),
            new_text: "x".to_string(),
        };
        assert_eq!(edit.apply_to(text), "x\nc");
    }

    #[test]
    fn test_apply_clamps_past_end() {
        let text = "abc";
        let edit = TextEdit {
            range: Range::new(Position::new(0, 1), Position::new(9, 9)),
            new_text: "Z".to_string(),
        };
        assert_eq!(edit.apply_to(text), "aZ");
    }
}
