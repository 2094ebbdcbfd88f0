//! Constructor cleaner.
//!
//! Locates the first constructor by per-line brace-depth counting and replaces
//! it with a regenerated declaration.

use tracing::debug;

use crate::constructor_helper::create_constructor_parameters;
use crate::error::EditError;
use crate::types::{ConstructorStyle, Range, TextEdit};

/// Keyword that starts a constructor block.
pub const CONSTRUCTOR_MARKER: &str = "constructor";

/// The span of the first constructor in a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstructorBlock {
    /// Line holding the marker.
    pub first_line: usize,
    /// Line where the brace depth returned to zero.
    pub last_line: usize,
    /// Lines `first_line..=last_line` joined with `\n`.
    pub text: String,
    /// The line after `last_line`, when there is one.
    ///
    /// Captured with the block but never part of the parameter or body text.
    pub lookahead: Option<String>,
}

impl ConstructorBlock {
    /// Text of the first line before the marker: indentation and modifiers.
    #[must_use]
    pub fn head(&self) -> &str {
        let first = self.text.split('\n').next().unwrap_or_default();
        first
            .find(CONSTRUCTOR_MARKER)
            .map_or(first, |idx| &first[..idx])
    }

    /// Text between the first `(` and the first `)`.
    #[must_use]
    pub fn raw_parameters(&self) -> &str {
        between(&self.text, self.text.find('('), self.text.find(')'))
    }

    /// Text between the first `{` and the last `}`.
    #[must_use]
    pub fn raw_body(&self) -> &str {
        between(&self.text, self.text.find('{'), self.text.rfind('}'))
    }
}

fn between(text: &str, open: Option<usize>, close: Option<usize>) -> &str {
    match (open, close) {
        (Some(open), Some(close)) if open < close => &text[open + 1..close],
        _ => "",
    }
}

/// Find the first constructor in `lines`.
///
/// Depth moves by at most one per line: `+1` if the line has a `{`, `-1` if it
/// has a `}`. The block ends on the first line with a `}` that leaves the depth
/// at zero.
///
/// # Errors
/// [`EditError::NoConstructorFound`] when no line has the marker;
/// [`EditError::ConstructorNotClosed`] when the depth never returns to zero.
pub fn locate_constructor(lines: &[&str]) -> Result<ConstructorBlock, EditError> {
    let mut first = None;
    let mut depth: isize = 0;

    for (idx, line) in lines.iter().enumerate() {
        if first.is_none() && line.contains(CONSTRUCTOR_MARKER) {
            first = Some(idx);
        }
        let Some(start) = first else {
            continue;
        };

        let opens = line.contains('{');
        let closes = line.contains('}');
        if opens {
            depth += 1;
        }
        if closes {
            depth -= 1;
        }
        if closes && depth == 0 {
            return Ok(ConstructorBlock {
                first_line: start,
                last_line: idx,
                text: lines[start..=idx].join("\n"),
                lookahead: lines.get(idx + 1).map(|line| (*line).to_string()),
            });
        }
    }

    match first {
        None => Err(EditError::NoConstructorFound),
        Some(start) => Err(EditError::ConstructorNotClosed { line: start + 1 }),
    }
}

/// Compute the edit that replaces the first constructor of `text`.
///
/// # Errors
/// Propagates [`locate_constructor`] failures.
pub fn clean_constructor(text: &str, style: &ConstructorStyle) -> Result<TextEdit, EditError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let block = locate_constructor(&lines)?;

    let new_text = create_constructor_parameters(
        block.head(),
        block.raw_parameters(),
        block.raw_body(),
        style,
    );

    debug!(
        first_line = block.first_line,
        last_line = block.last_line,
        "rewriting constructor"
    );

    Ok(TextEdit {
        range: Range::lines(block.first_line, block.last_line, lines[block.last_line].len()),
        new_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_literal_on_one_line_balances() {
        let lines = ["constructor(x) {", "  this.o = { y: 1 };", "}", "other() {}"];
        let block = locate_constructor(&lines).expect("block");
        assert_eq!((block.first_line, block.last_line), (0, 2));
        assert_eq!(block.lookahead.as_deref(), Some("other() {}"));
    }

    #[test]
    fn test_single_line_constructor() {
        let lines = ["constructor(x) { this.o = { y: 1 }; }"];
        let block = locate_constructor(&lines).expect("block");
        assert_eq!((block.first_line, block.last_line), (0, 0));
        assert_eq!(block.raw_parameters(), "x");
        assert_eq!(block.raw_body(), " this.o = { y: 1 }; ");
        assert!(block.lookahead.is_none());
    }

    #[test]
    fn test_head_keeps_indent_and_modifier() {
        let lines = ["  public constructor() {", "  }"];
        let block = locate_constructor(&lines).expect("block");
        assert_eq!(block.head(), "  public ");
    }

    #[test]
    fn test_missing_marker() {
        let lines = ["class A {", "}"];
        assert_eq!(locate_constructor(&lines), Err(EditError::NoConstructorFound));
    }

    #[test]
    fn test_unclosed_constructor_on_last_line() {
        let lines = ["class A {", "  constructor() {"];
        assert_eq!(
            locate_constructor(&lines),
            Err(EditError::ConstructorNotClosed { line: 2 })
        );
    }

    #[test]
    fn test_later_marker_does_not_move_start() {
        let lines = ["constructor() {", "  this.constructorName = 'x';", "}"];
        let block = locate_constructor(&lines).expect("block");
        assert_eq!(block.first_line, 0);
    }

    #[test]
    fn test_missing_parens_yield_empty_parameters() {
        let lines = ["// constructor {", "}"];
        let block = locate_constructor(&lines).expect("block");
        assert_eq!(block.raw_parameters(), "");
    }
}
