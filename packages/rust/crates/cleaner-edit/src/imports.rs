//! Import reorderer.
//!
//! Finds the leading block of import statements, normalizes and aligns them,
//! sorts them by source path and regroups them.

use tracing::debug;

use crate::error::EditError;
use crate::import_helper::{
    classify_lines, clean_lines, indent_lines, longest_module_name, sort_by_from_value,
};
use crate::types::{ImportStyle, Range, TextEdit};

/// Substring heuristic for an import statement.
///
/// True when the line contains `import` and `from`, plus either both braces or
/// both `*` and `as`. No grammar check: a comment mentioning these words
/// matches too.
#[must_use]
pub fn is_import_line(line: &str) -> bool {
    let named = line.contains('{') && line.contains('}');
    let namespace = line.contains('*') && line.contains("as");
    line.contains("import") && line.contains("from") && (named || namespace)
}

/// Index of the last line matching [`is_import_line`].
#[must_use]
pub fn last_import_index(lines: &[&str]) -> Option<usize> {
    lines.iter().rposition(|line| is_import_line(line))
}

/// Compute the edit that rewrites lines `0..=last import` of `text`.
///
/// # Errors
/// Returns [`EditError::NoImportFound`] when no line matches the heuristic.
pub fn reorder_imports(text: &str, style: &ImportStyle) -> Result<TextEdit, EditError> {
    let lines: Vec<&str> = text.split('\n').collect();
    let last = last_import_index(&lines).ok_or(EditError::NoImportFound)?;
    let region = &lines[..=last];

    let mut cleaned = clean_lines(region, style);
    let width = if style.align_from {
        longest_module_name(&cleaned)
    } else {
        0
    };
    indent_lines(&mut cleaned, width);
    sort_by_from_value(&mut cleaned);
    let new_text = classify_lines(&cleaned, style).join("\n");

    debug!(last_line = last, width, "rewriting import region");

    Ok(TextEdit {
        range: Range::lines(0, last, lines[last].len()),
        new_text,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heuristic_accepts_named_and_namespace() {
        assert!(is_import_line("import { A } from './a';"));
        assert!(is_import_line("import * as fs from 'fs';"));
    }

    #[test]
    fn test_heuristic_rejects_default_and_side_effect() {
        assert!(!is_import_line("import Foo from 'foo';"));
        assert!(!is_import_line("import 'zone.js';"));
        assert!(!is_import_line("const x = { a: 1 };"));
    }

    #[test]
    fn test_heuristic_matches_comment_mentioning_import() {
        assert!(is_import_line("// import { x } from somewhere"));
    }

    #[test]
    fn test_last_import_index() {
        let lines = ["import { A } from 'a';", "", "import { B } from 'b';", "code();"];
        assert_eq!(last_import_index(&lines), Some(2));
        assert_eq!(last_import_index(&["code();"]), None);
    }
}
