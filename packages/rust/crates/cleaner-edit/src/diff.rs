//! Diff rendering for previews.
//!
//! Uses the `similar` crate to render unified diffs with hunk headers.

use similar::TextDiff;

/// Render a unified diff between `original` and `modified`.
///
/// `label` names both sides of the header (`a/<label>`, `b/<label>`). Returns an
/// empty string when the inputs are identical.
#[must_use]
pub fn unified_diff(original: &str, modified: &str, label: &str) -> String {
    if original == modified {
        return String::new();
    }

    let diff = TextDiff::from_lines(original, modified);
    diff.unified_diff()
        .context_radius(3)
        .header(&format!("a/{label}"), &format!("b/{label}"))
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reordered_lines() {
        let original = "import { A } from './b';\nimport { C } from './a';\n";
        let modified = "import { C } from './a';\nimport { A } from './b';\n";
        let diff = unified_diff(original, modified, "app.ts");

        assert!(diff.starts_with("--- a/app.ts\n+++ b/app.ts\n"));
        assert!(diff.contains("@@"));
        assert!(diff.lines().any(|l| l.starts_with("-import")));
        assert!(diff.lines().any(|l| l.starts_with("+import")));
    }

    #[test]
    fn test_identical_is_empty() {
        assert!(unified_diff("same\n", "same\n", "x.ts").is_empty());
    }
}
