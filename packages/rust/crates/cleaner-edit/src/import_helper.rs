//! Line helpers for the import reorderer.
//!
//! Each helper is one stage of the pipeline: clean, align, sort, classify.

use std::sync::LazyLock;

use regex::Regex;

use crate::imports::is_import_line;
use crate::types::ImportStyle;

/// `import <clause> from '<path>'` with optional `;` and trailing line comment.
static IMPORT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r#"^\s*import\s+(?P<clause>.+?)\s*from\s*(?:'(?P<sq>[^']*)'|"(?P<dq>[^"]*)")\s*;?\s*(?P<comment>//.*)?$"#,
    )
    .unwrap_or_else(|err| panic!("invalid IMPORT_RE regex: {err}"))
});

static NAMESPACE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\*\s*as\s+(?P<name>\S+)$")
        .unwrap_or_else(|err| panic!("invalid NAMESPACE_RE regex: {err}"))
});

/// A normalized import statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportLine {
    /// Text between `import` and `from`, whitespace-normalized.
    pub clause: String,
    /// Module path without quotes. This is the sort key.
    pub from_path: String,
    quoted_path: String,
    /// Whether the source line passed [`is_import_line`]. Only those take part
    /// in `from` alignment, since other imports may fall outside the region on
    /// a later run.
    pub aligned: bool,
    semicolon: bool,
    comment: Option<String>,
    rendered: String,
}

impl ImportLine {
    /// Parse a single-line `import ... from '...'` statement.
    ///
    /// Returns `None` for anything else, including side-effect imports.
    #[must_use]
    pub fn parse(line: &str, style: &ImportStyle) -> Option<Self> {
        let caps = IMPORT_RE.captures(line)?;
        let clause = normalize_clause(caps.name("clause")?.as_str());
        if clause.is_empty() {
            return None;
        }
        let from_path = caps
            .name("sq")
            .or_else(|| caps.name("dq"))?
            .as_str()
            .to_string();
        let comment = caps.name("comment").map(|m| m.as_str().trim_end().to_string());

        let mut quote = style.quote.as_char();
        if from_path.contains(quote) {
            quote = if quote == '\'' { '"' } else { '\'' };
        }
        let quoted_path = format!("{quote}{from_path}{quote}");

        let mut import = Self {
            clause,
            from_path,
            quoted_path,
            aligned: is_import_line(line),
            semicolon: style.semicolons,
            comment,
            rendered: String::new(),
        };
        import.rendered = import.render(0);
        Some(import)
    }

    /// Render with the clause padded to `width` characters.
    #[must_use]
    pub fn render(&self, width: usize) -> String {
        let mut out = format!(
            "import {:<width$} from {}",
            self.clause,
            self.quoted_path,
            width = width
        );
        if self.semicolon {
            out.push(';');
        }
        if let Some(comment) = &self.comment {
            out.push(' ');
            out.push_str(comment);
        }
        out
    }
}

/// One line of the import region after cleaning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionLine {
    /// A parsed import.
    Import(ImportLine),
    /// Anything else swept into the region, kept verbatim.
    Other(String),
}

impl RegionLine {
    /// Sort key: the import path, or `""` for non-import lines.
    #[must_use]
    pub fn from_value(&self) -> &str {
        match self {
            Self::Import(import) => &import.from_path,
            Self::Other(_) => "",
        }
    }

    /// Current text of the line.
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Import(import) => &import.rendered,
            Self::Other(text) => text,
        }
    }
}

/// Output group of a region line. Groups are emitted in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportGroup {
    /// Comments and other non-import lines.
    Preamble,
    /// Paths under one of the configured framework prefixes.
    Framework,
    /// Bare package specifiers.
    Package,
    /// `./`, `../` and absolute paths.
    Relative,
}

impl ImportGroup {
    const ORDER: [Self; 4] = [Self::Preamble, Self::Framework, Self::Package, Self::Relative];

    /// Group a line belongs to under `style`.
    #[must_use]
    pub fn of(line: &RegionLine, style: &ImportStyle) -> Self {
        let RegionLine::Import(import) = line else {
            return Self::Preamble;
        };
        let path = import.from_path.as_str();
        if path.starts_with('.') || path.starts_with('/') {
            Self::Relative
        } else if style
            .framework_prefixes
            .iter()
            .any(|prefix| path.starts_with(prefix.as_str()))
        {
            Self::Framework
        } else {
            Self::Package
        }
    }
}

/// Normalize every line of the region.
///
/// Blank lines are dropped; import statements are reformatted; everything else
/// keeps its text minus trailing whitespace.
#[must_use]
pub fn clean_lines(lines: &[&str], style: &ImportStyle) -> Vec<RegionLine> {
    lines
        .iter()
        .filter(|line| !line.trim().is_empty())
        .map(|line| match ImportLine::parse(line, style) {
            Some(import) => RegionLine::Import(import),
            None => RegionLine::Other(line.trim_end().to_string()),
        })
        .collect()
}

/// Character width of the longest aligned import clause.
#[must_use]
pub fn longest_module_name(lines: &[RegionLine]) -> usize {
    lines
        .iter()
        .filter_map(|line| match line {
            RegionLine::Import(import) if import.aligned => Some(import.clause.chars().count()),
            _ => None,
        })
        .max()
        .unwrap_or(0)
}

/// Re-render aligned imports so their `from` keywords line up at `width`.
pub fn indent_lines(lines: &mut [RegionLine], width: usize) {
    for line in lines.iter_mut() {
        if let RegionLine::Import(import) = line
            && import.aligned
        {
            import.rendered = import.render(width);
        }
    }
}

/// Stable sort by from value.
pub fn sort_by_from_value(lines: &mut [RegionLine]) {
    lines.sort_by(|a, b| a.from_value().cmp(b.from_value()));
}

/// Partition into groups and flatten, inserting separators between groups.
#[must_use]
pub fn classify_lines(lines: &[RegionLine], style: &ImportStyle) -> Vec<String> {
    let mut out = Vec::with_capacity(lines.len() + ImportGroup::ORDER.len());
    for group in ImportGroup::ORDER {
        let members: Vec<&str> = lines
            .iter()
            .filter(|line| ImportGroup::of(line, style) == group)
            .map(RegionLine::text)
            .collect();
        if members.is_empty() {
            continue;
        }
        if style.separate_groups && !out.is_empty() {
            out.push(String::new());
        }
        out.extend(members.into_iter().map(str::to_string));
    }
    out
}

fn normalize_clause(raw: &str) -> String {
    let collapsed = raw.split_whitespace().collect::<Vec<_>>().join(" ");

    if let (Some(open), Some(close)) = (collapsed.find('{'), collapsed.rfind('}')) {
        if open < close {
            let names = collapsed[open + 1..close]
                .split(',')
                .map(str::trim)
                .filter(|name| !name.is_empty())
                .collect::<Vec<_>>()
                .join(", ");
            let braces = if names.is_empty() {
                "{}".to_string()
            } else {
                format!("{{ {names} }}")
            };
            let prefix = collapsed[..open].trim_end();
            let suffix = collapsed[close + 1..].trim_start();
            let mut out = String::new();
            if !prefix.is_empty() {
                out.push_str(prefix);
                out.push(' ');
            }
            out.push_str(&braces);
            if !suffix.is_empty() {
                out.push(' ');
                out.push_str(suffix);
            }
            return out;
        }
    }

    if let Some(caps) = NAMESPACE_RE.captures(&collapsed) {
        if let Some(name) = caps.name("name") {
            return format!("* as {}", name.as_str());
        }
    }

    collapsed
}
