//! Constructor regeneration.
//!
//! Turns a raw parameter list and body back into a constructor declaration,
//! promoting access-modified parameters into `this.x = x;` assignments.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

use crate::types::ConstructorStyle;

/// Modifiers that turn a constructor parameter into a class property.
pub const PROPERTY_MODIFIERS: [&str; 5] = ["public", "private", "protected", "readonly", "override"];

static ASSIGNMENT_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^this\.(?P<field>[A-Za-z_$][\w$]*)\s*=\s*(?P<value>[A-Za-z_$][\w$]*)\s*;?$")
        .unwrap_or_else(|err| panic!("invalid ASSIGNMENT_RE regex: {err}"))
});

/// One declared constructor parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// `@Decorator` tokens, in source order.
    pub decorators: Vec<String>,
    /// Access and readonly modifiers, in source order.
    pub modifiers: Vec<String>,
    /// Declared name, including any `...` or `?`.
    pub name: String,
    /// Type annotation after `:`.
    pub annotation: Option<String>,
    /// Default value after `=`.
    pub default: Option<String>,
}

impl Parameter {
    /// Parse a single parameter declaration. Blank input yields `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }

        let (decl, default) = match find_top_level(raw, '=').into_iter().next() {
            Some(idx) => (&raw[..idx], Some(collapse(&raw[idx + 1..]))),
            None => (raw, None),
        };
        let (binding, annotation) = match find_top_level(decl, ':').into_iter().next() {
            Some(idx) => (&decl[..idx], Some(collapse(&decl[idx + 1..]))),
            None => (decl, None),
        };

        let mut decorators = Vec::new();
        let mut modifiers = Vec::new();
        let mut rest = Vec::new();
        for token in binding.split_whitespace() {
            if token.starts_with('@') {
                decorators.push(token.to_string());
            } else if PROPERTY_MODIFIERS.contains(&token) {
                modifiers.push(token.to_string());
            } else {
                rest.push(token);
            }
        }
        let name = rest.join(" ");
        if name.is_empty() {
            return None;
        }

        Some(Self {
            decorators,
            modifiers,
            name,
            annotation: annotation.filter(|a| !a.is_empty()),
            default: default.filter(|d| !d.is_empty()),
        })
    }

    /// Whether the parameter declares a class property.
    #[must_use]
    pub fn is_promoted(&self) -> bool {
        !self.modifiers.is_empty()
    }

    /// Identifier the parameter binds, without `...` or `?`.
    #[must_use]
    pub fn binding(&self) -> &str {
        self.name.trim_start_matches("...").trim_end_matches('?')
    }

    /// Render with single spacing.
    #[must_use]
    pub fn render(&self) -> String {
        let mut parts: Vec<&str> = self.decorators.iter().map(String::as_str).collect();
        parts.extend(self.modifiers.iter().map(String::as_str));
        parts.push(&self.name);
        let mut out = parts.join(" ");
        if let Some(annotation) = &self.annotation {
            out.push_str(": ");
            out.push_str(annotation);
        }
        if let Some(default) = &self.default {
            out.push_str(" = ");
            out.push_str(default);
        }
        out
    }
}

/// Split a raw parameter list on top-level commas.
#[must_use]
pub fn split_parameters(raw: &str) -> Vec<&str> {
    let mut out = Vec::new();
    let mut start = 0;
    for idx in find_top_level(raw, ',') {
        out.push(&raw[start..idx]);
        start = idx + 1;
    }
    out.push(&raw[start..]);
    out
}

/// Regenerate a constructor from its parts.
///
/// `head` is the text of the declaration line before the `constructor` keyword;
/// its leading whitespace is the base indentation.
#[must_use]
pub fn create_constructor_parameters(
    head: &str,
    raw_parameters: &str,
    raw_body: &str,
    style: &ConstructorStyle,
) -> String {
    let params: Vec<Parameter> = split_parameters(raw_parameters)
        .into_iter()
        .filter_map(Parameter::parse)
        .collect();
    let bindings: HashSet<&str> = params.iter().map(Parameter::binding).collect();

    let mut assigned = HashSet::new();
    let mut body = body_lines(raw_body);
    body.retain(|line| match manual_assignment(line) {
        Some(name) if bindings.contains(name.as_str()) => {
            assigned.insert(name);
            false
        }
        _ => true,
    });
    trim_blank_edges(&mut body);

    let assignments: Vec<String> = params
        .iter()
        .filter(|p| p.is_promoted() || assigned.contains(p.binding()))
        .map(|p| format!("this.{0} = {0};", p.binding()))
        .collect();

    let base = &head[..head.len() - head.trim_start().len()];
    let inner = format!("{base}{}", style.indent_unit);

    let mut out = String::new();
    out.push_str(head);
    out.push_str("constructor(");
    if let [only] = params.as_slice() {
        out.push_str(&only.render());
    } else if !params.is_empty() {
        out.push('\n');
        let rendered: Vec<String> = params
            .iter()
            .map(|p| format!("{inner}{}", p.render()))
            .collect();
        out.push_str(&rendered.join(",\n"));
        out.push('\n');
        out.push_str(base);
    }
    out.push(')');

    if style.brace_on_new_line {
        out.push('\n');
        out.push_str(base);
        out.push('{');
    } else {
        out.push_str(" {");
    }
    if assignments.is_empty() && body.is_empty() {
        out.push('}');
        return out;
    }
    out.push('\n');

    // `this` is unusable before `super(...)`, so assignments follow the call.
    let lead_len = if assignments.is_empty() {
        0
    } else {
        super_call_len(&body)
    };
    let mut rest = body.split_off(lead_len);
    trim_blank_edges(&mut rest);

    push_lines(&mut out, &inner, &body);
    push_lines(&mut out, &inner, &assignments);
    if !assignments.is_empty() && !rest.is_empty() {
        out.push('\n');
    }
    push_lines(&mut out, &inner, &rest);
    out.push_str(base);
    out.push('}');
    out
}

fn push_lines(out: &mut String, indent: &str, lines: &[String]) {
    for line in lines {
        if !line.is_empty() {
            out.push_str(indent);
            out.push_str(line);
        }
        out.push('\n');
    }
}

/// Number of leading body lines taken by a `super(...)` call.
///
/// The call ends on the line where its parentheses balance.
fn super_call_len(body: &[String]) -> usize {
    let Some(first) = body.first() else {
        return 0;
    };
    if !(first.starts_with("super(") || first.starts_with("super (")) {
        return 0;
    }
    let (mut opens, mut closes) = (0, 0);
    for (idx, line) in body.iter().enumerate() {
        opens += line.matches('(').count();
        closes += line.matches(')').count();
        if closes >= opens {
            return idx + 1;
        }
    }
    body.len()
}

/// Body lines with common indentation removed.
///
/// The segments sharing a line with the braces are trimmed; leading and trailing
/// blank lines are dropped.
fn body_lines(raw: &str) -> Vec<String> {
    let segments: Vec<&str> = raw.split('\n').collect();
    let last = segments.len() - 1;

    let indent = segments
        .iter()
        .enumerate()
        .filter(|(idx, line)| *idx != 0 && *idx != last && !line.trim().is_empty())
        .map(|(_, line)| line.len() - line.trim_start_matches([' ', '\t']).len())
        .min()
        .unwrap_or(0);

    let mut lines: Vec<String> = segments
        .iter()
        .enumerate()
        .map(|(idx, line)| {
            if idx == 0 || idx == last || line.trim().is_empty() {
                line.trim().to_string()
            } else {
                line[indent..].trim_end().to_string()
            }
        })
        .collect();

    trim_blank_edges(&mut lines);
    lines
}

fn trim_blank_edges(lines: &mut Vec<String>) {
    while lines.last().is_some_and(String::is_empty) {
        lines.pop();
    }
    let leading = lines.iter().take_while(|line| line.is_empty()).count();
    lines.drain(..leading);
}

/// `this.x = x;` at the start of a line, returning `x`.
fn manual_assignment(line: &str) -> Option<String> {
    let caps = ASSIGNMENT_RE.captures(line)?;
    let field = caps.name("field")?.as_str();
    let value = caps.name("value")?.as_str();
    (field == value).then(|| field.to_string())
}

/// Byte offsets of `target` outside brackets and string literals.
fn find_top_level(s: &str, target: char) -> Vec<usize> {
    let mut hits = Vec::new();
    let mut depth = 0usize;
    let mut quote: Option<char> = None;
    let mut prev = '\0';
    let mut chars = s.char_indices().peekable();

    while let Some((idx, ch)) = chars.next() {
        if let Some(q) = quote {
            if ch == q && prev != '\\' {
                quote = None;
            }
        } else {
            match ch {
                '\'' | '"' | '`' => quote = Some(ch),
                '(' | '[' | '{' | '<' => depth += 1,
                '>' if prev == '=' => {}
                ')' | ']' | '}' | '>' => depth = depth.saturating_sub(1),
                _ if ch == target && depth == 0 => {
                    let arrow = ch == '=' && chars.peek().is_some_and(|&(_, next)| next == '>');
                    if !arrow {
                        hits.push(idx);
                    }
                }
                _ => {}
            }
        }
        prev = ch;
    }
    hits
}

fn collapse(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}
