//! Mustache-style template rendering.
//!
//! Supports the subset of mustache that scheme templates use:
//!
//! - `{{name}}` - HTML-escaped variable
//! - `{{{name}}}` and `{{& name}}` - raw variable
//! - `{{#name}}...{{/name}}` - rendered once when `name` is present, non-empty and non-zero
//! - `{{^name}}...{{/name}}` - rendered when `name` is absent, empty or zero
//! - `{{! comment}}` - dropped
//!
//! Section and comment tags that sit alone on a line remove that line from
//! the output, as in standard mustache. Variables that name no key render
//! as the empty string and are reported in [`Rendered::unresolved`].

use std::collections::BTreeSet;
use std::path::Path;

use crate::error::{Result, SchemeError};

use super::data::TemplateDataSet;

/// Output of a render: the text plus the variable tags that had no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub text: String,
    /// Sorted, de-duplicated names of unresolved variable tags.
    pub unresolved: Vec<String>,
}

/// Read a template file and render it against `data`.
pub fn render(template_path: &Path, data: &TemplateDataSet) -> Result<Rendered> {
    let template = std::fs::read_to_string(template_path).map_err(|e| {
        SchemeError::TemplateNotFound {
            path: template_path.to_path_buf(),
            message: e.to_string(),
        }
    })?;
    render_str(&template, data)
}

/// Render an in-memory template against `data`.
pub fn render_str(template: &str, data: &TemplateDataSet) -> Result<Rendered> {
    let tokens = tokenize(template)?;
    let nodes = build_tree(tokens)?;

    let mut out = String::with_capacity(template.len());
    let mut unresolved = BTreeSet::new();
    render_nodes(&nodes, data, &mut out, &mut unresolved);

    Ok(Rendered {
        text: out,
        unresolved: unresolved.into_iter().collect(),
    })
}

#[derive(Debug, PartialEq)]
enum Token<'a> {
    Text(&'a str),
    Var { name: &'a str, escape: bool },
    Open { name: &'a str, inverted: bool, offset: usize },
    Close { name: &'a str, offset: usize },
}

#[derive(Debug)]
enum Node<'a> {
    Text(&'a str),
    Var { name: &'a str, escape: bool },
    Section { name: &'a str, inverted: bool, children: Vec<Node<'a>> },
}

fn syntax_error(offset: usize, message: impl Into<String>) -> SchemeError {
    SchemeError::TemplateSyntax {
        offset,
        message: message.into(),
    }
}

fn tokenize(template: &str) -> Result<Vec<Token<'_>>> {
    let mut tokens = Vec::new();
    let mut cursor = 0;

    while let Some(found) = template[cursor..].find("{{") {
        let start = cursor + found;
        let triple = template[start..].starts_with("{{{");
        let (inner_start, closer) = if triple { (start + 3, "}}}") } else { (start + 2, "}}") };

        let inner_len = template[inner_start..]
            .find(closer)
            .ok_or_else(|| syntax_error(start, "unclosed tag"))?;
        let inner = &template[inner_start..inner_start + inner_len];
        let end = inner_start + inner_len + closer.len();

        let (sigil, name) = if triple {
            ('&', inner.trim())
        } else {
            let trimmed = inner.trim_start();
            match trimmed.chars().next() {
                Some(c @ ('!' | '&' | '#' | '^' | '/' | '>' | '=')) => (c, trimmed[1..].trim()),
                _ => (' ', trimmed.trim()),
            }
        };

        if sigil != '!' && name.is_empty() {
            return Err(syntax_error(start, "empty tag name"));
        }

        let token = match sigil {
            '!' => None,
            '&' => Some(Token::Var { name, escape: false }),
            ' ' => Some(Token::Var { name, escape: true }),
            '#' | '^' => Some(Token::Open {
                name,
                inverted: sigil == '^',
                offset: start,
            }),
            '/' => Some(Token::Close { name, offset: start }),
            '>' => return Err(syntax_error(start, format!("partials are not supported: {{{{>{}}}}}", name))),
            _ => return Err(syntax_error(start, "delimiter changes are not supported")),
        };

        let is_block_tag = !matches!(token, Some(Token::Var { .. }));
        let (text_end, next) = match standalone_bounds(template, start, end) {
            Some((line_start, line_end)) if is_block_tag => (line_start, line_end),
            _ => (start, end),
        };

        if text_end > cursor {
            tokens.push(Token::Text(&template[cursor..text_end]));
        }
        if let Some(token) = token {
            tokens.push(token);
        }
        cursor = next;
    }

    if cursor < template.len() {
        tokens.push(Token::Text(&template[cursor..]));
    }
    Ok(tokens)
}

/// If the tag at `start..end` is the only thing on its line, return the
/// start of that line and the position just past its newline.
fn standalone_bounds(template: &str, start: usize, end: usize) -> Option<(usize, usize)> {
    let line_start = template[..start].rfind('\n').map_or(0, |i| i + 1);
    if !template[line_start..start].chars().all(|c| c == ' ' || c == '\t') {
        return None;
    }

    let rest = &template[end..];
    let (trailing, line_end) = match rest.find('\n') {
        Some(i) => (&rest[..i], end + i + 1),
        None => (rest, template.len()),
    };
    if !trailing.chars().all(|c| c == ' ' || c == '\t' || c == '\r') {
        return None;
    }

    Some((line_start, line_end))
}

fn build_tree(tokens: Vec<Token<'_>>) -> Result<Vec<Node<'_>>> {
    // Each open section keeps its name, inversion, offset and collected children
    let mut stack: Vec<(&str, bool, usize, Vec<Node<'_>>)> = Vec::new();
    let mut root = Vec::new();

    for token in tokens {
        let node = match token {
            Token::Text(text) => Node::Text(text),
            Token::Var { name, escape } => Node::Var { name, escape },
            Token::Open { name, inverted, offset } => {
                stack.push((name, inverted, offset, Vec::new()));
                continue;
            }
            Token::Close { name, offset } => {
                let (open, inverted, _, children) = stack
                    .pop()
                    .ok_or_else(|| syntax_error(offset, format!("unexpected closing tag {{{{/{}}}}}", name)))?;
                if open != name {
                    return Err(syntax_error(
                        offset,
                        format!("closing tag {{{{/{}}}}} does not match open section {:?}", name, open),
                    ));
                }
                Node::Section { name, inverted, children }
            }
        };

        match stack.last_mut() {
            Some((_, _, _, children)) => children.push(node),
            None => root.push(node),
        }
    }

    if let Some((name, _, offset, _)) = stack.pop() {
        return Err(syntax_error(offset, format!("unclosed section {:?}", name)));
    }
    Ok(root)
}

fn render_nodes(
    nodes: &[Node<'_>],
    data: &TemplateDataSet,
    out: &mut String,
    unresolved: &mut BTreeSet<String>,
) {
    for node in nodes {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Var { name, escape } => match data.get(name) {
                Some(value) if *escape => out.push_str(&escape_html(&value.to_string())),
                Some(value) => out.push_str(&value.to_string()),
                None => {
                    unresolved.insert(name.to_string());
                }
            },
            Node::Section { name, inverted, children } => {
                let truthy = data.get(name).is_some_and(|v| v.is_truthy());
                if truthy != *inverted {
                    render_nodes(children, data, out, unresolved);
                }
            }
        }
    }
}

fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
