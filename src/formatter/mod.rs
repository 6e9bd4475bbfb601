//! Canonical re-indentation of already-serialized documents
//!
//! The XML formatter works directly on text without building a tree. It
//! first strips all whitespace sitting between tags, which is what makes
//! repeated formatting stable, then re-indents one tag or text run per
//! line. It does not validate: malformed input produces best-effort
//! indentation rather than an error.

use crate::error::{JsonParseError, JsonParseResult};
use crate::parser::parse_json;

const INDENT: &str = "  ";

/// Re-indent an XML document with two spaces per nesting level.
///
/// Idempotent: formatting already-formatted output changes nothing.
pub fn format_xml(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut depth: usize = 0;

    for line in split_into_lines(source).lines() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        if is_inline_element(line) {
            push_line(&mut out, depth, line);
        } else if is_closing_tag(line) {
            depth = depth.saturating_sub(1);
            push_line(&mut out, depth, line);
        } else if is_opening_tag(line) {
            push_line(&mut out, depth, line);
            depth += 1;
        } else {
            // Self-closing tag, declaration, or bare text
            push_line(&mut out, depth, line);
        }
    }

    out.trim().to_string()
}

/// Pretty-print a JSON document with two-space indentation.
pub fn format_json(source: &str) -> JsonParseResult<String> {
    let value = parse_json(source)?;
    serde_json::to_string_pretty(&value).map_err(|e| JsonParseError::new(e.to_string(), None))
}

/// Normalize line endings, drop whitespace between adjacent tags, and put
/// every tag boundary on its own line.
fn split_into_lines(source: &str) -> String {
    let unix = source.trim().replace("\r\n", "\n");
    collapse_between_tags(&unix).replace("><", ">\n<")
}

/// Remove whitespace runs that sit strictly between a `>` and the next `<`.
/// This undoes any previous indentation before reformatting.
fn collapse_between_tags(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut buffered = String::new();
    let mut after_tag_close = false;

    for ch in source.chars() {
        if after_tag_close && ch.is_whitespace() {
            buffered.push(ch);
            continue;
        }
        if !buffered.is_empty() {
            if ch != '<' {
                // The whitespace was real text content, keep it
                out.push_str(&buffered);
            }
            buffered.clear();
        }
        out.push(ch);
        after_tag_close = ch == '>';
    }

    out
}

/// A complete element on one line, e.g. `<name>text</name>`
fn is_inline_element(line: &str) -> bool {
    if !line.ends_with('>') {
        return false;
    }
    match line.rfind("</") {
        Some(pos) if pos > 0 => {
            let tag = &line[pos + 2..line.len() - 1];
            starts_with_name_char(tag) && !tag.contains('>')
        }
        _ => false,
    }
}

fn is_closing_tag(line: &str) -> bool {
    line.starts_with("</") && starts_with_name_char(&line[2..])
}

/// An opening tag that is not self-closing; trailing text on the same line
/// still counts as opening.
fn is_opening_tag(line: &str) -> bool {
    if !line.starts_with('<') || !starts_with_name_char(&line[1..]) {
        return false;
    }
    match line.find('>') {
        Some(pos) => line.as_bytes()[pos - 1] != b'/',
        None => false,
    }
}

fn starts_with_name_char(s: &str) -> bool {
    s.chars()
        .next()
        .is_some_and(|c| c.is_alphanumeric() || c == '_')
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    for _ in 0..depth {
        out.push_str(INDENT);
    }
    out.push_str(line);
    out.push('\n');
}
