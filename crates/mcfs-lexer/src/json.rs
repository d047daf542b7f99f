//! Embedded JSON literals.
//!
//! The text between `(` and `)` is written in a loose JSON dialect: object
//! keys and plain string values may be left bare or single-quoted. Decoding
//! is a two-step pipeline: [`normalize`] rewrites the text into strict JSON,
//! then [`parse`] hands it to `serde_json`.

use regex::{Captures, Regex};
use std::borrow::Cow;

lazy_static::lazy_static! {
    // Alternatives are tried left to right, so strings and numbers are
    // consumed whole before a bare word can match inside them.
    static ref JSON_ATOM: Regex = Regex::new(
        r#""(?:[^"\\]|\\.)*"|'(?:[^'\\]|\\.)*'|-?[0-9]+(?:\.[0-9]+)?(?:[eE][+-]?[0-9]+)?|[A-Za-z_][A-Za-z0-9_]*"#
    )
    .expect("JSON atom pattern compiles");
}

/// Rewrite loosely quoted JSON into strict JSON.
///
/// Double-quoted strings and numbers are kept as they are, single-quoted
/// strings become double-quoted, and bare words other than `true`, `false`
/// and `null` are wrapped in double quotes. This applies to object keys and
/// values alike.
pub fn normalize(text: &str) -> Cow<'_, str> {
    JSON_ATOM.replace_all(text, |caps: &Captures| {
        let atom = &caps[0];
        if atom.starts_with(|c: char| c == '"' || c == '-' || c.is_ascii_digit()) {
            atom.to_string()
        } else if let Some(inner) = atom.strip_prefix('\'') {
            requote(&inner[..inner.len() - 1])
        } else if matches!(atom, "true" | "false" | "null") {
            atom.to_string()
        } else {
            format!("\"{atom}\"")
        }
    })
}

/// Turn the body of a single-quoted string into a double-quoted one.
fn requote(body: &str) -> String {
    let mut out = String::with_capacity(body.len() + 2);
    out.push('"');
    let mut chars = body.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => match chars.next() {
                Some('\'') => out.push('\''),
                Some(next) => {
                    out.push('\\');
                    out.push(next);
                }
                None => out.push_str("\\\\"),
            },
            '"' => out.push_str("\\\""),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Normalize `text` and decode it.
pub fn parse(text: &str) -> Result<serde_json::Value, serde_json::Error> {
    serde_json::from_str(&normalize(text))
}
