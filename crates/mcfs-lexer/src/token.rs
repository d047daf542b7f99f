//! Token definitions for mcfs.

use crate::position::Span;
use smol_str::SmolStr;
use std::fmt;

/// Reserved words, in declaration order.
pub const KEYWORDS: [&str; 8] = ["define", "as", "at", "get", "set", "score", "chat", "end"];

/// Characters allowed after `@` in a selector.
pub const SELECTOR_KINDS: [char; 5] = ['e', 'a', 'p', 'r', 's'];

/// A token with its kind and span.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.kind.fmt(f)
    }
}

/// Token kinds for mcfs. The payload, if any, is the token's value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", content = "value"))]
pub enum TokenKind {
    // ========================================================================
    // Literals
    // ========================================================================
    Number(f64),
    /// `/...` passthrough command, escapes already applied
    RawText(SmolStr),
    /// `@p`, `@e`, ...
    Selector(SmolStr),
    Identifier(SmolStr),
    Keyword(Keyword),
    /// `(...)`, decoded after normalization
    JsonLiteral(serde_json::Value),

    // ========================================================================
    // Punctuation
    // ========================================================================
    LeftBracket,
    RightBracket,
    Equals,
    Dot,

    Newline,
    EndOfStream,
}

impl TokenKind {
    /// The upper-case tag used when printing tokens.
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Number(_) => "NUMBER",
            TokenKind::RawText(_) => "RAW_TEXT",
            TokenKind::Selector(_) => "SELECTOR",
            TokenKind::Identifier(_) => "IDENTIFIER",
            TokenKind::Keyword(_) => "KEYWORD",
            TokenKind::JsonLiteral(_) => "JSON_LITERAL",
            TokenKind::LeftBracket => "LEFT_BRACKET",
            TokenKind::RightBracket => "RIGHT_BRACKET",
            TokenKind::Equals => "EQUALS",
            TokenKind::Dot => "DOT",
            TokenKind::Newline => "NEWLINE",
            TokenKind::EndOfStream => "END_OF_STREAM",
        }
    }

    /// Check if this token carries a value.
    pub fn has_value(&self) -> bool {
        matches!(
            self,
            TokenKind::Number(_)
                | TokenKind::RawText(_)
                | TokenKind::Selector(_)
                | TokenKind::Identifier(_)
                | TokenKind::Keyword(_)
                | TokenKind::JsonLiteral(_)
        )
    }

    /// The string value of text-carrying tokens.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TokenKind::RawText(s) | TokenKind::Selector(s) | TokenKind::Identifier(s) => {
                Some(s.as_str())
            }
            TokenKind::Keyword(kw) => Some(kw.as_str()),
            _ => None,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name();
        match self {
            TokenKind::Number(n) => write!(f, "{name}:{n}"),
            TokenKind::JsonLiteral(value) => write!(f, "{name}:{value}"),
            _ => match self.as_str() {
                Some(s) => write!(f, "{name}:{s}"),
                None => f.write_str(name),
            },
        }
    }
}

/// A reserved word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Keyword {
    Define,
    As,
    At,
    Get,
    Set,
    Score,
    Chat,
    End,
}

impl Keyword {
    /// Look up a reserved word. Matching is exact and case-sensitive.
    pub fn lookup(word: &str) -> Option<Keyword> {
        let kw = match word {
            "define" => Keyword::Define,
            "as" => Keyword::As,
            "at" => Keyword::At,
            "get" => Keyword::Get,
            "set" => Keyword::Set,
            "score" => Keyword::Score,
            "chat" => Keyword::Chat,
            "end" => Keyword::End,
            _ => return None,
        };
        Some(kw)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Keyword::Define => "define",
            Keyword::As => "as",
            Keyword::At => "at",
            Keyword::Get => "get",
            Keyword::Set => "set",
            Keyword::Score => "score",
            Keyword::Chat => "chat",
            Keyword::End => "end",
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_table_round_trips() {
        for word in KEYWORDS {
            let kw = Keyword::lookup(word).unwrap();
            assert_eq!(kw.as_str(), word);
        }
        assert_eq!(Keyword::lookup("Define"), None);
        assert_eq!(Keyword::lookup("scoreboard"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(TokenKind::Number(3.15).to_string(), "NUMBER:3.15");
        assert_eq!(TokenKind::Number(5.0).to_string(), "NUMBER:5");
        assert_eq!(
            TokenKind::Keyword(Keyword::Define).to_string(),
            "KEYWORD:define"
        );
        assert_eq!(
            TokenKind::Selector(SmolStr::from("@a")).to_string(),
            "SELECTOR:@a"
        );
        assert_eq!(
            TokenKind::JsonLiteral(serde_json::json!({"text": "hi"})).to_string(),
            r#"JSON_LITERAL:{"text":"hi"}"#
        );
        assert_eq!(TokenKind::LeftBracket.to_string(), "LEFT_BRACKET");
        assert_eq!(TokenKind::EndOfStream.to_string(), "END_OF_STREAM");
    }

    #[test]
    fn test_values() {
        assert!(TokenKind::Number(1.0).has_value());
        assert!(!TokenKind::Dot.has_value());
        assert_eq!(TokenKind::RawText(SmolStr::from("say hi")).as_str(), Some("say hi"));
        assert_eq!(TokenKind::Keyword(Keyword::Chat).as_str(), Some("chat"));
        assert_eq!(TokenKind::Number(1.0).as_str(), None);
    }
}
