//! High-level lexer interface.

use crate::error::LexError;
use crate::json;
use crate::position::{Position, SourceFile, Span};
use crate::token::{Keyword, Token, TokenKind, SELECTOR_KINDS};
use smol_str::SmolStr;
use std::sync::Arc;

/// A lexer for mcfs source code.
///
/// Yields tokens one at a time, ending with [`TokenKind::EndOfStream`].
/// The first error ends the stream: after it, `next` returns `None`.
pub struct Lexer {
    pos: Position,
    current: Option<char>,
    peeked: Option<Result<Token, LexError>>,
    /// Set once EOF or an error has been emitted
    done: bool,
}

impl Lexer {
    /// Create a new lexer. `filename` is only used in diagnostics.
    pub fn new(filename: impl Into<SmolStr>, source: impl Into<String>) -> Self {
        Self::from_file(Arc::new(SourceFile::new(filename, source)))
    }

    pub fn from_file(file: Arc<SourceFile>) -> Self {
        let pos = Position::new(file);
        let current = pos.source().chars().next();
        Self {
            pos,
            current,
            peeked: None,
            done: false,
        }
    }

    /// Peek at the next token without consuming it.
    pub fn peek(&mut self) -> Option<&Result<Token, LexError>> {
        if self.peeked.is_none() {
            self.peeked = self.next_inner();
        }
        self.peeked.as_ref()
    }

    /// Get the source text.
    pub fn source(&self) -> &str {
        self.pos.source()
    }

    /// Get the current position of the cursor.
    pub fn position(&self) -> &Position {
        &self.pos
    }

    fn advance(&mut self) {
        self.pos.advance(self.current);
        self.current = self
            .pos
            .source()
            .get(self.pos.offset()..)
            .and_then(|rest| rest.chars().next());
    }

    fn span_from(&self, start: Position) -> Span {
        Span::new(start, self.pos.clone())
    }

    fn next_inner(&mut self) -> Option<Result<Token, LexError>> {
        if self.done {
            return None;
        }

        let result = self.scan_token();
        if matches!(&result, Err(_) | Ok(Token { kind: TokenKind::EndOfStream, .. })) {
            self.done = true;
        }
        Some(result)
    }

    fn scan_token(&mut self) -> Result<Token, LexError> {
        loop {
            let Some(c) = self.current else {
                return Ok(Token::new(
                    TokenKind::EndOfStream,
                    Span::empty(self.pos.clone()),
                ));
            };

            let token = match c {
                ' ' | '\t' => {
                    self.advance();
                    continue;
                }
                '#' => {
                    self.skip_comment()?;
                    continue;
                }
                '\n' => self.single(TokenKind::Newline),
                '=' => self.single(TokenKind::Equals),
                '[' => self.single(TokenKind::LeftBracket),
                ']' => self.single(TokenKind::RightBracket),
                '.' => self.single(TokenKind::Dot),
                '/' => self.raw_text(),
                '@' => self.selector()?,
                '(' => self.json_literal()?,
                c if c.is_ascii_digit() => self.number(),
                c if c.is_ascii_alphabetic() => self.identifier(),
                ch => {
                    let start = self.pos.clone();
                    self.advance();
                    return Err(LexError::IllegalChar {
                        ch,
                        span: self.span_from(start),
                    });
                }
            };
            return Ok(token);
        }
    }

    fn single(&mut self, kind: TokenKind) -> Token {
        let start = self.pos.clone();
        self.advance();
        Token::new(kind, self.span_from(start))
    }

    fn number(&mut self) -> Token {
        let start = self.pos.clone();
        let mut text = String::new();
        let mut seen_dot = false;

        while let Some(c) = self.current {
            if c == '.' {
                if seen_dot {
                    break;
                }
                seen_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            text.push(c);
            self.advance();
        }

        // Always a digit followed by digits and at most one dot, which
        // `f64::from_str` accepts (including a trailing dot).
        let value = text.parse().unwrap_or_default();
        Token::new(TokenKind::Number(value), self.span_from(start))
    }

    fn identifier(&mut self) -> Token {
        let start = self.pos.clone();
        let mut text = String::new();

        while let Some(c) = self.current.filter(char::is_ascii_alphanumeric) {
            text.push(c);
            self.advance();
        }

        let kind = match Keyword::lookup(&text) {
            Some(kw) => TokenKind::Keyword(kw),
            None => TokenKind::Identifier(SmolStr::from(text)),
        };
        Token::new(kind, self.span_from(start))
    }

    fn selector(&mut self) -> Result<Token, LexError> {
        let start = self.pos.clone();
        self.advance();

        let mut text = String::from('@');
        let kind = self.current;
        if let Some(c) = kind {
            text.push(c);
            self.advance();
        }

        let span = self.span_from(start);
        match kind {
            Some(c) if SELECTOR_KINDS.contains(&c) => {
                Ok(Token::new(TokenKind::Selector(SmolStr::from(text)), span))
            }
            _ => Err(LexError::InvalidSelector { text, span }),
        }
    }

    fn json_literal(&mut self) -> Result<Token, LexError> {
        let start = self.pos.clone();
        self.advance();

        let body_start = self.pos.offset();
        while let Some(c) = self.current {
            if c == ')' {
                break;
            }
            self.advance();
        }
        if self.current.is_none() {
            return Err(LexError::UnclosedJson {
                span: self.span_from(start),
            });
        }
        let body_end = self.pos.offset();
        self.advance();

        let span = self.span_from(start);
        let file = Arc::clone(self.pos.file());
        let body = &file.text()[body_start..body_end];
        if body.trim().is_empty() {
            return Err(LexError::EmptyJson { span });
        }

        match json::parse(body) {
            Ok(value) => Ok(Token::new(TokenKind::JsonLiteral(value), span)),
            Err(err) => Err(LexError::MalformedJson {
                message: err.to_string(),
                span,
            }),
        }
    }

    fn raw_text(&mut self) -> Token {
        let start = self.pos.clone();
        self.advance();

        let mut text = String::new();
        let mut escaped = false;
        while let Some(c) = self.current {
            if escaped {
                text.push(c);
                escaped = false;
            } else if c == '\\' {
                escaped = true;
            } else if c == '\n' {
                break;
            } else {
                text.push(c);
            }
            self.advance();
        }

        Token::new(TokenKind::RawText(SmolStr::from(text)), self.span_from(start))
    }

    fn skip_comment(&mut self) -> Result<(), LexError> {
        let start = self.pos.clone();
        self.advance();

        loop {
            match self.current {
                Some('#') => break,
                Some(_) => self.advance(),
                None => {
                    return Err(LexError::UnclosedComment {
                        span: self.span_from(start),
                    })
                }
            }
        }
        self.advance();
        Ok(())
    }
}

impl Iterator for Lexer {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(peeked) = self.peeked.take() {
            return Some(peeked);
        }
        self.next_inner()
    }
}

impl std::iter::FusedIterator for Lexer {}
