//! Lexer error definitions.

use crate::diagnostic::render_arrows;
use crate::position::Span;
use thiserror::Error;

/// A lexer error. The first one encountered ends the scan.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum LexError {
    #[error("Illegal Character: '{ch}'")]
    IllegalChar { ch: char, span: Span },

    #[error("Invalid selector: '{text}'")]
    InvalidSelector { text: String, span: Span },

    #[error("Invalid Syntax: Unclosed comment")]
    UnclosedComment { span: Span },

    #[error("Invalid JSON: Expected JSON value")]
    EmptyJson { span: Span },

    #[error("Invalid JSON: Expected ')'")]
    UnclosedJson { span: Span },

    #[error("Malformed JSON content: {message}")]
    MalformedJson { message: String, span: Span },
}

impl LexError {
    /// Get the span of this error.
    pub fn span(&self) -> &Span {
        match self {
            LexError::IllegalChar { span, .. } => span,
            LexError::InvalidSelector { span, .. } => span,
            LexError::UnclosedComment { span } => span,
            LexError::EmptyJson { span } => span,
            LexError::UnclosedJson { span } => span,
            LexError::MalformedJson { span, .. } => span,
        }
    }

    /// The category name shown before the colon.
    pub fn category(&self) -> &'static str {
        match self {
            LexError::IllegalChar { .. } => "Illegal Character",
            LexError::InvalidSelector { .. } => "Invalid selector",
            LexError::UnclosedComment { .. } => "Invalid Syntax",
            LexError::EmptyJson { .. } | LexError::UnclosedJson { .. } => "Invalid JSON",
            LexError::MalformedJson { .. } => "Malformed JSON content",
        }
    }

    pub fn detail(&self) -> String {
        match self {
            LexError::IllegalChar { ch, .. } => format!("'{ch}'"),
            LexError::InvalidSelector { text, .. } => format!("'{text}'"),
            LexError::UnclosedComment { .. } => "Unclosed comment".to_string(),
            LexError::EmptyJson { .. } => "Expected JSON value".to_string(),
            LexError::UnclosedJson { .. } => "Expected ')'".to_string(),
            LexError::MalformedJson { message, .. } => message.clone(),
        }
    }

    /// Render the full diagnostic: message, file and line, and the offending
    /// source underlined.
    pub fn render(&self) -> String {
        let span = self.span();
        format!(
            "{}\nFile {}, line {}\n\n{}",
            self,
            span.start.filename(),
            span.start.line() + 1,
            render_arrows(span.start.source(), &span.start, &span.end)
        )
    }
}
