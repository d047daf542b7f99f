//! # mcfs Lexer
//!
//! Tokenizes mcfs command scripts into a stream of tokens, each carrying the
//! source span it came from.
//!
//! Scanning is all-or-nothing: [`scan`] returns either every token up to and
//! including [`TokenKind::EndOfStream`], or the first [`LexError`].
//!
//! ## Example
//!
//! ```
//! use mcfs_lexer::{scan, TokenKind};
//!
//! let tokens = scan("<stdin>", "at @a /say hi").unwrap();
//! assert_eq!(tokens.len(), 4);
//! assert_eq!(tokens[1].kind, TokenKind::Selector("@a".into()));
//!
//! let err = scan("<stdin>", "@x").unwrap_err();
//! println!("{}", err.render());
//! ```

mod diagnostic;
mod error;
pub mod json;
mod lexer;
mod position;
mod token;

pub use diagnostic::render_arrows;
pub use error::LexError;
pub use lexer::Lexer;
pub use position::{Position, SourceFile, Span};
pub use token::{Keyword, Token, TokenKind, KEYWORDS, SELECTOR_KINDS};

/// Tokenize `source` into a vector of tokens. `filename` is only used in
/// diagnostics.
pub fn scan(filename: &str, source: &str) -> Result<Vec<Token>, LexError> {
    let result: Result<Vec<Token>, LexError> = Lexer::new(filename, source).collect();

    match &result {
        Ok(tokens) => tracing::debug!(filename, tokens = tokens.len(), "scan complete"),
        Err(err) => tracing::debug!(filename, category = err.category(), "scan failed"),
    }

    result
}
