//! Tokenizing source text into classified spans.
//!
//! A [`Lexer`] classifies one line at a time and threads a small [`LineState`] across lines so
//! block comments and multi-line strings survive line breaks. [`LexerRegistry`] selects a lexer
//! from a language hint or from the text itself.

pub mod generic;
pub mod json;
pub mod languages;
pub mod lexer;
pub mod registry;
pub mod token;

pub use generic::{Anchor, GenericLexer, GenericLexerConfig, Signature, StringDelim};
pub use json::JsonLexer;
pub use lexer::{Lexer, PlainTextLexer};
pub use registry::LexerRegistry;
pub use token::{LineSpan, LineState, Token, TokenClass};
