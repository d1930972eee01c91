//! Lexer for the Graphviz [DOT language](https://graphviz.org/doc/info/lang.html).
//!
//! [`Lexer`] turns source text into a stream of [`Token`]s: punctuation,
//! edge operators, case-insensitive keywords and IDs (unquoted strings,
//! numerals, double-quoted strings and HTML strings). Comments are skipped.
//! Literals keep their source text verbatim, quotes included.

pub mod lexer;
pub mod token;

pub use lexer::{LexError, LexErrorKind, Lexer};
pub use token::{Token, TokenKind};
