//! DOT lexer.
//!
//! See <https://graphviz.org/doc/info/lang.html> for the grammar of IDs,
//! keywords and edge operators.

use thiserror::Error;

use crate::token::{Token, TokenKind};

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum LexErrorKind {
    #[error("invalid token")]
    InvalidToken,
    #[error("`.` needs to be either double-quoted to be a quoted identifier or prefixed or followed by a digit to be a numeral identifier")]
    LonePeriod,
    #[error("`-` needs to be either double-quoted to be a quoted identifier or followed by an optional `.` and at least one digit to be a numeral identifier")]
    LoneMinus,
    #[error("unterminated quoted string")]
    UnterminatedQuotedString,
    #[error("unterminated HTML string")]
    UnterminatedHtmlString,
    #[error("unterminated comment")]
    UnterminatedComment,
}

/// Lexical error with the 1-based position of the offending character.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("{line}:{column}: {kind}")]
pub struct LexError {
    pub line: usize,
    /// Counted in characters, not bytes.
    pub column: usize,
    pub character: char,
    pub kind: LexErrorKind,
}

/// Splits DOT source into [`Token`]s.
///
/// Errors are yielded in place of the token that could not be read; lexing
/// continues after the offending character.
pub struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    column: usize,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            column: 1,
        }
    }

    fn next_token(&mut self) -> Option<Result<Token, LexError>> {
        if let Err(e) = self.skip_trivia() {
            return Some(Err(e));
        }

        let c = self.peek()?;
        let (line, column) = (self.line, self.column);

        if let Some(kind) = TokenKind::from_punctuation(c) {
            self.advance();
            return Some(Ok(Token::new(kind, c)));
        }

        let result = match c {
            '-' if matches!(self.peek_second(), Some('>') | Some('-')) => Ok(self.lex_edge()),
            '"' => self.lex_quoted_string(),
            '<' => self.lex_html_string(),
            c if is_start_of_numeral(c) => self.lex_numeral(),
            c if is_start_of_unquoted_string(c) => Ok(self.lex_unquoted_string()),
            c => {
                self.advance();
                Err(LexError {
                    line,
                    column,
                    character: c,
                    kind: LexErrorKind::InvalidToken,
                })
            }
        };
        Some(result)
    }

    fn lex_edge(&mut self) -> Token {
        self.advance();
        let kind = match self.peek() {
            Some('>') => TokenKind::DirectedEdge,
            _ => TokenKind::UndirectedEdge,
        };
        self.advance();
        Token::new(kind, kind.as_str())
    }

    fn lex_quoted_string(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let err = self.error_here(LexErrorKind::UnterminatedQuotedString);
        self.advance();

        loop {
            match self.peek() {
                None => return Err(err),
                Some('\\') => {
                    self.advance();
                    self.advance();
                }
                Some('"') => {
                    self.advance();
                    break;
                }
                Some(_) => self.advance(),
            }
        }

        Ok(Token::new(TokenKind::Identifier, &self.input[start..self.pos]))
    }

    fn lex_html_string(&mut self) -> Result<Token, LexError> {
        let start = self.pos;
        let err = self.error_here(LexErrorKind::UnterminatedHtmlString);
        self.advance();

        let mut depth = 1usize;
        while depth > 0 {
            match self.peek() {
                None => return Err(err),
                Some('<') => depth += 1,
                Some('>') => depth -= 1,
                Some(_) => {}
            }
            self.advance();
        }

        Ok(Token::new(TokenKind::Identifier, &self.input[start..self.pos]))
    }

    fn lex_numeral(&mut self) -> Result<Token, LexError> {
        let c = self.peek().unwrap_or_default();
        let next = self.peek_second();
        let kind = match c {
            '.' if !next.is_some_and(|n| n.is_ascii_digit()) => Some(LexErrorKind::LonePeriod),
            '-' if !next.is_some_and(|n| n == '.' || n.is_ascii_digit()) => {
                Some(LexErrorKind::LoneMinus)
            }
            _ => None,
        };
        if let Some(kind) = kind {
            let err = self.error_here(kind);
            self.advance();
            return Err(err);
        }

        let start = self.pos;
        self.advance();
        self.advance_until_separator();
        Ok(Token::new(TokenKind::Identifier, &self.input[start..self.pos]))
    }

    fn lex_unquoted_string(&mut self) -> Token {
        let start = self.pos;
        self.advance();
        self.advance_until_separator();
        let literal = &self.input[start..self.pos];
        Token::new(TokenKind::lookup_identifier(literal), literal)
    }

    fn advance_until_separator(&mut self) {
        while let Some(c) = self.peek() {
            if is_separator(c) {
                break;
            }
            self.advance();
        }
    }

    /// Skip whitespace and comments: `// …`, `/* … */`, and lines starting
    /// with `#`.
    fn skip_trivia(&mut self) -> Result<(), LexError> {
        loop {
            match (self.peek(), self.peek_second()) {
                (Some(c), _) if is_whitespace(c) => self.advance(),
                (Some('#'), _) if self.column == 1 => self.skip_line(),
                (Some('/'), Some('/')) => self.skip_line(),
                (Some('/'), Some('*')) => {
                    let err = self.error_here(LexErrorKind::UnterminatedComment);
                    self.advance();
                    self.advance();
                    loop {
                        match (self.peek(), self.peek_second()) {
                            (None, _) => return Err(err),
                            (Some('*'), Some('/')) => {
                                self.advance();
                                self.advance();
                                break;
                            }
                            _ => self.advance(),
                        }
                    }
                }
                _ => return Ok(()),
            }
        }
    }

    fn skip_line(&mut self) {
        while let Some(c) = self.peek() {
            self.advance();
            if c == '\n' {
                break;
            }
        }
    }

    fn error_here(&self, kind: LexErrorKind) -> LexError {
        LexError {
            line: self.line,
            column: self.column,
            character: self.peek().unwrap_or_default(),
            kind,
        }
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn peek_second(&self) -> Option<char> {
        self.input[self.pos..].chars().nth(1)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}

/// Whitespace separating tokens. Non-breaking space is not whitespace.
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

fn is_separator(c: char) -> bool {
    TokenKind::from_punctuation(c).is_some() || c == '-' || is_whitespace(c)
}

fn is_start_of_numeral(c: char) -> bool {
    c == '-' || c == '.' || c.is_ascii_digit()
}

fn is_start_of_unquoted_string(c: char) -> bool {
    c == '_' || is_alphabetic(c)
}

/// Letters allowed in unquoted IDs: ASCII letters and `\200`-`\377`.
fn is_alphabetic(c: char) -> bool {
    c.is_ascii_alphabetic() || ('\u{80}'..='\u{ff}').contains(&c)
}
