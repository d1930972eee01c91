use std::fmt;

/// Kind of a DOT token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    LeftBrace,
    RightBrace,
    LeftBracket,
    RightBracket,
    Colon,
    Semicolon,
    Equal,
    Comma,

    DirectedEdge,
    UndirectedEdge,

    /// Any DOT ID: unquoted string, numeral, quoted string or HTML string.
    Identifier,

    // Keywords
    Digraph,
    Edge,
    Graph,
    Node,
    Strict,
    Subgraph,
}

impl TokenKind {
    /// Classify an ID as a keyword or a plain identifier.
    ///
    /// Keywords are case-insensitive. Expects a valid unquoted DOT ID.
    pub fn lookup_identifier(identifier: &str) -> TokenKind {
        // "subgraph" is the longest keyword.
        if identifier.len() > 8 {
            return TokenKind::Identifier;
        }
        match identifier.to_ascii_lowercase().as_str() {
            "digraph" => TokenKind::Digraph,
            "edge" => TokenKind::Edge,
            "graph" => TokenKind::Graph,
            "node" => TokenKind::Node,
            "strict" => TokenKind::Strict,
            "subgraph" => TokenKind::Subgraph,
            _ => TokenKind::Identifier,
        }
    }

    /// Single-character punctuation kinds.
    pub(crate) fn from_punctuation(c: char) -> Option<TokenKind> {
        let kind = match c {
            '{' => TokenKind::LeftBrace,
            '}' => TokenKind::RightBrace,
            '[' => TokenKind::LeftBracket,
            ']' => TokenKind::RightBracket,
            ':' => TokenKind::Colon,
            ';' => TokenKind::Semicolon,
            '=' => TokenKind::Equal,
            ',' => TokenKind::Comma,
            _ => return None,
        };
        Some(kind)
    }

    pub fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Digraph
                | TokenKind::Edge
                | TokenKind::Graph
                | TokenKind::Node
                | TokenKind::Strict
                | TokenKind::Subgraph
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TokenKind::LeftBrace => "{",
            TokenKind::RightBrace => "}",
            TokenKind::LeftBracket => "[",
            TokenKind::RightBracket => "]",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Equal => "=",
            TokenKind::Comma => ",",
            TokenKind::DirectedEdge => "->",
            TokenKind::UndirectedEdge => "--",
            TokenKind::Identifier => "identifier",
            TokenKind::Digraph => "digraph",
            TokenKind::Edge => "edge",
            TokenKind::Graph => "graph",
            TokenKind::Node => "node",
            TokenKind::Strict => "strict",
            TokenKind::Subgraph => "subgraph",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A DOT token and the exact source text it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
        }
    }
}
