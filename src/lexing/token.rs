use crate::source::Position;
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    EndOfInput,
    Comment,

    // Keywords
    Resource,
    Attribute,
    Has,
    With,
    Of,

    // Literals
    Number,
    /// Never produced by the lexer; `1.5` lexes as `Number Period Number`.
    Float,
    Bool,
    String,

    // Punctuation
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Period,
    Equal,
    Regex,

    Error,
}

impl TokenKind {
    pub fn keyword(text: &str) -> Option<TokenKind> {
        match text {
            "with" => Some(TokenKind::With),
            "has" => Some(TokenKind::Has),
            "attribute" => Some(TokenKind::Attribute),
            "resource" => Some(TokenKind::Resource),
            "of" => Some(TokenKind::Of),
            _ => None,
        }
    }

    pub fn punctuation(character: char) -> Option<TokenKind> {
        match character {
            '{' => Some(TokenKind::LBrace),
            '}' => Some(TokenKind::RBrace),
            '[' => Some(TokenKind::LBracket),
            ']' => Some(TokenKind::RBracket),
            '.' => Some(TokenKind::Period),
            ',' => Some(TokenKind::Comma),
            _ => None,
        }
    }

    /// Whether a stream ends after a token of this kind.
    pub fn is_terminal(&self) -> bool {
        match self {
            TokenKind::EndOfInput | TokenKind::Error => true,
            _ => false,
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub position: Position,
    pub text: String,
    /// Source characters covered by the token, quotes included.
    pub length: usize,
}

impl Token {
    pub fn new(kind: TokenKind, position: Position, text: &str) -> Self {
        Token {
            kind,
            position,
            text: String::from(text),
            length: text.chars().count(),
        }
    }

    pub fn spanning(mut self, length: usize) -> Self {
        self.length = length;
        self
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "Token(kind: {:?}, text: {:?}, {})",
            self.kind, self.text, self.position
        )
    }
}

pub trait TokenString {
    fn token_string(&self) -> String;
}

impl TokenString for [Token] {
    fn token_string(&self) -> String {
        let toks = self
            .iter()
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        String::from("Vec(") + &toks + ")"
    }
}
