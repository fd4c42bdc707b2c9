use crate::lexing::{Token, TokenKind};
use crate::source::{Position, Source};
use colored::*;
use std::error;
use std::fmt;

pub type DiagnosticResult<T> = std::result::Result<T, Diagnostic>;

#[derive(Clone, Debug, PartialEq)]
pub struct LexError {
    pub position: Position,
    pub message: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct SyntaxError {
    pub position: Position,
    pub found: TokenKind,
    pub text: String,
    pub expected: Vec<TokenKind>,
    pub length: usize,
}

impl SyntaxError {
    pub fn message(&self) -> String {
        let expected = self
            .expected
            .iter()
            .map(|kind| kind.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        format!(
            "unexpected token {} with value {:?} at line {} char {}, expected: {}",
            self.found, self.text, self.position.line, self.position.char, expected
        )
    }
}

/// The single error a failed parse returns: whichever problem was hit first.
#[derive(Clone, Debug, PartialEq)]
pub enum Diagnostic {
    Lex(LexError),
    Syntax(SyntaxError),
}

impl Diagnostic {
    pub fn lex(position: Position, message: &str) -> Self {
        Diagnostic::Lex(LexError {
            position,
            message: String::from(message),
        })
    }

    pub fn syntax(position: Position, found: TokenKind, text: &str, expected: &[TokenKind]) -> Self {
        Diagnostic::Syntax(SyntaxError {
            position,
            found,
            text: String::from(text),
            expected: expected.to_vec(),
            length: text.chars().count(),
        })
    }

    /// Syntax error (or the lexer's error, for an `Error` token) at `token`.
    pub fn unexpected(token: &Token, expected: &[TokenKind]) -> Self {
        if token.kind == TokenKind::Error {
            return Diagnostic::lex(token.position, &token.text);
        }
        Diagnostic::Syntax(SyntaxError {
            position: token.position,
            found: token.kind,
            text: token.text.clone(),
            expected: expected.to_vec(),
            length: token.length,
        })
    }

    pub fn position(&self) -> Position {
        match self {
            Diagnostic::Lex(error) => error.position,
            Diagnostic::Syntax(error) => error.position,
        }
    }

    pub fn message(&self) -> String {
        match self {
            Diagnostic::Lex(error) => error.message.clone(),
            Diagnostic::Syntax(error) => error.message(),
        }
    }

    /// Number of source characters the diagnostic points at.
    pub fn width(&self) -> usize {
        match self {
            Diagnostic::Lex(_) => 1,
            Diagnostic::Syntax(error) => error.length.max(1),
        }
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Diagnostic::Lex(error) => write!(f, "lexer: {} ({})", error.message, error.position),
            Diagnostic::Syntax(error) => write!(f, "parser: {}", error.message()),
        }
    }
}

impl error::Error for Diagnostic {}

pub trait DiagnosticString {
    fn diagnostic_string(&self) -> String;
}

impl DiagnosticString for [Diagnostic] {
    fn diagnostic_string(&self) -> String {
        self.iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

pub trait Reporter {
    fn report(&self, source: &Source, diagnostic: &Diagnostic);
}

pub struct DefaultReporter {}

impl DefaultReporter {
    pub fn new() -> Self {
        DefaultReporter {}
    }
}

impl Reporter for DefaultReporter {
    fn report(&self, source: &Source, diagnostic: &Diagnostic) {
        let header = match diagnostic {
            Diagnostic::Lex(_) => "• Lex error:".red().bold(),
            Diagnostic::Syntax(_) => "• Syntax error:".red().bold(),
        };
        eprintln!("\n{} {}\n", header, diagnostic.message());

        let position = diagnostic.position();
        if let Some(line) = source.line(position.line) {
            eprintln!("  {}", line);

            let offset = (1..position.char).map(|_| " ").collect::<String>();
            let underline = (0..diagnostic.width()).map(|_| "^").collect::<String>();
            eprintln!("  {}{}", offset, underline.red());
        }
        eprintln!("  {}:{}\n", source.name, position);
    }
}
