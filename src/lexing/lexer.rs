use super::token::*;
use crate::source::Position;
use log::trace;
use std::iter::FusedIterator;

/// Pull-based tokenizer. Each call to `next` scans exactly one token; the
/// sequence ends after the first `EndOfInput` or `Error` token.
pub struct Lexer {
    characters: Vec<char>,
    start: usize,
    current: usize,
    start_position: Position,
    line: usize,
    column: usize,
    finished: bool,
}

impl Lexer {
    pub fn new(text: &str) -> Self {
        Lexer {
            characters: text.chars().collect(),
            start: 0,
            current: 0,
            start_position: Position::start(),
            line: 1,
            column: 1,
            finished: false,
        }
    }

    pub fn lex(self) -> Vec<Token> {
        self.collect()
    }

    fn token(&mut self) -> Token {
        self.skip_whitespace();

        self.start = self.current;
        self.start_position = self.cursor();

        if self.is_at_end() {
            return self.make_token(TokenKind::EndOfInput, "");
        }

        let character = self.advance();
        match character {
            '0'..='9' => self.number(),
            c if c.is_alphabetic() || c == '"' => self.word(),
            c => match TokenKind::punctuation(c) {
                Some(kind) => self.make_token(kind, &c.to_string()),
                None => self.make_token(TokenKind::Error, &format!("unexpected token '{}'", c)),
            },
        }
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.peek().is_whitespace() {
            self.advance();
        }
    }

    fn number(&mut self) -> Token {
        while !self.is_at_end() && self.peek().is_ascii_digit() {
            self.advance();
        }
        let text = self.lexeme();
        self.make_token(TokenKind::Number, &text)
    }

    fn word(&mut self) -> Token {
        while !self.is_at_end() && is_word_character(self.peek()) {
            self.advance();
        }

        let text = self.lexeme();
        match TokenKind::keyword(&text) {
            Some(kind) => self.make_token(kind, &text),
            None => {
                let unquoted: String = text.chars().filter(|c| *c != '"').collect();
                self.make_token(TokenKind::String, &unquoted)
            }
        }
    }

    fn make_token(&self, kind: TokenKind, text: &str) -> Token {
        Token::new(kind, self.start_position, text).spanning(self.current - self.start)
    }

    fn lexeme(&self) -> String {
        self.characters[self.start..self.current].iter().collect()
    }

    fn cursor(&self) -> Position {
        Position::new(self.line, self.column)
    }

    fn advance(&mut self) -> char {
        let character = self.peek();
        self.current += 1;
        if character == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        character
    }

    fn peek(&self) -> char {
        self.characters[self.current]
    }

    fn is_at_end(&self) -> bool {
        self.current >= self.characters.len()
    }
}

impl Iterator for Lexer {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        if self.finished {
            return None;
        }

        let token = self.token();
        if token.kind.is_terminal() {
            self.finished = true;
        }

        trace!(target: "lexer", "{}", token);
        Some(token)
    }
}

impl FusedIterator for Lexer {}

fn is_word_character(character: char) -> bool {
    character.is_alphanumeric() || character == '_' || character == '"' || character == '.'
}
