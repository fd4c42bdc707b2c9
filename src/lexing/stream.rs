use super::token::*;
use crate::source::Position;
use std::collections::VecDeque;

/// Cursor over a token iterator with a single token of lookahead.
///
/// `backup` may undo the most recent `next` exactly once; backing up further
/// is a bug in the caller and panics.
pub struct TokenStream<I: Iterator<Item = Token>> {
    tokens: I,
    pending: VecDeque<Token>,
    previous: Option<Token>,
    terminal: Option<Token>,
    can_backup: bool,
}

impl<I: Iterator<Item = Token>> TokenStream<I> {
    pub fn new(tokens: I) -> Self {
        TokenStream {
            tokens,
            pending: VecDeque::with_capacity(2),
            previous: None,
            terminal: None,
            can_backup: false,
        }
    }

    pub fn next(&mut self) -> Token {
        let token = match self.pending.pop_front() {
            Some(token) => token,
            None => self.pull(),
        };
        self.previous = Some(token.clone());
        self.can_backup = true;
        token
    }

    pub fn peek(&mut self) -> &Token {
        if self.pending.is_empty() {
            let token = self.pull();
            self.pending.push_back(token);
        }
        &self.pending[0]
    }

    pub fn backup(&mut self) {
        if !self.can_backup {
            panic!("TokenStream::backup called without a preceding next");
        }
        self.can_backup = false;
        if let Some(previous) = self.previous.take() {
            self.pending.push_front(previous);
        }
    }

    fn pull(&mut self) -> Token {
        if let Some(terminal) = &self.terminal {
            return terminal.clone();
        }

        let token = match self.tokens.next() {
            Some(token) => token,
            None => {
                let position = self
                    .previous
                    .as_ref()
                    .or_else(|| self.pending.back())
                    .map(|t| t.position)
                    .unwrap_or_else(Position::start);
                Token::new(TokenKind::EndOfInput, position, "")
            }
        };

        if token.kind.is_terminal() {
            self.terminal = Some(token.clone());
        }
        token
    }
}
