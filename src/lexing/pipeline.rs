use super::lexer::Lexer;
use super::token::Token;
use log::trace;
use std::sync::mpsc::{sync_channel, Receiver};
use std::thread::{self, JoinHandle};

/// Consumer half of a lexer running on its own thread.
///
/// The channel has no capacity, so every token is a rendezvous: the producer
/// blocks on each send until the consumer asks for the next token.
pub struct TokenReceiver {
    receiver: Receiver<Token>,
    handle: Option<JoinHandle<()>>,
}

pub fn spawn(text: String) -> TokenReceiver {
    let (sender, receiver) = sync_channel(0);

    let handle = thread::spawn(move || {
        for token in Lexer::new(&text) {
            if sender.send(token).is_err() {
                trace!(target: "pipeline", "consumer hung up, stopping lexer");
                return;
            }
        }
        trace!(target: "pipeline", "lexer finished");
    });

    TokenReceiver {
        receiver,
        handle: Some(handle),
    }
}

impl Iterator for TokenReceiver {
    type Item = Token;

    fn next(&mut self) -> Option<Token> {
        match self.receiver.recv() {
            Ok(token) => Some(token),
            Err(_) => {
                if let Some(handle) = self.handle.take() {
                    if let Err(panic) = handle.join() {
                        std::panic::resume_unwind(panic);
                    }
                }
                None
            }
        }
    }
}
