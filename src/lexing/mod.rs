pub mod lexer;
pub mod pipeline;
pub mod stream;
pub mod token;

pub use lexer::Lexer;
pub use pipeline::TokenReceiver;
pub use stream::TokenStream;
pub use token::{Token, TokenKind, TokenString};
