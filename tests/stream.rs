use tfen::lexing::*;
use tfen::Position;

mod common;
use common::*;

fn stream(tokens: &[Token]) -> TokenStream<std::vec::IntoIter<Token>> {
    TokenStream::new(test_token::join(tokens).into_iter())
}

#[test]
fn peek_does_not_consume() {
    let mut tokens = stream(&[test_token::resource(), test_token::string("a")]);

    assert_eq!(tokens.peek().kind, TokenKind::Resource);
    assert_eq!(tokens.peek().kind, TokenKind::Resource);
    assert_eq!(tokens.next().kind, TokenKind::Resource);
    assert_eq!(tokens.next().text, "a");
}

#[test]
fn backup_undoes_next() {
    let mut tokens = stream(&[test_token::resource(), test_token::string("a")]);

    let first = tokens.next();
    tokens.backup();
    assert_eq!(tokens.peek(), &first);
    assert_eq!(tokens.next(), first);
    assert_eq!(tokens.next().kind, TokenKind::String);
}

#[test]
fn backup_after_peek() {
    let mut tokens = stream(&[
        test_token::resource(),
        test_token::string("a"),
        test_token::has(),
    ]);

    tokens.next();
    assert_eq!(tokens.peek().kind, TokenKind::String);
    tokens.backup();

    let kinds: Vec<_> = (0..4).map(|_| tokens.next().kind).collect();
    assert_eq!(
        kinds,
        vec![
            TokenKind::Resource,
            TokenKind::String,
            TokenKind::Has,
            TokenKind::EndOfInput
        ]
    );
}

#[test]
#[should_panic]
fn double_backup_panics() {
    let mut tokens = stream(&[test_token::resource(), test_token::string("a")]);
    tokens.next();
    tokens.next();
    tokens.backup();
    tokens.backup();
}

#[test]
#[should_panic]
fn backup_before_next_panics() {
    let mut tokens = stream(&[test_token::resource()]);
    tokens.backup();
}

#[test]
fn terminal_token_repeats() {
    let mut tokens = stream(&[test_token::comma()]);
    tokens.next();

    let end = tokens.next();
    assert_eq!(end.kind, TokenKind::EndOfInput);
    assert_eq!(tokens.next(), end);
    assert_eq!(tokens.peek(), &end);
}

#[test]
fn error_token_is_terminal() {
    let mut tokens = TokenStream::new(tfen::lex("resource $ has"));
    tokens.next();

    let error = tokens.next();
    assert_eq!(error.kind, TokenKind::Error);
    assert_eq!(tokens.next(), error);
}

#[test]
fn missing_end_of_input_is_synthesized() {
    let raw = vec![Token::new(TokenKind::Comma, Position::new(3, 4), ",")];
    let mut tokens = TokenStream::new(raw.into_iter());

    tokens.next();
    let end = tokens.next();
    assert_eq!(end.kind, TokenKind::EndOfInput);
    assert_eq!(end.position, Position::new(3, 4));
}
