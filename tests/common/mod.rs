pub use tfen::diagnostic::*;
use std::cell::RefCell;
use std::rc::Rc;
use tfen::Source;

pub type TestResult = std::result::Result<(), String>;

#[allow(dead_code)]
pub mod test_token {

    use tfen::lexing::*;
    use tfen::Position;

    pub fn test(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, Position::start(), text)
    }

    pub fn resource() -> Token {
        test(TokenKind::Resource, "resource")
    }

    pub fn attribute() -> Token {
        test(TokenKind::Attribute, "attribute")
    }

    pub fn has() -> Token {
        test(TokenKind::Has, "has")
    }

    pub fn with() -> Token {
        test(TokenKind::With, "with")
    }

    pub fn of() -> Token {
        test(TokenKind::Of, "of")
    }

    pub fn string(text: &str) -> Token {
        test(TokenKind::String, text)
    }

    pub fn left_brace() -> Token {
        test(TokenKind::LBrace, "{")
    }

    pub fn right_brace() -> Token {
        test(TokenKind::RBrace, "}")
    }

    pub fn left_bracket() -> Token {
        test(TokenKind::LBracket, "[")
    }

    pub fn right_bracket() -> Token {
        test(TokenKind::RBracket, "]")
    }

    pub fn comma() -> Token {
        test(TokenKind::Comma, ",")
    }

    pub fn number(text: &str) -> Token {
        test(TokenKind::Number, text)
    }

    /// Lays the tokens out on one line separated by single spaces and
    /// appends `EndOfInput`.
    pub fn join(tokens: &[Token]) -> Vec<Token> {
        let mut char = 1;
        let mut joined: Vec<Token> = tokens
            .iter()
            .map(|t| {
                let new_t = Token::new(t.kind, Position::new(1, char), &t.text);
                char += t.text.chars().count() + 1;
                new_t
            })
            .collect();
        joined.push(Token::new(TokenKind::EndOfInput, Position::new(1, char), ""));
        joined
    }
}

pub struct DiagnosticCapture {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl DiagnosticCapture {
    pub fn unwrap(&mut self) -> Vec<Diagnostic> {
        let captured = RefCell::new(Vec::new());
        self.diagnostics.swap(&captured);
        captured.into_inner()
    }
}

pub struct TestReporter {
    diagnostics: Rc<RefCell<Vec<Diagnostic>>>,
}

impl TestReporter {
    #[allow(dead_code)]
    pub fn new() -> (TestReporter, DiagnosticCapture) {
        let diagnostics = Rc::new(RefCell::new(Vec::new()));
        (
            TestReporter {
                diagnostics: Rc::clone(&diagnostics),
            },
            DiagnosticCapture { diagnostics },
        )
    }
}

impl Reporter for TestReporter {
    fn report(&self, _source: &Source, diagnostic: &Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic.clone());
    }
}

#[allow(dead_code)]
pub fn assert_slices_equal<T, U>(
    kind: &str,
    got: &[T],
    expected: &[T],
    test: U,
    list: &str,
) -> TestResult
where
    T: std::fmt::Display,
    U: Fn(&T, &T) -> bool,
{
    if got.len() != expected.len() {
        let one_line = format!("Expected {} {}, got {}", expected.len(), kind, got.len());
        println!("{}\n{}", &one_line, list);
        return Err(one_line);
    }

    for (lhs, rhs) in got.iter().zip(expected) {
        if !test(lhs, rhs) {
            println!("Expected:\n  {}\nGot:\n  {}", rhs, lhs);
            return Err(String::from("Unexpected item"));
        }
    }

    Ok(())
}
