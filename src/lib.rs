pub mod diagnostic;
pub mod lexing;
pub mod parsing;
pub mod source;

use diagnostic::*;
use lexing::*;
use log::debug;
use parsing::*;
pub use source::*;

/// Tokenizes `source` lazily; the sequence ends with `EndOfInput` or `Error`.
pub fn lex(source: &str) -> Lexer {
    Lexer::new(source)
}

pub fn parse(source: &str) -> DiagnosticResult<Program> {
    finish(Parser::new(lex(source)).parse())
}

/// Same as [`parse`], with the lexer producing tokens on its own thread.
pub fn parse_threaded(source: String) -> DiagnosticResult<Program> {
    finish(Parser::new(lexing::pipeline::spawn(source)).parse())
}

pub fn run(source: &Source, reporter: &dyn Reporter) -> Option<Program> {
    match parse(source.content()) {
        Ok(program) => Some(program),
        Err(diagnostic) => {
            reporter.report(source, &diagnostic);
            None
        }
    }
}

fn finish(result: DiagnosticResult<Program>) -> DiagnosticResult<Program> {
    match &result {
        Ok(program) => debug!("Parsed {} resources", program.resources.len()),
        Err(diagnostic) => debug!("Parse failed: {}", diagnostic),
    }
    result
}
