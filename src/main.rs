use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tfen::diagnostic::{DefaultReporter, Diagnostic, Reporter};
use tfen::lexing::TokenKind;
use tfen::parsing::ASTPrinter;
use tfen::Source;

/// Parse a TFEN policy document and print its syntax tree
#[derive(Parser)]
#[command(name = "tfen", version)]
struct Args {
    /// Path to the .tfen document
    path: PathBuf,

    /// Print the token stream instead of the syntax tree
    #[arg(long)]
    tokens: bool,

    /// Run the lexer on its own thread
    #[arg(long)]
    threaded: bool,
}

fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let source = match Source::load(&args.path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: could not read {}: {}", args.path.display(), error);
            return ExitCode::FAILURE;
        }
    };

    let reporter = DefaultReporter::new();
    if args.tokens {
        print_tokens(&source, &reporter)
    } else {
        print_tree(&source, &reporter, args.threaded)
    }
}

fn print_tokens(source: &Source, reporter: &dyn Reporter) -> ExitCode {
    for token in tfen::lex(source.content()) {
        if token.kind == TokenKind::Error {
            reporter.report(source, &Diagnostic::lex(token.position, &token.text));
            return ExitCode::FAILURE;
        }
        println!("{}", token);
    }
    ExitCode::SUCCESS
}

fn print_tree(source: &Source, reporter: &dyn Reporter, threaded: bool) -> ExitCode {
    let program = if threaded {
        match tfen::parse_threaded(source.content().to_string()) {
            Ok(program) => program,
            Err(diagnostic) => {
                reporter.report(source, &diagnostic);
                return ExitCode::FAILURE;
            }
        }
    } else {
        match tfen::run(source, reporter) {
            Some(program) => program,
            None => return ExitCode::FAILURE,
        }
    };

    ASTPrinter::new().print(&program);
    ExitCode::SUCCESS
}
