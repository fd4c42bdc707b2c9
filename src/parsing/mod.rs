mod ast;
mod ast_printer;
mod parser;

pub use ast::{Attribute, Condition, ContainsPosition, Identifier, Program, Resource, Value};
pub use ast_printer::ASTPrinter;
pub use parser::Parser;
