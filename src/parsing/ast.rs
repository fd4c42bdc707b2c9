use crate::lexing::Token;
use crate::source::Position;

pub trait ContainsPosition {
    fn position(&self) -> Position;
}

#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    pub name: String,
    pub position: Position,
}

impl Identifier {
    pub fn from_token(token: &Token) -> Self {
        Identifier {
            name: token.text.clone(),
            position: token.position,
        }
    }
}

/// The string following `with` in an attribute declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct Condition {
    pub text: String,
    pub position: Position,
}

impl Condition {
    pub fn from_token(token: &Token) -> Self {
        Condition {
            text: token.text.clone(),
            position: token.position,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Value {
    pub text: String,
    pub position: Position,
}

impl Value {
    pub fn from_token(token: &Token) -> Self {
        Value {
            text: token.text.clone(),
            position: token.position,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Attribute {
    pub id: Identifier,
    pub condition: Condition,
    pub values: Vec<Value>,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resource {
    pub id: Identifier,
    pub attributes: Vec<Attribute>,
    pub position: Position,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    pub resources: Vec<Resource>,
    pub position: Position,
}

impl Program {
    pub fn new(resources: Vec<Resource>) -> Self {
        Program {
            resources,
            position: Position::start(),
        }
    }
}

macro_rules! contains_position {
    ($($node:ty),*) => {
        $(
            impl ContainsPosition for $node {
                fn position(&self) -> Position {
                    self.position
                }
            }
        )*
    };
}

contains_position!(Identifier, Condition, Value, Attribute, Resource, Program);
