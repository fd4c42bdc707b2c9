use super::ast::*;
use crate::diagnostic::*;
use crate::lexing::*;
use log::trace;

type Result<T> = DiagnosticResult<T>;

pub struct Parser<I: Iterator<Item = Token>> {
    tokens: TokenStream<I>,
}

impl<I: Iterator<Item = Token>> Parser<I> {
    pub fn new(tokens: I) -> Self {
        Parser {
            tokens: TokenStream::new(tokens),
        }
    }

    pub fn parse(mut self) -> Result<Program> {
        self.program()
    }

    fn program(&mut self) -> Result<Program> {
        let mut resources: Vec<Resource> = Vec::new();
        loop {
            let token = self.tokens.next();
            match token.kind {
                TokenKind::EndOfInput => return Ok(Program::new(resources)),
                TokenKind::Resource => {
                    self.tokens.backup();
                    resources.push(self.resource()?);
                }
                _ => {
                    return Err(Diagnostic::unexpected(
                        &token,
                        &[TokenKind::EndOfInput, TokenKind::Resource],
                    ))
                }
            }
        }
    }

    fn resource(&mut self) -> Result<Resource> {
        let resource_token = self.expect(TokenKind::Resource)?;
        let mut id = self.identifier()?;
        self.expect(TokenKind::Has)?;
        self.expect(TokenKind::LBrace)?;

        let mut attributes: Vec<Attribute> = Vec::new();
        loop {
            let kind = self.tokens.peek().kind;
            match kind {
                TokenKind::Attribute => attributes.push(self.attribute()?),
                TokenKind::Comma => {
                    self.tokens.next();
                }
                // A bare string renames the enclosing resource.
                TokenKind::String => id = self.identifier()?,
                TokenKind::RBrace => {
                    self.tokens.next();
                    break;
                }
                _ => {
                    let token = self.tokens.next();
                    return Err(Diagnostic::unexpected(
                        &token,
                        &[
                            TokenKind::Attribute,
                            TokenKind::Comma,
                            TokenKind::String,
                            TokenKind::RBrace,
                        ],
                    ));
                }
            }
        }

        trace!(
            target: "parser",
            "Parsed resource {} with {} attributes",
            id.name,
            attributes.len()
        );

        Ok(Resource {
            id,
            attributes,
            position: resource_token.position,
        })
    }

    fn attribute(&mut self) -> Result<Attribute> {
        let attribute_token = self.expect(TokenKind::Attribute)?;
        let id = self.identifier()?;
        self.expect(TokenKind::With)?;
        let condition = Condition::from_token(&self.expect(TokenKind::String)?);
        self.expect(TokenKind::Of)?;
        self.expect(TokenKind::LBracket)?;
        let values = self.values()?;

        trace!(target: "parser", "Parsed attribute {} ({} values)", id.name, values.len());

        Ok(Attribute {
            id,
            condition,
            values,
            position: attribute_token.position,
        })
    }

    /// Parses list entries after the opening `[` up to and including the
    /// closing `]`. Empty strings are skipped.
    fn values(&mut self) -> Result<Vec<Value>> {
        let mut values: Vec<Value> = Vec::new();
        loop {
            let token = self.tokens.next();
            match token.kind {
                TokenKind::RBracket => return Ok(values),
                TokenKind::LBracket | TokenKind::Comma => (),
                TokenKind::String => {
                    if !token.text.is_empty() {
                        values.push(Value::from_token(&token));
                    }
                }
                _ => {
                    return Err(Diagnostic::unexpected(
                        &token,
                        &[
                            TokenKind::LBracket,
                            TokenKind::String,
                            TokenKind::Comma,
                            TokenKind::RBracket,
                        ],
                    ))
                }
            }
        }
    }

    fn identifier(&mut self) -> Result<Identifier> {
        let token = self.expect(TokenKind::String)?;
        Ok(Identifier::from_token(&token))
    }

    fn expect(&mut self, kind: TokenKind) -> Result<Token> {
        let token = self.tokens.next();
        if token.kind == kind {
            Ok(token)
        } else {
            Err(Diagnostic::unexpected(&token, &[kind]))
        }
    }
}
