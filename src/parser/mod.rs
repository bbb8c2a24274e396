pub mod ast;

use crate::error::ParseError;
use crate::lexer::tokens::{Keyword, Lexeme, Symbol, Token};
use ast::*;

/// Parser for IDL files
pub struct Parser {
    tokens: Vec<Lexeme>,
    position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Lexeme>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse a complete IDL file
    pub fn parse(&mut self) -> Result<Document, ParseError> {
        let mut items = Vec::new();

        while !self.is_at_end() {
            items.push(self.parse_item()?);
        }

        Ok(Document { items })
    }

    /// Parse a top-level declaration
    fn parse_item(&mut self) -> Result<Item, ParseError> {
        match self.peek() {
            Some(Token::Keyword(Keyword::Const)) => Ok(Item::Constant(self.parse_constant()?)),
            Some(Token::Symbol(Symbol::LeftBracket)) | Some(Token::Identifier(_)) => {
                Ok(Item::Function(self.parse_function()?))
            }
            _ => Err(self.error("constant or function declaration")),
        }
    }

    /// Parse constant: const type NAME = value;
    fn parse_constant(&mut self) -> Result<Constant, ParseError> {
        self.expect_keyword(Keyword::Const)?;
        let type_name = self.expect_identifier()?;
        let name = self.expect_identifier()?;
        self.expect_symbol(Symbol::Equals)?;
        let value = self.parse_value()?;
        self.expect_symbol(Symbol::Semicolon)?;

        Ok(Constant {
            type_name,
            name,
            value,
        })
    }

    /// Parse function: [attrs] type Name(params);
    fn parse_function(&mut self) -> Result<Function, ParseError> {
        let attributes = self.parse_attributes()?;
        let return_type = self.expect_identifier()?;
        let name = self.expect_identifier()?;
        let params = self.parse_parameters()?;
        self.expect_symbol(Symbol::Semicolon)?;

        Ok(Function {
            attributes,
            return_type,
            name,
            params,
        })
    }

    /// Parse parameters: (param, param, ...)
    fn parse_parameters(&mut self) -> Result<Vec<Parameter>, ParseError> {
        self.expect_symbol(Symbol::LeftParen)?;

        let mut params = Vec::new();

        if self.check_symbol(Symbol::RightParen) {
            self.advance();
            return Ok(params);
        }

        loop {
            params.push(self.parse_parameter()?);

            if self.check_symbol(Symbol::Comma) {
                self.advance();
                continue;
            }

            self.expect_symbol(Symbol::RightParen)?;
            break;
        }

        Ok(params)
    }

    /// Parse single parameter: [attrs] type name [= default]
    fn parse_parameter(&mut self) -> Result<Parameter, ParseError> {
        let attributes = self.parse_attributes()?;
        let type_name = self.expect_identifier()?;
        let name = self.expect_identifier()?;

        let default = if self.check_symbol(Symbol::Equals) {
            self.advance();
            Some(self.parse_value()?)
        } else {
            None
        };

        Ok(Parameter {
            attributes,
            type_name,
            name,
            default,
        })
    }

    /// Parse optional attribute list: [name, name = value, ...]
    fn parse_attributes(&mut self) -> Result<Attributes, ParseError> {
        let mut attributes = Vec::new();

        if !self.check_symbol(Symbol::LeftBracket) {
            return Ok(Attributes(attributes));
        }
        self.advance();

        loop {
            let name = self.expect_identifier()?;
            let value = if self.check_symbol(Symbol::Equals) {
                self.advance();
                Some(self.parse_value()?)
            } else {
                None
            };
            attributes.push(Attribute { name, value });

            if self.check_symbol(Symbol::Comma) {
                self.advance();
                continue;
            }

            self.expect_symbol(Symbol::RightBracket)?;
            break;
        }

        Ok(Attributes(attributes))
    }

    /// Parse value: true | false | [-]number | "string" | NAME
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let negative = self.check_symbol(Symbol::Minus);
        if negative {
            self.advance();
        }

        let value = match self.peek().cloned() {
            Some(Token::Integer(n)) => Value::Int(if negative { -n } else { n }),
            Some(Token::Float(x)) => Value::Float(if negative { -x } else { x }),
            Some(Token::Keyword(Keyword::True)) if !negative => Value::Bool(true),
            Some(Token::Keyword(Keyword::False)) if !negative => Value::Bool(false),
            Some(Token::String(s)) if !negative => Value::String(s),
            Some(Token::Identifier(name)) if !negative => Value::Ident(name),
            _ if negative => return Err(self.error("number")),
            _ => return Err(self.error("value")),
        };

        self.advance();
        Ok(value)
    }

    // Helper methods

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position).map(|lexeme| &lexeme.token)
    }

    fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position).map(|lexeme| &lexeme.token);
        self.position += 1;
        token
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    fn check_symbol(&self, expected: Symbol) -> bool {
        matches!(self.peek(), Some(Token::Symbol(sym)) if *sym == expected)
    }

    fn expect_keyword(&mut self, expected: Keyword) -> Result<(), ParseError> {
        if matches!(self.peek(), Some(Token::Keyword(kw)) if *kw == expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!("keyword '{}'", expected)))
        }
    }

    fn expect_symbol(&mut self, expected: Symbol) -> Result<(), ParseError> {
        if self.check_symbol(expected) {
            self.advance();
            Ok(())
        } else {
            Err(self.error(&format!("'{}'", expected)))
        }
    }

    fn expect_identifier(&mut self) -> Result<String, ParseError> {
        match self.peek().cloned() {
            Some(Token::Identifier(s)) => {
                self.advance();
                Ok(s)
            }
            _ => Err(self.error("identifier")),
        }
    }

    /// Error describing the token at the current position
    fn error(&self, expected: &str) -> ParseError {
        match self.tokens.get(self.position) {
            Some(lexeme) => ParseError::UnexpectedToken {
                expected: expected.to_string(),
                found: lexeme.token.to_string(),
                line: lexeme.line,
            },
            None => ParseError::UnexpectedEof {
                expected: expected.to_string(),
            },
        }
    }
}
