//! blankgen - blank plugin skeleton generator
//!
//! Reads an IDL file describing the natives and callbacks of the plugin SDK
//! and emits a C source file with the plugin lifecycle exports plus one stub
//! per callback.

pub mod codegen;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod types;

// Re-export main types
pub use error::*;
pub use lexer::SimpleLexer;
pub use parser::ast::*;
pub use parser::Parser;
pub use types::PrimitiveType;

/// Lex and parse IDL source text
pub fn parse_idl(source: &str) -> Result<Document, IdlError> {
    let mut lexer = SimpleLexer::new(source.to_string());
    let tokens = lexer.tokenize()?;
    log::debug!("tokenized {} tokens", tokens.len());

    let mut parser = Parser::new(tokens);
    Ok(parser.parse()?)
}
