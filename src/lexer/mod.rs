//! Lexical analysis for IDL files

pub mod simple;
pub mod tokens;

pub use simple::SimpleLexer;
pub use tokens::{Keyword, Lexeme, Symbol, Token};
