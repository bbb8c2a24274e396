//! Unified error types for blankgen using thiserror

use thiserror::Error;

/// Top-level error type for IDL processing
#[derive(Error, Debug)]
pub enum IdlError {
    #[error("lexer error: {0}")]
    Lexer(#[from] LexError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("code generation error: {0}")]
    Codegen(#[from] CodegenError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Lexical errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character '{ch}' at line {line}")]
    UnexpectedChar { ch: char, line: usize },

    #[error("unterminated string starting at line {line}")]
    UnterminatedString { line: usize },

    #[error("unterminated block comment starting at line {line}")]
    UnterminatedComment { line: usize },

    #[error("invalid number literal '{text}' at line {line}")]
    InvalidNumber { text: String, line: usize },
}

/// Parse errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("expected {expected}, found end of input")]
    UnexpectedEof { expected: String },

    #[error("expected {expected}, found {found} at line {line}")]
    UnexpectedToken {
        expected: String,
        found: String,
        line: usize,
    },
}

/// Code generation errors
#[derive(Error, Debug)]
pub enum CodegenError {
    #[error("parameter '{parameter}' of {function} has type '{type_name}', which has no C mapping")]
    UnmappedType {
        function: String,
        parameter: String,
        type_name: String,
    },

    #[error("attribute '{attribute}' of {function} expects {expected}")]
    InvalidAttribute {
        function: String,
        attribute: String,
        expected: String,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
