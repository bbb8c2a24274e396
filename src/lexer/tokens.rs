/// Token types in IDL files
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A reserved word (const, true, false)
    Keyword(Keyword),
    /// An identifier (function, parameter, type or attribute name)
    Identifier(String),
    /// An integer literal
    Integer(i64),
    /// A floating point literal
    Float(f64),
    /// A string literal
    String(String),
    /// Punctuation
    Symbol(Symbol),
}

/// Reserved words
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    Const,
    True,
    False,
}

impl Keyword {
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::Const => "const",
            Keyword::True => "true",
            Keyword::False => "false",
        }
    }

    pub fn from_word(word: &str) -> Option<Keyword> {
        match word {
            "const" => Some(Keyword::Const),
            "true" => Some(Keyword::True),
            "false" => Some(Keyword::False),
            _ => None,
        }
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Symbols and punctuation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    LeftBracket,  // [
    RightBracket, // ]
    LeftParen,    // (
    RightParen,   // )
    Comma,        // ,
    Semicolon,    // ;
    Equals,       // =
    Minus,        // -
}

impl Symbol {
    pub fn as_char(&self) -> char {
        match self {
            Symbol::LeftBracket => '[',
            Symbol::RightBracket => ']',
            Symbol::LeftParen => '(',
            Symbol::RightParen => ')',
            Symbol::Comma => ',',
            Symbol::Semicolon => ';',
            Symbol::Equals => '=',
            Symbol::Minus => '-',
        }
    }

    pub fn from_char(c: char) -> Option<Symbol> {
        let symbol = match c {
            '[' => Symbol::LeftBracket,
            ']' => Symbol::RightBracket,
            '(' => Symbol::LeftParen,
            ')' => Symbol::RightParen,
            ',' => Symbol::Comma,
            ';' => Symbol::Semicolon,
            '=' => Symbol::Equals,
            '-' => Symbol::Minus,
            _ => return None,
        };
        Some(symbol)
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Keyword(k) => write!(f, "keyword '{}'", k),
            Token::Identifier(s) => write!(f, "identifier '{}'", s),
            Token::Integer(n) => write!(f, "integer {}", n),
            Token::Float(x) => write!(f, "float {}", x),
            Token::String(s) => write!(f, "string \"{}\"", s),
            Token::Symbol(s) => write!(f, "'{}'", s),
        }
    }
}

/// A token together with the line it started on
#[derive(Debug, Clone, PartialEq)]
pub struct Lexeme {
    pub token: Token,
    pub line: usize,
}
