//! Hand-written lexer for IDL files

use super::tokens::{Keyword, Lexeme, Symbol, Token};
use crate::error::LexError;

pub struct SimpleLexer {
    input: String,
    position: usize,
    line: usize,
}

impl SimpleLexer {
    pub fn new(input: String) -> Self {
        Self {
            input,
            position: 0,
            line: 1,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Lexeme>, LexError> {
        let mut lexemes = Vec::new();

        loop {
            self.skip_whitespace();
            if self.is_at_end() {
                break;
            }

            // Skip comments
            if self.peek_str("//") {
                self.skip_line_comment();
                continue;
            }
            if self.peek_str("/*") {
                self.skip_block_comment()?;
                continue;
            }

            let line = self.line;
            let c = self.current_char();

            let token = if c == '"' {
                Token::String(self.read_string()?)
            } else if c.is_ascii_digit() {
                self.read_number()?
            } else if let Some(symbol) = Symbol::from_char(c) {
                self.advance();
                Token::Symbol(symbol)
            } else if c.is_ascii_alphabetic() || c == '_' {
                let word = self.read_word();
                match Keyword::from_word(&word) {
                    Some(keyword) => Token::Keyword(keyword),
                    None => Token::Identifier(word),
                }
            } else {
                return Err(LexError::UnexpectedChar { ch: c, line });
            };

            lexemes.push(Lexeme { token, line });
        }

        Ok(lexemes)
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn current_char(&self) -> char {
        self.input[self.position..].chars().next().unwrap_or('\0')
    }

    fn char_after(&self, offset: usize) -> char {
        self.input[self.position..].chars().nth(offset).unwrap_or('\0')
    }

    fn peek_str(&self, s: &str) -> bool {
        self.input[self.position..].starts_with(s)
    }

    fn advance(&mut self) -> char {
        let c = self.current_char();
        if c == '\n' {
            self.line += 1;
        }
        self.position += c.len_utf8();
        c
    }

    fn skip_whitespace(&mut self) {
        while !self.is_at_end() && self.current_char().is_whitespace() {
            self.advance();
        }
    }

    fn skip_line_comment(&mut self) {
        while !self.is_at_end() && self.current_char() != '\n' {
            self.advance();
        }
    }

    fn skip_block_comment(&mut self) -> Result<(), LexError> {
        let line = self.line;
        self.advance(); // /
        self.advance(); // *

        while !self.is_at_end() {
            if self.peek_str("*/") {
                self.advance();
                self.advance();
                return Ok(());
            }
            self.advance();
        }

        Err(LexError::UnterminatedComment { line })
    }

    fn read_string(&mut self) -> Result<String, LexError> {
        let line = self.line;
        let mut result = String::new();
        self.advance(); // opening "

        while !self.is_at_end() {
            let c = self.current_char();

            if c == '"' {
                self.advance();
                return Ok(result);
            }

            if c == '\\' {
                self.advance();
                if self.is_at_end() {
                    break;
                }
                let escaped = self.advance();
                result.push(match escaped {
                    'n' => '\n',
                    't' => '\t',
                    'r' => '\r',
                    '\\' => '\\',
                    '"' => '"',
                    _ => escaped,
                });
            } else {
                result.push(self.advance());
            }
        }

        Err(LexError::UnterminatedString { line })
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let line = self.line;

        if self.peek_str("0x") || self.peek_str("0X") {
            self.advance();
            self.advance();
            let digits = self.read_while(|c| c.is_ascii_hexdigit());
            return i64::from_str_radix(&digits, 16)
                .map(Token::Integer)
                .map_err(|_| LexError::InvalidNumber {
                    text: format!("0x{}", digits),
                    line,
                });
        }

        let mut text = self.read_while(|c| c.is_ascii_digit());
        let mut is_float = false;

        if self.current_char() == '.' && self.char_after(1).is_ascii_digit() {
            is_float = true;
            text.push(self.advance());
            text.push_str(&self.read_while(|c| c.is_ascii_digit()));
        }

        if matches!(self.current_char(), 'e' | 'E') {
            let sign = self.char_after(1);
            let has_exponent = sign.is_ascii_digit()
                || (matches!(sign, '+' | '-') && self.char_after(2).is_ascii_digit());
            if has_exponent {
                is_float = true;
                text.push(self.advance());
                if matches!(self.current_char(), '+' | '-') {
                    text.push(self.advance());
                }
                text.push_str(&self.read_while(|c| c.is_ascii_digit()));
            }
        }

        // A number glued to a word ("12abc") is a typo, not two tokens
        if self.current_char().is_ascii_alphabetic() || self.current_char() == '_' {
            text.push_str(&self.read_word());
            return Err(LexError::InvalidNumber { text, line });
        }

        if is_float {
            text.parse()
                .map(Token::Float)
                .map_err(|_| LexError::InvalidNumber { text, line })
        } else {
            text.parse()
                .map(Token::Integer)
                .map_err(|_| LexError::InvalidNumber { text, line })
        }
    }

    fn read_word(&mut self) -> String {
        self.read_while(|c| c.is_ascii_alphanumeric() || c == '_')
    }

    fn read_while(&mut self, accept: impl Fn(char) -> bool) -> String {
        let mut result = String::new();
        while !self.is_at_end() && accept(self.current_char()) {
            result.push(self.advance());
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(input: &str) -> Vec<Token> {
        let mut lexer = SimpleLexer::new(input.to_string());
        lexer
            .tokenize()
            .unwrap()
            .into_iter()
            .map(|lexeme| lexeme.token)
            .collect()
    }

    #[test]
    fn test_simple_tokenize() {
        let tokens = tokens("[callback] bool OnGameModeInit();");

        assert_eq!(tokens.len(), 8);
        assert!(matches!(tokens[0], Token::Symbol(Symbol::LeftBracket)));
        assert!(matches!(tokens[1], Token::Identifier(ref s) if s == "callback"));
        assert!(matches!(tokens[2], Token::Symbol(Symbol::RightBracket)));
        assert!(matches!(tokens[3], Token::Identifier(ref s) if s == "bool"));
        assert!(matches!(tokens[4], Token::Identifier(ref s) if s == "OnGameModeInit"));
        assert!(matches!(tokens[7], Token::Symbol(Symbol::Semicolon)));
    }

    #[test]
    fn test_comments() {
        let tokens = tokens("// comment\nconst /* block */ int X = 1;");

        assert_eq!(tokens.len(), 6);
        assert_eq!(tokens[0], Token::Keyword(Keyword::Const));
    }

    #[test]
    fn test_numbers() {
        assert_eq!(tokens("42"), vec![Token::Integer(42)]);
        assert_eq!(tokens("0x7F800000"), vec![Token::Integer(0x7F80_0000)]);
        assert_eq!(tokens("1.5"), vec![Token::Float(1.5)]);
        assert_eq!(tokens("2e3"), vec![Token::Float(2000.0)]);
        assert_eq!(
            tokens("-1"),
            vec![Token::Symbol(Symbol::Minus), Token::Integer(1)]
        );
    }

    #[test]
    fn test_string_escapes() {
        assert_eq!(
            tokens(r#""a\"b\n""#),
            vec![Token::String("a\"b\n".to_string())]
        );
    }

    #[test]
    fn test_keywords() {
        assert_eq!(
            tokens("true false const"),
            vec![
                Token::Keyword(Keyword::True),
                Token::Keyword(Keyword::False),
                Token::Keyword(Keyword::Const),
            ]
        );
    }

    #[test]
    fn test_line_numbers() {
        let mut lexer = SimpleLexer::new("a\n\n/* x\n y */ b".to_string());
        let lexemes = lexer.tokenize().unwrap();

        assert_eq!(lexemes[0].line, 1);
        assert_eq!(lexemes[1].line, 4);
    }

    #[test]
    fn test_errors() {
        let mut lexer = SimpleLexer::new("int x @".to_string());
        assert_eq!(
            lexer.tokenize(),
            Err(LexError::UnexpectedChar { ch: '@', line: 1 })
        );

        let mut lexer = SimpleLexer::new("\"open".to_string());
        assert_eq!(
            lexer.tokenize(),
            Err(LexError::UnterminatedString { line: 1 })
        );

        let mut lexer = SimpleLexer::new("\n/* open".to_string());
        assert_eq!(
            lexer.tokenize(),
            Err(LexError::UnterminatedComment { line: 2 })
        );

        let mut lexer = SimpleLexer::new("12abc".to_string());
        assert!(matches!(
            lexer.tokenize(),
            Err(LexError::InvalidNumber { .. })
        ));
    }
}
