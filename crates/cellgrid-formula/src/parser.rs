//! Formula parser
//!
//! A small tokenizer and recursive descent parser for the formula grammar:
//!
//! ```text
//! formula  := '=' NAME '(' address (',' address)? ')'
//! address  := LETTERS DIGITS
//! ```
//!
//! Names and column letters are case-insensitive; whitespace between tokens
//! is ignored.

use crate::ast::FormulaCall;
use crate::error::{FormulaError, FormulaResult};
use cellgrid_core::CellAddress;

/// Parse a formula string into a [`FormulaCall`]
///
/// The function name is not checked against the registry here.
///
/// # Example
/// ```rust
/// use cellgrid_formula::parse_formula;
///
/// let call = parse_formula("=SUM(A1,B3)").unwrap();
/// assert_eq!(call.name, "SUM");
/// assert_eq!(call.operands.len(), 2);
///
/// assert!(parse_formula("=SUM(A1,B3").is_err());
/// ```
pub fn parse_formula(formula: &str) -> FormulaResult<FormulaCall> {
    let body = formula
        .strip_prefix('=')
        .ok_or_else(|| FormulaError::Parse("Formula must start with '='".into()))?;

    let mut parser = FormulaParser::new(body);
    let call = parser.parse_call()?;
    parser.expect(Token::Eof)?;
    Ok(call)
}

/// Token types
#[derive(Debug, Clone, PartialEq)]
enum Token {
    /// Run of letters and digits (function name or address)
    Word(String),
    LeftParen,
    RightParen,
    Comma,
    Eof,
    /// Any character outside the grammar
    Unexpected(char),
}

impl Token {
    fn describe(&self) -> String {
        match self {
            Token::Word(w) => format!("'{}'", w),
            Token::LeftParen => "'('".into(),
            Token::RightParen => "')'".into(),
            Token::Comma => "','".into(),
            Token::Eof => "end of formula".into(),
            Token::Unexpected(c) => format!("'{}'", c),
        }
    }
}

/// Formula parser
struct FormulaParser<'a> {
    input: &'a str,
    pos: usize,
    current: Token,
}

impl<'a> FormulaParser<'a> {
    fn new(input: &'a str) -> Self {
        let mut parser = Self {
            input,
            pos: 0,
            current: Token::Eof,
        };
        parser.advance();
        parser
    }

    // === Token scanning ===

    fn advance(&mut self) {
        self.current = self.scan_token();
    }

    fn scan_token(&mut self) -> Token {
        self.skip_whitespace();

        let c = match self.peek_char() {
            Some(c) => c,
            None => return Token::Eof,
        };

        match c {
            '(' => {
                self.pos += 1;
                Token::LeftParen
            }
            ')' => {
                self.pos += 1;
                Token::RightParen
            }
            ',' => {
                self.pos += 1;
                Token::Comma
            }
            c if c.is_ascii_alphanumeric() => {
                let start = self.pos;
                while matches!(self.peek_char(), Some(c) if c.is_ascii_alphanumeric()) {
                    self.pos += 1;
                }
                Token::Word(self.input[start..self.pos].to_string())
            }
            c => {
                self.pos += c.len_utf8();
                Token::Unexpected(c)
            }
        }
    }

    fn peek_char(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn skip_whitespace(&mut self) {
        while let Some(c) = self.peek_char() {
            if !c.is_whitespace() {
                break;
            }
            self.pos += c.len_utf8();
        }
    }

    fn expect(&mut self, expected: Token) -> FormulaResult<()> {
        if self.current == expected {
            self.advance();
            Ok(())
        } else {
            Err(FormulaError::Parse(format!(
                "expected {}, found {}",
                expected.describe(),
                self.current.describe()
            )))
        }
    }

    // === Grammar ===

    fn parse_call(&mut self) -> FormulaResult<FormulaCall> {
        let name = match &self.current {
            Token::Word(w) if w.chars().all(|c| c.is_ascii_alphabetic()) => w.to_ascii_uppercase(),
            other => {
                return Err(FormulaError::Parse(format!(
                    "expected function name, found {}",
                    other.describe()
                )))
            }
        };
        self.advance();

        self.expect(Token::LeftParen)?;
        let mut operands = vec![self.parse_address()?];
        if self.current == Token::Comma {
            self.advance();
            operands.push(self.parse_address()?);
        }
        self.expect(Token::RightParen)?;

        Ok(FormulaCall { name, operands })
    }

    fn parse_address(&mut self) -> FormulaResult<CellAddress> {
        let word = match &self.current {
            Token::Word(w) => w.to_ascii_uppercase(),
            other => {
                return Err(FormulaError::Parse(format!(
                    "expected cell address, found {}",
                    other.describe()
                )))
            }
        };
        let addr = CellAddress::parse(&word).map_err(|e| FormulaError::Parse(e.to_string()))?;
        self.advance();
        Ok(addr)
    }
}
