use crate::error::LexError;
use crate::token::{Op, Token};
use crate::util::constant;
use std::iter::Peekable;
use std::str::CharIndices;
use tracing::trace;

/// Split `input` into tokens, in input order.
///
/// ```
/// # use centcalc::{tokenize, Token, Op};
/// let tokens = tokenize("2 * pi").unwrap();
/// assert_eq!(tokens[1], Token::Op(Op::Mul));
/// assert_eq!(tokens[2].text(), "pi");
/// ```
pub fn tokenize(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(input).tokenize()
}

/// An helper struct for lexing the input
pub struct Lexer<'a> {
    source: &'a str,
    input: Peekable<CharIndices<'a>>,
}

impl<'a> Lexer<'a> {
    /// Create a lexer over `source`
    pub fn new(source: &'a str) -> Lexer<'a> {
        Lexer {
            source,
            input: source.char_indices().peekable(),
        }
    }

    /// Consume the lexer, returning every token of the input
    pub fn tokenize(mut self) -> Result<Vec<Token>, LexError> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token()? {
            tokens.push(token);
        }
        trace!(input = self.source, count = tokens.len(), "tokenized");
        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();
        if let Some((start, c)) = self.input.next() {
            let token = match c {
                '(' => Token::LParen,
                ')' => Token::RParen,
                ',' => Token::Comma,
                c if is_identifier_start(c) => self.identifier(start),
                c if c.is_ascii_digit() => self.number(start, false)?,
                '.' if self.next_is_digit() => self.number(start, true)?,
                other => match Op::from_char(other) {
                    Some(op) => Token::Op(op),
                    None => return Err(LexError::UnexpectedCharacter(other)),
                },
            };
            Ok(Some(token))
        } else {
            Ok(None)
        }
    }

    fn skip_whitespace(&mut self) {
        while self.input.peek().map_or(false, |&(_, c)| c.is_whitespace()) {
            self.input.next();
        }
    }

    /// Byte offset of the next unread character
    fn offset(&mut self) -> usize {
        let len = self.source.len();
        self.input.peek().map_or(len, |&(i, _)| i)
    }

    fn next_is_digit(&mut self) -> bool {
        self.input.peek().map_or(false, |&(_, c)| c.is_ascii_digit())
    }

    fn identifier(&mut self, start: usize) -> Token {
        while self.input.peek().map_or(false, |&(_, c)| is_identifier_part(c)) {
            self.input.next();
        }
        let end = self.offset();
        let ident = &self.source[start..end];
        let name = ident.to_ascii_lowercase();
        match constant(&name) {
            Some(value) => Token::number(ident, value),
            None => Token::function(name),
        }
    }

    /// Lex a number whose first character (a digit, or a dot if `dotted`)
    /// was already consumed.
    fn number(&mut self, start: usize, dotted: bool) -> Result<Token, LexError> {
        let mut dots = if dotted { 1 } else { 0 };
        let mut has_digits = !dotted;

        while let Some(&(i, c)) = self.input.peek() {
            match c {
                '.' => {
                    dots += 1;
                    if dots > 1 {
                        return Err(LexError::InvalidNumber(
                            self.source[start..=i].to_string(),
                        ));
                    }
                    self.input.next();
                }
                '0'..='9' => {
                    has_digits = true;
                    self.input.next();
                }
                'e' | 'E' if has_digits => {
                    self.input.next();
                    self.exponent(start)?;
                    break;
                }
                _ => break,
            }
        }

        let end = self.offset();
        let text = &self.source[start..end];
        text.parse()
            .map(|value| Token::number(text, value))
            .map_err(|_| LexError::InvalidNumber(text.to_string()))
    }

    /// Lex the `[+-]digits` part of an exponent, after the `e`
    fn exponent(&mut self, start: usize) -> Result<(), LexError> {
        if let Some(&(_, '+')) | Some(&(_, '-')) = self.input.peek() {
            self.input.next();
        }
        let mut digits = 0;
        while self.next_is_digit() {
            self.input.next();
            digits += 1;
        }
        if digits == 0 {
            let end = self.offset();
            return Err(LexError::InvalidNumber(self.source[start..end].to_string()));
        }
        Ok(())
    }
}

/// Check if `c` can appear at the first character of an identifier
fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

/// Check if `c` can appear inside an identifier
fn is_identifier_part(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}
