use crate::ast::{BinOp, Token, TokenKind};

/// Errors that abort lexing of the current input.
///
/// These are the fatal class: an input that fails to lex is never evaluated
/// or repaired.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A second `.` inside one numeric literal (`3.1.4`)
    #[error("Repeated decimal point in literal '{literal}' at position {position}")]
    RepeatedDecimalPoint { literal: String, position: usize },

    /// A `.` that is not followed by a digit and does not belong to a literal
    #[error("Unexpected '.' at position {position}: a decimal point must be followed by a digit")]
    LoneDecimalPoint { position: usize },

    /// Any character outside the expression alphabet
    #[error("Unexpected character '{ch}' at position {position}")]
    UnexpectedCharacter { ch: char, position: usize },

    /// A literal that does not fit the numeric type (`99999999999999999999`)
    #[error("Invalid numeric literal '{literal}' at position {position}")]
    InvalidLiteral { literal: String, position: usize },
}

/// Converts expression text into tokens.
///
/// A single lexer can be reused across inputs; its token buffer is cleared at
/// the start of every [`lex`](Lexer::lex) call.
#[derive(Debug, Default)]
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    tokens: Vec<Token>,
}

impl Lexer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scans `input` left to right and returns its tokens in source order.
    ///
    /// # Examples
    ///
    /// ```
    /// use shunt_calc::{Lexer, TokenKind};
    ///
    /// let mut lexer = Lexer::new();
    /// let tokens = lexer.lex("-2 x 3_000").unwrap();
    ///
    /// assert!(tokens[0].is_unary_negation());
    /// assert_eq!(tokens[1].kind(), TokenKind::Integer(2));
    /// assert_eq!(tokens[2].kind(), TokenKind::Multiply);
    /// assert_eq!(tokens[3].integer_value(), Some(3000));
    /// ```
    pub fn lex(&mut self, input: &str) -> Result<Vec<Token>, LexError> {
        self.input = input.chars().collect();
        self.position = 0;
        self.tokens.clear();

        while let Some(token) = self.next_token()? {
            self.tokens.push(token);
        }

        Ok(std::mem::take(&mut self.tokens))
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.current_char() {
            if matches!(ch, ' ' | '\t' | '\n' | '\r') {
                self.advance();
            } else {
                break;
            }
        }
    }

    fn slice(&self, start: usize, end: usize) -> String {
        self.input[start..end.min(self.input.len())].iter().collect()
    }

    /// A `-` negates when nothing precedes it that could be a left operand.
    fn minus_is_unary(&self) -> bool {
        match self.tokens.last() {
            None => true,
            Some(prev) => prev.kind().is_operator() || prev.kind() == TokenKind::LeftParen,
        }
    }

    fn read_number(&mut self) -> Result<Token, LexError> {
        let start = self.position;
        let mut digits = String::new();
        let mut is_float = false;

        while let Some(ch) = self.current_char() {
            match ch {
                '0'..='9' => digits.push(ch),
                '_' => {}
                '.' if is_float => {
                    return Err(LexError::RepeatedDecimalPoint {
                        literal: self.slice(start, self.position + 1),
                        position: self.position,
                    });
                }
                '.' => {
                    is_float = true;
                    digits.push(ch);
                }
                _ => break,
            }
            self.advance();
        }

        let text = self.slice(start, self.position);
        let invalid = || LexError::InvalidLiteral {
            literal: text.clone(),
            position: start,
        };

        if is_float {
            let value = digits.parse::<f64>().map_err(|_| invalid())?;
            Ok(Token::float(value, text))
        } else {
            let value = digits.parse::<i64>().map_err(|_| invalid())?;
            Ok(Token::integer(value, text))
        }
    }

    fn single(&mut self, token: Token) -> Token {
        self.advance();
        token
    }

    fn next_token(&mut self) -> Result<Option<Token>, LexError> {
        self.skip_whitespace();

        let token = match self.current_char() {
            None => return Ok(None),
            Some('(') => self.single(Token::left_paren()),
            Some(')') => self.single(Token::right_paren()),
            Some('+') => self.single(Token::operator(BinOp::Add)),
            Some('-') => {
                if self.minus_is_unary() {
                    self.single(Token::unary_minus())
                } else {
                    self.single(Token::operator(BinOp::Subtract))
                }
            }
            Some('*' | 'x' | 'X') => self.single(Token::operator(BinOp::Multiply)),
            Some('/') => self.single(Token::operator(BinOp::Divide)),
            Some('%') => self.single(Token::operator(BinOp::Modulo)),
            Some('^') => self.single(Token::operator(BinOp::Power)),
            Some(ch) if ch.is_ascii_digit() => self.read_number()?,
            Some('.') => {
                if self.peek_char(1).is_some_and(|c| c.is_ascii_digit()) {
                    self.read_number()?
                } else {
                    return Err(LexError::LoneDecimalPoint {
                        position: self.position,
                    });
                }
            }
            Some(ch) => {
                return Err(LexError::UnexpectedCharacter {
                    ch,
                    position: self.position,
                });
            }
        };

        Ok(Some(token))
    }
}

/// Lexes `input` with a fresh [`Lexer`].
pub fn lex(input: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new().lex(input)
}

#[test]
fn test_minus_disambiguation() {
    let tokens = lex("-1 - -(2)").unwrap();
    assert!(tokens[0].is_unary_negation());
    assert!(!tokens[2].is_unary_negation());
    assert!(tokens[3].is_unary_negation());
    assert_eq!(tokens[3].precedence(), 5);
    assert_eq!(tokens[2].precedence(), 2);
}

#[test]
fn test_buffer_cleared_between_inputs() {
    let mut lexer = Lexer::new();
    assert_eq!(lexer.lex("1 + 2").unwrap().len(), 3);
    assert!(lexer.lex("1 $").is_err());
    let tokens = lexer.lex("-4").unwrap();
    assert_eq!(tokens.len(), 2);
    assert!(tokens[0].is_unary_negation());
}
