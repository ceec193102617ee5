use super::operators::{Associativity, BinOp, precedence};

/// Classification of a lexical token.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TokenKind {
    /// Opening parenthesis `(`
    LeftParen,

    /// Closing parenthesis `)`
    RightParen,

    /// Addition `+`
    Add,

    /// Subtraction or unary negation `-`
    ///
    /// Which of the two is recorded on the [`Token`], see
    /// [`Token::is_unary_negation`].
    Subtract,

    /// Multiplication
    ///
    /// # Examples
    /// ```text
    /// 2 * 3
    /// 2 x 3
    /// ```
    Multiply,

    /// Division `/`
    Divide,

    /// Remainder `%`
    Modulo,

    /// Exponentiation `^`
    Power,

    /// Literal without a decimal point
    ///
    /// # Examples
    /// ```text
    /// 42
    /// 3_000
    /// ```
    Integer(i64),

    /// Literal with a decimal point
    ///
    /// # Examples
    /// ```text
    /// 3.14
    /// .5
    /// 2.
    /// ```
    Float(f64),
}

impl TokenKind {
    /// The arithmetic operator for operator kinds.
    pub fn binary_op(self) -> Option<BinOp> {
        match self {
            TokenKind::Add => Some(BinOp::Add),
            TokenKind::Subtract => Some(BinOp::Subtract),
            TokenKind::Multiply => Some(BinOp::Multiply),
            TokenKind::Divide => Some(BinOp::Divide),
            TokenKind::Modulo => Some(BinOp::Modulo),
            TokenKind::Power => Some(BinOp::Power),
            _ => None,
        }
    }

    pub fn is_operator(self) -> bool {
        self.binary_op().is_some()
    }

    fn from_op(op: BinOp) -> Self {
        match op {
            BinOp::Add => TokenKind::Add,
            BinOp::Subtract => TokenKind::Subtract,
            BinOp::Multiply => TokenKind::Multiply,
            BinOp::Divide => TokenKind::Divide,
            BinOp::Modulo => TokenKind::Modulo,
            BinOp::Power => TokenKind::Power,
        }
    }
}

/// A classified lexical unit.
///
/// Precedence and associativity are fixed by the constructor and cannot be
/// changed afterwards. Tokens are only built by the [`Lexer`](crate::Lexer).
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    kind: TokenKind,
    text: String,
    precedence: u8,
    associativity: Associativity,
    unary: bool,
}

impl Token {
    pub(crate) fn left_paren() -> Self {
        Token::new(TokenKind::LeftParen, "(", precedence::LEFT_PAREN)
    }

    pub(crate) fn right_paren() -> Self {
        Token::new(TokenKind::RightParen, ")", precedence::RIGHT_PAREN)
    }

    /// A binary operator with its fixed rank.
    pub(crate) fn operator(op: BinOp) -> Self {
        let rank = match op {
            BinOp::Add | BinOp::Subtract => precedence::ADDITIVE,
            BinOp::Multiply | BinOp::Divide => precedence::MULTIPLICATIVE,
            BinOp::Modulo => precedence::MODULO,
            BinOp::Power => precedence::POWER,
        };
        let mut token = Token::new(TokenKind::from_op(op), op.symbol(), rank);
        if op == BinOp::Power {
            token.associativity = Associativity::Right;
        }
        token
    }

    pub(crate) fn unary_minus() -> Self {
        Token {
            unary: true,
            ..Token::new(TokenKind::Subtract, "-", precedence::UNARY_MINUS)
        }
    }

    pub(crate) fn integer(value: i64, text: impl Into<String>) -> Self {
        Token::new(TokenKind::Integer(value), text, 0)
    }

    pub(crate) fn float(value: f64, text: impl Into<String>) -> Self {
        Token::new(TokenKind::Float(value), text, 0)
    }

    fn new(kind: TokenKind, text: impl Into<String>, precedence: u8) -> Self {
        Token {
            kind,
            text: text.into(),
            precedence,
            associativity: Associativity::Left,
            unary: false,
        }
    }

    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// Source text of a literal, or the canonical symbol of an operator.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn precedence(&self) -> u8 {
        self.precedence
    }

    pub fn associativity(&self) -> Associativity {
        self.associativity
    }

    pub fn is_right_associative(&self) -> bool {
        self.associativity == Associativity::Right
    }

    /// True for a `-` that negates a single operand.
    pub fn is_unary_negation(&self) -> bool {
        self.unary
    }

    pub fn integer_value(&self) -> Option<i64> {
        match self.kind {
            TokenKind::Integer(n) => Some(n),
            _ => None,
        }
    }

    pub fn float_value(&self) -> Option<f64> {
        match self.kind {
            TokenKind::Float(n) => Some(n),
            _ => None,
        }
    }
}
