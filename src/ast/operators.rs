/// Binding ranks, higher binds tighter.
///
/// The unary minus sits between power and modulo: `-3^2` reads as `(-3)^2`
/// while `-7%4` reads as `-(7%4)`.
pub mod precedence {
    pub const LEFT_PAREN: u8 = 9;
    pub const MODULO: u8 = 6;
    pub const UNARY_MINUS: u8 = 5;
    pub const POWER: u8 = 4;
    pub const MULTIPLICATIVE: u8 = 3;
    pub const ADDITIVE: u8 = 2;
    pub const RIGHT_PAREN: u8 = 0;
}

/// Grouping direction for operators of equal precedence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`
    Right,
}

/// Binary arithmetic operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Subtract,
    /// Multiplication (`*`, `x`)
    Multiply,
    /// Division (`/`)
    Divide,
    /// Remainder (`%`)
    Modulo,
    /// Exponentiation (`^`)
    Power,
}

impl BinOp {
    /// Applies the operator with IEEE-754 semantics.
    ///
    /// Division by zero produces an infinity or NaN rather than an error.
    /// The remainder takes the sign of the dividend.
    pub fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinOp::Add => lhs + rhs,
            BinOp::Subtract => lhs - rhs,
            BinOp::Multiply => lhs * rhs,
            BinOp::Divide => lhs / rhs,
            BinOp::Modulo => lhs % rhs,
            BinOp::Power => lhs.powf(rhs),
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinOp::Add => "+",
            BinOp::Subtract => "-",
            BinOp::Multiply => "*",
            BinOp::Divide => "/",
            BinOp::Modulo => "%",
            BinOp::Power => "^",
        }
    }
}
