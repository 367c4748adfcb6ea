use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

/// Possible tokens to find in the input string
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// A numeric literal or a named constant
    Number {
        /// Text as written in the input
        text: String,
        /// Parsed value of the literal
        value: f64,
    },
    /// An arithmetic operator
    Op(Op),
    /// A function name. `arity` is only known once the parser has seen the
    /// closing parenthesis of the call.
    Function {
        /// Lower-cased function name
        name: String,
        /// Number of arguments of the call
        arity: Option<usize>,
    },
    /// Argument separator
    Comma,
    /// Left parenthesis
    LParen,
    /// Right parenthesis
    RParen,
}

/// The kind of a [`Token`](enum.Token.html), without its payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// `Token::Number`
    Number,
    /// `Token::Op`
    Operator,
    /// `Token::Function`
    Function,
    /// `Token::Comma`
    Comma,
    /// `Token::LParen`
    LeftParen,
    /// `Token::RParen`
    RightParen,
}

impl Token {
    /// Build a number token from its text and value
    pub fn number(text: impl Into<String>, value: f64) -> Self {
        Self::Number {
            text: text.into(),
            value,
        }
    }

    /// Build a function token whose arity is not resolved yet
    pub fn function(name: impl Into<String>) -> Self {
        Self::Function {
            name: name.into(),
            arity: None,
        }
    }

    /// The kind of this token
    pub fn kind(&self) -> TokenKind {
        match self {
            Self::Number { .. } => TokenKind::Number,
            Self::Op(_) => TokenKind::Operator,
            Self::Function { .. } => TokenKind::Function,
            Self::Comma => TokenKind::Comma,
            Self::LParen => TokenKind::LeftParen,
            Self::RParen => TokenKind::RightParen,
        }
    }

    /// Canonical text of the token: literal text, operator symbol, function
    /// name, or `NEG`/`POS` for unary signs.
    pub fn text(&self) -> &str {
        match self {
            Self::Number { text, .. } => text,
            Self::Op(op) => op.symbol(),
            Self::Function { name, .. } => name,
            Self::Comma => ",",
            Self::LParen => "(",
            Self::RParen => ")",
        }
    }
}

impl Display for Token {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match self {
            Self::Function {
                name,
                arity: Some(arity),
            } => write!(fmt, "{}/{}", name, arity),
            other => write!(fmt, "{}", other.text()),
        }
    }
}

/// Allowed operators in the algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `a % b` is "b percent of a", not the remainder
    Percent,
    /// `^`, exponentiation
    Pow,
    /// Unary minus
    Neg,
    /// Unary plus
    Pos,
}

impl Op {
    /// Map an operator character to the binary operator
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Minus),
            '*' => Some(Self::Mul),
            '/' => Some(Self::Div),
            '%' => Some(Self::Percent),
            '^' => Some(Self::Pow),
            _ => None,
        }
    }

    /// Get the operator precedence. Operators with higher precedence should be
    /// evaluated first.
    pub fn precedence(self) -> u8 {
        match self {
            Self::Plus | Self::Minus => 1,
            Self::Mul | Self::Div | Self::Percent => 2,
            Self::Pow => 3,
            Self::Neg | Self::Pos => 4,
        }
    }

    /// Check if the operator is left associative
    pub fn is_left_associative(self) -> bool {
        match self {
            Self::Plus | Self::Minus | Self::Mul | Self::Div | Self::Percent => true,
            Self::Pow | Self::Neg | Self::Pos => false,
        }
    }

    /// Check if the operator is right associative
    pub fn is_right_associative(self) -> bool {
        !self.is_left_associative()
    }

    /// The unary form of a sign operator, `None` for the other operators
    pub fn to_unary(self) -> Option<Self> {
        match self {
            Self::Minus => Some(Self::Neg),
            Self::Plus => Some(Self::Pos),
            _ => None,
        }
    }

    /// Canonical text of the operator
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Percent => "%",
            Self::Pow => "^",
            Self::Neg => "NEG",
            Self::Pos => "POS",
        }
    }
}

impl Display for Op {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.symbol())
    }
}

/// Functions known to the evaluators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    /// Sine, in radians
    Sin,
    /// Cosine, in radians
    Cos,
    /// Tangent, in radians
    Tan,
    /// Arcsine
    Asin,
    /// Arccosine
    Acos,
    /// Arctangent
    Atan,
    /// Square root
    Sqrt,
    /// Absolute value
    Abs,
    /// Natural logarithm
    Ln,
    /// Base 10 logarithm
    Log,
    /// Exponential
    Exp,
    /// Round toward negative infinity
    Floor,
    /// Round toward positive infinity
    Ceil,
    /// Round half away from zero
    Round,
    /// Smallest of two or more values
    Min,
    /// Largest of two or more values
    Max,
    /// `pow(a, b)` is `a` raised to `b`
    Pow,
    /// Four quadrant arctangent of `a / b`
    Atan2,
    /// `logn(a, b)` is the logarithm of `a` in base `b`
    Logn,
}

/// How many arguments a function accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// This exact number of arguments
    Exactly(usize),
    /// This many arguments or more
    AtLeast(usize),
}

impl Arity {
    /// Check if a call with `count` arguments is allowed
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Self::Exactly(n) => count == n,
            Self::AtLeast(n) => count >= n,
        }
    }
}

impl Display for Arity {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        match *self {
            Self::Exactly(1) => write!(fmt, "1 argument"),
            Self::Exactly(n) => write!(fmt, "{} arguments", n),
            Self::AtLeast(n) => write!(fmt, "at least {} arguments", n),
        }
    }
}

impl Func {
    /// Every function, in declaration order
    pub const ALL: [Func; 19] = [
        Func::Sin,
        Func::Cos,
        Func::Tan,
        Func::Asin,
        Func::Acos,
        Func::Atan,
        Func::Sqrt,
        Func::Abs,
        Func::Ln,
        Func::Log,
        Func::Exp,
        Func::Floor,
        Func::Ceil,
        Func::Round,
        Func::Min,
        Func::Max,
        Func::Pow,
        Func::Atan2,
        Func::Logn,
    ];

    /// Lower-case name used in expressions
    pub fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sqrt => "sqrt",
            Self::Abs => "abs",
            Self::Ln => "ln",
            Self::Log => "log",
            Self::Exp => "exp",
            Self::Floor => "floor",
            Self::Ceil => "ceil",
            Self::Round => "round",
            Self::Min => "min",
            Self::Max => "max",
            Self::Pow => "pow",
            Self::Atan2 => "atan2",
            Self::Logn => "logn",
        }
    }

    /// Number of arguments the function accepts
    pub fn arity(self) -> Arity {
        match self {
            Self::Sin
            | Self::Cos
            | Self::Tan
            | Self::Asin
            | Self::Acos
            | Self::Atan
            | Self::Sqrt
            | Self::Abs
            | Self::Ln
            | Self::Log
            | Self::Exp
            | Self::Floor
            | Self::Ceil
            | Self::Round => Arity::Exactly(1),
            Self::Pow | Self::Atan2 | Self::Logn => Arity::Exactly(2),
            Self::Min | Self::Max => Arity::AtLeast(2),
        }
    }
}

impl FromStr for Func {
    type Err = ();

    fn from_str(name: &str) -> Result<Self, ()> {
        Self::ALL
            .iter()
            .copied()
            .find(|func| func.name() == name)
            .ok_or(())
    }
}

impl Display for Func {
    fn fmt(&self, fmt: &mut Formatter) -> fmt::Result {
        fmt.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case(Op::Plus => 1 ; "plus")]
    #[test_case(Op::Minus => 1 ; "minus")]
    #[test_case(Op::Percent => 2 ; "percent")]
    #[test_case(Op::Pow => 3 ; "exponent")]
    #[test_case(Op::Neg => 4 ; "negation")]
    fn precedence(op: Op) -> u8 {
        op.precedence()
    }

    #[test]
    fn associativity() {
        for op in &[Op::Pow, Op::Neg, Op::Pos] {
            assert!(op.is_right_associative());
        }
        for op in &[Op::Plus, Op::Minus, Op::Mul, Op::Div, Op::Percent] {
            assert!(op.is_left_associative());
        }
    }

    #[test]
    fn functions() {
        for func in &Func::ALL {
            assert_eq!(func.name().parse::<Func>(), Ok(*func));
        }
        assert_eq!("foo".parse::<Func>(), Err(()));
        assert_eq!("SIN".parse::<Func>(), Err(()));
        assert!(Func::Max.arity().accepts(5));
        assert!(!Func::Max.arity().accepts(1));
        assert!(!Func::Pow.arity().accepts(3));
    }

    #[test]
    fn text() {
        assert_eq!(Token::Op(Op::Neg).text(), "NEG");
        assert_eq!(Token::number("pi", std::f64::consts::PI).text(), "pi");
        assert_eq!(Token::function("min").kind(), TokenKind::Function);
        let call = Token::Function {
            name: "min".into(),
            arity: Some(3),
        };
        assert_eq!(call.to_string(), "min/3");
    }
}
