use thiserror::Error;

/// Error type for the centcalc crate
#[derive(Debug, Clone, PartialEq, Error)]
pub enum Error {
    /// Error while splitting the input into tokens
    #[error("LexError: {0}")]
    Lex(#[from] LexError),
    /// Error while converting the tokens to postfix order
    #[error("ParseError: {0}")]
    Parse(#[from] ParseError),
    /// Error while evaluating the postfix tokens
    #[error("EvalError: {0}")]
    Eval(#[from] EvalError),
}

/// Errors reported by the lexer
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LexError {
    /// A malformed numeric literal, with the offending text
    #[error("invalid number near {0:?}")]
    InvalidNumber(String),
    /// A character that can not start any token
    #[error("unexpected character: {0:?}")]
    UnexpectedCharacter(char),
}

/// Errors reported by the shunting-yard parser
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParseError {
    /// A function name not followed by `(`
    #[error("function {0:?} must be called with parentheses")]
    FunctionNotCalled(String),
    /// A comma outside of a function call
    #[error("comma must appear inside function arguments")]
    MisplacedComma,
    /// A `(` without its `)`, or the other way around
    #[error("mismatched parentheses")]
    MismatchedParens,
    /// A call parenthesis closed without a function on the operator stack
    #[error("function call missing name")]
    MissingFunctionName,
}

/// Errors reported by the float and money evaluators
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EvalError {
    /// An operator or function found fewer values than it needs
    #[error("not enough operands")]
    NotEnoughOperands,
    /// The expression left zero or several values on the stack
    #[error("expression error: extra values")]
    ExtraValues,
    /// A function called with the wrong number of arguments
    #[error("function {name:?} expects {expected}, got {found}")]
    WrongArity {
        /// Function name
        name: String,
        /// Accepted number of arguments, in words
        expected: String,
        /// Number of arguments of the call
        found: usize,
    },
    /// A parenthesis or comma left in a postfix sequence
    #[error("unexpected token in postfix expression: {0:?}")]
    UnexpectedToken(String),
    /// A function name outside of the float catalog
    #[error("unknown function: {0:?}")]
    UnknownFunction(String),
    /// A function outside of the money subset
    #[error("function {0:?} not supported in money expressions")]
    UnsupportedFunction(String),
    /// An operator outside of the money subset
    #[error("operator {0:?} not supported in money expressions")]
    UnsupportedOperator(String),
    /// A literal that can not be represented exactly in cents
    #[error("literal {0:?} not supported in money expressions")]
    UnsupportedLiteral(String),
    /// Money division with a zero divisor
    #[error("division by zero")]
    DivisionByZero,
    /// An integer operation left the 64-bit range, with the operation name
    #[error("overflow while trying to {0}")]
    Overflow(&'static str),
}
