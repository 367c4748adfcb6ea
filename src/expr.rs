use crate::error::Error;
use crate::float::eval_rpn;
use crate::lexer::tokenize;
use crate::money::eval_rpn_money;
use crate::parser::to_rpn;
use crate::token::Token;
use tracing::debug;

/// Evaluate a single expression from `input` with floating point arithmetic.
///
/// Returns `Ok(result)` if the evaluation is successful, or `Err(cause)` if
/// lexing, parsing or evaluating the expression failed.
///
/// # Example
///
/// ```
/// # use centcalc::eval;
/// assert_eq!(eval("45 - 2^3"), Ok(37.0));
/// assert_eq!(eval("1200 % 10"), Ok(120.0));
/// ```
pub fn eval(input: &str) -> Result<f64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval())
}

/// Evaluate a single expression from `input` with fixed-point arithmetic,
/// returning the result as a number of cents.
///
/// # Example
///
/// ```
/// # use centcalc::eval_money;
/// assert_eq!(eval_money("1200 - 10"), Ok(119_000));
/// assert_eq!(eval_money("10 / 3"), Ok(333));
/// ```
pub fn eval_money(input: &str) -> Result<i64, Error> {
    Expr::parse(input).and_then(|expr| expr.eval_money())
}

/// Same as [`eval`](fn.eval.html)
pub fn evaluate_expression(input: &str) -> Result<f64, Error> {
    eval(input)
}

/// Same as [`eval_money`](fn.eval_money.html)
pub fn evaluate_money_expression(input: &str) -> Result<i64, Error> {
    eval_money(input)
}

/// A parsed mathematical expression, stored in reverse polish notation.
///
/// The same expression can be evaluated in both modes.
///
/// # Examples
/// ```
/// # use centcalc::Expr;
/// let expr = Expr::parse("12.5 * (3 - 1) / 4").unwrap();
/// assert_eq!(expr.eval(), Ok(6.25));
/// assert_eq!(expr.eval_money(), Ok(625));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    rpn: Vec<Token>,
}

impl Expr {
    /// Parse the given mathematical `expression` into an `Expr`.
    ///
    /// # Examples
    /// ```
    /// # use centcalc::Expr;
    /// // A valid expression
    /// assert!(Expr::parse("3 + 5 * 2").is_ok());
    /// // an invalid expression
    /// assert!(Expr::parse("3 + sin").is_err());
    /// ```
    pub fn parse(expression: &str) -> Result<Self, Error> {
        let tokens = tokenize(expression)?;
        let rpn = to_rpn(&tokens)?;
        Ok(Self { rpn })
    }

    /// Evaluate the expression with `f64` arithmetic.
    pub fn eval(&self) -> Result<f64, Error> {
        let value = eval_rpn(&self.rpn)?;
        debug!(value, "evaluated expression");
        Ok(value)
    }

    /// Evaluate the expression with cents arithmetic.
    pub fn eval_money(&self) -> Result<i64, Error> {
        let cents = eval_rpn_money(&self.rpn)?;
        debug!(cents, "evaluated money expression");
        Ok(cents)
    }

    /// The tokens of the expression, in reverse polish notation
    pub fn rpn(&self) -> &[Token] {
        &self.rpn
    }
}
