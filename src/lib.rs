#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(
    clippy::needless_return,
    clippy::missing_docs_in_private_items,
    clippy::missing_errors_doc,
    clippy::must_use_candidate
)]

//! Centcalc, a crate for dynamic evaluation of arithmetic expressions, with
//! either floating point or exact cents arithmetic.
//!
//! The easiest way to use this crate is with the [`eval`](fn.eval.html) and
//! [`eval_money`](fn.eval_money.html) functions:
//!
//! ```
//! assert_eq!(centcalc::eval("3 + 5 * 2"), Ok(13.0));
//! // 1190.00, as a number of cents
//! assert_eq!(centcalc::eval_money("1200 - 10"), Ok(119_000));
//! ```
//!
//! It is also possible to separate the parsing from the evaluation of an
//! expression with the [`Expr`](struct.Expr.html) type.
//!
//! ```
//! use centcalc::Expr;
//!
//! let expr = Expr::parse("1200 % 12.5").unwrap();
//! assert_eq!(expr.eval(), Ok(150.0));
//! assert_eq!(expr.eval_money(), Ok(15_000));
//! ```
//!
//! # Language definition
//!
//! The language implemented by centcalc can contain the following elements:
//!
//! - number literals: `12`, `0.5`, `.5`, `1.5e2`, `2.5E-1`;
//! - named constants `pi`, `e` and `tau`, in any case;
//! - left and right parenthesis;
//! - mathematical operators: `+` for addition, `-` for subtraction,
//!   `*` for multiplication, `/` for division, `^` for exponentiation and
//!   `%` for percentage: `a % b` is `b` percent of `a`, **not** the
//!   remainder of `a / b`;
//! - unary `-` and `+`, which bind tighter than every binary operator
//!   (`-2^2` is `4`);
//! - function calls: `sin(a)`, `max(1, 2, 3)`. The single argument
//!   functions are `sin`, `cos`, `tan`, `asin`, `acos`, `atan`, `sqrt`,
//!   `abs`, `ln`, `log` (base 10), `exp`, `floor`, `ceil` and `round`;
//!   `min` and `max` take two arguments or more; `pow(a, b)`,
//!   `atan2(a, b)` and `logn(a, b)` (logarithm of `a` in base `b`) take
//!   exactly two.
//!
//! Identifiers and function names are ASCII only and case-insensitive.
//! Any other symbol is forbidden in the input.
//!
//! # Money mode
//!
//! [`eval_money`](fn.eval_money.html) works on `i64` numbers of cents. It
//! accepts plain decimal literals with at most two fractional digits, the
//! `+`, `-`, `*`, `/` and `%` operators, and the `abs`, `min` and `max`
//! functions. Results of `*`, `/` and `%` are rounded half away from zero,
//! and any overflow of the `i64` range is an error.
//!
//! # Technical details
//!
//! centcalc uses a Shunting-Yard algorithm to convert the expression to
//! reverse polish notation, then evaluates it with a single pass over an
//! operand stack.

#[macro_use]
extern crate lazy_static;

mod error;
mod expr;
mod float;
mod lexer;
pub mod money;
mod parser;
mod stack;
mod token;
mod util;

pub use error::{Error, EvalError, LexError, ParseError};
pub use expr::{eval, eval_money, evaluate_expression, evaluate_money_expression, Expr};
pub use float::eval_rpn;
pub use lexer::{tokenize, Lexer};
pub use money::{eval_rpn_money, format_cents};
pub use parser::{to_rpn, Parser};
pub use token::{Arity, Func, Op, Token, TokenKind};
pub use util::CONSTANTS;
