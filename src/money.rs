//! Fixed-point evaluation over cents.
//!
//! Values are `i64` counts of cents. Every operation is checked: leaving the
//! `i64` range is reported as [`EvalError::Overflow`] instead of wrapping.
//! Multiplication, division and percentage round half away from zero.

use crate::error::EvalError;
use crate::float::check_arity;
use crate::stack::Stack;
use crate::token::{Func, Op, Token};
use std::convert::TryFrom;

/// Number of cents in one unit
pub const MONEY_SCALE: i64 = 100;
/// Divisor applied to the product of two cent values for `%`
pub const PERCENT_SCALE: i64 = MONEY_SCALE * 100;

/// Evaluate a sequence of tokens in reverse polish notation with cents
/// arithmetic. Only plain decimal literals with at most two fractional
/// digits, the `+ - * / %` operators, and `abs`, `min` and `max` are
/// supported.
pub fn eval_rpn_money(rpn: &[Token]) -> Result<i64, EvalError> {
    let mut stack = Stack::with_capacity(rpn.len());

    for token in rpn {
        match token {
            Token::Number { text, .. } => stack.push(parse_cents(text)?),
            Token::Op(Op::Neg) => {
                let value = stack.pop()?;
                stack.push(value.checked_neg().ok_or(EvalError::Overflow("negate"))?);
            }
            Token::Op(Op::Pos) => {
                let value = stack.pop()?;
                stack.push(value);
            }
            Token::Op(Op::Pow) => {
                return Err(EvalError::UnsupportedOperator(Op::Pow.to_string()));
            }
            Token::Op(op) => {
                let (left, right) = stack.pop_pair()?;
                stack.push(apply(*op, left, right)?);
            }
            Token::Function { name, arity } => {
                let func: Func = name
                    .parse()
                    .map_err(|_| EvalError::UnsupportedFunction(name.clone()))?;
                let arity = arity.unwrap_or(0);
                let value = call(func, arity, &mut stack)?;
                stack.push(value);
            }
            Token::Comma | Token::LParen | Token::RParen => {
                return Err(EvalError::UnexpectedToken(token.text().to_string()))
            }
        }
    }

    stack.finish()
}

fn apply(op: Op, left: i64, right: i64) -> Result<i64, EvalError> {
    match op {
        Op::Plus => left.checked_add(right).ok_or(EvalError::Overflow("add")),
        Op::Minus => left.checked_sub(right).ok_or(EvalError::Overflow("subtract")),
        Op::Mul => div_round(mul(left, right)?, MONEY_SCALE),
        Op::Div => div_round(mul(left, MONEY_SCALE)?, right),
        Op::Percent => div_round(mul(left, right)?, PERCENT_SCALE),
        Op::Pow | Op::Neg | Op::Pos => Err(EvalError::UnsupportedOperator(op.to_string())),
    }
}

fn call(func: Func, arity: usize, stack: &mut Stack<i64>) -> Result<i64, EvalError> {
    match func {
        Func::Abs => {
            check_arity(func, arity)?;
            let value = stack.pop()?;
            value.checked_abs().ok_or(EvalError::Overflow("compute abs"))
        }
        Func::Min | Func::Max => {
            check_arity(func, arity)?;
            let args = stack.pop_n(arity)?;
            let folded = if func == Func::Min {
                args.into_iter().min()
            } else {
                args.into_iter().max()
            };
            folded.ok_or(EvalError::NotEnoughOperands)
        }
        Func::Sin
        | Func::Cos
        | Func::Tan
        | Func::Asin
        | Func::Acos
        | Func::Atan
        | Func::Sqrt
        | Func::Ln
        | Func::Log
        | Func::Exp
        | Func::Floor
        | Func::Ceil
        | Func::Round
        | Func::Pow
        | Func::Atan2
        | Func::Logn => Err(EvalError::UnsupportedFunction(func.name().to_string())),
    }
}

/// Multiply two `i64` through an `i128` intermediate, failing if the
/// product does not fit back in an `i64`.
pub fn mul(a: i64, b: i64) -> Result<i64, EvalError> {
    let product = i128::from(a) * i128::from(b);
    i64::try_from(product).map_err(|_| EvalError::Overflow("multiply"))
}

/// Divide `n` by `d`, rounding half away from zero.
///
/// ```
/// # use centcalc::money::div_round;
/// assert_eq!(div_round(5, 2), Ok(3));
/// assert_eq!(div_round(-5, 2), Ok(-3));
/// assert_eq!(div_round(7, -3), Ok(-2));
/// ```
pub fn div_round(n: i64, d: i64) -> Result<i64, EvalError> {
    if d == 0 {
        return Err(EvalError::DivisionByZero);
    }
    let q = n.checked_div(d).ok_or(EvalError::Overflow("divide"))?;
    let r = n % d;
    if r == 0 {
        return Ok(q);
    }
    // |r| < |d| <= 2^63, so doubling fits in a u64
    if r.unsigned_abs() * 2 >= d.unsigned_abs() {
        if (n > 0) == (d > 0) {
            return Ok(q + 1);
        }
        return Ok(q - 1);
    }
    Ok(q)
}

/// Parse a plain decimal literal into cents.
///
/// ```
/// # use centcalc::money::parse_cents;
/// assert_eq!(parse_cents("12.5"), Ok(1250));
/// assert_eq!(parse_cents(".05"), Ok(5));
/// assert!(parse_cents("1e2").is_err());
/// ```
pub fn parse_cents(text: &str) -> Result<i64, EvalError> {
    let unsupported = || EvalError::UnsupportedLiteral(text.to_string());

    let mut parts = text.splitn(2, '.');
    let whole = parts.next().unwrap_or("");
    let frac = parts.next().unwrap_or("");
    let all_digits = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
    if (whole.is_empty() && frac.is_empty()) || !all_digits(whole) || !all_digits(frac) {
        return Err(unsupported());
    }
    if frac.len() > 2 {
        return Err(unsupported());
    }

    let whole: i64 = if whole.is_empty() {
        0
    } else {
        whole
            .parse()
            .map_err(|_| EvalError::Overflow("parse literal"))?
    };
    let mut cents: i64 = frac.bytes().fold(0, |acc, b| acc * 10 + i64::from(b - b'0'));
    if frac.len() == 1 {
        cents *= 10;
    }

    mul(whole, MONEY_SCALE)
        .map_err(|_| EvalError::Overflow("parse literal"))?
        .checked_add(cents)
        .ok_or(EvalError::Overflow("parse literal"))
}

/// Render a count of cents as `units.cc`.
///
/// ```
/// # use centcalc::format_cents;
/// assert_eq!(format_cents(119_000), "1190.00");
/// assert_eq!(format_cents(-5), "-0.05");
/// ```
pub fn format_cents(cents: i64) -> String {
    let sign = if cents < 0 { "-" } else { "" };
    let magnitude = cents.unsigned_abs();
    let scale = MONEY_SCALE as u64;
    format!("{}{}.{:02}", sign, magnitude / scale, magnitude % scale)
}
