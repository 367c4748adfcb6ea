use crate::error::EvalError;
use crate::stack::Stack;
use crate::token::{Func, Op, Token};

/// Evaluate a sequence of tokens in reverse polish notation with `f64`
/// arithmetic.
///
/// Division follows IEEE-754: dividing by zero gives an infinity or `NaN`
/// instead of an error.
pub fn eval_rpn(rpn: &[Token]) -> Result<f64, EvalError> {
    let mut stack = Stack::with_capacity(rpn.len());

    for token in rpn {
        match token {
            Token::Number { value, .. } => stack.push(*value),
            Token::Op(op) => {
                let value = apply(*op, &mut stack)?;
                stack.push(value);
            }
            Token::Function { name, arity } => {
                let func: Func = name
                    .parse()
                    .map_err(|_| EvalError::UnknownFunction(name.clone()))?;
                let arity = arity.unwrap_or(0);
                check_arity(func, arity)?;
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

/// Fail unless `func` accepts `arity` arguments
pub(crate) fn check_arity(func: Func, arity: usize) -> Result<(), EvalError> {
    let expected = func.arity();
    if expected.accepts(arity) {
        Ok(())
    } else {
        Err(EvalError::WrongArity {
            name: func.name().to_string(),
            expected: expected.to_string(),
            found: arity,
        })
    }
}

fn apply(op: Op, stack: &mut Stack<f64>) -> Result<f64, EvalError> {
    let value = match op {
        Op::Neg => -stack.pop()?,
        Op::Pos => stack.pop()?,
        Op::Plus => binary(stack, |a, b| a + b)?,
        Op::Minus => binary(stack, |a, b| a - b)?,
        Op::Mul => binary(stack, |a, b| a * b)?,
        Op::Div => binary(stack, |a, b| a / b)?,
        Op::Percent => binary(stack, |a, b| a * b / 100.0)?,
        Op::Pow => binary(stack, libm::pow)?,
    };
    Ok(value)
}

/// Call `func`, whose arity was already checked, on the topmost values of
/// the stack.
fn call(func: Func, arity: usize, stack: &mut Stack<f64>) -> Result<f64, EvalError> {
    let value = match func {
        Func::Sin => libm::sin(stack.pop()?),
        Func::Cos => libm::cos(stack.pop()?),
        Func::Tan => libm::tan(stack.pop()?),
        Func::Asin => libm::asin(stack.pop()?),
        Func::Acos => libm::acos(stack.pop()?),
        Func::Atan => libm::atan(stack.pop()?),
        Func::Sqrt => libm::sqrt(stack.pop()?),
        Func::Abs => libm::fabs(stack.pop()?),
        Func::Ln => libm::log(stack.pop()?),
        Func::Log => libm::log10(stack.pop()?),
        Func::Exp => libm::exp(stack.pop()?),
        Func::Floor => libm::floor(stack.pop()?),
        Func::Ceil => libm::ceil(stack.pop()?),
        Func::Round => libm::round(stack.pop()?),
        Func::Pow => binary(stack, libm::pow)?,
        Func::Atan2 => binary(stack, libm::atan2)?,
        Func::Logn => binary(stack, |a, b| libm::log(a) / libm::log(b))?,
        Func::Min => select(stack.pop_n(arity)?, |x, best| x < best)?,
        Func::Max => select(stack.pop_n(arity)?, |x, best| x > best)?,
    };
    Ok(value)
}

fn binary(stack: &mut Stack<f64>, f: impl Fn(f64, f64) -> f64) -> Result<f64, EvalError> {
    let (left, right) = stack.pop_pair()?;
    Ok(f(left, right))
}

/// Keep the first argument, replacing it by any later one for which
/// `better(candidate, best)` holds. A `NaN` first argument is never replaced.
fn select(args: Vec<f64>, better: fn(f64, f64) -> bool) -> Result<f64, EvalError> {
    let mut args = args.into_iter();
    let first = args.next().ok_or(EvalError::NotEnoughOperands)?;
    Ok(args.fold(first, |best, x| if better(x, best) { x } else { best }))
}
