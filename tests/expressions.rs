use centcalc::{eval, eval_money, Error, EvalError, LexError, ParseError};
use test_case::test_case;

fn assert_close(input: &str, expected: f64) {
    let value = eval(input).unwrap_or_else(|e| panic!("{} failed: {}", input, e));
    assert!(
        (value - expected).abs() < 1e-9,
        "{} = {}, expected {}",
        input,
        value,
        expected
    );
}

#[test_case("2^3^2", 512.0 ; "right associative exponent")]
#[test_case("2+3*4", 14.0 ; "multiplication first")]
#[test_case("10-6/3", 8.0 ; "division first")]
#[test_case("(-3)+5", 2.0 ; "unary minus in parens")]
#[test_case("2*-3", -6.0 ; "unary minus after operator")]
#[test_case("-(3+4)*2", -14.0 ; "negated group")]
#[test_case("2^-3", 0.125 ; "negative exponent")]
#[test_case("1.5e2+2.5e-1", 150.25 ; "scientific notation")]
#[test_case("min(5,2,7,3)", 2.0 ; "variadic min")]
#[test_case("max(10, 6%4 + 2^3) - min(5, 3+1)", 6.0 ; "percent inside variadic calls")]
#[test_case("pow(2, 10) + atan2(1, 1)", 1024.0 + std::f64::consts::FRAC_PI_4 ; "two argument functions")]
#[test_case("sin(pi/6)^2+cos(pi/6)^2", 1.0 ; "pythagorean identity")]
#[test_case("Sqrt(2)^2", 2.0 ; "case insensitive names")]
fn float_values(input: &str, expected: f64) {
    assert_close(input, expected);
}

#[test]
fn logarithms() {
    assert_close(
        "logn(8,2) + log(100)",
        8.0_f64.ln() / 2.0_f64.ln() + 2.0,
    );
}

#[test_case("1200%10" => Ok(12_000) ; "percentage")]
#[test_case("10/3" => Ok(333) ; "division rounding")]
#[test_case("7.5%2" => Ok(15) ; "percentage rounding")]
#[test_case("1200-10" => Ok(119_000) ; "subtraction")]
#[test_case("0.1+0.2" => Ok(30) ; "exact decimal addition")]
#[test_case("-0.05/2" => Ok(-3) ; "negative division tie")]
#[test_case("-0.15*0.5" => Ok(-8) ; "negative multiplication tie")]
#[test_case("0.15*-0.5" => Ok(-8) ; "multiplication tie with negative right operand")]
#[test_case("-0.5%1" => Ok(-1) ; "negative percentage tie")]
#[test_case("-0.11*0.3" => Ok(-3) ; "negative multiplication below half")]
fn money_values(input: &str) -> Result<i64, Error> {
    eval_money(input)
}

#[test_case("sin(1)" => Err(Error::Eval(EvalError::UnsupportedFunction("sin".into()))) ; "transcendental function")]
#[test_case("1e2" => Err(Error::Eval(EvalError::UnsupportedLiteral("1e2".into()))) ; "scientific literal")]
#[test_case("3037000499.98 * 3037000499.98" => Err(Error::Eval(EvalError::Overflow("multiply"))) ; "multiplication overflow")]
fn money_errors(input: &str) -> Result<i64, Error> {
    eval_money(input)
}

#[test_case("(2+3)" => Ok(5.0) ; "balanced")]
#[test_case("(2+3" => Err(Error::Parse(ParseError::MismatchedParens)) ; "unbalanced")]
#[test_case("sin" => Err(Error::Parse(ParseError::FunctionNotCalled("sin".into()))) ; "function without call")]
#[test_case("1..2" => Err(Error::Lex(LexError::InvalidNumber("1..".into()))) ; "two decimal points")]
#[test_case("2,3" => Err(Error::Parse(ParseError::MisplacedComma)) ; "comma outside call")]
#[test_case("2 # 3" => Err(Error::Lex(LexError::UnexpectedCharacter('#'))) ; "unknown character")]
fn malformed(input: &str) -> Result<f64, Error> {
    eval(input)
}

#[test]
fn error_messages() {
    assert_eq!(
        eval("(2+3").unwrap_err().to_string(),
        "ParseError: mismatched parentheses"
    );
    assert_eq!(
        eval_money("1/0").unwrap_err().to_string(),
        "EvalError: division by zero"
    );
    assert_eq!(
        eval("1e").unwrap_err().to_string(),
        "LexError: invalid number near \"1e\""
    );
}

#[test]
fn idempotence() {
    let inputs = ["2^3^2", "10/3", "sin(", "min(1)", "1..2"];
    for input in &inputs {
        let first = (eval(input), eval_money(input));
        for _ in 0..10 {
            assert_eq!((eval(input), eval_money(input)), first);
        }
    }
}

#[test]
fn concurrent_evaluation() {
    let handles: Vec<_> = (0..8)
        .map(|i| {
            std::thread::spawn(move || {
                let input = format!("{} * 2 + max(1, {})", i, i);
                (eval(&input), eval_money(&input))
            })
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        let (float, money) = handle.join().unwrap();
        let i = i as i64;
        assert_eq!(float, Ok((i * 2 + i.max(1)) as f64));
        assert_eq!(money, Ok((i * 2 + i.max(1)) * 100));
    }
}
