use crate::error::ParseError;
use crate::token::{Op, Token};
use tracing::trace;

/// Convert a sequence of tokens in infix order into reverse polish notation.
///
/// Unary signs are rewritten to `Op::Neg`/`Op::Pos`, and every function
/// token in the output carries the number of arguments of its call.
///
/// ```
/// # use centcalc::{tokenize, to_rpn};
/// let rpn = to_rpn(&tokenize("max(1, -2) * 3").unwrap()).unwrap();
/// let text: Vec<_> = rpn.iter().map(ToString::to_string).collect();
/// assert_eq!(text, ["1", "2", "NEG", "max/2", "3", "*"]);
/// ```
pub fn to_rpn(tokens: &[Token]) -> Result<Vec<Token>, ParseError> {
    Parser::new(tokens).parse()
}

/// State of one open parenthesis
#[derive(Debug, Clone, Copy)]
struct Frame {
    /// The parenthesis directly follows a function name
    is_call: bool,
    /// Commas seen at this nesting level
    commas: usize,
}

/// Shunting-yard state for a single conversion
pub struct Parser<'a> {
    tokens: &'a [Token],
    output: Vec<Token>,
    operators: Vec<Token>,
    frames: Vec<Frame>,
}

impl<'a> Parser<'a> {
    /// Create a parser over infix `tokens`
    pub fn new(tokens: &'a [Token]) -> Parser<'a> {
        Parser {
            tokens,
            output: Vec::with_capacity(tokens.len()),
            operators: Vec::new(),
            frames: Vec::new(),
        }
    }

    /// Consume the parser, returning the tokens in postfix order
    pub fn parse(mut self) -> Result<Vec<Token>, ParseError> {
        let tokens = self.tokens;
        for (i, token) in tokens.iter().enumerate() {
            let prev = if i == 0 { None } else { tokens.get(i - 1) };
            match token {
                Token::Number { .. } => self.output.push(token.clone()),
                Token::Function { name, .. } => {
                    if tokens.get(i + 1) != Some(&Token::LParen) {
                        return Err(ParseError::FunctionNotCalled(name.clone()));
                    }
                    self.operators.push(token.clone());
                }
                Token::LParen => {
                    self.operators.push(Token::LParen);
                    self.frames.push(Frame {
                        is_call: matches!(prev, Some(Token::Function { .. })),
                        commas: 0,
                    });
                }
                Token::Comma => self.comma()?,
                Token::RParen => self.right_paren(prev)?,
                Token::Op(op) => self.operator(*op, prev),
            }
        }

        while let Some(token) = self.operators.pop() {
            match token {
                Token::LParen | Token::RParen => return Err(ParseError::MismatchedParens),
                Token::Function { name, .. } => return Err(ParseError::FunctionNotCalled(name)),
                other => self.output.push(other),
            }
        }

        trace!(
            rpn = %self.output.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "),
            "converted to postfix"
        );
        Ok(self.output)
    }

    /// Move operators to the output until the innermost `(`, which stays on
    /// the stack. Returns `false` if there is no such parenthesis.
    fn unwind_to_paren(&mut self) -> bool {
        while let Some(top) = self.operators.last() {
            if *top == Token::LParen {
                return true;
            }
            if let Some(token) = self.operators.pop() {
                self.output.push(token);
            }
        }
        false
    }

    fn comma(&mut self) -> Result<(), ParseError> {
        if !self.unwind_to_paren() {
            return Err(ParseError::MisplacedComma);
        }
        match self.frames.last_mut() {
            Some(frame) if frame.is_call => {
                frame.commas += 1;
                Ok(())
            }
            _ => Err(ParseError::MisplacedComma),
        }
    }

    fn right_paren(&mut self, prev: Option<&Token>) -> Result<(), ParseError> {
        if !self.unwind_to_paren() {
            return Err(ParseError::MismatchedParens);
        }
        self.operators.pop();
        let frame = self.frames.pop().ok_or(ParseError::MismatchedParens)?;
        if !frame.is_call {
            return Ok(());
        }

        let arity = if prev == Some(&Token::LParen) {
            0
        } else {
            frame.commas + 1
        };
        match self.operators.pop() {
            Some(Token::Function { name, .. }) => {
                self.output.push(Token::Function {
                    name,
                    arity: Some(arity),
                });
                Ok(())
            }
            Some(other) => {
                self.operators.push(other);
                Err(ParseError::MissingFunctionName)
            }
            None => Err(ParseError::MissingFunctionName),
        }
    }

    fn operator(&mut self, op: Op, prev: Option<&Token>) {
        let expects_operand = match prev {
            None | Some(Token::Op(_)) | Some(Token::LParen) | Some(Token::Comma) => true,
            Some(_) => false,
        };
        let o1 = match op.to_unary() {
            Some(unary) if expects_operand => unary,
            _ => op,
        };

        while let Some(&Token::Op(o2)) = self.operators.last() {
            let pop_me = o1.is_left_associative() && o1.precedence() <= o2.precedence();
            let pop_me = pop_me || o1.is_right_associative() && o1.precedence() < o2.precedence();
            if pop_me {
                self.operators.pop();
                self.output.push(Token::Op(o2));
            } else {
                break;
            }
        }
        self.operators.push(Token::Op(o1));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexer::tokenize;
    use test_case::test_case;

    fn rpn(input: &str) -> Result<String, ParseError> {
        let tokens = tokenize(input).unwrap();
        let rpn = to_rpn(&tokens)?;
        Ok(rpn.iter().map(ToString::to_string).collect::<Vec<_>>().join(" "))
    }

    #[test_case("2+3*4" => Ok("2 3 4 * +".to_string()) ; "multiplication binds tighter")]
    #[test_case("10-6-3" => Ok("10 6 - 3 -".to_string()) ; "subtraction is left associative")]
    #[test_case("2^3^2" => Ok("2 3 2 ^ ^".to_string()) ; "exponent is right associative")]
    #[test_case("7%2*3" => Ok("7 2 % 3 *".to_string()) ; "percent shares multiplication precedence")]
    #[test_case("-3+5" => Ok("3 NEG 5 +".to_string()) ; "leading minus is unary")]
    #[test_case("2*-3" => Ok("2 3 NEG *".to_string()) ; "minus after operator is unary")]
    #[test_case("2^-3" => Ok("2 3 NEG ^".to_string()) ; "unary minus in exponent")]
    #[test_case("--2" => Ok("2 NEG NEG".to_string()) ; "stacked unary minus")]
    #[test_case("+(1)" => Ok("1 POS".to_string()) ; "unary plus")]
    #[test_case("min(1,-2)" => Ok("1 2 NEG min/2".to_string()) ; "minus after comma is unary")]
    #[test_case("(1)-2" => Ok("1 2 -".to_string()) ; "minus after paren is binary")]
    #[test_case("min(5,2,7,3)" => Ok("5 2 7 3 min/4".to_string()) ; "variadic arity")]
    #[test_case("max(1, min(2, 3), 4)" => Ok("1 2 3 min/2 4 max/3".to_string()) ; "nested calls")]
    #[test_case("f()" => Ok("f/0".to_string()) ; "zero arguments")]
    #[test_case("sin(pi/2)" => Ok("pi 2 / sin/1".to_string()) ; "single argument")]
    fn convert(input: &str) -> Result<String, ParseError> {
        rpn(input)
    }

    #[test_case("(2+3" => ParseError::MismatchedParens ; "unclosed paren")]
    #[test_case("2+3)" => ParseError::MismatchedParens ; "unopened paren")]
    #[test_case("sin" => ParseError::FunctionNotCalled("sin".into()) ; "bare function")]
    #[test_case("sin 2" => ParseError::FunctionNotCalled("sin".into()) ; "function without paren")]
    #[test_case("2,3" => ParseError::MisplacedComma ; "comma at top level")]
    #[test_case("(2,3)" => ParseError::MisplacedComma ; "comma in grouping paren")]
    #[test_case("max((1,2))" => ParseError::MisplacedComma ; "comma in nested grouping paren")]
    fn errors(input: &str) -> ParseError {
        rpn(input).unwrap_err()
    }

    #[test]
    fn missing_function_name() {
        // Tokens that the lexer can not produce, built by hand
        let tokens = [Token::LParen, Token::RParen];
        let mut parser = Parser::new(&tokens);
        parser.frames.push(Frame {
            is_call: true,
            commas: 0,
        });
        parser.operators.push(Token::LParen);
        assert_eq!(
            parser.right_paren(Some(&Token::LParen)),
            Err(ParseError::MissingFunctionName)
        );
    }
}
