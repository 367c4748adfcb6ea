use std::env;

use centcalc::{eval, eval_money, format_cents};
use tracing::info;

const SAMPLES: [&str; 8] = [
    "12.5*(3-1)/4",
    "2+3*4",
    "(-3)+5",
    "2*-3",
    "2^3^2",
    "1200%10",
    "max(10, 6%4 + 2^3) - min(5, 3+1)",
    "logn(8, 2) + log(100)",
];

fn main() {
    tracing_subscriber::fmt::init();

    let mut money = false;
    let mut expressions = Vec::new();
    for arg in env::args().skip(1) {
        if arg == "--money" {
            money = true;
        } else {
            expressions.push(arg);
        }
    }
    if expressions.is_empty() {
        expressions = SAMPLES.iter().map(|s| (*s).to_string()).collect();
    }
    info!(money, count = expressions.len(), "evaluating expressions");

    for expression in &expressions {
        let result = if money {
            eval_money(expression).map(format_cents)
        } else {
            eval(expression).map(|value| value.to_string())
        };
        match result {
            Ok(value) => println!("{} = {}", expression, value),
            Err(e) => println!("{}: {}", expression, e),
        }
    }
}
