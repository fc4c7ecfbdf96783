//! Demo program: build `-(2 + 3)` and print its value.

use anyhow::Result;
use visitree::{Evaluator, Expr};

fn main() -> Result<()> {
    let expr = Expr::unary(
        "-",
        Expr::binary("+", Expr::literal(2.0), Expr::literal(3.0)),
    );

    let value = Evaluator::new().evaluate(&expr)?;
    println!("{}", value);

    Ok(())
}
