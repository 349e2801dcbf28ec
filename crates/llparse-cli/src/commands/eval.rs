//! Evaluate an expression and print the result.

use crate::util::{self, InputSpec};

pub struct EvalArgs {
    pub input: InputSpec,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: EvalArgs) {
    let input = util::require_input(&args.input);
    let calc = util::calculator(args.fuel);

    match calc.evaluate(&input.text) {
        Ok(result) => println!("{}", result),
        Err(e) => util::exit_with(&e, &input, args.color),
    }
}
