//! Show the parsed expression tree.

use crate::util::{self, InputSpec};

pub struct AstArgs {
    pub input: InputSpec,
    pub json: bool,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: AstArgs) {
    let input = util::require_input(&args.input);
    let calc = util::calculator(args.fuel);

    if !args.json {
        match calc.parse(&input.text) {
            Ok(expr) => println!("{}", expr),
            Err(e) => util::exit_with(&e, &input, args.color),
        }
        return;
    }

    // Raw grammar output, before it is read into an `Expr`.
    let value = match calc.grammar().parse(calc.root(), &input.text) {
        Ok(value) => value,
        Err(e) => util::exit_with(&llparse_calc::Error::from(e), &input, args.color),
    };
    match serde_json::to_string_pretty(&value) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(2);
        }
    }
}
