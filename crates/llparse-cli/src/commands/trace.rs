//! Trace grammar evaluation for debugging.

use llparse_core::Colors;
use llparse_lib::{Outcome, ParseError, PrintTracer, Verbosity};

use crate::util::{self, InputSpec};

pub struct TraceArgs {
    pub input: InputSpec,
    pub verbosity: Verbosity,
    pub fuel: u32,
    pub color: bool,
}

pub fn run(args: TraceArgs) {
    let input = util::require_input(&args.input);
    let calc = util::calculator(args.fuel);
    let colors = Colors::new(args.color);

    let mut tracer = PrintTracer::new(calc.grammar(), &input.text, args.verbosity, colors);
    let result = calc
        .grammar()
        .run_traced(calc.root(), &input.text, 0, &mut tracer);
    tracer.print();

    match result {
        Ok(Outcome::Success(success)) => {
            println!("{}---{}", colors.dim, colors.reset);
            println!("{}", success.value);
        }
        Ok(Outcome::Failure(failure)) => {
            let error = llparse_calc::Error::from(llparse_lib::Error::from(ParseError::from(failure)));
            util::exit_with(&error, &input, args.color);
        }
        Err(e) => {
            eprintln!("runtime error: {}", e);
            std::process::exit(2);
        }
    }
}
