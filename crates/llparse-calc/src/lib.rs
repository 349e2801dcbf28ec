//! Integer arithmetic over `+ - * /` and parentheses.
//!
//! ```
//! use llparse_calc::Calculator;
//!
//! let calc = Calculator::new().expect("grammar builds");
//! assert_eq!(calc.parse("( 1 + ( 2 * 3 ) )").unwrap().to_string(), "[+, 1, [*, 2, 3]]");
//! assert_eq!(calc.evaluate("2 * (3 + 4)").unwrap(), 14);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

mod expr;
mod grammar;

#[cfg(test)]
mod calculator_tests;
#[cfg(test)]
mod expr_tests;

pub use expr::{BinaryOp, EvalError, Expr};
pub use grammar::Calculator;

use llparse_core::ValueError;
use llparse_lib::ParseError;

/// Errors from parsing or evaluating an expression.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Grammar(#[from] llparse_lib::Error),

    #[error("malformed expression tree: {0}")]
    Tree(#[from] ValueError),

    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl Error {
    /// The input mismatch, if that is what this error is.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            Error::Grammar(llparse_lib::Error::Parse(e)) => Some(e),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
