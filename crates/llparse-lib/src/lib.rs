//! llparse: composable recursive-descent parsers with furthest-failure diagnostics.
//!
//! # Example
//!
//! ```
//! use llparse_lib::GrammarBuilder;
//!
//! let mut b = GrammarBuilder::new();
//! let digits = b.pattern(r"\d+");
//! let comma = b.literal(",");
//! let pair = b.sequence([digits, comma, digits]);
//! let grammar = b.build().expect("valid grammar");
//!
//! let value = grammar.parse(pair, "12,34").expect("parses");
//! assert_eq!(value.to_string(), r#"["12", ",", "34"]"#);
//! ```

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod diagnostics;
pub mod engine;
pub mod grammar;

pub use diagnostics::{ParseError, ParseErrorPrinter};
pub use engine::{
    Failure, NoopTracer, Outcome, ParseLimits, PrintTracer, RuntimeError, Success, Tracer,
    Verbosity,
};
pub use grammar::{Case, Grammar, GrammarBuilder, GrammarError, NodeId, Slot};
pub use llparse_core::{Colors, Expected, Value, ValueError, ValueKind};

/// Errors surfaced by grammar construction and top-level parsing.
#[derive(Debug, Clone, thiserror::Error)]
pub enum Error {
    /// The builder collected construction errors.
    #[error("grammar construction failed with {} errors", .0.len())]
    InvalidGrammar(Vec<GrammarError>),

    /// Evaluation aborted on an invariant violation or exhausted limit.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),

    /// The input did not match.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result type for grammar operations.
pub type Result<T> = std::result::Result<T, Error>;
