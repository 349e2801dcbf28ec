//! Grammar evaluation engine.

mod error;
mod eval;
mod limits;
mod outcome;
mod trace;


pub use error::RuntimeError;
pub(crate) use eval::Evaluator;
pub use limits::ParseLimits;
pub(crate) use outcome::merge_failure;
pub use outcome::{END_OF_INPUT, Failure, Outcome, Success};
pub use trace::{NoopTracer, PrintTracer, Tracer, Verbosity};
