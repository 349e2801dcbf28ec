//! Errors that abort grammar evaluation.

use llparse_core::ValueError;

use crate::grammar::NodeId;

/// A fatal condition during a run. Never produced by input that merely
/// fails to match.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Execution fuel exhausted (too many node evaluations).
    #[error("runtime execution limit exceeded")]
    ExecFuelExhausted,

    /// Recursion fuel exhausted (too many nested node evaluations).
    #[error("runtime recursion limit exceeded")]
    RecursionLimitExceeded,

    /// An unbounded repetition matched without consuming input.
    #[error("repetition {node} made no progress at offset {position}")]
    NoProgress { node: NodeId, position: usize },

    /// A mapping function rejected its input value.
    #[error("mapper {node} failed: {source}")]
    Map { node: NodeId, source: ValueError },

    #[error("start offset {start} is not a character boundary of input of length {len}")]
    InvalidStart { start: usize, len: usize },

    #[error("node {node} does not belong to this grammar")]
    UnknownNode { node: NodeId },
}
