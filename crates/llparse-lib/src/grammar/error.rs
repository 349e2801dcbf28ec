//! Grammar construction errors.

use super::NodeId;

/// A misuse of the builder API, reported by `GrammarBuilder::build`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GrammarError {
    #[error("literal must not be empty")]
    EmptyLiteral,

    #[error("pattern must not be empty")]
    EmptyPattern,

    #[error("invalid pattern `{pattern}`: {message}")]
    InvalidPattern { pattern: String, message: String },

    #[error("pattern `{pattern}` has no group {group} (groups: {available})")]
    InvalidGroup {
        pattern: String,
        group: usize,
        available: usize,
    },

    #[error("{combinator} requires at least one child")]
    EmptyCombinator { combinator: &'static str },

    #[error("repeat bounds are inverted: min {min} > max {max}")]
    InvalidRepeatBounds { min: usize, max: usize },

    #[error("node {node} does not belong to this grammar")]
    UnknownNode { node: NodeId },

    #[error("slot {slot} does not belong to this grammar")]
    UnknownSlot { slot: u32 },

    #[error("slot `{name}` is defined twice")]
    SlotRedefined { name: String },

    #[error("slot `{name}` is declared but never defined")]
    UndefinedSlot { name: String },

    #[error("slot `{name}` resolves only to itself")]
    LazyCycle { name: String },
}
