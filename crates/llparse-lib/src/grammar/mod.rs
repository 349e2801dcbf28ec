//! Grammar construction and the frozen node graph.

mod builder;
mod dump;
mod error;
mod node;

#[cfg(test)]
mod builder_tests;

use std::sync::Arc;

pub use builder::GrammarBuilder;
pub use error::GrammarError;
pub use node::{Case, NodeId, Slot};
pub(crate) use node::NodeKind;

use llparse_core::{Expected, Value};

use crate::diagnostics::ParseError;
use crate::engine::{
    END_OF_INPUT, Evaluator, Failure, NoopTracer, Outcome, ParseLimits, RuntimeError, Tracer,
    merge_failure,
};

/// An immutable graph of parser nodes.
///
/// Produced by [`GrammarBuilder::build`]. Running a grammar never mutates it,
/// so one grammar can serve any number of threads.
pub struct Grammar {
    pub(crate) nodes: Vec<NodeKind>,
    /// Resolved slots, indexed by `Slot`.
    pub(crate) slots: Vec<(Arc<str>, NodeId)>,
    pub(crate) limits: ParseLimits,
}

impl Grammar {
    /// Replaces the evaluation limits used by every subsequent run.
    pub fn with_limits(mut self, limits: ParseLimits) -> Self {
        self.limits = limits;
        self
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub(crate) fn node(&self, id: NodeId) -> &NodeKind {
        &self.nodes[id.index()]
    }

    pub(crate) fn slot_target(&self, slot: Slot) -> NodeId {
        self.slots[slot.index()].1
    }

    pub(crate) fn slot_name(&self, slot: Slot) -> &str {
        &self.slots[slot.index()].0
    }

    /// Runs `node` at offset 0.
    pub fn run(&self, node: NodeId, text: &str) -> Result<Outcome, RuntimeError> {
        self.run_at(node, text, 0)
    }

    /// Runs `node` starting at byte offset `start`.
    pub fn run_at(&self, node: NodeId, text: &str, start: usize) -> Result<Outcome, RuntimeError> {
        self.run_traced(node, text, start, &mut NoopTracer)
    }

    /// Runs `node`, reporting every node evaluation to `tracer`.
    pub fn run_traced<T: Tracer>(
        &self,
        node: NodeId,
        text: &str,
        start: usize,
        tracer: &mut T,
    ) -> Result<Outcome, RuntimeError> {
        if node.index() >= self.nodes.len() {
            return Err(RuntimeError::UnknownNode { node });
        }
        if !text.is_char_boundary(start) {
            return Err(RuntimeError::InvalidStart {
                start,
                len: text.len(),
            });
        }

        Evaluator::new(self, text, tracer).eval(node, start)
    }

    /// Runs `node` over the whole of `text` and returns its value.
    ///
    /// Input left over after `node` succeeds is reported as a failure
    /// expecting end of input, unless the run already failed further in.
    pub fn parse(&self, node: NodeId, text: &str) -> crate::Result<Value> {
        let success = match self.run(node, text)? {
            Outcome::Success(success) => success,
            Outcome::Failure(failure) => return Err(ParseError::from(failure).into()),
        };

        if success.position == text.len() {
            return Ok(success.value);
        }

        let trailing = Failure::new(success.position, Expected::singleton(END_OF_INPUT));
        Err(ParseError::from(merge_failure(success.furthest, trailing)).into())
    }
}
