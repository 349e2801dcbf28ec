//! Parser node arena entries.

use std::fmt;
use std::sync::Arc;

use llparse_core::{Value, ValueError};
use regex_automata::meta::Regex;

/// Handle to a node in a grammar arena.
///
/// Copyable and compared by identity. Only meaningful for the builder (and
/// the grammar built from it) that created it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Forward declaration of a node, filled in later with `define`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Slot(pub(crate) u32);

impl Slot {
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// Case handling for literals and patterns.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Case {
    #[default]
    Sensitive,
    /// ASCII case folding for literals, Unicode-aware for patterns.
    Insensitive,
}

pub(crate) type MapFn = dyn Fn(Value) -> Result<Value, ValueError> + Send + Sync;

pub(crate) enum Mapper {
    /// Project element `n` of a list value.
    Pick(usize),
    Func(Arc<MapFn>),
}

impl Mapper {
    pub(crate) fn apply(&self, value: Value) -> Result<Value, ValueError> {
        match self {
            Mapper::Pick(index) => value.nth(*index),
            Mapper::Func(f) => f(value),
        }
    }
}

pub(crate) enum NodeKind {
    Literal {
        text: Arc<str>,
        case: Case,
    },
    Pattern {
        source: Arc<str>,
        group: usize,
        case: Case,
        regex: Regex,
    },
    Sequence(Vec<NodeId>),
    Alternative(Vec<NodeId>),
    Repeat {
        child: NodeId,
        min: usize,
        max: Option<usize>,
        stop_at_end: bool,
    },
    Map {
        child: NodeId,
        mapper: Mapper,
    },
    Label {
        child: NodeId,
        name: Arc<str>,
    },
    Lazy(Slot),
    EndOfInput,
    Empty,
    /// Placeholder for a node whose construction failed. The error is
    /// already recorded; `build` never returns a grammar containing one.
    Invalid,
}

impl NodeKind {
    /// Short name used by dumps and traces.
    pub(crate) fn name(&self) -> &'static str {
        match self {
            NodeKind::Literal { .. } => "literal",
            NodeKind::Pattern { .. } => "pattern",
            NodeKind::Sequence(_) => "sequence",
            NodeKind::Alternative(_) => "alternative",
            NodeKind::Repeat { .. } => "repeat",
            NodeKind::Map { .. } => "map",
            NodeKind::Label { .. } => "label",
            NodeKind::Lazy(_) => "lazy",
            NodeKind::EndOfInput => "end_of_input",
            NodeKind::Empty => "empty",
            NodeKind::Invalid => "invalid",
        }
    }

    pub(crate) fn is_leaf(&self) -> bool {
        matches!(
            self,
            NodeKind::Literal { .. } | NodeKind::Pattern { .. } | NodeKind::EndOfInput
        )
    }
}
