//! Grammar construction.
//!
//! The builder owns every node while the grammar is assembled. Misuse is
//! recorded instead of reported eagerly, so a grammar can be written as a
//! straight sequence of calls and checked once in [`GrammarBuilder::build`].

use std::sync::Arc;

use llparse_core::{Value, ValueError};
use regex_automata::meta::Regex;
use regex_automata::util::primitives::PatternID;
use regex_automata::util::syntax;

use super::Grammar;
use super::error::GrammarError;
use super::node::{Case, Mapper, NodeId, NodeKind, Slot};
use crate::engine::ParseLimits;
use crate::{Error, Result};

struct SlotEntry {
    name: Arc<str>,
    target: Option<NodeId>,
}

/// Assembles a graph of parser nodes.
#[derive(Default)]
pub struct GrammarBuilder {
    nodes: Vec<NodeKind>,
    slots: Vec<SlotEntry>,
    errors: Vec<GrammarError>,
}

impl GrammarBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes created so far.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    fn push(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(kind);
        id
    }

    fn invalid(&mut self, error: GrammarError) -> NodeId {
        self.errors.push(error);
        self.push(NodeKind::Invalid)
    }

    /// Records an error for handles that were not created by this builder.
    fn check(&mut self, node: NodeId) -> bool {
        if node.index() < self.nodes.len() {
            return true;
        }
        self.errors.push(GrammarError::UnknownNode { node });
        false
    }

    fn check_slot(&mut self, slot: Slot) -> bool {
        if slot.index() < self.slots.len() {
            return true;
        }
        self.errors.push(GrammarError::UnknownSlot { slot: slot.0 });
        false
    }

    /// Case-sensitive literal.
    pub fn literal(&mut self, text: &str) -> NodeId {
        self.literal_with(text, Case::Sensitive)
    }

    pub fn literal_with(&mut self, text: &str, case: Case) -> NodeId {
        if text.is_empty() {
            return self.invalid(GrammarError::EmptyLiteral);
        }
        self.push(NodeKind::Literal {
            text: text.into(),
            case,
        })
    }

    /// Case-sensitive pattern producing the whole match.
    pub fn pattern(&mut self, source: &str) -> NodeId {
        self.pattern_with(source, 0, Case::Sensitive)
    }

    /// Pattern producing capture group `group` (0 = whole match).
    pub fn pattern_with(&mut self, source: &str, group: usize, case: Case) -> NodeId {
        if source.is_empty() {
            return self.invalid(GrammarError::EmptyPattern);
        }

        let config = syntax::Config::new().case_insensitive(case == Case::Insensitive);
        let regex = match Regex::builder().syntax(config).build(source) {
            Ok(regex) => regex,
            Err(e) => {
                return self.invalid(GrammarError::InvalidPattern {
                    pattern: source.to_owned(),
                    message: e.to_string(),
                });
            }
        };

        let available = regex.group_info().group_len(PatternID::ZERO);
        if group >= available {
            return self.invalid(GrammarError::InvalidGroup {
                pattern: source.to_owned(),
                group,
                available,
            });
        }

        self.push(NodeKind::Pattern {
            source: source.into(),
            group,
            case,
            regex,
        })
    }

    fn children(
        &mut self,
        combinator: &'static str,
        nodes: impl IntoIterator<Item = NodeId>,
    ) -> Option<Vec<NodeId>> {
        let nodes: Vec<NodeId> = nodes.into_iter().collect();
        if nodes.is_empty() {
            self.errors.push(GrammarError::EmptyCombinator { combinator });
            return None;
        }
        let mut valid = true;
        for &node in &nodes {
            valid &= self.check(node);
        }
        valid.then_some(nodes)
    }

    /// Runs `nodes` one after another and collects their values into a list.
    pub fn sequence(&mut self, nodes: impl IntoIterator<Item = NodeId>) -> NodeId {
        match self.children("sequence", nodes) {
            Some(children) => self.push(NodeKind::Sequence(children)),
            None => self.push(NodeKind::Invalid),
        }
    }

    /// Ordered choice: the first child to succeed wins.
    pub fn alternative(&mut self, nodes: impl IntoIterator<Item = NodeId>) -> NodeId {
        match self.children("alternative", nodes) {
            Some(children) => self.push(NodeKind::Alternative(children)),
            None => self.push(NodeKind::Invalid),
        }
    }

    /// Repeats `child` between `min` and `max` times (`None` = unbounded).
    pub fn repeat(&mut self, child: NodeId, min: usize, max: Option<usize>) -> NodeId {
        self.repetition(child, min, max, false)
    }

    pub fn exactly(&mut self, child: NodeId, n: usize) -> NodeId {
        self.repetition(child, n, Some(n), false)
    }

    pub fn at_least(&mut self, child: NodeId, n: usize) -> NodeId {
        self.repetition(child, n, None, false)
    }

    pub fn at_most(&mut self, child: NodeId, n: usize) -> NodeId {
        self.repetition(child, 0, Some(n), false)
    }

    /// Unbounded repetition that also stops at end of input.
    pub fn zero_or_more(&mut self, child: NodeId) -> NodeId {
        self.repetition(child, 0, None, true)
    }

    fn repetition(
        &mut self,
        child: NodeId,
        min: usize,
        max: Option<usize>,
        stop_at_end: bool,
    ) -> NodeId {
        if let Some(max) = max
            && min > max
        {
            return self.invalid(GrammarError::InvalidRepeatBounds { min, max });
        }
        if !self.check(child) {
            return self.push(NodeKind::Invalid);
        }
        self.push(NodeKind::Repeat {
            child,
            min,
            max,
            stop_at_end,
        })
    }

    fn mapped(&mut self, child: NodeId, mapper: Mapper) -> NodeId {
        if !self.check(child) {
            return self.push(NodeKind::Invalid);
        }
        self.push(NodeKind::Map { child, mapper })
    }

    /// Replaces the child's value with `f(value)`.
    pub fn map<F>(&mut self, child: NodeId, f: F) -> NodeId
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        self.mapped(child, Mapper::Func(Arc::new(move |v| Ok(f(v)))))
    }

    /// Like [`map`](Self::map), but the mapper may reject the value's shape.
    ///
    /// An error aborts the whole parse with `RuntimeError::Map`.
    pub fn try_map<F>(&mut self, child: NodeId, f: F) -> NodeId
    where
        F: Fn(Value) -> std::result::Result<Value, ValueError> + Send + Sync + 'static,
    {
        self.mapped(child, Mapper::Func(Arc::new(f)))
    }

    /// Narrows the child's value to `T` before calling `f`.
    pub fn map_as<T, F>(&mut self, child: NodeId, f: F) -> NodeId
    where
        T: TryFrom<Value, Error = ValueError>,
        F: Fn(T) -> Value + Send + Sync + 'static,
    {
        self.mapped(
            child,
            Mapper::Func(Arc::new(move |v| T::try_from(v).map(&f))),
        )
    }

    /// Calls `f` with the child's value and a fixed list of extra arguments.
    pub fn map_with<F>(&mut self, child: NodeId, args: Vec<Value>, f: F) -> NodeId
    where
        F: Fn(Value, &[Value]) -> Value + Send + Sync + 'static,
    {
        self.mapped(child, Mapper::Func(Arc::new(move |v| Ok(f(v, &args)))))
    }

    /// `a` then `b`, keeping `a`'s value.
    pub fn skip(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let seq = self.sequence([a, b]);
        self.mapped(seq, Mapper::Pick(0))
    }

    /// `a` then `b`, keeping `b`'s value.
    pub fn then(&mut self, a: NodeId, b: NodeId) -> NodeId {
        let seq = self.sequence([a, b]);
        self.mapped(seq, Mapper::Pick(1))
    }

    pub fn either(&mut self, a: NodeId, b: NodeId) -> NodeId {
        self.alternative([a, b])
    }

    /// The child's value, or `Value::Null` without consuming input.
    ///
    /// Unlike `at_most(child, 1)`, a failed attempt is kept as the furthest
    /// failure, so a sequence that fails right after it still reports it.
    pub fn optional(&mut self, child: NodeId) -> NodeId {
        let empty = self.empty();
        self.alternative([child, empty])
    }

    /// Reports `name` instead of the child's expectations when the child
    /// fails without getting past its start.
    pub fn label(&mut self, child: NodeId, name: &str) -> NodeId {
        if !self.check(child) {
            return self.push(NodeKind::Invalid);
        }
        self.push(NodeKind::Label {
            child,
            name: name.into(),
        })
    }

    /// Declares a node to be defined later. Enables recursive grammars.
    pub fn declare(&mut self, name: &str) -> Slot {
        let slot = Slot(self.slots.len() as u32);
        self.slots.push(SlotEntry {
            name: name.into(),
            target: None,
        });
        slot
    }

    /// A node that evaluates whatever `slot` is defined as.
    pub fn lazy(&mut self, slot: Slot) -> NodeId {
        if !self.check_slot(slot) {
            return self.push(NodeKind::Invalid);
        }
        self.push(NodeKind::Lazy(slot))
    }

    /// Fills `slot`. Each slot is defined exactly once.
    pub fn define(&mut self, slot: Slot, node: NodeId) {
        if !self.check_slot(slot) || !self.check(node) {
            return;
        }
        let entry = &mut self.slots[slot.index()];
        if entry.target.is_some() {
            let name = entry.name.to_string();
            self.errors.push(GrammarError::SlotRedefined { name });
            return;
        }
        entry.target = Some(node);
    }

    /// Succeeds with `Value::Null` only at the end of the input.
    pub fn end_of_input(&mut self) -> NodeId {
        self.push(NodeKind::EndOfInput)
    }

    /// Always succeeds with `Value::Null` without consuming input.
    pub fn empty(&mut self) -> NodeId {
        self.push(NodeKind::Empty)
    }

    pub fn whitespace(&mut self) -> NodeId {
        self.pattern(r"\s+")
    }

    pub fn optional_whitespace(&mut self) -> NodeId {
        self.pattern(r"\s*")
    }

    /// Checks slot definitions and freezes the nodes into a [`Grammar`].
    pub fn build(mut self) -> Result<Grammar> {
        let slots = self.resolve_slots();

        if !self.errors.is_empty() {
            return Err(Error::InvalidGrammar(self.errors));
        }

        Ok(Grammar {
            nodes: self.nodes,
            slots,
            limits: ParseLimits::default(),
        })
    }

    fn resolve_slots(&mut self) -> Vec<(Arc<str>, NodeId)> {
        let mut resolved = Vec::with_capacity(self.slots.len());

        for (index, entry) in self.slots.iter().enumerate() {
            let Some(target) = entry.target else {
                self.errors.push(GrammarError::UndefinedSlot {
                    name: entry.name.to_string(),
                });
                continue;
            };

            if self.is_lazy_cycle(index) {
                self.errors.push(GrammarError::LazyCycle {
                    name: entry.name.to_string(),
                });
                continue;
            }

            resolved.push((entry.name.clone(), target));
        }

        resolved
    }

    /// Follows a chain of slots whose targets are themselves lazy nodes.
    fn is_lazy_cycle(&self, start: usize) -> bool {
        let mut visited = vec![false; self.slots.len()];
        let mut current = start;

        loop {
            if visited[current] {
                return true;
            }
            visited[current] = true;

            let Some(target) = self.slots[current].target else {
                return false;
            };
            match self.nodes[target.index()] {
                NodeKind::Lazy(next) => current = next.index(),
                _ => return false,
            }
        }
    }
}
