//! Recursive evaluation of a grammar's node graph.

use llparse_core::{Expected, Value};
use regex_automata::{Anchored, Input};

use super::error::RuntimeError;
use super::outcome::{END_OF_INPUT, Failure, Outcome, Success, merge_failure, merge_into};
use super::trace::Tracer;
use crate::grammar::{Case, Grammar, NodeId, NodeKind};

/// State of one run: the input, the remaining fuel and the current depth.
pub(crate) struct Evaluator<'g, 't, 'r, T: Tracer> {
    grammar: &'g Grammar,
    text: &'t str,
    tracer: &'r mut T,
    exec_fuel: u32,
    depth: u32,
}

type EvalResult = Result<Outcome, RuntimeError>;

/// Evaluation recurses on the native stack. When less than this is left, the
/// next level runs on a freshly allocated segment.
const STACK_RED_ZONE: usize = 128 * 1024;
const STACK_SEGMENT: usize = 2 * 1024 * 1024;

impl<'g, 't, 'r, T: Tracer> Evaluator<'g, 't, 'r, T> {
    pub(crate) fn new(grammar: &'g Grammar, text: &'t str, tracer: &'r mut T) -> Self {
        Self {
            grammar,
            text,
            tracer,
            exec_fuel: grammar.limits.exec_fuel,
            depth: 0,
        }
    }

    /// Runs `node` at `position`, charging fuel and depth.
    pub(crate) fn eval(&mut self, node: NodeId, position: usize) -> EvalResult {
        if self.exec_fuel == 0 {
            return Err(RuntimeError::ExecFuelExhausted);
        }
        self.exec_fuel -= 1;

        if self.depth >= self.grammar.limits.recursion_limit {
            return Err(RuntimeError::RecursionLimitExceeded);
        }

        self.depth += 1;
        self.tracer.trace_enter(node, position);
        let outcome = stacker::maybe_grow(STACK_RED_ZONE, STACK_SEGMENT, || {
            self.dispatch(node, position)
        });
        self.depth -= 1;

        let outcome = outcome?;
        match &outcome {
            Outcome::Success(s) => self.tracer.trace_success(node, position, s),
            Outcome::Failure(f) => self.tracer.trace_failure(node, position, f),
        }
        Ok(outcome)
    }

    fn dispatch(&mut self, node: NodeId, position: usize) -> EvalResult {
        let grammar = self.grammar;
        match grammar.node(node) {
            NodeKind::Literal { text, case } => Ok(self.literal(text, *case, position)),
            NodeKind::Pattern {
                source,
                group,
                regex,
                ..
            } => Ok(self.pattern(regex, source, *group, position)),
            NodeKind::Sequence(children) => self.sequence(children, position),
            NodeKind::Alternative(children) => self.alternative(children, position),
            NodeKind::Repeat {
                child,
                min,
                max,
                stop_at_end,
            } => self.repeat(node, *child, *min, *max, *stop_at_end, position),
            NodeKind::Map { child, mapper } => match self.eval(*child, position)? {
                Outcome::Success(mut s) => {
                    let value = std::mem::take(&mut s.value);
                    s.value = mapper
                        .apply(value)
                        .map_err(|source| RuntimeError::Map { node, source })?;
                    Ok(Outcome::Success(s))
                }
                failure => Ok(failure),
            },
            NodeKind::Label { child, name } => match self.eval(*child, position)? {
                Outcome::Failure(f) if f.position == position => Ok(Outcome::Failure(
                    Failure::new(position, Expected::singleton(name.clone())),
                )),
                other => Ok(other),
            },
            NodeKind::Lazy(slot) => self.eval(grammar.slot_target(*slot), position),
            NodeKind::EndOfInput => Ok(if position == self.text.len() {
                Success::new(position, Value::Null).into()
            } else {
                Failure::new(position, Expected::singleton(END_OF_INPUT)).into()
            }),
            NodeKind::Empty => Ok(Success::new(position, Value::Null).into()),
            NodeKind::Invalid => unreachable!("invalid nodes are rejected by build"),
        }
    }

    fn literal(&self, literal: &str, case: Case, position: usize) -> Outcome {
        let end = position + literal.len();
        // `get` rejects both overruns and offsets inside a multi-byte character.
        let matched = self.text.get(position..end).filter(|slice| match case {
            Case::Sensitive => *slice == literal,
            Case::Insensitive => slice.eq_ignore_ascii_case(literal),
        });

        match matched {
            Some(slice) => Success::new(end, Value::Text(slice.to_owned())).into(),
            None => Failure::new(position, Expected::singleton(literal)).into(),
        }
    }

    fn pattern(
        &self,
        regex: &regex_automata::meta::Regex,
        source: &std::sync::Arc<str>,
        group: usize,
        position: usize,
    ) -> Outcome {
        let input = Input::new(self.text)
            .range(position..)
            .anchored(Anchored::Yes);
        let mut caps = regex.create_captures();
        regex.search_captures(&input, &mut caps);

        let Some(m) = caps.get_match() else {
            return Failure::new(position, Expected::singleton(source.clone())).into();
        };

        let value = match caps.get_group(group) {
            Some(span) => Value::Text(self.text[span.range()].to_owned()),
            None => Value::Null,
        };
        Success::new(m.end(), value).into()
    }

    fn sequence(&mut self, children: &[NodeId], start: usize) -> EvalResult {
        let mut values = Vec::with_capacity(children.len());
        let mut furthest = None;
        let mut position = start;

        for &child in children {
            match self.eval(child, position)? {
                Outcome::Success(s) => {
                    merge_into(&mut furthest, s.furthest);
                    position = s.position;
                    values.push(s.value);
                }
                Outcome::Failure(f) => return Ok(merge_failure(furthest, f).into()),
            }
        }

        Ok(Success::new(position, Value::List(values))
            .with_furthest(furthest)
            .into())
    }

    fn alternative(&mut self, children: &[NodeId], position: usize) -> EvalResult {
        let mut failed = None;

        for &child in children {
            match self.eval(child, position)? {
                Outcome::Success(mut s) => {
                    merge_into(&mut failed, s.furthest.take());
                    return Ok(s.with_furthest(failed).into());
                }
                Outcome::Failure(f) => merge_into(&mut failed, Some(f)),
            }
        }

        let failure = failed.unwrap_or_else(|| Failure::new(position, Expected::new()));
        Ok(failure.into())
    }

    fn repeat(
        &mut self,
        node: NodeId,
        child: NodeId,
        min: usize,
        max: Option<usize>,
        stop_at_end: bool,
        start: usize,
    ) -> EvalResult {
        let mut values = Vec::new();
        let mut furthest = None;
        let mut position = start;

        loop {
            if max.is_some_and(|max| values.len() >= max) {
                break;
            }
            if stop_at_end && position == self.text.len() {
                break;
            }

            match self.eval(child, position)? {
                Outcome::Success(s) => {
                    if s.position == position {
                        return Err(RuntimeError::NoProgress { node, position });
                    }
                    merge_into(&mut furthest, s.furthest);
                    position = s.position;
                    values.push(s.value);
                }
                // Once `min` is met the failing attempt only ends the loop.
                Outcome::Failure(f) if values.len() < min => {
                    return Ok(merge_failure(furthest, f).into());
                }
                Outcome::Failure(_) => break,
            }
        }

        Ok(Success::new(position, Value::List(values))
            .with_furthest(furthest)
            .into())
    }
}
