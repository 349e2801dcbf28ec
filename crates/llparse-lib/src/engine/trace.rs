//! Tracing infrastructure for debugging grammar evaluation.
//!
//! The tracer is a zero-cost abstraction: with `NoopTracer` every hook is an
//! empty `#[inline(always)]` function and the calls disappear. Tracing-only
//! state (nesting depth, collected lines) lives in the tracer, never in the
//! evaluator.

use llparse_core::Colors;

use super::outcome::{Failure, Success};
use crate::grammar::{Grammar, NodeId};

/// Verbosity level for trace output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Verbosity {
    /// Default: outcomes of leaf matchers only.
    #[default]
    Default,
    /// Verbose (-v): entry and outcome of every node.
    Verbose,
    /// Very verbose (-vv): as verbose, plus the matched text.
    VeryVerbose,
}

/// Hooks called by the evaluator around every node evaluation.
///
/// - `trace_enter` - before a node runs
/// - `trace_success` - after it matched
/// - `trace_failure` - after it failed
///
/// A run aborted by a `RuntimeError` stops calling hooks at the point of failure.
pub trait Tracer {
    fn trace_enter(&mut self, node: NodeId, position: usize);

    fn trace_success(&mut self, node: NodeId, start: usize, success: &Success);

    fn trace_failure(&mut self, node: NodeId, start: usize, failure: &Failure);
}

/// No-op tracer that gets optimized away completely.
pub struct NoopTracer;

impl Tracer for NoopTracer {
    #[inline(always)]
    fn trace_enter(&mut self, _node: NodeId, _position: usize) {}

    #[inline(always)]
    fn trace_success(&mut self, _node: NodeId, _start: usize, _success: &Success) {}

    #[inline(always)]
    fn trace_failure(&mut self, _node: NodeId, _start: usize, _failure: &Failure) {}
}

/// Tracer that collects an indented, human-readable evaluation log.
pub struct PrintTracer<'g, 's> {
    grammar: &'g Grammar,
    /// Input being parsed, for matched-text display.
    source: &'s str,
    verbosity: Verbosity,
    colors: Colors,
    /// Nesting depth of the node currently being evaluated.
    depth: usize,
    lines: Vec<String>,
}

impl<'g, 's> PrintTracer<'g, 's> {
    pub fn new(grammar: &'g Grammar, source: &'s str, verbosity: Verbosity, colors: Colors) -> Self {
        Self {
            grammar,
            source,
            verbosity,
            colors,
            depth: 0,
            lines: Vec::new(),
        }
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// All lines joined with newlines.
    pub fn finish(self) -> String {
        let mut out = self.lines.join("\n");
        if !out.is_empty() {
            out.push('\n');
        }
        out
    }

    /// Print all trace lines.
    pub fn print(&self) {
        for line in &self.lines {
            println!("{}", line);
        }
    }

    fn shows(&self, node: NodeId) -> bool {
        match self.verbosity {
            Verbosity::Default => self.grammar.node(node).is_leaf(),
            Verbosity::Verbose | Verbosity::VeryVerbose => true,
        }
    }

    fn push(&mut self, content: String) {
        let indent = "  ".repeat(self.depth);
        self.lines.push(format!("{indent}{content}"));
    }
}

impl Tracer for PrintTracer<'_, '_> {
    fn trace_enter(&mut self, node: NodeId, position: usize) {
        if self.verbosity != Verbosity::Default {
            let c = self.colors;
            let description = self.grammar.describe(node);
            self.push(format!(
                "{}>{} {node} {}{description}{} @{position}",
                c.dim, c.reset, c.blue, c.reset
            ));
        }
        self.depth += 1;
    }

    fn trace_success(&mut self, node: NodeId, start: usize, success: &Success) {
        self.depth -= 1;
        if !self.shows(node) {
            return;
        }

        let c = self.colors;
        let description = self.grammar.describe(node);
        let end = success.position;
        let mut line = format!("{}ok{} {node} {description} {start}..{end}", c.green, c.reset);
        if self.verbosity == Verbosity::VeryVerbose {
            let text = self.source.get(start..end).unwrap_or_default();
            line.push_str(&format!(" {}{text:?}{}", c.dim, c.reset));
        }
        self.push(line);
    }

    fn trace_failure(&mut self, node: NodeId, _start: usize, failure: &Failure) {
        self.depth -= 1;
        if !self.shows(node) {
            return;
        }

        let c = self.colors;
        let description = self.grammar.describe(node);
        self.push(format!(
            "{}fail{} {node} {description} @{} expected {}",
            c.red, c.reset, failure.position, failure.expected
        ));
    }
}
