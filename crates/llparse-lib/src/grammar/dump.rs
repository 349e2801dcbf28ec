//! Human-readable listing of a grammar's node arena.

use std::fmt::Write as _;

use llparse_core::Colors;

use super::node::{Case, NodeKind};
use super::{Grammar, NodeId};

impl Grammar {
    /// One-line description of a node: its kind and operands.
    pub fn describe(&self, id: NodeId) -> String {
        let Some(kind) = self.nodes.get(id.index()) else {
            return format!("{id} <unknown>");
        };

        let mut out = kind.name().to_string();
        match kind {
            NodeKind::Literal { text, case } => {
                write!(out, " {text:?}{}", case_suffix(*case)).ok();
            }
            NodeKind::Pattern {
                source,
                group,
                case,
                ..
            } => {
                write!(out, " /{source}/").ok();
                if *group != 0 {
                    write!(out, " group {group}").ok();
                }
                out.push_str(case_suffix(*case));
            }
            NodeKind::Sequence(children) | NodeKind::Alternative(children) => {
                for child in children {
                    write!(out, " {child}").ok();
                }
            }
            NodeKind::Repeat {
                child, min, max, ..
            } => {
                write!(out, " {child} {{{min},").ok();
                if let Some(max) = max {
                    write!(out, "{max}").ok();
                }
                out.push('}');
            }
            NodeKind::Map { child, .. } => {
                write!(out, " {child}").ok();
            }
            NodeKind::Label { child, name } => {
                write!(out, " {child} {name:?}").ok();
            }
            NodeKind::Lazy(slot) => {
                write!(
                    out,
                    " {} -> {}",
                    self.slot_name(*slot),
                    self.slot_target(*slot)
                )
                .ok();
            }
            NodeKind::EndOfInput | NodeKind::Empty | NodeKind::Invalid => {}
        }
        out
    }

    /// Lists every node followed by the slot table.
    ///
    /// ```text
    /// #0 literal "("
    /// #1 repeat #0 {0,}
    /// slot expr -> #1
    /// ```
    pub fn dump(&self, colors: Colors) -> String {
        let c = colors;
        let mut out = String::new();

        for index in 0..self.nodes.len() {
            let id = NodeId(index as u32);
            let description = self.describe(id);
            let (kind, rest) = description
                .split_once(' ')
                .unwrap_or((description.as_str(), ""));
            let sep = if rest.is_empty() { "" } else { " " };
            writeln!(
                out,
                "{}{id}{} {}{kind}{}{sep}{rest}",
                c.dim, c.reset, c.blue, c.reset
            )
            .ok();
        }

        for (name, target) in &self.slots {
            writeln!(out, "{}slot{} {name} -> {target}", c.dim, c.reset).ok();
        }

        out
    }
}

fn case_suffix(case: Case) -> &'static str {
    match case {
        Case::Sensitive => "",
        Case::Insensitive => " (i)",
    }
}
