//! The arithmetic grammar.
//!
//! ```text
//! root       = ws expression EOF
//! expression = term expr_tail
//! expr_tail  = (addop term expr_tail)?
//! term       = operand term_tail
//! term_tail  = (mulop operand term_tail)?
//! operand    = number | "(" expression ")"
//! ```
//!
//! Every token swallows the whitespace that follows it.

use llparse_core::{Value, ValueError};
use llparse_lib::{Grammar, GrammarBuilder, NodeId, ParseLimits};

use crate::{Expr, Result};

/// A compiled arithmetic grammar.
pub struct Calculator {
    grammar: Grammar,
    root: NodeId,
}

impl Calculator {
    pub fn new() -> Result<Self> {
        let (grammar, root) = build()?;
        Ok(Self { grammar, root })
    }

    pub fn with_limits(mut self, limits: ParseLimits) -> Self {
        self.grammar = self.grammar.with_limits(limits);
        self
    }

    pub fn grammar(&self) -> &Grammar {
        &self.grammar
    }

    /// Entry node: a whole expression followed by end of input.
    pub fn root(&self) -> NodeId {
        self.root
    }

    pub fn parse(&self, text: &str) -> Result<Expr> {
        let value = self.grammar.parse(self.root, text)?;
        Ok(Expr::try_from(value)?)
    }

    pub fn evaluate(&self, text: &str) -> Result<i64> {
        Ok(self.parse(text)?.eval()?)
    }
}

fn build() -> llparse_lib::Result<(Grammar, NodeId)> {
    let mut b = GrammarBuilder::new();
    let ws = b.optional_whitespace();

    let digits = b.pattern(r"\d+");
    let digits = b.skip(digits, ws);
    let number = b.try_map(digits, parse_number);

    let lparen = b.literal("(");
    let lparen = b.skip(lparen, ws);
    let rparen = b.literal(")");
    let rparen = b.skip(rparen, ws);
    let addop = b.pattern("[+-]");
    let addop = b.skip(addop, ws);
    let mulop = b.pattern("[*/]");
    let mulop = b.skip(mulop, ws);

    let slot = b.declare("expression");
    let nested = b.lazy(slot);
    let group = b.then(lparen, nested);
    let group = b.skip(group, rparen);
    let operand = b.either(number, group);

    let term = left_chain(&mut b, "term_tail", operand, mulop);
    let expression = left_chain(&mut b, "expression_tail", term, addop);
    b.define(slot, expression);

    let body = b.then(ws, expression);
    let end = b.end_of_input();
    let root = b.skip(body, end);

    Ok((b.build()?, root))
}

fn parse_number(value: Value) -> std::result::Result<Value, ValueError> {
    let text = value.into_text()?;
    let n: i64 = text
        .parse()
        .map_err(|_| ValueError::custom(format!("number `{text}` is out of range")))?;
    Ok(Value::tagged("number", Value::Int(n)))
}

/// `operand (op operand)*`, folded into left-associative binary nodes.
///
/// The tail is right-recursive through `optional`, so a failed attempt to
/// continue the chain stays visible to whatever comes after it.
fn left_chain(b: &mut GrammarBuilder, name: &str, operand: NodeId, op: NodeId) -> NodeId {
    let slot = b.declare(name);
    let rest = b.lazy(slot);
    let step = b.sequence([op, operand]);
    let more = b.sequence([step, rest]);
    let tail = b.optional(more);
    b.define(slot, tail);

    let chain = b.sequence([operand, tail]);
    b.try_map(chain, fold_left)
}

/// Folds `[first, [[op, right], [[op, right], ... null]]]`.
fn fold_left(value: Value) -> std::result::Result<Value, ValueError> {
    let (mut left, mut tail) = value.into_pair()?;
    while !tail.is_null() {
        let (step, rest) = tail.into_pair()?;
        let (op, right) = step.into_pair()?;
        left = Value::tagged(
            "binary",
            Value::Object(vec![
                ("op".to_owned(), op),
                ("left".to_owned(), left),
                ("right".to_owned(), right),
            ]),
        );
        tail = rest;
    }
    Ok(left)
}
