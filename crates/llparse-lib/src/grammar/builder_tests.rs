use crate::Error;

use super::{Case, GrammarBuilder, GrammarError, NodeId};

fn build_errors(b: GrammarBuilder) -> Vec<GrammarError> {
    match b.build() {
        Err(Error::InvalidGrammar(errors)) => errors,
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("grammar should be invalid"),
    }
}

#[test]
fn empty_literal() {
    let mut b = GrammarBuilder::new();
    b.literal("");

    assert_eq!(build_errors(b), vec![GrammarError::EmptyLiteral]);
}

#[test]
fn empty_pattern() {
    let mut b = GrammarBuilder::new();
    b.pattern("");

    assert_eq!(build_errors(b), vec![GrammarError::EmptyPattern]);
}

#[test]
fn malformed_pattern() {
    let mut b = GrammarBuilder::new();
    b.pattern("(unclosed");

    let errors = build_errors(b);
    assert_eq!(errors.len(), 1);
    assert!(matches!(
        &errors[0],
        GrammarError::InvalidPattern { pattern, .. } if pattern == "(unclosed"
    ));
}

#[test]
fn missing_group() {
    let mut b = GrammarBuilder::new();
    b.pattern_with(r"(\d+)", 2, Case::Sensitive);

    assert_eq!(
        build_errors(b),
        vec![GrammarError::InvalidGroup {
            pattern: r"(\d+)".to_owned(),
            group: 2,
            available: 2,
        }]
    );
}

#[test]
fn empty_combinators() {
    let mut b = GrammarBuilder::new();
    b.sequence([]);
    b.alternative(Vec::new());

    assert_eq!(
        build_errors(b),
        vec![
            GrammarError::EmptyCombinator {
                combinator: "sequence"
            },
            GrammarError::EmptyCombinator {
                combinator: "alternative"
            },
        ]
    );
}

#[test]
fn inverted_bounds() {
    let mut b = GrammarBuilder::new();
    let x = b.literal("x");
    b.repeat(x, 3, Some(2));

    assert_eq!(
        build_errors(b),
        vec![GrammarError::InvalidRepeatBounds { min: 3, max: 2 }]
    );
}

#[test]
fn foreign_handle() {
    let mut other = GrammarBuilder::new();
    other.literal("a");
    let foreign = other.literal("b");

    let mut b = GrammarBuilder::new();
    b.zero_or_more(foreign);

    assert_eq!(
        build_errors(b),
        vec![GrammarError::UnknownNode { node: NodeId(1) }]
    );
}

#[test]
fn undefined_slot() {
    let mut b = GrammarBuilder::new();
    let slot = b.declare("expr");
    b.lazy(slot);

    assert_eq!(
        build_errors(b),
        vec![GrammarError::UndefinedSlot {
            name: "expr".to_owned()
        }]
    );
}

#[test]
fn slot_redefined() {
    let mut b = GrammarBuilder::new();
    let slot = b.declare("expr");
    let x = b.literal("x");
    let y = b.literal("y");
    b.define(slot, x);
    b.define(slot, y);

    assert_eq!(
        build_errors(b),
        vec![GrammarError::SlotRedefined {
            name: "expr".to_owned()
        }]
    );
}

#[test]
fn lazy_cycle() {
    let mut b = GrammarBuilder::new();
    let a = b.declare("a");
    let c = b.declare("c");
    let to_c = b.lazy(c);
    let to_a = b.lazy(a);
    b.define(a, to_c);
    b.define(c, to_a);

    assert_eq!(
        build_errors(b),
        vec![
            GrammarError::LazyCycle {
                name: "a".to_owned()
            },
            GrammarError::LazyCycle {
                name: "c".to_owned()
            },
        ]
    );
}

#[test]
fn self_lazy_cycle() {
    let mut b = GrammarBuilder::new();
    let slot = b.declare("loop");
    let itself = b.lazy(slot);
    b.define(slot, itself);

    assert_eq!(
        build_errors(b),
        vec![GrammarError::LazyCycle {
            name: "loop".to_owned()
        }]
    );
}

#[test]
fn lazy_chain_to_real_node_is_valid() {
    let mut b = GrammarBuilder::new();
    let outer = b.declare("outer");
    let inner = b.declare("inner");
    let to_inner = b.lazy(inner);
    let x = b.literal("x");
    b.define(outer, to_inner);
    b.define(inner, x);
    let root = b.lazy(outer);

    let grammar = b.build().unwrap();
    assert_eq!(grammar.run(root, "x").unwrap().position(), 1);
}

#[test]
fn errors_are_collected() {
    let mut b = GrammarBuilder::new();
    b.literal("");
    let x = b.literal("x");
    b.repeat(x, 2, Some(1));
    b.declare("never");

    let err = b.build().err().unwrap();
    assert_eq!(err.to_string(), "grammar construction failed with 3 errors");
}

#[test]
fn error_messages() {
    insta::assert_snapshot!(
        GrammarError::InvalidGroup { pattern: "a".into(), group: 1, available: 1 },
        @"pattern `a` has no group 1 (groups: 1)"
    );
    insta::assert_snapshot!(
        GrammarError::UnknownNode { node: NodeId(7) },
        @"node #7 does not belong to this grammar"
    );
}

#[test]
fn counts_nodes() {
    let mut b = GrammarBuilder::new();
    assert!(b.is_empty());

    let x = b.literal("x");
    b.skip(x, x);

    // literal, sequence, map
    assert_eq!(b.len(), 3);
    assert_eq!(b.build().unwrap().len(), 3);
}
