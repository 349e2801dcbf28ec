use llparse_core::{Value, ValueError, ValueKind};

use crate::{BinaryOp, EvalError, Expr};

fn binary(op: &str, left: Value, right: Value) -> Value {
    Value::tagged(
        "binary",
        Value::Object(vec![
            ("op".to_owned(), Value::from(op)),
            ("left".to_owned(), left),
            ("right".to_owned(), right),
        ]),
    )
}

fn number(n: i64) -> Value {
    Value::tagged("number", Value::Int(n))
}

#[test]
fn reads_tagged_tree() {
    let value = binary("-", number(5), binary("*", number(2), number(3)));

    let expr = Expr::try_from(value).unwrap();

    assert_eq!(
        expr,
        Expr::binary(
            BinaryOp::Sub,
            Expr::Number(5),
            Expr::binary(BinaryOp::Mul, Expr::Number(2), Expr::Number(3)),
        )
    );
    insta::assert_snapshot!(expr, @"[-, 5, [*, 2, 3]]");
    assert_eq!(expr.eval(), Ok(-1));
}

#[test]
fn rejects_untagged_value() {
    assert_eq!(
        Expr::try_from(Value::Int(1)),
        Err(ValueError::Mismatch {
            expected: ValueKind::Tagged,
            found: ValueKind::Int,
        })
    );
}

#[test]
fn rejects_unknown_operator() {
    let err = Expr::try_from(binary("%", number(1), number(2))).unwrap_err();

    assert_eq!(err.to_string(), "unknown operator `%`");
}

#[test]
fn rejects_missing_payload() {
    assert_eq!(
        Expr::try_from(Value::tag("number")),
        Err(ValueError::MissingData("number".to_owned()))
    );
}

#[test]
fn rejects_missing_field() {
    let value = Value::tagged(
        "binary",
        Value::Object(vec![("op".to_owned(), Value::from("+"))]),
    );

    assert_eq!(
        Expr::try_from(value),
        Err(ValueError::MissingField("left".to_owned()))
    );
}

#[test]
fn checked_arithmetic() {
    assert_eq!(BinaryOp::Add.apply(i64::MAX, 1), Err(EvalError::Overflow));
    assert_eq!(BinaryOp::Sub.apply(i64::MIN, 1), Err(EvalError::Overflow));
    assert_eq!(BinaryOp::Mul.apply(i64::MAX, 2), Err(EvalError::Overflow));
    assert_eq!(BinaryOp::Div.apply(i64::MIN, -1), Err(EvalError::Overflow));
    assert_eq!(BinaryOp::Div.apply(1, 0), Err(EvalError::DivisionByZero));
    assert_eq!(BinaryOp::Div.apply(-7, 2), Ok(-3));
}

#[test]
fn operator_symbols() {
    for op in [BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div] {
        assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
    }
    assert_eq!(BinaryOp::from_symbol("^"), None);
}
