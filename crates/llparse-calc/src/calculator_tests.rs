use indoc::indoc;
use llparse_core::ValueError;
use llparse_lib::{Outcome, ParseLimits, RuntimeError};

use crate::{Calculator, EvalError, Expr};

fn calc() -> Calculator {
    Calculator::new().expect("grammar builds")
}

fn tree(text: &str) -> String {
    calc().parse(text).expect("should parse").to_string()
}

fn parse_failure(text: &str) -> String {
    let err = calc().parse(text).unwrap_err();
    err.parse_error()
        .expect("should be a parse error")
        .to_string()
}

#[test]
fn nested_parentheses() {
    insta::assert_snapshot!(tree("( 1 + ( 2 * 3 ) )"), @"[+, 1, [*, 2, 3]]");
}

#[test]
fn precedence() {
    insta::assert_snapshot!(tree("1 + 2 * 3"), @"[+, 1, [*, 2, 3]]");
    insta::assert_snapshot!(tree("1 * 2 + 3"), @"[+, [*, 1, 2], 3]");
    insta::assert_snapshot!(tree("(1 + 2) * 3"), @"[*, [+, 1, 2], 3]");
}

#[test]
fn left_associative() {
    insta::assert_snapshot!(tree("8 - 3 - 2"), @"[-, [-, 8, 3], 2]");
    insta::assert_snapshot!(tree("8/4/2"), @"[/, [/, 8, 4], 2]");
}

#[test]
fn surrounding_whitespace() {
    assert_eq!(calc().parse("  42 \n").unwrap(), Expr::Number(42));

    let multiline = indoc! {"
        (1 +
          2)
        * 3
    "};
    assert_eq!(calc().evaluate(multiline).unwrap(), 9);
}

#[test]
fn truncated_input_expects_operand() {
    insta::assert_snapshot!(
        parse_failure("( 1 + ("),
        @r"parse error at offset 7: expected one of `\d+`, `(`"
    );
    insta::assert_snapshot!(
        parse_failure("1 +"),
        @r"parse error at offset 3: expected one of `\d+`, `(`"
    );
}

#[test]
fn trailing_input_expects_end() {
    insta::assert_snapshot!(
        parse_failure("1 2"),
        @"parse error at offset 2: expected `end of input`"
    );
    insta::assert_snapshot!(
        parse_failure("1 + (2 + ) + 4"),
        @r"parse error at offset 9: expected one of `\d+`, `(`"
    );
}

#[test]
fn unclosed_group_expects_close() {
    insta::assert_snapshot!(parse_failure("(1"), @"parse error at offset 2: expected `)`");
    insta::assert_snapshot!(parse_failure("(1 ]"), @"parse error at offset 3: expected `)`");
}

#[test]
fn empty_input() {
    insta::assert_snapshot!(parse_failure(""), @r"parse error at offset 0: expected one of `\d+`, `(`");
}

#[test]
fn evaluate() {
    let calc = calc();

    assert_eq!(calc.evaluate("( 1 + ( 2 * 3 ) )").unwrap(), 7);
    assert_eq!(calc.evaluate("8 - 3 - 2").unwrap(), 3);
    assert_eq!(calc.evaluate("7 / 2").unwrap(), 3);
}

#[test]
fn evaluation_errors() {
    let calc = calc();

    assert!(matches!(
        calc.evaluate("10 / (5 - 5)"),
        Err(crate::Error::Eval(EvalError::DivisionByZero))
    ));
    assert!(matches!(
        calc.evaluate("9223372036854775807 + 1"),
        Err(crate::Error::Eval(EvalError::Overflow))
    ));
}

#[test]
fn out_of_range_literal_aborts() {
    let err = calc().parse("99999999999999999999").unwrap_err();

    assert!(err.parse_error().is_none());
    match err {
        crate::Error::Grammar(llparse_lib::Error::Runtime(RuntimeError::Map { source, .. })) => {
            assert_eq!(
                source,
                ValueError::custom("number `99999999999999999999` is out of range")
            );
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn deep_nesting_hits_recursion_limit() {
    let calc = calc().with_limits(ParseLimits::new().recursion_limit(64));
    let text = format!("{}1{}", "(".repeat(50), ")".repeat(50));

    assert!(matches!(
        calc.parse(&text),
        Err(crate::Error::Grammar(llparse_lib::Error::Runtime(
            RuntimeError::RecursionLimitExceeded
        )))
    ));
}

#[test]
fn deep_nesting_on_spawned_thread() {
    let text = format!("{}1{}", "(".repeat(300), ")".repeat(300));

    let result = std::thread::spawn(move || calc().evaluate(&text).unwrap())
        .join()
        .unwrap();
    assert_eq!(result, 1);
}

#[test]
fn long_operator_chains() {
    let text = vec!["1"; 500].join(" + ");

    assert_eq!(calc().evaluate(&text).unwrap(), 500);
}

#[test]
fn root_runs_directly() {
    let calc = calc();

    let outcome = calc.grammar().run(calc.root(), "2*3").unwrap();
    assert!(matches!(outcome, Outcome::Success(ref s) if s.position == 3));
}
