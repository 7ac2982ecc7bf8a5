use kestrel::{
    Error,
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{EvalOptions, Interpreter},
        value::core::Value,
    },
    run,
};
use proptest::prelude::*;

/// A non-negative decimal literal the lexer accepts, such as `42` or
/// `7.125`.
fn literal() -> impl Strategy<Value = String> {
    (0u32..1_000_000, prop::option::of(0u32..1000)).prop_map(|(whole, frac)| match frac {
                                                        Some(frac) => format!("{whole}.{frac}"),
                                                        None => whole.to_string(),
                                                    })
}

fn operator() -> impl Strategy<Value = (BinaryOperator, &'static str)> {
    prop_oneof![Just((BinaryOperator::Add, "+")),
                Just((BinaryOperator::Sub, "-")),
                Just((BinaryOperator::Mul, "*")),
                Just((BinaryOperator::Mod, "%")),]
}

fn apply(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
        BinaryOperator::Mod => left % right,
    }
}

fn assert_same_number(actual: &Value, expected: f64) {
    match actual {
        Value::Number(n) if expected.is_nan() => assert!(n.is_nan(), "expected NaN, got {n}"),
        Value::Number(n) => assert_eq!(n.to_bits(), expected.to_bits(), "{n} != {expected}"),
        other => panic!("expected a number, got {other:?}"),
    }
}

proptest! {
    #[test]
    fn source_arithmetic_matches_ieee(left in literal(), right in literal(), (op, symbol) in operator()) {
        let expected = apply(op, left.parse().unwrap(), right.parse().unwrap());
        let value = run(&format!("{left} {symbol} {right}")).unwrap();

        assert_same_number(&value, expected);
    }

    #[test]
    fn eval_binary_matches_ieee(left in -1.0e12f64..1.0e12, right in -1.0e12f64..1.0e12, (op, _) in operator()) {
        let value = Interpreter::new().eval_binary(op, &Value::Number(left), &Value::Number(right), 1)
                                      .unwrap();

        assert_same_number(&value, apply(op, left, right));
    }

    #[test]
    fn division_by_nonzero_matches_ieee(left in -1.0e12f64..1.0e12, right in 1.0e-6f64..1.0e12) {
        let value = Interpreter::new().eval_binary(BinaryOperator::Div,
                                                   &Value::Number(left),
                                                   &Value::Number(-right),
                                                   1)
                                      .unwrap();

        assert_same_number(&value, left / -right);
    }

    #[test]
    fn dividing_by_zero_always_fails(dividend in literal(), line in 1usize..50) {
        let source = format!("{}{dividend} / (7 - 7)", "\n".repeat(line - 1));

        prop_assert_eq!(run(&source),
                        Err(Error::Runtime(RuntimeError::DivisionByZero { line })));
    }

    #[test]
    fn non_numbers_never_do_arithmetic(text in "[a-z]{0,8}", (op, _) in operator()) {
        let strict = Interpreter::new();
        let lenient = Interpreter::with_options(EvalOptions { lenient_arithmetic: true });
        let left = Value::from(text);
        let right = Value::Number(1.0);

        let is_type_mismatch = matches!(strict.eval_binary(op, &left, &right, 1),
                                        Err(RuntimeError::TypeMismatch { .. }));
        prop_assert!(is_type_mismatch);
        prop_assert_eq!(lenient.eval_binary(op, &left, &right, 1), Ok(Value::Null));
    }
}
