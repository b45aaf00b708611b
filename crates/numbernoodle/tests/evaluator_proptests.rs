//! Property-based tests for the tokenizer, evaluator and history

use numbernoodle::prelude::*;
use proptest::prelude::*;

// ===== Strategy definitions =====

/// Expression tree used as the reference evaluator
#[derive(Debug, Clone)]
enum Expr {
    Num(u32),
    Bin(Box<Expr>, char, Box<Expr>),
}

impl Expr {
    /// Renders with every binary operation parenthesized
    fn render(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Bin(l, op, r) => format!("({} {op} {})", l.render(), r.render()),
        }
    }

    fn eval(&self) -> f64 {
        match self {
            Self::Num(n) => f64::from(*n),
            Self::Bin(l, op, r) => {
                let (l, r) = (l.eval(), r.eval());
                match op {
                    '+' => l + r,
                    '-' => l - r,
                    '*' => l * r,
                    _ => l / r,
                }
            }
        }
    }
}

fn operator_strategy() -> impl Strategy<Value = char> {
    prop_oneof![Just('+'), Just('-'), Just('*'), Just('/')]
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = (0u32..1000).prop_map(Expr::Num);
    leaf.prop_recursive(6, 48, 2, |inner| {
        (inner.clone(), operator_strategy(), inner)
            .prop_map(|(l, op, r)| Expr::Bin(Box::new(l), op, Box::new(r)))
    })
}

/// Strings over the expression alphabet
fn alphabet_strategy() -> impl Strategy<Value = String> {
    "[0-9.+*/() -]{0,40}"
}

fn same_value(a: f64, b: f64) -> bool {
    a == b || (a.is_nan() && b.is_nan())
}

// ===== Tokenizer properties =====

proptest! {
    #[test]
    fn prop_tokens_concatenate_to_input(input in "\\PC{0,60}") {
        let rebuilt: String = tokenize(&input).iter().map(Token::value).collect();
        prop_assert_eq!(rebuilt, input);
    }

    #[test]
    fn prop_token_positions_are_contiguous(input in "\\PC{0,60}") {
        let mut expected = 0;
        for token in tokenize(&input) {
            prop_assert_eq!(token.position(), expected);
            prop_assert!(!token.value().is_empty());
            expected = token.end();
        }
        prop_assert_eq!(expected, input.len());
    }

    #[test]
    fn prop_numbers_start_with_digit(input in alphabet_strategy()) {
        for token in tokenize(&input).iter().filter(|t| t.is_number()) {
            prop_assert!(token.value().starts_with(|c: char| c.is_ascii_digit()));
            prop_assert!(token.value().matches('.').count() <= 1);
        }
    }
}

// ===== Evaluator properties =====

proptest! {
    #[test]
    fn prop_parenthesized_matches_tree(expr in expr_strategy()) {
        let rendered = expr.render();
        let result = evaluate(&rendered);
        prop_assert!(result.is_ok(), "{rendered}: {result:?}");
        let value = result.unwrap_or_default();
        prop_assert!(same_value(value, expr.eval()), "{rendered}: {value} != {}", expr.eval());
    }

    #[test]
    fn prop_precedence_without_parentheses(
        a in 0u32..100,
        b in 0u32..100,
        c in 1u32..100,
        op1 in operator_strategy(),
        op2 in operator_strategy(),
    ) {
        let input = format!("{a} {op1} {b} {op2} {c}");
        let (a, b, c) = (f64::from(a), f64::from(b), f64::from(c));
        let tight = |op: char| op == '*' || op == '/';
        let apply = |l: f64, op: char, r: f64| match op {
            '+' => l + r,
            '-' => l - r,
            '*' => l * r,
            _ => l / r,
        };
        let expected = if tight(op2) && !tight(op1) {
            apply(a, op1, apply(b, op2, c))
        } else {
            apply(apply(a, op1, b), op2, c)
        };
        let value = evaluate(&input).unwrap_or(f64::NAN);
        prop_assert!(same_value(value, expected), "{input}: {value} != {expected}");
    }

    #[test]
    fn prop_never_panics_on_alphabet(input in alphabet_strategy()) {
        let _ = evaluate(&input);
    }

    #[test]
    fn prop_balanced_alphabet_input_never_unbalanced(input in alphabet_strategy()) {
        let tokens = tokenize(&input);
        if check_balance(&tokens).is_ok() {
            let result = evaluate(&input);
            let unbalanced = matches!(
                result,
                Err(CalcError::Syntax(SyntaxError::UnbalancedParentheses { .. }))
            );
            prop_assert!(!unbalanced);
        }
    }

    #[test]
    fn prop_reject_policy_errors_only_on_zero_divisor(a in 0u32..1000, b in 0u32..1000) {
        let evaluator = Evaluator::new().with_division_policy(DivisionPolicy::Reject);
        let result = evaluator.evaluate(&format!("{a} / {b}"));
        if b == 0 {
            prop_assert!(result.is_err());
        } else {
            prop_assert_eq!(result, Ok(f64::from(a) / f64::from(b)));
        }
    }

    #[test]
    fn prop_strict_rejects_any_letter(prefix in 0u32..100, letter in "[a-z]") {
        let input = format!("{prefix} + {letter}");
        let rejected = matches!(
            evaluate(&input),
            Err(CalcError::Syntax(SyntaxError::UnrecognizedCharacter { .. }))
        );
        prop_assert!(rejected);
    }
}

// ===== History properties =====

proptest! {
    #[test]
    fn prop_history_never_exceeds_capacity(
        capacity in 1usize..20,
        inputs in prop::collection::vec("[0-9]{1,3}( [+*] [0-9]{1,3})?", 0..60),
    ) {
        let config = SessionConfig::default().with_history_capacity(capacity);
        let mut session = Session::with_config(&config);
        for input in &inputs {
            session.submit(input);
            prop_assert!(session.history().len() <= capacity);
        }
        prop_assert_eq!(session.history().len(), inputs.len().min(capacity));

        // The newest entries survive eviction, in order
        let kept: Vec<&str> = session.history().iter().map(|e| e.expression.as_str()).collect();
        let tail: Vec<&str> = inputs[inputs.len() - kept.len()..].iter().map(String::as_str).collect();
        prop_assert_eq!(kept, tail);
    }
}
