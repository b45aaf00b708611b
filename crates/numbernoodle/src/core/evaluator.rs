//! Two-stack operator-precedence evaluator
//!
//! Values and pending operators are kept on two stacks; no tree is built.
//! `*` and `/` bind tighter than `+` and `-`, equal precedence folds left to
//! right, and a `-` in operand position negates the operand that follows.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::balance::check_balance;
use crate::core::tokenizer::{tokenize, Token, TokenKind};
use crate::core::{
    CalcError, CalcResult, DivisionPolicy, EvaluationError, Operation, SyntaxError,
};

/// What happens to characters the tokenizer could not classify
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InputPolicy {
    /// Any identifier token is a syntax error
    #[default]
    Strict,
    /// Identifier tokens are dropped whole before evaluation
    Lenient,
}

/// Entry on the operator stack
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pending {
    /// `(` scope marker
    Open,
    /// Binary operator
    Binary(Operation),
    /// Implicit negation from a `-` in operand position
    Negate,
}

impl Pending {
    const NEGATE_PRECEDENCE: u8 = 3;

    const fn precedence(self) -> u8 {
        match self {
            Self::Open => 0,
            Self::Binary(op) => op.precedence(),
            Self::Negate => Self::NEGATE_PRECEDENCE,
        }
    }

    const fn symbol(self) -> char {
        match self {
            Self::Open => '(',
            Self::Binary(op) => op.symbol(),
            Self::Negate => '-',
        }
    }
}

#[derive(Debug)]
struct Stacks {
    values: Vec<f64>,
    operators: Vec<(Pending, usize)>,
    division: DivisionPolicy,
}

impl Stacks {
    fn new(division: DivisionPolicy) -> Self {
        Self {
            values: Vec::new(),
            operators: Vec::new(),
            division,
        }
    }

    fn missing_operand(pending: Pending, position: usize) -> CalcError {
        SyntaxError::MissingOperand {
            operator: pending.symbol(),
            position,
        }
        .into()
    }

    /// Pops one operator and applies it to the value stack
    fn apply_top(&mut self) -> CalcResult<()> {
        let Some((pending, position)) = self.operators.pop() else {
            return Ok(());
        };
        trace!(operator = %pending.symbol(), position, values = ?self.values, "apply");

        match pending {
            Pending::Open => Err(EvaluationError::InvalidOperator {
                operator: pending.symbol(),
            }
            .into()),
            Pending::Negate => {
                let value = self
                    .values
                    .pop()
                    .ok_or_else(|| Self::missing_operand(pending, position))?;
                self.values.push(-value);
                Ok(())
            }
            Pending::Binary(op) => {
                let right = self
                    .values
                    .pop()
                    .ok_or_else(|| Self::missing_operand(pending, position))?;
                let left = self
                    .values
                    .pop()
                    .ok_or_else(|| Self::missing_operand(pending, position))?;
                let value = op.apply(left, right, self.division, position)?;
                self.values.push(value);
                Ok(())
            }
        }
    }

    /// Applies pending operators that bind at least as tightly as `precedence`
    fn reduce(&mut self, precedence: u8) -> CalcResult<()> {
        while let Some(&(top, _)) = self.operators.last() {
            if top == Pending::Open || top.precedence() < precedence {
                break;
            }
            self.apply_top()?;
        }
        Ok(())
    }

    /// Applies operators back to the matching `(` and discards it
    fn close(&mut self, position: usize) -> CalcResult<()> {
        loop {
            match self.operators.last() {
                None => return Err(SyntaxError::UnbalancedParentheses { position }.into()),
                Some((Pending::Open, _)) => {
                    self.operators.pop();
                    return Ok(());
                }
                Some(_) => self.apply_top()?,
            }
        }
    }

    fn finish(mut self) -> CalcResult<f64> {
        while !self.operators.is_empty() {
            self.apply_top()?;
        }
        match self.values.as_slice() {
            [value] => Ok(*value),
            values => Err(SyntaxError::MalformedExpression {
                values: values.len(),
            }
            .into()),
        }
    }
}

/// Expression evaluator
///
/// Stateless apart from its two policies, so one evaluator can be shared by
/// any number of callers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Evaluator {
    input_policy: InputPolicy,
    division_policy: DivisionPolicy,
}

impl Evaluator {
    /// Creates an evaluator with strict input and IEEE division
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the input policy
    #[must_use]
    pub const fn with_input_policy(mut self, policy: InputPolicy) -> Self {
        self.input_policy = policy;
        self
    }

    /// Sets the division-by-zero policy
    #[must_use]
    pub const fn with_division_policy(mut self, policy: DivisionPolicy) -> Self {
        self.division_policy = policy;
        self
    }

    /// The input policy in use
    #[must_use]
    pub const fn input_policy(&self) -> InputPolicy {
        self.input_policy
    }

    /// The division policy in use
    #[must_use]
    pub const fn division_policy(&self) -> DivisionPolicy {
        self.division_policy
    }

    /// Evaluates a string expression
    pub fn evaluate(&self, expr: &str) -> CalcResult<f64> {
        self.evaluate_tokenized(&tokenize(expr))
    }

    /// Evaluates the full token stream of an expression
    ///
    /// Applies the input policy, then the balance validator, then the
    /// two-stack evaluation. The evaluator never runs on unbalanced input.
    pub fn evaluate_tokenized(&self, tokens: &[Token]) -> CalcResult<f64> {
        let tokens = self.sanitize(tokens)?;
        check_balance(&tokens)?;
        let result = self.evaluate_tokens(&tokens);
        debug!(tokens = tokens.len(), ?result, "evaluated");
        result
    }

    /// Drops whitespace and applies the input policy to identifier tokens
    pub fn sanitize(&self, tokens: &[Token]) -> Result<Vec<Token>, SyntaxError> {
        let mut kept = Vec::with_capacity(tokens.len());
        for token in tokens {
            match token.kind() {
                TokenKind::Whitespace => {}
                TokenKind::Identifier => match self.input_policy {
                    InputPolicy::Strict => {
                        return Err(SyntaxError::UnrecognizedCharacter {
                            character: token.value().to_string(),
                            position: token.position(),
                        });
                    }
                    InputPolicy::Lenient => {
                        debug!(character = token.value(), position = token.position(), "dropped");
                    }
                },
                TokenKind::Number | TokenKind::Operator => kept.push(token.clone()),
            }
        }
        Ok(kept)
    }

    /// Runs the two-stack algorithm over `tokens`
    ///
    /// No input policy or balance check is applied here: whitespace is
    /// skipped, an identifier is a syntax error, and a `(` left open reaches
    /// the apply step as an invalid operator.
    pub fn evaluate_tokens(&self, tokens: &[Token]) -> CalcResult<f64> {
        let mut stacks = Stacks::new(self.division_policy);
        let mut expect_operand = true;

        for token in tokens {
            let position = token.position();
            match token.kind() {
                TokenKind::Whitespace => {}
                TokenKind::Identifier => {
                    return Err(SyntaxError::UnrecognizedCharacter {
                        character: token.value().to_string(),
                        position,
                    }
                    .into());
                }
                TokenKind::Number => {
                    let value: f64 =
                        token
                            .value()
                            .parse()
                            .map_err(|_| SyntaxError::InvalidNumber {
                                literal: token.value().to_string(),
                                position,
                            })?;
                    stacks.values.push(value);
                    expect_operand = false;
                }
                TokenKind::Operator => match token.symbol().unwrap_or_default() {
                    '(' => {
                        stacks.operators.push((Pending::Open, position));
                        expect_operand = true;
                    }
                    ')' => {
                        stacks.close(position)?;
                        expect_operand = false;
                    }
                    '-' if expect_operand => {
                        stacks.operators.push((Pending::Negate, position));
                    }
                    symbol => {
                        let op = Operation::from_symbol(symbol)
                            .ok_or(EvaluationError::InvalidOperator { operator: symbol })?;
                        stacks.reduce(op.precedence())?;
                        stacks.operators.push((Pending::Binary(op), position));
                        expect_operand = true;
                    }
                },
            }
        }

        stacks.finish()
    }
}

/// Evaluates `expr` with a default evaluator
pub fn evaluate(expr: &str) -> CalcResult<f64> {
    Evaluator::new().evaluate(expr)
}
