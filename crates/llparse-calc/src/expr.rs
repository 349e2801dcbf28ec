//! Expression trees and their evaluation.

use std::fmt;

use llparse_core::{Value, ValueError, ValueKind};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinaryOp {
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        match symbol {
            "+" => Some(BinaryOp::Add),
            "-" => Some(BinaryOp::Sub),
            "*" => Some(BinaryOp::Mul),
            "/" => Some(BinaryOp::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        }
    }

    /// Checked `i64` arithmetic. Division truncates toward zero.
    pub fn apply(self, left: i64, right: i64) -> Result<i64, EvalError> {
        let result = match self {
            BinaryOp::Add => left.checked_add(right),
            BinaryOp::Sub => left.checked_sub(right),
            BinaryOp::Mul => left.checked_mul(right),
            BinaryOp::Div if right == 0 => return Err(EvalError::DivisionByZero),
            BinaryOp::Div => left.checked_div(right),
        };
        result.ok_or(EvalError::Overflow)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EvalError {
    #[error("division by zero")]
    DivisionByZero,

    #[error("integer overflow")]
    Overflow,
}

/// Arithmetic expression tree.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Expr {
    Number(i64),
    Binary {
        op: BinaryOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    pub fn eval(&self) -> Result<i64, EvalError> {
        match self {
            Expr::Number(n) => Ok(*n),
            Expr::Binary { op, left, right } => op.apply(left.eval()?, right.eval()?),
        }
    }
}

/// Prefix form: `[op, left, right]`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(n) => write!(f, "{n}"),
            Expr::Binary { op, left, right } => write!(f, "[{op}, {left}, {right}]"),
        }
    }
}

/// Reads the tagged values produced by the grammar's mappers.
impl TryFrom<Value> for Expr {
    type Error = ValueError;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        let (tag, data) = match value {
            Value::Tagged { tag, data } => (tag, data),
            other => {
                return Err(ValueError::Mismatch {
                    expected: ValueKind::Tagged,
                    found: other.kind(),
                });
            }
        };
        let Some(data) = data else {
            return Err(ValueError::MissingData(tag));
        };

        match tag.as_str() {
            "number" => Ok(Expr::Number(data.into_int()?)),
            "binary" => {
                let mut fields = *data;
                let symbol = fields.remove_field("op")?.into_text()?;
                let op = BinaryOp::from_symbol(&symbol)
                    .ok_or_else(|| ValueError::custom(format!("unknown operator `{symbol}`")))?;
                let left = Expr::try_from(fields.remove_field("left")?)?;
                let right = Expr::try_from(fields.remove_field("right")?)?;
                Ok(Expr::binary(op, left, right))
            }
            _ => Err(ValueError::custom(format!("unknown expression tag `{tag}`"))),
        }
    }
}
