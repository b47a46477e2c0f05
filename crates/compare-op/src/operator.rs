use std::fmt;
use std::str::FromStr;

use crate::error::CompareError;

/// A binary comparison between an element and a reference value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CompareOperator {
    Equal,
    NotEqual,
    LessThan,
    LessOrEqual,
    GreaterThan,
    GreaterOrEqual,
}

impl CompareOperator {
    /// Every operator, in declaration order.
    pub const ALL: [CompareOperator; 6] = [
        CompareOperator::Equal,
        CompareOperator::NotEqual,
        CompareOperator::LessThan,
        CompareOperator::LessOrEqual,
        CompareOperator::GreaterThan,
        CompareOperator::GreaterOrEqual,
    ];

    /// Evaluate `a <op> b`.
    ///
    /// Follows `PartialOrd`: when `a` and `b` are unordered (e.g. a NaN is
    /// involved) only `NotEqual` holds.
    #[inline]
    pub fn evaluate<T: PartialOrd + ?Sized>(self, a: &T, b: &T) -> bool {
        match self {
            CompareOperator::Equal => a == b,
            CompareOperator::NotEqual => a != b,
            CompareOperator::LessThan => a < b,
            CompareOperator::LessOrEqual => a <= b,
            CompareOperator::GreaterThan => a > b,
            CompareOperator::GreaterOrEqual => a >= b,
        }
    }

    /// The operator that holds exactly when `self` does not, for totally
    /// ordered operands.
    pub fn negate(self) -> Self {
        match self {
            CompareOperator::Equal => CompareOperator::NotEqual,
            CompareOperator::NotEqual => CompareOperator::Equal,
            CompareOperator::LessThan => CompareOperator::GreaterOrEqual,
            CompareOperator::LessOrEqual => CompareOperator::GreaterThan,
            CompareOperator::GreaterThan => CompareOperator::LessOrEqual,
            CompareOperator::GreaterOrEqual => CompareOperator::LessThan,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            CompareOperator::Equal => "=",
            CompareOperator::NotEqual => "!=",
            CompareOperator::LessThan => "<",
            CompareOperator::LessOrEqual => "<=",
            CompareOperator::GreaterThan => ">",
            CompareOperator::GreaterOrEqual => ">=",
        }
    }
}

/// Evaluate `a <op> b`. Free-function form of [`CompareOperator::evaluate`].
#[inline]
pub fn compare<T: PartialOrd + ?Sized>(a: &T, b: &T, op: CompareOperator) -> bool {
    op.evaluate(a, b)
}

impl fmt::Display for CompareOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for CompareOperator {
    type Err = CompareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let op = match s.trim() {
            "=" | "==" => CompareOperator::Equal,
            "!=" | "<>" => CompareOperator::NotEqual,
            "<" => CompareOperator::LessThan,
            "<=" => CompareOperator::LessOrEqual,
            ">" => CompareOperator::GreaterThan,
            ">=" => CompareOperator::GreaterOrEqual,
            other => match other.to_ascii_lowercase().as_str() {
                "equal" | "equals" => CompareOperator::Equal,
                "notequal" | "notequals" => CompareOperator::NotEqual,
                "lessthan" => CompareOperator::LessThan,
                "lessorequal" | "lessthanorequal" => CompareOperator::LessOrEqual,
                "greaterthan" => CompareOperator::GreaterThan,
                "greaterorequal" | "greaterthanorequal" => CompareOperator::GreaterOrEqual,
                _ => return Err(CompareError::UnknownOperator(s.to_string())),
            },
        };

        Ok(op)
    }
}
