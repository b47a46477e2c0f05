//! Dynamically typed views over column data and scalar values.

use std::fmt;

/// The element type carried by a [`Column`] or [`Scalar`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Bool,
    I64,
    U64,
    F64,
    Str,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueKind::Bool => "bool",
            ValueKind::I64 => "i64",
            ValueKind::U64 => "u64",
            ValueKind::F64 => "f64",
            ValueKind::Str => "string",
        };
        f.write_str(name)
    }
}

/// A single reference value to compare column elements against.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Scalar<'a> {
    Bool(bool),
    I64(i64),
    U64(u64),
    F64(f64),
    Str(&'a str),
}

impl Scalar<'_> {
    pub fn kind(&self) -> ValueKind {
        match self {
            Scalar::Bool(_) => ValueKind::Bool,
            Scalar::I64(_) => ValueKind::I64,
            Scalar::U64(_) => ValueKind::U64,
            Scalar::F64(_) => ValueKind::F64,
            Scalar::Str(_) => ValueKind::Str,
        }
    }
}

impl From<bool> for Scalar<'_> {
    fn from(value: bool) -> Self {
        Scalar::Bool(value)
    }
}

impl From<i64> for Scalar<'_> {
    fn from(value: i64) -> Self {
        Scalar::I64(value)
    }
}

impl From<u64> for Scalar<'_> {
    fn from(value: u64) -> Self {
        Scalar::U64(value)
    }
}

impl From<f64> for Scalar<'_> {
    fn from(value: f64) -> Self {
        Scalar::F64(value)
    }
}

impl<'a> From<&'a str> for Scalar<'a> {
    fn from(value: &'a str) -> Self {
        Scalar::Str(value)
    }
}

/// A borrowed, read-only column of values. Row `i` is element `i`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Column<'a> {
    Bool(&'a [bool]),
    I64(&'a [i64]),
    U64(&'a [u64]),
    F64(&'a [f64]),
    Str(&'a [String]),
}

impl Column<'_> {
    /// Number of rows in the column.
    pub fn len(&self) -> usize {
        match self {
            Column::Bool(values) => values.len(),
            Column::I64(values) => values.len(),
            Column::U64(values) => values.len(),
            Column::F64(values) => values.len(),
            Column::Str(values) => values.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Column::Bool(_) => ValueKind::Bool,
            Column::I64(_) => ValueKind::I64,
            Column::U64(_) => ValueKind::U64,
            Column::F64(_) => ValueKind::F64,
            Column::Str(_) => ValueKind::Str,
        }
    }
}

impl<'a> From<&'a [bool]> for Column<'a> {
    fn from(values: &'a [bool]) -> Self {
        Column::Bool(values)
    }
}

impl<'a> From<&'a [i64]> for Column<'a> {
    fn from(values: &'a [i64]) -> Self {
        Column::I64(values)
    }
}

impl<'a> From<&'a [u64]> for Column<'a> {
    fn from(values: &'a [u64]) -> Self {
        Column::U64(values)
    }
}

impl<'a> From<&'a [f64]> for Column<'a> {
    fn from(values: &'a [f64]) -> Self {
        Column::F64(values)
    }
}

impl<'a> From<&'a [String]> for Column<'a> {
    fn from(values: &'a [String]) -> Self {
        Column::Str(values)
    }
}
