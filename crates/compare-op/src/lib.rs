//! Comparison operators for row predicates.
//!
//! This crate provides:
//! - [`CompareOperator`] and the generic [`compare`] function for any
//!   `PartialOrd` element type
//! - [`Column`] and [`Scalar`], borrowed views over dynamically typed data
//!   for callers that only learn the element type at runtime
//!
//! # Examples
//!
//! ```
//! use compare_op::{compare, CompareOperator};
//!
//! let op: CompareOperator = ">=".parse().unwrap();
//! assert!(compare(&10, &7, op));
//! assert!(!compare(&3, &7, op));
//! ```

pub mod error;

mod column;
mod operator;

pub use column::{Column, Scalar, ValueKind};
pub use error::{CompareError, Result};
pub use operator::{compare, CompareOperator};
