//! A word-packed bit vector over a bounded index domain.
//!
//! [`IndexSet`] marks which indices in `0..capacity` are members, typically
//! the rows of a dataset that satisfy a filter. Filters are narrowed by
//! chaining [`IndexSet::and_where`] calls over successive columns and
//! combined with [`IndexSet::and`], [`IndexSet::or`] and
//! [`IndexSet::and_not`].
//!
//! Mutation policy: `set`, `ensure_capacity`, `none` and `all` modify the
//! receiver in place. The set algebra and predicate methods leave their
//! operands untouched and return a new `IndexSet`.
//!
//! ```
//! use compare_op::CompareOperator;
//! use index_set::IndexSet;
//!
//! let ages = [31, 17, 45, 22];
//! let scores = [88, 95, 40, 71];
//!
//! let mut rows = IndexSet::new();
//! rows.all(ages.len());
//!
//! let rows = rows
//!     .and_where(&ages, CompareOperator::GreaterOrEqual, &18)
//!     .and_where(&scores, CompareOperator::GreaterThan, &50);
//!
//! assert_eq!(rows.iter().collect::<Vec<_>>(), vec![0, 3]);
//! ```

pub mod error;

mod ops;
mod predicate;
mod set;

#[cfg(test)]
mod tests_ops;

pub use compare_op::{Column, CompareOperator, Scalar};
pub use error::{IndexSetError, Result};
pub use set::{IndexSet, Iter};

/// Number of indices stored in each backing word.
pub const WORD_BITS: usize = u64::BITS as usize;

/// Number of words needed to address `length` indices.
#[inline]
pub(crate) fn words_for(length: usize) -> usize {
    length.div_ceil(WORD_BITS)
}
