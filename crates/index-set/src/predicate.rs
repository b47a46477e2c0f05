use compare_op::{Column, CompareError, CompareOperator, Scalar};
use tracing::debug;

use crate::error::Result;
use crate::set::{low_mask, IndexSet};
use crate::WORD_BITS;

impl IndexSet {
    /// Narrow the set by a comparison over `values`.
    ///
    /// For every `i < values.len()` the result contains `i` iff `self`
    /// contains `i` and `values[i] <op> value` holds. Indices at or beyond
    /// `values.len()` are carried over from `self` unchanged. The result can
    /// address at least `values.len()` indices.
    ///
    /// Only rows still present in `self` are compared.
    pub fn and_where<T: PartialOrd>(
        &self,
        values: &[T],
        op: CompareOperator,
        value: &T,
    ) -> IndexSet {
        self.and_matching(values.len(), |i| op.evaluate(&values[i], value))
    }

    /// Like [`IndexSet::and_where`], for data whose element type is only
    /// known at runtime.
    ///
    /// Fails without doing any work if `column` and `value` hold different
    /// types.
    pub fn and_where_column(
        &self,
        column: Column<'_>,
        op: CompareOperator,
        value: Scalar<'_>,
    ) -> Result<IndexSet> {
        let set = match (column, value) {
            (Column::Bool(values), Scalar::Bool(v)) => self.and_where(values, op, &v),
            (Column::I64(values), Scalar::I64(v)) => self.and_where(values, op, &v),
            (Column::U64(values), Scalar::U64(v)) => self.and_where(values, op, &v),
            (Column::F64(values), Scalar::F64(v)) => self.and_where(values, op, &v),
            (Column::Str(values), Scalar::Str(v)) => {
                self.and_matching(values.len(), |i| op.evaluate(values[i].as_str(), v))
            }
            (column, value) => {
                debug!(
                    column = %column.kind(),
                    value = %value.kind(),
                    "rejecting comparison between mismatched types"
                );
                return Err(CompareError::TypeMismatch {
                    column: column.kind(),
                    value: value.kind(),
                }
                .into());
            }
        };

        Ok(set)
    }

    /// Clear every index `i < len` of a copy of `self` for which
    /// `matches(i)` is false.
    pub(crate) fn and_matching(
        &self,
        len: usize,
        mut matches: impl FnMut(usize) -> bool,
    ) -> IndexSet {
        let mut result = self.clone();
        result.ensure_capacity(len);

        for (w, word) in result.words_mut().iter_mut().enumerate() {
            let start = w * WORD_BITS;
            if start >= len {
                break;
            }

            let span = (len - start).min(WORD_BITS);
            let mut candidates = if span == WORD_BITS {
                *word
            } else {
                *word & low_mask(span)
            };

            while candidates != 0 {
                let offset = candidates.trailing_zeros() as usize;
                if !matches(start + offset) {
                    *word &= !(1u64 << offset);
                }
                candidates &= candidates - 1;
            }
        }

        result
    }
}
