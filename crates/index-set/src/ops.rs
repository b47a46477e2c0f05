use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Sub, SubAssign};

use crate::set::IndexSet;

// All three operations share one word-wise walker and differ only in the
// word op. Words missing from the shorter operand read as zero, so:
//
//   Operation | Word op  | Tail (only in one side)
//   ----------+----------+------------------------
//   AND       | a & b    | 0
//   OR        | a | b    | the present word
//   AND-NOT   | a & !b   | a's word, or 0 if only b has it

impl IndexSet {
    /// Intersection. The result has the larger of the two capacities.
    pub fn and(&self, other: &IndexSet) -> IndexSet {
        combine(self, other, |a, b| a & b)
    }

    /// Indices in `self` that are not in `other`. The result has the larger
    /// of the two capacities.
    pub fn and_not(&self, other: &IndexSet) -> IndexSet {
        combine(self, other, |a, b| a & !b)
    }

    /// Union. The result has the larger of the two capacities.
    pub fn or(&self, other: &IndexSet) -> IndexSet {
        combine(self, other, |a, b| a | b)
    }
}

fn combine(lhs: &IndexSet, rhs: &IndexSet, op: impl Fn(u64, u64) -> u64) -> IndexSet {
    let (a, b) = (lhs.words(), rhs.words());
    let len = a.len().max(b.len());

    let words = (0..len)
        .map(|i| {
            let x = a.get(i).copied().unwrap_or(0);
            let y = b.get(i).copied().unwrap_or(0);
            op(x, y)
        })
        .collect();

    IndexSet::from_words(words)
}

fn combine_assign(lhs: &mut IndexSet, rhs: &IndexSet, op: impl Fn(u64, u64) -> u64) {
    lhs.ensure_capacity(rhs.capacity());

    let (head, tail) = lhs.words_mut().split_at_mut(rhs.words().len());
    for (x, &y) in head.iter_mut().zip(rhs.words()) {
        *x = op(*x, y);
    }
    for x in tail {
        *x = op(*x, 0);
    }
}

impl BitAnd for &IndexSet {
    type Output = IndexSet;

    fn bitand(self, rhs: Self) -> IndexSet {
        self.and(rhs)
    }
}

impl BitOr for &IndexSet {
    type Output = IndexSet;

    fn bitor(self, rhs: Self) -> IndexSet {
        self.or(rhs)
    }
}

impl Sub for &IndexSet {
    type Output = IndexSet;

    fn sub(self, rhs: Self) -> IndexSet {
        self.and_not(rhs)
    }
}

impl BitAndAssign<&IndexSet> for IndexSet {
    fn bitand_assign(&mut self, rhs: &IndexSet) {
        combine_assign(self, rhs, |a, b| a & b);
    }
}

impl BitOrAssign<&IndexSet> for IndexSet {
    fn bitor_assign(&mut self, rhs: &IndexSet) {
        combine_assign(self, rhs, |a, b| a | b);
    }
}

impl SubAssign<&IndexSet> for IndexSet {
    fn sub_assign(&mut self, rhs: &IndexSet) {
        combine_assign(self, rhs, |a, b| a & !b);
    }
}
