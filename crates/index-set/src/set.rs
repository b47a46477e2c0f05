use std::hash::{Hash, Hasher};

use tracing::trace;

use crate::error::{IndexSetError, Result};
use crate::{words_for, WORD_BITS};

/// A set of indices backed by a packed sequence of 64-bit words.
///
/// Index `i` is stored in word `i / 64` at bit `i % 64`. The capacity is
/// always a whole number of words and never shrinks. Every index in
/// `0..capacity` is addressable; words added by growth start zeroed.
///
/// Equality treats missing trailing words as zero, so two sets with the
/// same members compare equal regardless of their capacities.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "allocative", derive(allocative::Allocative))]
pub struct IndexSet {
    words: Vec<u64>,
}

impl IndexSet {
    /// Create an empty set with zero capacity.
    pub fn new() -> Self {
        Self { words: Vec::new() }
    }

    /// Create an empty set able to address at least `length` indices.
    pub fn with_length(length: usize) -> Self {
        Self {
            words: vec![0; words_for(length)],
        }
    }

    pub(crate) fn from_words(words: Vec<u64>) -> Self {
        Self { words }
    }

    /// Total number of addressable indices (a multiple of [`WORD_BITS`]).
    pub fn capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Number of indices currently in the set.
    pub fn count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Returns `true` if no index is set.
    pub fn is_empty(&self) -> bool {
        self.words.iter().all(|&w| w == 0)
    }

    /// The backing words.
    pub fn words(&self) -> &[u64] {
        &self.words
    }

    /// The number of heap-allocated bytes used by this set.
    pub fn heap_bytes(&self) -> usize {
        self.words.capacity() * std::mem::size_of::<u64>()
    }

    /// Test whether `index` is set.
    ///
    /// Fails with [`IndexSetError::OutOfRange`] when `index >= capacity`.
    pub fn get(&self, index: usize) -> Result<bool> {
        match self.words.get(index / WORD_BITS) {
            Some(word) => Ok(word & bit(index) != 0),
            None => Err(IndexSetError::OutOfRange {
                index,
                capacity: self.capacity(),
            }),
        }
    }

    /// Test whether `index` is set, treating indices beyond the capacity as
    /// absent.
    pub fn contains(&self, index: usize) -> bool {
        self.words
            .get(index / WORD_BITS)
            .is_some_and(|word| word & bit(index) != 0)
    }

    /// Set or clear `index`.
    ///
    /// Writes past the capacity first grow the set to hold `index + 1`
    /// indices, whether `value` is `true` or `false`.
    ///
    /// # Panics
    ///
    /// Panics if the backing store cannot be grown to reach `index`, as
    /// [`IndexSet::ensure_capacity`] does.
    pub fn set(&mut self, index: usize, value: bool) {
        self.ensure_capacity(index.saturating_add(1));

        let word = &mut self.words[index / WORD_BITS];
        if value {
            *word |= bit(index);
        } else {
            *word &= !bit(index);
        }
    }

    /// Grow the backing store so that at least `length` indices are
    /// addressable. New words are zeroed. Never shrinks.
    ///
    /// # Panics
    ///
    /// Panics if the words for `length` indices cannot be allocated.
    pub fn ensure_capacity(&mut self, length: usize) -> &mut Self {
        let needed = words_for(length);
        if needed > self.words.len() {
            if let Err(err) = self.words.try_reserve_exact(needed - self.words.len()) {
                panic!("cannot grow index set to {length} indices: {err}");
            }
            trace!(
                from = self.capacity(),
                to = needed.saturating_mul(WORD_BITS),
                "growing index set"
            );
            self.words.resize(needed, 0);
        }
        self
    }

    /// Clear every index, keeping the capacity.
    pub fn none(&mut self) -> &mut Self {
        self.words.fill(0);
        self
    }

    /// Set every index in `0..length`, growing if needed.
    ///
    /// Indices in `length..capacity` keep their current value.
    pub fn all(&mut self, length: usize) -> &mut Self {
        self.ensure_capacity(length);

        let full = length / WORD_BITS;
        self.words[..full].fill(u64::MAX);

        let rem = length % WORD_BITS;
        if rem != 0 {
            self.words[full] |= low_mask(rem);
        }
        self
    }

    /// Iterate over the set indices in ascending order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            words: &self.words,
            pos: 0,
            current: self.words.first().copied().unwrap_or(0),
        }
    }

    pub(crate) fn words_mut(&mut self) -> &mut [u64] {
        &mut self.words
    }

    /// Words up to and including the last non-zero one.
    fn significant_words(&self) -> &[u64] {
        let len = self
            .words
            .iter()
            .rposition(|&w| w != 0)
            .map_or(0, |pos| pos + 1);
        &self.words[..len]
    }
}

/// Single-bit mask for `index` within its word.
#[inline]
fn bit(index: usize) -> u64 {
    1u64 << (index % WORD_BITS)
}

/// Mask with the lowest `n` bits set, for `n < WORD_BITS`.
#[inline]
pub(crate) fn low_mask(n: usize) -> u64 {
    (1u64 << n) - 1
}

impl PartialEq for IndexSet {
    fn eq(&self, other: &Self) -> bool {
        let (short, long) = if self.words.len() <= other.words.len() {
            (&self.words, &other.words)
        } else {
            (&other.words, &self.words)
        };

        short[..] == long[..short.len()] && long[short.len()..].iter().all(|&w| w == 0)
    }
}

impl Eq for IndexSet {}

impl Hash for IndexSet {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.significant_words().hash(state);
    }
}

/// Iterator over the indices of an [`IndexSet`], in ascending order.
pub struct Iter<'a> {
    words: &'a [u64],
    pos: usize,
    current: u64,
}

impl Iterator for Iter<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        while self.current == 0 {
            self.pos += 1;
            self.current = *self.words.get(self.pos)?;
        }

        let offset = self.current.trailing_zeros() as usize;
        // Clear the lowest set bit.
        self.current &= self.current - 1;
        Some(self.pos * WORD_BITS + offset)
    }
}

impl<'a> IntoIterator for &'a IndexSet {
    type Item = usize;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl Extend<usize> for IndexSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.set(index, true);
        }
    }
}

impl FromIterator<usize> for IndexSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = IndexSet::new();
        set.extend(iter);
        set
    }
}
