use crate::error::{self, Result, SequenceError};
use std::iter::FusedIterator;

/// A lazy, bounded cursor over computed elements
///
/// A sequence is a value: it holds only the state needed to compute its
/// remaining elements. The cursor itself is the beginning of the range it
/// describes, and [`Sequence::end`] yields the matching past-the-end state.
///
/// All sizes are *remaining* sizes and shrink as the cursor advances. For
/// every sequence `s`, calling `advance_one` exactly `s.size()` times reaches
/// a state equal to `s.end()`.
///
/// Equality compares every field that determines the remaining output, so two
/// sequences are equal iff they would produce the same elements up to their
/// ends.
pub trait Sequence: Clone + PartialEq {
    /// Element type produced by the sequence
    type Item;

    /// Current element, without advancing
    fn value(&self) -> Self::Item;

    /// Element `offset` positions ahead of the current one
    ///
    /// Valid for `offset < self.size()`. Computed without mutating the
    /// sequence and, where a closed form exists, without visiting the
    /// skipped elements.
    fn at(&self, offset: usize) -> Self::Item;

    /// Move to the next element
    fn advance_one(&mut self);

    /// Move `n` elements ahead
    ///
    /// Advancing past the end leaves the sequence in its terminal state.
    fn advance_by(&mut self, n: usize);

    /// Number of elements not yet produced
    fn size(&self) -> usize;

    /// The fully advanced counterpart of this sequence
    fn end(&self) -> Self;

    /// No elements remain
    fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// First remaining element
    fn first(&self) -> Self::Item {
        self.value()
    }

    /// Last remaining element
    fn last(&self) -> Self::Item {
        match self.size() {
            0 => error::exhausted(),
            n => self.at(n - 1),
        }
    }

    /// A copy of this sequence advanced by `n`
    fn advanced(&self, n: usize) -> Self {
        let mut result = self.clone();
        result.advance_by(n);
        result
    }

    /// Checked [`Sequence::at`]
    fn get(&self, offset: usize) -> Option<Self::Item> {
        if offset < self.size() {
            Some(self.at(offset))
        } else {
            None
        }
    }

    /// Checked [`Sequence::at`], reporting the remaining size on failure
    fn try_at(&self, offset: usize) -> Result<Self::Item> {
        let size = self.size();
        if offset < size {
            Ok(self.at(offset))
        } else {
            Err(SequenceError::out_of_range(offset, size))
        }
    }

    /// Checked [`Sequence::value`]
    fn try_value(&self) -> Result<Self::Item> {
        if self.is_empty() {
            Err(SequenceError::Exhausted)
        } else {
            Ok(self.value())
        }
    }

    /// Iterate over the remaining elements of a copy of this sequence
    fn iter(&self) -> Iter<Self> {
        Iter::new(self.clone())
    }
}

/// Iterator adaptor over any [`Sequence`]
///
/// Owns its cursor, so iterating never touches the sequence it was created
/// from. `nth` and `skip`-style access map onto [`Sequence::advance_by`].
#[derive(Debug, Clone, PartialEq)]
pub struct Iter<S> {
    seq: S,
}

impl<S: Sequence> Iter<S> {
    pub fn new(seq: S) -> Self {
        Iter { seq }
    }

    /// The cursor in its current position
    pub fn sequence(&self) -> &S {
        &self.seq
    }

    pub fn into_sequence(self) -> S {
        self.seq
    }
}

impl<S: Sequence> Iterator for Iter<S> {
    type Item = S::Item;

    fn next(&mut self) -> Option<Self::Item> {
        if self.seq.is_empty() {
            return None;
        }
        let value = self.seq.value();
        self.seq.advance_one();
        Some(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let size = self.seq.size();
        (size, Some(size))
    }

    fn nth(&mut self, n: usize) -> Option<Self::Item> {
        if n > 0 {
            self.seq.advance_by(n.min(self.seq.size()));
        }
        self.next()
    }

    fn count(self) -> usize {
        self.seq.size()
    }

    fn last(self) -> Option<Self::Item> {
        match self.seq.size() {
            0 => None,
            n => Some(self.seq.at(n - 1)),
        }
    }
}

impl<S: Sequence> ExactSizeIterator for Iter<S> {}

impl<S: Sequence> FusedIterator for Iter<S> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::linear::Linear;

    #[test]
    fn test_iter_collects_remaining() {
        let seq = Linear::new(0, 1, 4);
        let values: Vec<i32> = seq.iter().collect();
        assert_eq!(values, vec![0, 1, 2, 3, 4]);
        // the source cursor is untouched
        assert_eq!(seq.size(), 5);
    }

    #[test]
    fn test_iter_exact_size() {
        let mut it = Linear::new(0, 1, 9).iter();
        assert_eq!(it.len(), 10);
        it.next();
        assert_eq!(it.len(), 9);
    }

    #[test]
    fn test_iter_nth_uses_bulk_advance() {
        let mut it = Linear::new(0, 3, 30).iter();
        assert_eq!(it.nth(4), Some(12));
        assert_eq!(it.next(), Some(15));
        assert_eq!(it.nth(100), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_iter_last_and_count() {
        let seq = Linear::new(1, 2, 9);
        assert_eq!(seq.iter().last(), Some(9));
        assert_eq!(seq.iter().count(), 5);
    }

    #[test]
    fn test_checked_access() {
        let seq = Linear::new(0, 1, 2);
        assert_eq!(seq.get(2), Some(2));
        assert_eq!(seq.get(3), None);
        assert_eq!(seq.try_at(3), Err(SequenceError::out_of_range(3, 3)));
        assert_eq!(seq.end().try_value(), Err(SequenceError::Exhausted));
    }

    #[test]
    fn test_advanced_leaves_source() {
        let seq = Linear::new(0, 1, 10);
        let later = seq.advanced(4);
        assert_eq!(seq.value(), 0);
        assert_eq!(later.value(), 4);
        assert_eq!(later.size(), 7);
    }

    #[test]
    #[should_panic(expected = "sequence is exhausted")]
    fn test_last_of_empty_panics() {
        Linear::new(0, 1, 3).end().last();
    }
}
