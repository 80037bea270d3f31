use crate::error;
use crate::sequence::{Iter, Sequence};
use serde::{Deserialize, Serialize};

/// One value repeated a fixed number of times
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Replica<T> {
    value: T,
    remaining: usize,
}

impl<T: Clone + PartialEq> Replica<T> {
    pub fn new(value: T, count: usize) -> Self {
        Replica {
            value,
            remaining: count,
        }
    }
}

impl<T: Clone + PartialEq> Sequence for Replica<T> {
    type Item = T;

    fn value(&self) -> T {
        if self.remaining == 0 {
            error::exhausted();
        }
        self.value.clone()
    }

    fn at(&self, offset: usize) -> T {
        if offset >= self.remaining {
            error::out_of_range(offset, self.remaining);
        }
        self.value.clone()
    }

    fn advance_one(&mut self) {
        self.remaining = self.remaining.saturating_sub(1);
    }

    fn advance_by(&mut self, n: usize) {
        self.remaining = self.remaining.saturating_sub(n);
    }

    fn size(&self) -> usize {
        self.remaining
    }

    fn end(&self) -> Self {
        Replica::new(self.value.clone(), 0)
    }
}

impl<T: Clone + PartialEq> IntoIterator for Replica<T> {
    type Item = T;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeats_value() {
        let values: Vec<&str> = Replica::new("x", 3).into_iter().collect();
        assert_eq!(values, vec!["x", "x", "x"]);
    }

    #[test]
    fn test_advance_saturates() {
        let mut seq = Replica::new(1.5, 4);
        seq.advance_by(3);
        assert_eq!(seq.size(), 1);
        seq.advance_by(10);
        assert!(seq.is_empty());
        assert_eq!(seq, Replica::new(1.5, 4).end());
    }

    #[test]
    fn test_at_within_remaining() {
        let seq = Replica::new(7u8, 2);
        assert_eq!(seq.at(1), 7);
        assert_eq!(seq.get(2), None);
    }

    #[test]
    #[should_panic(expected = "offset 2 is out of range")]
    fn test_at_past_end_panics() {
        Replica::new(7u8, 2).at(2);
    }

    #[test]
    #[should_panic(expected = "sequence is exhausted")]
    fn test_value_of_empty_panics() {
        Replica::new('a', 0).value();
    }
}
