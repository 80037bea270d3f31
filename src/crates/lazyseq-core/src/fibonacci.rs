use crate::sequence::{Iter, Sequence};
use num_traits::Num;
use serde::{Deserialize, Serialize};

/// The Fibonacci recurrence `0, 1, 1, 2, 3, 5, ...` limited to a number of terms
///
/// There is no closed form here, so `at` and `advance_by` walk the recurrence.
///
/// # Examples
/// ```
/// use lazyseq_core::{Fibonacci, Sequence};
///
/// let fib = Fibonacci::<u64>::new(10);
/// assert_eq!(fib.size(), 10);
/// assert_eq!(fib.last(), 34);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Fibonacci<T> {
    cur: T,
    prev: T,
    n: usize,
    max_n: usize,
}

impl<T: Num + Copy> Fibonacci<T> {
    /// The first `terms` Fibonacci numbers
    pub fn new(terms: usize) -> Self {
        Fibonacci {
            cur: T::zero(),
            prev: T::one(),
            n: 0,
            max_n: terms,
        }
    }

    /// Never runs out of terms; the element type overflows long before
    pub fn unbounded() -> Self {
        Fibonacci::new(usize::MAX)
    }

    /// Index of the current term
    pub fn index(&self) -> usize {
        self.n
    }

    fn step(cur: T, prev: T) -> (T, T) {
        (cur + prev, cur)
    }
}

impl<T: Num + Copy> Sequence for Fibonacci<T> {
    type Item = T;

    fn value(&self) -> T {
        self.cur
    }

    fn at(&self, offset: usize) -> T {
        let (mut cur, mut prev) = (self.cur, self.prev);
        for _ in 0..offset {
            (cur, prev) = Self::step(cur, prev);
        }
        cur
    }

    fn advance_one(&mut self) {
        if self.n >= self.max_n {
            return;
        }
        self.n += 1;
        // The term after the last one is never computed, it may not fit in `T`
        if self.n < self.max_n {
            (self.cur, self.prev) = Self::step(self.cur, self.prev);
        }
    }

    fn advance_by(&mut self, n: usize) {
        for _ in 0..n.min(self.size()) {
            self.advance_one();
        }
    }

    fn size(&self) -> usize {
        self.max_n.saturating_sub(self.n)
    }

    fn end(&self) -> Self {
        Fibonacci {
            cur: T::zero(),
            prev: T::zero(),
            n: self.max_n,
            max_n: self.max_n,
        }
    }
}

/// Position based: the element values follow from `n`
impl<T> PartialEq for Fibonacci<T> {
    fn eq(&self, other: &Self) -> bool {
        self.n == other.n && self.max_n == other.max_n
    }
}

impl<T: Num + Copy> IntoIterator for Fibonacci<T> {
    type Item = T;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
