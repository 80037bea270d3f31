//! Concatenation of two sequences
//!
//! The two halves may be different generator types with different element
//! types, as long as both elements convert into the common item type `T`.
//! Nothing is cached: every read re-checks whether the first half is
//! exhausted and routes to the half that holds the requested position.

use crate::error;
use crate::sequence::{Iter, Sequence};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::marker::PhantomData;

/// `first` followed by `second`, yielding items of type `T`
///
/// Build with [`crate::concat`] when both halves share an item type, or
/// [`crate::concat_into`] to pick the common type explicitly.
#[derive(Serialize, Deserialize)]
pub struct Concat<A, B, T> {
    first: A,
    second: B,
    #[serde(skip)]
    item: PhantomData<fn() -> T>,
}

impl<A, B, T> Concat<A, B, T> {
    pub fn new(first: A, second: B) -> Self {
        Concat {
            first,
            second,
            item: PhantomData,
        }
    }

    pub fn first_sequence(&self) -> &A {
        &self.first
    }

    pub fn second_sequence(&self) -> &B {
        &self.second
    }

    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Clone, B: Clone, T> Clone for Concat<A, B, T> {
    fn clone(&self) -> Self {
        Concat::new(self.first.clone(), self.second.clone())
    }
}

impl<A: PartialEq, B: PartialEq, T> PartialEq for Concat<A, B, T> {
    fn eq(&self, other: &Self) -> bool {
        self.first == other.first && self.second == other.second
    }
}

impl<A: fmt::Debug, B: fmt::Debug, T> fmt::Debug for Concat<A, B, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Concat")
            .field("first", &self.first)
            .field("second", &self.second)
            .finish()
    }
}

impl<A, B, T> Sequence for Concat<A, B, T>
where
    A: Sequence,
    B: Sequence,
    A::Item: Into<T>,
    B::Item: Into<T>,
{
    type Item = T;

    fn value(&self) -> T {
        if !self.first.is_empty() {
            self.first.value().into()
        } else if !self.second.is_empty() {
            self.second.value().into()
        } else {
            error::exhausted()
        }
    }

    fn at(&self, offset: usize) -> T {
        let head = self.first.size();
        if offset < head {
            return self.first.at(offset).into();
        }
        let tail = self.second.size();
        if offset - head >= tail {
            error::out_of_range(offset, head.saturating_add(tail));
        }
        self.second.at(offset - head).into()
    }

    fn advance_one(&mut self) {
        if !self.first.is_empty() {
            self.first.advance_one();
        } else if !self.second.is_empty() {
            self.second.advance_one();
        }
    }

    fn advance_by(&mut self, n: usize) {
        let head = self.first.size();
        if n < head {
            self.first.advance_by(n);
        } else {
            self.first = self.first.end();
            self.second.advance_by(n - head);
        }
    }

    fn size(&self) -> usize {
        self.first.size().saturating_add(self.second.size())
    }

    fn end(&self) -> Self {
        Concat::new(self.first.end(), self.second.end())
    }

    fn is_empty(&self) -> bool {
        self.first.is_empty() && self.second.is_empty()
    }

    fn first(&self) -> T {
        if self.first.is_empty() {
            self.second.first().into()
        } else {
            self.first.first().into()
        }
    }

    fn last(&self) -> T {
        if self.second.is_empty() {
            self.first.last().into()
        } else {
            self.second.last().into()
        }
    }
}

impl<A, B, T> IntoIterator for Concat<A, B, T>
where
    A: Sequence,
    B: Sequence,
    A::Item: Into<T>,
    B::Item: Into<T>,
{
    type Item = T;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
