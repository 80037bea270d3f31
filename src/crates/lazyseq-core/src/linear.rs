//! Arithmetic progressions
//!
//! `Ascending` and `Descending` step by one towards an inclusive bound,
//! `Linear` steps by an arbitrary non-zero stride. All three compute any
//! element in closed form (`first + stride * k`), so random access and bulk
//! advance are O(1).
//!
//! The cursor never moves past its last element. Once a step would pass the
//! bound the sequence is marked exhausted in place, so a bound at the edge
//! of the element type never overflows.

use crate::approx::approx_equal_scaled;
use crate::error::{Result, SequenceError};
use crate::numeric::{from_offset, is_nan, Numeric};
use crate::sequence::{Iter, Sequence};
use num_traits::{Signed, ToPrimitive};
use serde::{Deserialize, Serialize};

/// `first, first + 1, ...` up to an inclusive upper bound
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Ascending<T> {
    cur: T,
    bound: T,
    #[serde(default)]
    exhausted: bool,
}

impl<T: Numeric> Ascending<T> {
    pub fn new(first: T, bound: T) -> Self {
        Ascending {
            cur: first,
            bound,
            exhausted: false,
        }
    }

    /// Counts up to the largest value of `T`
    pub fn unbounded(first: T) -> Self {
        Ascending::new(first, T::max_value())
    }

    pub fn bound(&self) -> T {
        self.bound
    }

    /// Number of elements between this cursor and `other`
    pub fn distance_to(&self, other: &Self) -> isize {
        signed_steps(self.cur, other.cur, T::one())
            + exhaustion_steps(self.exhausted, other.exhausted)
    }

    fn past_bound(&self) -> bool {
        self.exhausted || is_nan(self.cur) || is_nan(self.bound) || self.cur.exceeds(self.bound)
    }
}

impl<T: Numeric> Sequence for Ascending<T> {
    type Item = T;

    fn value(&self) -> T {
        self.cur
    }

    fn at(&self, offset: usize) -> T {
        self.cur + from_offset(offset)
    }

    fn advance_one(&mut self) {
        if self.past_bound() {
            return;
        }
        match self.cur.checked_step(T::one()) {
            Some(next) if !next.exceeds(self.bound) => self.cur = next,
            _ => self.exhausted = true,
        }
    }

    fn advance_by(&mut self, n: usize) {
        let size = self.size();
        if size == 0 {
            return;
        }
        if n < size {
            self.cur = self.at(n);
        } else {
            self.cur = self.at(size - 1);
            self.exhausted = true;
        }
    }

    fn size(&self) -> usize {
        if self.past_bound() {
            0
        } else {
            (self.bound - self.cur).whole_steps().saturating_add(1)
        }
    }

    fn is_empty(&self) -> bool {
        self.past_bound()
    }

    fn end(&self) -> Self {
        let mut end = *self;
        end.advance_by(usize::MAX);
        end
    }
}

impl<T: Numeric> PartialEq for Ascending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.exhausted == other.exhausted
            && approx_equal_scaled(self.cur, other.cur)
            && approx_equal_scaled(self.bound, other.bound)
    }
}

impl<T: Numeric> IntoIterator for Ascending<T> {
    type Item = T;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// `first, first - 1, ...` down to an inclusive lower bound
///
/// Requires a signed element type, since the step is `-1`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Descending<T> {
    cur: T,
    bound: T,
    #[serde(default)]
    exhausted: bool,
}

impl<T: Numeric + Signed> Descending<T> {
    pub fn new(first: T, bound: T) -> Self {
        Descending {
            cur: first,
            bound,
            exhausted: false,
        }
    }

    /// Counts down to the smallest value of `T`
    pub fn unbounded(first: T) -> Self {
        Descending::new(first, T::min_value())
    }

    pub fn bound(&self) -> T {
        self.bound
    }

    pub fn distance_to(&self, other: &Self) -> isize {
        signed_steps(self.cur, other.cur, -T::one())
            + exhaustion_steps(self.exhausted, other.exhausted)
    }

    fn past_bound(&self) -> bool {
        self.exhausted || is_nan(self.cur) || is_nan(self.bound) || self.cur.falls_below(self.bound)
    }
}

impl<T: Numeric + Signed> Sequence for Descending<T> {
    type Item = T;

    fn value(&self) -> T {
        self.cur
    }

    fn at(&self, offset: usize) -> T {
        self.cur - from_offset(offset)
    }

    fn advance_one(&mut self) {
        if self.past_bound() {
            return;
        }
        match self.cur.checked_step(-T::one()) {
            Some(next) if !next.falls_below(self.bound) => self.cur = next,
            _ => self.exhausted = true,
        }
    }

    fn advance_by(&mut self, n: usize) {
        let size = self.size();
        if size == 0 {
            return;
        }
        if n < size {
            self.cur = self.at(n);
        } else {
            self.cur = self.at(size - 1);
            self.exhausted = true;
        }
    }

    fn size(&self) -> usize {
        if self.past_bound() {
            0
        } else {
            (self.cur - self.bound).whole_steps().saturating_add(1)
        }
    }

    fn is_empty(&self) -> bool {
        self.past_bound()
    }

    fn end(&self) -> Self {
        let mut end = *self;
        end.advance_by(usize::MAX);
        end
    }
}

impl<T: Numeric + Signed> PartialEq for Descending<T> {
    fn eq(&self, other: &Self) -> bool {
        self.exhausted == other.exhausted
            && approx_equal_scaled(self.cur, other.cur)
            && approx_equal_scaled(self.bound, other.bound)
    }
}

impl<T: Numeric + Signed> IntoIterator for Descending<T> {
    type Item = T;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// `first, first + stride, first + 2 * stride, ...` up to an inclusive bound
///
/// A negative stride counts down towards a lower bound. The bound does not
/// have to be reached exactly: the last element is the final one that does
/// not pass it.
///
/// # Examples
/// ```
/// use lazyseq_core::{Linear, Sequence};
///
/// let evens = Linear::new(0, 2, 20);
/// assert_eq!(evens.size(), 11);
/// assert_eq!(evens.at(5), 10);
/// assert_eq!(evens.last(), 20);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Linear<T> {
    cur: T,
    stride: T,
    bound: T,
    #[serde(default)]
    exhausted: bool,
}

impl<T: Numeric> Linear<T> {
    /// A zero stride never reaches its bound, see [`Linear::try_new`]
    pub fn new(first: T, stride: T, bound: T) -> Self {
        Linear {
            cur: first,
            stride,
            bound,
            exhausted: false,
        }
    }

    /// Like [`Linear::new`], rejecting a zero stride and non-finite arguments
    pub fn try_new(first: T, stride: T, bound: T) -> Result<Self> {
        for (name, value) in [("first", first), ("stride", stride), ("bound", bound)] {
            if !value.is_finite_value() {
                return Err(SequenceError::NonFinite { name });
            }
        }
        if stride == T::zero() {
            return Err(SequenceError::ZeroStride);
        }
        Ok(Linear::new(first, stride, bound))
    }

    /// Steps towards the extreme value of `T` in the direction of `stride`
    pub fn unbounded(first: T, stride: T) -> Self {
        let bound = if stride < T::zero() {
            T::min_value()
        } else {
            T::max_value()
        };
        Linear::new(first, stride, bound)
    }

    pub fn stride(&self) -> T {
        self.stride
    }

    pub fn bound(&self) -> T {
        self.bound
    }

    /// Number of strides from this cursor to `other`, negative if `other`
    /// lies behind
    pub fn distance_to(&self, other: &Self) -> isize {
        signed_steps(self.cur, other.cur, self.stride)
            + exhaustion_steps(self.exhausted, other.exhausted)
    }

    fn passes_bound(&self, value: T) -> bool {
        let zero = T::zero();
        if self.stride > zero {
            value.exceeds(self.bound)
        } else if self.stride < zero {
            value.falls_below(self.bound)
        } else {
            false
        }
    }

    fn past_bound(&self) -> bool {
        self.exhausted
            || is_nan(self.cur)
            || is_nan(self.stride)
            || is_nan(self.bound)
            || self.passes_bound(self.cur)
    }
}

impl<T: Numeric> Sequence for Linear<T> {
    type Item = T;

    fn value(&self) -> T {
        self.cur
    }

    fn at(&self, offset: usize) -> T {
        self.cur + self.stride * from_offset(offset)
    }

    fn advance_one(&mut self) {
        if self.past_bound() {
            return;
        }
        match self.cur.checked_step(self.stride) {
            Some(next) if !self.passes_bound(next) => self.cur = next,
            _ => self.exhausted = true,
        }
    }

    fn advance_by(&mut self, n: usize) {
        let size = self.size();
        if size == 0 {
            return;
        }
        if n < size {
            self.cur = self.at(n);
        } else {
            self.cur = self.at(size - 1);
            self.exhausted = true;
        }
    }

    fn size(&self) -> usize {
        if self.past_bound() {
            0
        } else if self.stride == T::zero() {
            usize::MAX
        } else {
            ((self.bound - self.cur) / self.stride)
                .whole_steps()
                .saturating_add(1)
        }
    }

    fn is_empty(&self) -> bool {
        self.past_bound()
    }

    fn end(&self) -> Self {
        let mut end = *self;
        end.advance_by(usize::MAX);
        end
    }
}

impl<T: Numeric> PartialEq for Linear<T> {
    fn eq(&self, other: &Self) -> bool {
        self.exhausted == other.exhausted
            && approx_equal_scaled(self.cur, other.cur)
            && approx_equal_scaled(self.stride, other.stride)
            && approx_equal_scaled(self.bound, other.bound)
    }
}

impl<T: Numeric> IntoIterator for Linear<T> {
    type Item = T;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

/// The exhausted state keeps the cursor on the last element, one step short
/// of the past-the-end position
fn exhaustion_steps(from: bool, to: bool) -> isize {
    isize::from(to) - isize::from(from)
}

fn signed_steps<T: Numeric>(from: T, to: T, stride: T) -> isize {
    match (from.to_f64(), to.to_f64(), stride.to_f64()) {
        (Some(from), Some(to), Some(stride)) if stride != 0.0 => ((to - from) / stride).round() as isize,
        _ => 0,
    }
}
