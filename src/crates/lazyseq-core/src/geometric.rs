use crate::approx::approx_equal_scaled;
use crate::error::{Result, SequenceError};
use crate::numeric::{is_nan, Numeric};
use crate::sequence::{Iter, Sequence};
use num_traits::{pow, Bounded, Float};
use serde::{Deserialize, Serialize};

/// Geometric progression `v(k) = initial * ratio^k`
///
/// With `ratio > 1` the magnitude grows until it passes `bound`; with
/// `0 <= ratio < 1` it decays until it drops below `bound`. Elements are
/// computed in closed form, so `at` and `advance_by` never step through the
/// skipped elements. A zero or NaN cursor holds no elements.
///
/// # Examples
/// ```
/// use lazyseq_core::{Geometric, Sequence};
///
/// let halves = Geometric::new(128.0, 0.5, 1.0);
/// assert_eq!(halves.size(), 8);
/// assert_eq!(halves.at(3), 16.0);
/// ```
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Geometric<T> {
    cur: T,
    ratio: T,
    bound: T,
}

impl<T: Numeric + Float> Geometric<T> {
    pub fn new(initial: T, ratio: T, bound: T) -> Self {
        Geometric {
            cur: initial,
            ratio,
            bound,
        }
    }

    /// Like [`Geometric::new`], rejecting non-finite arguments, a zero initial
    /// value and ratios that never approach the bound monotonically
    pub fn try_new(initial: T, ratio: T, bound: T) -> Result<Self> {
        for (name, value) in [("initial", initial), ("ratio", ratio), ("bound", bound)] {
            if !value.is_finite() {
                return Err(SequenceError::NonFinite { name });
            }
        }
        if initial == T::zero() {
            return Err(SequenceError::ZeroInitial);
        }
        if ratio.is_nan() || ratio < T::zero() || ratio == T::one() {
            return Err(SequenceError::InvalidRatio {
                ratio: ratio.to_f64().unwrap_or(f64::NAN),
            });
        }
        Ok(Geometric::new(initial, ratio, bound))
    }

    /// Grows towards the extreme value of `T`, or decays towards zero
    pub fn unbounded(initial: T, ratio: T) -> Self {
        let bound = if ratio <= T::one() {
            T::zero()
        } else if initial < T::zero() {
            <T as Bounded>::min_value()
        } else {
            <T as Bounded>::max_value()
        };
        Geometric::new(initial, ratio, bound)
    }

    pub fn ratio(&self) -> T {
        self.ratio
    }

    pub fn bound(&self) -> T {
        self.bound
    }

    /// Number of multiplications by the ratio from this cursor to `other`
    pub fn distance_to(&self, other: &Self) -> isize {
        let steps = (other.cur / self.cur).ln() / self.ratio.ln();
        steps.round().to_isize().unwrap_or(0)
    }

    fn past_bound(&self) -> bool {
        let zero = T::zero();
        if is_nan(self.cur) || is_nan(self.ratio) || is_nan(self.bound) || self.cur == zero {
            return true;
        }
        let above = self.cur.exceeds(self.bound);
        let below = self.cur.falls_below(self.bound);
        let growing = self.ratio > T::one();
        if self.cur >= zero && self.bound >= zero {
            if growing {
                above
            } else {
                below
            }
        } else if growing {
            below
        } else {
            above
        }
    }
}

impl<T: Numeric + Float> Sequence for Geometric<T> {
    type Item = T;

    fn value(&self) -> T {
        self.cur
    }

    fn at(&self, offset: usize) -> T {
        self.cur * pow(self.ratio, offset)
    }

    fn advance_one(&mut self) {
        self.cur = self.cur * self.ratio;
    }

    fn advance_by(&mut self, n: usize) {
        let n = n.min(self.size());
        self.cur = self.at(n);
    }

    fn size(&self) -> usize {
        if self.past_bound() {
            return 0;
        }
        let steps = (self.bound / self.cur).ln() / self.ratio.ln();
        steps.whole_steps().saturating_add(1)
    }

    fn is_empty(&self) -> bool {
        self.past_bound()
    }

    fn end(&self) -> Self {
        Geometric::new(self.at(self.size()), self.ratio, self.bound)
    }
}

impl<T: Numeric + Float> PartialEq for Geometric<T> {
    fn eq(&self, other: &Self) -> bool {
        approx_equal_scaled(self.cur, other.cur)
            && approx_equal_scaled(self.ratio, other.ratio)
            && approx_equal_scaled(self.bound, other.bound)
    }
}

impl<T: Numeric + Float> IntoIterator for Geometric<T> {
    type Item = T;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::approx::approx_equal;

    #[test]
    fn test_zero_ratio_single_element() {
        let values: Vec<f64> = Geometric::new(1.0, 0.0, 1.0).into_iter().collect();
        assert_eq!(values.len(), 1);
        assert!(approx_equal(values[0], 1.0));
    }

    #[test]
    fn test_halving() {
        let seq = Geometric::new(128.0, 0.5, 1.0);
        assert_eq!(seq.size(), 8);
        assert!(approx_equal(seq.first(), 128.0));
        assert!(approx_equal(seq.last(), 1.0));

        let values: Vec<f64> = seq.into_iter().collect();
        assert_eq!(values.len(), 8);
        assert!(approx_equal(values[7], 1.0));
    }

    #[test]
    fn test_growth_to_bound() {
        let seq = Geometric::new(1.0, 2.0, 1000.0);
        assert_eq!(seq.size(), 10);
        assert!(approx_equal(seq.last(), 512.0));
        assert!(approx_equal(seq.at(4), 16.0));
    }

    #[test]
    fn test_negative_values() {
        let seq = Geometric::new(-1.0, 2.0, -100.0);
        assert_eq!(seq.size(), 7);
        assert!(approx_equal(seq.last(), -64.0));
        assert!(Geometric::new(-128.0, 2.0, -100.0).is_empty());
    }

    #[test]
    fn test_iteration_reaches_end() {
        let seq = Geometric::new(3.0, 1.5, 500.0);
        let mut cursor = seq;
        for _ in 0..seq.size() {
            cursor.advance_one();
        }
        assert!(cursor.is_empty());
        assert_eq!(cursor, seq.end());
        assert_eq!(seq.advanced(seq.size()), seq.end());
    }

    #[test]
    fn test_bulk_advance() {
        let mut seq = Geometric::new(1.0, 3.0, 1.0e6);
        seq.advance_by(5);
        assert!(approx_equal(seq.value(), 243.0));
        assert_eq!(seq.distance_to(&seq.advanced(3)), 3);
    }

    #[test]
    fn test_try_new() {
        assert!(Geometric::try_new(1.0, 0.5, 0.1).is_ok());
        assert_eq!(
            Geometric::try_new(1.0, 1.0, 10.0),
            Err(SequenceError::InvalidRatio { ratio: 1.0 })
        );
        assert!(Geometric::try_new(1.0, -2.0, 10.0).is_err());
    }

    #[test]
    fn test_try_new_rejects_degenerate_arguments() {
        assert_eq!(
            Geometric::try_new(0.0, 2.0, 10.0),
            Err(SequenceError::ZeroInitial)
        );
        assert_eq!(
            Geometric::try_new(1.0, f64::NAN, 10.0),
            Err(SequenceError::NonFinite { name: "ratio" })
        );
        assert_eq!(
            Geometric::try_new(f64::INFINITY, 0.5, 1.0),
            Err(SequenceError::NonFinite { name: "initial" })
        );
        assert_eq!(
            Geometric::try_new(1.0, 2.0, f64::NAN),
            Err(SequenceError::NonFinite { name: "bound" })
        );
    }

    #[test]
    fn test_zero_and_nan_cursor_is_empty() {
        let zero = Geometric::new(0.0, 2.0, 10.0);
        assert!(zero.is_empty());
        assert_eq!(zero.size(), 0);
        assert_eq!(zero.iter().next(), None);

        let nan = Geometric::new(1.0, f64::NAN, 10.0);
        assert!(nan.is_empty());
        assert_eq!(nan.size(), 0);
        assert_eq!(nan.iter().count(), 0);
    }

    #[test]
    fn test_unbounded() {
        let grow = Geometric::unbounded(1.0f64, 2.0);
        assert_eq!(grow.bound(), f64::MAX);
        assert!(approx_equal(grow.at(10), 1024.0));

        let decay = Geometric::unbounded(1.0f64, 0.5);
        assert_eq!(decay.bound(), 0.0);
        assert!(!decay.advanced(60).is_empty());
    }
}
