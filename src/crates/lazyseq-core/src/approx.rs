//! Tolerance based equality for generator endpoints and state
//!
//! Floating point generators accumulate rounding error under repeated
//! increments, so two cursors that should be at the same position rarely
//! hold bit-identical values. Integral types use a zero tolerance and
//! therefore compare exactly.

use crate::numeric::Numeric;
use num_traits::Signed;

/// `a` and `b` are within the element type's tolerance of each other
///
/// # Examples
/// ```
/// use lazyseq_core::approx::approx_equal;
///
/// assert!(approx_equal(0.1 + 0.2, 0.3));
/// assert!(!approx_equal(1, 2));
/// ```
#[inline]
pub fn approx_equal<T: Numeric>(a: T, b: T) -> bool {
    approx_equal_within(a, b, T::tolerance())
}

/// `a` lies in `[b - tolerance, b + tolerance]`
#[inline]
pub fn approx_equal_within<T: Numeric>(a: T, b: T, tolerance: T) -> bool {
    a == b || (a >= b - tolerance && a <= b + tolerance)
}

/// Like [`approx_equal`], with the tolerance scaled to the larger magnitude
///
/// Used for generator state, where rounding drift grows with the values
/// involved.
#[inline]
pub fn approx_equal_scaled<T: Numeric>(a: T, b: T) -> bool {
    let (ta, tb) = (a.scaled_tolerance(), b.scaled_tolerance());
    approx_equal_within(a, b, if ta > tb { ta } else { tb })
}

/// Magnitudes of `a` and `b` are approximately equal
#[inline]
pub fn abs_approx_equal<T: Numeric + Signed>(a: T, b: T) -> bool {
    approx_equal(a.abs(), b.abs())
}

#[inline]
pub fn abs_approx_equal_within<T: Numeric + Signed>(a: T, b: T, tolerance: T) -> bool {
    approx_equal_within(a.abs(), b.abs(), tolerance)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_float_drift() {
        let mut sum = 0.0f64;
        for _ in 0..10 {
            sum += 0.1;
        }
        assert_ne!(sum, 1.0);
        assert!(approx_equal(sum, 1.0));
    }

    #[test]
    fn test_integers_compare_exactly() {
        assert!(approx_equal(5i32, 5));
        assert!(!approx_equal(5i32, 6));
        assert!(approx_equal(0u32, 0));
    }

    #[test]
    fn test_explicit_tolerance() {
        assert!(approx_equal_within(1.0f64, 1.05, 0.1));
        assert!(!approx_equal_within(1.0f64, 1.2, 0.1));
        assert!(approx_equal_within(10i64, 12, 2));
    }

    #[test]
    fn test_infinities_and_nan() {
        assert!(approx_equal_scaled(f64::INFINITY, f64::INFINITY));
        assert!(!approx_equal_scaled(f64::INFINITY, f64::NEG_INFINITY));
        assert!(!approx_equal(f64::NAN, f64::NAN));
        assert!(approx_equal_scaled(f64::MAX, f64::MAX));
    }

    #[test]
    fn test_scaled_tolerance_grows_with_magnitude() {
        let big = 1.0e10f64;
        let drifted = big * (1.0 + 10.0 * f64::EPSILON);
        assert!(!approx_equal(big, drifted));
        assert!(approx_equal_scaled(big, drifted));
        assert!(!approx_equal_scaled(big, big + 1.0));
        assert!(approx_equal_scaled(7u8, 7));
    }

    #[test]
    fn test_abs_variants() {
        assert!(abs_approx_equal(-8.0f64, 8.0));
        assert!(abs_approx_equal_within(-3i32, 4, 1));
        assert!(!abs_approx_equal(-8.0f64, 7.0));
    }
}
