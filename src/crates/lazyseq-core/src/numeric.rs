use num_traits::{Bounded, Num, NumCast, ToPrimitive, Zero};
use std::fmt::Debug;

/// Element types the numeric generators can produce
///
/// Implemented for the primitive integers and floats. Integers compare
/// exactly (zero tolerance); floats allow `100 * EPSILON` of drift so that
/// accumulated increments still land on their bound.
pub trait Numeric: Copy + PartialOrd + Debug + Num + NumCast + Bounded {
    /// Absolute tolerance used by [`crate::approx::approx_equal`]
    fn tolerance() -> Self;

    /// Tolerance scaled to the magnitude of `self`, never below [`Numeric::tolerance`]
    fn scaled_tolerance(self) -> Self;

    /// Number of whole units contained in `self`
    ///
    /// Negative values count as zero. Floats within tolerance of the next
    /// integer are snapped up to it, otherwise they are floored.
    fn whole_steps(self) -> usize;

    /// Not NaN and not infinite; always true for integers
    fn is_finite_value(self) -> bool;

    /// `self + by`, or `None` where the sum is not representable
    fn checked_step(self, by: Self) -> Option<Self>;

    /// `self` lies above `bound` by more than the bound's tolerance
    fn exceeds(self, bound: Self) -> bool;

    /// `self` lies below `bound` by more than the bound's tolerance
    fn falls_below(self, bound: Self) -> bool;
}

macro_rules! impl_numeric_int {
    ($($t:ty),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn tolerance() -> Self {
                    0
                }

                #[inline]
                fn scaled_tolerance(self) -> Self {
                    0
                }

                #[inline]
                fn whole_steps(self) -> usize {
                    if self <= Self::zero() {
                        0
                    } else {
                        self.to_usize().unwrap_or(usize::MAX)
                    }
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    true
                }

                #[inline]
                fn checked_step(self, by: Self) -> Option<Self> {
                    self.checked_add(by)
                }

                #[inline]
                fn exceeds(self, bound: Self) -> bool {
                    self > bound
                }

                #[inline]
                fn falls_below(self, bound: Self) -> bool {
                    self < bound
                }
            }
        )*
    };
}

macro_rules! impl_numeric_float {
    ($($t:ident),*) => {
        $(
            impl Numeric for $t {
                #[inline]
                fn tolerance() -> Self {
                    100.0 * $t::EPSILON
                }

                #[inline]
                fn scaled_tolerance(self) -> Self {
                    Self::tolerance() * self.abs().max(1.0)
                }

                fn whole_steps(self) -> usize {
                    if self.is_nan() || self <= -Self::tolerance() {
                        return 0;
                    }
                    if self.is_infinite() {
                        return usize::MAX;
                    }
                    let nearest = self.round();
                    let snapped = if (self - nearest).abs() <= nearest.scaled_tolerance() {
                        nearest
                    } else {
                        self.floor()
                    };
                    snapped.max(0.0).to_usize().unwrap_or(usize::MAX)
                }

                #[inline]
                fn is_finite_value(self) -> bool {
                    self.is_finite()
                }

                #[inline]
                fn checked_step(self, by: Self) -> Option<Self> {
                    Some(self + by)
                }

                // Differences instead of `bound + tolerance`, which overflows to
                // infinity near the extremes of the type
                #[inline]
                fn exceeds(self, bound: Self) -> bool {
                    self > bound && self - bound > bound.scaled_tolerance()
                }

                #[inline]
                fn falls_below(self, bound: Self) -> bool {
                    self < bound && bound - self > bound.scaled_tolerance()
                }
            }
        )*
    };
}

impl_numeric_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
impl_numeric_float!(f32, f64);

/// Convert an element offset into the generator's element type.
///
/// An offset that does not fit the element type cannot address an element of
/// a valid sequence, so this is treated as a contract violation.
#[track_caller]
pub(crate) fn from_offset<T: Numeric>(offset: usize) -> T {
    match <T as NumCast>::from(offset) {
        Some(value) => value,
        None => panic!("offset {offset} cannot be represented by the element type"),
    }
}

/// NaN, the one value that is unordered with itself
#[inline]
pub(crate) fn is_nan<T: PartialOrd>(value: T) -> bool {
    value.partial_cmp(&value).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_whole_steps() {
        assert_eq!(10i32.whole_steps(), 10);
        assert_eq!(0i32.whole_steps(), 0);
        assert_eq!((-3i64).whole_steps(), 0);
        assert_eq!(7u8.whole_steps(), 7);
    }

    #[test]
    fn test_float_whole_steps_snaps_drift() {
        // 0.1 + 0.2 + ... accumulates error; values just below an integer snap up
        assert_eq!((7.0f64 - 1e-15).whole_steps(), 7);
        assert_eq!((7.0f64 + 1e-15).whole_steps(), 7);
        assert_eq!(10.5f64.whole_steps(), 10);
        assert_eq!(0.999f64.whole_steps(), 0);
    }

    #[test]
    fn test_float_whole_steps_edges() {
        assert_eq!((-0.0f64).whole_steps(), 0);
        assert_eq!((-2.5f64).whole_steps(), 0);
        assert_eq!(f64::NAN.whole_steps(), 0);
        assert_eq!(f64::INFINITY.whole_steps(), usize::MAX);
    }

    #[test]
    fn test_tolerance() {
        assert_eq!(i32::tolerance(), 0);
        assert_eq!(f64::tolerance(), 100.0 * f64::EPSILON);
        assert_eq!(f32::tolerance(), 100.0 * f32::EPSILON);
    }

    #[test]
    fn test_scaled_tolerance() {
        assert_eq!(1000i32.scaled_tolerance(), 0);
        assert_eq!(0.5f64.scaled_tolerance(), f64::tolerance());
        assert_eq!((-200.0f64).scaled_tolerance(), 200.0 * f64::tolerance());
    }

    #[test]
    fn test_checked_step() {
        assert_eq!(254u8.checked_step(1), Some(255));
        assert_eq!(255u8.checked_step(1), None);
        assert_eq!((i32::MIN + 1).checked_step(-2), None);
        assert_eq!(1.5f64.checked_step(0.5), Some(2.0));
    }

    #[test]
    fn test_bound_comparisons() {
        assert!(5i32.exceeds(4));
        assert!(!4i32.exceeds(4));
        assert!(3u8.falls_below(4));
        assert!(!(1.0f64 + 1e-15).exceeds(1.0));
        assert!(1.1f64.exceeds(1.0));
        assert!(f64::INFINITY.exceeds(f64::MAX));
        assert!(f64::NEG_INFINITY.falls_below(f64::MIN));
        assert!(!f64::NAN.exceeds(0.0));
    }

    #[test]
    fn test_finite_and_nan() {
        assert!(i64::MAX.is_finite_value());
        assert!(!f64::NAN.is_finite_value());
        assert!(!f32::INFINITY.is_finite_value());
        assert!(is_nan(f64::NAN));
        assert!(!is_nan(0.0f64));
        assert!(!is_nan(7u8));
    }

    #[test]
    fn test_from_offset() {
        assert_eq!(from_offset::<i32>(12), 12);
        assert_eq!(from_offset::<f64>(3), 3.0);
    }

    #[test]
    #[should_panic(expected = "cannot be represented")]
    fn test_from_offset_overflow() {
        let _: u8 = from_offset(300);
    }
}
