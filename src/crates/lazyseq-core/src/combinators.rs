use crate::concat::Concat;
use crate::fibonacci::Fibonacci;
use crate::geometric::Geometric;
use crate::interleaved::InterleavedBits;
use crate::linear::{Ascending, Descending, Linear};
use crate::numeric::Numeric;
use crate::repeated::Repeated;
use crate::replica::Replica;
use crate::sequence::Sequence;
use num_traits::{Float, Num, Signed};

/// Count up by one from `first` to `bound` inclusive
pub fn ascending<T: Numeric>(first: T, bound: T) -> Ascending<T> {
    Ascending::new(first, bound)
}

/// Count down by one from `first` to `bound` inclusive
pub fn descending<T: Numeric + Signed>(first: T, bound: T) -> Descending<T> {
    Descending::new(first, bound)
}

/// Arithmetic progression from `first` by `stride` up to `bound` inclusive
pub fn linear<T: Numeric>(first: T, stride: T, bound: T) -> Linear<T> {
    Linear::new(first, stride, bound)
}

/// Geometric progression from `initial` by `ratio` up to `bound`
pub fn geometric<T: Numeric + Float>(initial: T, ratio: T, bound: T) -> Geometric<T> {
    Geometric::new(initial, ratio, bound)
}

pub fn fibonacci<T: Num + Copy>(terms: usize) -> Fibonacci<T> {
    Fibonacci::new(terms)
}

/// One value repeated `count` times
pub fn replicas<T: Clone + PartialEq>(value: T, count: usize) -> Replica<T> {
    Replica::new(value, count)
}

/// `trues` true slots with `interleave` falses between them, after `offset - 1` falses
pub fn interleaved_bits(trues: usize, interleave: usize, offset: usize) -> InterleavedBits {
    InterleavedBits::new(trues, interleave, offset)
}

/// Concatenate two sequences with the same item type
///
/// # Examples
/// ```
/// use lazyseq_core::{concat, linear, replicas, Sequence};
///
/// let seq = concat(linear(0, 1, 2), replicas(7, 2));
/// assert_eq!(seq.iter().collect::<Vec<_>>(), vec![0, 1, 2, 7, 7]);
/// ```
pub fn concat<A, B>(first: A, second: B) -> Concat<A, B, A::Item>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Concat::new(first, second)
}

/// Concatenate two sequences whose items both convert into `T`
///
/// # Examples
/// ```
/// use lazyseq_core::{concat_into, linear, Sequence};
///
/// let seq = concat_into::<f64, _, _>(linear(3, -1, 1), linear(0.5, 0.5, 1.0));
/// assert_eq!(seq.iter().collect::<Vec<_>>(), vec![3.0, 2.0, 1.0, 0.5, 1.0]);
/// ```
pub fn concat_into<T, A, B>(first: A, second: B) -> Concat<A, B, T>
where
    A: Sequence,
    B: Sequence,
    A::Item: Into<T>,
    B::Item: Into<T>,
{
    Concat::new(first, second)
}

/// `unit` once followed by `reps` further copies of it
pub fn repeat<S: Sequence>(unit: S, reps: usize) -> Repeated<S> {
    Repeated::new(unit, reps)
}

/// `lead` followed by `reps` copies of `unit`
pub fn repeat_after<S: Sequence>(lead: S, unit: S, reps: usize) -> Repeated<S> {
    Repeated::with_lead(lead, unit, reps)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_combinators() {
        // 1 2 3, then (0 0 | 9) twice
        let cycle = concat(replicas(0, 2), linear(9, 1, 9));
        let seq = concat(linear(1, 1, 3), repeat_after(cycle.clone(), cycle, 1));
        assert_eq!(seq.size(), 9);
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![1, 2, 3, 0, 0, 9, 0, 0, 9]
        );
        assert_eq!(seq.at(8), 9);
        assert_eq!(seq.advanced(4).value(), 0);
    }

    #[test]
    fn test_repeat_bits() {
        let seq = repeat(interleaved_bits(2, 1, 0), 2);
        assert_eq!(
            seq.iter().collect::<Vec<_>>(),
            vec![true, false, true, true, false, true, true, false, true]
        );
    }

    #[test]
    fn test_counting_helpers() {
        assert_eq!(ascending(1, 4).iter().collect::<Vec<_>>(), vec![1, 2, 3, 4]);
        assert_eq!(descending(2, -1).iter().collect::<Vec<_>>(), vec![2, 1, 0, -1]);
        assert_eq!(fibonacci::<u8>(6).last(), 5);
        assert_eq!(geometric(1.0, 10.0, 1.0e3).size(), 4);
    }
}
