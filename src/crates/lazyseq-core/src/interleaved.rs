//! Interleaved boolean patterns
//!
//! A pattern of `offset - 1` leading `false` slots followed by `trues`
//! `true` slots, consecutive trues separated by `interleave` falses. The
//! state is three counters, so every query is answered in closed form.

use crate::sequence::{Iter, Sequence};
use serde::{Deserialize, Serialize};

/// Lazily generated boolean pattern with evenly spaced `true` slots
///
/// `next_true` holds the value `remaining` will have when the cursor sits on
/// the next `true`, or zero when no trues are left. It always satisfies
/// `next_true <= remaining` and, when non-zero, `next_true % spacing == 1 % spacing`.
///
/// # Examples
/// ```
/// use lazyseq_core::{InterleavedBits, Sequence};
///
/// // 2 leading falses, then 3 trues with 2 falses between them
/// let bits = InterleavedBits::new(3, 2, 3);
/// let pattern: Vec<bool> = bits.iter().collect();
/// assert_eq!(
///     pattern,
///     vec![false, false, true, false, false, true, false, false, true]
/// );
/// assert_eq!(bits.count(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct InterleavedBits {
    remaining: usize,
    next_true: usize,
    spacing: usize,
}

impl InterleavedBits {
    /// Build a pattern of `trues` true slots with `interleave` falses between
    /// consecutive trues, preceded by `offset - 1` falses
    pub fn new(trues: usize, interleave: usize, offset: usize) -> Self {
        let spacing = interleave + 1;
        let next_true = if trues < 1 {
            0
        } else {
            1 + (trues - 1) * spacing
        };
        InterleavedBits {
            remaining: offset.saturating_sub(1) + next_true,
            next_true,
            spacing,
        }
    }

    /// Number of `true` slots left
    pub fn count(&self) -> usize {
        if self.next_true == 0 {
            0
        } else {
            (self.next_true - 1) / self.spacing + 1
        }
    }

    pub fn any(&self) -> bool {
        self.next_true > 0
    }

    pub fn none(&self) -> bool {
        !self.any()
    }

    /// Every remaining slot is `true`
    pub fn is_all_true(&self) -> bool {
        self.remaining == self.next_true && self.spacing == 1
    }

    pub fn slots_before_first_true(&self) -> usize {
        self.remaining - self.next_true
    }

    /// Falses between consecutive trues
    pub fn interleave(&self) -> usize {
        self.spacing - 1
    }
}

impl Sequence for InterleavedBits {
    type Item = bool;

    fn value(&self) -> bool {
        self.remaining > 0 && self.remaining == self.next_true
    }

    /// `false` for any offset outside the remaining slots
    fn at(&self, offset: usize) -> bool {
        if offset >= self.remaining || offset < self.slots_before_first_true() {
            return false;
        }
        (self.remaining - offset - 1) % self.spacing == 0
    }

    fn advance_one(&mut self) {
        if self.remaining == 0 {
            return;
        }
        self.remaining -= 1;
        if self.remaining < self.next_true {
            self.next_true = self.next_true.saturating_sub(self.spacing);
        }
    }

    fn advance_by(&mut self, n: usize) {
        let n = n.min(self.remaining);
        let lead = self.slots_before_first_true();
        self.remaining -= n;
        if n > lead {
            self.next_true = if self.remaining == 0 {
                0
            } else {
                self.spacing * ((self.remaining - 1) / self.spacing) + 1
            };
        }
    }

    fn size(&self) -> usize {
        self.remaining
    }

    fn end(&self) -> Self {
        InterleavedBits {
            remaining: 0,
            next_true: 0,
            spacing: self.spacing,
        }
    }

    /// The final slot of a non-empty pattern is always a `true`
    fn last(&self) -> bool {
        !self.is_empty()
    }
}

impl IntoIterator for InterleavedBits {
    type Item = bool;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
