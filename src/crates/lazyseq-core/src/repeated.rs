//! Lead-in sequence followed by repetitions of a unit
//!
//! The unit is kept as an immutable template. Whenever the active
//! sub-sequence runs out and repetitions remain, a fresh copy of the
//! template becomes active. Random access and bulk advance jump over whole
//! cycles by integer division instead of stepping through them.

use crate::error;
use crate::sequence::{Iter, Sequence};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

/// `lead` followed by `reps` copies of `unit`
///
/// # Examples
/// ```
/// use lazyseq_core::{Linear, Repeated, Sequence};
///
/// let seq = Repeated::with_lead(Linear::new(8, -1, 1), Linear::new(5, -1, 1), 2);
/// assert_eq!(seq.size(), 18);
/// assert_eq!(seq.at(8), 5);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Repeated<S> {
    active: S,
    unit: S,
    reps_done: usize,
    reps_total: usize,
    unit_size: usize,
}

impl<S: Sequence> Repeated<S> {
    /// `unit` once, then `reps` more times
    pub fn new(unit: S, reps: usize) -> Self {
        Repeated::with_lead(unit.clone(), unit, reps)
    }

    pub fn with_lead(lead: S, unit: S, reps: usize) -> Self {
        let unit_size = unit.size();
        let reps_total = if unit_size == 0 && reps > 0 {
            debug!("Unit sequence is empty, dropping {} repetitions", reps);
            0
        } else {
            reps
        };
        let mut seq = Repeated {
            active: lead,
            unit,
            reps_done: 0,
            reps_total,
            unit_size,
        };
        seq.settle();
        seq
    }

    /// The template each repetition starts from
    pub fn unit(&self) -> &S {
        &self.unit
    }

    pub fn repetitions_total(&self) -> usize {
        self.reps_total
    }

    /// Repetitions of the unit started so far
    pub fn repetitions_done(&self) -> usize {
        self.reps_done
    }

    pub fn unit_size(&self) -> usize {
        self.unit_size
    }

    fn repetitions_left(&self) -> usize {
        self.reps_total - self.reps_done
    }

    /// Install the next copy of the unit once the active sequence is used up
    fn settle(&mut self) {
        if self.active.is_empty() && self.reps_done < self.reps_total {
            self.active = self.unit.clone();
            self.reps_done += 1;
            trace!("Starting repetition {} of {}", self.reps_done, self.reps_total);
        }
    }

    fn finish(&mut self) {
        self.active = if self.reps_total > 0 {
            self.unit.end()
        } else {
            self.active.end()
        };
        self.reps_done = self.reps_total;
    }
}

impl<S: Sequence> Sequence for Repeated<S> {
    type Item = S::Item;

    fn value(&self) -> S::Item {
        if self.active.is_empty() {
            error::exhausted();
        }
        self.active.value()
    }

    fn at(&self, offset: usize) -> S::Item {
        let head = self.active.size();
        if offset < head {
            return self.active.at(offset);
        }
        let rest = offset - head;
        if self.unit_size == 0 || rest / self.unit_size >= self.repetitions_left() {
            error::out_of_range(offset, self.size());
        }
        self.unit.at(rest % self.unit_size)
    }

    fn advance_one(&mut self) {
        if !self.active.is_empty() {
            self.active.advance_one();
            self.settle();
        }
    }

    fn advance_by(&mut self, n: usize) {
        let head = self.active.size();
        if n < head {
            self.active.advance_by(n);
            return;
        }
        let left = self.repetitions_left();
        if left == 0 {
            self.active = self.active.end();
            return;
        }
        let rest = n - head;
        let full = rest / self.unit_size;
        if full < left {
            self.reps_done += full + 1;
            self.active = self.unit.advanced(rest % self.unit_size);
            trace!(
                "Skipped {} repetitions, now in repetition {} of {}",
                full,
                self.reps_done,
                self.reps_total
            );
        } else {
            trace!("Advanced past the last repetition");
            self.finish();
        }
    }

    fn size(&self) -> usize {
        self.repetitions_left()
            .saturating_mul(self.unit_size)
            .saturating_add(self.active.size())
    }

    fn is_empty(&self) -> bool {
        self.active.is_empty() && self.reps_done == self.reps_total
    }

    fn end(&self) -> Self {
        let mut end = self.clone();
        end.finish();
        end
    }

    /// Last element of the unit, regardless of how many repetitions remain
    fn last(&self) -> S::Item {
        self.unit.last()
    }
}

impl<S: Sequence> IntoIterator for Repeated<S> {
    type Item = S::Item;
    type IntoIter = Iter<Self>;

    fn into_iter(self) -> Self::IntoIter {
        Iter::new(self)
    }
}
