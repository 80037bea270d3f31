use thiserror::Error;

pub type Result<T> = std::result::Result<T, SequenceError>;

/// Errors reported by the checked sequence operations and the validating
/// constructors.
///
/// The unchecked operations (`value`, `at`) treat the same conditions as a
/// broken caller contract and panic instead, the way slice indexing does.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SequenceError {
    #[error("offset {offset} is out of range for a sequence with {size} remaining elements")]
    OutOfRange { offset: usize, size: usize },

    #[error("sequence is exhausted")]
    Exhausted,

    #[error("stride must not be zero")]
    ZeroStride,

    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },

    #[error("initial value of a geometric progression must not be zero")]
    ZeroInitial,

    #[error("ratio {ratio} does not describe a bounded geometric progression")]
    InvalidRatio { ratio: f64 },

    #[error("expected `first,stride,bound`, found '{input}'")]
    InvalidTriple { input: String },
}

impl SequenceError {
    pub fn out_of_range(offset: usize, size: usize) -> Self {
        SequenceError::OutOfRange { offset, size }
    }

    pub fn invalid_triple(input: impl Into<String>) -> Self {
        SequenceError::InvalidTriple {
            input: input.into(),
        }
    }
}

/// Panic for an `at(offset)` call outside of `0..size`.
#[cold]
#[track_caller]
pub(crate) fn out_of_range(offset: usize, size: usize) -> ! {
    panic!("{}", SequenceError::out_of_range(offset, size))
}

/// Panic for a read from a sequence without remaining elements.
#[cold]
#[track_caller]
pub(crate) fn exhausted() -> ! {
    panic!("{}", SequenceError::Exhausted)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            SequenceError::out_of_range(5, 3).to_string(),
            "offset 5 is out of range for a sequence with 3 remaining elements"
        );
        assert_eq!(SequenceError::Exhausted.to_string(), "sequence is exhausted");
        assert_eq!(
            SequenceError::NonFinite { name: "stride" }.to_string(),
            "stride must be a finite number"
        );
        assert_eq!(
            SequenceError::invalid_triple("1,2").to_string(),
            "expected `first,stride,bound`, found '1,2'"
        );
    }

    #[test]
    #[should_panic(expected = "offset 4 is out of range")]
    fn test_out_of_range_panics() {
        out_of_range(4, 2);
    }
}
