//! Lazy, bounded numeric sequence generators
//!
//! This crate provides generators that compute their elements on demand
//! (arithmetic and geometric progressions, the Fibonacci recurrence,
//! interleaved boolean patterns) together with combinators that splice them
//! together without ever materialising the elements.
//!
//! # Examples
//!
//! ```
//! use lazyseq_core::{concat_into, linear, repeat_after, Sequence};
//!
//! // 8 7 6 5 4 3 2 1, then 5 4 3 2 1 twice
//! let seq = repeat_after(linear(8, -1, 1), linear(5, -1, 1), 2);
//! assert_eq!(seq.size(), 18);
//! assert_eq!(seq.at(12), 1);
//!
//! // Mixed element types meet in a common type
//! let mixed = concat_into::<f64, _, _>(linear(8, -1, 1), linear(1.0, 1.0, 8.0));
//! assert_eq!(mixed.size(), 16);
//! ```
//!
//! # Main Components
//!
//! - **Sequence**: The contract every generator and combinator implements
//! - **Linear / Geometric / Fibonacci**: Elementary numeric generators
//! - **InterleavedBits**: Closed-form boolean pattern generator
//! - **Concat / Repeated**: Combinators over other sequences
//! - **approx**: Tolerance based equality for floating point state

pub mod approx;
pub mod combinators;
pub mod concat;
pub mod error;
pub mod fibonacci;
pub mod geometric;
pub mod interleaved;
pub mod linear;
pub mod numeric;
pub mod repeated;
pub mod replica;
pub mod sequence;


pub use approx::{
    abs_approx_equal, abs_approx_equal_within, approx_equal, approx_equal_scaled,
    approx_equal_within,
};
pub use combinators::{
    ascending, concat, concat_into, descending, fibonacci, geometric, interleaved_bits, linear,
    repeat, repeat_after, replicas,
};
pub use concat::Concat;
pub use error::{Result, SequenceError};
pub use fibonacci::Fibonacci;
pub use geometric::Geometric;
pub use interleaved::InterleavedBits;
pub use linear::{Ascending, Descending, Linear};
pub use numeric::Numeric;
pub use repeated::Repeated;
pub use replica::Replica;
pub use sequence::{Iter, Sequence};
