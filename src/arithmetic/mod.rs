//! Bit-level arithmetic on variable-width unsigned integers.
//!
//! The building blocks live in [`bit`] (single-bit add-with-carry and
//! subtract-with-borrow) and the integer type itself in [`uint`].

pub mod bit;
pub mod uint;

pub use uint::{BitUint, ConversionError};
