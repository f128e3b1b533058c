/*!
Variable-width unsigned integer arithmetic over explicit bit vectors.

> Note that `bituint` is still `0.*.*`, so breaking changes
> [may occur at any time](https://semver.org/#spec-item-4). If you must depend
> on `bituint`, we recommend pinning to a specific version, i.e., `=0.y.z`.

The [`BitUint`] type stores an unsigned integer as an owned sequence of
booleans, most significant bit first, and reimplements the arithmetic a CPU
performs in hardware one bit at a time: ripple-carry addition,
borrow-propagating subtraction with clamping at zero, two's-complement
negation, and Booth-recoded shift-and-add multiplication. It is useful where
the bit-level algorithm itself is the point, not the numeric throughput.

## Example

```
use bituint::BitUint;

let six = BitUint::from(6u8);
let seven = BitUint::from(7u8);
let product = six * &seven;
assert_eq!(product.to_u64(), Ok(42));
```
*/

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

pub mod arithmetic;
pub mod bits;

pub use arithmetic::{BitUint, ConversionError};
