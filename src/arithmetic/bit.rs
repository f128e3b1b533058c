//! Single-bit arithmetic primitives.
//!
//! One-bit analogues of a CPU's add-with-carry and subtract-with-borrow
//! instructions. Every multi-bit operation in this crate is a ripple of
//! these two functions from the ones place upward.

/// Calculate `a + b + carry`, returning the sum bit and the new carry.
///
/// The sum is the three-way exclusive or; the carry is the majority of the
/// three inputs.
#[inline(always)]
#[must_use]
pub const fn adc(a: bool, b: bool, carry: bool) -> (bool, bool) {
    let sum = a ^ b ^ carry;
    let carry = (a & b) | (carry & (a ^ b));
    (sum, carry)
}

/// Calculate `a - b - borrow`, returning the difference bit and the new
/// borrow.
#[inline(always)]
#[must_use]
pub const fn sbb(a: bool, b: bool, borrow: bool) -> (bool, bool) {
    let diff = a ^ b ^ borrow;
    let borrow = (!a & b) | (!(a ^ b) & borrow);
    (diff, borrow)
}
