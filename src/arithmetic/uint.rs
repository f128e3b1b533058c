//! This module contains the [`BitUint`] variable-width unsigned integer,
//! stored as an explicit most-significant-first bit vector.

use alloc::{vec, vec::Vec};
use core::{
    borrow::Borrow,
    cmp::Ordering,
    error::Error,
    fmt::{self, Debug, Display, Formatter},
    hash::{Hash, Hasher},
    ops::{
        Add, AddAssign, BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor,
        BitXorAssign, Mul, MulAssign, Not, Sub, SubAssign,
    },
};

use num_traits::{One, Zero};
use zeroize::Zeroize;

use crate::{arithmetic::bit, bits::BitIteratorBE};

/// Errors from converting between [`BitUint`] and native integers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConversionError {
    /// A negative value was passed where an unsigned value is required.
    NegativeValue,
    /// The value does not fit the width of the target integer type.
    Overflow,
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeValue => {
                write!(f, "negative value has no unsigned representation")
            }
            Self::Overflow => {
                write!(f, "bit pattern exceeds the target integer width")
            }
        }
    }
}

impl Error for ConversionError {}

/// Heap-allocated unsigned integer stored as an explicit bit vector.
///
/// Index 0 holds the most significant bit and the last index holds the ones
/// place. The width is whatever the producing operation left behind; leading
/// zeroes are stored, displayed, and only ignored by value comparisons.
///
/// Operands of different widths are always aligned at the ones place, never
/// at the top. Each instance owns its storage exclusively; `Clone` is a deep
/// copy and no operation ever aliases another instance's bits.
#[derive(Clone, Zeroize)]
pub struct BitUint {
    bits: Vec<bool>,
}

impl BitUint {
    /// Builds a value from its most-significant-first bit sequence.
    ///
    /// # Panics
    ///
    /// Panics if `bits` is empty; a value has at least one bit.
    #[must_use]
    pub fn from_bits(bits: Vec<bool>) -> Self {
        assert!(!bits.is_empty(), "a value has at least one bit");
        Self { bits }
    }

    /// Returns the stored bits, most significant first.
    #[must_use]
    pub fn as_bits(&self) -> &[bool] {
        &self.bits
    }

    /// The zero value: a single unset bit.
    #[must_use]
    pub fn zero() -> Self {
        Self { bits: vec![false] }
    }

    /// The one value, at the same two-bit width the integer constructors
    /// produce for it.
    #[must_use]
    pub fn one() -> Self {
        Self { bits: vec![false, true] }
    }

    /// Number of bits currently allocated, leading zeroes included.
    #[must_use]
    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Minimum number of bits needed to encode this value; zero encodes in
    /// none.
    #[must_use]
    pub fn num_bits(&self) -> usize {
        self.bit_be_trimmed_iter().count()
    }

    /// The `i`-th bit counting from the least significant; `false` beyond
    /// the allocated width.
    #[must_use]
    pub fn get_bit(&self, i: usize) -> bool {
        if i < self.bits.len() {
            self.bits[self.bits.len() - 1 - i]
        } else {
            false
        }
    }

    /// Returns true if this value is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !self.bits.iter().any(|&b| b)
    }

    /// Returns true if this value is odd.
    #[must_use]
    pub fn is_odd(&self) -> bool {
        self.get_bit(0)
    }

    /// Returns true if this value is even.
    #[must_use]
    pub fn is_even(&self) -> bool {
        !self.is_odd()
    }

    /// Replaces `self` with its two's complement: every bit inverted, plus
    /// one.
    ///
    /// This is the transient negation facility behind [`Self::to_i64`],
    /// subtraction and multiplication rather than a standalone arithmetic
    /// operation; the result re-enters the unsigned representation directly.
    ///
    /// Negating the zero value grows it by one bit: inverting zero yields
    /// all ones and the increment carries out of the top.
    pub fn negate(&mut self) {
        for b in &mut self.bits {
            *b = !*b;
        }
        *self += Self::one();
    }

    /// Reconstructs the value as a native unsigned integer, folding the bits
    /// most significant first.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Overflow`] when the value needs more than
    /// 64 bits.
    pub fn to_u64(&self) -> Result<u64, ConversionError> {
        if self.num_bits() > u64::BITS as usize {
            return Err(ConversionError::Overflow);
        }
        Ok(self
            .bit_be_trimmed_iter()
            .fold(0u64, |value, b| (value << 1) | u64::from(b)))
    }

    /// Interprets the bit pattern as a two's-complement signed integer: a
    /// set most-significant bit means the value is the negation of its
    /// two's complement.
    ///
    /// # Errors
    ///
    /// Returns [`ConversionError::Overflow`] when the interpreted value is
    /// outside the `i64` range.
    pub fn to_i64(&self) -> Result<i64, ConversionError> {
        if self.bits[0] {
            let mut magnitude = self.clone();
            magnitude.negate();
            let magnitude = magnitude.to_u64()?;
            if magnitude > 1u64 << 63 {
                return Err(ConversionError::Overflow);
            }
            #[allow(clippy::cast_possible_wrap)]
            let magnitude = magnitude as i64;
            Ok(magnitude.wrapping_neg())
        } else {
            i64::try_from(self.to_u64()?)
                .map_err(|_| ConversionError::Overflow)
        }
    }
}

// ----------- From Impls -----------

/// Construction from unsigned primitives: the minimal binary representation
/// plus one leading guard zero, so every constructed value reads as
/// non-negative under the two's-complement interpretation. Zero maps to the
/// single-bit zero value.
macro_rules! impl_from_primitive {
    ($int:ty) => {
        impl From<$int> for BitUint {
            fn from(val: $int) -> BitUint {
                if val == 0 {
                    return BitUint::zero();
                }
                let mut bits = vec![false];
                bits.extend(val.bit_be_trimmed_iter());
                BitUint { bits }
            }
        }
    };
}

impl_from_primitive!(u8);
impl_from_primitive!(u16);
impl_from_primitive!(u32);
impl_from_primitive!(u64);
impl_from_primitive!(usize);

/// Fallible construction from signed primitives; negative input has no
/// unsigned representation and is rejected.
macro_rules! impl_try_from_signed {
    ($int:ty, $uint:ty) => {
        impl TryFrom<$int> for BitUint {
            type Error = ConversionError;

            fn try_from(val: $int) -> Result<BitUint, ConversionError> {
                if val < 0 {
                    return Err(ConversionError::NegativeValue);
                }
                #[allow(clippy::cast_sign_loss)]
                let val = val as $uint;
                Ok(BitUint::from(val))
            }
        }
    };
}

impl_try_from_signed!(i8, u8);
impl_try_from_signed!(i16, u16);
impl_try_from_signed!(i32, u32);
impl_try_from_signed!(i64, u64);
impl_try_from_signed!(isize, usize);

impl TryFrom<&BitUint> for u64 {
    type Error = ConversionError;

    fn try_from(value: &BitUint) -> Result<u64, ConversionError> {
        value.to_u64()
    }
}

impl TryFrom<&BitUint> for i64 {
    type Error = ConversionError;

    fn try_from(value: &BitUint) -> Result<i64, ConversionError> {
        value.to_i64()
    }
}

// ----------- Traits Impls -----------

impl Display for BitUint {
    /// Renders `0b` followed by every stored bit, most significant first,
    /// with no grouping and no leading-zero trimming.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str("0b")?;
        for &b in &self.bits {
            f.write_str(if b { "1" } else { "0" })?;
        }
        Ok(())
    }
}

impl Debug for BitUint {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{self}")
    }
}

impl Default for BitUint {
    fn default() -> Self {
        Self::zero()
    }
}

impl PartialEq for BitUint {
    /// Equality by numeric value; leading zeroes do not participate.
    fn eq(&self, other: &Self) -> bool {
        self.bit_be_trimmed_iter().eq(other.bit_be_trimmed_iter())
    }
}

impl Eq for BitUint {}

impl Hash for BitUint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Leading zeroes are invisible to equality, so they must be
        // invisible to the hash as well.
        self.num_bits().hash(state);
        for b in self.bit_be_trimmed_iter() {
            b.hash(state);
        }
    }
}

impl Ord for BitUint {
    #[inline]
    fn cmp(&self, other: &Self) -> Ordering {
        match self.num_bits().cmp(&other.num_bits()) {
            Ordering::Equal => {}
            order => return order,
        }
        self.bit_be_trimmed_iter().cmp(other.bit_be_trimmed_iter())
    }
}

impl PartialOrd for BitUint {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl BitIteratorBE for BitUint {
    fn bit_be_iter(&self) -> impl Iterator<Item = bool> {
        self.bits.iter().copied()
    }
}

impl Zero for BitUint {
    fn zero() -> Self {
        Self::zero()
    }

    fn is_zero(&self) -> bool {
        Self::is_zero(self)
    }
}

impl One for BitUint {
    fn one() -> Self {
        Self::one()
    }
}

impl<B: Borrow<Self>> BitAndAssign<B> for BitUint {
    /// Conjunction aligned at the ones place. Positions the right operand
    /// does not cover are implicit zeroes, so the left operand's excess
    /// high bits are cleared. The width never changes.
    fn bitand_assign(&mut self, rhs: B) {
        let rhs = rhs.borrow();
        let width = self.bit_len();
        for i in 0..width {
            let b = self.get_bit(i) & rhs.get_bit(i);
            self.bits[width - 1 - i] = b;
        }
    }
}

impl<B: Borrow<Self>> BitAnd<B> for BitUint {
    type Output = Self;

    fn bitand(mut self, rhs: B) -> Self::Output {
        self &= rhs;
        self
    }
}

impl<B: Borrow<Self>> BitOrAssign<B> for BitUint {
    /// Disjunction aligned at the ones place, touching only the overlap of
    /// the two widths. The width never changes, so high bits of a longer
    /// right operand are lost; this is a documented limitation of the
    /// width-preserving representation.
    fn bitor_assign(&mut self, rhs: B) {
        let rhs = rhs.borrow();
        let width = self.bit_len();
        for i in 0..width.min(rhs.bit_len()) {
            let b = self.get_bit(i) | rhs.get_bit(i);
            self.bits[width - 1 - i] = b;
        }
    }
}

impl<B: Borrow<Self>> BitOr<B> for BitUint {
    type Output = Self;

    fn bitor(mut self, rhs: B) -> Self::Output {
        self |= rhs;
        self
    }
}

impl<B: Borrow<Self>> BitXorAssign<B> for BitUint {
    /// Exclusive or aligned at the ones place; same overlap-only contract
    /// as the `|=` operator.
    fn bitxor_assign(&mut self, rhs: B) {
        let rhs = rhs.borrow();
        let width = self.bit_len();
        for i in 0..width.min(rhs.bit_len()) {
            let b = self.get_bit(i) ^ rhs.get_bit(i);
            self.bits[width - 1 - i] = b;
        }
    }
}

impl<B: Borrow<Self>> BitXor<B> for BitUint {
    type Output = Self;

    fn bitxor(mut self, rhs: B) -> Self::Output {
        self ^= rhs;
        self
    }
}

impl Not for BitUint {
    type Output = Self;

    /// Inverts every bit at unchanged width. This is plain one's
    /// complement; see [`BitUint::negate`] for two's complement.
    fn not(mut self) -> Self::Output {
        for b in &mut self.bits {
            *b = !*b;
        }
        self
    }
}

impl<B: Borrow<Self>> AddAssign<B> for BitUint {
    /// Ripple-carry addition from the ones place, with the shorter operand
    /// zero-padded to the longer width. A carry out of the top grows the
    /// result by one leading `1` bit.
    fn add_assign(&mut self, rhs: B) {
        let rhs = rhs.borrow();
        let width = self.bit_len().max(rhs.bit_len());

        // Least significant first while rippling; reversed into storage
        // order at the end.
        let mut sum = Vec::with_capacity(width + 1);
        let mut carry = false;
        for i in 0..width {
            let (s, c) = bit::adc(self.get_bit(i), rhs.get_bit(i), carry);
            sum.push(s);
            carry = c;
        }
        if carry {
            sum.push(true);
        }
        sum.reverse();
        self.bits = sum;
    }
}

impl<B: Borrow<Self>> Add<B> for BitUint {
    type Output = Self;

    fn add(mut self, rhs: B) -> Self::Output {
        self += rhs;
        self
    }
}

impl<B: Borrow<Self>> SubAssign<B> for BitUint {
    /// Borrow-propagating subtraction at the wider of the two widths.
    ///
    /// The final borrow is the magnitude test: if it is set the true result
    /// is negative, and the unsigned type clamps it to the zero value at
    /// the working width instead of wrapping or failing.
    fn sub_assign(&mut self, rhs: B) {
        let rhs = rhs.borrow();
        let width = self.bit_len().max(rhs.bit_len());

        let mut diff = Vec::with_capacity(width);
        let mut borrow = false;
        for i in 0..width {
            let (d, b) = bit::sbb(self.get_bit(i), rhs.get_bit(i), borrow);
            diff.push(d);
            borrow = b;
        }
        if borrow {
            diff.fill(false);
        }
        diff.reverse();
        self.bits = diff;
    }
}

impl<B: Borrow<Self>> Sub<B> for BitUint {
    type Output = Self;

    fn sub(mut self, rhs: B) -> Self::Output {
        self -= rhs;
        self
    }
}

impl<B: Borrow<Self>> MulAssign<B> for BitUint {
    /// Booth-recoded shift-and-add multiplication at a working width of
    /// `self.bit_len() + rhs.bit_len()` bits, which always holds the full
    /// product.
    ///
    /// The multiplier is scanned least significant first through a two-bit
    /// window `(bit[i], bit[i - 1])`, with `bit[-1] = 0` and implicit
    /// zeroes above the top: `10` subtracts the aligned multiplicand from
    /// the accumulator, `01` adds it, `00` and `11` do nothing. The
    /// accumulator arithmetic is fixed-width two's complement, so transient
    /// negative partial results resolve to the unsigned product by the last
    /// step.
    fn mul_assign(&mut self, rhs: B) {
        let rhs = rhs.borrow();
        let width = self.bit_len() + rhs.bit_len();

        // Multiplicand zero-extended to the working width; shifted left one
        // place per recoding step to stay aligned with the window.
        let mut addend = vec![false; width];
        addend[width - self.bit_len()..].copy_from_slice(&self.bits);

        let mut acc = vec![false; width];
        let mut prev = false;
        for i in 0..=rhs.bit_len() {
            let cur = rhs.get_bit(i);
            match (cur, prev) {
                (true, false) => wrapping_sub_assign(&mut acc, &addend),
                (false, true) => wrapping_add_assign(&mut acc, &addend),
                _ => {}
            }
            shl1(&mut addend);
            prev = cur;
        }
        self.bits = acc;
    }
}

impl<B: Borrow<Self>> Mul<B> for BitUint {
    type Output = Self;

    fn mul(mut self, rhs: B) -> Self::Output {
        self *= rhs;
        self
    }
}

// Fixed-width two's-complement helpers for the multiplier's accumulator.
// The working width bounds the true product, so dropped carries never lose
// information.

fn wrapping_add_assign(acc: &mut [bool], rhs: &[bool]) {
    let mut carry = false;
    for (a, &b) in acc.iter_mut().rev().zip(rhs.iter().rev()) {
        let (s, c) = bit::adc(*a, b, carry);
        *a = s;
        carry = c;
    }
}

fn wrapping_sub_assign(acc: &mut [bool], rhs: &[bool]) {
    let mut borrow = false;
    for (a, &b) in acc.iter_mut().rev().zip(rhs.iter().rev()) {
        let (d, bo) = bit::sbb(*a, b, borrow);
        *a = d;
        borrow = bo;
    }
}

fn shl1(bits: &mut [bool]) {
    bits.rotate_left(1);
    if let Some(last) = bits.last_mut() {
        *last = false;
    }
}

#[cfg(all(test, feature = "std"))]
mod test {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn constructs_minimal_width_with_guard_bit() {
        assert_eq!(BitUint::from(5u8).to_string(), "0b0101");
        assert_eq!(BitUint::from(1u8).to_string(), "0b01");
        assert_eq!(BitUint::from(4u16).to_string(), "0b0100");
        assert_eq!(BitUint::from(0u8).to_string(), "0b0");
        assert_eq!(BitUint::from(0u8).bit_len(), 1);
    }

    #[test]
    fn rejects_negative_construction() {
        assert_eq!(
            BitUint::try_from(-1i64),
            Err(ConversionError::NegativeValue)
        );
        assert_eq!(
            BitUint::try_from(i8::MIN),
            Err(ConversionError::NegativeValue)
        );
        assert_eq!(BitUint::try_from(7i32), Ok(BitUint::from(7u32)));
    }

    #[test]
    fn clone_is_independent() {
        let original = BitUint::from(12u8);
        let mut copy = original.clone();
        copy += BitUint::one();
        assert_eq!(original.to_u64(), Ok(12));
        assert_eq!(copy.to_u64(), Ok(13));
    }

    #[test]
    fn addition_concrete() {
        let sum = BitUint::from(5u8) + BitUint::from(3u8);
        assert_eq!(sum.to_u64(), Ok(8));
        assert_eq!(sum.to_string(), "0b1000");
    }

    #[test]
    fn addition_carries_into_a_new_bit() {
        let mut all_ones = BitUint::from_bits(vec![true, true]);
        all_ones += BitUint::one();
        assert_eq!(all_ones.to_string(), "0b100");
    }

    #[test]
    fn subtraction_clamps_to_zero() {
        let clamped = BitUint::from(3u8) - BitUint::from(5u8);
        assert!(clamped.is_zero());
        // The working width survives the clamp.
        assert_eq!(clamped.to_string(), "0b0000");
    }

    #[test]
    fn subtraction_concrete() {
        let diff = BitUint::from(8u8) - BitUint::from(3u8);
        assert_eq!(diff.to_u64(), Ok(5));
    }

    #[test]
    fn multiplication_concrete() {
        let product = BitUint::from(6u8) * BitUint::from(7u8);
        assert_eq!(product.to_u64(), Ok(42));
        // Result width is the sum of the operand widths.
        assert_eq!(product.bit_len(), 8);
    }

    #[test]
    fn multiplication_by_zero_and_one() {
        let x = BitUint::from(13u8);
        assert!((x.clone() * BitUint::zero()).is_zero());
        assert_eq!((x.clone() * BitUint::one()).to_u64(), Ok(13));
        assert_eq!((BitUint::one() * &x).to_u64(), Ok(13));
    }

    #[test]
    fn bitwise_concrete() {
        let a = BitUint::from(0b1100u8);
        let b = BitUint::from(0b1010u8);
        assert_eq!((a.clone() & &b).to_u64(), Ok(0b1000));
        assert_eq!((a.clone() | &b).to_u64(), Ok(0b1110));
        assert_eq!((a.clone() ^ &b).to_u64(), Ok(0b0110));
    }

    #[test]
    fn and_clears_uncovered_high_bits() {
        // Left is wider: its high bits meet implicit zeroes.
        let wide = BitUint::from(0b11111u8);
        let narrow = BitUint::from(0b11u8);
        let masked = wide.clone() & &narrow;
        assert_eq!(masked.to_u64(), Ok(0b11));
        assert_eq!(masked.bit_len(), wide.bit_len());
    }

    #[test]
    fn or_and_xor_never_extend_the_left_operand() {
        // Right is wider: only the overlap is combined, the rest of the
        // right operand is lost.
        let narrow = BitUint::from(1u8);
        let wide = BitUint::from(0b1100u8);
        assert_eq!((narrow.clone() | &wide).to_u64(), Ok(1));
        assert_eq!((narrow.clone() ^ &wide).to_u64(), Ok(1));
        assert_eq!((narrow | &wide).bit_len(), 2);
    }

    #[test]
    fn negation_is_twos_complement() {
        let mut value = BitUint::from(5u8);
        value.negate();
        assert_eq!(value.to_string(), "0b1011");
        assert_eq!(value.to_i64(), Ok(-5));
        value.negate();
        assert_eq!(value.to_string(), "0b0101");
    }

    #[test]
    fn negating_zero_grows_by_the_carry_bit() {
        let mut zero = BitUint::zero();
        zero.negate();
        assert_eq!(zero.to_string(), "0b10");
    }

    #[test]
    fn signed_interpretation() {
        let minus_eight =
            BitUint::from_bits(vec![true, false, false, false]);
        assert_eq!(minus_eight.to_i64(), Ok(-8));
        assert_eq!(minus_eight.to_u64(), Ok(8));

        let minus_one = BitUint::from_bits(vec![true; 64]);
        assert_eq!(minus_one.to_i64(), Ok(-1));

        assert_eq!(BitUint::from(9u8).to_i64(), Ok(9));
    }

    #[test]
    fn conversion_overflow() {
        let too_wide = BitUint::from_bits(vec![true; 65]);
        assert_eq!(too_wide.to_u64(), Err(ConversionError::Overflow));

        let mut big_unsigned = vec![false];
        big_unsigned.extend(vec![true; 64]);
        let big_unsigned = BitUint::from_bits(big_unsigned);
        assert_eq!(big_unsigned.to_u64(), Ok(u64::MAX));
        assert_eq!(big_unsigned.to_i64(), Err(ConversionError::Overflow));
    }

    #[test]
    fn equality_and_ordering_ignore_leading_zeroes() {
        let narrow = BitUint::from_bits(vec![true, false, true]);
        let wide = BitUint::from_bits(vec![false, false, true, false, true]);
        assert_eq!(narrow, wide);
        assert_eq!(BitUint::zero(), BitUint::from_bits(vec![false; 7]));

        assert!(BitUint::from(3u8) < BitUint::from(5u8));
        assert!(BitUint::from(300u16) > BitUint::from(5u8));
    }

    #[test]
    fn zero_and_one_traits() {
        assert!(<BitUint as Zero>::zero().is_zero());
        let x = BitUint::from(21u8);
        assert_eq!((<BitUint as One>::one() * &x).to_u64(), Ok(21));
        assert!(BitUint::one().is_odd());
        assert!(BitUint::zero().is_even());
    }

    #[test]
    fn roundtrip_from_u64() {
        proptest!(|(n: u64)| {
            prop_assert_eq!(BitUint::from(n).to_u64(), Ok(n));
        });
    }

    #[test]
    fn and_is_idempotent() {
        proptest!(|(n: u64)| {
            let x = BitUint::from(n);
            prop_assert_eq!(x.clone() & &x, x);
        });
    }

    #[test]
    fn xor_with_self_is_zero_at_own_width() {
        proptest!(|(n: u64)| {
            let x = BitUint::from(n);
            let zeroed = x.clone() ^ &x;
            prop_assert!(zeroed.is_zero());
            prop_assert_eq!(zeroed.bit_len(), x.bit_len());
        });
    }

    #[test]
    fn or_with_zero_is_identity() {
        proptest!(|(n: u64)| {
            let x = BitUint::from(n);
            prop_assert_eq!(x.clone() | BitUint::zero(), x);
        });
    }

    #[test]
    fn addition_commutes() {
        proptest!(|(a: u64, b: u64)| {
            let lhs = BitUint::from(a) + BitUint::from(b);
            let rhs = BitUint::from(b) + BitUint::from(a);
            prop_assert_eq!(lhs, rhs);
        });
    }

    #[test]
    fn addition_matches_native() {
        proptest!(|(a: u32, b: u32)| {
            let sum = BitUint::from(a) + BitUint::from(b);
            prop_assert_eq!(sum.to_u64(), Ok(u64::from(a) + u64::from(b)));
        });
    }

    #[test]
    fn subtraction_inverts_addition() {
        proptest!(|(a: u64, b: u64)| {
            let roundtrip = (BitUint::from(a) + BitUint::from(b))
                - BitUint::from(b);
            prop_assert_eq!(roundtrip.to_u64(), Ok(a));
        });
    }

    #[test]
    fn subtraction_saturates_like_native() {
        proptest!(|(a: u64, b: u64)| {
            let diff = BitUint::from(a) - BitUint::from(b);
            prop_assert_eq!(diff.to_u64(), Ok(a.saturating_sub(b)));
        });
    }

    #[test]
    fn multiplication_matches_native() {
        proptest!(|(a: u32, b: u32)| {
            let product = BitUint::from(a) * BitUint::from(b);
            prop_assert_eq!(
                product.to_u64(),
                Ok(u64::from(a) * u64::from(b))
            );
        });
    }

    #[test]
    fn negation_round_trips_for_nonzero_values() {
        proptest!(|(n in 1u64..)| {
            let x = BitUint::from(n);
            let mut y = x.clone();
            y.negate();
            y.negate();
            prop_assert_eq!(y.as_bits(), x.as_bits());
        });
    }
}
