//! Arbitrary-precision arithmetic helpers.
//!
//! Value-level operations over `BigInt` with no knowledge of the expression
//! tree. Plain operators (`+`, `-`, `*`, `&`, `|`, `^`, comparisons) are
//! used directly where `num-bigint` provides them; this module holds the
//! operations that need width arguments, two's-complement conventions, or
//! the division checks the folder reports on.

use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};

/// Why a division or modulo could not be evaluated.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub(crate) enum ArithError {
    /// Division and modulo are only defined for non-negative operands.
    NegativeOperand,
    /// The divisor is zero.
    DivideByZero,
}

/// Division, defined only for non-negative operands and a non-zero divisor.
pub(crate) fn checked_div(a: &BigInt, b: &BigInt) -> Result<BigInt, ArithError> {
    if a.is_negative() || b.is_negative() {
        return Err(ArithError::NegativeOperand);
    }
    if b.is_zero() {
        return Err(ArithError::DivideByZero);
    }
    Ok(a / b)
}

/// Modulo, defined only for non-negative operands and a non-zero divisor.
pub(crate) fn checked_rem(a: &BigInt, b: &BigInt) -> Result<BigInt, ArithError> {
    if a.is_negative() || b.is_negative() {
        return Err(ArithError::NegativeOperand);
    }
    if b.is_zero() {
        return Err(ArithError::DivideByZero);
    }
    Ok(a % b)
}

/// Arithmetic left shift.
pub(crate) fn shift_left(value: &BigInt, amount: u32) -> BigInt {
    value << amount
}

/// Arithmetic right shift (rounds toward negative infinity).
pub(crate) fn shift_right(value: &BigInt, amount: u32) -> BigInt {
    value >> amount
}

/// Infinite-precision two's-complement bitwise negation: `-value - 1`.
pub(crate) fn complement(value: &BigInt) -> BigInt {
    -(value + BigInt::one())
}

/// All-ones mask of the given width.
pub(crate) fn mask(width: u32) -> BigInt {
    (BigInt::one() << width) - BigInt::one()
}

/// Extract bits `[lsb, msb]` inclusive.
pub(crate) fn slice_bits(value: &BigInt, msb: u32, lsb: u32) -> BigInt {
    (value >> lsb) & mask(msb - lsb + 1)
}

/// Join two bit strings: `left` becomes the high bits above `right_width`.
pub(crate) fn concat_bits(left: &BigInt, right: &BigInt, right_width: u32) -> BigInt {
    shift_left(left, right_width) + right
}
