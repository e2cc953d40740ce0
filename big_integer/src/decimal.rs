//! Decimal text to [`BigInt`] and back.
//!
//! Both directions work on a sequence of decimal digits, least significant first, and only
//! ever multiply, divide or add it by a single word, so no big-by-big multiplication is
//! needed for the base conversion.

use std::fmt::{self, Debug, Display};
use std::str::FromStr;

use crate::big_int::BigInt;
use crate::big_int_constants::*;
use crate::cow_vec::CowVec;
use crate::error::ParseBigIntError;
use crate::limb_ops::{add_small, div_small, mul_small, trim_zeros};

fn split_sign(text: &str) -> (bool, &str) {
    match text.as_bytes().first() {
        Some(b'-') => (false, &text[1..]),
        Some(b'+') => (true, &text[1..]),
        _ => (true, text),
    }
}

// 实现解析
impl BigInt {
    /// Parses an optional sign followed by decimal digits, without checking the digits.
    ///
    /// Anything other than ASCII digits after the sign gives an unspecified value.
    /// Use [`str::parse`] to have the input validated instead.
    pub fn from_decimal_unchecked(text: &str) -> BigInt {
        let (non_negative, digits) = split_sign(text);
        let mut decimal: CowVec<u32> = digits
            .bytes()
            .rev()
            .map(|b| b.wrapping_sub(b'0') as u32)
            .collect();
        if decimal.is_empty() {
            decimal.push(0);
        }
        trim_zeros(&mut decimal);

        // Peel off one bit at a time: the parity of the number is the parity of its last digit.
        let mut mag = CowVec::from_slice(&[0u32]);
        let mut bit = 0;
        while !(decimal.len() == 1 && decimal[0] == 0) {
            if decimal[0] & 1 == 1 {
                let top = mag.len() - 1;
                mag[top] |= 1 << bit;
            }
            div_small(&mut decimal, DECIMAL_BASE, 2);
            bit += 1;
            if bit == LIMB_BITS {
                bit = 0;
                mag.push(0);
            }
        }
        BigInt::from_parts(non_negative, mag)
    }

    /// Canonical decimal form: no leading zeros, `-` only for negative values.
    pub fn to_decimal_string(&self) -> String {
        let digits = self.magnitude_to_string();
        if self.is_negative() {
            format!("-{}", digits)
        } else {
            digits
        }
    }

    fn magnitude_to_string(&self) -> String {
        let mut decimal = CowVec::from_slice(&[0u32]);
        for &limb in self.limbs().iter().rev() {
            mul_small(&mut decimal, DECIMAL_BASE, LIMB_BASE);
            add_small(&mut decimal, DECIMAL_BASE, limb as u64);
        }
        decimal.iter().rev().map(|d| DIGITS[*d as usize]).collect()
    }
}

impl From<&str> for BigInt {
    fn from(val: &str) -> Self {
        BigInt::from_decimal_unchecked(val)
    }
}

impl FromStr for BigInt {
    type Err = ParseBigIntError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        let (_, digits) = split_sign(text);
        if digits.is_empty() {
            return Err(ParseBigIntError::Empty);
        }
        let offset = text.len() - digits.len();
        if let Some((index, ch)) = digits.char_indices().find(|(_, ch)| !ch.is_ascii_digit()) {
            return Err(ParseBigIntError::InvalidDigit { ch, index: offset + index });
        }
        Ok(BigInt::from_decimal_unchecked(text))
    }
}

// 实现打印
impl Display for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(self.is_non_negative(), "", &self.magnitude_to_string())
    }
}

impl Debug for BigInt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BigInt({})", self)
    }
}
