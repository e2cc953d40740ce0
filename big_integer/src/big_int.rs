//! # BigInt
//! Arbitrary-precision signed integers. Bitwise operations and right shifts behave as if
//! BigInt were represented in infinite two's-complement notation.
//!
//! The magnitude is a [`CowVec`] of 32-bit limbs, least significant first, so values up to
//! `2^224` never allocate and cloning a larger value only bumps a reference count.
//! # Example
//! ```
//! use big_integer::BigInt;
//!
//! let a: BigInt = "10000000000000".into();
//! let b: BigInt = "900000000000".into();
//! assert_eq!((&a + &b).to_string(), "10900000000000");
//! assert_eq!((&a - &b).to_string(), "9100000000000");
//! assert_eq!((&a * &b).to_string(), "9000000000000000000000000");
//! assert_eq!((&a / &b).to_string(), "11");
//! assert_eq!((&a % &b).to_string(), "100000000000");
//! assert_eq!((&a << 10).to_string(), "10240000000000000");
//! assert_eq!((&a >> 10).to_string(), "9765625000");
//! ```

use std::cmp::{max, Ordering};
use std::hash::{Hash, Hasher};
use std::ops::{
    Add, AddAssign,
    Sub, SubAssign,
    Mul, MulAssign,
    Div, DivAssign,
    Rem, RemAssign,
    BitAnd, BitAndAssign,
    BitOr, BitOrAssign,
    BitXor, BitXorAssign,
    Shl, ShlAssign,
    Shr, ShrAssign,
    Neg, Not,
};

use log::trace;

use crate::big_int_constants::*;
use crate::cow_vec::CowVec;
use crate::limb_ops::{add_small, mul_small, trim_zeros};

#[derive(Clone)]
pub struct BigInt {
    non_negative: bool,
    mag: CowVec<u32>,
}

// 杂项辅助函数
impl BigInt {
    /// Builds a value from a sign and a magnitude that may still carry leading zero limbs.
    pub(crate) fn from_parts(non_negative: bool, mag: CowVec<u32>) -> BigInt {
        let mut value = BigInt { non_negative, mag };
        value.normalize();
        value
    }

    fn normalize(&mut self) {
        if self.mag.is_empty() {
            self.mag.push(0);
        }
        trim_zeros(&mut self.mag);
        self.verify_sign();
    }

    /// Zero is never negative.
    fn verify_sign(&mut self) {
        if self.is_zero() {
            self.non_negative = true;
        }
    }

    fn negate(&mut self) {
        self.non_negative = !self.non_negative;
        self.verify_sign();
    }

    /// Limb `pos` of the magnitude, `0` past the most significant limb.
    pub fn limb(&self, pos: usize) -> u32 {
        if pos < self.mag.len() {
            self.mag[pos]
        } else {
            0
        }
    }

    pub fn limb_count(&self) -> usize {
        self.mag.len()
    }

    /// The magnitude, least significant limb first.
    pub fn limbs(&self) -> &[u32] {
        self.mag.as_slice()
    }

    pub fn is_non_negative(&self) -> bool {
        self.non_negative
    }

    pub fn is_negative(&self) -> bool {
        !self.non_negative
    }

    pub fn is_zero(&self) -> bool {
        self.mag.len() == 1 && self.mag[0] == 0
    }

    pub fn signum(&self) -> i8 {
        if self.is_negative() {
            -1
        } else if self.is_zero() {
            0
        } else {
            1
        }
    }

    pub fn abs(&self) -> BigInt {
        BigInt { non_negative: true, mag: self.mag.clone() }
    }

    /// Unary plus.
    pub fn pos(&self) -> BigInt {
        self.clone()
    }
}

// 实现构造
impl BigInt {
    pub fn zero() -> BigInt {
        BigInt::value_of(0, true)
    }

    pub fn one() -> BigInt {
        BigInt::value_of(1, true)
    }

    fn value_of(mut val: u128, non_negative: bool) -> BigInt {
        let mut mag = CowVec::new();
        loop {
            mag.push(val as u32);
            val >>= LIMB_BITS;
            if val == 0 {
                break;
            }
        }
        BigInt::from_parts(non_negative, mag)
    }
}

impl Default for BigInt {
    fn default() -> Self {
        BigInt::zero()
    }
}

macro_rules! impl_unsigned_to_big_int {
    ($($u: ty),*) => {
    $(
    impl From<$u> for BigInt {
        fn from(val: $u) -> Self {
            BigInt::value_of(val as u128, true)
        }
    }
    )*
    };
}

macro_rules! impl_signed_to_big_int {
    ($($i: ty),*) => {
    $(
    impl From<$i> for BigInt {
        fn from(val: $i) -> Self {
            BigInt::value_of(val.unsigned_abs() as u128, val >= 0)
        }
    }
    )*
    };
}
impl_unsigned_to_big_int!(u8, u16, u32, u64, u128, usize);
impl_signed_to_big_int!(i8, i16, i32, i64, i128, isize);

// 实现加法和减法
impl BigInt {
    fn add_in_place(&mut self, other: &BigInt) {
        if self.non_negative == other.non_negative {
            let n = max(self.mag.len(), other.mag.len()) + 1;
            self.mag.resize(n);
            let mut carry = 0u64;
            for (i, limb) in self.mag.as_mut_slice().iter_mut().enumerate() {
                let sum = carry + *limb as u64 + other.limb(i) as u64;
                *limb = sum as u32;
                carry = sum >> LIMB_BITS;
            }
            self.normalize();
        } else if self.non_negative {
            self.sub_in_place(&-other);
        } else {
            // -a + b = -(a - b)
            self.non_negative = true;
            self.sub_in_place(other);
            self.negate();
        }
    }

    fn sub_in_place(&mut self, other: &BigInt) {
        if self.non_negative == other.non_negative {
            let n = max(self.mag.len(), other.mag.len());
            self.mag.resize(n);
            let limbs = self.mag.as_mut_slice();

            let mut borrow = 0i64;
            for (i, limb) in limbs.iter_mut().enumerate() {
                let difference = *limb as i64 - other.limb(i) as i64 - borrow;
                borrow = (difference < 0) as i64;
                *limb = (difference + LIMB_BASE as i64) as u32;
            }

            // The subtrahend was larger: the limbs hold 2^(32n) - |result|.
            if borrow != 0 {
                self.non_negative = !self.non_negative;
                borrow = 0;
                for limb in limbs.iter_mut() {
                    let difference = -(*limb as i64) - borrow;
                    borrow = (difference < 0) as i64;
                    *limb = (difference + LIMB_BASE as i64) as u32;
                }
            }
            self.normalize();
        } else if self.non_negative {
            self.add_in_place(&-other);
        } else {
            // -a - b = -(a + b)
            self.non_negative = true;
            self.add_in_place(other);
            self.negate();
        }
    }
}

// 实现乘法
impl BigInt {
    fn mul_in_place(&mut self, other: &BigInt) {
        let n = self.mag.len();
        let m = other.mag.len();
        let mut product: CowVec<u32> = CowVec::with_len(n + m);
        {
            let out = product.as_mut_slice();
            for (i, &x) in self.mag.iter().enumerate() {
                let mut carry = 0u64;
                let mut j = 0;
                while j < m || carry != 0 {
                    let value = carry + out[i + j] as u64 + x as u64 * other.limb(j) as u64;
                    out[i + j] = value as u32;
                    carry = value >> LIMB_BITS;
                    j += 1;
                }
            }
        }
        self.mag = product;
        self.non_negative = self.non_negative == other.non_negative;
        self.normalize();
    }
}

// 实现除法和取模
impl BigInt {
    /// Long division of magnitudes, most significant quotient limb first.
    /// Returns `(quotient, remainder)`. `divisor` must be non-zero.
    fn long_division(dividend: &CowVec<u32>, divisor: &CowVec<u32>) -> (CowVec<u32>, CowVec<u32>) {
        let n = dividend.len();
        let m = divisor.len();
        let mut remainder = dividend.clone();
        if n < m {
            return (CowVec::from_slice(&[0]), remainder);
        }
        trace!("long division of {} limbs by {} limbs", n, m);

        let second = if m >= 2 { divisor[m - 2] as f64 } else { 0.0 };
        let leading = divisor[m - 1] as f64 + second / LIMB_BASE_F64;

        let mut quotient = CowVec::with_len(n - m + 1);
        for i in (0..=n - m).rev() {
            let limb_at = |pos: usize| if pos < remainder.len() { remainder[pos] as f64 } else { 0.0 };
            let window = limb_at(i + m - 1) + limb_at(i + m) * LIMB_BASE_F64;
            let estimate = (window / leading) as u64;

            // The estimate is off by at most two in either direction; the digit never
            // reaches the limb base since the remainder stays below `divisor << 32(i + 1)`.
            let mut low = estimate.saturating_sub(2);
            let mut high = estimate.saturating_add(3).min(LIMB_BASE);
            while low + 1 < high {
                let middle = (low + high) / 2;
                if BigInt::fits_under(&remainder, divisor, middle, i) {
                    low = middle;
                } else {
                    high = middle;
                }
            }

            if low != 0 {
                BigInt::subtract_shifted(&mut remainder, divisor, low, i);
            }
            quotient[i] = low as u32;
        }
        trim_zeros(&mut quotient);
        (quotient, remainder)
    }

    /// Whether `divisor * digit << 32 * shift` is at most `remainder`.
    fn fits_under(remainder: &CowVec<u32>, divisor: &CowVec<u32>, digit: u64, shift: usize) -> bool {
        let mut product = divisor.clone();
        mul_small(&mut product, LIMB_BASE, digit);

        let len = product.len() + shift;
        if len != remainder.len() {
            return len < remainder.len();
        }
        for j in (0..product.len()).rev() {
            let (p, r) = (product[j], remainder[j + shift]);
            if p != r {
                return p < r;
            }
        }
        true
    }

    /// `remainder -= divisor * digit << 32 * shift`, which must not go negative.
    fn subtract_shifted(remainder: &mut CowVec<u32>, divisor: &CowVec<u32>, digit: u64, shift: usize) {
        let mut product = divisor.clone();
        mul_small(&mut product, LIMB_BASE, digit);

        let limbs = remainder.as_mut_slice();
        let mut borrow = 0i64;
        for (j, &p) in product.iter().enumerate() {
            let difference = limbs[shift + j] as i64 - p as i64 - borrow;
            borrow = (difference < 0) as i64;
            limbs[shift + j] = (difference + LIMB_BASE as i64) as u32;
        }
        let mut pos = shift + product.len();
        while borrow != 0 {
            let (difference, overflow) = limbs[pos].overflowing_sub(1);
            limbs[pos] = difference;
            borrow = overflow as i64;
            pos += 1;
        }
        trim_zeros(remainder);
    }

    /// Truncating division, returning `(self / other, self % other)`.
    ///
    /// The quotient rounds toward zero and the remainder takes the sign of `self`, so
    /// `q * other + r == self`, the same as Rust's primitive integers.
    ///
    /// # Panics
    /// If `other` is zero.
    pub fn div_rem(&self, other: &BigInt) -> (BigInt, BigInt) {
        if other.is_zero() {
            panic!("attempt to divide by zero");
        }
        let (quotient, remainder) = BigInt::long_division(&self.mag, &other.mag);
        (
            BigInt::from_parts(self.non_negative == other.non_negative, quotient),
            BigInt::from_parts(self.non_negative, remainder),
        )
    }

    fn div_in_place(&mut self, other: &BigInt) {
        let (quotient, _) = self.div_rem(other);
        *self = quotient;
    }

    /// `self - other * (self / other)`
    fn rem_in_place(&mut self, other: &BigInt) {
        let (_, remainder) = self.div_rem(other);
        *self = remainder;
    }
}

// 实现位运算
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BitOp {
    And,
    Or,
    Xor,
}

impl BitOp {
    fn apply(self, a: u32, b: u32) -> u32 {
        match self {
            BitOp::And => a & b,
            BitOp::Or => a | b,
            BitOp::Xor => a ^ b,
        }
    }
}

impl BigInt {
    /// The limb that extends the two's-complement pattern to the left.
    fn fill(&self) -> u32 {
        if self.non_negative { 0 } else { LIMB_MAX }
    }

    /// Two's-complement pattern with one extra limb, so the top bit is the sign.
    fn to_twos_complement(&self) -> CowVec<u32> {
        let mut pattern = self.mag.clone();
        pattern.push(0);
        if !self.non_negative {
            for limb in pattern.as_mut_slice() {
                *limb = !*limb;
            }
            add_small(&mut pattern, LIMB_BASE, 1);
        }
        pattern
    }

    fn from_twos_complement(pattern: CowVec<u32>) -> BigInt {
        let mut pattern = pattern;
        let negative = pattern.last().map_or(false, |top| top & SIGN_BIT != 0);
        if negative {
            for limb in pattern.as_mut_slice() {
                let (difference, borrow) = limb.overflowing_sub(1);
                *limb = difference;
                if !borrow {
                    break;
                }
            }
            for limb in pattern.as_mut_slice() {
                *limb = !*limb;
            }
        }
        BigInt::from_parts(!negative, pattern)
    }

    fn apply_bitwise(&mut self, other: &BigInt, op: BitOp) {
        let mut pattern = self.to_twos_complement();
        let other_pattern = other.to_twos_complement();
        let n = max(pattern.len(), other_pattern.len());
        while pattern.len() < n {
            pattern.push(self.fill());
        }
        for (i, limb) in pattern.as_mut_slice().iter_mut().enumerate() {
            let rhs = if i < other_pattern.len() { other_pattern[i] } else { other.fill() };
            *limb = op.apply(*limb, rhs);
        }
        *self = BigInt::from_twos_complement(pattern);
    }
}

// 实现移位
impl BigInt {
    fn shl_in_place(&mut self, n: u32) {
        if n == 0 || self.is_zero() {
            return;
        }
        let n_limbs = (n / LIMB_BITS) as usize;
        let n_bits = n % LIMB_BITS;

        let mut shifted = CowVec::with_len(self.mag.len() + n_limbs + 1);
        {
            let out = shifted.as_mut_slice();
            for (i, &limb) in self.mag.iter().enumerate() {
                let wide = (limb as u64) << n_bits;
                out[i + n_limbs] |= wide as u32;
                out[i + n_limbs + 1] |= (wide >> LIMB_BITS) as u32;
            }
        }
        self.mag = shifted;
        self.normalize();
    }

    /// Arithmetic shift: rounds toward negative infinity.
    fn shr_in_place(&mut self, n: u32) {
        if n == 0 || self.is_zero() {
            return;
        }
        let fill = self.fill();
        let pattern = self.to_twos_complement();
        let len = pattern.len();
        let n_limbs = (n / LIMB_BITS) as usize;
        let n_bits = n % LIMB_BITS;

        if n_limbs >= len {
            *self = BigInt::from_twos_complement(CowVec::from_slice(&[fill]));
            return;
        }

        let mut shifted = CowVec::with_len(len - n_limbs);
        {
            let out = shifted.as_mut_slice();
            for (i, limb) in out.iter_mut().enumerate() {
                let low = pattern[i + n_limbs] as u64;
                let high = (if i + n_limbs + 1 < len { pattern[i + n_limbs + 1] } else { fill }) as u64;
                *limb = (((high << LIMB_BITS) | low) >> n_bits) as u32;
            }
        }
        *self = BigInt::from_twos_complement(shifted);
    }
}

// 实现大小比较
/// Three-way comparison through the sign of `a - b`.
pub fn compare(a: &BigInt, b: &BigInt) -> Ordering {
    let difference = a - b;
    if difference.is_negative() {
        Ordering::Less
    } else if difference.is_zero() {
        Ordering::Equal
    } else {
        Ordering::Greater
    }
}

impl PartialEq for BigInt {
    fn eq(&self, other: &Self) -> bool {
        compare(self, other).is_eq()
    }
}
impl Eq for BigInt {}

impl PartialOrd for BigInt {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(compare(self, other))
    }
}

impl Ord for BigInt {
    fn cmp(&self, other: &Self) -> Ordering {
        compare(self, other)
    }
}

impl Hash for BigInt {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.non_negative.hash(state);
        self.mag.hash(state);
    }
}

// 实现自增和自减
impl BigInt {
    /// `++x`
    pub fn inc(&mut self) -> &mut Self {
        self.add_in_place(&BigInt::one());
        self
    }

    /// `--x`
    pub fn dec(&mut self) -> &mut Self {
        self.sub_in_place(&BigInt::one());
        self
    }

    /// `x++`: increments and returns the previous value.
    pub fn post_inc(&mut self) -> BigInt {
        let previous = self.clone();
        self.inc();
        previous
    }

    /// `x--`: decrements and returns the previous value.
    pub fn post_dec(&mut self) -> BigInt {
        let previous = self.clone();
        self.dec();
        previous
    }
}

// 实现运算符
macro_rules! impl_binary_op {
    ($($op: ident $method: ident $op_assign: ident $method_assign: ident => $imp: ident;)*) => {
    $(
    impl $op_assign<&BigInt> for BigInt {
        fn $method_assign(&mut self, rhs: &BigInt) {
            self.$imp(rhs);
        }
    }

    impl $op_assign for BigInt {
        fn $method_assign(&mut self, rhs: BigInt) {
            self.$imp(&rhs);
        }
    }

    impl $op<&BigInt> for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: &BigInt) -> Self::Output {
            self.$imp(rhs);
            self
        }
    }

    impl $op for BigInt {
        type Output = BigInt;

        fn $method(mut self, rhs: BigInt) -> Self::Output {
            self.$imp(&rhs);
            self
        }
    }

    impl $op<&BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: &BigInt) -> Self::Output {
            self.clone().$method(rhs)
        }
    }

    impl $op<BigInt> for &BigInt {
        type Output = BigInt;

        fn $method(self, rhs: BigInt) -> Self::Output {
            self.clone().$method(&rhs)
        }
    }
    )*
    };
}

impl BigInt {
    fn and_in_place(&mut self, other: &BigInt) {
        self.apply_bitwise(other, BitOp::And);
    }

    fn or_in_place(&mut self, other: &BigInt) {
        self.apply_bitwise(other, BitOp::Or);
    }

    fn xor_in_place(&mut self, other: &BigInt) {
        self.apply_bitwise(other, BitOp::Xor);
    }
}

impl_binary_op! {
    Add add AddAssign add_assign => add_in_place;
    Sub sub SubAssign sub_assign => sub_in_place;
    Mul mul MulAssign mul_assign => mul_in_place;
    Div div DivAssign div_assign => div_in_place;
    Rem rem RemAssign rem_assign => rem_in_place;
    BitAnd bitand BitAndAssign bitand_assign => and_in_place;
    BitOr bitor BitOrAssign bitor_assign => or_in_place;
    BitXor bitxor BitXorAssign bitxor_assign => xor_in_place;
}

macro_rules! impl_shift_op {
    ($($op: ident $method: ident $op_assign: ident $method_assign: ident => $imp: ident;)*) => {
    $(
    impl $op_assign<u32> for BigInt {
        fn $method_assign(&mut self, n: u32) {
            self.$imp(n);
        }
    }

    impl $op<u32> for BigInt {
        type Output = BigInt;

        fn $method(mut self, n: u32) -> Self::Output {
            self.$imp(n);
            self
        }
    }

    impl $op<u32> for &BigInt {
        type Output = BigInt;

        fn $method(self, n: u32) -> Self::Output {
            self.clone().$method(n)
        }
    }
    )*
    };
}

impl_shift_op! {
    Shl shl ShlAssign shl_assign => shl_in_place;
    Shr shr ShrAssign shr_assign => shr_in_place;
}

// 实现取反
impl Neg for BigInt {
    type Output = BigInt;

    fn neg(mut self) -> Self::Output {
        self.negate();
        self
    }
}

impl Neg for &BigInt {
    type Output = BigInt;

    fn neg(self) -> Self::Output {
        self.clone().neg()
    }
}

/// `!x == -x - 1`
impl Not for BigInt {
    type Output = BigInt;

    fn not(mut self) -> Self::Output {
        self.negate();
        self.dec();
        self
    }
}

impl Not for &BigInt {
    type Output = BigInt;

    fn not(self) -> Self::Output {
        self.clone().not()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn big(text: &str) -> BigInt {
        text.parse().unwrap()
    }

    #[test]
    fn test_from() {
        let a = BigInt::from(12i8);
        assert_eq!(a.limbs(), &[12]);
        assert!(a.is_non_negative());

        let a = BigInt::from(-100i16);
        assert_eq!(a.limbs(), &[100]);
        assert!(a.is_negative());

        let a = BigInt::from(i64::MIN);
        assert_eq!(a.limbs(), &[0, 0x8000_0000]);
        assert_eq!(a.signum(), -1);

        let a = BigInt::from(u128::MAX);
        assert_eq!(a.limbs(), &[u32::MAX; 4]);

        let zero = BigInt::from(0u8);
        assert_eq!(zero.limbs(), &[0]);
        assert!(zero.is_zero());
        assert!(zero.is_non_negative());
        assert_eq!(zero, BigInt::default());
    }

    #[test]
    fn test_limb() {
        let a = BigInt::from(0x1_0000_0002u64);
        assert_eq!(a.limb_count(), 2);
        assert_eq!(a.limb(0), 2);
        assert_eq!(a.limb(1), 1);
        assert_eq!(a.limb(7), 0);
    }

    #[test]
    fn test_add() {
        assert_eq!(BigInt::from(2) + BigInt::from(3), BigInt::from(5));
        assert_eq!(BigInt::from(-2) + BigInt::from(3), BigInt::from(1));
        assert_eq!(BigInt::from(2) + BigInt::from(-3), BigInt::from(-1));
        assert_eq!(BigInt::from(-2) + BigInt::from(-3), BigInt::from(-5));
        assert_eq!(BigInt::from(u32::MAX) + BigInt::from(1), BigInt::from(1u64 << 32));

        let a = big("123456789012345678901234567890");
        assert_eq!(&a + &BigInt::one(), big("123456789012345678901234567891"));
    }

    #[test]
    fn test_sub() {
        assert_eq!(BigInt::from(5) - BigInt::from(3), BigInt::from(2));
        assert_eq!(BigInt::from(3) - BigInt::from(5), BigInt::from(-2));
        assert_eq!(BigInt::from(-3) - BigInt::from(5), BigInt::from(-8));
        assert_eq!(BigInt::from(-3) - BigInt::from(-5), BigInt::from(2));
        assert_eq!(BigInt::from(1u64 << 32) - BigInt::from(1), BigInt::from(u32::MAX));

        let zero = BigInt::from(-7) - BigInt::from(-7);
        assert!(zero.is_zero());
        assert!(zero.is_non_negative());
        assert_eq!(zero.limbs(), &[0]);
    }

    #[test]
    fn test_mul() {
        let a = big("1000000000000");
        assert_eq!(&a * &a, big("1000000000000000000000000"));
        assert_eq!(BigInt::from(-4) * BigInt::from(6), BigInt::from(-24));
        assert_eq!(BigInt::from(-4) * BigInt::from(-6), BigInt::from(24));

        let zero = BigInt::from(-4) * BigInt::zero();
        assert!(zero.is_non_negative());

        let max = BigInt::from(u64::MAX);
        assert_eq!(&max * &max, BigInt::from(u64::MAX as u128 * u64::MAX as u128));
    }

    #[test]
    fn test_div() {
        assert_eq!(big("120") / big("13"), big("9"));
        assert_eq!(big("10000000000000000000000000000000000") / big("1000"), big("10000000000000000000000000000000"));
        let a = big("124871287894782164876238905710532895792830741278950327951074309571023759712087492109591287094780219747214567876543245678976547897654367543567654678987654321456789087654325678908765432567890876543245678908765432567890876543876543245678907654356789");
        let b = big("5678987654678976543587654678976546789087657876545678976543256789765432456789234567890854376");
        let c = big("21988300642263136800048566126805476040703295625345756336585704044222781621158596876349726562910906651562104831721609088222205401883168960593370061500432215");
        assert_eq!(a / b, c);

        assert_eq!(big("-5") / big("2"), big("-2"));
        assert_eq!(big("5") / big("-2"), big("-2"));
        assert_eq!(big("-5") / big("-2"), big("2"));
        assert!((big("3") / big("-7")).is_non_negative());
    }

    #[test]
    fn test_div_exact_powers() {
        let a = BigInt::one() << 96;
        let b = BigInt::one() << 32;
        assert_eq!(&a / &b, BigInt::one() << 64);
        assert!((&a % &b).is_zero());
    }

    #[test]
    fn test_mod() {
        assert_eq!(big("12") % big("8"), big("4"));
        assert_eq!(big("10000000000000000") % big("10"), BigInt::zero());
        let a = big("23456789873625348759607098765432345678909876325346546543456453573434839063464369876543245");
        let b = big("526738495607659438721653478560954837265378495607");
        let r = big("393707270751296419349581795408095683999332705291");
        assert_eq!(a % b, r);

        assert_eq!(big("-5") % big("2"), big("-1"));
        assert_eq!(big("5") % big("-2"), big("1"));
    }

    #[test]
    #[should_panic(expected = "attempt to divide by zero")]
    fn test_div_by_zero() {
        let _ = BigInt::from(1) / BigInt::zero();
    }

    #[test]
    fn test_bitwise() {
        assert_eq!(BigInt::from(12) & BigInt::from(10), BigInt::from(8));
        assert_eq!(BigInt::from(12) | BigInt::from(10), BigInt::from(14));
        assert_eq!(BigInt::from(12) ^ BigInt::from(10), BigInt::from(6));
        assert_eq!(BigInt::from(-12) & BigInt::from(10), BigInt::from(-12 & 10));
        assert_eq!(BigInt::from(-12) | BigInt::from(10), BigInt::from(-12 | 10));
        assert_eq!(BigInt::from(-12) ^ BigInt::from(-10), BigInt::from(-12 ^ -10));
        assert_eq!(BigInt::from(-1) & big("340282366920938463463374607431768211455"), big("340282366920938463463374607431768211455"));
    }

    #[test]
    fn test_bitwise_top_bit_set_is_non_negative() {
        let a = BigInt::from(0x8000_0000u32);
        assert_eq!(&a & &a, a);
        assert_eq!(&a | &BigInt::from(1), BigInt::from(0x8000_0001u32));
        assert!((&a ^ &BigInt::from(1)).is_non_negative());
    }

    #[test]
    fn test_not() {
        assert_eq!(!BigInt::from(0), BigInt::from(-1));
        assert_eq!(!BigInt::from(5), BigInt::from(-6));
        assert_eq!(!BigInt::from(-6), BigInt::from(5));
    }

    #[test]
    fn test_shl() {
        assert_eq!(BigInt::from(5) << 2, BigInt::from(20));
        assert_eq!(BigInt::from(-5) << 2, BigInt::from(-20));
        assert_eq!(BigInt::from(1) << 64, BigInt::from(1u128 << 64));
        assert_eq!(BigInt::from(3) << 0, BigInt::from(3));
        assert_eq!(BigInt::from(0xdead_beefu32) << 36, BigInt::from(0xdead_beefu128 << 36));
    }

    #[test]
    fn test_shr() {
        assert_eq!(BigInt::from(20) >> 2, BigInt::from(5));
        assert_eq!(BigInt::from(-20) >> 2, BigInt::from(-5));
        assert_eq!(BigInt::from(-5) >> 1, BigInt::from(-3));
        assert_eq!(BigInt::from(-1) >> 100, BigInt::from(-1));
        assert_eq!(BigInt::from(7) >> 100, BigInt::zero());
        assert_eq!(BigInt::from(1u128 << 100) >> 67, BigInt::from(1u64 << 33));
        assert_eq!(BigInt::from(-(1i128 << 100)) >> 67, BigInt::from(-(1i64 << 33)));
    }

    #[test]
    fn test_compare() {
        assert_eq!(compare(&big("100"), &big("99")), Ordering::Greater);
        assert_eq!(compare(&big("-100"), &big("99")), Ordering::Less);
        assert_eq!(compare(&big("-0"), &big("0")), Ordering::Equal);
        assert!(big("-100") < big("-99"));
        assert!(big("99999999999999999999") > big("9999999999999999999"));
        assert!(big("5") >= big("5"));
        assert!(big("5") <= big("5"));
        assert!(big("5") != big("6"));
    }

    #[test]
    fn test_inc_dec() {
        let mut a = BigInt::from(-1);
        a.inc();
        assert!(a.is_zero());
        assert!(a.is_non_negative());
        assert_eq!(a.post_inc(), BigInt::zero());
        assert_eq!(a, BigInt::one());
        assert_eq!(a.post_dec(), BigInt::one());
        a.dec().dec();
        assert_eq!(a, BigInt::from(-2));
    }

    #[test]
    fn test_copy_independence() {
        let a = BigInt::one() << 300;
        let mut b = a.clone();
        assert_eq!(a.mag.ref_count(), 2);
        b += BigInt::one();
        assert_eq!(a.mag.ref_count(), 1);
        assert_eq!(&b - &a, BigInt::one());
        assert_eq!(a.limb(0), 0);
    }

    #[test]
    fn test_inline_threshold() {
        let below = (BigInt::one() << 224) - BigInt::one();
        assert_eq!(below.limb_count(), INLINE_CAPACITY);
        assert!(below.mag.is_inline());

        let above = &below + &BigInt::one();
        assert_eq!(above.limb_count(), INLINE_CAPACITY + 1);
        assert!(!above.mag.is_inline());

        let back = &above - &BigInt::one();
        assert!(back.mag.is_inline());
        assert_eq!(back, below);
        assert_eq!(&above / &BigInt::from(2), BigInt::one() << 223);
        assert_eq!(&above >> 1, BigInt::one() << 223);
    }

    #[test]
    fn test_abs_neg() {
        assert_eq!(BigInt::from(-9).abs(), BigInt::from(9));
        assert_eq!(-BigInt::from(9), BigInt::from(-9));
        assert_eq!(-(-BigInt::from(9)), BigInt::from(9));
        assert!((-BigInt::zero()).is_non_negative());
        assert_eq!(BigInt::from(-9).pos(), BigInt::from(-9));
    }
}
