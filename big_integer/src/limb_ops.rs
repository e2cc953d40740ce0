//! Single-word arithmetic on limb sequences stored least significant first.
//!
//! Every function takes the base the sequence is written in: [`LIMB_BASE`](crate::LIMB_BASE)
//! for magnitudes, `10` for decimal digit sequences. Elements must be below `base`, and
//! `element * multiplier + carry` must fit in a `u64`, which holds for base `2^32` with a
//! multiplier below `2^32` and for base `10` with a multiplier up to `2^32`.

use crate::cow_vec::CowVec;

/// Drops most significant zero limbs, keeping at least one.
pub fn trim_zeros(seq: &mut CowVec<u32>) {
    let mut len = seq.len();
    while len > 1 && seq[len - 1] == 0 {
        len -= 1;
    }
    seq.truncate(len);
}

pub fn mul_small(seq: &mut CowVec<u32>, base: u64, multiplier: u64) {
    let mut carry = 0u64;
    let mut i = 0;
    while i < seq.len() || carry != 0 {
        if i == seq.len() {
            seq.push(0);
        }
        let value = seq[i] as u64 * multiplier + carry;
        seq[i] = (value % base) as u32;
        carry = value / base;
        i += 1;
    }
    trim_zeros(seq);
}

/// Divides in place and returns the remainder. `divisor` must be non-zero.
pub fn div_small(seq: &mut CowVec<u32>, base: u64, divisor: u64) -> u64 {
    let mut remainder = 0u64;
    for i in (0..seq.len()).rev() {
        let value = seq[i] as u64 + remainder * base;
        seq[i] = (value / divisor) as u32;
        remainder = value % divisor;
    }
    trim_zeros(seq);
    remainder
}

pub fn add_small(seq: &mut CowVec<u32>, base: u64, addend: u64) {
    let mut carry = addend;
    let mut i = 0;
    while carry != 0 {
        if i == seq.len() {
            seq.push(0);
        }
        let value = seq[i] as u64 + carry;
        seq[i] = (value % base) as u32;
        carry = value / base;
        i += 1;
    }
    trim_zeros(seq);
}
