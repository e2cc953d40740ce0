pub const DIGITS: [char; 10] = ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

pub const LIMB_BITS: u32 = u32::BITS;

pub const LIMB_BASE: u64 = 1 << LIMB_BITS;

pub const LIMB_BASE_F64: f64 = LIMB_BASE as f64;

pub const LIMB_MAX: u32 = u32::MAX;

/// Highest bit of a limb, the sign bit of a two's-complement pattern.
pub const SIGN_BIT: u32 = 1 << (LIMB_BITS - 1);

/// Number of limbs a [`CowVec`](crate::CowVec) holds without allocating.
pub const INLINE_CAPACITY: usize = 7;

pub const DECIMAL_BASE: u64 = 10;
