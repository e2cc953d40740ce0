//! Big Integer \
//! This crate provides:
//! - [`BigInt`]: Arbitrary-precision signed integers. Bitwise operations and right shifts behave as if BigInt were represented in two's-complement notation.
//! - [`CowVec`]: The limb storage behind it. Up to seven elements live inline, longer sequences share one heap buffer between clones until one of them is written to.
//! - [`limb_ops`]: Multiply, divide and add a limb sequence by a single word, in any base that fits.
//!
//! Neither type is thread-safe: shared buffers are reference counted with [`std::rc::Rc`].
//!
//! Division and remainder by zero panic, like they do for the primitive integers.
//! [`str::parse`] validates decimal input, while `From<&str>` trusts it.

mod big_int;
mod big_int_constants;
mod cow_vec;
mod decimal;
mod error;
pub mod limb_ops;

pub use big_int::{compare, BigInt};
pub use big_int_constants::{INLINE_CAPACITY, LIMB_BASE, LIMB_BITS};
pub use cow_vec::CowVec;
pub use error::ParseBigIntError;
