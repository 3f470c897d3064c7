//! Field projections on `binary32` (`f32`) values.
//!
//! These reinterpret the bits of the float, they never perform a numeric
//! conversion.

use ieee754::Ieee754;

/// The exponent bias of `binary32`.
pub const BIAS: i32 = 127;

/// The raw bits of `-0.0f32`.
pub const NEGATIVE_ZERO_BITS: u32 = 0x8000_0000;

/// Returns the sign bit of `f` (`1` means negative).
pub fn unpack_sign(f: f32) -> u32 {
    if f.decompose_raw().0 { 1 } else { 0 }
}

/// Returns the biased exponent field of `f` minus the bias.
///
/// Zeros and subnormals yield `-127`, infinities and NaN yield `128`.
pub fn unpack_unbiased_exponent(f: f32) -> i32 {
    i32::from(f.decompose_raw().1) - BIAS
}

/// Returns the 23 stored significand bits of `f`.
pub fn unpack_significand(f: f32) -> u32 {
    f.decompose_raw().2
}
