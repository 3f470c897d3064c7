//! Field projections on `binary64` (`f64`) values.

use ieee754::Ieee754;

/// The exponent bias of `binary64`.
pub const BIAS: i64 = 1023;

/// The raw bits of `-0.0f64`.
pub const NEGATIVE_ZERO_BITS: u64 = 0x8000_0000_0000_0000;

/// Returns the sign bit of `f` (`1` means negative).
pub fn unpack_sign(f: f64) -> u64 {
    if f.decompose_raw().0 { 1 } else { 0 }
}

/// Returns the biased exponent field of `f` minus the bias.
///
/// Zeros and subnormals yield `-1023`, infinities and NaN yield `1024`.
pub fn unpack_unbiased_exponent(f: f64) -> i64 {
    i64::from(f.decompose_raw().1) - BIAS
}

/// Returns the 52 stored significand bits of `f`.
pub fn unpack_significand(f: f64) -> u64 {
    f.decompose_raw().2
}
