//! Raw bit-field access on `binary16` patterns.
//!
//! None of these check their input. Values that don't fit the field are
//! truncated to its width.

use {Fields, BIAS};

/// Places `s` in the sign bit. Only the lowest bit of `s` is used.
pub fn pack_sign(s: u32) -> u16 {
    ((s << 15) & u32::from(Fields::SIGN.bits())) as u16
}

/// Biases the exponent `e` and places it in the exponent field.
///
/// `e` should be in `-15..=16`: `-15` is the exponent field of zeros and
/// subnormals, `16` that of infinities and NaN. Other values wrap around.
pub fn pack_unbiased_exponent(e: i32) -> u16 {
    (e.wrapping_add(BIAS).wrapping_shl(10) & i32::from(Fields::EXPONENT.bits())) as u16
}

/// Places the low 10 bits of `m` in the significand field.
pub fn pack_significand(m: u32) -> u16 {
    (m & u32::from(Fields::SIGNIFICAND.bits())) as u16
}

/// Returns the sign bit of `h` (`1` means negative).
pub fn unpack_sign(h: u16) -> u32 {
    u32::from(h >> 15) & 1
}

/// Returns the exponent of `h` with the bias removed.
///
/// This is `-15` for zeros and subnormals, `-14..=15` for normal values and
/// `16` for infinities and NaN.
pub fn unpack_unbiased_exponent(h: u16) -> i32 {
    i32::from((h & Fields::EXPONENT.bits()) >> 10) - BIAS
}

/// Returns the 10 stored significand bits of `h`.
pub fn unpack_significand(h: u16) -> u32 {
    u32::from(h & Fields::SIGNIFICAND.bits())
}
