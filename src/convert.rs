//! Conversion between `binary16` patterns and `f32`/`f64`.
//!
//! Everything operates on the raw bit images of the floats. Packing adds 1 at
//! bit 12 of the `f32` significand before dropping the 13 bits that don't fit
//! into a half, which rounds to nearest with ties going up.
//!
//! Useful resources:
//! * http://www.fox-toolkit.org/ftp/fasthalffloatconversion.pdf
//! * https://en.wikipedia.org/wiki/Half-precision_floating-point_format

/// `f32` bit image of `65520.0`. Magnitudes at or above this have a half
/// exponent of 16 (infinity/NaN) after rounding.
const OVERFLOW: u32 = 0x4780_0000;
/// `f32` bit image of `2^-14`, the smallest normal half.
const MIN_NORMAL: u32 = 0x3880_0000;
/// `f32` bit image of `2^-25`. Rounded magnitudes below this flush to zero.
const UNDERFLOW: u32 = 0x3300_0000;
/// Infinity exponent field of `f32`.
const F32_INF: u32 = 0x7F80_0000;
/// Adding this to an `f32` bit image rounds at the 13th bit.
const ROUND: u32 = 0x0000_1000;
/// `(127 - 15) << 23`. Rebiases an `f32` exponent into the half range.
const REBIAS: u32 = 0x3800_0000;

const F32_SIGNIFICAND: u32 = 0x007F_FFFF;
const F32_IMPLICIT_BIT: u32 = 0x0080_0000;

/// Converts an `f32` to the nearest `binary16` pattern.
///
/// * Ties round up (in magnitude).
/// * Magnitudes too small for a half subnormal become signed zero.
/// * Finite values that only reach the infinity encoding because of rounding
///   saturate to `±65504` (`0x7BFF`). Larger finite values become infinity.
/// * NaN becomes NaN. The half payload is bits 22..13 of the `f32` payload,
///   or the quiet bit if those are all zero.
pub fn pack_f32(x: f32) -> u16 {
    let bits = x.to_bits();
    let sign = (bits >> 16) & 0x8000;
    let magnitude = bits & 0x7FFF_FFFF;
    let rounded = magnitude + ROUND;

    let half = if rounded >= OVERFLOW {
        if magnitude >= OVERFLOW {
            // The unrounded magnitude separates finite values from Inf/NaN,
            // `f32::MAX` rounds past `F32_INF`.
            if magnitude < F32_INF {
                trace!("pack_f32: {:#010X} overflows to infinity", bits);
                sign | 0x7C00
            } else {
                let mut payload = (bits & F32_SIGNIFICAND) >> 13;
                if payload == 0 && magnitude > F32_INF {
                    // NaN payload only in the discarded bits
                    payload = 0x0200;
                }
                trace!("pack_f32: {:#010X} is Inf/NaN, payload={:#05X}", bits, payload);
                sign | 0x7C00 | payload
            }
        } else {
            trace!("pack_f32: {:#010X} saturates to max finite", bits);
            sign | 0x7BFF
        }
    } else if rounded >= MIN_NORMAL {
        sign | ((rounded - REBIAS) >> 13)
    } else if rounded < UNDERFLOW {
        trace!("pack_f32: {:#010X} flushes to zero", bits);
        sign
    } else {
        // Demote to a subnormal. The biased f32 exponent is in 101..=112 here,
        // 101 only for magnitudes just below 2^-25 that the pre-rounding
        // pushed over `UNDERFLOW`. Those still shift out to zero.
        let exponent = magnitude >> 23;
        let significand = (bits & F32_SIGNIFICAND) | F32_IMPLICIT_BIT;
        let round = 1u32 << (125 - exponent);
        let demoted = (significand + round) >> (126 - exponent);
        trace!(
            "pack_f32: {:#010X} demoted to subnormal; exp={} sig={:#08X} -> {:#05X}",
            bits, exponent, significand, demoted
        );
        sign | demoted
    };

    half as u16
}

/// Converts an `f64` to the nearest `binary16` pattern.
///
/// The value is first narrowed to `f32`. The half's range and precision are
/// both within `f32`'s, so this yields the same result as [`pack_f32`] on
/// the narrowed value.
///
/// [`pack_f32`]: fn.pack_f32.html
pub fn pack_f64(x: f64) -> u16 {
    pack_f32(x as f32)
}

/// Converts a `binary16` pattern to an `f32`.
///
/// Zeros, subnormals and infinities convert exactly, NaN converts to an
/// `f32` NaN carrying the half's payload in its upper significand bits.
///
/// A normal half with an all-zero significand (other than the smallest
/// exponent) converts to a value slightly above the exact one: the `f32`
/// significand is `0x3FF` instead of `0`. This keeps the result well inside
/// the range of `f32` values that pack back into the same half.
pub fn unpack_f32(h: u16) -> f32 {
    let h = u32::from(h);
    let significand = h & 0x03FF;
    let exponent = h & 0x7C00;
    let sign = (h & 0x8000) << 16;

    let bits = if exponent == 0 && significand == 0 {
        sign
    } else if exponent == 0x7C00 {
        sign | (0x3FC00 << 13) | (significand << 13)
    } else if exponent != 0 {
        let exponent = exponent + 0x1C000;
        let significand = if significand == 0 && exponent > 0x1C400 {
            0x03FF
        } else {
            significand << 13
        };
        sign | (exponent << 13) | significand
    } else {
        // Subnormal: shift the leading 1 into the implicit bit position.
        let mut significand = significand;
        let mut exponent = 0x1C400;
        while significand & 0x0400 == 0 {
            significand <<= 1;
            exponent -= 0x0400;
        }
        significand &= 0x03FF;
        trace!("unpack_f32: subnormal {:#06X} normalized to exp={:#X}", h, exponent >> 10);
        sign | (exponent << 13) | (significand << 13)
    };

    f32::from_bits(bits)
}

/// Converts a `binary16` pattern to an `f64`.
///
/// This widens the result of [`unpack_f32`], which is exact.
///
/// [`unpack_f32`]: fn.unpack_f32.html
pub fn unpack_f64(h: u16) -> f64 {
    f64::from(unpack_f32(h))
}
