//! Predicates on `binary16` patterns and their classification.

use fields::{
    pack_sign, pack_significand, pack_unbiased_exponent, unpack_sign, unpack_significand,
    unpack_unbiased_exponent,
};

/// Returns a NaN pattern (`0x7C01`).
///
/// This is the NaN with the smallest positive payload. Any NaN may be
/// returned by the conversion functions, this is just one of them.
pub fn example_nan() -> u16 {
    pack_unbiased_exponent(16) | pack_significand(1)
}

/// Returns `true` if `h` is positive or negative infinity.
pub fn is_infinite(h: u16) -> bool {
    unpack_unbiased_exponent(h) == 16 && unpack_significand(h) == 0
}

/// Returns `true` if `h` is a NaN (all-one exponent, non-zero significand).
pub fn is_nan(h: u16) -> bool {
    unpack_unbiased_exponent(h) == 16 && unpack_significand(h) > 0
}

/// Renders the 16 bits of `h`, most significant bit first.
///
/// ```
/// assert_eq!(binary16::raw_binary_string(0x3C00), "0011110000000000");
/// ```
pub fn raw_binary_string(h: u16) -> String {
    format!("{:016b}", h)
}

/// A `binary16` pattern separated by the kind of value it represents.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Classified {
    /// All-zero exponent and significand.
    Zero {
        /// `true` for `-0.0`.
        sign: bool,
    },
    /// All-zero exponent, non-zero significand.
    ///
    /// The value is `s * (m / 2^10) * 2^(-14)`.
    Subnormal {
        /// `true` if negative.
        sign: bool,
        /// The 10 significand bits (non-zero).
        significand: u16,
    },
    /// Exponent field neither all-zero nor all-one.
    ///
    /// The value is `s * (1 + m / 2^10) * 2^exponent`.
    Normal {
        /// `true` if negative.
        sign: bool,
        /// Unbiased exponent in `-14..=15`.
        exponent: i8,
        /// The 10 fraction bits. The implicit integer bit is 1.
        significand: u16,
    },
    /// All-one exponent, zero significand.
    Inf {
        /// `true` for negative infinity.
        sign: bool,
    },
    /// All-one exponent, non-zero significand.
    NaN {
        /// The sign bit of the NaN, carries no meaning.
        sign: bool,
        /// The 10 significand bits (non-zero).
        payload: u16,
    },
}

impl Classified {
    /// Converts this classified representation back into the pattern it was
    /// created from.
    pub fn pack(&self) -> u16 {
        let (sign, exponent, significand) = match *self {
            Classified::Zero { sign } => (sign, -15, 0),
            Classified::Subnormal { sign, significand } => (sign, -15, significand),
            Classified::Normal { sign, exponent, significand } => {
                (sign, i32::from(exponent), significand)
            }
            Classified::Inf { sign } => (sign, 16, 0),
            Classified::NaN { sign, payload } => (sign, 16, payload),
        };

        pack_sign(if sign { 1 } else { 0 })
            | pack_unbiased_exponent(exponent)
            | pack_significand(u32::from(significand))
    }
}

/// Classifies `h`, returning the kind of floating-point number it encodes.
pub fn classify(h: u16) -> Classified {
    let sign = unpack_sign(h) == 1;
    let significand = unpack_significand(h) as u16;

    match (unpack_unbiased_exponent(h), significand) {
        (-15, 0) => Classified::Zero { sign },
        (-15, _) => Classified::Subnormal { sign, significand },
        (16, 0) => Classified::Inf { sign },
        (16, payload) => Classified::NaN { sign, payload },
        (exponent, _) => Classified::Normal { sign, exponent: exponent as i8, significand },
    }
}
