use num_traits::{FromPrimitive, ToPrimitive};
use std::fmt;

use classify::{self, Classified};
use convert;
use fields;

/// A 16-bit half precision floating point number.
///
/// This is a thin wrapper around a `binary16` pattern. Equality compares the
/// bits, so `-0.0 != 0.0` and a NaN equals itself. No arithmetic is provided,
/// convert to `f32` for that.
#[repr(transparent)]
#[allow(non_camel_case_types)]
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
pub struct f16(u16);

impl f16 {
    /// `+0.0`
    pub const ZERO: Self         = f16(::POSITIVE_ZERO);
    /// `-0.0`
    pub const NEG_ZERO: Self     = f16(::NEGATIVE_ZERO);
    /// Positive infinity.
    pub const INFINITY: Self     = f16(::POSITIVE_INFINITY);
    /// Negative infinity.
    pub const NEG_INFINITY: Self = f16(::NEGATIVE_INFINITY);

    /// Not a Number (`NaN`).
    ///
    /// Same pattern as returned by [`example_nan`](fn.example_nan.html). The
    /// sign bit is not set.
    pub const NAN: Self          = f16(0x7C01);

    /// Largest finite value, `65504.0`.
    pub const MAX: Self          = f16(0x7BFF);
    /// Smallest positive normal value, `2^-14`.
    pub const MIN_POSITIVE: Self = f16(0x0400);
    /// Smallest positive subnormal value, `2^-24`.
    pub const MIN_POSITIVE_SUBNORMAL: Self = f16(0x0001);

    /// Creates an `f16` from its raw `binary16` pattern.
    pub fn from_bits(bits: u16) -> Self {
        f16(bits)
    }

    /// Returns the raw `binary16` pattern.
    pub fn to_bits(&self) -> u16 {
        self.0
    }

    /// Converts an `f32` to the nearest `f16`. See [`pack_f32`].
    ///
    /// [`pack_f32`]: fn.pack_f32.html
    pub fn from_f32(f: f32) -> Self {
        f16(convert::pack_f32(f))
    }

    /// Converts an `f64` to the nearest `f16`. See [`pack_f64`].
    ///
    /// [`pack_f64`]: fn.pack_f64.html
    pub fn from_f64(f: f64) -> Self {
        f16(convert::pack_f64(f))
    }

    /// Converts `self` to an `f32`. See [`unpack_f32`].
    ///
    /// [`unpack_f32`]: fn.unpack_f32.html
    pub fn to_f32(&self) -> f32 {
        convert::unpack_f32(self.0)
    }

    /// Converts `self` to an `f64`. See [`unpack_f64`].
    ///
    /// [`unpack_f64`]: fn.unpack_f64.html
    pub fn to_f64(&self) -> f64 {
        convert::unpack_f64(self.0)
    }

    /// Returns `true` if `self` is a NaN.
    pub fn is_nan(&self) -> bool {
        classify::is_nan(self.0)
    }

    /// Returns `true` if `self` is positive or negative infinity.
    pub fn is_infinite(&self) -> bool {
        classify::is_infinite(self.0)
    }

    /// Returns `true` if `self` is neither infinite nor NaN.
    pub fn is_finite(&self) -> bool {
        !(self.is_infinite() || self.is_nan())
    }

    /// Returns `true` if `self` is neither zero, subnormal, infinite nor NaN.
    pub fn is_normal(&self) -> bool {
        match self.classify() {
            Classified::Normal {..} => true,
            _ => false,
        }
    }

    /// Returns `true` if `self` is a subnormal (denormal) value.
    pub fn is_subnormal(&self) -> bool {
        match self.classify() {
            Classified::Subnormal {..} => true,
            _ => false,
        }
    }

    /// Returns `true` if the sign bit is set. This includes `-0.0` and NaNs
    /// with the sign bit set.
    pub fn is_sign_negative(&self) -> bool {
        fields::unpack_sign(self.0) == 1
    }

    /// Returns `true` if the sign bit is clear.
    pub fn is_sign_positive(&self) -> bool {
        !self.is_sign_negative()
    }

    /// Returns the unbiased exponent (`-15..=16`).
    pub fn exponent(&self) -> i32 {
        fields::unpack_unbiased_exponent(self.0)
    }

    /// Returns the 10 stored significand bits.
    pub fn significand(&self) -> u32 {
        fields::unpack_significand(self.0)
    }

    /// Classifies `self`, returning the kind of floating-point number its
    /// value indicates.
    pub fn classify(&self) -> Classified {
        classify::classify(self.0)
    }

    /// Renders the 16 bits of `self`, most significant bit first.
    pub fn to_raw_binary_string(&self) -> String {
        classify::raw_binary_string(self.0)
    }
}

impl fmt::Debug for f16 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:#06X}", self.0)
    }
}

impl fmt::Binary for f16 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Binary::fmt(&self.0, f)
    }
}

impl From<f32> for f16 {
    fn from(f: f32) -> Self {
        Self::from_f32(f)
    }
}

impl From<f64> for f16 {
    fn from(f: f64) -> Self {
        Self::from_f64(f)
    }
}

impl From<u8> for f16 {
    fn from(v: u8) -> Self {
        Self::from(f32::from(v))
    }
}

impl From<i8> for f16 {
    fn from(v: i8) -> Self {
        Self::from(f32::from(v))
    }
}

impl From<f16> for f32 {
    fn from(h: f16) -> Self {
        h.to_f32()
    }
}

impl From<f16> for f64 {
    fn from(h: f16) -> Self {
        h.to_f64()
    }
}

// Integer conversions go through `f64`, which holds every half exactly. The
// `f64` impls of `num-traits` truncate toward zero and return `None` for NaN,
// infinities and out-of-range values.

impl ToPrimitive for f16 {
    fn to_i64(&self) -> Option<i64> {
        self.to_f64().to_i64()
    }

    fn to_u64(&self) -> Option<u64> {
        self.to_f64().to_u64()
    }

    fn to_f32(&self) -> Option<f32> {
        Some(f16::to_f32(self))
    }

    fn to_f64(&self) -> Option<f64> {
        Some(f16::to_f64(self))
    }
}

impl FromPrimitive for f16 {
    fn from_i64(n: i64) -> Option<Self> {
        Some(Self::from_f64(n as f64))
    }

    fn from_u64(n: u64) -> Option<Self> {
        Some(Self::from_f64(n as f64))
    }

    fn from_f32(f: f32) -> Option<Self> {
        Some(f16::from_f32(f))
    }

    fn from_f64(f: f64) -> Option<Self> {
        Some(f16::from_f64(f))
    }
}
