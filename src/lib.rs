//! IEEE 754-2008 `binary16` codec.
//!
//! Converts between half-precision bit patterns (`u16`, laid out as
//! `s(1) | e(5) | m(10)`) and the host's `f32` and `f64`. All operations are
//! pure functions on scalars; no operation fails. Out-of-range inputs to the
//! field helpers are truncated to their field width, and every special `f32`
//! or `f64` value (zeros, subnormals, infinities, NaN, overflow) maps to a
//! well-defined half.
//!
//! Packing rounds to nearest with ties rounded *up* (away from zero in
//! magnitude), not ties-to-even. Values that are finite but would round up
//! into the half's infinity encoding saturate to the largest finite half,
//! `±65504`.
//!
//! The raw functions work on `u16` patterns directly. The [`f16`] type wraps a
//! pattern for callers that prefer a typed value.
//!
//! [`f16`]: struct.f16.html

#![doc(html_root_url = "https://docs.rs/binary16/0.1.0")]
#![warn(missing_debug_implementations)]
#![warn(missing_docs)]

#[macro_use] extern crate bitflags;
#[macro_use] extern crate log;
extern crate ieee754;
extern crate num_traits;

mod classify;
mod convert;
mod f16_mod;
mod fields;
pub mod binary32;
pub mod binary64;

pub use classify::{Classified, classify, example_nan, is_infinite, is_nan, raw_binary_string};
pub use convert::{pack_f32, pack_f64, unpack_f32, unpack_f64};
pub use f16_mod::f16;
pub use fields::{
    pack_sign, pack_significand, pack_unbiased_exponent, unpack_sign, unpack_significand,
    unpack_unbiased_exponent,
};

/// Positive zero (`+0.0`).
pub const POSITIVE_ZERO: u16 = 0x0000;
/// Negative zero (`-0.0`).
pub const NEGATIVE_ZERO: u16 = 0x8000;
/// Positive infinity.
pub const POSITIVE_INFINITY: u16 = 0x7C00;
/// Negative infinity.
pub const NEGATIVE_INFINITY: u16 = 0xFC00;
/// The exponent bias of `binary16`.
pub const BIAS: i32 = 15;

bitflags! {
    /// The fields of a `binary16` pattern.
    pub struct Fields: u16 {
        /// Sign bit.
        const SIGN        = 0b10000000_00000000;
        /// 5-bit biased exponent.
        ///
        /// All-zero for zeros and subnormals, all-one for infinities and NaN.
        const EXPONENT    = 0b01111100_00000000;
        /// 10 stored significand (fraction) bits.
        const SIGNIFICAND = 0b00000011_11111111;
    }
}
