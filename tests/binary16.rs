extern crate binary16;
#[macro_use] extern crate proptest;

use binary16::*;

proptest! {
    /// NaN maps to NaN and nothing else does, and the sign bit always
    /// survives packing.
    #[test]
    fn pack_f32_nan_and_sign(bits: u32) {
        let f = f32::from_bits(bits);
        let h = pack_f32(f);
        prop_assert_eq!(is_nan(h), f.is_nan(), "{:#010X} -> {:#06X}", bits, h);
        prop_assert_eq!(unpack_sign(h), bits >> 31);
    }
}

proptest! {
    /// The `f64` path agrees with the `f32` path on every value `f32` can
    /// represent.
    #[test]
    fn pack_f64_matches_f32(bits: u32) {
        let f = f32::from_bits(bits);
        let (h32, h64) = (pack_f32(f), pack_f64(f64::from(f)));
        if f.is_nan() {
            prop_assert!(is_nan(h32) && is_nan(h64));
        } else {
            prop_assert_eq!(h32, h64, "{:#010X}", bits);
        }
    }
}

proptest! {
    /// Packing is monotonic in the magnitude.
    #[test]
    fn pack_f32_monotonic(a: u32, b: u32) {
        let (a, b) = (a & 0x7FFF_FFFF, b & 0x7FFF_FFFF);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        if hi <= 0x7F80_0000 {
            let (lo_h, hi_h) = (pack_f32(f32::from_bits(lo)), pack_f32(f32::from_bits(hi)));
            prop_assert!(lo_h <= hi_h, "{:#010X}->{:#06X} > {:#010X}->{:#06X}", lo, lo_h, hi, hi_h);
        }
    }
}

proptest! {
    /// Values in the half's range come back within its precision.
    #[test]
    fn pack_unpack_close(f: f64) {
        if f.abs() < 65520.0 {
            let back = unpack_f64(pack_f64(f));
            let tolerance = f.abs() * 2f64.powi(-10) + 2f64.powi(-24);
            prop_assert!((back - f).abs() <= tolerance, "{} -> {} (+-{})", f, back, tolerance);
        }
    }
}

proptest! {
    #[test]
    fn f16_bits_roundtrip(bits: u16) {
        let h = f16::from_bits(bits);
        prop_assert_eq!(h.to_bits(), bits);
        prop_assert_eq!(h.classify().pack(), bits);
        prop_assert_eq!(h.is_nan(), is_nan(bits));
    }
}

/// Exhaustively test that unpacking and repacking every half results in the
/// same pattern. On the `f64` path NaNs only have to stay NaN, since widening
/// may quiet a signalling NaN.
#[test]
fn unpack_pack_exhaustive() {
    for h in 0..=u16::max_value() {
        let via32 = pack_f32(unpack_f32(h));
        assert_eq!(via32, h, "{:#06X} -> {} -> {:#06X}", h, unpack_f32(h), via32);

        let via64 = pack_f64(unpack_f64(h));
        if is_nan(h) {
            assert!(is_nan(via64), "{:#06X} -> {:#06X}", h, via64);
        } else {
            assert_eq!(via64, h, "{:#06X} -> {} -> {:#06X}", h, unpack_f64(h), via64);
        }
    }
}

/// Every `f32` pattern from the top of the finite range up to infinity, both
/// signs. Rounding pushes these past the `f32` infinity encoding, and none of
/// them may come out as NaN.
#[test]
fn pack_f32_top_of_range() {
    for bits in 0x7F7F_F000..=0x7F80_0000u32 {
        for &bits in &[bits, bits | 0x8000_0000] {
            let f = f32::from_bits(bits);
            let h = pack_f32(f);
            assert!(!is_nan(h), "{:#010X} -> {:#06X}", bits, h);
            assert!(is_infinite(h), "{:#010X} -> {:#06X}", bits, h);
            assert_eq!(unpack_sign(h), bits >> 31);
            assert_eq!(pack_f64(f64::from(f)), h, "{:#010X}", bits);
        }
    }
}

#[test]
fn integers_agree() {
    for i in 0..=u16::max_value() {
        assert_eq!(pack_f32(f32::from(i)), pack_f64(f64::from(i)), "{}", i);
    }
}

/// Maximum error of the integer round-trip, by range of the integer.
const TOLERANCES: &[(u32, u32, f64)] = &[
    (0, 14, 0.001),
    (15, 126, 0.01),
    (127, 1022, 0.1),
    (1023, 2046, 0.2),
    (2047, 4094, 1.0),
    (4095, 8189, 2.0),
    (8190, 16379, 4.0),
    (16380, 32759, 8.0),
    (32760, 65519, 16.0),
    (65520, 65535, 32.0),
];

#[test]
fn integer_roundtrip_tolerance() {
    for &(lo, hi, delta) in TOLERANCES {
        for i in lo..=hi {
            let input = f64::from(i);
            let r = unpack_f64(pack_f64(input));
            assert!((input - r).abs() <= delta, "{} -> {:#06X} -> {} (+-{})", i, pack_f64(input), r, delta);
            assert!(!r.is_infinite());
        }
    }

    let r = unpack_f64(pack_f64(65536.0));
    assert!(r.is_infinite());
}

#[test]
fn negative_integer_roundtrip() {
    for i in 1..=2048 {
        let input = -f64::from(i);
        assert_eq!(unpack_f64(pack_f64(input)).round(), input);
    }
}

#[test]
fn scenarios() {
    assert_eq!(pack_f32(1.0), 0x3C00);
    assert_eq!(pack_f32(-1.0), 0xBC00);
    assert_eq!(pack_f32(2.0), 0x4000);
    assert!((unpack_f32(0x3C00) - 1.0).abs() < 0.001);
    assert!((unpack_f32(0xBC00) + 1.0).abs() < 0.001);
    assert!((unpack_f32(0x4000) - 2.0).abs() < 0.001);
    assert!((unpack_f32(0xC000) + 2.0).abs() < 0.001);

    assert_eq!(pack_f64(f64::INFINITY), POSITIVE_INFINITY);
    assert_eq!(pack_f64(f64::NEG_INFINITY), NEGATIVE_INFINITY);
    assert_eq!(unpack_f64(POSITIVE_INFINITY), f64::INFINITY);
    assert_eq!(unpack_f64(NEGATIVE_INFINITY), f64::NEG_INFINITY);

    assert!(is_nan(pack_f32(f32::NAN)));
    assert!(unpack_f32(example_nan()).is_nan());

    assert_eq!(raw_binary_string(0x3C00), "0011110000000000");
    assert_eq!(raw_binary_string(0x8000), "1000000000000000");

    assert_eq!(pack_f32(-0.0), NEGATIVE_ZERO);
    assert!(unpack_f32(NEGATIVE_ZERO).is_sign_negative());
}

#[test]
fn infinite_integers() {
    for i in 0..=65535 {
        assert!(!is_infinite(pack_f64(f64::from(i))), "{}", i);
    }
    assert!(is_infinite(POSITIVE_INFINITY));
    assert!(is_infinite(NEGATIVE_INFINITY));
    assert!(!is_infinite(example_nan()));
}
