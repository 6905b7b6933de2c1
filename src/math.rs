//! Number helpers used when deriving axis labels.
//!
//! Degenerate inputs (zero, NaN, infinities) come back unchanged instead
//! of producing garbage from `log10`/`powf`.

use std::f64::consts::PI;

/// Degrees to radians, single precision.
pub const FDEG2RAD: f32 = std::f32::consts::PI / 180.0;
/// Radians to degrees, single precision.
pub const FRAD2DEG: f32 = 180.0 / std::f32::consts::PI;
/// Degrees to radians, double precision.
pub const DEG2RAD: f64 = PI / 180.0;
/// Radians to degrees, double precision.
pub const RAD2DEG: f64 = 180.0 / PI;

/// Round `number` to its single most significant digit, keeping the sign.
///
/// Uses `f64::round`, i.e. halves round away from zero (`0.25 -> 0.3`,
/// `-2.5 -> -3`). Powers of ten map to themselves. Subnormal inputs are
/// scaled in two steps so the power of ten stays finite. Magnitudes whose
/// rounded leading digit exceeds `f64::MAX` (e.g. `1.7e308 -> 2e308`)
/// become infinite.
///
/// ```
/// use chartkit::math::round_to_next_significant;
/// assert_eq!(round_to_next_significant(1234.0), 1000.0);
/// assert_eq!(round_to_next_significant(0.0456), 0.05);
/// ```
pub fn round_to_next_significant(number: f64) -> f64 {
    if !number.is_finite() || number == 0.0 {
        return number;
    }

    let d = number.abs().log10().ceil();
    let pw = 1 - d as i32;
    let digit = if pw > f64::MAX_10_EXP {
        // Subnormals: 10^pw alone would overflow.
        let head = 10f64.powf(f64::from(pw - f64::MAX_10_EXP));
        (number * head * 10f64.powf(f64::from(f64::MAX_10_EXP))).round()
    } else if pw >= 0 {
        (number * 10f64.powf(f64::from(pw))).round()
    } else {
        (number / 10f64.powf(f64::from(-pw))).round()
    };

    // Decimal parsing is correctly rounded, so `digit * 10^-pw` lands on
    // the nearest f64 instead of carrying the error of the scale factor.
    format!("{}e{}", digit as i64, -pw)
        .parse()
        .unwrap_or_else(|_| digit * 10f64.powf(f64::from(-pw)))
}

/// Number of decimal places needed to show `number` with its leading digit
/// plus two digits of padding.
///
/// The result is negative for magnitudes of 1000 and up; clamp before
/// using it as a digit count. Negative inputs use their magnitude and
/// non-finite inputs yield 0.
pub fn decimals(number: f64) -> i32 {
    if number == 0.0 || !number.is_finite() {
        return 0;
    }

    let i = round_to_next_significant(number).abs();
    (-i.log10()).ceil() as i32 + 2
}

/// The next representable `f64` above `number`.
///
/// Infinities and NaN are returned as-is. Used to make an inclusive upper
/// bound out of an exclusive comparison.
pub fn next_up(number: f64) -> f64 {
    if !number.is_finite() {
        return number;
    }
    if number == 0.0 {
        return f64::from_bits(1);
    }

    let bits = number.to_bits();
    if number > 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}
