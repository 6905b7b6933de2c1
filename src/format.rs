//! Axis tick label formatting.

use crate::math::decimals;

/// Fixed-precision formatter for axis values.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AxisValueFormatter {
    pub digits: usize,
    pub thousands_separator: bool,
}

impl Default for AxisValueFormatter {
    fn default() -> Self {
        Self {
            digits: 0,
            thousands_separator: true,
        }
    }
}

impl AxisValueFormatter {
    /// Formatter precise enough to tell apart ticks spaced `interval` apart.
    pub fn from_interval(interval: f64) -> Self {
        Self::with_digits(decimals(interval).max(0) as usize)
    }

    pub fn with_digits(digits: usize) -> Self {
        Self {
            digits,
            ..Self::default()
        }
    }

    pub fn thousands_separator(mut self, enabled: bool) -> Self {
        self.thousands_separator = enabled;
        self
    }

    /// Format `value`, e.g. `1,234.50` for two digits.
    pub fn format(&self, value: f64) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let fixed = format!("{:.*}", self.digits, value.abs());
        let (int_part, frac_part) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        // "-0.00" reads as noise on an axis.
        let is_zero = fixed.bytes().all(|b| b == b'0' || b == b'.');
        let mut result = String::with_capacity(fixed.len() + fixed.len() / 3 + 1);
        if value.is_sign_negative() && !is_zero {
            result.push('-');
        }
        if self.thousands_separator {
            result.push_str(&group_thousands(int_part));
        } else {
            result.push_str(int_part);
        }
        if let Some(frac) = frac_part {
            result.push('.');
            result.push_str(frac);
        }
        result
    }
}

/// Typical spacing between `values` when shown as separate labels: the
/// gap between evenly spaced ticks over their range, or the largest
/// magnitude when they are all equal. Non-finite values are ignored.
pub fn value_interval(values: &[f64]) -> f64 {
    let (count, min, max) = values.iter().copied().filter(|v| v.is_finite()).fold(
        (0usize, f64::INFINITY, f64::NEG_INFINITY),
        |(n, lo, hi), v| (n + 1, lo.min(v), hi.max(v)),
    );
    if count == 0 {
        return 0.0;
    }
    let range = max - min;
    if range > 0.0 {
        range / (count - 1) as f64
    } else {
        max.abs()
    }
}

/// Insert `,` between groups of three digits.
///
/// ```
/// use chartkit::format::group_thousands;
/// assert_eq!(group_thousands("1234567"), "1,234,567");
/// assert_eq!(group_thousands("100"), "100");
/// ```
pub fn group_thousands(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let mut result = String::with_capacity(chars.len() + chars.len() / 3);
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*ch);
    }
    result
}
