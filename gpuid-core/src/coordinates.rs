use serde::Serialize;

use crate::error::{GpuidError, Result};

#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, strum_macros::Display)]
#[strum(serialize_all = "lowercase")]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn bound(self) -> f64 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

// north and east are positive numbers
#[derive(Debug, Copy, Clone, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lon: f64) -> Result<Self> {
        Ok(Self {
            lat: check(Axis::Latitude, lat)?,
            lon: check(Axis::Longitude, lon)?,
        })
    }

    /// Both axes in fixed notation with `precision` decimals.
    pub fn rounded(&self, precision: usize) -> (String, String) {
        (to_fixed(self.lat, precision), to_fixed(self.lon, precision))
    }
}

fn check(axis: Axis, value: f64) -> Result<f64> {
    if value.is_finite() && value.abs() <= axis.bound() {
        Ok(value)
    } else {
        Err(GpuidError::InvalidCoordinate { axis, value })
    }
}

/// Formats `x` with `precision` decimals, rounding half away from zero on the exact binary value.
/// Ties never go to even, unlike `format!("{:.*}")`.
///
/// `precision` must not exceed [`MAX_COORD_PRECISION`](crate::profile::MAX_COORD_PRECISION).
pub fn to_fixed(x: f64, precision: usize) -> String {
    let sign = if x < 0.0 { "-" } else { "" };
    let (mantissa, exponent) = decompose(x.abs());
    if exponent >= 0 {
        // integral already, nothing to round
        return format!("{}{:.*}", sign, precision, x.abs());
    }
    let scaled = u128::from(mantissa) * 10u128.pow(precision as u32);
    let shift = exponent.unsigned_abs();
    let units = if shift >= 128 {
        0
    } else {
        let whole = scaled >> shift;
        let rest = scaled - (whole << shift);
        if rest >= 1u128 << (shift - 1) {
            whole + 1
        } else {
            whole
        }
    };

    let digits = format!("{:0width$}", units, width = precision + 1);
    let (int_part, frac_part) = digits.split_at(digits.len() - precision);
    if precision == 0 {
        format!("{sign}{int_part}")
    } else {
        format!("{sign}{int_part}.{frac_part}")
    }
}

/// Splits a finite, non-negative double into `mantissa * 2^exponent`.
fn decompose(x: f64) -> (u64, i32) {
    let bits = x.to_bits();
    let biased = ((bits >> 52) & 0x7ff) as i32;
    let fraction = bits & ((1u64 << 52) - 1);
    if biased == 0 {
        (fraction, -1074)
    } else {
        (fraction | (1u64 << 52), biased - 1075)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounds_like_fixed_notation() {
        assert_eq!(to_fixed(49.00443, 2), "49.00");
        assert_eq!(to_fixed(2.51703, 2), "2.52");
        assert_eq!(to_fixed(48.845784, 4), "48.8458");
        assert_eq!(to_fixed(1.16, 4), "1.1600");
        assert_eq!(to_fixed(-34.880901, 2), "-34.88");
        assert_eq!(to_fixed(180.0, 4), "180.0000");
        assert_eq!(to_fixed(7.0, 0), "7");
        assert_eq!(to_fixed(-9007199254740992.0, 1), "-9007199254740992.0");
    }

    #[test]
    fn exact_ties_round_away_from_zero() {
        assert_eq!(to_fixed(0.25, 1), "0.3");
        assert_eq!(to_fixed(-0.25, 1), "-0.3");
        assert_eq!(to_fixed(2.5, 0), "3");
        assert_eq!(to_fixed(0.125, 2), "0.13");
    }

    #[test]
    fn rounds_the_binary_value_not_the_literal() {
        // 1.005 is stored as 1.00499999999999989...
        assert_eq!(to_fixed(1.005, 2), "1.00");
        // 4.35 is stored as 4.34999999999999964...
        assert_eq!(to_fixed(4.35, 1), "4.3");
    }

    #[test]
    fn keeps_sign_of_small_negatives() {
        assert_eq!(to_fixed(-0.001, 2), "-0.00");
        assert_eq!(to_fixed(-0.0, 2), "0.00");
        assert_eq!(to_fixed(0.0, 4), "0.0000");
        assert_eq!(to_fixed(f64::MIN_POSITIVE, 4), "0.0000");
        assert_eq!(to_fixed(5e-324, 2), "0.00");
    }

    #[test]
    fn validates_ranges() {
        assert!(Coordinates::new(90.0, -180.0).is_ok());
        for (lat, lon, axis) in [
            (90.5, 0.0, Axis::Latitude),
            (f64::NAN, 0.0, Axis::Latitude),
            (0.0, 180.01, Axis::Longitude),
            (0.0, f64::NEG_INFINITY, Axis::Longitude),
        ] {
            match Coordinates::new(lat, lon) {
                Err(GpuidError::InvalidCoordinate { axis: a, .. }) => assert_eq!(a, axis),
                other => panic!("expected invalid {axis} for ({lat}, {lon}), got {other:?}"),
            }
        }
    }

    #[test]
    fn rounded_pair() {
        let c = Coordinates::new(48.78478, 2.61125).unwrap();
        assert_eq!(c.rounded(2), ("48.78".to_string(), "2.61".to_string()));
    }
}
