use crate::error::{GpuidError, Result};

const BASE32_CODES: &[u8; 32] = b"0123456789bcdefghjkmnpqrstuvwxyz";

/// Turns a rounded coordinate pair into a geohash of `precision` characters.
///
/// The generator only ever hands over the decimal strings produced by the coordinate
/// rounding, so implementations see exactly what ends up encoded in the identifier.
pub trait GeohashEncoder: Send + Sync {
    fn encode(&self, lat: &str, lon: &str, precision: usize) -> Result<String>;
}

/// Standard base-32 geohash, longitude bit first.
///
/// A coordinate lying exactly on a cell boundary goes to the lower half.
#[derive(Debug, Default, Copy, Clone)]
pub struct Base32Geohash;

impl GeohashEncoder for Base32Geohash {
    fn encode(&self, lat: &str, lon: &str, precision: usize) -> Result<String> {
        if precision == 0 {
            return Err(GpuidError::EncodingFailure(
                "precision must be at least one character".to_string(),
            ));
        }
        let lat = parse_axis(lat, 90.0)?;
        let lon = parse_axis(lon, 180.0)?;
        Ok(encode(lat, lon, precision))
    }
}

fn parse_axis(raw: &str, bound: f64) -> Result<f64> {
    let value: f64 = raw
        .parse()
        .map_err(|_| GpuidError::EncodingFailure(format!("'{}' is not a decimal number", raw)))?;
    if !value.is_finite() || value.abs() > bound {
        return Err(GpuidError::EncodingFailure(format!(
            "{} is outside [-{}, {}]",
            raw, bound, bound
        )));
    }
    Ok(value)
}

fn encode(lat: f64, lon: f64, precision: usize) -> String {
    let (mut min_lat, mut max_lat) = (-90.0_f64, 90.0_f64);
    let (mut min_lon, mut max_lon) = (-180.0_f64, 180.0_f64);
    let mut hash = String::with_capacity(precision);
    let mut even_bit = true;
    while hash.len() < precision {
        let mut index = 0usize;
        for _ in 0..5 {
            let (value, min, max) = if even_bit {
                (lon, &mut min_lon, &mut max_lon)
            } else {
                (lat, &mut min_lat, &mut max_lat)
            };
            let mid = (*min + *max) / 2.0;
            index <<= 1;
            if value > mid {
                index |= 1;
                *min = mid;
            } else {
                *max = mid;
            }
            even_bit = !even_bit;
        }
        hash.push(BASE32_CODES[index] as char);
    }
    hash
}
