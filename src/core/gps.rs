use std::fmt;

use crate::core::tags::{GPS_LATITUDE, GPS_LATITUDE_REF, GPS_LONGITUDE, GPS_LONGITUDE_REF};
use crate::models::{DecimalCoordinate, GpsBlock, RawTagMap, RawValue};

/// A GPS component could not be turned into a number.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct GpsConversionError;

impl fmt::Display for GpsConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "gps component is not a usable number")
    }
}

impl std::error::Error for GpsConversionError {}

/// Converts degrees/minutes/seconds plus a hemisphere reference into signed
/// decimal degrees, rounded to 6 decimal places.
///
/// `S` and `W` negate the magnitude; any other reference is treated as
/// positive. Callers must treat an error as "coordinate unavailable".
pub fn convert_decimal_degrees(
    degree: f64,
    minutes: f64,
    seconds: f64,
    direction: &str,
) -> Result<f64, GpsConversionError> {
    if !degree.is_finite() || !minutes.is_finite() || !seconds.is_finite() {
        return Err(GpsConversionError);
    }

    let mut decimal = degree + minutes / 60.0 + seconds / 3600.0;
    if matches!(direction, "S" | "W") {
        decimal = -decimal;
    }

    Ok(round6(decimal))
}

impl GpsBlock {
    /// Pulls the four required sub-fields out of a raw GPS sub-block.
    ///
    /// A partial block is a normal outcome, not an error: any missing or
    /// wrongly shaped sub-field yields `None`.
    pub fn from_raw(gps_info: &RawTagMap) -> Option<Self> {
        let latitude_ref = text_field(gps_info, GPS_LATITUDE_REF)?;
        let latitude = rational_field(gps_info, GPS_LATITUDE)?;
        let longitude_ref = text_field(gps_info, GPS_LONGITUDE_REF)?;
        let longitude = rational_field(gps_info, GPS_LONGITUDE)?;

        Some(Self {
            latitude,
            latitude_ref,
            longitude,
            longitude_ref,
        })
    }

    /// Converts both axes; a malformed rational on either side means the
    /// coordinate is unavailable. A converted (0.0, 0.0) is a valid point
    /// and is kept.
    pub fn to_decimal(&self) -> Option<DecimalCoordinate> {
        let latitude = axis_to_decimal(&self.latitude, &self.latitude_ref)?;
        let longitude = axis_to_decimal(&self.longitude, &self.longitude_ref)?;
        Some(DecimalCoordinate::new(latitude, longitude))
    }
}

fn axis_to_decimal(rationals: &[(u32, u32)], reference: &str) -> Option<f64> {
    if rationals.len() < 3 {
        return None;
    }

    let degree = rational_to_f64(rationals[0])?;
    let minutes = rational_to_f64(rationals[1])?;
    let seconds = rational_to_f64(rationals[2])?;

    convert_decimal_degrees(degree, minutes, seconds, reference).ok()
}

fn rational_to_f64((numerator, denominator): (u32, u32)) -> Option<f64> {
    if denominator == 0 {
        return None;
    }
    Some(f64::from(numerator) / f64::from(denominator))
}

fn text_field(map: &RawTagMap, id: u16) -> Option<String> {
    match map.get(&id) {
        Some(RawValue::Text(value)) => Some(value.clone()),
        _ => None,
    }
}

fn rational_field(map: &RawTagMap, id: u16) -> Option<Vec<(u32, u32)>> {
    match map.get(&id) {
        Some(RawValue::Rationals(values)) => Some(values.clone()),
        _ => None,
    }
}

fn round6(value: f64) -> f64 {
    (value * 1_000_000.0).round() / 1_000_000.0
}
