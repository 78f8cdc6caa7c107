use std::fmt;

use serde::{Deserialize, Serialize};

/// The four GPS sub-fields required before a coordinate can be derived.
///
/// Rationals are kept raw here; conversion to decimal degrees happens in
/// `core::gps` so a malformed rational surfaces as an absent coordinate
/// rather than a failed extraction.
#[derive(Clone, Debug, PartialEq)]
pub struct GpsBlock {
    pub latitude: Vec<(u32, u32)>,
    pub latitude_ref: String,
    pub longitude: Vec<(u32, u32)>,
    pub longitude_ref: String,
}

/// A derived location, each axis rounded to 6 decimal places.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DecimalCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl DecimalCoordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn maps_url(&self) -> String {
        format!(
            "https://maps.google.com/?q={},{}",
            self.latitude, self.longitude
        )
    }
}

impl fmt::Display for DecimalCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}
