use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Reserved identifier for the nested GPS sub-block in an EXIF directory.
pub const GPS_INFO_TAG: u16 = 34853;

/// Raw tag mapping as produced by the EXIF decoder: numeric tag id to value.
///
/// A `BTreeMap` keeps iteration in ascending tag-id order, so record emission
/// and risk classification are deterministic for a given image.
pub type RawTagMap = BTreeMap<u16, RawValue>;

/// Resolved tag mapping: human-readable name to stringified value.
///
/// If two raw ids ever resolve to the same name, the later entry wins.
pub type NamedTagMap = BTreeMap<String, String>;

/// The value shapes an EXIF decoder can hand us.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum RawValue {
    Text(String),
    Integer(i64),
    Float(f64),
    /// Unsigned rationals as (numerator, denominator) pairs.
    Rationals(Vec<(u32, u32)>),
    Bytes(Vec<u8>),
    /// The GPS sub-IFD, keyed by GPS sub-tag id.
    Nested(RawTagMap),
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Text(v) => write!(f, "{v}"),
            Self::Integer(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Rationals(v) => {
                let parts = v
                    .iter()
                    .map(|(n, d)| format!("{n}/{d}"))
                    .collect::<Vec<_>>()
                    .join(", ");
                write!(f, "{parts}")
            }
            Self::Bytes(v) => write!(f, "<{} bytes>", v.len()),
            Self::Nested(map) => write!(f, "<{} sub-tags>", map.len()),
        }
    }
}

/// One exported metadata row: the unit handed to the report writers.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct MetadataRecord {
    pub filename: String,
    pub tag: String,
    pub value: String,
}

impl MetadataRecord {
    pub fn new(
        filename: impl Into<String>,
        tag: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            tag: tag.into(),
            value: value.into(),
        }
    }
}
