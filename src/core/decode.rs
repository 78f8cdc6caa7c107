use std::path::Path;

use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata as ExifMetadata;
use little_exif::rational::uR64;

use crate::core::tags::{
    GPS_ALTITUDE, GPS_ALTITUDE_REF, GPS_LATITUDE, GPS_LATITUDE_REF, GPS_LONGITUDE,
    GPS_LONGITUDE_REF,
};
use crate::error::{AuditError, Result};
use crate::models::{RawTagMap, RawValue, GPS_INFO_TAG};

/// Reads an image's EXIF directory into a raw tag map.
///
/// GPS sub-fields are folded into a nested map under the reserved GPSInfo
/// id; internal offset and thumbnail bookkeeping tags are skipped.
pub fn read_raw_tags(path: &Path) -> Result<RawTagMap> {
    if !path.exists() {
        return Err(AuditError::PathNotFound(path.to_path_buf()));
    }

    let exif =
        ExifMetadata::new_from_path(path).map_err(|err| AuditError::Decode(err.to_string()))?;

    let mut raw = RawTagMap::new();
    let mut gps_info = RawTagMap::new();

    for tag in (&exif).into_iter() {
        let id = tag.as_u16();

        match tag {
            // GPS sub-IFD fields nest under the GPSInfo id.
            ExifTag::GPSLatitudeRef(s) => {
                gps_info.insert(GPS_LATITUDE_REF, RawValue::Text(clean_string(s)));
                continue;
            }
            ExifTag::GPSLatitude(rats) => {
                gps_info.insert(GPS_LATITUDE, RawValue::Rationals(pairs(rats)));
                continue;
            }
            ExifTag::GPSLongitudeRef(s) => {
                gps_info.insert(GPS_LONGITUDE_REF, RawValue::Text(clean_string(s)));
                continue;
            }
            ExifTag::GPSLongitude(rats) => {
                gps_info.insert(GPS_LONGITUDE, RawValue::Rationals(pairs(rats)));
                continue;
            }
            ExifTag::GPSAltitudeRef(bytes) => {
                gps_info.insert(GPS_ALTITUDE_REF, RawValue::Bytes(bytes.clone()));
                continue;
            }
            ExifTag::GPSAltitude(rats) => {
                gps_info.insert(GPS_ALTITUDE, RawValue::Rationals(pairs(rats)));
                continue;
            }
            _ => {}
        }

        // Internal IFD offset pointers and thumbnail bookkeeping.
        if matches!(
            tag,
            ExifTag::ExifOffset(_)
                | ExifTag::GPSInfo(_)
                | ExifTag::InteropOffset(_)
                | ExifTag::ThumbnailOffset(..)
                | ExifTag::ThumbnailLength(_)
                | ExifTag::StripOffsets(..)
                | ExifTag::StripByteCounts(_)
        ) {
            continue;
        }

        if let Some(value) = convert_tag_value(tag) {
            raw.insert(id, value);
        }
    }

    if !gps_info.is_empty() {
        raw.insert(GPS_INFO_TAG, RawValue::Nested(gps_info));
    }

    Ok(raw)
}

/// Writes a sanitized tag map back into the image, replacing its metadata.
///
/// Only allow-listed tags survive sanitization, so anything not expressible
/// here has already been dropped by the sanitizer.
pub fn write_sanitized(path: &Path, sanitized: &RawTagMap) -> Result<()> {
    let mut exif = ExifMetadata::new();

    for (id, value) in sanitized {
        if let Some(tag) = raw_value_to_exif(*id, value) {
            exif.set_tag(tag);
        }
    }

    exif.write_to_file(path)
        .map_err(|err| AuditError::Decode(err.to_string()))
}

fn convert_tag_value(tag: &ExifTag) -> Option<RawValue> {
    let value = match tag {
        // String tags
        ExifTag::Make(s)
        | ExifTag::Model(s)
        | ExifTag::Software(s)
        | ExifTag::Artist(s)
        | ExifTag::Copyright(s)
        | ExifTag::ImageDescription(s)
        | ExifTag::LensMake(s)
        | ExifTag::LensModel(s)
        | ExifTag::OwnerName(s)
        | ExifTag::SerialNumber(s)
        | ExifTag::DateTimeOriginal(s)
        | ExifTag::CreateDate(s)
        | ExifTag::ModifyDate(s) => RawValue::Text(clean_string(s)),

        // Integer tags (u16-valued)
        ExifTag::Orientation(v)
        | ExifTag::ISO(v)
        | ExifTag::ExposureProgram(v)
        | ExifTag::MeteringMode(v)
        | ExifTag::Flash(v)
        | ExifTag::ColorSpace(v)
        | ExifTag::ExposureMode(v)
        | ExifTag::WhiteBalance(v)
        | ExifTag::SceneCaptureType(v)
        | ExifTag::LightSource(v)
        | ExifTag::ResolutionUnit(v)
        | ExifTag::FocalLengthIn35mmFormat(v) => {
            RawValue::Integer(i64::from(v.first().copied().unwrap_or(0)))
        }

        // Integer tags (u32-valued)
        ExifTag::ImageWidth(v) | ExifTag::ImageHeight(v) => {
            RawValue::Integer(i64::from(v.first().copied().unwrap_or(0)))
        }

        // Unsigned rational tags
        ExifTag::ExposureTime(v)
        | ExifTag::FNumber(v)
        | ExifTag::FocalLength(v)
        | ExifTag::ApertureValue(v)
        | ExifTag::MaxApertureValue(v)
        | ExifTag::XResolution(v)
        | ExifTag::YResolution(v)
        | ExifTag::DigitalZoomRatio(v) => RawValue::Rationals(pairs(v)),

        // UNDEF / binary tags
        ExifTag::MakerNote(v) => RawValue::Bytes(v.clone()),
        ExifTag::ExifVersion(v) | ExifTag::FlashpixVersion(v) => {
            RawValue::Text(String::from_utf8_lossy(v).to_string())
        }

        // Unknown variants keep their raw shape
        ExifTag::UnknownSTRING(s, ..) => RawValue::Text(clean_string(s)),
        ExifTag::UnknownINT8U(v, ..) | ExifTag::UnknownUNDEF(v, ..) => RawValue::Bytes(v.clone()),
        ExifTag::UnknownINT16U(v, ..) => match v.as_slice() {
            [single] => RawValue::Integer(i64::from(*single)),
            _ => RawValue::Text(join_numbers(v)),
        },
        ExifTag::UnknownINT32U(v, ..) => match v.as_slice() {
            [single] => RawValue::Integer(i64::from(*single)),
            _ => RawValue::Text(join_numbers(v)),
        },
        ExifTag::UnknownRATIONAL64U(v, ..) => RawValue::Rationals(pairs(v)),

        _ => return None,
    };

    Some(value)
}

/// Reverse mapping for the write-back path: only the safe allow-list tags
/// need an encoder form.
fn raw_value_to_exif(id: u16, value: &RawValue) -> Option<ExifTag> {
    match (id, value) {
        (0x010F, RawValue::Text(s)) => Some(ExifTag::Make(s.clone())),
        (0x0110, RawValue::Text(s)) => Some(ExifTag::Model(s.clone())),
        (0x0131, RawValue::Text(s)) => Some(ExifTag::Software(s.clone())),
        (0x0132, RawValue::Text(s)) => Some(ExifTag::ModifyDate(s.clone())),
        (0x0100, RawValue::Integer(v)) => Some(ExifTag::ImageWidth(vec![u32::try_from(*v).ok()?])),
        (0x0101, RawValue::Integer(v)) => {
            Some(ExifTag::ImageHeight(vec![u32::try_from(*v).ok()?]))
        }
        _ => None,
    }
}

fn pairs(rationals: &[uR64]) -> Vec<(u32, u32)> {
    rationals
        .iter()
        .map(|r| (r.nominator, r.denominator))
        .collect()
}

fn join_numbers<T: ToString>(values: &[T]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn clean_string(s: &str) -> String {
    s.trim_end_matches('\0').trim().to_string()
}
