use std::fs;
use std::path::Path;

use little_exif::exif_tag::ExifTag;
use little_exif::metadata::Metadata as ExifMetadata;
use little_exif::rational::uR64;

use exif_auditor::core::decode::{read_raw_tags, write_sanitized};
use exif_auditor::core::sanitize::Sanitizer;
use exif_auditor::models::{RawTagMap, RawValue, GPS_INFO_TAG};

const IMAGE_WIDTH: u16 = 0x0100;
const MAKE: u16 = 0x010F;
const ARTIST: u16 = 0x013B;

// Smallest structurally valid JPEG: SOI, quantization table, 1x1 frame,
// conditioning table, scan, EOI. Enough for the decoder to walk segments
// and carry an EXIF block.
const MINIMAL_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xDB, 0x00, 0x43, 0x00, 0x03, 0x02, 0x02, 0x02, 0x02,
    0x02, 0x03, 0x02, 0x02, 0x02, 0x03, 0x03, 0x03, 0x03, 0x04, 0x06, 0x04,
    0x04, 0x04, 0x04, 0x04, 0x08, 0x06, 0x06, 0x05, 0x06, 0x09, 0x08, 0x0A,
    0x0A, 0x09, 0x08, 0x09, 0x09, 0x0A, 0x0C, 0x0F, 0x0C, 0x0A, 0x0B, 0x0E,
    0x0B, 0x09, 0x09, 0x0D, 0x11, 0x0D, 0x0E, 0x0F, 0x10, 0x10, 0x11, 0x10,
    0x0A, 0x0C, 0x12, 0x13, 0x12, 0x10, 0x13, 0x0F, 0x10, 0x10, 0x10, 0xFF,
    0xC9, 0x00, 0x0B, 0x08, 0x00, 0x01, 0x00, 0x01, 0x01, 0x01, 0x11, 0x00,
    0xFF, 0xCC, 0x00, 0x06, 0x00, 0x10, 0x10, 0x05, 0xFF, 0xDA, 0x00, 0x08,
    0x01, 0x01, 0x00, 0x00, 0x3F, 0x00, 0xD2, 0xCF, 0x20, 0xFF, 0xD9,
];

fn ur64(nominator: u32, denominator: u32) -> uR64 {
    uR64 {
        nominator,
        denominator,
    }
}

fn write_gps_fixture(path: &Path) {
    fs::write(path, MINIMAL_JPEG).unwrap();

    let mut exif = ExifMetadata::new();
    exif.set_tag(ExifTag::Make(String::from("Canon")));
    exif.set_tag(ExifTag::Artist(String::from("Jordan")));
    exif.set_tag(ExifTag::GPSLatitudeRef(String::from("N")));
    exif.set_tag(ExifTag::GPSLatitude(vec![
        ur64(10, 1),
        ur64(30, 1),
        ur64(0, 1),
    ]));
    exif.set_tag(ExifTag::GPSLongitudeRef(String::from("W")));
    exif.set_tag(ExifTag::GPSLongitude(vec![
        ur64(20, 1),
        ur64(15, 1),
        ur64(0, 1),
    ]));
    exif.write_to_file(path).unwrap();
}

#[test]
fn read_raw_tags_folds_gps_into_a_nested_block() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("photo.jpg");
    write_gps_fixture(&photo);

    let raw = read_raw_tags(&photo).unwrap();

    assert_eq!(
        raw.get(&MAKE),
        Some(&RawValue::Text(String::from("Canon")))
    );

    let Some(RawValue::Nested(gps)) = raw.get(&GPS_INFO_TAG) else {
        panic!("gps sub-fields should fold under the GPSInfo id");
    };
    assert_eq!(gps.get(&1), Some(&RawValue::Text(String::from("N"))));
    assert_eq!(
        gps.get(&2),
        Some(&RawValue::Rationals(vec![(10, 1), (30, 1), (0, 1)]))
    );
    assert_eq!(gps.get(&3), Some(&RawValue::Text(String::from("W"))));
    assert_eq!(
        gps.get(&4),
        Some(&RawValue::Rationals(vec![(20, 1), (15, 1), (0, 1)]))
    );
}

#[test]
fn sanitized_write_back_is_gps_free_on_re_read() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("photo.jpg");
    write_gps_fixture(&photo);

    let raw = read_raw_tags(&photo).unwrap();
    let cleaned = Sanitizer::default().sanitize(&raw);
    write_sanitized(&photo, &cleaned).unwrap();

    let reread = read_raw_tags(&photo).unwrap();
    assert!(!reread.contains_key(&GPS_INFO_TAG));
    assert!(!reread.contains_key(&ARTIST));
    assert_eq!(
        reread.get(&MAKE),
        Some(&RawValue::Text(String::from("Canon")))
    );
}

#[test]
fn unrepresentable_dimension_is_dropped_on_write_back() {
    let dir = tempfile::tempdir().unwrap();
    let photo = dir.path().join("photo.jpg");
    fs::write(&photo, MINIMAL_JPEG).unwrap();

    let mut sanitized = RawTagMap::new();
    sanitized.insert(IMAGE_WIDTH, RawValue::Integer(-1));
    sanitized.insert(MAKE, RawValue::Text(String::from("Canon")));
    write_sanitized(&photo, &sanitized).unwrap();

    let reread = read_raw_tags(&photo).unwrap();
    // A width that does not fit u32 must not be written back as a wrapped
    // huge value; the entry is dropped instead.
    assert!(!reread.contains_key(&IMAGE_WIDTH));
    assert_eq!(
        reread.get(&MAKE),
        Some(&RawValue::Text(String::from("Canon")))
    );
}
