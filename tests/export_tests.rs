use std::collections::BTreeMap;
use std::fs;

use exif_auditor::models::{
    DecimalCoordinate, MetadataRecord, ReportFormat, RiskItem, RiskReport,
};
use exif_auditor::report::{
    export_records, export_risk_reports, generate_map, CSV_FILENAME, JSON_FILENAME, MAP_FILENAME,
    RISK_FILENAME, TXT_FILENAME,
};

fn sample_records() -> Vec<MetadataRecord> {
    vec![
        MetadataRecord::new("photo.jpg", "Make", "Canon"),
        MetadataRecord::new("photo.jpg", "GPSDecimal", "10.5, -20.25"),
    ]
}

#[test]
fn csv_export_writes_header_and_rows() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_records(&sample_records(), ReportFormat::Csv, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), CSV_FILENAME);

    let contents = fs::read_to_string(path).unwrap();
    let lines: Vec<&str> = contents.lines().collect();
    assert_eq!(lines[0], "Filename,Metadata Tag,Value");
    assert_eq!(lines[1], "photo.jpg,Make,Canon");
    // The coordinate value contains a comma and must be quoted.
    assert_eq!(lines[2], "photo.jpg,GPSDecimal,\"10.5, -20.25\"");
}

#[test]
fn csv_doubles_embedded_quotes() {
    let dir = tempfile::tempdir().unwrap();
    let records = vec![MetadataRecord::new(
        "photo.jpg",
        "ImageDescription",
        "a \"quoted\" note",
    )];
    let path = export_records(&records, ReportFormat::Csv, dir.path()).unwrap();

    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("\"a \"\"quoted\"\" note\""));
}

#[test]
fn json_export_is_an_array_of_record_objects() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_records(&sample_records(), ReportFormat::Json, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), JSON_FILENAME);

    let contents = fs::read_to_string(path).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&contents).unwrap();
    let array = parsed.as_array().unwrap();

    assert_eq!(array.len(), 2);
    assert_eq!(array[0]["filename"], "photo.jpg");
    assert_eq!(array[0]["tag"], "Make");
    assert_eq!(array[0]["value"], "Canon");
}

#[test]
fn txt_export_separates_records_with_a_rule_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = export_records(&sample_records(), ReportFormat::Txt, dir.path()).unwrap();

    assert_eq!(path.file_name().unwrap(), TXT_FILENAME);

    let contents = fs::read_to_string(path).unwrap();
    assert!(contents.contains("File: photo.jpg"));
    assert!(contents.contains("Tag: Make"));
    assert!(contents.contains("Value: Canon"));
    assert_eq!(contents.matches(&"-".repeat(50)).count(), 2);
}

#[test]
fn risk_export_uses_the_documented_keys() {
    let dir = tempfile::tempdir().unwrap();
    let reports = vec![RiskReport {
        filename: String::from("photo.jpg"),
        high_risk_items: vec![RiskItem {
            tag: String::from("GPSLatitude"),
            value: String::from("40/1"),
            risk: String::from("HIGH: location or ownership information exposed"),
        }],
        medium_risk_items: Vec::new(),
        recommendations: vec![String::from("Remove GPS metadata before sharing this image")],
    }];

    let path = export_risk_reports(&reports, dir.path()).unwrap();
    assert_eq!(path.file_name().unwrap(), RISK_FILENAME);

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap();
    let entry = &parsed.as_array().unwrap()[0];

    assert_eq!(entry["filename"], "photo.jpg");
    assert_eq!(entry["high_risk_items"][0]["tag"], "GPSLatitude");
    assert!(entry["medium_risk_items"].as_array().unwrap().is_empty());
    assert_eq!(entry["recommendations"].as_array().unwrap().len(), 1);
}

#[test]
fn map_generation_plots_one_marker_per_image() {
    let dir = tempfile::tempdir().unwrap();
    let mut coordinates = BTreeMap::new();
    coordinates.insert(
        String::from("a.jpg"),
        DecimalCoordinate::new(40.44615, -79.982219),
    );
    coordinates.insert(String::from("b.jpg"), DecimalCoordinate::new(10.5, 20.25));

    let path = generate_map(&coordinates, dir.path())
        .unwrap()
        .expect("map should be generated");
    assert_eq!(path.file_name().unwrap(), MAP_FILENAME);

    let contents = fs::read_to_string(path).unwrap();
    assert_eq!(contents.matches("L.marker(").count(), 2);
    assert!(contents.contains("40.44615"));
    assert!(contents.contains("a.jpg"));
    assert!(contents.contains("b.jpg"));
}

#[test]
fn hostile_filename_cannot_close_the_map_script_block() {
    let dir = tempfile::tempdir().unwrap();
    let mut coordinates = BTreeMap::new();
    coordinates.insert(
        String::from("evil</script><script>alert(1)</script>.jpg"),
        DecimalCoordinate::new(10.5, 20.25),
    );

    let path = generate_map(&coordinates, dir.path())
        .unwrap()
        .expect("map should be generated");
    let contents = std::fs::read_to_string(path).unwrap();

    assert!(!contents.contains("evil</script>"));
    assert!(contents.contains("evil\\u003c/script>"));
    // Only the template's own closing tags survive (CDN include + marker block).
    assert_eq!(contents.matches("</script>").count(), 2);
}

#[test]
fn empty_coordinate_map_produces_no_file() {
    let dir = tempfile::tempdir().unwrap();
    let result = generate_map(&BTreeMap::new(), dir.path()).unwrap();

    assert!(result.is_none());
    assert!(!dir.path().join(MAP_FILENAME).exists());
}
