use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::DecimalCoordinate;

pub const MAP_FILENAME: &str = "location_map.html";

/// Renders a standalone Leaflet/OpenStreetMap page with one marker per
/// image, centered on the first coordinate. Returns `None` when there is
/// nothing to plot.
pub fn generate_map(
    coordinates: &BTreeMap<String, DecimalCoordinate>,
    output_dir: &Path,
) -> Result<Option<PathBuf>> {
    let Some(center) = coordinates.values().next() else {
        return Ok(None);
    };

    let markers = coordinates
        .iter()
        .map(|(filename, coord)| {
            format!(
                "L.marker([{}, {}]).addTo(map).bindPopup('{}');",
                coord.latitude,
                coord.longitude,
                js_escape(filename)
            )
        })
        .collect::<Vec<_>>()
        .join("\n        ");

    let html = format!(
        r#"<!DOCTYPE html>
<html>
<head>
    <meta charset="utf-8">
    <title>Image Locations</title>
    <link rel="stylesheet" href="https://unpkg.com/leaflet@1.9.4/dist/leaflet.css">
    <script src="https://unpkg.com/leaflet@1.9.4/dist/leaflet.js"></script>
    <style>html, body, #map {{ height: 100%; margin: 0; }}</style>
</head>
<body>
    <div id="map"></div>
    <script>
        var map = L.map('map').setView([{lat}, {lon}], 10);
        L.tileLayer('https://tile.openstreetmap.org/{{z}}/{{x}}/{{y}}.png', {{
            attribution: '&copy; OpenStreetMap contributors'
        }}).addTo(map);
        {markers}
    </script>
</body>
</html>
"#,
        lat = center.latitude,
        lon = center.longitude,
        markers = markers,
    );

    let path = output_dir.join(MAP_FILENAME);
    fs::write(&path, html)?;
    Ok(Some(path))
}

/// Besides quoting, `<` is escaped so a hostile filename cannot close the
/// inline script block.
fn js_escape(value: &str) -> String {
    value
        .replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('<', "\\u003c")
        .replace('\n', " ")
}
