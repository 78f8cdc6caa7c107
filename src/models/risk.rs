use serde::{Deserialize, Serialize};

/// One flagged metadata field with its severity explanation.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RiskItem {
    pub tag: String,
    pub value: String,
    pub risk: String,
}

/// Per-image privacy analysis. Built once, never mutated afterwards.
///
/// Serializes with exactly the documented JSON keys: `filename`,
/// `high_risk_items`, `medium_risk_items`, `recommendations`.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RiskReport {
    pub filename: String,
    pub high_risk_items: Vec<RiskItem>,
    pub medium_risk_items: Vec<RiskItem>,
    pub recommendations: Vec<String>,
}

impl RiskReport {
    pub fn is_clean(&self) -> bool {
        self.high_risk_items.is_empty() && self.medium_risk_items.is_empty()
    }
}

/// Classification policy injected into the risk classifier.
///
/// `high_risk_tags` match by exact name; `risk_keywords` match as
/// substrings and place a tag in the medium tier at most once.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct RiskPolicy {
    pub high_risk_tags: Vec<String>,
    pub risk_keywords: Vec<String>,
}

impl Default for RiskPolicy {
    fn default() -> Self {
        Self {
            high_risk_tags: to_strings(&[
                "GPSLatitude",
                "GPSLongitude",
                "Copyright",
                "Author",
                "Artist",
            ]),
            risk_keywords: to_strings(&[
                "GPS",
                "Location",
                "Position",
                "Address",
                "Copyright",
                "Author",
                "Artist",
            ]),
        }
    }
}

/// Allow-list of technical tags a sanitized image may keep.
///
/// The GPS sub-block is removed regardless of what this list contains.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct SanitizePolicy {
    pub safe_tags: Vec<String>,
}

impl Default for SanitizePolicy {
    fn default() -> Self {
        Self {
            safe_tags: to_strings(&[
                "DateTime",
                "ImageWidth",
                "ImageLength",
                "Make",
                "Model",
                "Software",
            ]),
        }
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| String::from(*value)).collect()
}
