use crate::core::risk::RiskClassifier;
use crate::core::tags::TagResolver;
use crate::models::{
    GpsBlock, ImageExtraction, MetadataRecord, NamedTagMap, RawTagMap, RawValue, RiskPolicy,
    GPS_INFO_TAG,
};

/// Turns one image's raw tag map into flat metadata records, an optional
/// derived coordinate, and an optional risk report.
#[derive(Clone, Debug, Default)]
pub struct FieldAssembler {
    resolver: TagResolver,
    classifier: RiskClassifier,
}

impl FieldAssembler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_risk_policy(policy: RiskPolicy) -> Self {
        Self {
            resolver: TagResolver::default(),
            classifier: RiskClassifier::new(policy),
        }
    }

    /// Never fails per-tag: unresolvable ids fall back to their hex name and
    /// every value is recorded in stringified form.
    pub fn assemble(&self, raw: &RawTagMap, filename: &str, want_risk: bool) -> ImageExtraction {
        let mut records = Vec::new();
        let mut coordinate = None;

        for (id, value) in raw {
            if *id == GPS_INFO_TAG {
                if let RawValue::Nested(gps_info) = value {
                    if let Some(coord) =
                        GpsBlock::from_raw(gps_info).and_then(|block| block.to_decimal())
                    {
                        records.push(MetadataRecord::new(
                            filename,
                            "GPSDecimal",
                            coord.to_string(),
                        ));
                        records.push(MetadataRecord::new(filename, "GoogleMaps", coord.maps_url()));
                        coordinate = Some(coord);
                    }
                }
            }

            // The raw entry itself is always recorded, GPSInfo included.
            records.push(MetadataRecord::new(
                filename,
                self.resolver.name_of(*id),
                value.to_string(),
            ));
        }

        let risk = if want_risk {
            let named: NamedTagMap = raw
                .iter()
                .map(|(id, value)| (self.resolver.name_of(*id), value.to_string()))
                .collect();
            Some(self.classifier.classify(&named, filename))
        } else {
            None
        };

        ImageExtraction {
            records,
            coordinate,
            risk,
        }
    }

    /// A file the decoder could not open contributes exactly one placeholder
    /// record so the failure leaves an artifact in the report.
    pub fn decode_failure(&self, filename: &str, message: &str) -> ImageExtraction {
        ImageExtraction {
            records: vec![MetadataRecord::new(filename, "Error", message)],
            coordinate: None,
            risk: None,
        }
    }
}
