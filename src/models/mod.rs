mod batch;
mod gps;
mod risk;
mod tag;

pub use batch::{BatchOptions, BatchOutcome, ImageExtraction, ProgressEvent, ReportFormat};
pub use gps::{DecimalCoordinate, GpsBlock};
pub use risk::{RiskItem, RiskPolicy, RiskReport, SanitizePolicy};
pub use tag::{MetadataRecord, NamedTagMap, RawTagMap, RawValue, GPS_INFO_TAG};
