mod export;
mod map;

pub use export::{
    export_records, export_risk_reports, CSV_FILENAME, JSON_FILENAME, RISK_FILENAME, TXT_FILENAME,
};
pub use map::{generate_map, MAP_FILENAME};
