pub mod core;
pub mod error;
pub mod models;
pub mod report;

pub use error::{AuditError, Result};
