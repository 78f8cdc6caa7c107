pub mod assemble;
pub mod batch;
pub mod decode;
pub mod formats;
pub mod gps;
pub mod risk;
pub mod sanitize;
pub mod tags;
