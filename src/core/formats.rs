use std::path::Path;

pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png"];

pub fn is_supported(path: &Path) -> bool {
    let Some(ext) = path.extension().and_then(|value| value.to_str()) else {
        return false;
    };

    SUPPORTED_EXTENSIONS.contains(&ext.to_ascii_lowercase().as_str())
}
