//! Manual values that take precedence over extracted ones.

use crate::models::fact::NO_DATA;

/// The manual value if usable, else the extracted one, else the placeholder.
///
/// Blank strings and the placeholder itself count as missing.
pub fn resolve(manual: Option<&str>, auto: Option<&str>) -> String {
    [manual, auto]
        .into_iter()
        .flatten()
        .map(str::trim)
        .find(|v| is_usable(v))
        .unwrap_or(NO_DATA)
        .to_string()
}

fn is_usable(value: &str) -> bool {
    !value.is_empty() && value != NO_DATA
}
