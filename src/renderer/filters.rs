use crate::naming::to_snake_identifier;

/// Snake-case identifier filter matching the names used on disk.
///
/// Acronym runs stay together (`MyCoolAPI` becomes `my_cool_api`) and the
/// placeholder name maps to its fixed identifier.
pub fn snake_identifier_filter(val: &str) -> String {
    to_snake_identifier(val)
}
