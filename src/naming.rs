//! Conversion of proper-case package names into the snake-case identifiers
//! used by cargo, the interface-definition file and generated symbols.

use regex::Regex;
use std::sync::LazyLock;

use crate::constants::{PLACEHOLDER_NAME, PLACEHOLDER_SNAKE_NAME};

static WORD_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(.)([A-Z][a-z]+)").expect("valid word-start pattern"));

static CASE_BOUNDARY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([a-z0-9])([A-Z])").expect("valid case-boundary pattern"));

/// Converts a proper-case name into a lowercase, underscore-separated identifier.
///
/// The placeholder name maps to its fixed identifier. Otherwise a separator is
/// inserted before every capitalized word, then between a lowercase letter or
/// digit and a following uppercase letter, and the result is lowercased.
///
/// # Examples
/// ```
/// use uniffi_template_tools::naming::to_snake_identifier;
///
/// assert_eq!(to_snake_identifier("MyCoolAPI"), "my_cool_api");
/// assert_eq!(to_snake_identifier("UniFFITemplate"), "uniffi_template");
/// ```
pub fn to_snake_identifier(name: &str) -> String {
    if name == PLACEHOLDER_NAME {
        return PLACEHOLDER_SNAKE_NAME.to_string();
    }
    let name = WORD_START.replace_all(name, "${1}_${2}");
    CASE_BOUNDARY.replace_all(&name, "${1}_${2}").to_ascii_lowercase()
}
