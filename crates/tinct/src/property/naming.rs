//! Conversion between directive names and native operation names.

use std::sync::LazyLock;

use regex::Regex;

static PROPERTY_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[a-z][a-z0-9]*(?:-[a-z0-9]+)*$").expect("property name pattern is valid")
});

/// Check whether `name` is a well-formed kebab-case property name.
pub fn is_property_name(name: &str) -> bool {
    PROPERTY_NAME.is_match(name)
}

/// Convert a directive name to a native operation name.
///
/// ```
/// assert_eq!(tinct::property::snake_case("border-top-foreground"), "border_top_foreground");
/// ```
pub fn snake_case(name: &str) -> String {
    name.replace('-', "_")
}

/// Convert a native operation name to a directive name.
///
/// ```
/// assert_eq!(tinct::property::kebab_case("max_width"), "max-width");
/// ```
pub fn kebab_case(name: &str) -> String {
    name.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_names() {
        assert!(is_property_name("bold"));
        assert!(is_property_name("padding-left"));
        assert!(is_property_name("border-top-foreground"));
        assert!(!is_property_name("Bold"));
        assert!(!is_property_name("padding_left"));
        assert!(!is_property_name("-bold"));
        assert!(!is_property_name("bold-"));
        assert!(!is_property_name("padding--left"));
        assert!(!is_property_name(""));
    }

    #[test]
    fn test_case_conversion() {
        for name in ["bold", "underline-spaces", "border-bottom-background"] {
            assert_eq!(kebab_case(&snake_case(name)), name);
        }
    }
}
