//! Color Registry
//!
//! Bidirectional mapping between note color names and the small integer
//! codes the server stores. Code 0 means unknown/unset.

/// Known colors with their stable codes, in code order
pub const COLORS: &[(&str, u8)] = &[
    ("green", 1),
    ("red", 2),
    ("blue", 3),
    ("purple", 4),
    ("orange", 5),
    ("yellow", 6),
    ("grey", 7),
];

/// Class rendered for an item whose note has been removed
pub const DEFAULT_DOT_CLASS: &str = "color_default_dot";

/// Code for a color name; 0 for anything unrecognized
pub fn code_of(name: &str) -> u8 {
    COLORS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, c)| *c)
        .unwrap_or(0)
}

/// First name whose code matches; "green" when nothing does
pub fn name_of(code: u8) -> &'static str {
    COLORS
        .iter()
        .find(|(_, c)| *c == code)
        .map(|(n, _)| *n)
        .unwrap_or("green")
}

/// CSS class of the colored dot for a code, e.g. `color_red_dot`
pub fn dot_class(code: u8) -> String {
    format!("color_{}_dot", name_of(code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_name_roundtrip() {
        for (name, _) in COLORS {
            let code = code_of(name);
            assert_eq!(code_of(name_of(code)), code);
        }
    }

    #[test]
    fn test_unknown_name_is_zero() {
        assert_eq!(code_of("magenta"), 0);
        assert_eq!(code_of(""), 0);
        assert_eq!(code_of("Green"), 0);
    }

    // Code 0 deliberately falls back to "green"; if this ever changes the
    // unset-color dot rendering changes with it.
    #[test]
    fn test_unmatched_code_defaults_to_green() {
        assert_eq!(name_of(0), "green");
        assert_eq!(name_of(99), "green");
    }

    #[test]
    fn test_dot_class() {
        assert_eq!(dot_class(2), "color_red_dot");
        assert_eq!(dot_class(0), "color_green_dot");
    }
}
