//! Filename Split Helpers
//!
//! The rename dialog edits a file name as two fields: everything before
//! the final dot, and everything after it. A name without a dot lands
//! entirely in the extension field with an empty prefix; the server's
//! rename handler only joins the two with a dot when the prefix is
//! non-empty, so the asymmetry round-trips.

/// Text before the final `.`; empty when the name has no dot
pub fn name_prefix(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[..idx],
        None => "",
    }
}

/// Text after the final `.`; the whole name when it has no dot
pub fn name_postfix(file_name: &str) -> &str {
    match file_name.rfind('.') {
        Some(idx) => &file_name[idx + 1..],
        None => file_name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split_with_extension() {
        assert_eq!(name_prefix("report.v2.txt"), "report.v2");
        assert_eq!(name_postfix("report.v2.txt"), "txt");
    }

    #[test]
    fn test_split_without_extension() {
        assert_eq!(name_prefix("README"), "");
        assert_eq!(name_postfix("README"), "README");
    }

    #[test]
    fn test_trailing_dot() {
        assert_eq!(name_prefix("archive."), "archive");
        assert_eq!(name_postfix("archive."), "");
    }
}
