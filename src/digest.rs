//! Note Content Digest
//!
//! MD5 over the note body, used only as a dirty flag: if the digest of the
//! editor content equals the digest stored at load/save time, submitting
//! is a local no-op.

/// Lowercase hex MD5 of a note body
pub fn content_digest(html: &str) -> String {
    format!("{:x}", md5::compute(html.as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_is_stable() {
        assert_eq!(content_digest("<p>hi</p>"), content_digest("<p>hi</p>"));
    }

    #[test]
    fn test_digest_sees_changes() {
        assert_ne!(content_digest("<p>hi</p>"), content_digest("<p>hi!</p>"));
        assert_ne!(content_digest(""), content_digest(" "));
    }

    #[test]
    fn test_digest_is_hex() {
        let d = content_digest("");
        assert_eq!(d.len(), 32);
        assert!(d.chars().all(|c| c.is_ascii_hexdigit()));
    }
}
