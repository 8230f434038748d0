//! UTF-8 byte-order-mark detection and removal.

/// The UTF-8 encoding of U+FEFF.
pub const UTF8_BOM: [u8; 3] = [0xEF, 0xBB, 0xBF];

/// Returns true if `prefix` starts with the UTF-8 BOM.
///
/// Callers typically pass only the first few bytes of a file; a prefix shorter
/// than the signature never matches.
pub fn has_bom(prefix: &[u8]) -> bool {
    prefix.starts_with(&UTF8_BOM)
}

/// Return the content following a leading BOM, or `None` if there is none.
///
/// Only one BOM is removed.
pub fn strip_bom(content: &[u8]) -> Option<&[u8]> {
    content.strip_prefix(&UTF8_BOM[..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detects_bom_prefix() {
        assert!(has_bom(&[0xEF, 0xBB, 0xBF]));
        assert!(has_bom(b"\xEF\xBB\xBFhi"));
    }

    #[test]
    fn rejects_short_or_partial_prefix() {
        assert!(!has_bom(b""));
        assert!(!has_bom(&[0xEF, 0xBB]));
        assert!(!has_bom(&[0xEF, 0xBB, 0xBE]));
        assert!(!has_bom(b"hi\xEF\xBB\xBF"));
    }

    #[test]
    fn strip_removes_exactly_three_bytes() {
        let content = b"\xEF\xBB\xBFhi";
        let stripped = strip_bom(content).expect("bom");
        assert_eq!(stripped, b"hi");
        assert_eq!(stripped.len(), content.len() - 3);
    }

    #[test]
    fn strip_removes_only_first_bom() {
        let stripped = strip_bom(b"\xEF\xBB\xBF\xEF\xBB\xBFx").expect("bom");
        assert_eq!(stripped, b"\xEF\xBB\xBFx");
    }

    #[test]
    fn strip_bom_only_file_yields_empty() {
        assert_eq!(strip_bom(&UTF8_BOM), Some(&b""[..]));
    }

    #[test]
    fn strip_returns_none_without_bom() {
        assert_eq!(strip_bom(b"plain"), None);
    }
}
