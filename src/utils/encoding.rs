//! Encoding detection and decoding utilities.
//!
//! Uses encoding_rs with chardetng detection instead of platform APIs for
//! portability.

use chardetng::EncodingDetector;
use encoding_rs::Encoding;

/// Guess the character encoding of raw file content.
///
/// Runs a statistical detector over the whole buffer. Returns `None` when no
/// guess is possible (empty input); callers fall back to UTF-8.
pub fn detect_encoding(data: &[u8]) -> Option<&'static Encoding> {
    if data.is_empty() {
        return None;
    }

    let mut detector = EncodingDetector::new();
    detector.feed(data, true);
    Some(detector.guess(None, true))
}

/// Decode bytes using the given encoding.
///
/// Byte sequences the encoding cannot represent are replaced with U+FFFD
/// rather than failing the decode.
pub fn decode_bytes(data: &[u8], encoding: &'static Encoding) -> String {
    let (decoded, _, _) = encoding.decode(data);
    decoded.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_utf8_passthrough() {
        // Pure ASCII/UTF-8 should pass through unchanged
        let data = b"Hello, World!";
        assert_eq!(decode_bytes(data, encoding_rs::UTF_8), "Hello, World!");
    }

    #[test]
    fn test_shift_jis_conversion() {
        // SHIFT-JIS encoding of "日本語" (Japanese text)
        let data: &[u8] = &[0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA];
        assert_eq!(decode_bytes(data, encoding_rs::SHIFT_JIS), "日本語");
    }

    #[test]
    fn test_lossy_replacement() {
        // 0xFF is never valid UTF-8
        let data: &[u8] = &[0x61, 0xFF, 0x62];
        assert_eq!(decode_bytes(data, encoding_rs::UTF_8), "a\u{FFFD}b");
    }

    #[test]
    fn test_detect_empty_input() {
        assert_eq!(detect_encoding(b""), None);
    }

    #[test]
    fn test_detect_utf8_japanese() {
        let data = "日本語のテキストです。".as_bytes();
        assert_eq!(detect_encoding(data), Some(encoding_rs::UTF_8));
    }

    #[test]
    fn test_detect_shift_jis_japanese() {
        // "// 日本語のコメントです。シスチEを使用します。\n" in Shift_JIS
        let data: &[u8] = &[
            0x2F, 0x2F, 0x20, 0x93, 0xFA, 0x96, 0x7B, 0x8C, 0xEA, 0x82, 0xCC, 0x83, 0x52, 0x83,
            0x81, 0x83, 0x93, 0x83, 0x67, 0x82, 0xC5, 0x82, 0xB7, 0x81, 0x42, 0x83, 0x56, 0x83,
            0x58, 0x83, 0x60, 0x45, 0x82, 0xF0, 0x8E, 0x67, 0x97, 0x70, 0x82, 0xB5, 0x82, 0xDC,
            0x82, 0xB7, 0x81, 0x42, 0x0A,
        ];
        assert_eq!(detect_encoding(data), Some(encoding_rs::SHIFT_JIS));
    }
}
