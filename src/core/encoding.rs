//! Encoding selection and text codecs
//!
//! Labels follow the Node.js names (`utf8`, `ascii`, `latin1`, `utf16le`, ...)
//! first and fall back to the WHATWG label set that `encoding_rs` knows.

use crate::core::resource_type::{ResourceType, DEFAULT_ENCODING};
use crate::error::{Result, TextModeError};
use encoding_rs::Encoding;

/// Pick the encoding label for an optional resource type.
///
/// Returns the resource type's `encoding` when it is set and non-empty,
/// otherwise [`DEFAULT_ENCODING`].
pub fn resolve_encoding(resource_type: Option<&ResourceType>) -> String {
    resource_type
        .and_then(|rt| rt.encoding.as_deref())
        .filter(|e| !e.is_empty())
        .unwrap_or(DEFAULT_ENCODING)
        .to_string()
}

/// A concrete codec resolved from an encoding label
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    Utf8,
    Utf16Le,
    Utf16Be,
    /// 7-bit decode, low-byte encode
    Ascii,
    /// One byte per code unit
    Latin1,
    /// Any other encoding known to `encoding_rs`
    Whatwg(&'static Encoding),
}

impl TextEncoding {
    /// Resolve a label, case-insensitively
    pub fn for_label(label: &str) -> Result<Self> {
        let normalized = label.trim().to_ascii_lowercase();
        let encoding = match normalized.as_str() {
            "utf8" | "utf-8" => Self::Utf8,
            "utf16le" | "utf-16le" | "ucs2" | "ucs-2" => Self::Utf16Le,
            "ascii" => Self::Ascii,
            "latin1" | "binary" => Self::Latin1,
            _ => match Encoding::for_label(normalized.as_bytes()) {
                Some(enc) if enc == encoding_rs::UTF_8 => Self::Utf8,
                Some(enc) if enc == encoding_rs::UTF_16LE => Self::Utf16Le,
                Some(enc) if enc == encoding_rs::UTF_16BE => Self::Utf16Be,
                // "replacement" decodes everything to U+FFFD and cannot encode
                Some(enc) if enc == encoding_rs::REPLACEMENT => {
                    return Err(TextModeError::unknown_encoding(label));
                }
                Some(enc) => Self::Whatwg(enc),
                None => return Err(TextModeError::unknown_encoding(label)),
            },
        };
        Ok(encoding)
    }

    /// Canonical label for this codec
    pub fn name(&self) -> &'static str {
        match self {
            Self::Utf8 => "utf8",
            Self::Utf16Le => "utf16le",
            Self::Utf16Be => "utf16be",
            Self::Ascii => "ascii",
            Self::Latin1 => "latin1",
            Self::Whatwg(enc) => enc.name(),
        }
    }

    /// Decode bytes into text; malformed sequences become U+FFFD
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            Self::Utf8 => encoding_rs::UTF_8
                .decode_with_bom_removal(bytes)
                .0
                .into_owned(),
            Self::Utf16Le => encoding_rs::UTF_16LE
                .decode_with_bom_removal(bytes)
                .0
                .into_owned(),
            Self::Utf16Be => encoding_rs::UTF_16BE
                .decode_with_bom_removal(bytes)
                .0
                .into_owned(),
            Self::Ascii => bytes.iter().map(|&b| char::from(b & 0x7f)).collect(),
            Self::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            Self::Whatwg(enc) => enc.decode(bytes).0.into_owned(),
        }
    }

    /// Encode text into bytes.
    ///
    /// `ascii` and `latin1` keep the low byte of every UTF-16 code unit;
    /// WHATWG encodings write unmappable characters as numeric character
    /// references.
    pub fn encode(&self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::Utf16Le => text.encode_utf16().flat_map(u16::to_le_bytes).collect(),
            Self::Utf16Be => text.encode_utf16().flat_map(u16::to_be_bytes).collect(),
            Self::Ascii | Self::Latin1 => text.encode_utf16().map(|unit| unit as u8).collect(),
            Self::Whatwg(enc) => enc.encode(text).0.into_owned(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resolve_encoding_defaults_to_utf8() {
        assert_eq!(resolve_encoding(None), "utf8");
        assert_eq!(resolve_encoding(Some(&ResourceType::new())), "utf8");
        assert_eq!(
            resolve_encoding(Some(&ResourceType::new().with_encoding(""))),
            "utf8"
        );
    }

    #[test]
    fn test_resolve_encoding_uses_resource_type() {
        let rt = ResourceType::new().with_encoding("ascii");
        assert_eq!(resolve_encoding(Some(&rt)), "ascii");
    }

    #[test]
    fn test_node_labels() {
        assert_eq!(TextEncoding::for_label("utf8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::for_label("UTF-8").unwrap(), TextEncoding::Utf8);
        assert_eq!(TextEncoding::for_label("ucs2").unwrap(), TextEncoding::Utf16Le);
        assert_eq!(TextEncoding::for_label("ascii").unwrap(), TextEncoding::Ascii);
        assert_eq!(TextEncoding::for_label("binary").unwrap(), TextEncoding::Latin1);
    }

    #[test]
    fn test_whatwg_labels() {
        assert_eq!(
            TextEncoding::for_label("shift_jis").unwrap(),
            TextEncoding::Whatwg(encoding_rs::SHIFT_JIS)
        );
        assert_eq!(
            TextEncoding::for_label("utf-16be").unwrap(),
            TextEncoding::Utf16Be
        );
        assert_eq!(
            TextEncoding::for_label("windows-1252").unwrap().name(),
            "windows-1252"
        );
    }

    #[test]
    fn test_unknown_labels() {
        assert!(matches!(
            TextEncoding::for_label("klingon"),
            Err(TextModeError::UnknownEncoding { .. })
        ));
        assert!(TextEncoding::for_label("iso-2022-kr").is_err());
    }

    #[test]
    fn test_utf8_strips_bom() {
        assert_eq!(TextEncoding::Utf8.decode(b"\xEF\xBB\xBF---"), "---");
        assert_eq!(TextEncoding::Utf8.encode("h\u{e9}"), "h\u{e9}".as_bytes());
    }

    #[test]
    fn test_ascii_masks_high_bit() {
        assert_eq!(TextEncoding::Ascii.decode(&[0x41, 0xC1]), "AA");
        assert_eq!(TextEncoding::Ascii.encode("A\u{e9}"), vec![0x41, 0xE9]);
    }

    #[test]
    fn test_latin1_round_trip() {
        let bytes = TextEncoding::Latin1.encode("caf\u{e9}");
        assert_eq!(bytes, vec![0x63, 0x61, 0x66, 0xE9]);
        assert_eq!(TextEncoding::Latin1.decode(&bytes), "caf\u{e9}");
    }

    #[test]
    fn test_utf16le_round_trip() {
        let bytes = TextEncoding::Utf16Le.encode("Ab");
        assert_eq!(bytes, vec![0x41, 0x00, 0x62, 0x00]);
        assert_eq!(TextEncoding::Utf16Le.decode(&bytes), "Ab");
    }

    #[test]
    fn test_whatwg_round_trip() {
        let enc = TextEncoding::for_label("windows-1252").unwrap();
        let bytes = enc.encode("\u{20ac}5");
        assert_eq!(bytes, vec![0x80, 0x35]);
        assert_eq!(enc.decode(&bytes), "\u{20ac}5");
    }
}
