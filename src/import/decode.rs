//! Byte-to-text decoding of input files.
//!
//! Files exported from spreadsheets arrive as UTF-8 with or without a BOM,
//! UTF-16 with a BOM, or in the legacy Windows-1252 code page.

use encoding_rs::{Encoding, WINDOWS_1252};

/// Decodes file contents, dropping any byte order mark.
///
/// ```rust
/// use sitewatch::import::decode::decode;
///
/// assert_eq!(decode(b"\xEF\xBB\xBFDate"), "Date");
/// assert_eq!(decode(b"Caf\xE9"), "Café");
/// ```
pub fn decode(bytes: &[u8]) -> String {
    if let Some((encoding, bom_length)) = Encoding::for_bom(bytes) {
        let (text, _) = encoding.decode_without_bom_handling(&bytes[bom_length..]);
        return text.into_owned();
    }

    match std::str::from_utf8(bytes) {
        Ok(text) => text.to_string(),
        Err(_) => {
            tracing::debug!("input is not UTF-8, decoding as Windows-1252");
            WINDOWS_1252.decode(bytes).0.into_owned()
        }
    }
}
