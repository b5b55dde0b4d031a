//! CSV line format.
//!
//! The format's two halves:
//!
//! - **Decoder** ([`decoder`]): splits one carrier line into an ordered
//!   row of nullable text fields
//! - **Encoder** ([`encoder`]): assembles an ordered row of field values
//!   into one carrier line
//!
//! Both halves are frozen at construction from a schema and resolved
//! options, branch on the same quote-escaping mode, and drive the `csv`
//! crate as the line-splitting primitive with a reader or writer built
//! fresh per call.

use crate::error::{CodecError, CodecResult};

pub mod decoder;
pub mod encoder;

// ── Re-exports for convenience ─────────────────────────────────────

pub use decoder::CsvRowDecoder;
pub use encoder::CsvRowEncoder;

/// Format name reported by both halves.
pub const FORMAT_NAME: &str = "csv";

/// Maps a configured control character to the single byte the line parser
/// works in.
///
/// The parser is byte oriented, so only ASCII control characters can be
/// honored; anything else would collide with the UTF-8 encoding of field
/// content.
pub(crate) fn control_byte(c: char, key: &str) -> CodecResult<u8> {
    match u8::try_from(c) {
        Ok(byte) if byte.is_ascii() => Ok(byte),
        _ => Err(CodecError::Config {
            key: key.to_string(),
            message: format!("'{c}' is not an ASCII character"),
        }),
    }
}
