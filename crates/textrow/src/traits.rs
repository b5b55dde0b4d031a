//! Capability traits for codec halves.
//!
//! Hosts hold codecs behind these object-safe traits so the concrete format
//! can be swapped without touching the calling code. Both traits require
//! `Send + Sync`: a codec half is frozen at construction and safe to share
//! across threads.

use crate::error::CodecResult;
use crate::schema::RowSchemaRef;
use crate::types::{FieldValue, RawLine};

// ── RowDecoder ─────────────────────────────────────────────────────

/// Decodes one carrier line into an ordered row of nullable text fields.
pub trait RowDecoder: Send + Sync {
    /// Returns the schema this decoder is bound to.
    fn schema(&self) -> RowSchemaRef;

    /// Decodes a single line into exactly `schema().num_cols()` entries.
    ///
    /// Missing trailing fields come back as `None`; fields beyond the
    /// schema width are discarded.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Carrier`](crate::error::CodecError::Carrier)
    /// if the underlying line reader fails.
    fn decode_line(&self, line: &RawLine) -> CodecResult<Vec<Option<String>>>;

    /// Decodes a line given as text.
    ///
    /// Default implementation wraps the text in a [`RawLine`] and delegates
    /// to [`decode_line`](Self::decode_line).
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Carrier`](crate::error::CodecError::Carrier)
    /// if the underlying line reader fails.
    fn decode_text(&self, text: &str) -> CodecResult<Vec<Option<String>>> {
        self.decode_line(&RawLine::from(text))
    }

    /// Returns the name of the format this decoder handles (e.g., `"csv"`).
    fn format_name(&self) -> &str;
}

// ── RowEncoder ─────────────────────────────────────────────────────

/// Encodes an ordered row of field values into one carrier line.
pub trait RowEncoder: Send + Sync {
    /// Returns the schema this encoder is bound to.
    fn schema(&self) -> RowSchemaRef;

    /// Encodes exactly `schema().num_cols()` field values into a single
    /// line without a trailing terminator.
    ///
    /// # Errors
    ///
    /// Returns
    /// [`CodecError::SchemaMismatch`](crate::error::CodecError::SchemaMismatch)
    /// if the field count differs from the schema width,
    /// [`CodecError::UnsupportedFieldType`](crate::error::CodecError::UnsupportedFieldType)
    /// if a value has no text form, and
    /// [`CodecError::Carrier`](crate::error::CodecError::Carrier) if the
    /// underlying line writer fails.
    fn encode_row(&self, fields: &[FieldValue]) -> CodecResult<RawLine>;

    /// Returns the name of the format this encoder produces (e.g., `"csv"`).
    fn format_name(&self) -> &str;
}
