//! # `textrow`
//!
//! Configurable delimited-text row codec: decode a single line into an
//! ordered row of nullable text fields, and encode an ordered row of field
//! values back into a single line.
//!
//! A codec is bound once, at initialization, to a [`RowSchema`] (ordered
//! column names, all text) and to [`CsvCodecOptions`] resolved from a host
//! [`CodecProperties`] bag. After that, every decode and encode call is a
//! pure per-record transformation: the decoder allocates a fresh result per
//! call and both halves can be shared freely across threads.
//!
//! ```
//! use textrow::{
//!     CodecProperties, CsvCodecOptions, CsvRowDecoder, CsvRowEncoder, FieldValue, RowDecoder,
//!     RowSchema, SEPARATOR_CHAR,
//! };
//!
//! let schema = RowSchema::from_comma_list("id,note,score").into_ref();
//! let props = CodecProperties::new().with_property(SEPARATOR_CHAR, ",");
//! let options = CsvCodecOptions::from_properties(&props);
//!
//! let decoder = CsvRowDecoder::with_options(schema.clone(), options)?;
//! let row = decoder.decode_text("7,\"yes, okay\",1.5")?;
//! assert_eq!(row[1].as_deref(), Some("yes, okay"));
//!
//! let encoder = CsvRowEncoder::with_options(schema, options)?;
//! let line = encoder.encode(&[
//!     FieldValue::from(7i64),
//!     FieldValue::from("yes, okay"),
//!     FieldValue::from(1.5f64),
//! ])?;
//! assert_eq!(line.to_text_lossy(), "\"7\",\"yes, okay\",\"1.5\"");
//! # Ok::<(), textrow::CodecError>(())
//! ```

#![deny(missing_docs)]
#![warn(clippy::all, clippy::pedantic)]

/// Codec configuration: property bag, recognized keys, resolved options.
pub mod config;

/// CSV line format: the decoder and encoder halves.
pub mod csv;

/// Codec error types.
pub mod error;

/// Row schema: the ordered column list a codec is bound to.
pub mod schema;

/// Capability traits for codec halves.
pub mod traits;

/// Carrier and field value types.
pub mod types;

// ── Re-exports for convenience ─────────────────────────────────────

pub use config::{
    CodecProperties, CsvCodecOptions, QuoteEscaping, APPLY_QUOTES_TO_ALL, DEFAULT_ESCAPE,
    DEFAULT_QUOTE, DEFAULT_SEPARATOR, ESCAPE_CHAR, QUOTE_CHAR, SEPARATOR_CHAR,
};
pub use csv::{CsvRowDecoder, CsvRowEncoder, FORMAT_NAME};
pub use error::{CodecError, CodecResult};
pub use schema::{RowSchema, RowSchemaRef};
pub use traits::{RowDecoder, RowEncoder};
pub use types::{FieldValue, RawLine};
