//! Codec error types.
//!
//! Provides [`CodecError`] for codec construction, decoding, and encoding,
//! plus a convenience [`CodecResult`] alias.

use thiserror::Error;

/// Result alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur during codec operations.
///
/// Option resolution itself is total and never raises; [`CodecError::Config`]
/// is only produced when a codec half is built with control characters the
/// byte-oriented line parser cannot honor. Every error is fatal for the call
/// that produced it and is never retried inside the codec.
#[derive(Debug, Error)]
pub enum CodecError {
    /// A resolved option cannot be honored by the line parser.
    #[error("invalid codec option '{key}': {message}")]
    Config {
        /// The option key.
        key: String,
        /// What was wrong with the value.
        message: String,
    },

    /// The number of fields handed to encode differs from the schema width.
    #[error("cannot encode row: got {actual} fields but the schema has {expected} columns")]
    SchemaMismatch {
        /// Number of columns the schema declares.
        expected: usize,
        /// Number of fields supplied by the caller.
        actual: usize,
    },

    /// Encode met a value with no text projection.
    #[error("cannot encode column {column}: {kind} values have no text form")]
    UnsupportedFieldType {
        /// Zero-based index of the offending column.
        column: usize,
        /// Variant name of the offending value.
        kind: &'static str,
    },

    /// The underlying line reader or writer failed.
    #[error("carrier failure: {0}")]
    Carrier(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_display() {
        let err = CodecError::Config {
            key: "separatorChar".into(),
            message: "'\u{2603}' is not an ASCII character".into(),
        };
        assert!(err.to_string().contains("separatorChar"));
        assert!(err.to_string().contains("not an ASCII character"));
    }

    #[test]
    fn test_schema_mismatch_display() {
        let err = CodecError::SchemaMismatch {
            expected: 3,
            actual: 5,
        };
        assert_eq!(
            err.to_string(),
            "cannot encode row: got 5 fields but the schema has 3 columns"
        );
    }

    #[test]
    fn test_unsupported_field_type_display() {
        let err = CodecError::UnsupportedFieldType {
            column: 1,
            kind: "bytes",
        };
        assert_eq!(
            err.to_string(),
            "cannot encode column 1: bytes values have no text form"
        );
    }

    #[test]
    fn test_carrier_display() {
        let err = CodecError::Carrier("csv read error: unequal lengths".into());
        assert_eq!(
            err.to_string(),
            "carrier failure: csv read error: unequal lengths"
        );
    }
}
