//! Carrier and field value types.
//!
//! Provides [`RawLine`], the raw-bytes line exchanged with the host on both
//! the decode and encode sides, and [`FieldValue`], the closed set of value
//! representations encode accepts.

use std::borrow::Cow;
use std::fmt;

// ---------------------------------------------------------------------------
// Carrier
// ---------------------------------------------------------------------------

/// One line of delimited text as exchanged with the host.
///
/// The carrier is byte oriented with a lossy UTF-8 text view: field bytes
/// that are not valid UTF-8 are replaced, never raised. Decode takes a
/// `RawLine` as input; encode produces one as output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawLine {
    bytes: Vec<u8>,
}

impl RawLine {
    /// Creates a line from raw bytes.
    #[must_use]
    pub fn new(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }

    /// The raw bytes of the line.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the line, returning its bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Text view of the line; invalid UTF-8 is replaced.
    #[must_use]
    pub fn to_text_lossy(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(&self.bytes)
    }

    /// Length of the line in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Whether the line holds no bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<&str> for RawLine {
    fn from(text: &str) -> Self {
        Self::new(text.as_bytes().to_vec())
    }
}

impl From<String> for RawLine {
    fn from(text: String) -> Self {
        Self::new(text.into_bytes())
    }
}

impl From<Vec<u8>> for RawLine {
    fn from(bytes: Vec<u8>) -> Self {
        Self::new(bytes)
    }
}

impl From<&[u8]> for RawLine {
    fn from(bytes: &[u8]) -> Self {
        Self::new(bytes.to_vec())
    }
}

impl fmt::Display for RawLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_text_lossy())
    }
}

// ---------------------------------------------------------------------------
// Field values
// ---------------------------------------------------------------------------

/// A single field value handed to encode.
///
/// A closed set of representations: the scalar variants project to text via
/// [`FieldValue::as_text`]; [`FieldValue::Bytes`] has no text form and makes
/// encode fail with an unsupported-field-type error.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// Absent value. Projects to the empty string, not the literal `null`.
    Null,
    /// Plain text.
    Text(String),
    /// Boolean scalar.
    Bool(bool),
    /// 64-bit signed integer scalar.
    Int(i64),
    /// 64-bit floating point scalar.
    Float(f64),
    /// Raw bytes. Has no text projection.
    Bytes(Vec<u8>),
}

impl FieldValue {
    /// Projects the value to its text form, if it has one.
    ///
    /// The projection is null-safe: `Null` becomes the empty string.
    /// `Bytes` returns `None`.
    #[must_use]
    pub fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            FieldValue::Null => Some(Cow::Borrowed("")),
            FieldValue::Text(text) => Some(Cow::Borrowed(text)),
            FieldValue::Bool(b) => Some(Cow::Owned(b.to_string())),
            FieldValue::Int(i) => Some(Cow::Owned(i.to_string())),
            FieldValue::Float(f) => Some(Cow::Owned(f.to_string())),
            FieldValue::Bytes(_) => None,
        }
    }

    /// Short variant name, used in error messages.
    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            FieldValue::Null => "null",
            FieldValue::Text(_) => "text",
            FieldValue::Bool(_) => "bool",
            FieldValue::Int(_) => "int",
            FieldValue::Float(_) => "float",
            FieldValue::Bytes(_) => "bytes",
        }
    }

    /// Whether the value is [`FieldValue::Null`].
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<Option<String>> for FieldValue {
    fn from(value: Option<String>) -> Self {
        match value {
            Some(text) => FieldValue::Text(text),
            None => FieldValue::Null,
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(bytes: Vec<u8>) -> Self {
        FieldValue::Bytes(bytes)
    }
}
