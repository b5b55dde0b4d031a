//! Codec configuration.
//!
//! Provides [`CodecProperties`], the string key/value bag handed over by the
//! host at initialization, and [`CsvCodecOptions`], the resolved options a
//! codec half freezes at construction. Resolution is total: absent, empty,
//! or unparsable values fall back to documented defaults and unrecognized
//! keys are ignored, so building options from a bag can never fail.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Property keys and defaults
// ---------------------------------------------------------------------------

/// Property key for the field separator character.
pub const SEPARATOR_CHAR: &str = "separatorChar";

/// Property key for the quote character.
pub const QUOTE_CHAR: &str = "quoteChar";

/// Property key for the escape character.
pub const ESCAPE_CHAR: &str = "escapeChar";

/// Property key for the quote-every-field output policy.
pub const APPLY_QUOTES_TO_ALL: &str = "applyQuotesToAll";

/// Default field separator.
pub const DEFAULT_SEPARATOR: char = ',';

/// Default quote character.
pub const DEFAULT_QUOTE: char = '"';

/// Default escape character.
///
/// Deliberately equal to [`DEFAULT_QUOTE`]: an escape left at this value
/// selects [`QuoteEscaping::Doubling`], any other escape selects
/// [`QuoteEscaping::Prefixed`]. See [`CsvCodecOptions::quote_escaping`].
pub const DEFAULT_ESCAPE: char = '"';

/// Default separator (serde helper).
const fn default_separator() -> char {
    DEFAULT_SEPARATOR
}

/// Default quote (serde helper).
const fn default_quote() -> char {
    DEFAULT_QUOTE
}

/// Default escape (serde helper).
const fn default_escape() -> char {
    DEFAULT_ESCAPE
}

/// Returns `true` (used for `#[serde(default)]` on the quoting policy).
const fn default_quote_all_fields() -> bool {
    true
}

// ---------------------------------------------------------------------------
// Property bag
// ---------------------------------------------------------------------------

/// String key/value configuration bag supplied by the host.
///
/// Keys other than the four recognized ones are carried but ignored by
/// resolution.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CodecProperties {
    properties: HashMap<String, String>,
}

impl CodecProperties {
    /// Creates an empty bag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a property, builder style.
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(key, value);
        self
    }

    /// Sets a property, replacing any previous value for the key.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.properties.insert(key.into(), value.into());
    }

    /// Looks up a property value.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.properties.get(key).map(String::as_str)
    }

    /// Number of properties in the bag.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Whether the bag is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<(String, String)> for CodecProperties {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Resolved options
// ---------------------------------------------------------------------------

/// How embedded quote characters are represented inside a quoted field.
///
/// The two conventions are mutually ambiguous, so the codec commits to one
/// of them at resolution time and both the decoder and the encoder branch on
/// the result. The selection rule is intentional: leaving the escape at
/// [`DEFAULT_ESCAPE`] (which equals the default quote) means "no distinct
/// escape character exists", which is exactly the doubling convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuoteEscaping {
    /// A doubled quote inside a quoted field is one literal quote.
    Doubling,
    /// The contained character escapes a following quote.
    Prefixed(char),
}

/// Resolved codec options.
///
/// Immutable once a codec half is built; each half owns its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvCodecOptions {
    /// Character delimiting fields within a line.
    #[serde(default = "default_separator")]
    pub separator: char,

    /// Character wrapping a field so separators and quotes inside it are
    /// taken literally.
    #[serde(default = "default_quote")]
    pub quote: char,

    /// Character escaping an embedded quote, when it differs from
    /// [`DEFAULT_ESCAPE`].
    #[serde(default = "default_escape")]
    pub escape: char,

    /// When `true`, encode wraps every field in quotes; when `false`, only
    /// fields containing a separator, quote, or line terminator are wrapped.
    #[serde(default = "default_quote_all_fields")]
    pub quote_all_fields: bool,
}

impl Default for CsvCodecOptions {
    fn default() -> Self {
        Self {
            separator: DEFAULT_SEPARATOR,
            quote: DEFAULT_QUOTE,
            escape: DEFAULT_ESCAPE,
            quote_all_fields: default_quote_all_fields(),
        }
    }
}

impl CsvCodecOptions {
    /// Resolves options from the host property bag.
    ///
    /// Resolution never fails. For the three character keys only the first
    /// character of the value is used (longer values are silently
    /// truncated); an absent key or empty value falls back to the default.
    /// `applyQuotesToAll` is parsed permissively: absent means `true`, a
    /// present value means `true` only when it case-insensitively equals
    /// the literal `true`.
    #[must_use]
    pub fn from_properties(props: &CodecProperties) -> Self {
        Self {
            separator: first_char(props.get(SEPARATOR_CHAR), DEFAULT_SEPARATOR),
            quote: first_char(props.get(QUOTE_CHAR), DEFAULT_QUOTE),
            escape: first_char(props.get(ESCAPE_CHAR), DEFAULT_ESCAPE),
            quote_all_fields: props
                .get(APPLY_QUOTES_TO_ALL)
                .map_or(true, |v| v.eq_ignore_ascii_case("true")),
        }
    }

    /// Returns the quote-escaping mode this configuration selects.
    ///
    /// The branch is keyed on `escape == DEFAULT_ESCAPE`, not on
    /// `escape == quote`: reconfiguring the quote character alone keeps the
    /// doubling convention.
    #[must_use]
    pub fn quote_escaping(&self) -> QuoteEscaping {
        if self.escape == DEFAULT_ESCAPE {
            QuoteEscaping::Doubling
        } else {
            QuoteEscaping::Prefixed(self.escape)
        }
    }
}

/// First character of a present, non-empty value, else the default.
fn first_char(value: Option<&str>, default: char) -> char {
    value.and_then(|v| v.chars().next()).unwrap_or(default)
}
