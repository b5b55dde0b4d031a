//! CSV row decoder implementing [`RowDecoder`].
//!
//! Splits one carrier line into an ordered row of nullable text fields.
//! Constructed once with a frozen schema and resolved options; after that
//! every call is a self-contained transformation with its own reader and a
//! freshly allocated result, so a single decoder can serve concurrent
//! callers.
//!
//! Uses the `csv` crate's `ByteRecord` API and converts each field with a
//! lossy UTF-8 view, so malformed field bytes never raise.

use tracing::{debug, warn};

use crate::config::{CsvCodecOptions, QuoteEscaping, ESCAPE_CHAR, QUOTE_CHAR, SEPARATOR_CHAR};
use crate::error::{CodecError, CodecResult};
use crate::schema::RowSchemaRef;
use crate::traits::RowDecoder;
use crate::types::RawLine;

use super::{control_byte, FORMAT_NAME};

/// Decodes one CSV line into an ordered row of nullable text fields.
///
/// Field mapping is positional: raw field `i` lands in row entry `i` for
/// `i < num_cols`, missing trailing fields come back as `None`, and raw
/// fields beyond the schema width are discarded silently. The decoder
/// reads exactly one record per call; carrier content past the first
/// unquoted record boundary is ignored, and an empty carrier produces an
/// all-`None` row.
#[derive(Debug, Clone)]
pub struct CsvRowDecoder {
    /// The schema this decoder is bound to.
    schema: RowSchemaRef,
    /// Resolved options, kept for introspection.
    options: CsvCodecOptions,
    /// Separator byte for the line reader.
    separator: u8,
    /// Quote byte for the line reader.
    quote: u8,
    /// Escape prefix byte; `None` selects quote doubling.
    escape: Option<u8>,
}

impl CsvRowDecoder {
    /// Creates a decoder with default options.
    #[must_use]
    pub fn new(schema: RowSchemaRef) -> Self {
        Self::with_options(schema, CsvCodecOptions::default())
            .expect("default options are ASCII")
    }

    /// Creates a decoder with the given options.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Config`] if the separator, quote, or escape
    /// character is not ASCII.
    pub fn with_options(schema: RowSchemaRef, options: CsvCodecOptions) -> CodecResult<Self> {
        let separator = control_byte(options.separator, SEPARATOR_CHAR)?;
        let quote = control_byte(options.quote, QUOTE_CHAR)?;
        let escape = match options.quote_escaping() {
            QuoteEscaping::Doubling => None,
            QuoteEscaping::Prefixed(c) => Some(control_byte(c, ESCAPE_CHAR)?),
        };
        debug!(
            separator = %options.separator,
            quote = %options.quote,
            escape = %options.escape,
            columns = schema.num_cols(),
            "building csv row decoder"
        );
        Ok(Self {
            schema,
            options,
            separator,
            quote,
            escape,
        })
    }

    /// Returns the schema this decoder is bound to.
    #[must_use]
    pub fn schema(&self) -> RowSchemaRef {
        RowSchemaRef::clone(&self.schema)
    }

    /// Returns the resolved options.
    #[must_use]
    pub fn options(&self) -> &CsvCodecOptions {
        &self.options
    }

    /// Builds the reader configuration for one decode call.
    fn make_reader_builder(&self) -> csv::ReaderBuilder {
        let mut rb = csv::ReaderBuilder::new();
        rb.delimiter(self.separator)
            .quote(self.quote)
            .has_headers(false) // A line is data, never a header
            .flexible(true); // Field count mapping is ours

        match self.escape {
            // Doubling mode: `""` inside a quoted field is a literal quote.
            None => {
                rb.double_quote(true);
            }
            // Prefix mode: the configured byte escapes the following quote.
            Some(e) => {
                rb.double_quote(false).escape(Some(e));
            }
        }

        rb
    }

    /// Decodes one line into exactly `num_cols` nullable text fields.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::Carrier`] if the line reader fails. Malformed
    /// quoting does not fail: the reader yields best-effort fields.
    pub fn decode(&self, line: &RawLine) -> CodecResult<Vec<Option<String>>> {
        let mut reader = self.make_reader_builder().from_reader(line.as_bytes());
        let mut raw = csv::ByteRecord::new();
        let has_record = reader.read_byte_record(&mut raw).map_err(|e| {
            warn!(error = %e, "csv line read failed");
            CodecError::Carrier(format!("csv read error: {e}"))
        })?;

        let num_cols = self.schema.num_cols();
        let mut row = Vec::with_capacity(num_cols);
        for i in 0..num_cols {
            let field = if has_record { raw.get(i) } else { None };
            row.push(field.map(|bytes| String::from_utf8_lossy(bytes).into_owned()));
        }
        Ok(row)
    }
}

impl RowDecoder for CsvRowDecoder {
    fn schema(&self) -> RowSchemaRef {
        self.schema()
    }

    fn decode_line(&self, line: &RawLine) -> CodecResult<Vec<Option<String>>> {
        self.decode(line)
    }

    fn format_name(&self) -> &str {
        FORMAT_NAME
    }
}
