//! CSV row encoder implementing [`RowEncoder`].
//!
//! Assembles an ordered row of field values into one carrier line.
//! Constructed once with a frozen schema and resolved options; every call
//! projects the supplied values to text, drives a fresh line writer, and
//! returns the finished line without a trailing terminator.

use std::borrow::Cow;

use csv::{QuoteStyle, Terminator};
use tracing::{debug, warn};

use crate::config::{CsvCodecOptions, QuoteEscaping, ESCAPE_CHAR, QUOTE_CHAR, SEPARATOR_CHAR};
use crate::error::{CodecError, CodecResult};
use crate::schema::RowSchemaRef;
use crate::traits::RowEncoder;
use crate::types::{FieldValue, RawLine};

use super::{control_byte, FORMAT_NAME};

/// Encodes an ordered row of field values into one CSV line.
///
/// The field count must match the schema width exactly; nothing is emitted
/// for a mismatched call. Values are projected to text null-safely (a
/// `Null` becomes the empty string), quoted per the configured policy, and
/// joined with the separator. Embedded quotes follow the same
/// quote-escaping mode the decoder uses (doubling or prefix, see
/// [`CsvCodecOptions::quote_escaping`]).
#[derive(Debug, Clone)]
pub struct CsvRowEncoder {
    /// The schema this encoder is bound to.
    schema: RowSchemaRef,
    /// Resolved options, kept for introspection.
    options: CsvCodecOptions,
    /// Separator byte for the line writer.
    separator: u8,
    /// Quote byte for the line writer.
    quote: u8,
    /// Escape prefix byte; `None` selects quote doubling.
    escape: Option<u8>,
}

impl CsvRowEncoder {
    /// Creates an encoder with default options.
    #[must_use]
    pub fn new(schema: RowSchemaRef) -> Self {
        Self::with_options(schema, CsvCodecOptions::default())
            .expect("default options are ASCII")
    }

    /// Creates an encoder with the given options.
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
            quote_all_fields = options.quote_all_fields,
            columns = schema.num_cols(),
            "building csv row encoder"
        );
        Ok(Self {
            schema,
            options,
            separator,
            quote,
            escape,
        })
    }

    /// Returns the schema this encoder is bound to.
    #[must_use]
    pub fn schema(&self) -> RowSchemaRef {
        RowSchemaRef::clone(&self.schema)
    }

    /// Returns the resolved options.
    #[must_use]
    pub fn options(&self) -> &CsvCodecOptions {
        &self.options
    }

    /// Builds the writer configuration for one encode call.
    ///
    /// The terminator is CRLF so that a field containing either `\r` or
    /// `\n` counts as needing quotes; the terminator itself is stripped
    /// from the finished line.
    fn make_writer_builder(&self) -> csv::WriterBuilder {
        let mut wb = csv::WriterBuilder::new();
        wb.delimiter(self.separator)
            .quote(self.quote)
            .terminator(Terminator::CRLF)
            .quote_style(if self.options.quote_all_fields {
                QuoteStyle::Always
            } else {
                QuoteStyle::Necessary
            });

        match self.escape {
            // Doubling mode: a literal quote is written as two quotes.
            None => {
                wb.double_quote(true);
            }
            // Prefix mode: a literal quote is written as escape + quote.
            Some(e) => {
                wb.double_quote(false).escape(e);
            }
        }

        wb
    }

    /// Encodes exactly `num_cols` field values into a single line.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::SchemaMismatch`] if the field count differs
    /// from the schema width, [`CodecError::UnsupportedFieldType`] if a
    /// value has no text form, and [`CodecError::Carrier`] if the line
    /// writer fails. Nothing is emitted on any error.
    pub fn encode(&self, fields: &[FieldValue]) -> CodecResult<RawLine> {
        let num_cols = self.schema.num_cols();
        if fields.len() != num_cols {
            return Err(CodecError::SchemaMismatch {
                expected: num_cols,
                actual: fields.len(),
            });
        }
        if num_cols == 0 {
            return Ok(RawLine::default());
        }

        let mut projected: Vec<Cow<'_, str>> = Vec::with_capacity(num_cols);
        for (column, value) in fields.iter().enumerate() {
            match value.as_text() {
                Some(text) => projected.push(text),
                None => {
                    return Err(CodecError::UnsupportedFieldType {
                        column,
                        kind: value.kind(),
                    })
                }
            }
        }

        let capacity = projected.iter().map(|f| f.len() + 3).sum::<usize>() + 2;
        let mut buf = Vec::with_capacity(capacity);
        {
            let mut writer = self.make_writer_builder().from_writer(&mut buf);
            writer
                .write_record(projected.iter().map(|field| field.as_bytes()))
                .map_err(|e| {
                    warn!(error = %e, "csv line write failed");
                    CodecError::Carrier(format!("csv write error: {e}"))
                })?;
            writer
                .flush()
                .map_err(|e| CodecError::Carrier(format!("csv flush error: {e}")))?;
        }
        if buf.ends_with(b"\r\n") {
            buf.truncate(buf.len() - 2);
        }
        Ok(RawLine::new(buf))
    }
}

impl RowEncoder for CsvRowEncoder {
    fn schema(&self) -> RowSchemaRef {
        self.schema()
    }

    fn encode_row(&self, fields: &[FieldValue]) -> CodecResult<RawLine> {
        self.encode(fields)
    }

    fn format_name(&self) -> &str {
        FORMAT_NAME
    }
}
