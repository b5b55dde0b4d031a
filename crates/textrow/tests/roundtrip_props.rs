//! Property-based tests for the row codec.
//!
//! The central law: for any schema width and any non-null fields free of
//! mode-dependent escaping ambiguity, decoding an encoded row returns the
//! original fields. The suite also pins decode totality (a decoder never
//! errors and always returns exactly the schema width) and the encode
//! arity check.

use proptest::prelude::*;

use textrow::{
    CodecError, CsvCodecOptions, CsvRowDecoder, CsvRowEncoder, FieldValue, RowSchema, RowSchemaRef,
};

fn schema_of(width: usize) -> RowSchemaRef {
    RowSchema::new((0..width).map(|i| format!("c{i}"))).into_ref()
}

fn to_fields(texts: &[String]) -> Vec<FieldValue> {
    texts.iter().map(|t| FieldValue::from(t.as_str())).collect()
}

/// Field text including CSV special characters. Safe to round-trip in
/// doubling mode, where a quote inside a field is written as two quotes.
fn doubling_mode_field() -> impl Strategy<Value = String> + Clone {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,16}",
        "[a-zA-Z0-9]{0,6},[a-zA-Z0-9]{0,6}",
        "[a-zA-Z0-9]{0,6}\"[a-zA-Z0-9]{0,6}",
        "[a-zA-Z0-9]{0,6}\n[a-zA-Z0-9]{0,6}",
        "[a-zA-Z0-9]{0,6}\r[a-zA-Z0-9]{0,6}",
        Just(String::new()),
        Just("it's got, \"everything\"\nalmost".to_string()),
    ]
}

/// Field text free of the configured escape character. Safe to round-trip
/// in prefix mode, where only a following quote is escapable.
fn prefix_mode_field() -> impl Strategy<Value = String> + Clone {
    prop_oneof![
        "[a-zA-Z0-9 ]{0,16}",
        "[a-zA-Z0-9]{0,6}'[a-zA-Z0-9]{0,6}",
        "[a-zA-Z0-9]{0,6},[a-zA-Z0-9]{0,6}",
        "[a-zA-Z0-9]{0,6}\"[a-zA-Z0-9]{0,6}",
        Just(String::new()),
    ]
}

/// A schema width together with that many generated fields.
fn sized_row(
    field: impl Strategy<Value = String> + Clone,
) -> impl Strategy<Value = (usize, Vec<String>)> {
    (1usize..=6).prop_flat_map(move |width| {
        prop::collection::vec(field.clone(), width).prop_map(move |fields| (width, fields))
    })
}

/// Options used for the prefix-mode law: single-quote quoting with a
/// backslash escape.
fn prefix_mode_options(quote_all_fields: bool) -> CsvCodecOptions {
    CsvCodecOptions {
        quote: '\'',
        escape: '\\',
        quote_all_fields,
        ..CsvCodecOptions::default()
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Round-trip law in doubling mode, under both quoting policies.
    #[test]
    fn round_trip_doubling_mode(
        (width, texts) in sized_row(doubling_mode_field()),
        quote_all_fields in any::<bool>(),
    ) {
        // A lone empty field is carrier-ambiguous with the empty record;
        // the law is scoped to unambiguous rows.
        prop_assume!(quote_all_fields || width > 1 || !texts[0].is_empty());

        let options = CsvCodecOptions {
            quote_all_fields,
            ..CsvCodecOptions::default()
        };
        let encoder = CsvRowEncoder::with_options(schema_of(width), options).unwrap();
        let decoder = CsvRowDecoder::with_options(schema_of(width), options).unwrap();

        let line = encoder.encode(&to_fields(&texts)).unwrap();
        let row = decoder.decode(&line).unwrap();

        let expected: Vec<Option<String>> = texts.iter().cloned().map(Some).collect();
        prop_assert_eq!(row, expected, "line was {:?}", line.to_text_lossy());
    }

    // Round-trip law in prefix mode, under both quoting policies.
    #[test]
    fn round_trip_prefix_mode(
        (width, texts) in sized_row(prefix_mode_field()),
        quote_all_fields in any::<bool>(),
    ) {
        prop_assume!(quote_all_fields || width > 1 || !texts[0].is_empty());

        let options = prefix_mode_options(quote_all_fields);
        let encoder = CsvRowEncoder::with_options(schema_of(width), options).unwrap();
        let decoder = CsvRowDecoder::with_options(schema_of(width), options).unwrap();

        let line = encoder.encode(&to_fields(&texts)).unwrap();
        let row = decoder.decode(&line).unwrap();

        let expected: Vec<Option<String>> = texts.iter().cloned().map(Some).collect();
        prop_assert_eq!(row, expected, "line was {:?}", line.to_text_lossy());
    }

    // Decode is total: any input text yields exactly the schema width,
    // never an error, whatever quoting damage the line carries.
    #[test]
    fn decode_always_returns_schema_width(
        width in 0usize..=6,
        text in "[a-zA-Z0-9,\"'\\\\\\n\\r ]{0,48}",
    ) {
        let decoder = CsvRowDecoder::new(schema_of(width));
        let row = decoder.decode(&textrow::RawLine::from(text.as_str())).unwrap();
        prop_assert_eq!(row.len(), width);
    }

    // Encode rejects any arity other than the schema width and emits
    // nothing for such calls.
    #[test]
    fn encode_rejects_wrong_arity(
        width in 1usize..=5,
        delta in 1usize..=3,
        grow in any::<bool>(),
    ) {
        let supplied = if grow { width + delta } else { width.saturating_sub(delta) };
        prop_assume!(supplied != width);

        let encoder = CsvRowEncoder::new(schema_of(width));
        let fields: Vec<FieldValue> = (0..supplied).map(|i| FieldValue::from(i as i64)).collect();
        let err = encoder.encode(&fields).unwrap_err();
        let is_schema_mismatch = matches!(
            err,
            CodecError::SchemaMismatch { expected, actual }
                if expected == width && actual == supplied
        );
        prop_assert!(is_schema_mismatch, "unexpected error: {:?}", err);
    }

    // With quote-all enabled, plain fields come out wrapped in quotes and
    // joined by the separator, exactly.
    #[test]
    fn quote_all_wraps_every_field(
        texts in prop::collection::vec("[a-zA-Z0-9]{1,8}", 1..=5),
    ) {
        let encoder = CsvRowEncoder::new(schema_of(texts.len()));
        let line = encoder.encode(&to_fields(&texts)).unwrap();

        let expected: Vec<String> = texts.iter().map(|t| format!("\"{t}\"")).collect();
        prop_assert_eq!(line.to_text_lossy(), expected.join(","));
    }

    // The encoded line never carries a trailing terminator.
    #[test]
    fn encode_never_appends_terminator(
        (width, texts) in sized_row(doubling_mode_field()),
    ) {
        let encoder = CsvRowEncoder::new(schema_of(width));
        let line = encoder.encode(&to_fields(&texts)).unwrap();
        let bytes = line.as_bytes();
        prop_assert!(!bytes.ends_with(b"\n") && !bytes.ends_with(b"\r"));
    }

    // Null fields are stringified to empty text, so they decode back as
    // present empty fields, not as absent ones.
    #[test]
    fn null_fields_round_trip_as_empty_text(
        width in 2usize..=5,
        null_at in 0usize..=4,
    ) {
        prop_assume!(null_at < width);

        let encoder = CsvRowEncoder::new(schema_of(width));
        let decoder = CsvRowDecoder::new(schema_of(width));

        let fields: Vec<FieldValue> = (0..width)
            .map(|i| {
                if i == null_at {
                    FieldValue::Null
                } else {
                    FieldValue::from("v")
                }
            })
            .collect();
        let row = decoder.decode(&encoder.encode(&fields).unwrap()).unwrap();
        prop_assert_eq!(row[null_at].as_deref(), Some(""));
    }
}
