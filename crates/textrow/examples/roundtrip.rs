//! Round-trip demo: resolve options from host properties, decode a line,
//! and encode the row back.
//!
//! Run with: cargo run --example roundtrip

use textrow::{
    CodecProperties, CsvCodecOptions, CsvRowDecoder, CsvRowEncoder, FieldValue, RowSchema,
    APPLY_QUOTES_TO_ALL, SEPARATOR_CHAR,
};

fn main() -> Result<(), textrow::CodecError> {
    let schema = RowSchema::from_comma_list("id,name,note").into_ref();

    let props = CodecProperties::new()
        .with_property(SEPARATOR_CHAR, ",")
        .with_property(APPLY_QUOTES_TO_ALL, "false");
    let options = CsvCodecOptions::from_properties(&props);

    let decoder = CsvRowDecoder::with_options(schema.clone(), options)?;
    let row = decoder.decode(&"7,alice,\"yes, okay\"".into())?;
    println!("decoded: {row:?}");

    let encoder = CsvRowEncoder::with_options(schema, options)?;
    let line = encoder.encode(&[
        FieldValue::from(7i64),
        FieldValue::from("alice"),
        FieldValue::from("yes, okay"),
    ])?;
    println!("encoded: {line}");

    Ok(())
}
