//! Row schema.
//!
//! Provides [`RowSchema`], the ordered column list a codec is bound to, and
//! the shared [`RowSchemaRef`] handle the decoder and encoder halves hold.

use std::sync::Arc;

/// Shared reference to a [`RowSchema`].
pub type RowSchemaRef = Arc<RowSchema>;

/// Ordered list of column names, all treated as text.
///
/// Fixed at initialization and never mutated afterward. Position is a
/// field's only identity: duplicate column names are permitted and not
/// disambiguated by the codec.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowSchema {
    columns: Vec<String>,
}

impl RowSchema {
    /// Creates a schema from an ordered column list.
    #[must_use]
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Parses the host metadata convention of a comma-separated column list.
    ///
    /// An empty input produces an empty schema. Names are not trimmed and
    /// interior empties are kept, so `"a,,b"` declares three columns.
    #[must_use]
    pub fn from_comma_list(list: &str) -> Self {
        if list.is_empty() {
            return Self::default();
        }
        Self::new(list.split(','))
    }

    /// Number of columns.
    #[must_use]
    pub fn num_cols(&self) -> usize {
        self.columns.len()
    }

    /// Column names in schema order.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Name of column `index`, if in range.
    #[must_use]
    pub fn column(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(String::as_str)
    }

    /// Whether the schema declares no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Wraps the schema for sharing between codec halves.
    #[must_use]
    pub fn into_ref(self) -> RowSchemaRef {
        Arc::new(self)
    }
}
