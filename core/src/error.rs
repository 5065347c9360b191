use std::borrow::Cow;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum MappingError {
    /// A field reference does not name a field of the entity
    #[error("{entity} has no field `{field}`")]
    UnknownField {
        entity: &'static str,
        field: &'static str,
    },

    /// A field was used where a different kind of field is required
    /// (e.g. a relationship declared against a column field)
    #[error("`{entity}.{field}` is a {actual} field, expected a {expected} field")]
    FieldKind {
        entity: &'static str,
        field: &'static str,
        expected: &'static str,
        actual: &'static str,
    },

    /// The same relationship field was included twice on one entity
    #[error("relationship `{entity}.{field}` is declared more than once")]
    DuplicateRelation {
        entity: &'static str,
        field: &'static str,
    },

    /// Two entities were configured to read from the same result set
    #[error("result set {index} is claimed by both {first} and {second}")]
    DuplicateResultSet {
        index: usize,
        first: &'static str,
        second: &'static str,
    },

    /// A required column is absent from the executed result set
    #[error("result set {result_set} has no column `{column}` required by `{entity}.{field}`")]
    MissingColumn {
        result_set: usize,
        entity: &'static str,
        field: &'static str,
        column: String,
    },

    /// Error converting a cell value into a field type
    #[error("Conversion error: {0}")]
    ConversionError(Cow<'static, str>),

    /// A row could not be materialized
    #[error("result set {result_set}, row {row}, column `{column}` ({found}): {source}")]
    Read {
        result_set: usize,
        row: usize,
        column: String,
        /// Storage class of the offending cell
        found: &'static str,
        #[source]
        source: Box<MappingError>,
    },

    /// The cursor ran out of result sets before every configured one was read
    #[error("expected at least {expected} result sets, cursor yielded {found}")]
    CursorExhausted { expected: usize, found: usize },

    /// Misuse of a cursor (no current row, ordinal out of range, ...)
    #[error("Cursor error: {0}")]
    Cursor(Cow<'static, str>),

    /// A materialized row set did not hold the entity type it was expected to
    #[error("result set {index} does not hold {entity} rows")]
    RowSetMismatch { index: usize, entity: &'static str },

    /// Rusqlite specific errors
    #[cfg(feature = "rusqlite")]
    #[error("Rusqlite error: {0}")]
    Rusqlite(#[from] rusqlite::Error),
}

impl MappingError {
    /// Returns true for errors raised while building a mapping.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            MappingError::UnknownField { .. }
                | MappingError::FieldKind { .. }
                | MappingError::DuplicateRelation { .. }
                | MappingError::DuplicateResultSet { .. }
        )
    }

    /// Returns true for errors raised while binding a mapping to a column layout.
    pub fn is_binding(&self) -> bool {
        matches!(self, MappingError::MissingColumn { .. })
    }
}

/// Result type for mapping operations
pub type Result<T> = std::result::Result<T, MappingError>;
