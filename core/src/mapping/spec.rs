use std::borrow::Cow;

use crate::entity::{Assign, ColumnField};

/// Binding of one entity field to a column name, fixed at configuration time.
pub(crate) struct FieldSpec<T> {
    pub(crate) field: &'static str,
    pub(crate) column: Cow<'static, str>,
    /// Missing column binds to nothing instead of failing
    pub(crate) optional: bool,
    pub(crate) assign: Assign<T>,
}

impl<T> FieldSpec<T> {
    pub(crate) fn from_column(column: ColumnField<T>) -> Self {
        Self {
            field: column.name,
            column: Cow::Borrowed(column.column),
            optional: column.optional,
            assign: column.assign,
        }
    }
}
