//! Forward-only, multi-result-set cursors.
//!
//! A [`Cursor`] is the only way the mapping engine sees query output. It
//! walks result sets in order and rows within a result set in order, and
//! never rewinds.
//!
//! ```text
//! fresh cursor ──advance_result_set()──▶ set 0 ──advance_row()──▶ row 0 ▶ row 1 ▶ …
//!                                          │
//!                                          └──advance_result_set()──▶ set 1 ▶ … ▶ false
//! ```

mod memory;
#[cfg(feature = "rusqlite")]
mod rusqlite;

pub use memory::{MemoryCursor, ResultSet};
#[cfg(feature = "rusqlite")]
pub use self::rusqlite::BatchCursor;

use crate::error::{MappingError, Result};
use crate::value::Value;

/// A forward-only cursor over a sequence of tabular result sets.
///
/// A freshly created cursor is positioned *before* the first result set;
/// the first call to [`advance_result_set`](Cursor::advance_result_set)
/// moves onto it. Within a result set the cursor starts before the first
/// row.
pub trait Cursor {
    /// Advance to the next row of the current result set.
    ///
    /// Returns `false` once the result set has no more rows.
    fn advance_row(&mut self) -> Result<bool>;

    /// Advance to the next result set, discarding any unread rows of the
    /// current one.
    ///
    /// Returns `false` after the last result set.
    fn advance_result_set(&mut self) -> Result<bool>;

    /// Number of columns in the current result set.
    fn column_count(&self) -> usize;

    /// Name of the column at `ordinal` in the current result set.
    fn column_name(&self, ordinal: usize) -> Result<&str>;

    /// Value of the column at `ordinal` in the current row.
    fn value(&self, ordinal: usize) -> Result<Value<'_>>;

    /// Value of the column named `name` in the current row.
    ///
    /// Names match ASCII case-insensitively; the first matching column wins.
    fn value_by_name(&self, name: &str) -> Result<Value<'_>> {
        let ordinal = (0..self.column_count())
            .find(|&ordinal| {
                self.column_name(ordinal)
                    .is_ok_and(|column| column.eq_ignore_ascii_case(name))
            })
            .ok_or_else(|| MappingError::Cursor(format!("no column named `{}`", name).into()))?;
        self.value(ordinal)
    }
}

impl<C: Cursor + ?Sized> Cursor for &mut C {
    fn advance_row(&mut self) -> Result<bool> {
        (**self).advance_row()
    }

    fn advance_result_set(&mut self) -> Result<bool> {
        (**self).advance_result_set()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column_name(&self, ordinal: usize) -> Result<&str> {
        (**self).column_name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value<'_>> {
        (**self).value(ordinal)
    }

    fn value_by_name(&self, name: &str) -> Result<Value<'_>> {
        (**self).value_by_name(name)
    }
}

impl<C: Cursor + ?Sized> Cursor for Box<C> {
    fn advance_row(&mut self) -> Result<bool> {
        (**self).advance_row()
    }

    fn advance_result_set(&mut self) -> Result<bool> {
        (**self).advance_result_set()
    }

    fn column_count(&self) -> usize {
        (**self).column_count()
    }

    fn column_name(&self, ordinal: usize) -> Result<&str> {
        (**self).column_name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value<'_>> {
        (**self).value(ordinal)
    }

    fn value_by_name(&self, name: &str) -> Result<Value<'_>> {
        (**self).value_by_name(name)
    }
}
