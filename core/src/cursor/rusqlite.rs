//! [`Cursor`] over a multi-statement SQL string executed with rusqlite.

use rusqlite::fallible_iterator::FallibleIterator;
use rusqlite::{Batch, Connection};

use crate::error::{MappingError, Result};
use crate::value::Value;

use super::{Cursor, ResultSet};

/// Runs every statement of a SQL batch in order and exposes each statement
/// that returns columns as one result set.
///
/// Statements without result columns (`INSERT`, `CREATE`, ...) are executed
/// and skipped. The rows of the current statement are buffered when the
/// cursor moves onto it, so the cursor never holds a live statement between
/// calls.
///
/// ```ignore
/// let conn = rusqlite::Connection::open_in_memory()?;
/// let mut cursor = BatchCursor::new(&conn, "SELECT 1 AS a; SELECT 2 AS b;");
/// let rows = mapping.parse(&mut cursor)?;
/// ```
pub struct BatchCursor<'conn, 'sql> {
    batch: Batch<'conn, 'sql>,
    current: Option<ResultSet>,
    row: Option<usize>,
}

impl<'conn, 'sql> BatchCursor<'conn, 'sql> {
    pub fn new(conn: &'conn Connection, sql: &'sql str) -> Self {
        Self {
            batch: Batch::new(conn, sql),
            current: None,
            row: None,
        }
    }
}

impl Cursor for BatchCursor<'_, '_> {
    fn advance_row(&mut self) -> Result<bool> {
        let Some(set) = self.current.as_ref() else {
            return Ok(false);
        };
        Ok(set.advance(&mut self.row))
    }

    fn advance_result_set(&mut self) -> Result<bool> {
        self.current = None;
        self.row = None;

        while let Some(mut stmt) = self.batch.next()? {
            let column_count = stmt.column_count();
            if column_count == 0 {
                stmt.raw_execute()?;
                continue;
            }

            let mut set = ResultSet::new(stmt.column_names());
            let mut rows = stmt.query([])?;
            while let Some(row) = rows.next()? {
                let mut values = Vec::with_capacity(column_count);
                for ordinal in 0..column_count {
                    values.push(Value::from(row.get_ref(ordinal)?).into_owned());
                }
                set.push_row(values);
            }

            crate::rowgraph_trace_cursor!("sqlite.rusqlite", set.len());
            self.current = Some(set);
            return Ok(true);
        }

        Ok(false)
    }

    fn column_count(&self) -> usize {
        self.current.as_ref().map_or(0, |set| set.columns().len())
    }

    fn column_name(&self, ordinal: usize) -> Result<&str> {
        self.current
            .as_ref()
            .ok_or(MappingError::Cursor("cursor is not positioned on a result set".into()))?
            .column_name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value<'_>> {
        self.current
            .as_ref()
            .ok_or(MappingError::Cursor("cursor is not positioned on a result set".into()))?
            .value(self.row, ordinal)
    }
}
