//! In-memory result sets and the cursor over them.

use compact_str::CompactString;

use crate::error::{MappingError, Result};
use crate::value::Value;

use super::Cursor;

/// An owned, fully buffered result set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultSet {
    columns: Vec<CompactString>,
    rows: Vec<Vec<Value<'static>>>,
}

impl ResultSet {
    /// Creates an empty result set with the given column names.
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Appends a row, builder style.
    pub fn row<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<'static>>,
    {
        self.push_row(values);
        self
    }

    /// Appends a row.
    pub fn push_row<I, V>(&mut self, values: I)
    where
        I: IntoIterator<Item = V>,
        V: Into<Value<'static>>,
    {
        self.rows.push(values.into_iter().map(Into::into).collect());
    }

    pub fn columns(&self) -> &[CompactString] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value<'static>>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub(crate) fn column_name(&self, ordinal: usize) -> Result<&str> {
        self.columns
            .get(ordinal)
            .map(CompactString::as_str)
            .ok_or_else(|| ordinal_out_of_range(ordinal, self.columns.len()))
    }

    pub(crate) fn value(&self, row: Option<usize>, ordinal: usize) -> Result<Value<'_>> {
        let values = row
            .and_then(|row| self.rows.get(row))
            .ok_or(MappingError::Cursor("cursor is not positioned on a row".into()))?;
        values
            .get(ordinal)
            .map(Value::reborrow)
            .ok_or_else(|| ordinal_out_of_range(ordinal, values.len()))
    }

    /// Moves `row` to the next row, returning `false` past the end.
    pub(crate) fn advance(&self, row: &mut Option<usize>) -> bool {
        let next = row.map_or(0, |row| row + 1);
        if next < self.rows.len() {
            *row = Some(next);
            true
        } else {
            *row = Some(self.rows.len());
            false
        }
    }
}

fn ordinal_out_of_range(ordinal: usize, count: usize) -> MappingError {
    MappingError::Cursor(format!("column ordinal {} out of range ({} columns)", ordinal, count).into())
}

/// A [`Cursor`] over result sets already held in memory.
///
/// # Example
/// ```
/// # use rowgraph_core::{Cursor, MemoryCursor, ResultSet, Value};
/// let mut cursor = MemoryCursor::new(vec![
///     ResultSet::new(["UserId", "Name"]).row([Value::from(1), Value::from("A")]),
/// ]);
/// assert!(cursor.advance_result_set().unwrap());
/// assert!(cursor.advance_row().unwrap());
/// assert_eq!(cursor.value_by_name("name").unwrap().as_str(), Some("A"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryCursor {
    sets: Vec<ResultSet>,
    set: Option<usize>,
    row: Option<usize>,
}

impl MemoryCursor {
    pub fn new(sets: Vec<ResultSet>) -> Self {
        Self {
            sets,
            set: None,
            row: None,
        }
    }

    fn current(&self) -> Option<&ResultSet> {
        self.set.and_then(|set| self.sets.get(set))
    }
}

impl From<Vec<ResultSet>> for MemoryCursor {
    fn from(sets: Vec<ResultSet>) -> Self {
        Self::new(sets)
    }
}

impl FromIterator<ResultSet> for MemoryCursor {
    fn from_iter<T: IntoIterator<Item = ResultSet>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl Cursor for MemoryCursor {
    fn advance_row(&mut self) -> Result<bool> {
        let Some(set) = self.set.and_then(|set| self.sets.get(set)) else {
            return Ok(false);
        };
        Ok(set.advance(&mut self.row))
    }

    fn advance_result_set(&mut self) -> Result<bool> {
        let next = self.set.map_or(0, |set| set + 1);
        self.row = None;
        if next < self.sets.len() {
            self.set = Some(next);
            Ok(true)
        } else {
            self.set = Some(self.sets.len());
            Ok(false)
        }
    }

    fn column_count(&self) -> usize {
        self.current().map_or(0, |set| set.columns().len())
    }

    fn column_name(&self, ordinal: usize) -> Result<&str> {
        self.current()
            .ok_or(MappingError::Cursor("cursor is not positioned on a result set".into()))?
            .column_name(ordinal)
    }

    fn value(&self, ordinal: usize) -> Result<Value<'_>> {
        self.current()
            .ok_or(MappingError::Cursor("cursor is not positioned on a result set".into()))?
            .value(self.row, ordinal)
    }
}
