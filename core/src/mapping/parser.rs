use core::fmt;
use core::marker::PhantomData;

use crate::cursor::Cursor;
use crate::entity::Entity;
use crate::error::{MappingError, Result};

use super::builder::{CompileNode, Compiled, NodeBuilder};
use super::reader::ReaderTemplate;
use super::rowset::RowSets;

/// A compiled, reusable mapping from a multi-result-set cursor to `Vec<T>`.
///
/// Built once with [`Mapping::configure`]; immutable afterwards. Every call
/// to [`Mapping::parse`] owns its own bound readers and row sets, so a
/// mapping may be shared across threads and parses.
pub struct Mapping<T> {
    readers: Vec<Option<Box<dyn ReaderTemplate>>>,
    /// Result sets whose relationships resolve children before parents
    resolve_order: Vec<usize>,
    _root: PhantomData<fn() -> T>,
}

impl<T: Entity> Mapping<T> {
    /// Builds a mapping whose root entity `T` is read from result set 0.
    pub fn configure<F>(configure: F) -> Result<Self>
    where
        F: FnOnce(&mut NodeBuilder<T>) -> Result<()>,
    {
        let mut root = NodeBuilder::<T>::new(0);
        configure(&mut root)?;

        let mut compiled = Compiled::default();
        Box::new(root).compile(false, &mut compiled)?;

        let Compiled { readers, mut order } = compiled;
        order.reverse();
        Ok(Self {
            readers,
            resolve_order: order,
            _root: PhantomData,
        })
    }

    /// Number of result sets the cursor must yield at least.
    pub fn result_sets(&self) -> usize {
        self.readers.len()
    }

    /// Reads every result set of `cursor`, resolves relationships and returns
    /// the root rows.
    pub fn parse<C: Cursor>(&self, cursor: &mut C) -> Result<Vec<T>> {
        rowgraph_profile_function!();
        rowgraph_trace_parse!("start", T::NAME, self.readers.len());

        let mut sets = RowSets::with_len(self.readers.len());
        self.read_all(cursor, &mut sets)?;
        self.resolve_all(&mut sets)?;
        let rows = sets.into_rows::<T>(0)?;

        rowgraph_trace_parse!("finish", T::NAME, rows.len());
        Ok(rows)
    }

    fn read_all(&self, cursor: &mut dyn Cursor, sets: &mut RowSets) -> Result<()> {
        rowgraph_profile_scope!("rowgraph", "read");

        let mut index = 0;
        while cursor.advance_result_set()? {
            match self.readers.get(index).and_then(Option::as_ref) {
                Some(reader) => reader.read(cursor, sets)?,
                None => {
                    rowgraph_trace_result_set!("skipped", index);
                }
            }
            index += 1;
        }

        if index < self.readers.len() {
            return Err(MappingError::CursorExhausted {
                expected: self.readers.len(),
                found: index,
            });
        }
        Ok(())
    }

    fn resolve_all(&self, sets: &mut RowSets) -> Result<()> {
        rowgraph_profile_scope!("rowgraph", "resolve");

        self.resolve_order
            .iter()
            .filter_map(|&index| self.readers.get(index).and_then(Option::as_ref))
            .try_for_each(|reader| reader.resolve(sets))
    }
}

impl<T> fmt::Debug for Mapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mapping")
            .field(
                "result_sets",
                &self
                    .readers
                    .iter()
                    .map(|reader| reader.as_ref().map(|reader| reader.entity()))
                    .collect::<Vec<_>>(),
            )
            .finish()
    }
}

/// Shorthand for [`Mapping::configure`].
pub fn configure<T, F>(configure: F) -> Result<Mapping<T>>
where
    T: Entity,
    F: FnOnce(&mut NodeBuilder<T>) -> Result<()>,
{
    Mapping::configure(configure)
}

/// Shorthand for [`Mapping::parse`].
pub fn parse<T: Entity, C: Cursor>(mapping: &Mapping<T>, cursor: &mut C) -> Result<Vec<T>> {
    mapping.parse(cursor)
}
