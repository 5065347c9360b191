use crate::cursor::Cursor;
use crate::entity::Entity;
use crate::error::{MappingError, Result};

use super::bind::{BoundSetter, ColumnLayout, bind};
use super::relation::Resolve;
use super::rowset::RowSets;
use super::spec::FieldSpec;

/// Type-erased reader template for one result set.
pub(crate) trait ReaderTemplate: Send + Sync {
    fn entity(&self) -> &'static str;

    fn result_set(&self) -> usize;

    /// Reads every row of the cursor's current result set into `sets`.
    fn read(&self, cursor: &mut dyn Cursor, sets: &mut RowSets) -> Result<()>;

    /// Runs this entity's relationships over its materialized rows.
    fn resolve(&self, sets: &mut RowSets) -> Result<()>;
}

/// Field specs and relationships of one entity, independent of any layout.
pub(crate) struct EntityTemplate<T> {
    result_set: usize,
    fields: Vec<FieldSpec<T>>,
    resolvers: Vec<Box<dyn Resolve<T>>>,
}

impl<T: Entity> EntityTemplate<T> {
    pub(crate) fn new(
        result_set: usize,
        fields: Vec<FieldSpec<T>>,
        resolvers: Vec<Box<dyn Resolve<T>>>,
    ) -> Self {
        Self {
            result_set,
            fields,
            resolvers,
        }
    }

    /// Binds the template to a concrete column layout.
    pub(crate) fn specialize(&self, layout: &ColumnLayout) -> Result<EntityReader<'_, T>> {
        Ok(EntityReader {
            result_set: self.result_set,
            setters: bind(&self.fields, layout, self.result_set, T::NAME)?,
        })
    }
}

impl<T: Entity> ReaderTemplate for EntityTemplate<T> {
    fn entity(&self) -> &'static str {
        T::NAME
    }

    fn result_set(&self) -> usize {
        self.result_set
    }

    fn read(&self, cursor: &mut dyn Cursor, sets: &mut RowSets) -> Result<()> {
        rowgraph_profile_scope!("rowgraph", "read_result_set");

        let layout = ColumnLayout::from_cursor(&*cursor)?;
        let reader = self.specialize(&layout)?;
        rowgraph_trace_result_set!("bound", self.result_set, T::NAME, layout.len());

        let mut rows = Vec::new();
        while cursor.advance_row()? {
            rows.push(reader.read_row(&*cursor, rows.len())?);
        }

        rowgraph_trace_result_set!("read", self.result_set, T::NAME, rows.len());
        sets.insert(self.result_set, rows);
        Ok(())
    }

    fn resolve(&self, sets: &mut RowSets) -> Result<()> {
        if self.resolvers.is_empty() {
            return Ok(());
        }

        let mut parents = sets.take::<T>(self.result_set)?;
        let outcome = self
            .resolvers
            .iter()
            .try_for_each(|resolver| resolver.resolve(&mut parents, sets));
        sets.insert(self.result_set, parents);
        outcome
    }
}

/// A template bound to the layout of one executed result set.
pub(crate) struct EntityReader<'t, T> {
    result_set: usize,
    setters: Vec<BoundSetter<'t, T>>,
}

impl<T: Entity> EntityReader<'_, T> {
    /// Materializes the cursor's current row.
    pub(crate) fn read_row(&self, cursor: &dyn Cursor, row: usize) -> Result<T> {
        let mut entity = T::default();
        for setter in &self.setters {
            let value = cursor.value(setter.ordinal)?;
            let found = value.storage_class();
            setter
                .apply(&mut entity, value)
                .map_err(|source| MappingError::Read {
                    result_set: self.result_set,
                    row,
                    column: setter.spec.column.to_string(),
                    found,
                    source: Box::new(source),
                })?;
        }
        Ok(entity)
    }
}
