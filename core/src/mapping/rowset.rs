use std::any::Any;

use crate::entity::Entity;
use crate::error::{MappingError, Result};

/// Materialized rows of one parse, indexed by result set.
///
/// Each slot holds a `Vec<T>` for the entity type configured on that result
/// set. Slots of unmapped result sets stay empty.
pub(crate) struct RowSets {
    sets: Vec<Option<Box<dyn Any + Send>>>,
}

impl RowSets {
    pub(crate) fn with_len(len: usize) -> Self {
        let mut sets = Vec::with_capacity(len);
        sets.resize_with(len, || None);
        Self { sets }
    }

    pub(crate) fn insert<T: Entity>(&mut self, index: usize, rows: Vec<T>) {
        if index >= self.sets.len() {
            self.sets.resize_with(index + 1, || None);
        }
        self.sets[index] = Some(Box::new(rows));
    }

    pub(crate) fn get<T: Entity>(&self, index: usize) -> Result<&[T]> {
        self.sets
            .get(index)
            .and_then(Option::as_ref)
            .and_then(|rows| rows.downcast_ref::<Vec<T>>())
            .map(Vec::as_slice)
            .ok_or(MappingError::RowSetMismatch {
                index,
                entity: T::NAME,
            })
    }

    /// Removes the rows at `index` so they can be mutated alongside other sets.
    pub(crate) fn take<T: Entity>(&mut self, index: usize) -> Result<Vec<T>> {
        let mismatch = MappingError::RowSetMismatch {
            index,
            entity: T::NAME,
        };
        let slot = self.sets.get_mut(index).ok_or(mismatch)?;
        match slot.take().map(|rows| rows.downcast::<Vec<T>>()) {
            Some(Ok(rows)) => Ok(*rows),
            Some(Err(other)) => {
                *slot = Some(other);
                Err(MappingError::RowSetMismatch {
                    index,
                    entity: T::NAME,
                })
            }
            None => Err(MappingError::RowSetMismatch {
                index,
                entity: T::NAME,
            }),
        }
    }

    pub(crate) fn into_rows<T: Entity>(mut self, index: usize) -> Result<Vec<T>> {
        self.take(index)
    }
}
