//! Relationship resolution.
//!
//! Every relationship joins the parent rows of one result set with the child
//! rows of another. The child side is indexed once by key, then each parent
//! probes the index with its own key.

use core::hash::Hash;
use core::marker::PhantomData;

use hashbrown::HashMap;
use smallvec::SmallVec;

use crate::entity::{Entity, FieldRef};
use crate::error::Result;

use super::rowset::RowSets;

/// Shapes the group of children matching one parent into the field type.
pub trait Cardinality<U>: Send + Sync + 'static {
    /// Type of the relationship field on the parent.
    type Field;

    fn adapt<'a, I>(group: I) -> Self::Field
    where
        I: Iterator<Item = &'a U>,
        U: 'a;
}

/// At most one child, stored as `Option<U>`.
///
/// When several children match, the first one read is used. That choice is
/// not part of the contract.
pub struct One;

/// Any number of children, stored as `Vec<U>` in read order.
pub struct Many;

impl<U: Clone> Cardinality<U> for One {
    type Field = Option<U>;

    fn adapt<'a, I>(mut group: I) -> Option<U>
    where
        I: Iterator<Item = &'a U>,
        U: 'a,
    {
        group.next().cloned()
    }
}

impl<U: Clone> Cardinality<U> for Many {
    type Field = Vec<U>;

    fn adapt<'a, I>(group: I) -> Vec<U>
    where
        I: Iterator<Item = &'a U>,
        U: 'a,
    {
        group.cloned().collect()
    }
}

/// A relationship of parent type `T`, erased over child, key and cardinality.
pub(crate) trait Resolve<T>: Send + Sync {
    fn field(&self) -> &'static str;

    fn resolve(&self, parents: &mut [T], sets: &RowSets) -> Result<()>;
}

pub(crate) type KeyFn<E, K> = Box<dyn Fn(&E) -> K + Send + Sync>;

pub(crate) struct IncludeResolver<T, U, K, C: Cardinality<U>> {
    field: FieldRef<T, C::Field>,
    foreign: KeyFn<T, K>,
    primary: KeyFn<U, K>,
    target: usize,
    _marker: PhantomData<fn() -> (U, C)>,
}

impl<T, U, K, C: Cardinality<U>> IncludeResolver<T, U, K, C> {
    pub(crate) fn new(
        field: FieldRef<T, C::Field>,
        foreign: KeyFn<T, K>,
        primary: KeyFn<U, K>,
        target: usize,
    ) -> Self {
        Self {
            field,
            foreign,
            primary,
            target,
            _marker: PhantomData,
        }
    }
}

impl<T, U, K, C> Resolve<T> for IncludeResolver<T, U, K, C>
where
    T: Entity,
    U: Entity,
    K: Eq + Hash + 'static,
    C: Cardinality<U>,
{
    fn field(&self) -> &'static str {
        self.field.name()
    }

    #[cfg_attr(not(feature = "tracing"), allow(unused_variables, unused_assignments))]
    fn resolve(&self, parents: &mut [T], sets: &RowSets) -> Result<()> {
        let children = sets.get::<U>(self.target)?;

        let mut index: HashMap<K, SmallVec<[usize; 4]>> = HashMap::with_capacity(children.len());
        for (position, child) in children.iter().enumerate() {
            index.entry((self.primary)(child)).or_default().push(position);
        }

        let mut matched = 0usize;
        for parent in parents.iter_mut() {
            let Some(group) = index.get(&(self.foreign)(parent)) else {
                continue;
            };
            *self.field.get_mut(parent) = C::adapt(group.iter().map(|&position| &children[position]));
            matched += 1;
        }

        rowgraph_trace_resolve!(T::NAME, self.field.name(), self.target, matched);
        Ok(())
    }
}
