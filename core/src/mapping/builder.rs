//! Declarative mapping configuration.

use std::borrow::Cow;
use core::hash::Hash;

use crate::entity::{Entity, FieldKind, FieldRef};
use crate::error::{MappingError, Result};

use super::reader::{EntityTemplate, ReaderTemplate};
use super::relation::{Cardinality, IncludeResolver, KeyFn, Many, One, Resolve};
use super::spec::FieldSpec;

/// Configures how one entity is read and which relationships it includes.
///
/// The root node reads result set 0; every include adds a child node
/// reading the result set it names.
///
/// ```ignore
/// let mapping = Mapping::<User>::configure(|user| {
///     user.ignore_missing_columns();
///     user.include_list_with(User::POSTS, |u| u.user_id, |p: &Post| p.user_id, 1, |post| {
///         post.include_list(Post::COMMENTS, |p| p.post_id, |c: &Comment| c.post_id, 2)?;
///         Ok(())
///     })?
///     .include_single_with(User::AVATAR, |u| u.user_id, |a: &Avatar| a.user_id, 3, |avatar| {
///         avatar.rename(Avatar::URI, "Url")?;
///         Ok(())
///     })?;
///     Ok(())
/// })?;
/// ```
pub struct NodeBuilder<T: Entity> {
    result_set: usize,
    ignore_missing: bool,
    ignored: Vec<&'static str>,
    renamed: Vec<(&'static str, Cow<'static, str>)>,
    optional: Vec<&'static str>,
    includes: Vec<Include<T>>,
}

struct Include<T> {
    resolver: Box<dyn Resolve<T>>,
    child: Box<dyn CompileNode>,
}

impl<T: Entity> NodeBuilder<T> {
    pub(crate) fn new(result_set: usize) -> Self {
        Self {
            result_set,
            ignore_missing: false,
            ignored: Vec::new(),
            renamed: Vec::new(),
            optional: Vec::new(),
            includes: Vec::new(),
        }
    }

    /// Result set this node reads.
    pub fn result_set(&self) -> usize {
        self.result_set
    }

    /// Fills `field` with every row of `result_set` whose `primary` key equals
    /// the parent's `foreign` key.
    pub fn include_list<U, K, F, P>(
        &mut self,
        field: FieldRef<T, Vec<U>>,
        foreign: F,
        primary: P,
        result_set: usize,
    ) -> Result<&mut Self>
    where
        U: Entity,
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        P: Fn(&U) -> K + Send + Sync + 'static,
    {
        self.include::<U, K, Many, _>(field, Box::new(foreign), Box::new(primary), result_set, |_| {
            Ok(())
        })
    }

    /// Like [`include_list`](Self::include_list), configuring the child node.
    pub fn include_list_with<U, K, F, P, G>(
        &mut self,
        field: FieldRef<T, Vec<U>>,
        foreign: F,
        primary: P,
        result_set: usize,
        configure: G,
    ) -> Result<&mut Self>
    where
        U: Entity,
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        P: Fn(&U) -> K + Send + Sync + 'static,
        G: FnOnce(&mut NodeBuilder<U>) -> Result<()>,
    {
        self.include::<U, K, Many, G>(
            field,
            Box::new(foreign),
            Box::new(primary),
            result_set,
            configure,
        )
    }

    /// Fills `field` with one row of `result_set` whose `primary` key equals
    /// the parent's `foreign` key, or leaves it `None`.
    pub fn include_single<U, K, F, P>(
        &mut self,
        field: FieldRef<T, Option<U>>,
        foreign: F,
        primary: P,
        result_set: usize,
    ) -> Result<&mut Self>
    where
        U: Entity,
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        P: Fn(&U) -> K + Send + Sync + 'static,
    {
        self.include::<U, K, One, _>(field, Box::new(foreign), Box::new(primary), result_set, |_| {
            Ok(())
        })
    }

    /// Like [`include_single`](Self::include_single), configuring the child node.
    pub fn include_single_with<U, K, F, P, G>(
        &mut self,
        field: FieldRef<T, Option<U>>,
        foreign: F,
        primary: P,
        result_set: usize,
        configure: G,
    ) -> Result<&mut Self>
    where
        U: Entity,
        K: Eq + Hash + 'static,
        F: Fn(&T) -> K + Send + Sync + 'static,
        P: Fn(&U) -> K + Send + Sync + 'static,
        G: FnOnce(&mut NodeBuilder<U>) -> Result<()>,
    {
        self.include::<U, K, One, G>(
            field,
            Box::new(foreign),
            Box::new(primary),
            result_set,
            configure,
        )
    }

    /// Never fill `field`, even when a column of its name exists.
    pub fn ignore<V>(&mut self, field: FieldRef<T, V>) -> Result<&mut Self> {
        match self.kind_of(field.name())? {
            FieldKind::Column | FieldKind::Ignored => {}
            actual => return Err(kind_mismatch::<T>(field.name(), FieldKind::Column, actual)),
        }
        if !self.ignored.contains(&field.name()) {
            self.ignored.push(field.name());
        }
        Ok(self)
    }

    /// Read `field` from `column` instead of its default column.
    pub fn rename<V>(
        &mut self,
        field: FieldRef<T, V>,
        column: impl Into<Cow<'static, str>>,
    ) -> Result<&mut Self> {
        self.expect_kind(field.name(), FieldKind::Column)?;
        self.renamed.retain(|(name, _)| *name != field.name());
        self.renamed.push((field.name(), column.into()));
        Ok(self)
    }

    /// Leave `field` at its default when its column is absent.
    pub fn optional<V>(&mut self, field: FieldRef<T, V>) -> Result<&mut Self> {
        self.expect_kind(field.name(), FieldKind::Column)?;
        if !self.optional.contains(&field.name()) {
            self.optional.push(field.name());
        }
        Ok(self)
    }

    /// Make every column field of this node and its descendants optional.
    pub fn ignore_missing_columns(&mut self) -> &mut Self {
        self.ignore_missing = true;
        self
    }

    fn include<U, K, C, G>(
        &mut self,
        field: FieldRef<T, C::Field>,
        foreign: KeyFn<T, K>,
        primary: KeyFn<U, K>,
        result_set: usize,
        configure: G,
    ) -> Result<&mut Self>
    where
        U: Entity,
        K: Eq + Hash + 'static,
        C: Cardinality<U>,
        G: FnOnce(&mut NodeBuilder<U>) -> Result<()>,
    {
        self.expect_kind(field.name(), FieldKind::Relation)?;
        if self
            .includes
            .iter()
            .any(|include| include.resolver.field() == field.name())
        {
            return Err(MappingError::DuplicateRelation {
                entity: T::NAME,
                field: field.name(),
            });
        }

        let mut child = NodeBuilder::<U>::new(result_set);
        configure(&mut child)?;

        self.includes.push(Include {
            resolver: Box::new(IncludeResolver::<T, U, K, C>::new(
                field, foreign, primary, result_set,
            )),
            child: Box::new(child),
        });
        Ok(self)
    }

    fn kind_of(&self, field: &'static str) -> Result<FieldKind> {
        T::field_kind(field).ok_or(MappingError::UnknownField {
            entity: T::NAME,
            field,
        })
    }

    fn expect_kind(&self, field: &'static str, expected: FieldKind) -> Result<()> {
        match self.kind_of(field)? {
            actual if actual == expected => Ok(()),
            actual => Err(kind_mismatch::<T>(field, expected, actual)),
        }
    }

    /// Field specs of this node with every override applied.
    fn field_specs(&self, tolerate: bool) -> Vec<FieldSpec<T>> {
        T::columns()
            .into_iter()
            .filter(|column| !self.ignored.contains(&column.name))
            .map(|column| {
                let mut spec = FieldSpec::from_column(column);
                if let Some((_, renamed)) = self.renamed.iter().find(|(name, _)| *name == spec.field) {
                    spec.column = renamed.clone();
                }
                spec.optional |= tolerate || self.optional.contains(&spec.field);
                spec
            })
            .collect()
    }
}

fn kind_mismatch<T: Entity>(
    field: &'static str,
    expected: FieldKind,
    actual: FieldKind,
) -> MappingError {
    MappingError::FieldKind {
        entity: T::NAME,
        field,
        expected: expected.as_str(),
        actual: actual.as_str(),
    }
}

/// Reader templates of a configured tree, indexed by result set.
#[derive(Default)]
pub(crate) struct Compiled {
    pub(crate) readers: Vec<Option<Box<dyn ReaderTemplate>>>,
    /// Result sets in registration (pre-)order
    pub(crate) order: Vec<usize>,
}

impl Compiled {
    fn register(&mut self, template: Box<dyn ReaderTemplate>) -> Result<()> {
        let index = template.result_set();
        if index >= self.readers.len() {
            self.readers.resize_with(index + 1, || None);
        }
        if let Some(existing) = &self.readers[index] {
            return Err(MappingError::DuplicateResultSet {
                index,
                first: existing.entity(),
                second: template.entity(),
            });
        }
        self.readers[index] = Some(template);
        self.order.push(index);
        Ok(())
    }
}

/// A configured node whose entity type has been erased.
pub(crate) trait CompileNode {
    fn compile(self: Box<Self>, tolerate: bool, out: &mut Compiled) -> Result<()>;
}

impl<T: Entity> CompileNode for NodeBuilder<T> {
    fn compile(self: Box<Self>, tolerate: bool, out: &mut Compiled) -> Result<()> {
        let tolerate = tolerate || self.ignore_missing;
        let fields = self.field_specs(tolerate);

        let node = *self;
        let (resolvers, children): (Vec<_>, Vec<_>) = node
            .includes
            .into_iter()
            .map(|include| (include.resolver, include.child))
            .unzip();

        out.register(Box::new(EntityTemplate::new(
            node.result_set,
            fields,
            resolvers,
        )))?;

        children
            .into_iter()
            .try_for_each(|child| child.compile(tolerate, out))
    }
}
