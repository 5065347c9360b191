//! Entity shape descriptors.
//!
//! An [`Entity`] enumerates its column fields once, statically, as a list of
//! [`ColumnField`] descriptors. Each descriptor carries a plain setter
//! function, so rows are materialized without any per-row name lookup.
//! `#[derive(Entity)]` generates the impl together with one [`FieldRef`]
//! constant per field, which the mapping builder uses to name fields.

use core::fmt;

use crate::error::Result;
use crate::value::Value;

/// Assigns a converted cell value to one field of `E`.
pub type Assign<E> = fn(&mut E, Value<'_>) -> Result<()>;

/// Static descriptor of a field that is filled from a column.
pub struct ColumnField<E> {
    /// Rust field name
    pub name: &'static str,
    /// Default column name (the field name unless renamed by attribute)
    pub column: &'static str,
    /// Field type as written in the struct, for diagnostics
    pub type_name: &'static str,
    /// Whether the field tolerates a missing column by default
    pub optional: bool,
    /// Setter converting and storing the cell value
    pub assign: Assign<E>,
}

impl<E> ColumnField<E> {
    pub const fn new(
        name: &'static str,
        column: &'static str,
        type_name: &'static str,
        optional: bool,
        assign: Assign<E>,
    ) -> Self {
        Self {
            name,
            column,
            type_name,
            optional,
            assign,
        }
    }
}

impl<E> Clone for ColumnField<E> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E> Copy for ColumnField<E> {}

impl<E> fmt::Debug for ColumnField<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ColumnField")
            .field("name", &self.name)
            .field("column", &self.column)
            .field("type_name", &self.type_name)
            .field("optional", &self.optional)
            .finish()
    }
}

/// How an entity field participates in mapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Filled from a column of the entity's own result set
    Column,
    /// Filled from another result set by a relationship
    Relation,
    /// Never filled
    Ignored,
}

impl FieldKind {
    pub const fn as_str(self) -> &'static str {
        match self {
            FieldKind::Column => "column",
            FieldKind::Relation => "relation",
            FieldKind::Ignored => "ignored",
        }
    }
}

/// A typed reference to field `name` of `E`, whose type is `T`.
///
/// Generated by `#[derive(Entity)]` as an associated constant named after the
/// field in upper case (`User::POSTS`, `Avatar::URI`).
pub struct FieldRef<E, T> {
    name: &'static str,
    access: fn(&mut E) -> &mut T,
}

impl<E, T> FieldRef<E, T> {
    pub const fn new(name: &'static str, access: fn(&mut E) -> &mut T) -> Self {
        Self { name, access }
    }

    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Mutable access to the referenced field of `entity`.
    pub fn get_mut<'e>(&self, entity: &'e mut E) -> &'e mut T {
        (self.access)(entity)
    }
}

impl<E, T> Clone for FieldRef<E, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<E, T> Copy for FieldRef<E, T> {}

impl<E, T> fmt::Debug for FieldRef<E, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("FieldRef").field(&self.name).finish()
    }
}

/// A record type that can be materialized from result set rows.
///
/// Usually derived:
///
/// ```ignore
/// #[derive(Entity, Debug, Default, Clone)]
/// #[entity(rename_all = "PascalCase")]
/// struct User {
///     user_id: i32,
///     name: String,
///     #[entity(relation)]
///     posts: Vec<Post>,
/// }
/// ```
pub trait Entity: Default + Clone + Send + 'static {
    /// Entity name used in diagnostics.
    const NAME: &'static str;

    /// Names of fields filled by relationships.
    const RELATIONS: &'static [&'static str] = &[];

    /// Names of fields never filled.
    const IGNORED: &'static [&'static str] = &[];

    /// Column field descriptors in declaration order.
    fn columns() -> Vec<ColumnField<Self>>;

    /// Classifies the field called `name`, or `None` if there is no such field.
    fn field_kind(name: &str) -> Option<FieldKind> {
        if Self::RELATIONS.contains(&name) {
            Some(FieldKind::Relation)
        } else if Self::IGNORED.contains(&name) {
            Some(FieldKind::Ignored)
        } else if Self::columns().iter().any(|column| column.name == name) {
            Some(FieldKind::Column)
        } else {
            None
        }
    }
}
