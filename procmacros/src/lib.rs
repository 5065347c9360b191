extern crate proc_macro;

mod entity;
mod paths;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Derive macro implementing `rowgraph::Entity` for a struct with named fields.
///
/// Every field is a column field unless marked otherwise. Column fields are
/// read from the column of the same name (matched case-insensitively) and
/// converted with `FromValue`.
///
/// The derive also emits one associated `FieldRef` constant per field, named
/// after the field in `SCREAMING_SNAKE_CASE`, for use with the mapping
/// builder. Fields whose constant would collide with an `Entity` associated
/// constant (`NAME`, `RELATIONS`, `IGNORED`) get a `_FIELD` suffix instead,
/// so a field `name` yields `NAME_FIELD` and `User::NAME` stays the entity
/// name.
///
/// # Attributes
///
/// Struct level:
/// - `#[entity(rename_all = "PascalCase")]`: derive column names from field
///   names (`lowercase`, `UPPERCASE`, `PascalCase`, `camelCase`,
///   `snake_case`, `SCREAMING_SNAKE_CASE`, `kebab-case`)
/// - `#[entity(name = "...")]`: entity name used in errors
///
/// Field level:
/// - `#[entity(column = "Url")]`: read from an explicit column
/// - `#[entity(optional)]`: a missing column leaves the field at its default
/// - `#[entity(relation)]`: filled by an include, never from a column
/// - `#[entity(ignore)]`: never filled
///
/// # Example
///
/// ```ignore
/// #[derive(Entity, Debug, Default, Clone)]
/// #[entity(rename_all = "PascalCase")]
/// pub struct Avatar {
///     pub user_id: i32,
///     #[entity(column = "Url")]
///     pub uri: String,
///     pub width: i32,
///     pub height: i32,
/// }
/// ```
#[proc_macro_derive(Entity, attributes(entity))]
pub fn derive_entity(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    match entity::generate_entity_impl(input) {
        Ok(tokens) => tokens.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
