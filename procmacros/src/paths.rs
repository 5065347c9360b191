//! Centralized path definitions for generated code.
//!
//! Generated code names everything through the `rowgraph::` facade (without a
//! leading `::`), so tests inside the workspace can provide a `mod rowgraph`
//! shim that re-exports the current crate.

use proc_macro2::TokenStream;
use quote::quote;

pub mod std {
    use super::*;

    pub fn result() -> TokenStream {
        quote!(::std::result::Result)
    }
}

/// Engine types from `rowgraph::core`
pub mod core {
    use super::*;

    pub fn entity() -> TokenStream {
        quote!(rowgraph::Entity)
    }

    pub fn column_field() -> TokenStream {
        quote!(rowgraph::ColumnField)
    }

    pub fn field_ref() -> TokenStream {
        quote!(rowgraph::FieldRef)
    }
}
