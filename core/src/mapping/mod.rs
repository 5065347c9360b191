//! Mapping engine.
//!
//! The pipeline: [`NodeBuilder`] collects, per entity, field overrides and
//! relationship declarations. [`Mapping::configure`] compiles that tree into
//! one reader template per result set. [`Mapping::parse`] then runs two
//! phases against a [`Cursor`](crate::Cursor):
//!
//! ```text
//! Reading:   for each result set → bind template to column layout → read rows
//! Resolving: for each relationship → hash children by key → probe per parent
//! ```
//!
//! Templates never hold rows; every parse owns its bound readers and
//! materialized row sets, so one `Mapping` serves concurrent parses.

mod bind;
mod builder;
mod parser;
mod reader;
mod relation;
mod rowset;
mod spec;

#[cfg(test)]
pub(crate) mod fixtures;

pub use bind::ColumnLayout;
pub use builder::NodeBuilder;
pub use parser::{Mapping, configure, parse};
pub use relation::{Cardinality, Many, One};
