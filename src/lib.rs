//! # rowgraph
//!
//! Materializes typed object graphs from one query execution that yields
//! several result sets in sequence.
//!
//! A [`Mapping`] says which result set holds which entity and which
//! foreign/primary key pairs link a parent result set to a child one. It is
//! configured once and then parses any number of cursors, each in a single
//! forward pass followed by an in-memory hash join per relationship.
//!
//! ## Quick Start
//!
//! ```rust
//! use rowgraph::prelude::*;
//!
//! #[derive(Entity, Debug, Default, Clone)]
//! #[entity(rename_all = "PascalCase")]
//! pub struct User {
//!     pub user_id: i32,
//!     pub name: String,
//!     #[entity(relation)]
//!     pub posts: Vec<Post>,
//! }
//!
//! #[derive(Entity, Debug, Default, Clone)]
//! #[entity(rename_all = "PascalCase")]
//! pub struct Post {
//!     pub post_id: i32,
//!     pub user_id: i32,
//!     pub title: String,
//! }
//!
//! # fn main() -> rowgraph::Result<()> {
//! let mapping = Mapping::<User>::configure(|user| {
//!     user.include_list(User::POSTS, |u| u.user_id, |p: &Post| p.user_id, 1)?;
//!     Ok(())
//! })?;
//!
//! let mut cursor = MemoryCursor::new(vec![
//!     ResultSet::new(["UserId", "Name"]).row([Value::from(1), Value::from("A")]),
//!     ResultSet::new(["PostId", "UserId", "Title"])
//!         .row([Value::from(10), Value::from(1), Value::from("Hello")]),
//! ]);
//!
//! let users = mapping.parse(&mut cursor)?;
//! assert_eq!(users[0].posts[0].title, "Hello");
//! # Ok(())
//! # }
//! ```
//!
//! ## Cursors
//!
//! | Cursor         | Source                          | Feature Flag |
//! |----------------|---------------------------------|--------------|
//! | `MemoryCursor` | owned `ResultSet`s              | (always)     |
//! | `BatchCursor`  | multi-statement SQL, rusqlite   | `rusqlite`   |

#![cfg_attr(docsrs, feature(doc_cfg))]

/// Engine crate, for paths not re-exported at the root.
pub use rowgraph_core as core;

pub use rowgraph_core::{
    Assign, Cardinality, ColumnField, ColumnLayout, Cursor, Entity, FieldKind, FieldRef,
    FromValue, Many, Mapping, MappingError, MemoryCursor, NodeBuilder, One, Result, ResultSet,
    Value, configure, parse,
};

#[cfg(feature = "rusqlite")]
#[cfg_attr(docsrs, doc(cfg(feature = "rusqlite")))]
pub use rowgraph_core::BatchCursor;

/// Derive macro for [`Entity`].
pub use rowgraph_macros::Entity;

/// Error types
pub mod error {
    pub use rowgraph_core::error::{MappingError, Result};
}

/// Everything needed to declare entities and run a mapping.
pub mod prelude {
    pub use crate::{Cursor, Entity, Mapping, MemoryCursor, NodeBuilder, ResultSet, Value};

    #[cfg(feature = "rusqlite")]
    pub use crate::BatchCursor;
}
