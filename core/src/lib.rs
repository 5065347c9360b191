#[macro_use]
mod tracing;

#[macro_use]
pub mod profiling;

pub mod cursor;
pub mod entity;
pub mod error;
pub mod mapping;
pub mod value;

// Re-export key types and traits
pub use cursor::{Cursor, MemoryCursor, ResultSet};
#[cfg(feature = "rusqlite")]
pub use cursor::BatchCursor;
pub use entity::{Assign, ColumnField, Entity, FieldKind, FieldRef};
pub use error::{MappingError, Result};
pub use mapping::{Cardinality, ColumnLayout, Many, Mapping, NodeBuilder, One, configure, parse};
pub use value::{FromValue, Value};
