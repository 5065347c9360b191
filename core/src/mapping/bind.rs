//! Binding field specs to the column layout of one executed result set.

use compact_str::CompactString;
use hashbrown::HashMap;

use crate::cursor::Cursor;
use crate::error::{MappingError, Result};
use crate::value::Value;

use super::spec::FieldSpec;

/// Column names of one result set and their ordinals.
///
/// Lookups ignore ASCII case. When a name repeats, the first ordinal wins.
#[derive(Debug, Clone, Default)]
pub struct ColumnLayout {
    len: usize,
    ordinals: HashMap<String, usize>,
}

impl ColumnLayout {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<CompactString>,
    {
        let mut ordinals = HashMap::new();
        let mut len = 0;
        for (ordinal, name) in names.into_iter().enumerate() {
            let name: CompactString = name.into();
            ordinals.entry(name.as_str().to_ascii_lowercase()).or_insert(ordinal);
            len = ordinal + 1;
        }
        Self { len, ordinals }
    }

    /// Reads the layout of the cursor's current result set.
    pub fn from_cursor<C: Cursor + ?Sized>(cursor: &C) -> Result<Self> {
        let names = (0..cursor.column_count())
            .map(|ordinal| cursor.column_name(ordinal).map(CompactString::from))
            .collect::<Result<Vec<_>>>()?;
        Ok(Self::new(names))
    }

    pub fn ordinal(&self, column: &str) -> Option<usize> {
        self.ordinals.get(column.to_ascii_lowercase().as_str()).copied()
    }

    /// Number of columns, counting repeated names.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// A field spec bound to a column ordinal.
pub(crate) struct BoundSetter<'t, T> {
    pub(crate) ordinal: usize,
    pub(crate) spec: &'t FieldSpec<T>,
}

impl<T> BoundSetter<'_, T> {
    pub(crate) fn apply(&self, entity: &mut T, value: Value<'_>) -> Result<()> {
        (self.spec.assign)(entity, value)
    }
}

/// Binds every spec to its column in `layout`.
///
/// Optional specs whose column is absent produce no setter; required ones
/// fail with [`MappingError::MissingColumn`].
pub(crate) fn bind<'t, T>(
    specs: &'t [FieldSpec<T>],
    layout: &ColumnLayout,
    result_set: usize,
    entity: &'static str,
) -> Result<Vec<BoundSetter<'t, T>>> {
    let mut setters = Vec::with_capacity(specs.len());
    for spec in specs {
        match layout.ordinal(&spec.column) {
            Some(ordinal) => setters.push(BoundSetter { ordinal, spec }),
            None if spec.optional => {}
            None => {
                return Err(MappingError::MissingColumn {
                    result_set,
                    entity,
                    field: spec.field,
                    column: spec.column.to_string(),
                });
            }
        }
    }
    Ok(setters)
}
