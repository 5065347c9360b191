//! Untyped cell values
//!
//! This module contains the [`Value`] type produced by cursors and the
//! [`FromValue`] conversions into typed entity fields.

mod convert;

pub use convert::FromValue;

use std::borrow::Cow;

use crate::error::Result;

//------------------------------------------------------------------------------
// Value Definition
//------------------------------------------------------------------------------

/// A single cell of a result set.
///
/// SQL NULL is represented by [`Value::Null`], a distinguished marker rather
/// than a physically absent cell.
#[derive(Debug, Clone, PartialEq, PartialOrd, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value<'a> {
    /// Integer value (i64)
    Integer(i64),
    /// Real value (f64)
    Real(f64),
    /// Text value (borrowed or owned string)
    Text(Cow<'a, str>),
    /// Blob value (borrowed or owned binary data)
    Blob(Cow<'a, [u8]>),
    /// NULL value
    #[default]
    Null,
}

impl<'a> Value<'a> {
    /// Returns true if this value is NULL.
    #[inline]
    pub const fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the integer value if this is an INTEGER.
    #[inline]
    pub const fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the real value if this is a REAL.
    #[inline]
    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Real(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the text value if this is TEXT.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Returns the blob value if this is BLOB.
    #[inline]
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Blob(value) => Some(value.as_ref()),
            _ => None,
        }
    }

    /// Name of the storage class, reported by read errors.
    pub const fn storage_class(&self) -> &'static str {
        match self {
            Value::Integer(_) => "INTEGER",
            Value::Real(_) => "REAL",
            Value::Text(_) => "TEXT",
            Value::Blob(_) => "BLOB",
            Value::Null => "NULL",
        }
    }

    /// Borrows this value without copying text or blob data.
    pub fn reborrow(&self) -> Value<'_> {
        match self {
            Value::Integer(i) => Value::Integer(*i),
            Value::Real(r) => Value::Real(*r),
            Value::Text(s) => Value::Text(Cow::Borrowed(s.as_ref())),
            Value::Blob(b) => Value::Blob(Cow::Borrowed(b.as_ref())),
            Value::Null => Value::Null,
        }
    }

    /// Converts this value into an owned representation.
    pub fn into_owned(self) -> Value<'static> {
        match self {
            Value::Integer(i) => Value::Integer(i),
            Value::Real(r) => Value::Real(r),
            Value::Text(s) => Value::Text(Cow::Owned(s.into_owned())),
            Value::Blob(b) => Value::Blob(Cow::Owned(b.into_owned())),
            Value::Null => Value::Null,
        }
    }

    /// Convert this value to a Rust type using the [`FromValue`] trait.
    ///
    /// # Example
    /// ```
    /// # use rowgraph_core::Value;
    /// let value = Value::Integer(42);
    /// let num: i32 = value.convert().unwrap();
    /// assert_eq!(num, 42);
    ///
    /// let missing: Option<i32> = Value::Null.convert().unwrap();
    /// assert_eq!(missing, None);
    /// ```
    pub fn convert<T: FromValue>(self) -> Result<T> {
        self.convert_ref()
    }

    /// Convert a reference to this value to a Rust type.
    pub fn convert_ref<T: FromValue>(&self) -> Result<T> {
        match self {
            Value::Integer(i) => T::from_integer(*i),
            Value::Text(s) => T::from_text(s),
            Value::Real(r) => T::from_real(*r),
            Value::Blob(b) => T::from_blob(b),
            Value::Null => T::from_null(),
        }
    }
}

impl<'a> core::fmt::Display for Value<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Value::Integer(i) => write!(f, "{i}"),
            Value::Real(r) => write!(f, "{r}"),
            Value::Text(s) => write!(f, "{s}"),
            Value::Blob(b) => write!(f, "{}", String::from_utf8_lossy(b)),
            Value::Null => f.write_str("NULL"),
        }
    }
}

//------------------------------------------------------------------------------
// Into Value
//------------------------------------------------------------------------------

macro_rules! impl_from_int_for_value {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl<'a> From<$ty> for Value<'a> {
                #[inline]
                fn from(value: $ty) -> Self {
                    Value::Integer(i64::from(value))
                }
            }
        )+
    };
}

impl_from_int_for_value!(i8, i16, i32, i64, u8, u16, u32);

impl<'a> From<bool> for Value<'a> {
    fn from(value: bool) -> Self {
        Value::Integer(i64::from(value))
    }
}

impl<'a> From<f32> for Value<'a> {
    fn from(value: f32) -> Self {
        Value::Real(f64::from(value))
    }
}

impl<'a> From<f64> for Value<'a> {
    fn from(value: f64) -> Self {
        Value::Real(value)
    }
}

impl<'a> From<&'a str> for Value<'a> {
    fn from(value: &'a str) -> Self {
        Value::Text(Cow::Borrowed(value))
    }
}

impl<'a> From<String> for Value<'a> {
    fn from(value: String) -> Self {
        Value::Text(Cow::Owned(value))
    }
}

impl<'a> From<&'a [u8]> for Value<'a> {
    fn from(value: &'a [u8]) -> Self {
        Value::Blob(Cow::Borrowed(value))
    }
}

impl<'a> From<Vec<u8>> for Value<'a> {
    fn from(value: Vec<u8>) -> Self {
        Value::Blob(Cow::Owned(value))
    }
}

impl<'a, T: Into<Value<'a>>> From<Option<T>> for Value<'a> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Null, Into::into)
    }
}

//------------------------------------------------------------------------------
// Driver values
//------------------------------------------------------------------------------

/// TEXT that is not valid UTF-8 is kept as its raw bytes in [`Value::Blob`],
/// so only a field that actually reads the column can reject it.
#[cfg(feature = "rusqlite")]
impl<'a> From<rusqlite::types::ValueRef<'a>> for Value<'a> {
    fn from(value: rusqlite::types::ValueRef<'a>) -> Self {
        use rusqlite::types::ValueRef;

        match value {
            ValueRef::Null => Value::Null,
            ValueRef::Integer(i) => Value::Integer(i),
            ValueRef::Real(r) => Value::Real(r),
            ValueRef::Text(text) => match core::str::from_utf8(text) {
                Ok(s) => Value::Text(Cow::Borrowed(s)),
                Err(_) => Value::Blob(Cow::Borrowed(text)),
            },
            ValueRef::Blob(blob) => Value::Blob(Cow::Borrowed(blob)),
        }
    }
}
