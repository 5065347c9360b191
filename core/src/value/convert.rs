//! Value conversion trait
//!
//! [`FromValue`] converts an untyped [`Value`](super::Value) into a field
//! type. NULL converts to the type's zero value for plain types and to `None`
//! for `Option<T>`.

use std::rc::Rc;
use std::sync::Arc;

use crate::error::{MappingError, Result};

/// Trait for types that can be converted from cell values.
///
/// A cell has one of 5 storage classes: NULL, INTEGER, REAL, TEXT, BLOB.
/// This trait provides conversion methods for each of them.
///
/// # Implementation Notes
///
/// - Implement the methods that make sense for your type
/// - Return `Err` for unsupported conversions
/// - `from_null` defaults to an error; override it when the type has a
///   meaningful zero value
pub trait FromValue: Sized {
    /// Convert from a 64-bit integer value
    fn from_integer(value: i64) -> Result<Self>;

    /// Convert from a text/string value
    fn from_text(value: &str) -> Result<Self>;

    /// Convert from a real/float value
    fn from_real(value: f64) -> Result<Self>;

    /// Convert from a blob/binary value
    fn from_blob(value: &[u8]) -> Result<Self>;

    /// Convert from a NULL value (default returns error)
    fn from_null() -> Result<Self> {
        Err(MappingError::ConversionError("unexpected NULL value".into()))
    }
}

fn checked_real_to_int<T>(value: f64, type_name: &str) -> Result<T>
where
    T: TryFrom<i128>,
    <T as TryFrom<i128>>::Error: core::fmt::Display,
{
    if !value.is_finite() {
        return Err(MappingError::ConversionError(
            format!("cannot convert non-finite REAL {} to {}", value, type_name).into(),
        ));
    }

    if value % 1.0 != 0.0 {
        return Err(MappingError::ConversionError(
            format!("cannot convert non-integer REAL {} to {}", value, type_name).into(),
        ));
    }

    if value < i128::MIN as f64 || value > i128::MAX as f64 {
        return Err(MappingError::ConversionError(
            format!("REAL {} out of range for {}", value, type_name).into(),
        ));
    }

    let int_value = value as i128;
    int_value.try_into().map_err(|e| {
        MappingError::ConversionError(
            format!("REAL {} out of range for {}: {}", value, type_name, e).into(),
        )
    })
}

// =============================================================================
// Primitive implementations
// =============================================================================

/// Implements FromValue for integer types (narrowing conversion from i64)
macro_rules! impl_from_value_int {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_integer(value: i64) -> Result<Self> {
                    value.try_into().map_err(|e| {
                        MappingError::ConversionError(
                            format!("i64 {} out of range for {}: {}", value, stringify!($ty), e).into(),
                        )
                    })
                }

                fn from_text(value: &str) -> Result<Self> {
                    value.parse().map_err(|e| {
                        MappingError::ConversionError(
                            format!("cannot parse '{}' as {}: {}", value, stringify!($ty), e).into()
                        )
                    })
                }

                fn from_real(value: f64) -> Result<Self> {
                    checked_real_to_int(value, stringify!($ty))
                }

                fn from_blob(_value: &[u8]) -> Result<Self> {
                    Err(MappingError::ConversionError(
                        concat!("cannot convert BLOB to ", stringify!($ty)).into()
                    ))
                }

                fn from_null() -> Result<Self> {
                    Ok(0)
                }
            }
        )+
    };
}

/// Implements FromValue for float types
macro_rules! impl_from_value_float {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_integer(value: i64) -> Result<Self> {
                    Ok(value as $ty)
                }

                fn from_text(value: &str) -> Result<Self> {
                    value.parse().map_err(|e| {
                        MappingError::ConversionError(
                            format!("cannot parse '{}' as {}: {}", value, stringify!($ty), e).into()
                        )
                    })
                }

                fn from_real(value: f64) -> Result<Self> {
                    Ok(value as $ty)
                }

                fn from_blob(_value: &[u8]) -> Result<Self> {
                    Err(MappingError::ConversionError(
                        concat!("cannot convert BLOB to ", stringify!($ty)).into()
                    ))
                }

                fn from_null() -> Result<Self> {
                    Ok(0.0)
                }
            }
        )+
    };
}

impl_from_value_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);
impl_from_value_float!(f32, f64);

impl FromValue for bool {
    fn from_integer(value: i64) -> Result<Self> {
        Ok(value != 0)
    }

    fn from_text(value: &str) -> Result<Self> {
        match value.to_lowercase().as_str() {
            "true" | "1" | "yes" | "on" => Ok(true),
            "false" | "0" | "no" | "off" => Ok(false),
            _ => Err(MappingError::ConversionError(
                format!("cannot parse '{}' as bool", value).into(),
            )),
        }
    }

    fn from_real(value: f64) -> Result<Self> {
        Ok(value != 0.0)
    }

    fn from_blob(_value: &[u8]) -> Result<Self> {
        Err(MappingError::ConversionError(
            "cannot convert BLOB to bool".into(),
        ))
    }

    fn from_null() -> Result<Self> {
        Ok(false)
    }
}

impl FromValue for String {
    fn from_integer(value: i64) -> Result<Self> {
        Ok(value.to_string())
    }

    fn from_text(value: &str) -> Result<Self> {
        Ok(value.to_string())
    }

    fn from_real(value: f64) -> Result<Self> {
        Ok(value.to_string())
    }

    fn from_blob(value: &[u8]) -> Result<Self> {
        String::from_utf8(value.to_vec()).map_err(|e| {
            MappingError::ConversionError(format!("invalid UTF-8 in BLOB: {}", e).into())
        })
    }

    fn from_null() -> Result<Self> {
        Ok(String::new())
    }
}

impl FromValue for compact_str::CompactString {
    fn from_integer(value: i64) -> Result<Self> {
        Ok(compact_str::CompactString::new(value.to_string()))
    }

    fn from_text(value: &str) -> Result<Self> {
        Ok(compact_str::CompactString::new(value))
    }

    fn from_real(value: f64) -> Result<Self> {
        Ok(compact_str::CompactString::new(value.to_string()))
    }

    fn from_blob(value: &[u8]) -> Result<Self> {
        String::from_blob(value).map(compact_str::CompactString::from)
    }

    fn from_null() -> Result<Self> {
        Ok(compact_str::CompactString::default())
    }
}

impl FromValue for Vec<u8> {
    fn from_integer(_value: i64) -> Result<Self> {
        Err(MappingError::ConversionError(
            "cannot convert INTEGER to Vec<u8>".into(),
        ))
    }

    fn from_text(value: &str) -> Result<Self> {
        Ok(value.as_bytes().to_vec())
    }

    fn from_real(_value: f64) -> Result<Self> {
        Err(MappingError::ConversionError(
            "cannot convert REAL to Vec<u8>".into(),
        ))
    }

    fn from_blob(value: &[u8]) -> Result<Self> {
        Ok(value.to_vec())
    }

    fn from_null() -> Result<Self> {
        Ok(Vec::new())
    }
}

// =============================================================================
// Wrapper implementations
// =============================================================================

impl<T: FromValue> FromValue for Option<T> {
    fn from_integer(value: i64) -> Result<Self> {
        T::from_integer(value).map(Some)
    }

    fn from_text(value: &str) -> Result<Self> {
        T::from_text(value).map(Some)
    }

    fn from_real(value: f64) -> Result<Self> {
        T::from_real(value).map(Some)
    }

    fn from_blob(value: &[u8]) -> Result<Self> {
        T::from_blob(value).map(Some)
    }

    fn from_null() -> Result<Self> {
        Ok(None)
    }
}

macro_rules! impl_from_value_wrapper {
    ($($wrapper:ident),+ $(,)?) => {
        $(
            impl<T: FromValue> FromValue for $wrapper<T> {
                fn from_integer(value: i64) -> Result<Self> {
                    T::from_integer(value).map($wrapper::new)
                }

                fn from_text(value: &str) -> Result<Self> {
                    T::from_text(value).map($wrapper::new)
                }

                fn from_real(value: f64) -> Result<Self> {
                    T::from_real(value).map($wrapper::new)
                }

                fn from_blob(value: &[u8]) -> Result<Self> {
                    T::from_blob(value).map($wrapper::new)
                }

                fn from_null() -> Result<Self> {
                    T::from_null().map($wrapper::new)
                }
            }
        )+
    };
}

impl_from_value_wrapper!(Box, Rc, Arc);

// =============================================================================
// Feature-gated types
// =============================================================================

#[cfg(feature = "uuid")]
impl FromValue for uuid::Uuid {
    fn from_integer(_value: i64) -> Result<Self> {
        Err(MappingError::ConversionError(
            "cannot convert INTEGER to UUID".into(),
        ))
    }

    fn from_text(value: &str) -> Result<Self> {
        uuid::Uuid::parse_str(value)
            .map_err(|e| MappingError::ConversionError(e.to_string().into()))
    }

    fn from_real(_value: f64) -> Result<Self> {
        Err(MappingError::ConversionError(
            "cannot convert REAL to UUID".into(),
        ))
    }

    fn from_blob(value: &[u8]) -> Result<Self> {
        uuid::Uuid::from_slice(value)
            .map_err(|e| MappingError::ConversionError(e.to_string().into()))
    }

    fn from_null() -> Result<Self> {
        Ok(uuid::Uuid::nil())
    }
}

/// Implements FromValue for chrono types stored as TEXT
#[cfg(feature = "chrono")]
macro_rules! impl_from_value_chrono_text {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl FromValue for $ty {
                fn from_integer(_value: i64) -> Result<Self> {
                    Err(MappingError::ConversionError(
                        concat!("cannot convert INTEGER to ", stringify!($ty)).into(),
                    ))
                }

                fn from_text(value: &str) -> Result<Self> {
                    value.parse().map_err(|e: chrono::ParseError| {
                        MappingError::ConversionError(
                            format!("cannot parse '{}' as {}: {}", value, stringify!($ty), e).into(),
                        )
                    })
                }

                fn from_real(_value: f64) -> Result<Self> {
                    Err(MappingError::ConversionError(
                        concat!("cannot convert REAL to ", stringify!($ty)).into(),
                    ))
                }

                fn from_blob(_value: &[u8]) -> Result<Self> {
                    Err(MappingError::ConversionError(
                        concat!("cannot convert BLOB to ", stringify!($ty)).into(),
                    ))
                }

                fn from_null() -> Result<Self> {
                    Ok(<$ty>::default())
                }
            }
        )+
    };
}

#[cfg(feature = "chrono")]
impl_from_value_chrono_text!(chrono::NaiveDate, chrono::NaiveTime, chrono::NaiveDateTime);
