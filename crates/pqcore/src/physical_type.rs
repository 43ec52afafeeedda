use std::fmt;
use std::str::FromStr;

use pqcore_error::{PqcoreError, Result};

use crate::byte_array::{ByteArrayDescriptor, FixedLenByteArrayDescriptor};
use crate::int96::Int96;

/// Physical types representable in parquet.
///
/// Discriminants are the `Type` codes from parquet.thrift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PhysicalType {
    Boolean = 0,
    Int32 = 1,
    Int64 = 2,
    Int96 = 3,
    Float = 4,
    Double = 5,
    ByteArray = 6,
    FixedLenByteArray = 7,
    /// Type not yet assigned. One past the last valid code.
    ///
    /// Never valid where a concrete storage type is needed.
    Undefined = 8,
}

impl PhysicalType {
    pub const ALL: [PhysicalType; 8] = [
        Self::Boolean,
        Self::Int32,
        Self::Int64,
        Self::Int96,
        Self::Float,
        Self::Double,
        Self::ByteArray,
        Self::FixedLenByteArray,
    ];

    /// Wire code for this type.
    pub const fn code(&self) -> i32 {
        *self as i32
    }

    /// Number of bytes needed to hold a single value of this type in memory.
    ///
    /// Byte arrays report the size of their view descriptor, not the size of
    /// any particular value.
    ///
    /// # Panics
    ///
    /// Panics for `Undefined`. Callers must have resolved the type first.
    pub const fn byte_size(&self) -> usize {
        match self {
            Self::Boolean => 1,
            Self::Int32 => std::mem::size_of::<i32>(),
            Self::Int64 => std::mem::size_of::<i64>(),
            Self::Int96 => std::mem::size_of::<Int96>(),
            Self::Float => std::mem::size_of::<f32>(),
            Self::Double => std::mem::size_of::<f64>(),
            Self::ByteArray => std::mem::size_of::<ByteArrayDescriptor>(),
            Self::FixedLenByteArray => std::mem::size_of::<FixedLenByteArrayDescriptor>(),
            Self::Undefined => panic!("no byte size for undefined physical type"),
        }
    }

    pub const fn is_defined(&self) -> bool {
        !matches!(self, Self::Undefined)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Boolean => "BOOLEAN",
            Self::Int32 => "INT32",
            Self::Int64 => "INT64",
            Self::Int96 => "INT96",
            Self::Float => "FLOAT",
            Self::Double => "DOUBLE",
            Self::ByteArray => "BYTE_ARRAY",
            Self::FixedLenByteArray => "FIXED_LEN_BYTE_ARRAY",
            Self::Undefined => "UNDEFINED",
        }
    }
}

/// Converts a wire code. The `Undefined` sentinel is never a valid wire code
/// and is rejected.
impl TryFrom<i32> for PhysicalType {
    type Error = PqcoreError;

    fn try_from(value: i32) -> Result<Self> {
        Ok(match value {
            0 => Self::Boolean,
            1 => Self::Int32,
            2 => Self::Int64,
            3 => Self::Int96,
            4 => Self::Float,
            5 => Self::Double,
            6 => Self::ByteArray,
            7 => Self::FixedLenByteArray,
            other => {
                tracing::debug!(code = other, "rejecting physical type code");
                return Err(PqcoreError::new(format!(
                    "Invalid physical type code: {other}"
                )));
            }
        })
    }
}

impl FromStr for PhysicalType {
    type Err = PqcoreError;

    fn from_str(s: &str) -> Result<Self> {
        PhysicalType::ALL
            .into_iter()
            .chain([PhysicalType::Undefined])
            .find(|t| t.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PqcoreError::new(format!("Unknown physical type: {s}")))
    }
}

impl fmt::Display for PhysicalType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn byte_sizes() {
        let word = std::mem::size_of::<usize>();
        let expected = [
            (PhysicalType::Boolean, 1),
            (PhysicalType::Int32, 4),
            (PhysicalType::Int64, 8),
            (PhysicalType::Int96, 12),
            (PhysicalType::Float, 4),
            (PhysicalType::Double, 8),
            (PhysicalType::ByteArray, 2 * word),
            (PhysicalType::FixedLenByteArray, 2 * word),
        ];

        for (typ, size) in expected {
            assert_eq!(size, typ.byte_size(), "type: {typ}");
        }
    }

    #[test]
    #[should_panic(expected = "no byte size for undefined physical type")]
    fn byte_size_undefined() {
        PhysicalType::Undefined.byte_size();
    }

    #[test]
    fn codes_match_thrift() {
        for (idx, typ) in PhysicalType::ALL.iter().enumerate() {
            assert_eq!(idx as i32, typ.code());
            assert_eq!(*typ, PhysicalType::try_from(typ.code()).unwrap());
        }
        assert_eq!(8, PhysicalType::Undefined.code());
        assert!(PhysicalType::try_from(8).is_err());
        assert!(PhysicalType::try_from(9).is_err());
        assert!(PhysicalType::try_from(-1).is_err());
    }

    #[test]
    fn display() {
        assert_eq!("BOOLEAN", PhysicalType::Boolean.to_string());
        assert_eq!(
            "FIXED_LEN_BYTE_ARRAY",
            PhysicalType::FixedLenByteArray.to_string()
        );
        assert_eq!("UNDEFINED", PhysicalType::Undefined.to_string());
    }

    #[test]
    fn parse_names() {
        assert_eq!(PhysicalType::Int96, "int96".parse().unwrap());
        assert_eq!(PhysicalType::ByteArray, "BYTE_ARRAY".parse().unwrap());
        assert!("varchar".parse::<PhysicalType>().is_err());
    }
}
