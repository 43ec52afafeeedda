use std::fmt;

use pqcore_error::{PqcoreError, Result};

/// Sort order used when computing min/max statistics for a column.
///
/// Mirrors the `ColumnOrder` union in parquet.thrift, where the only member
/// is `TYPE_ORDER` (field id 1). A union with no member set is `Undefined`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColumnOrder {
    /// No ordering recorded. Statistics should not be trusted for sorting.
    Undefined,
    /// Ordering defined by the column's logical/physical type.
    #[default]
    TypeDefinedOrder,
}

impl ColumnOrder {
    /// Thrift field id of the set union member, 0 if none is set.
    pub const fn code(&self) -> i16 {
        match self {
            Self::Undefined => 0,
            Self::TypeDefinedOrder => 1,
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Undefined => "UNDEFINED",
            Self::TypeDefinedOrder => "TYPE_DEFINED_ORDER",
        }
    }
}

impl TryFrom<i16> for ColumnOrder {
    type Error = PqcoreError;

    fn try_from(value: i16) -> Result<Self> {
        Ok(match value {
            0 => Self::Undefined,
            1 => Self::TypeDefinedOrder,
            other => {
                tracing::debug!(code = other, "rejecting column order field id");
                return Err(PqcoreError::new(format!(
                    "Invalid column order field id: {other}"
                )));
            }
        })
    }
}

impl fmt::Display for ColumnOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
