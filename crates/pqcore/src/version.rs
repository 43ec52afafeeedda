use std::fmt;

use pqcore_error::{PqcoreError, Result};

/// Format version written to the file metadata.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Version {
    V1 = 1,
    V2 = 2,
}

impl Version {
    pub const fn code(&self) -> i8 {
        *self as i8
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "V1",
            Self::V2 => "V2",
        }
    }
}

impl TryFrom<i8> for Version {
    type Error = PqcoreError;

    fn try_from(value: i8) -> Result<Self> {
        Ok(match value {
            1 => Self::V1,
            2 => Self::V2,
            other => {
                tracing::debug!(code = other, "rejecting format version code");
                return Err(PqcoreError::new(format!("Invalid format version: {other}")));
            }
        })
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Layout version used for data pages.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DataPageVersion {
    V1 = 0,
    V2 = 1,
}

impl DataPageVersion {
    pub const fn code(&self) -> i8 {
        *self as i8
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::V1 => "DATA_PAGE_V1",
            Self::V2 => "DATA_PAGE_V2",
        }
    }
}

impl TryFrom<i8> for DataPageVersion {
    type Error = PqcoreError;

    fn try_from(value: i8) -> Result<Self> {
        Ok(match value {
            0 => Self::V1,
            1 => Self::V2,
            other => {
                tracing::debug!(code = other, "rejecting data page version code");
                return Err(PqcoreError::new(format!("Invalid data page version: {other}")));
            }
        })
    }
}

impl fmt::Display for DataPageVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
