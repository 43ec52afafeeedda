use std::fmt;

use pqcore_error::{PqcoreError, Result};

/// Field repetition type.
///
/// Discriminants are the `FieldRepetitionType` codes from parquet.thrift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Repetition {
    /// Exactly one value.
    Required = 0,
    /// Zero or one value.
    Optional = 1,
    /// Zero or more values.
    Repeated = 2,
    /// Not yet assigned.
    Undefined = 3,
}

impl Repetition {
    pub const fn code(&self) -> i32 {
        *self as i32
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Required => "required",
            Self::Optional => "optional",
            Self::Repeated => "repeated",
            Self::Undefined => "undefined",
        }
    }
}

/// Converts a wire code. `Undefined` is only ever constructed in code.
impl TryFrom<i32> for Repetition {
    type Error = PqcoreError;

    fn try_from(value: i32) -> Result<Self> {
        Ok(match value {
            0 => Self::Required,
            1 => Self::Optional,
            2 => Self::Repeated,
            other => {
                tracing::debug!(code = other, "rejecting repetition code");
                return Err(PqcoreError::new(format!("Invalid repetition code: {other}")));
            }
        })
    }
}

impl fmt::Display for Repetition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lowercase_display() {
        assert_eq!("required", Repetition::Required.to_string());
        assert_eq!("optional", Repetition::Optional.to_string());
        assert_eq!("repeated", Repetition::Repeated.to_string());
    }

    #[test]
    fn codes() {
        assert_eq!(0, Repetition::Required.code());
        assert_eq!(1, Repetition::Optional.code());
        assert_eq!(2, Repetition::Repeated.code());
        assert_eq!(Repetition::Repeated, Repetition::try_from(2).unwrap());
        assert_eq!(3, Repetition::Undefined.code());
        assert!(Repetition::try_from(3).is_err());
        assert!(Repetition::try_from(4).is_err());
    }
}
