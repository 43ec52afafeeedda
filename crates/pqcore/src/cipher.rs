use std::fmt;

use pqcore_error::{PqcoreError, Result};

/// AES algorithm used for modular encryption.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cipher {
    AesGcm = 0,
    AesCtr = 1,
}

impl Cipher {
    pub const fn code(&self) -> i32 {
        *self as i32
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::AesGcm => "AES_GCM",
            Self::AesCtr => "AES_CTR",
        }
    }
}

impl TryFrom<i32> for Cipher {
    type Error = PqcoreError;

    fn try_from(value: i32) -> Result<Self> {
        Ok(match value {
            0 => Self::AesGcm,
            1 => Self::AesCtr,
            other => {
                tracing::debug!(code = other, "rejecting cipher code");
                return Err(PqcoreError::new(format!("Invalid cipher code: {other}")));
            }
        })
    }
}

impl fmt::Display for Cipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(0, Cipher::AesGcm.code());
        assert_eq!(Cipher::AesCtr, Cipher::try_from(1).unwrap());
        assert!(Cipher::try_from(2).is_err());
    }

    #[test]
    fn display() {
        assert_eq!("AES_GCM", Cipher::AesGcm.to_string());
        assert_eq!("AES_CTR", Cipher::AesCtr.to_string());
    }
}
