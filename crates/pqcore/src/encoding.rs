use std::fmt;
use std::str::FromStr;

use pqcore_error::{PqcoreError, Result};

/// Encodings for column values and levels.
///
/// Discriminants are the `Encoding` codes from parquet.thrift. Code 1 was
/// never assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Encoding {
    Plain = 0,
    PlainDictionary = 2,
    Rle = 3,
    /// Deprecated.
    BitPacked = 4,
    DeltaBinaryPacked = 5,
    DeltaLengthByteArray = 6,
    DeltaByteArray = 7,
    RleDictionary = 8,
    ByteStreamSplit = 9,
}

impl Encoding {
    pub const ALL: [Encoding; 9] = [
        Self::Plain,
        Self::PlainDictionary,
        Self::Rle,
        Self::BitPacked,
        Self::DeltaBinaryPacked,
        Self::DeltaLengthByteArray,
        Self::DeltaByteArray,
        Self::RleDictionary,
        Self::ByteStreamSplit,
    ];

    pub const fn code(&self) -> i32 {
        *self as i32
    }

    /// If this encoding stores values as indices into a dictionary page.
    pub const fn is_dictionary(&self) -> bool {
        matches!(self, Self::PlainDictionary | Self::RleDictionary)
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Plain => "PLAIN",
            Self::PlainDictionary => "PLAIN_DICTIONARY",
            Self::Rle => "RLE",
            Self::BitPacked => "BIT_PACKED",
            Self::DeltaBinaryPacked => "DELTA_BINARY_PACKED",
            Self::DeltaLengthByteArray => "DELTA_LENGTH_BYTE_ARRAY",
            Self::DeltaByteArray => "DELTA_BYTE_ARRAY",
            Self::RleDictionary => "RLE_DICTIONARY",
            Self::ByteStreamSplit => "BYTE_STREAM_SPLIT",
        }
    }
}

impl TryFrom<i32> for Encoding {
    type Error = PqcoreError;

    fn try_from(value: i32) -> Result<Self> {
        Encoding::ALL
            .into_iter()
            .find(|e| e.code() == value)
            .ok_or_else(|| {
                tracing::debug!(code = value, "rejecting encoding code");
                PqcoreError::new(format!("Invalid encoding code: {value}"))
            })
    }
}

impl FromStr for Encoding {
    type Err = PqcoreError;

    fn from_str(s: &str) -> Result<Self> {
        Encoding::ALL
            .into_iter()
            .find(|e| e.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| PqcoreError::new(format!("Unknown encoding: {s}")))
    }
}

impl fmt::Display for Encoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_match_thrift() {
        assert_eq!(0, Encoding::Plain.code());
        assert_eq!(2, Encoding::PlainDictionary.code());
        assert_eq!(4, Encoding::BitPacked.code());
        assert_eq!(8, Encoding::RleDictionary.code());
        assert_eq!(9, Encoding::ByteStreamSplit.code());

        for enc in Encoding::ALL {
            assert_eq!(enc, Encoding::try_from(enc.code()).unwrap());
        }
    }

    #[test]
    fn unassigned_code() {
        assert!(Encoding::try_from(1).is_err());
        assert!(Encoding::try_from(10).is_err());
    }

    #[test]
    fn names() {
        assert_eq!("DELTA_LENGTH_BYTE_ARRAY", Encoding::DeltaLengthByteArray.to_string());
        assert_eq!(Encoding::RleDictionary, "rle_dictionary".parse().unwrap());
        assert!("zstd".parse::<Encoding>().is_err());
    }
}
