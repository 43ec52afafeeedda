//! Packed 12 byte timestamps.
//!
//! Layout (little endian):
//!
//! ```text
//! [0..8)   i64 nanoseconds since midnight
//! [8..12)  u32 Julian day number
//! ```
use std::fmt;

use bytemuck::{Pod, Zeroable};
use chrono::{DateTime, SecondsFormat, TimeZone, Utc};
use pqcore_error::{OptionExt, Result};

use crate::cast::ByteCast;

/// Julian day number of 1970-01-01.
pub const JULIAN_UNIX_EPOCH: i64 = 2_440_588;

pub const NANOS_PER_DAY: i64 = 86_400 * 1_000_000_000;

/// Number of bytes making up an `Int96`.
pub const INT96_SIZE_BYTES: usize = 12;

/// Parquet Int96 value, used for (deprecated) nanosecond timestamps.
///
/// Stored as raw bytes so that the value has an alignment of 1 and can be
/// reinterpreted directly from any byte buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default, Pod, Zeroable)]
#[repr(transparent)]
pub struct Int96([u8; INT96_SIZE_BYTES]);

const _: () = assert!(std::mem::size_of::<Int96>() == INT96_SIZE_BYTES);
const _: () = assert!(std::mem::align_of::<Int96>() == 1);

impl Int96 {
    /// Create from three 32 bit words, each written little endian in order.
    pub fn new(words: [u32; 3]) -> Self {
        let mut buf = [0; INT96_SIZE_BYTES];
        buf[0..4].copy_from_slice(&words[0].to_le_bytes());
        buf[4..8].copy_from_slice(&words[1].to_le_bytes());
        buf[8..12].copy_from_slice(&words[2].to_le_bytes());
        Int96(buf)
    }

    pub fn from_parts(nanos_of_day: i64, julian_day: u32) -> Self {
        let mut v = Int96::default();
        v.set_nanos_of_day(nanos_of_day);
        v.set_julian_day(julian_day);
        v
    }

    pub const fn from_le_bytes(bytes: [u8; INT96_SIZE_BYTES]) -> Self {
        Int96(bytes)
    }

    pub const fn to_le_bytes(&self) -> [u8; INT96_SIZE_BYTES] {
        self.0
    }

    pub fn nanos_of_day(&self) -> i64 {
        let mut buf = [0; 8];
        buf.copy_from_slice(&self.0[0..8]);
        i64::from_le_bytes(buf)
    }

    pub fn julian_day(&self) -> u32 {
        let mut buf = [0; 4];
        buf.copy_from_slice(&self.0[8..12]);
        u32::from_le_bytes(buf)
    }

    /// Overwrite the nanosecond field in place. The Julian day is untouched.
    pub fn set_nanos_of_day(&mut self, nanos: i64) {
        self.0[0..8].copy_from_slice(&nanos.to_le_bytes());
    }

    /// Overwrite the Julian day field in place. The nanoseconds are untouched.
    pub fn set_julian_day(&mut self, day: u32) {
        self.0[8..12].copy_from_slice(&day.to_le_bytes());
    }

    /// Nanoseconds relative to the unix epoch.
    ///
    /// Days before the epoch produce negative values. Errors if the instant
    /// does not fit in an i64.
    pub fn to_unix_nanos(&self) -> Result<i64> {
        let days = self.julian_day() as i64 - JULIAN_UNIX_EPOCH;
        days.checked_mul(NANOS_PER_DAY)
            .and_then(|n| n.checked_add(self.nanos_of_day()))
            .required("Int96 timestamp out of range for nanosecond precision")
    }

    /// Convert to a UTC calendar timestamp.
    pub fn to_datetime(&self) -> Result<DateTime<Utc>> {
        Ok(Utc.timestamp_nanos(self.to_unix_nanos()?))
    }

    /// Build a packed timestamp from a calendar timestamp.
    ///
    /// The nanosecond field is always within `[0, NANOS_PER_DAY)`.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<Self> {
        let nanos = dt
            .timestamp_nanos_opt()
            .required("Timestamp out of range for nanosecond precision")?;
        let days = nanos.div_euclid(NANOS_PER_DAY) + JULIAN_UNIX_EPOCH;
        let julian_day = u32::try_from(days)
            .ok()
            .required("Timestamp out of range for Julian day")?;

        Ok(Int96::from_parts(
            nanos.rem_euclid(NANOS_PER_DAY),
            julian_day,
        ))
    }
}

impl ByteCast for Int96 {}

impl From<[u8; INT96_SIZE_BYTES]> for Int96 {
    fn from(value: [u8; INT96_SIZE_BYTES]) -> Self {
        Int96(value)
    }
}

impl AsRef<[u8]> for Int96 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Int96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Int96")
            .field("nanos_of_day", &self.nanos_of_day())
            .field("julian_day", &self.julian_day())
            .finish()
    }
}

/// Formats as an RFC 3339 timestamp with nanosecond precision.
impl fmt::Display for Int96 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.to_datetime() {
            Ok(dt) => write!(f, "{}", dt.to_rfc3339_opts(SecondsFormat::Nanos, true)),
            Err(_) => write!(
                f,
                "<out of range: julian_day={}, nanos_of_day={}>",
                self.julian_day(),
                self.nanos_of_day()
            ),
        }
    }
}
