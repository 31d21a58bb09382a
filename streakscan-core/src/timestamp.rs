//! Capture-time resolution from filename-embedded epoch values.
//!
//! Detector logs are named by the capture instant: the first 18 filename
//! characters are a decimal nanosecond-since-epoch value.

use chrono::{DateTime, Utc};
use chrono_tz::Europe::Zurich;
use chrono_tz::Tz;

use crate::error::{Error, Result};

/// Number of leading filename characters holding the epoch value.
pub const EPOCH_DIGITS: usize = 18;

const NS_PER_SEC: u64 = 1_000_000_000;

/// Capture time of a detector log, resolved from its filename.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CaptureTime {
    /// Raw nanosecond epoch value from the filename prefix.
    pub epoch_ns: u64,
    /// Whole-second UTC instant (sub-second part truncated).
    pub utc: DateTime<Utc>,
    /// The same instant in CERN local civil time (Europe/Zurich).
    pub local: DateTime<Tz>,
}

impl CaptureTime {
    /// Resolves the capture time from a log filename.
    ///
    /// # Errors
    /// Returns an error if the first [`EPOCH_DIGITS`] characters are
    /// missing or not a decimal integer, or the value maps outside the
    /// representable calendar range.
    pub fn from_filename(filename: &str) -> Result<Self> {
        let prefix = filename
            .get(..EPOCH_DIGITS)
            .ok_or_else(|| Error::InvalidTimestamp {
                filename: filename.to_string(),
                reason: format!("shorter than {EPOCH_DIGITS} characters"),
            })?;
        let epoch_ns: u64 = prefix.parse().map_err(|e| Error::InvalidTimestamp {
            filename: filename.to_string(),
            reason: format!("{e}"),
        })?;
        Self::from_epoch_ns(epoch_ns)
    }

    /// Resolves the capture time from a raw nanosecond epoch value.
    ///
    /// # Errors
    /// Returns an error if the whole-second value has no calendar
    /// representation.
    pub fn from_epoch_ns(epoch_ns: u64) -> Result<Self> {
        let secs = i64::try_from(epoch_ns / NS_PER_SEC)
            .map_err(|_| Error::EpochOutOfRange(i64::MAX))?;
        let utc = DateTime::from_timestamp(secs, 0).ok_or(Error::EpochOutOfRange(secs))?;
        let local = utc.with_timezone(&Zurich);
        Ok(Self {
            epoch_ns,
            utc,
            local,
        })
    }
}
