//! # Timestamp Value Object
//!
//! UTC point in time used for order expiration.
//!
//! # Examples
//!
//! ```
//! use quote_relay::domain::value_objects::timestamp::Timestamp;
//!
//! let now = Timestamp::now();
//! let later = now.checked_add_secs(600).unwrap();
//!
//! assert!(later > now);
//! assert_eq!(later.timestamp_secs() - now.timestamp_secs(), 600);
//! ```

use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A UTC timestamp.
///
/// Wraps `chrono::DateTime<Utc>`; on-chain orders only ever see its
/// whole-second Unix value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Creates a timestamp for the current moment.
    #[must_use]
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Creates a timestamp from Unix seconds.
    ///
    /// # Returns
    ///
    /// `Some(Timestamp)` if the value is valid, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use quote_relay::domain::value_objects::timestamp::Timestamp;
    ///
    /// let ts = Timestamp::from_secs(1_704_067_200).unwrap();
    /// assert_eq!(ts.timestamp_secs(), 1_704_067_200);
    /// ```
    #[must_use]
    pub fn from_secs(secs: i64) -> Option<Self> {
        Utc.timestamp_opt(secs, 0).single().map(Self)
    }

    /// Returns the Unix timestamp in seconds.
    #[inline]
    #[must_use]
    pub fn timestamp_secs(&self) -> i64 {
        self.0.timestamp()
    }

    /// Adds seconds to the timestamp.
    ///
    /// Returns `None` if the result is out of the representable range.
    #[must_use]
    pub fn checked_add_secs(&self, secs: i64) -> Option<Self> {
        TimeDelta::try_seconds(secs)
            .and_then(|delta| self.0.checked_add_signed(delta))
            .map(Self)
    }
}

impl Default for Timestamp {
    fn default() -> Self {
        Self::now()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.to_rfc3339())
    }
}
