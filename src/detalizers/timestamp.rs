use crate::traits::Detalizer;
use crate::types::{Detail, DetailValue};
use chrono::{DateTime, Utc};
use core::fmt::{self, Display};

/// Key type of [`TIMESTAMP_DETAIL_KEY`]. Renders as `Timestamp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimestampKey;

/// Key under which [`TimestampDetalizer`] stores the creation time.
pub const TIMESTAMP_DETAIL_KEY: TimestampKey = TimestampKey;

impl Display for TimestampKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Timestamp")
    }
}

impl From<TimestampKey> for DetailValue {
    #[inline]
    fn from(key: TimestampKey) -> Self {
        DetailValue::shown(key)
    }
}

/// Detalizer stamping every error with its creation time (UTC).
///
/// # Examples
///
/// ```
/// use chrono::{DateTime, Utc};
/// use error_detail::{ErrorFactory, TimestampDetalizer, TIMESTAMP_DETAIL_KEY};
///
/// fn fixed() -> DateTime<Utc> {
///     DateTime::parse_from_rfc3339("2017-11-01T00:00:05+02:00").unwrap().with_timezone(&Utc)
/// }
///
/// let factory = ErrorFactory::builder()
///     .chain_store()
///     .detalizer(TimestampDetalizer::with_clock(fixed))
///     .build();
///
/// let err = factory.error("nothing to do");
/// assert_eq!(err.detailed(), "nothing to do\nTimestamp : 2017-10-31 22:00:05 UTC\n");
/// assert_eq!(err.get(TIMESTAMP_DETAIL_KEY).and_then(|v| v.downcast_ref::<DateTime<Utc>>()), Some(&fixed()));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TimestampDetalizer {
    clock: fn() -> DateTime<Utc>,
}

impl TimestampDetalizer {
    #[inline]
    pub fn new() -> Self {
        Self { clock: Utc::now }
    }

    /// Uses `clock` instead of the system time.
    #[inline]
    pub fn with_clock(clock: fn() -> DateTime<Utc>) -> Self {
        Self { clock }
    }
}

impl Default for TimestampDetalizer {
    fn default() -> Self {
        Self::new()
    }
}

impl Detalizer for TimestampDetalizer {
    fn details(&self) -> Vec<Detail> {
        vec![Detail::new(TIMESTAMP_DETAIL_KEY, DetailValue::shown((self.clock)()))]
    }
}
