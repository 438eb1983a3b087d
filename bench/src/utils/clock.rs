use crate::error::RepTestError;
use std::fmt::{Display, Formatter};
use std::ops::Sub;
use std::time::{Duration, Instant};
use tracing::error;

const NANOS_PER_SEC: f64 = 1_000_000_000.0;
const NANOS_PER_MILLI: f64 = 1_000_000.0;
const VERIFY_MAX_READS: u32 = 10_000_000;

/// An opaque monotonic instant. The only meaningful operation is subtraction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Timestamp(Instant);

impl Sub for Timestamp {
    type Output = TrialDuration;

    /// Saturates at zero instead of wrapping.
    fn sub(self, earlier: Timestamp) -> TrialDuration {
        TrialDuration::from(self.0.saturating_duration_since(earlier.0))
    }
}

/// Unsigned count of nanoseconds elapsed between two timestamps.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TrialDuration(u64);

impl TrialDuration {
    pub const ZERO: TrialDuration = TrialDuration(0);

    pub const fn from_nanos(nanos: u64) -> Self {
        TrialDuration(nanos)
    }

    pub const fn as_nanos(&self) -> u64 {
        self.0
    }

    pub fn as_secs_f64(&self) -> f64 {
        Clock::to_seconds(*self)
    }

    pub fn as_millis_f64(&self) -> f64 {
        Clock::to_milliseconds(*self)
    }

    pub fn saturating_add(self, other: TrialDuration) -> TrialDuration {
        TrialDuration(self.0.saturating_add(other.0))
    }
}

impl From<Duration> for TrialDuration {
    fn from(duration: Duration) -> Self {
        TrialDuration(u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX))
    }
}

impl From<TrialDuration> for Duration {
    fn from(duration: TrialDuration) -> Self {
        Duration::from_nanos(duration.0)
    }
}

impl Display for TrialDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", humantime::format_duration(Duration::from(*self)))
    }
}

/// Monotonic time source with nanosecond resolution.
pub struct Clock;

impl Clock {
    pub fn now() -> Timestamp {
        Timestamp(Instant::now())
    }

    pub fn to_seconds(duration: TrialDuration) -> f64 {
        Self::nanos_to_seconds(duration.as_nanos() as f64)
    }

    pub fn to_milliseconds(duration: TrialDuration) -> f64 {
        Self::nanos_to_milliseconds(duration.as_nanos() as f64)
    }

    pub fn nanos_to_seconds(nanos: f64) -> f64 {
        nanos / NANOS_PER_SEC
    }

    pub fn nanos_to_milliseconds(nanos: f64) -> f64 {
        nanos / NANOS_PER_MILLI
    }

    /// Checks that the clock moves forward. A clock that never advances
    /// would produce zeroed timings that look valid, so it is rejected.
    pub fn verify() -> Result<(), RepTestError> {
        verify_with(Self::now, VERIFY_MAX_READS)
    }
}

fn verify_with(mut now: impl FnMut() -> Timestamp, max_reads: u32) -> Result<(), RepTestError> {
    let first = now();
    let mut previous = first;
    for _ in 0..max_reads {
        let current = now();
        if current < previous {
            error!("Monotonic clock went backwards.");
            return Err(RepTestError::ClockUnavailable);
        }
        if current > first {
            return Ok(());
        }
        previous = current;
    }

    error!("Monotonic clock did not advance after {max_reads} reads.");
    Err(RepTestError::ClockUnavailable)
}
