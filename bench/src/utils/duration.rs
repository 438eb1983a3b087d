use humantime::format_duration;
use serde::{Deserialize, Serialize};
use std::{
    fmt::{Display, Formatter},
    str::FromStr,
    time::Duration,
};

/// Human readable duration used for run configuration, e.g. `10s` or `500ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct BenchDuration {
    duration: Duration,
}

impl BenchDuration {
    pub fn new(duration: Duration) -> BenchDuration {
        BenchDuration { duration }
    }

    pub fn from_secs(secs: u64) -> BenchDuration {
        BenchDuration::new(Duration::from_secs(secs))
    }

    pub fn as_human_time_string(&self) -> String {
        format!("{}", format_duration(self.duration))
    }

    pub fn as_secs_f64(&self) -> f64 {
        self.duration.as_secs_f64()
    }

    pub fn get_duration(&self) -> Duration {
        self.duration
    }

    pub fn is_zero(&self) -> bool {
        self.duration.is_zero()
    }
}

impl FromStr for BenchDuration {
    type Err = humantime::DurationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = &s.to_lowercase();
        if s == "0" || s == "none" {
            Ok(BenchDuration::default())
        } else {
            Ok(BenchDuration {
                duration: humantime::parse_duration(s)?,
            })
        }
    }
}

impl From<Duration> for BenchDuration {
    fn from(duration: Duration) -> Self {
        BenchDuration { duration }
    }
}

impl Display for BenchDuration {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.is_zero() {
            return write!(f, "0s");
        }
        write!(f, "{}", self.as_human_time_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        let duration: BenchDuration = "1m 30s".parse().unwrap();
        assert_eq!(duration.get_duration(), Duration::from_secs(90));
    }

    #[test]
    fn test_sub_second_duration_is_not_zero() {
        let duration: BenchDuration = "500ms".parse().unwrap();
        assert!(!duration.is_zero());
        assert_eq!(duration.as_secs_f64(), 0.5);
    }

    #[test]
    fn test_zero_duration() {
        let duration: BenchDuration = "0".parse().unwrap();
        assert!(duration.is_zero());
        let duration: BenchDuration = "none".parse().unwrap();
        assert!(duration.is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(BenchDuration::from_secs(3661).to_string(), "1h 1m 1s");
        assert_eq!(BenchDuration::default().to_string(), "0s");
    }

    #[test]
    fn test_display_round_trips_through_from_str() {
        let duration: BenchDuration = "2s 250ms".parse().unwrap();
        let parsed: BenchDuration = duration.to_string().parse().unwrap();
        assert_eq!(parsed, duration);
    }

    #[test]
    fn test_invalid_duration() {
        let result: Result<BenchDuration, _> = "ten seconds".parse();
        assert!(result.is_err());
    }
}
