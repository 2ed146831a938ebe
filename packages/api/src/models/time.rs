//! Backend timestamps.
//!
//! The backend stamps every record with nanoseconds since the Unix epoch. The
//! client only uses these for display and for the overdue hint, always against
//! its own clock.

use chrono::{DateTime, Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

const NANOS_PER_MILLI: i64 = 1_000_000;

/// Nanoseconds since the Unix epoch.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Time(pub i64);

impl Time {
    pub fn from_millis(ms: i64) -> Self {
        Self(ms.saturating_mul(NANOS_PER_MILLI))
    }

    pub fn as_millis(self) -> i64 {
        self.0 / NANOS_PER_MILLI
    }

    /// The client's current wall-clock time.
    #[cfg(target_arch = "wasm32")]
    pub fn now() -> Self {
        Self::from_millis(js_sys::Date::now() as i64)
    }

    /// The client's current wall-clock time.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn now() -> Self {
        let ms = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map(|d| d.as_millis() as i64)
            .unwrap_or(0);
        Self::from_millis(ms)
    }

    /// Render as `"05 Oct 2026"`.
    pub fn format_date(self) -> String {
        DateTime::from_timestamp_nanos(self.0)
            .format("%d %b %Y")
            .to_string()
    }

    pub fn year(self) -> i32 {
        DateTime::from_timestamp_nanos(self.0).year()
    }

    /// Parse the value of an `<input type="date">` (`YYYY-MM-DD`, midnight UTC).
    pub fn from_date_input(value: &str) -> Option<Self> {
        let date = NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").ok()?;
        let nanos = date.and_hms_opt(0, 0, 0)?.and_utc().timestamp_nanos_opt()?;
        Some(Self(nanos))
    }

    /// Inverse of [`Time::from_date_input`].
    pub fn to_date_input(self) -> String {
        DateTime::from_timestamp_nanos(self.0)
            .format("%Y-%m-%d")
            .to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        // 2026-10-16T00:00:00Z
        let t = Time::from_millis(1_792_108_800_000);
        assert_eq!(t.format_date(), "16 Oct 2026");
        assert_eq!(t.to_date_input(), "2026-10-16");
        assert_eq!(t.year(), 2026);
    }

    #[test]
    fn test_date_input() {
        let t = Time::from_date_input("2026-10-16").unwrap();
        assert_eq!(t, Time::from_millis(1_792_108_800_000));
        assert!(Time::from_date_input("").is_none());
        assert!(Time::from_date_input("16/10/2026").is_none());
    }

    #[test]
    fn test_millis() {
        let t = Time(1_500_000_000);
        assert_eq!(t.as_millis(), 1_500);
        assert!(Time::now() > Time::from_millis(1_700_000_000_000));
    }

    #[test]
    fn test_wire_format_is_plain_integer() {
        let json = serde_json::to_string(&Time(42)).unwrap();
        assert_eq!(json, "42");
    }
}
