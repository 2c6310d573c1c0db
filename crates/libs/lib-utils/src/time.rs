//! # Time Utilities

use chrono::{DateTime, Utc};

/// Current UTC time, truncated to whole seconds.
///
/// Stored timestamps and token claims both use second precision, so values
/// read back from the database compare equal to the ones written.
pub fn now_utc() -> DateTime<Utc> {
    let now = Utc::now();
    DateTime::from_timestamp(now.timestamp(), 0).unwrap_or(now)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_now_utc_has_no_subsecond_part() {
        assert_eq!(now_utc().timestamp_subsec_nanos(), 0);
    }
}
