use chrono::{DateTime, FixedOffset, Local, Utc};

use crate::types::ZoneSetting;

/// Convert nanoseconds since the Unix epoch into a calendar timestamp in `zone`
pub fn timestamp_from_nanos(nanos: i64, zone: ZoneSetting) -> DateTime<FixedOffset> {
    place_in_zone(DateTime::from_timestamp_nanos(nanos), zone)
}

/// Truncate a float toward zero to whole nanoseconds
///
/// NaN becomes zero and out-of-range values saturate at the `i64` bounds.
pub fn nanos_from_float(value: f64) -> i64 {
    value as i64
}

/// Shift a UTC instant into the offset `zone` prescribes for it
pub fn place_in_zone(utc: DateTime<Utc>, zone: ZoneSetting) -> DateTime<FixedOffset> {
    match zone {
        ZoneSetting::Local => utc.with_timezone(&Local).fixed_offset(),
        ZoneSetting::Utc => utc.fixed_offset(),
        ZoneSetting::Fixed(offset) => utc.with_timezone(&offset),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nanos_keep_sub_second_precision() {
        let dt = timestamp_from_nanos(1_500_000_001, ZoneSetting::Utc);
        assert_eq!(dt.timestamp(), 1);
        assert_eq!(dt.timestamp_subsec_nanos(), 500_000_001);
    }

    #[test]
    fn test_negative_nanos_are_before_epoch() {
        let dt = timestamp_from_nanos(-1, ZoneSetting::Utc);
        assert_eq!(dt.timestamp(), -1);
        assert_eq!(dt.timestamp_subsec_nanos(), 999_999_999);
    }

    #[test]
    fn test_float_truncates_toward_zero() {
        assert_eq!(nanos_from_float(1.9), 1);
        assert_eq!(nanos_from_float(-1.9), -1);
        assert_eq!(nanos_from_float(f64::NAN), 0);
        assert_eq!(nanos_from_float(f64::INFINITY), i64::MAX);
    }

    #[test]
    fn test_fixed_zone_keeps_instant() {
        let offset = FixedOffset::east_opt(3600).unwrap();
        let dt = timestamp_from_nanos(0, ZoneSetting::Fixed(offset));
        assert_eq!(dt.offset().local_minus_utc(), 3600);
        assert_eq!(dt.timestamp(), 0);
    }
}
