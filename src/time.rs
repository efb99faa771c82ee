//! Time related utils.

use chrono::Utc;

/// DateTime is the alias of `chrono::DateTime<Utc>`.
pub type DateTime = chrono::DateTime<Utc>;

/// Take the current time.
pub fn now() -> DateTime {
    Utc::now()
}

/// Format a date time into a short date like `20220301`.
pub fn format_date(t: DateTime) -> String {
    t.format("%Y%m%d").to_string()
}

/// Format a date time into a compact ISO8601 timestamp like `20220301T120000Z`.
pub fn format_iso8601(t: DateTime) -> String {
    t.format("%Y%m%dT%H%M%SZ").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format() {
        let t = Utc.with_ymd_and_hms(2022, 3, 1, 8, 12, 34).unwrap();

        assert_eq!(format_date(t), "20220301");
        assert_eq!(format_iso8601(t), "20220301T081234Z");
        // The short date must be a prefix of the full timestamp.
        assert!(format_iso8601(t).starts_with(&format_date(t)));
    }
}
