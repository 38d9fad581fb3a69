use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Parses the ISO-8601 shapes found in authored content.
///
/// Accepts RFC 3339 timestamps, naive timestamps with a `T` or space separator
/// (read as UTC, seconds optional), plain `YYYY-MM-DD` dates and reduced
/// `YYYY-MM` months. Dates without a time are midnight UTC, months their first day.
pub fn parse_iso_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Some(naive) = NAIVE_TIMESTAMP_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
    {
        return Some(naive.and_utc());
    }

    let date = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(&format!("{}-01", raw), "%Y-%m-%d"))
        .ok()?;
    date.and_hms_opt(0, 0, 0).map(|naive| naive.and_utc())
}

const NAIVE_TIMESTAMP_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Long-form date such as `January 5, 2024`; unparseable input is returned as is.
pub fn format_display_date(raw: &str) -> String {
    parse_iso_date(raw)
        .map(|dt| dt.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn parses_plain_dates_as_midnight_utc() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_iso_date("2024-03-01"), Some(expected));
    }

    #[test]
    fn parses_rfc3339_with_offset() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 8, 0, 0).unwrap();
        assert_eq!(parse_iso_date("2024-03-01T10:00:00+02:00"), Some(expected));
    }

    #[test]
    fn parses_naive_timestamps() {
        let expected = Utc.with_ymd_and_hms(2024, 3, 1, 10, 30, 0).unwrap();
        assert_eq!(parse_iso_date("2024-03-01T10:30:00"), Some(expected));
    }

    #[test]
    fn parses_space_separated_timestamps() {
        let expected = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        assert_eq!(parse_iso_date("2024-01-01 10:00:00"), Some(expected));
        assert_eq!(parse_iso_date("2024-01-01 10:00"), Some(expected));
    }

    #[test]
    fn reduced_month_is_first_day() {
        let expected = Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap();
        assert_eq!(parse_iso_date("2024-06"), Some(expected));
        assert_eq!(format_display_date("2024-06"), "June 1, 2024");
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_iso_date("yesterday"), None);
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("2024-13-40"), None);
        assert_eq!(parse_iso_date("2024"), None);
        assert_eq!(parse_iso_date("2024-13"), None);
    }

    #[test]
    fn formats_long_dates() {
        assert_eq!(format_display_date("2024-01-05"), "January 5, 2024");
        assert_eq!(format_display_date("not a date"), "not a date");
    }
}
