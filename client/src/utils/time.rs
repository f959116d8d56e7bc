use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Returns the current time in the given timezone.
pub fn now_in_timezone(tz: &Tz) -> DateTime<Tz> {
    Utc::now().with_timezone(tz)
}

/// Returns today's date in the given timezone.
pub fn today_in_timezone(tz: &Tz) -> NaiveDate {
    now_in_timezone(tz).date_naive()
}

pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// Shows `HH:mm` even when the server sent `HH:mm:ss`.
pub fn hhmm(time: &str) -> &str {
    match time.get(..5) {
        Some(prefix) => prefix,
        None => time,
    }
}

/// `yyyy-MM-dd` to `dd MMM yyyy`; unparsable input comes back unchanged.
pub fn format_date(iso: &str) -> String {
    match parse_iso_date(iso) {
        Some(date) => date.format("%d %b %Y").to_string(),
        None => iso.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn now_in_timezone_returns_datetime_in_tz() {
        let tz: Tz = "Africa/Johannesburg".parse().unwrap();
        assert_eq!(now_in_timezone(&tz).timezone(), tz);
    }

    #[test]
    fn today_in_timezone_matches_utc_for_utc() {
        let today = today_in_timezone(&chrono_tz::UTC);
        let diff = (today - Utc::now().date_naive()).num_days().abs();
        assert!(diff <= 1);
    }

    #[test]
    fn parse_iso_date_rejects_other_formats() {
        assert_eq!(
            parse_iso_date("2024-06-12"),
            NaiveDate::from_ymd_opt(2024, 6, 12)
        );
        assert!(parse_iso_date("12/06/2024").is_none());
        assert!(parse_iso_date("2024-02-30").is_none());
        assert!(parse_iso_date("").is_none());
    }

    #[test]
    fn hhmm_trims_seconds() {
        assert_eq!(hhmm("08:30:00"), "08:30");
        assert_eq!(hhmm("08:30"), "08:30");
        assert_eq!(hhmm("8:3"), "8:3");
        assert_eq!(hhmm(""), "");
    }

    #[test]
    fn format_date_uses_day_month_year() {
        assert_eq!(format_date("2024-06-12"), "12 Jun 2024");
        assert_eq!(format_date("soon"), "soon");
    }
}
