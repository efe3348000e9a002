use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, NaiveTime};

const SECONDS_PER_DAY: f64 = 60.0 * 60.0 * 24.0;

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: [&str; 3] = [
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
];
const DISPLAY_FORMAT: &str = "%d/%m/%Y";

/// The current local calendar date, time of day discarded.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses the date formats a trip sheet is known to serve.
/// Timestamps carrying an offset are moved into local time before the
/// time of day is dropped, so the result is the date a local reader sees.
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(value, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(value) {
        return Some(date_time.with_timezone(&Local).date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|date_time| date_time.date())
}

/// Whole days from `from` until `to`, rounded up.
/// Both ends are taken at midnight, negative when `to` lies in the past.
pub fn days_until(from: NaiveDate, to: NaiveDate) -> i64 {
    let seconds = (midnight(to) - midnight(from)).num_seconds();
    (seconds as f64 / SECONDS_PER_DAY).ceil() as i64
}

pub fn format_date(date: NaiveDate) -> String {
    date.format(DISPLAY_FORMAT).to_string()
}

fn midnight(date: NaiveDate) -> NaiveDateTime {
    date.and_time(NaiveTime::MIN)
}

#[test]
fn parse_plain_date() {
    let date = parse_date("2026-03-01").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
}

#[test]
fn parse_date_time_drops_time() {
    let date = parse_date("2026-03-01T18:45:00").unwrap();
    assert_eq!(date, NaiveDate::from_ymd_opt(2026, 3, 1).unwrap())
}

#[test]
fn parse_empty_date() {
    assert!(parse_date("  ").is_none())
}

#[test]
fn parse_garbage_date() {
    assert!(parse_date("next tuesday").is_none())
}

#[test]
fn days_until_same_day() {
    let day = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(days_until(day, day), 0)
}

#[test]
fn days_until_past_is_negative() {
    let from = NaiveDate::from_ymd_opt(2026, 3, 10).unwrap();
    let to = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(days_until(from, to), -9)
}

#[test]
fn days_until_across_leap_day() {
    let from = NaiveDate::from_ymd_opt(2028, 2, 28).unwrap();
    let to = NaiveDate::from_ymd_opt(2028, 3, 1).unwrap();
    assert_eq!(days_until(from, to), 2)
}

#[test]
fn format_display_date() {
    let date = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    assert_eq!(format_date(date), "01/03/2026")
}
