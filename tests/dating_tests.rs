//! Tests for the compact date encodings.

use chrono::NaiveDate;
use densejson::dating::{
    day_code62, format_duration, is_iso_date, number62, parse_short_date, short_date,
};

// ============================================================================
// Short date codes
// ============================================================================

#[test]
fn day_only_form() {
    assert_eq!(short_date("2010-12-24").as_deref(), Some("AC24"));
    assert_eq!(short_date("2000-01-05").as_deref(), Some("0105"));
    assert_eq!(short_date("2021-11-16").as_deref(), Some("LB16"));
}

#[test]
fn with_time_form() {
    assert_eq!(short_date("2010-12-24T07:06").as_deref(), Some("AC24-0706"));
    assert_eq!(short_date("2010-12-24T07:06:32").as_deref(), Some("AC24-0706"));
}

#[test]
fn out_of_range_years_are_rejected() {
    assert_eq!(short_date("1971-02-24"), None);
    assert_eq!(short_date("2036-01-01"), None);
}

#[test]
fn malformed_input_is_rejected() {
    assert_eq!(short_date("not a date"), None);
    assert_eq!(short_date("2010-13-01"), None);
    assert_eq!(short_date("2010"), None);
}

#[test]
fn short_dates_sort_like_their_dates() {
    let a = short_date("2009-12-31").unwrap();
    let b = short_date("2010-01-01").unwrap();
    let c = short_date("2021-11-16").unwrap();
    assert!(a < b && b < c);
}

#[test]
fn parse_inverts_the_day_form() {
    assert_eq!(parse_short_date("AC24"), NaiveDate::from_ymd_opt(2010, 12, 24));
    assert_eq!(parse_short_date("LB16"), NaiveDate::from_ymd_opt(2021, 11, 16));
    assert_eq!(parse_short_date("0105"), NaiveDate::from_ymd_opt(2000, 1, 5));
    assert_eq!(parse_short_date(""), None);
    assert_eq!(parse_short_date("AC99"), None);
}

#[test]
fn short_date_roundtrip() {
    for iso in ["2003-02-28", "2010-01-01", "2019-06-30", "2035-12-31"] {
        let code = short_date(iso).unwrap();
        let back = parse_short_date(&code).unwrap();
        assert_eq!(back.to_string(), iso);
    }
}

// ============================================================================
// Base-62 day codes
// ============================================================================

#[test]
fn number62_basics() {
    assert_eq!(number62(0, 3), "000");
    assert_eq!(number62(9, 3), "009");
    assert_eq!(number62(10, 3), "00A");
    assert_eq!(number62(61, 3), "00z");
    assert_eq!(number62(62, 3), "010");
    assert_eq!(number62(100, 0), "1c");
}

#[test]
fn number62_is_strictly_ascending() {
    let mut previous = number62(0, 3);
    for n in 1..500 {
        let current = number62(n, 3);
        assert!(current > previous, "{} !> {}", current, previous);
        previous = current;
    }
}

#[test]
fn day_codes_start_at_the_1900_epoch() {
    assert_eq!(
        day_code62(NaiveDate::from_ymd_opt(1900, 1, 1).unwrap()).as_deref(),
        Some("000")
    );
    assert_eq!(
        day_code62(NaiveDate::from_ymd_opt(1900, 1, 2).unwrap()).as_deref(),
        Some("001")
    );
    assert_eq!(day_code62(NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()), None);
}

#[test]
fn day_codes_ascend_across_dates() {
    let early = day_code62(NaiveDate::from_ymd_opt(2010, 1, 1).unwrap()).unwrap();
    let late = day_code62(NaiveDate::from_ymd_opt(2022, 4, 16).unwrap()).unwrap();
    assert!(early < late);
}

// ============================================================================
// ISO shape check and durations
// ============================================================================

#[test]
fn iso_shape_check() {
    assert!(is_iso_date("2023-01-15"));
    assert!(is_iso_date("1999-12-31"));
    // Shape only; the calendar is not consulted.
    assert!(is_iso_date("2023-99-99"));

    assert!(!is_iso_date("2023-1-15"));
    assert!(!is_iso_date("3023-01-15"));
    assert!(!is_iso_date("2023-01-15T00:00"));
    assert!(!is_iso_date(""));
}

#[test]
fn duration_parts_compose() {
    assert_eq!(format_duration(93784.5), "1d 2h 3m 4.5s");
    assert_eq!(format_duration(3.5), "3.5s");
    assert_eq!(format_duration(65.0), "1m 5.0s");
    assert_eq!(format_duration(3600.0), "1h");
}

#[test]
fn negligible_durations_are_no_time() {
    assert_eq!(format_duration(0.05), "no time");
    assert_eq!(format_duration(0.0), "no time");
}

#[test]
fn age_of_a_past_timestamp_is_positive() {
    let ts = chrono::Utc::now() - chrono::Duration::seconds(5);
    let age = densejson::dating::age_seconds(ts);
    assert!((5..60).contains(&age), "got {}", age);
}
