//! Compact date encodings and small time helpers.

use chrono::{DateTime, NaiveDate, Utc};

const BASE36: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const BASE62: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Format a short sortable date code from an ISO date or datetime string.
///
/// Year A=2010 .. L=2021, month 1-9ABC (C=December), two-digit day. The
/// code sorts like the date but takes 60% less room in print. A date-only
/// input gives the day form; with a time part, hours and minutes follow.
/// Years outside 2000..=2035 (and malformed input) give `None`.
///
/// ```
/// use densejson::dating::short_date;
///
/// assert_eq!(short_date("2010-12-24"), Some("AC24".to_string()));
/// assert_eq!(short_date("2010-12-24T07:06"), Some("AC24-0706".to_string()));
/// assert_eq!(short_date("1971-02-24"), None);
/// ```
pub fn short_date(iso: &str) -> Option<String> {
    let year: usize = iso.get(0..4)?.parse().ok()?;
    if !(2000..=2035).contains(&year) {
        return None;
    }
    let month: usize = iso.get(5..7)?.parse().ok()?;
    if month == 0 || month > 12 {
        return None;
    }
    let day = iso.get(8..10)?;
    let yr = BASE36[year - 2000] as char;
    let mn = BASE36[month] as char;
    if iso.len() == 10 {
        return Some(format!("{}{}{}", yr, mn, day));
    }
    let hour = iso.get(11..13)?;
    let minute = iso.get(14..16)?;
    Some(format!("{}{}{}-{}{}", yr, mn, day, hour, minute))
}

/// Decode the day-only form produced by [`short_date`].
///
/// ```
/// use chrono::NaiveDate;
/// use densejson::dating::parse_short_date;
///
/// assert_eq!(parse_short_date("AC24"), NaiveDate::from_ymd_opt(2010, 12, 24));
/// ```
pub fn parse_short_date(code: &str) -> Option<NaiveDate> {
    let mut chars = code.chars();
    let y = chars.next()?;
    let m = chars.next()?;
    let year = if y.is_ascii_digit() {
        2000 + y.to_digit(10)? as i32
    } else if y.is_ascii_uppercase() {
        2010 + (y as i32 - 'A' as i32)
    } else {
        return None;
    };
    let month = if m.is_ascii_digit() {
        m.to_digit(10)?
    } else if m.is_ascii_uppercase() {
        10 + (m as u32 - 'A' as u32)
    } else {
        return None;
    };
    let day: u32 = code.get(2..)?.parse().ok()?;
    NaiveDate::from_ymd_opt(year, month, day)
}

/// Very short string representation of an integer: strictly ascending
/// base-62, zero-padded to `pad` characters.
///
/// ```
/// use densejson::dating::number62;
///
/// assert_eq!(number62(0, 3), "000");
/// assert_eq!(number62(61, 3), "00z");
/// assert_eq!(number62(62, 3), "010");
/// ```
pub fn number62(mut n: u64, pad: usize) -> String {
    if n == 0 {
        return "0".repeat(pad.max(1));
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push((n % 62) as usize);
        n /= 62;
    }
    let code: String = digits.iter().rev().map(|&d| BASE62[d] as char).collect();
    format!("{:0>pad$}", code)
}

/// Three-character base-62 code of the days elapsed since Jan 1, 1900.
/// Strictly ascending in the date; `None` for dates before 1900.
pub fn day_code62(date: NaiveDate) -> Option<String> {
    let epoch = NaiveDate::from_ymd_opt(1900, 1, 1)?;
    let days = (date - epoch).num_days();
    if days < 0 {
        return None;
    }
    Some(number62(days as u64, 3))
}

/// Check if a string has the shape of a 19xx/20xx ISO date (YYYY-MM-DD).
/// Shape only: `"2023-99-99"` passes.
pub fn is_iso_date(s: &str) -> bool {
    let b = s.as_bytes();
    b.len() == 10
        && (s.starts_with("19") || s.starts_with("20"))
        && b[..4].iter().all(u8::is_ascii_digit)
        && b[4] == b'-'
        && b[5..7].iter().all(u8::is_ascii_digit)
        && b[7] == b'-'
        && b[8..].iter().all(u8::is_ascii_digit)
}

/// Render a duration like `5d 10m 3.5s`, skipping zero parts. Anything
/// under a tenth of a second is `"no time"`.
///
/// ```
/// use densejson::dating::format_duration;
///
/// assert_eq!(format_duration(93784.5), "1d 2h 3m 4.5s");
/// assert_eq!(format_duration(0.05), "no time");
/// ```
pub fn format_duration(seconds: f64) -> String {
    let secs = seconds % 60.0;
    let mut rest = (seconds / 60.0).floor() as u64;
    let mins = rest % 60;
    rest /= 60;
    let hours = rest % 24;
    rest /= 24;
    let days = rest;

    let mut parts = Vec::new();
    if days > 0 {
        parts.push(format!("{}d", days));
    }
    if hours > 0 {
        parts.push(format!("{}h", hours));
    }
    if mins > 0 {
        parts.push(format!("{}m", mins));
    }
    if secs >= 0.1 {
        parts.push(format!("{:.1}s", secs));
    }
    if parts.is_empty() {
        return "no time".to_string();
    }
    parts.join(" ")
}

/// How many seconds ago this UTC timestamp was.
pub fn age_seconds(ts: DateTime<Utc>) -> i64 {
    (Utc::now() - ts).num_seconds()
}
