// src/format.rs
//
// Display helpers shared by the GUI tables and the CLI.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::model::Krw;

/// `1234567` → `1,234,567`
pub fn thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// `1,234원` style, used in the purchase views.
pub fn won(amount: Krw) -> String {
    let sign = if amount.0 < 0 { "-" } else { "" };
    format!("{sign}{}원", thousands(amount.0.unsigned_abs()))
}

pub fn opt_krw(amount: Option<Krw>) -> String {
    amount.map(|a| a.to_string()).unwrap_or_else(|| s!("-"))
}

/// Discount badge text, rate given in percent: `30.0` → `-30%`.
/// Zero or missing rates produce no badge.
pub fn discount_badge(rate: Option<f64>) -> Option<String> {
    let r = rate.filter(|r| *r > 0.0)?;
    Some(format!("-{:.0}%", r))
}

pub fn percent(v: f64) -> String {
    format!("{v:.1}%")
}

/// First ten characters of an ISO timestamp (`2026-03-01T02:00:00` → `2026-03-01`).
/// Falls back to `-` for missing values.
pub fn date_prefix(raw: Option<&str>) -> String {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => match parse_date(s) {
            Some(d) => d.format("%Y-%m-%d").to_string(),
            None => s.chars().take(10).collect(),
        },
        None => s!("-"),
    }
}

/// Date part of an ISO date / datetime / RFC 3339 string.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Some(dt.date());
        }
    }
    raw.get(..10).and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
}

/// Tenure text: `2019 ~ 현재`, `2012 ~ 2018`, `? ~ 2018`.
pub fn year_range(start: Option<i32>, end: Option<i32>) -> String {
    let start = start.map(|y| y.to_string()).unwrap_or_else(|| s!("?"));
    let end = end.map(|y| y.to_string()).unwrap_or_else(|| s!("현재"));
    format!("{start} ~ {end}")
}

pub fn or_dash(v: Option<&str>) -> &str {
    v.filter(|s| !s.is_empty()).unwrap_or("-")
}

/// Background and text colors (RGB) for a purchase grade badge.
pub fn grade_colors(grade: &str) -> ([u8; 3], [u8; 3]) {
    match grade.trim().to_ascii_uppercase().as_str() {
        "S" => ([0xFA, 0xCC, 0x15], [0x1C, 0x19, 0x17]),
        "A" => ([0x10, 0xB9, 0x81], [0xFF, 0xFF, 0xFF]),
        "B" => ([0x3B, 0x82, 0xF6], [0xFF, 0xFF, 0xFF]),
        "C" => ([0xF9, 0x73, 0x16], [0xFF, 0xFF, 0xFF]),
        "D" => ([0xEF, 0x44, 0x44], [0xFF, 0xFF, 0xFF]),
        _ => ([0x9C, 0xA3, 0xAF], [0xFF, 0xFF, 0xFF]),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn thousands_groups_by_three() {
        assert_eq!(thousands(0), "0");
        assert_eq!(thousands(999), "999");
        assert_eq!(thousands(1000), "1,000");
        assert_eq!(thousands(1_234_567), "1,234,567");
    }

    #[test]
    fn discount_badge_rounds_percent() {
        assert_eq!(discount_badge(Some(29.6)).as_deref(), Some("-30%"));
        assert_eq!(discount_badge(Some(45.0)).as_deref(), Some("-45%"));
        assert_eq!(discount_badge(Some(0.0)), None);
        assert_eq!(discount_badge(None), None);
    }

    #[test]
    fn date_prefix_handles_common_shapes() {
        assert_eq!(date_prefix(Some("2026-03-01T02:00:00")), "2026-03-01");
        assert_eq!(date_prefix(Some("2026-03-01T02:00:00.123456")), "2026-03-01");
        assert_eq!(date_prefix(Some("2026-03-01T02:00:00+09:00")), "2026-03-01");
        assert_eq!(date_prefix(Some("2026-03-01")), "2026-03-01");
        assert_eq!(date_prefix(Some("soon")), "soon");
        assert_eq!(date_prefix(None), "-");
    }

    #[test]
    fn year_range_marks_open_tenure_as_current() {
        assert_eq!(year_range(Some(2019), None), "2019 ~ 현재");
        assert_eq!(year_range(None, Some(2018)), "? ~ 2018");
    }

    #[test]
    fn won_suffix() {
        assert_eq!(won(Krw(1234)), "1,234원");
    }
}
