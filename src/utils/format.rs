//! Format - Formatting Utilities

use chrono::{DateTime, Local, NaiveDate, Utc};

/// Format a UTC datetime as a local calendar date
pub fn format_date(dt: &DateTime<Utc>) -> String {
    let local: DateTime<Local> = dt.with_timezone(&Local);
    local.format("%Y-%m-%d").to_string()
}

/// Format a calendar date
pub fn format_naive_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Format a file size in kilobytes with one decimal
pub fn format_kilobytes(bytes: u64) -> String {
    format!("{:.1} KB", bytes as f64 / 1024.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kilobytes_have_one_decimal() {
        assert_eq!(format_kilobytes(0), "0.0 KB");
        assert_eq!(format_kilobytes(1536), "1.5 KB");
        assert_eq!(format_kilobytes(2_097_152), "2048.0 KB");
    }

    #[test]
    fn naive_date_is_iso() {
        let date = NaiveDate::from_ymd_opt(2024, 9, 2).expect("valid date");
        assert_eq!(format_naive_date(&date), "2024-09-02");
    }
}
