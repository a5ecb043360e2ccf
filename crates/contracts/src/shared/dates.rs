//! Date helpers shared by the filters, forms and reports.

use chrono::NaiveDate;

const ISO_FORMAT: &str = "%Y-%m-%d";
const BR_FORMAT: &str = "%d/%m/%Y";

/// Strict `YYYY-MM-DD` parse. Anything else is `None`, never an error — the
/// date-range filter treats a malformed bound as "no constraint".
pub fn parse_iso_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), ISO_FORMAT).ok()
}

/// Example: 2025-11-10 -> "10/11/2025"
pub fn format_date_br(date: NaiveDate) -> String {
    date.format(BR_FORMAT).to_string()
}

/// Formats an ISO string for display, returning the input unchanged when it
/// does not parse.
pub fn format_date_br_str(value: &str) -> String {
    match parse_iso_date(value) {
        Some(date) => format_date_br(date),
        None => value.to_string(),
    }
}

pub fn to_iso(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strict_iso_dates() {
        assert_eq!(
            parse_iso_date("2025-11-10"),
            NaiveDate::from_ymd_opt(2025, 11, 10)
        );
        assert_eq!(parse_iso_date(" 2025-11-10 "), NaiveDate::from_ymd_opt(2025, 11, 10));
    }

    #[test]
    fn rejects_everything_else_quietly() {
        assert_eq!(parse_iso_date(""), None);
        assert_eq!(parse_iso_date("10/11/2025"), None);
        assert_eq!(parse_iso_date("2025-13-40"), None);
    }

    #[test]
    fn formats_brazilian_dates() {
        let date = NaiveDate::from_ymd_opt(2025, 11, 10).unwrap();
        assert_eq!(format_date_br(date), "10/11/2025");
        assert_eq!(to_iso(date), "2025-11-10");
    }

    #[test]
    fn display_formatting_falls_back_to_input() {
        assert_eq!(format_date_br_str("2025-11-10"), "10/11/2025");
        assert_eq!(format_date_br_str("invalid"), "invalid");
    }
}
