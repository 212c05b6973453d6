//! Match date parsing.
//!
//! Exports from different tracking vendors disagree on date layout, so
//! dates go through an ordered list of strategies and the first one that
//! recognises the text wins.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// A single date layout
#[derive(Debug, Clone, Copy)]
pub struct DateStrategy {
    /// Short name for logging
    pub name: &'static str,

    /// Parser returning `None` when the layout does not apply
    pub parse: fn(&str) -> Option<NaiveDate>,
}

/// Strategies in priority order
///
/// Slash dates are read day-first (`15/01/2024`).
pub const DATE_STRATEGIES: &[DateStrategy] = &[
    DateStrategy { name: "iso-date", parse: parse_iso_date },
    DateStrategy { name: "rfc3339", parse: parse_rfc3339 },
    DateStrategy { name: "iso-datetime", parse: parse_iso_datetime },
    DateStrategy { name: "day-month-year-slash", parse: parse_dmy_slash },
    DateStrategy { name: "day-month-year-dash", parse: parse_dmy_dash },
    DateStrategy { name: "day-month-name", parse: parse_day_month_name },
    DateStrategy { name: "month-name-day", parse: parse_month_name_day },
];

/// Run parsers in order and return the first success
///
/// **Public** - generic "first match wins" combinator
pub fn first_match<I: ?Sized, O>(parsers: &[fn(&I) -> Option<O>], input: &I) -> Option<O> {
    parsers.iter().find_map(|parse| parse(input))
}

/// Parse a match date with the default strategy list
///
/// **Public** - used for sorting and display
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    parse_date_with(DATE_STRATEGIES, text)
}

/// Parse a match date with a caller-supplied strategy list
pub fn parse_date_with(strategies: &[DateStrategy], text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    if text.is_empty() {
        return None;
    }

    let parsers: Vec<fn(&str) -> Option<NaiveDate>> = strategies.iter().map(|s| s.parse).collect();
    first_match(&parsers, text)
}

fn parse_iso_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn parse_rfc3339(text: &str) -> Option<NaiveDate> {
    DateTime::parse_from_rfc3339(text).ok().map(|dt| dt.date_naive())
}

fn parse_iso_datetime(text: &str) -> Option<NaiveDate> {
    ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
        .map(|dt| dt.date())
}

fn parse_dmy_slash(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%d/%m/%Y").ok()
}

fn parse_dmy_dash(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%d-%m-%Y").ok()
}

fn parse_day_month_name(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%d %b %Y").ok()
}

fn parse_month_name_day(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%b %d, %Y").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn test_iso_date() {
        assert_eq!(parse_date("2024-01-15"), ymd(2024, 1, 15));
    }

    #[test]
    fn test_timestamps() {
        assert_eq!(parse_date("2024-01-15T19:45:00Z"), ymd(2024, 1, 15));
        assert_eq!(parse_date("2024-01-15 19:45:00"), ymd(2024, 1, 15));
        assert_eq!(parse_date("2024-01-15 19:45"), ymd(2024, 1, 15));
    }

    #[test]
    fn test_day_first_slash() {
        assert_eq!(parse_date("15/01/2024"), ymd(2024, 1, 15));
        assert_eq!(parse_date("02/03/2024"), ymd(2024, 3, 2));
    }

    #[test]
    fn test_month_names() {
        assert_eq!(parse_date("15 Jan 2024"), ymd(2024, 1, 15));
        assert_eq!(parse_date("Jan 15, 2024"), ymd(2024, 1, 15));
    }

    #[test]
    fn test_unparseable() {
        assert_eq!(parse_date(""), None);
        assert_eq!(parse_date("next tuesday"), None);
        assert_eq!(parse_date("32/13/2024"), None);
    }

    #[test]
    fn test_first_match_short_circuits() {
        fn none(_: &str) -> Option<u8> {
            None
        }
        fn one(_: &str) -> Option<u8> {
            Some(1)
        }
        fn two(_: &str) -> Option<u8> {
            Some(2)
        }

        let parsers: [fn(&str) -> Option<u8>; 3] = [none, one, two];
        assert_eq!(first_match(&parsers, "x"), Some(1));
        assert_eq!(first_match::<str, u8>(&[], "x"), None);
    }

    #[test]
    fn test_custom_strategy_list() {
        let only_slash = [DATE_STRATEGIES[3]];
        assert_eq!(parse_date_with(&only_slash, "2024-01-15"), None);
        assert_eq!(parse_date_with(&only_slash, "15/01/2024"), ymd(2024, 1, 15));
    }
}
