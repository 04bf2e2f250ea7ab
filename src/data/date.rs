use chrono::{Datelike, NaiveDate, NaiveDateTime};

use crate::error::UnparseableDate;

/// Name of the column holding the event date.
pub const DATE_COLUMN: &str = "Fecha";

/// One accepted date layout.
///
/// Numeric fields must be plain ASCII digits: the year exactly four, every
/// other field one or two. `chrono` alone would also take signed or short
/// years and inner padding, which real catalog exports never mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateFormat {
    /// `chrono` format string.
    pub pattern: &'static str,
    /// Separator between day, month and year.
    pub separator: char,
    /// Position of the year among the three date fields.
    pub year_field: usize,
    /// Whether a ` HH:MM:SS` time of day follows the date.
    pub with_time: bool,
}

const fn date(pattern: &'static str, separator: char, year_field: usize) -> DateFormat {
    DateFormat {
        pattern,
        separator,
        year_field,
        with_time: false,
    }
}

/// Formats tried in order; the first that parses decides the year.
///
/// Ambiguous values such as `01/02/2020` resolve by position in this list,
/// so day/month/year always beats month/day/year.
pub const DATE_FORMATS: &[DateFormat] = &[
    date("%Y-%m-%d", '-', 0),
    DateFormat {
        pattern: "%Y-%m-%d %H:%M:%S",
        separator: '-',
        year_field: 0,
        with_time: true,
    },
    date("%d/%m/%Y", '/', 2),
    date("%Y/%m/%d", '/', 0),
    date("%d-%m-%Y", '-', 2),
    date("%m/%d/%Y", '/', 2),
];

/// Split `s` on `sep` into exactly three all-digit fields.
fn digit_fields(s: &str, sep: char) -> Option<[&str; 3]> {
    let mut parts = s.split(sep);
    let fields = [parts.next()?, parts.next()?, parts.next()?];
    if parts.next().is_some() {
        return None;
    }
    fields
        .iter()
        .all(|f| !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()))
        .then_some(fields)
}

impl DateFormat {
    fn has_strict_fields(self, s: &str) -> bool {
        let (date_part, time_part) = if self.with_time {
            match s.split_once(' ') {
                Some((d, t)) => (d, Some(t)),
                None => return false,
            }
        } else {
            (s, None)
        };

        let date_ok = digit_fields(date_part, self.separator).is_some_and(|fields| {
            fields.iter().enumerate().all(|(i, f)| {
                if i == self.year_field {
                    f.len() == 4
                } else {
                    f.len() <= 2
                }
            })
        });
        let time_ok = time_part.map_or(true, |t| {
            digit_fields(t, ':').is_some_and(|fields| fields.iter().all(|f| f.len() <= 2))
        });

        date_ok && time_ok
    }

    fn parse(self, s: &str) -> Option<NaiveDate> {
        if !self.has_strict_fields(s) {
            return None;
        }
        if self.with_time {
            NaiveDateTime::parse_from_str(s, self.pattern)
                .ok()
                .map(|dt| dt.date())
        } else {
            NaiveDate::parse_from_str(s, self.pattern).ok()
        }
    }
}

/// Calendar date of `raw`, using the first format in [`DATE_FORMATS`] that
/// accepts the whole (trimmed) string.
pub fn parse_date(raw: &str) -> Result<NaiveDate, UnparseableDate> {
    let s = raw.trim();
    DATE_FORMATS
        .iter()
        .find_map(|fmt| fmt.parse(s))
        .ok_or_else(|| UnparseableDate {
            value: s.to_string(),
        })
}

/// Calendar year of `raw`; see [`parse_date`].
pub fn normalize_year(raw: &str) -> Result<i32, UnparseableDate> {
    parse_date(raw).map(|d| d.year())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn iso_date() {
        assert_eq!(normalize_year("2020-03-15"), Ok(2020));
    }

    #[test]
    fn iso_datetime() {
        assert_eq!(parse_date("1985-09-19 07:17:49"), Ok(ymd(1985, 9, 19)));
    }

    #[test]
    fn day_month_year() {
        assert_eq!(parse_date("15/03/2020"), Ok(ymd(2020, 3, 15)));
        assert_eq!(normalize_year("15/03/2020"), Ok(2020));
    }

    #[test]
    fn year_month_day_with_slashes() {
        assert_eq!(parse_date("2017/09/07"), Ok(ymd(2017, 9, 7)));
    }

    #[test]
    fn day_month_year_with_dashes() {
        assert_eq!(parse_date("07-09-2017"), Ok(ymd(2017, 9, 7)));
    }

    #[test]
    fn month_day_year_only_when_day_first_is_impossible() {
        assert_eq!(parse_date("09/19/1985"), Ok(ymd(1985, 9, 19)));
    }

    #[test]
    fn ambiguous_value_follows_priority_not_plausibility() {
        // day/month/year is listed before month/day/year
        assert_eq!(parse_date("01/02/2020"), Ok(ymd(2020, 2, 1)));
    }

    #[test]
    fn surrounding_whitespace_is_ignored() {
        assert_eq!(normalize_year("  2019-06-01 \t"), Ok(2019));
    }

    #[test]
    fn garbage_is_unparseable() {
        assert_eq!(
            normalize_year("not-a-date"),
            Err(UnparseableDate {
                value: "not-a-date".into()
            })
        );
        assert!(normalize_year("").is_err());
    }

    #[test]
    fn short_years_are_rejected() {
        for raw in ["15/03/20", "1/1/99", "20-03-15"] {
            assert_eq!(
                normalize_year(raw),
                Err(UnparseableDate { value: raw.into() }),
                "{raw}"
            );
        }
    }

    #[test]
    fn signed_years_are_rejected() {
        assert!(normalize_year("+2020-03-15").is_err());
        assert!(normalize_year("-2020-03-15").is_err());
    }

    #[test]
    fn inner_padding_is_rejected() {
        assert!(normalize_year("15/ 3/2020").is_err());
        assert!(normalize_year("2020-03-15  10:00:00").is_err());
        // only the ends of the value are trimmed
        assert_eq!(normalize_year(" 5/03/2020"), Ok(2020));
    }

    #[test]
    fn single_digit_day_and_month_are_accepted() {
        assert_eq!(parse_date("5/3/2020"), Ok(ymd(2020, 3, 5)));
        assert_eq!(parse_date("2020-3-5 7:05:09"), Ok(ymd(2020, 3, 5)));
    }

    #[test]
    fn impossible_calendar_dates_are_rejected() {
        assert!(normalize_year("2021-02-30").is_err());
        assert!(normalize_year("31/31/2021").is_err());
    }

    #[test]
    fn trailing_text_is_rejected() {
        assert!(normalize_year("2020-03-15T10:00:00").is_err());
    }
}
