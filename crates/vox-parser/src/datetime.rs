//! Due-date extraction: relative days, time of day, and `on <month> <day>`.

use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, NaiveTime};
use regex::{Captures, Regex};
use tracing::debug;

use crate::error::DateParseError;
use crate::matcher::CompiledLexicon;
use crate::text::remove_phrase;

static TIME_OF_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bat (\d{1,2})(?::?(\d{2}))?\s*(am|pm)?\b").expect("Invalid regex")
});
static MONTH_DAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\bon (\w+) (\d{1,2})(?:st|nd|rd|th)?\b").expect("Invalid regex")
});

const MONTHS: [(&str, &str); 12] = [
    ("january", "jan"),
    ("february", "feb"),
    ("march", "mar"),
    ("april", "apr"),
    ("may", "may"),
    ("june", "jun"),
    ("july", "jul"),
    ("august", "aug"),
    ("september", "sep"),
    ("october", "oct"),
    ("november", "nov"),
    ("december", "dec"),
];

/// A value pulled out of the text, plus the text left once its phrase is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Extraction<T> {
    pub value: T,
    pub remaining: String,
}

impl<T> Extraction<T> {
    fn untouched(value: T, text: &str) -> Self {
        Self {
            value,
            remaining: text.to_string(),
        }
    }
}

/// Find a due date in lowercased `text`, relative to `now`.
///
/// A relative-day phrase wins over an absolute date. The returned text has the
/// phrases that produced the date removed.
#[must_use]
pub fn extract_due_date(
    lexicon: &CompiledLexicon,
    text: &str,
    now: NaiveDateTime,
) -> Extraction<Option<NaiveDateTime>> {
    if let Some(found) = extract_relative(lexicon, text, now) {
        return found;
    }

    let Some(caps) = MONTH_DAY.captures(text) else {
        return Extraction::untouched(None, text);
    };

    match month_day_in_year(&caps[1], &caps[2], now.year()) {
        Ok(date) => Extraction {
            value: Some(date.and_time(NaiveTime::MIN)),
            remaining: text.replacen(&caps[0], "", 1).trim().to_string(),
        },
        Err(error) => {
            debug!(%error, phrase = &caps[0], "ignoring unparseable date");
            Extraction::untouched(None, text)
        }
    }
}

fn extract_relative(
    lexicon: &CompiledLexicon,
    text: &str,
    now: NaiveDateTime,
) -> Option<Extraction<Option<NaiveDateTime>>> {
    let found = lexicon.relative_date_in(text)?;
    let due = Duration::try_days(found.days).and_then(|offset| now.checked_add_signed(offset));
    let Some(mut due) = due else {
        debug!(phrase = found.phrase, days = found.days, "relative date out of range");
        return None;
    };
    let mut remaining = remove_phrase(text, found.phrase).trim().to_string();

    if let Some(caps) = TIME_OF_DAY.captures(text) {
        match time_of_day(&caps) {
            Some(time) => {
                due = due.date().and_time(time);
                remaining = remaining.replacen(&caps[0], "", 1).trim().to_string();
            }
            None => debug!(phrase = &caps[0], "ignoring invalid time of day"),
        }
    }

    Some(Extraction {
        value: Some(due),
        remaining,
    })
}

/// Convert `at H[:MM][am|pm]` captures to a 24-hour time.
fn time_of_day(caps: &Captures<'_>) -> Option<NaiveTime> {
    let mut hour: u32 = caps.get(1)?.as_str().parse().ok()?;
    let minute: u32 = match caps.get(2) {
        Some(raw) => raw.as_str().parse().ok()?,
        None => 0,
    };
    match caps.get(3).map(|period| period.as_str()) {
        Some("pm") if hour < 12 => hour += 12,
        Some("am") if hour == 12 => hour = 0,
        _ => {}
    }
    NaiveTime::from_hms_opt(hour, minute, 0)
}

/// Resolve a month name and day number in `year`.
pub fn month_day_in_year(month: &str, day: &str, year: i32) -> Result<NaiveDate, DateParseError> {
    let month_number = month_number(month)
        .ok_or_else(|| DateParseError::UnknownMonth(month.to_string()))?;
    let invalid_day = || DateParseError::InvalidDay {
        raw: day.to_string(),
        month: month_number,
        year,
    };
    let day_number: u32 = day.parse().map_err(|_| invalid_day())?;
    NaiveDate::from_ymd_opt(year, month_number, day_number).ok_or_else(invalid_day)
}

fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();
    let name = if name == "sept" { "sep".to_string() } else { name };
    let position = MONTHS
        .iter()
        .position(|(full, short)| name == *full || name == *short)?;
    u32::try_from(position + 1).ok()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::*;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 10, 14)
            .and_then(|d| d.and_hms_opt(9, 41, 7))
            .unwrap()
    }

    fn at(day: u32, hour: u32, minute: u32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(2026, 10, day).and_then(|d| d.and_hms_opt(hour, minute, 0))
    }

    fn extract(text: &str) -> Extraction<Option<NaiveDateTime>> {
        extract_due_date(&CompiledLexicon::default(), text, now())
    }

    #[test]
    fn relative_date_keeps_reference_time() {
        let found = extract("pay rent tomorrow");
        assert_eq!(
            found.value,
            NaiveDate::from_ymd_opt(2026, 10, 15).and_then(|d| d.and_hms_opt(9, 41, 7))
        );
        assert_eq!(found.remaining, "pay rent");
    }

    #[rstest]
    #[case("standup tomorrow at 12:00am", at(15, 0, 0))]
    #[case("lunch tomorrow at 12:00pm", at(15, 12, 0))]
    #[case("movie tomorrow at 9:30pm", at(15, 21, 30))]
    #[case("call today at 3pm", at(14, 15, 0))]
    #[case("call today at 7", at(14, 7, 0))]
    #[case("gym next week at 0630", at(21, 6, 30))]
    fn twelve_hour_conversion(#[case] text: &str, #[case] expected: Option<NaiveDateTime>) {
        assert_eq!(extract(text).value, expected);
    }

    #[test]
    fn time_phrase_is_stripped() {
        let found = extract("dentist in 2 days at 10:15 am please");
        assert_eq!(found.value, at(16, 10, 15));
        assert_eq!(found.remaining, "dentist   please");
    }

    #[test]
    fn invalid_time_keeps_date_and_phrase() {
        let found = extract("party today at 25pm");
        assert_eq!(
            found.value,
            NaiveDate::from_ymd_opt(2026, 10, 14).and_then(|d| d.and_hms_opt(9, 41, 7))
        );
        assert_eq!(found.remaining, "party  at 25pm");
    }

    #[test]
    fn time_without_relative_date_is_ignored() {
        let found = extract("call bob at 3pm");
        assert_eq!(found.value, None);
        assert_eq!(found.remaining, "call bob at 3pm");
    }

    #[rstest]
    #[case("renew passport on march 3rd", 3, 3)]
    #[case("file taxes on april 15", 4, 15)]
    #[case("send card on dec 24th", 12, 24)]
    #[case("pick apples on sept 2nd", 9, 2)]
    fn absolute_dates_use_reference_year(
        #[case] text: &str,
        #[case] month: u32,
        #[case] day: u32,
    ) {
        let found = extract(text);
        assert_eq!(
            found.value,
            NaiveDate::from_ymd_opt(2026, month, day).map(|d| d.and_time(NaiveTime::MIN))
        );
        assert!(!found.remaining.contains(" on "));
    }

    #[test]
    fn absolute_phrase_is_stripped() {
        let found = extract("renew passport on march 3rd");
        assert_eq!(found.remaining, "renew passport");
    }

    #[rstest]
    #[case("party on february 30")]
    #[case("meet on monday 5")]
    #[case("sleep on it")]
    fn malformed_absolute_dates_yield_nothing(#[case] text: &str) {
        let found = extract(text);
        assert_eq!(found.value, None);
        assert_eq!(found.remaining, text);
    }

    #[test]
    fn relative_date_wins_over_absolute() {
        let found = extract("tomorrow or on march 3");
        assert_eq!(found.value.map(|d| d.date()), NaiveDate::from_ymd_opt(2026, 10, 15));
        assert_eq!(found.remaining, "or on march 3");
    }

    #[test]
    fn month_day_reports_reason() {
        assert_eq!(
            month_day_in_year("smarch", "1", 2026),
            Err(DateParseError::UnknownMonth("smarch".into()))
        );
        assert!(matches!(
            month_day_in_year("february", "29", 2026),
            Err(DateParseError::InvalidDay { month: 2, .. })
        ));
        assert_eq!(
            month_day_in_year("february", "29", 2028),
            Ok(NaiveDate::from_ymd_opt(2028, 2, 29).unwrap())
        );
    }

    #[rstest]
    #[case(i64::MAX / 2)]
    #[case(400_000_000)]
    #[case(i64::MIN)]
    fn unrepresentable_offset_means_no_date(#[case] days: i64) {
        let lexicon = CompiledLexicon::from_valid(&vox_core::Lexicon {
            relative_dates: vec![vox_core::lexicon::RelativeDateEntry {
                phrase: "someday".into(),
                days,
            }],
            ..vox_core::Lexicon::builtin()
        });
        let found = extract_due_date(&lexicon, "fix bike someday", now());
        assert_eq!(found.value, None);
        assert_eq!(found.remaining, "fix bike someday");
    }
}
