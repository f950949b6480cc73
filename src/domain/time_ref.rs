//! User-facing date arguments (`today`, `last monday`, `2025-01-17`, ...)

use crate::domain::entry::DATE_FORMAT;
use crate::error::{DiaryError, Result};
use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// A date as typed by the user, resolved against "today" on demand
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Today if it is that weekday, otherwise its most recent occurrence
    Weekday(Weekday),
    /// Occurrence strictly before today
    LastWeekday(Weekday),
    /// Occurrence strictly after today
    NextWeekday(Weekday),
    SpecificDate(NaiveDate),
}

impl TimeReference {
    pub fn parse(input: &str) -> Result<Self> {
        let normalized = input.trim().to_lowercase();
        let invalid = || DiaryError::InvalidTimeReference(input.to_string());

        match normalized.as_str() {
            "today" | "now" => return Ok(TimeReference::Today),
            "yesterday" => return Ok(TimeReference::Yesterday),
            "tomorrow" => return Ok(TimeReference::Tomorrow),
            _ => {}
        }

        if let Some(rest) = normalized.strip_prefix("last ") {
            return weekday_from_name(rest.trim())
                .map(TimeReference::LastWeekday)
                .ok_or_else(invalid);
        }
        if let Some(rest) = normalized.strip_prefix("next ") {
            return weekday_from_name(rest.trim())
                .map(TimeReference::NextWeekday)
                .ok_or_else(invalid);
        }
        if let Some(weekday) = weekday_from_name(&normalized) {
            return Ok(TimeReference::Weekday(weekday));
        }

        NaiveDate::parse_from_str(&normalized, DATE_FORMAT)
            .map(TimeReference::SpecificDate)
            .map_err(|_| invalid())
    }

    pub fn resolve(&self, today: NaiveDate) -> NaiveDate {
        match self {
            TimeReference::Today => today,
            TimeReference::Yesterday => today - Duration::days(1),
            TimeReference::Tomorrow => today + Duration::days(1),
            TimeReference::Weekday(day) => today - Duration::days(days_since(today, *day)),
            TimeReference::LastWeekday(day) => {
                let back = match days_since(today, *day) {
                    0 => 7,
                    n => n,
                };
                today - Duration::days(back)
            }
            TimeReference::NextWeekday(day) => {
                let ahead = match (7 - days_since(today, *day)) % 7 {
                    0 => 7,
                    n => n,
                };
                today + Duration::days(ahead)
            }
            TimeReference::SpecificDate(date) => *date,
        }
    }
}

/// Parse and resolve in one step
pub fn resolve_date(input: &str, today: NaiveDate) -> Result<NaiveDate> {
    Ok(TimeReference::parse(input)?.resolve(today))
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name {
        "monday" | "mon" => Some(Weekday::Mon),
        "tuesday" | "tue" => Some(Weekday::Tue),
        "wednesday" | "wed" => Some(Weekday::Wed),
        "thursday" | "thu" => Some(Weekday::Thu),
        "friday" | "fri" => Some(Weekday::Fri),
        "saturday" | "sat" => Some(Weekday::Sat),
        "sunday" | "sun" => Some(Weekday::Sun),
        _ => None,
    }
}

/// Days from the most recent `target` (today included) to `today`, 0..=6
fn days_since(today: NaiveDate, target: Weekday) -> i64 {
    let current = today.weekday().num_days_from_monday() as i64;
    let target = target.num_days_from_monday() as i64;
    (current - target).rem_euclid(7)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    // Friday
    fn base() -> NaiveDate {
        day(2025, 1, 17)
    }

    #[test]
    fn test_parse_simple_refs() {
        assert_eq!(TimeReference::parse("today").unwrap(), TimeReference::Today);
        assert_eq!(TimeReference::parse("NOW").unwrap(), TimeReference::Today);
        assert_eq!(
            TimeReference::parse("yesterday").unwrap(),
            TimeReference::Yesterday
        );
        assert_eq!(
            TimeReference::parse(" tomorrow ").unwrap(),
            TimeReference::Tomorrow
        );
    }

    #[test]
    fn test_parse_weekdays() {
        assert_eq!(
            TimeReference::parse("monday").unwrap(),
            TimeReference::Weekday(Weekday::Mon)
        );
        assert_eq!(
            TimeReference::parse("last fri").unwrap(),
            TimeReference::LastWeekday(Weekday::Fri)
        );
        assert_eq!(
            TimeReference::parse("next sunday").unwrap(),
            TimeReference::NextWeekday(Weekday::Sun)
        );
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            TimeReference::parse("2025-01-17").unwrap(),
            TimeReference::SpecificDate(day(2025, 1, 17))
        );
    }

    #[test]
    fn test_parse_invalid() {
        assert!(TimeReference::parse("invalid").is_err());
        assert!(TimeReference::parse("2025-13-01").is_err());
        assert!(TimeReference::parse("17-01-2025").is_err());
        assert!(matches!(
            TimeReference::parse("last someday"),
            Err(DiaryError::InvalidTimeReference(s)) if s == "last someday"
        ));
    }

    #[test]
    fn test_resolve_relative_days() {
        assert_eq!(TimeReference::Today.resolve(base()), base());
        assert_eq!(TimeReference::Yesterday.resolve(base()), day(2025, 1, 16));
        assert_eq!(TimeReference::Tomorrow.resolve(base()), day(2025, 1, 18));
    }

    #[test]
    fn test_resolve_weekday() {
        assert_eq!(TimeReference::Weekday(Weekday::Fri).resolve(base()), base());
        assert_eq!(
            TimeReference::Weekday(Weekday::Mon).resolve(base()),
            day(2025, 1, 13)
        );
        assert_eq!(
            TimeReference::Weekday(Weekday::Sat).resolve(base()),
            day(2025, 1, 11)
        );
    }

    #[test]
    fn test_resolve_last_weekday() {
        assert_eq!(
            TimeReference::LastWeekday(Weekday::Mon).resolve(base()),
            day(2025, 1, 13)
        );
        assert_eq!(
            TimeReference::LastWeekday(Weekday::Fri).resolve(base()),
            day(2025, 1, 10)
        );
    }

    #[test]
    fn test_resolve_next_weekday() {
        assert_eq!(
            TimeReference::NextWeekday(Weekday::Mon).resolve(base()),
            day(2025, 1, 20)
        );
        assert_eq!(
            TimeReference::NextWeekday(Weekday::Fri).resolve(base()),
            day(2025, 1, 24)
        );
        // Tuesday, Feb 3 2026: next friday is the same week
        assert_eq!(
            TimeReference::NextWeekday(Weekday::Fri).resolve(day(2026, 2, 3)),
            day(2026, 2, 6)
        );
    }

    #[test]
    fn test_resolve_date_helper() {
        assert_eq!(resolve_date("yesterday", base()).unwrap(), day(2025, 1, 16));
        assert!(resolve_date("", base()).is_err());
    }
}
