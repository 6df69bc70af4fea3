//! Natural-language date/time resolution (the parsing collaborator).
//!
//! The extraction engine delegates primary date/time resolution through
//! the [`NaturalDateParser`] trait and only post-processes the first
//! result. [`RelativeDateParser`] is the built-in implementation: a
//! deterministic rule set over keyword tables and regexes — ISO and
//! written dates, weekdays, relative offsets, clock times, day anchors.
//! Everything is computed against the caller-supplied reference instant;
//! nothing here reads the wall clock.

use std::sync::LazyLock;

use chrono::{Datelike, Duration, NaiveDate, NaiveDateTime, Weekday};
use regex::Regex;

// ── Collaborator interface ──────────────────────────────────────────────

/// One resolved point in time from a text block.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedInstant {
    pub instant: NaiveDateTime,
    /// Whether the hour component was explicitly stated (versus inferred
    /// from the reference or a date-only phrase).
    pub hour_is_certain: bool,
}

/// A natural-language date/time parser.
///
/// Implementations return zero or more results ordered by position in the
/// text; the extractor takes the first. Dates resolve forward from the
/// reference instant.
pub trait NaturalDateParser: Send + Sync {
    fn parse(&self, text: &str, reference: NaiveDateTime) -> Vec<ParsedInstant>;
}

// ── Patterns ────────────────────────────────────────────────────────────

static RE_ISO_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(\d{4})-(\d{2})-(\d{2})(?:[T ](\d{2}):(\d{2}))?\b").unwrap()
});

static RE_WRITTEN_DATE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(january|february|march|april|may|june|july|august|september|october|november|december|jan|feb|mar|apr|jun|jul|aug|sep|oct|nov|dec)\.?\s+(\d{1,2})(?:st|nd|rd|th)?(?:,\s*(\d{4}))?\b",
    )
    .unwrap()
});

static RE_WEEKDAY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:next\s+|this\s+|on\s+)?(monday|tuesday|wednesday|thursday|friday|saturday|sunday)\b")
        .unwrap()
});

static RE_IN_OFFSET: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bin\s+(\d{1,3}|an?|a\s+few|a\s+couple(?:\s+of)?)\s+(minutes?|hours?|days?|weeks?)\b")
        .unwrap()
});

static RE_DAY_ANCHOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(day\s+after\s+tomorrow|tomorrow|tonight|today|this\s+(?:morning|afternoon|evening))\b")
        .unwrap()
});

static RE_CLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:at\s+)?(\d{1,2})(?::(\d{2}))?\s*(am|pm)\b").unwrap()
});

static RE_NOON_MIDNIGHT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(noon|midnight)\b").unwrap());

// ── RelativeDateParser ──────────────────────────────────────────────────

/// Built-in rule-based parser. Stateless and deterministic.
#[derive(Debug, Clone, Copy, Default)]
pub struct RelativeDateParser;

impl NaturalDateParser for RelativeDateParser {
    fn parse(&self, text: &str, reference: NaiveDateTime) -> Vec<ParsedInstant> {
        let mut found: Vec<(usize, ParsedInstant)> = Vec::new();

        found.extend(parse_iso_dates(text));
        found.extend(parse_written_dates(text, reference));
        found.extend(parse_weekdays(text, reference));
        found.extend(parse_relative_offsets(text, reference));
        found.extend(parse_day_anchors(text, reference));
        found.extend(parse_clock_times(text, reference));
        found.extend(parse_noon_midnight(text, reference));

        // Order by position in the text; the extractor takes the first.
        found.sort_by_key(|(offset, _)| *offset);
        found.into_iter().map(|(_, instant)| instant).collect()
    }
}

fn parse_iso_dates(text: &str) -> Vec<(usize, ParsedInstant)> {
    RE_ISO_DATE
        .captures_iter(text)
        .filter_map(|caps| {
            let year: i32 = caps[1].parse().ok()?;
            let month: u32 = caps[2].parse().ok()?;
            let day: u32 = caps[3].parse().ok()?;
            let date = NaiveDate::from_ymd_opt(year, month, day)?;
            let (hour, minute, certain) = match (caps.get(4), caps.get(5)) {
                (Some(h), Some(m)) => (h.as_str().parse().ok()?, m.as_str().parse().ok()?, true),
                _ => (0, 0, false),
            };
            let instant = date.and_hms_opt(hour, minute, 0)?;
            Some((
                caps.get(0).unwrap().start(),
                ParsedInstant {
                    instant,
                    hour_is_certain: certain,
                },
            ))
        })
        .collect()
}

fn parse_written_dates(text: &str, reference: NaiveDateTime) -> Vec<(usize, ParsedInstant)> {
    RE_WRITTEN_DATE
        .captures_iter(text)
        .filter_map(|caps| {
            let month = month_number(&caps[1])?;
            let day: u32 = caps[2].parse().ok()?;
            let explicit_year: Option<i32> = caps.get(3).and_then(|y| y.as_str().parse().ok());
            let year = explicit_year.unwrap_or(reference.year());
            let mut date = NaiveDate::from_ymd_opt(year, month, day)?;
            // Forward resolution: a bare "March 5" in April means next year.
            if explicit_year.is_none() && date < reference.date() {
                date = NaiveDate::from_ymd_opt(year + 1, month, day)?;
            }
            Some((
                caps.get(0).unwrap().start(),
                ParsedInstant {
                    instant: date.and_hms_opt(0, 0, 0)?,
                    hour_is_certain: false,
                },
            ))
        })
        .collect()
}

fn parse_weekdays(text: &str, reference: NaiveDateTime) -> Vec<(usize, ParsedInstant)> {
    RE_WEEKDAY
        .captures_iter(text)
        .filter_map(|caps| {
            let target = weekday_from_name(&caps[1])?;
            let today = reference.date().weekday().num_days_from_monday() as i64;
            let wanted = target.num_days_from_monday() as i64;
            let mut ahead = (wanted - today).rem_euclid(7);
            if ahead == 0 {
                ahead = 7;
            }
            let date = reference.date() + Duration::days(ahead);
            Some((
                caps.get(0).unwrap().start(),
                ParsedInstant {
                    instant: date.and_hms_opt(0, 0, 0)?,
                    hour_is_certain: false,
                },
            ))
        })
        .collect()
}

fn parse_relative_offsets(text: &str, reference: NaiveDateTime) -> Vec<(usize, ParsedInstant)> {
    RE_IN_OFFSET
        .captures_iter(text)
        .filter_map(|caps| {
            let amount_raw = caps[1].to_lowercase();
            let amount: i64 = match amount_raw.as_str() {
                "a" | "an" => 1,
                "a few" => 3,
                s if s.starts_with("a couple") => 2,
                s => s.parse().ok()?,
            };
            let unit = caps[2].to_lowercase();
            let (duration, certain) = if unit.starts_with("minute") {
                (Duration::minutes(amount), true)
            } else if unit.starts_with("hour") {
                (Duration::hours(amount), true)
            } else if unit.starts_with("day") {
                (Duration::days(amount), false)
            } else {
                (Duration::weeks(amount), false)
            };
            Some((
                caps.get(0).unwrap().start(),
                ParsedInstant {
                    instant: reference + duration,
                    hour_is_certain: certain,
                },
            ))
        })
        .collect()
}

fn parse_day_anchors(text: &str, reference: NaiveDateTime) -> Vec<(usize, ParsedInstant)> {
    RE_DAY_ANCHOR
        .captures_iter(text)
        .filter_map(|caps| {
            let anchor = caps[1].to_lowercase();
            let anchor = anchor.split_whitespace().collect::<Vec<_>>().join(" ");
            let (instant, certain) = match anchor.as_str() {
                "day after tomorrow" => {
                    ((reference.date() + Duration::days(2)).and_hms_opt(0, 0, 0)?, false)
                }
                "tomorrow" => ((reference.date() + Duration::days(1)).and_hms_opt(0, 0, 0)?, false),
                "tonight" => (reference.date().and_hms_opt(22, 0, 0)?, true),
                "today" => (reference.date().and_hms_opt(0, 0, 0)?, false),
                "this morning" => (reference.date().and_hms_opt(9, 0, 0)?, true),
                "this afternoon" => (reference.date().and_hms_opt(15, 0, 0)?, true),
                "this evening" => (reference.date().and_hms_opt(19, 0, 0)?, true),
                _ => return None,
            };
            Some((
                caps.get(0).unwrap().start(),
                ParsedInstant {
                    instant,
                    hour_is_certain: certain,
                },
            ))
        })
        .collect()
}

fn parse_clock_times(text: &str, reference: NaiveDateTime) -> Vec<(usize, ParsedInstant)> {
    RE_CLOCK
        .captures_iter(text)
        .filter_map(|caps| {
            let raw_hour: u32 = caps[1].parse().ok()?;
            if raw_hour == 0 || raw_hour > 12 {
                return None;
            }
            let minute: u32 = caps
                .get(2)
                .map_or(Some(0), |m| m.as_str().parse().ok())?;
            let pm = caps[3].eq_ignore_ascii_case("pm");
            let hour = (raw_hour % 12) + if pm { 12 } else { 0 };
            let mut instant = reference.date().and_hms_opt(hour, minute, 0)?;
            // Forward resolution: a clock time already past today means
            // tomorrow.
            if instant < reference {
                instant = (reference.date() + Duration::days(1)).and_hms_opt(hour, minute, 0)?;
            }
            Some((
                caps.get(0).unwrap().start(),
                ParsedInstant {
                    instant,
                    hour_is_certain: true,
                },
            ))
        })
        .collect()
}

fn parse_noon_midnight(text: &str, reference: NaiveDateTime) -> Vec<(usize, ParsedInstant)> {
    RE_NOON_MIDNIGHT
        .captures_iter(text)
        .filter_map(|caps| {
            let hour = if caps[1].eq_ignore_ascii_case("noon") { 12 } else { 0 };
            Some((
                caps.get(0).unwrap().start(),
                ParsedInstant {
                    instant: reference.date().and_hms_opt(hour, 0, 0)?,
                    hour_is_certain: true,
                },
            ))
        })
        .collect()
}

// ── Name tables ─────────────────────────────────────────────────────────

fn month_number(name: &str) -> Option<u32> {
    let lower = name.to_lowercase();
    let number = match &lower[..3.min(lower.len())] {
        "jan" => 1,
        "feb" => 2,
        "mar" => 3,
        "apr" => 4,
        "may" => 5,
        "jun" => 6,
        "jul" => 7,
        "aug" => 8,
        "sep" => 9,
        "oct" => 10,
        "nov" => 11,
        "dec" => 12,
        _ => return None,
    };
    Some(number)
}

fn weekday_from_name(name: &str) -> Option<Weekday> {
    match name.to_lowercase().as_str() {
        "monday" => Some(Weekday::Mon),
        "tuesday" => Some(Weekday::Tue),
        "wednesday" => Some(Weekday::Wed),
        "thursday" => Some(Weekday::Thu),
        "friday" => Some(Weekday::Fri),
        "saturday" => Some(Weekday::Sat),
        "sunday" => Some(Weekday::Sun),
        _ => None,
    }
}

// ── Tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn reference() -> NaiveDateTime {
        // A Wednesday.
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn first(text: &str) -> ParsedInstant {
        RelativeDateParser
            .parse(text, reference())
            .into_iter()
            .next()
            .unwrap()
    }

    #[test]
    fn iso_date_with_time_is_certain() {
        let parsed = first("Event at 2026-09-12T18:45 in the hall");
        assert_eq!(
            parsed.instant,
            NaiveDate::from_ymd_opt(2026, 9, 12).unwrap().and_hms_opt(18, 45, 0).unwrap()
        );
        assert!(parsed.hour_is_certain);
    }

    #[test]
    fn iso_date_without_time_is_uncertain() {
        let parsed = first("Due 2026-09-12.");
        assert!(!parsed.hour_is_certain);
        assert_eq!(parsed.instant.date(), NaiveDate::from_ymd_opt(2026, 9, 12).unwrap());
    }

    #[test]
    fn written_date_resolves_forward() {
        // March has passed relative to August 2026 — next year.
        let parsed = first("see you on March 5");
        assert_eq!(parsed.instant.date(), NaiveDate::from_ymd_opt(2027, 3, 5).unwrap());
    }

    #[test]
    fn written_date_with_year_is_literal() {
        let parsed = first("signed on March 5, 2020");
        assert_eq!(parsed.instant.date(), NaiveDate::from_ymd_opt(2020, 3, 5).unwrap());
    }

    #[test]
    fn weekday_is_next_occurrence() {
        // Reference is Wednesday 2026-08-05; Friday is the 7th.
        let parsed = first("let's meet on Friday");
        assert_eq!(parsed.instant.date(), NaiveDate::from_ymd_opt(2026, 8, 7).unwrap());
        assert!(!parsed.hour_is_certain);
    }

    #[test]
    fn same_weekday_jumps_a_full_week() {
        let parsed = first("next Wednesday then");
        assert_eq!(parsed.instant.date(), NaiveDate::from_ymd_opt(2026, 8, 12).unwrap());
    }

    #[test]
    fn in_an_hour() {
        let parsed = first("We'll see each other in an hour at the station.");
        assert_eq!(parsed.instant, reference() + Duration::hours(1));
        assert!(parsed.hour_is_certain);
    }

    #[test]
    fn in_a_few_minutes() {
        let parsed = first("I'll ping you in a few minutes.");
        assert_eq!(parsed.instant, reference() + Duration::minutes(3));
    }

    #[test]
    fn in_n_days_is_hour_uncertain() {
        let parsed = first("the caravan arrives in 3 days");
        assert_eq!(parsed.instant.date(), NaiveDate::from_ymd_opt(2026, 8, 8).unwrap());
        assert!(!parsed.hour_is_certain);
    }

    #[test]
    fn tomorrow_is_uncertain() {
        let parsed = first("Let's meet tomorrow evening at the cafe.");
        assert_eq!(parsed.instant.date(), NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
        assert!(!parsed.hour_is_certain);
    }

    #[test]
    fn tonight_is_ten_pm() {
        let parsed = first("the storm rolls in tonight");
        assert_eq!(
            parsed.instant,
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap().and_hms_opt(22, 0, 0).unwrap()
        );
        assert!(parsed.hour_is_certain);
    }

    #[test]
    fn clock_time_resolves_forward() {
        // 9pm is still ahead of the 14:30 reference — today.
        let parsed = first("Let's meet from 7 to 9pm at the cafe.");
        assert_eq!(
            parsed.instant,
            NaiveDate::from_ymd_opt(2026, 8, 5).unwrap().and_hms_opt(21, 0, 0).unwrap()
        );
        assert!(parsed.hour_is_certain);

        // 9am has passed — tomorrow.
        let parsed = first("breakfast at 9am");
        assert_eq!(parsed.instant.date(), NaiveDate::from_ymd_opt(2026, 8, 6).unwrap());
    }

    #[test]
    fn noon_and_midnight() {
        use chrono::Timelike;
        assert_eq!(first("high noon").instant.time().hour(), 12);
        assert_eq!(first("the bells toll at midnight").instant.time().hour(), 0);
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(RelativeDateParser.parse("nothing temporal here", reference()).is_empty());
    }

    #[test]
    fn results_are_ordered_by_position() {
        let results = RelativeDateParser.parse("at 9pm, or maybe tomorrow", reference());
        assert!(results.len() >= 2);
        assert!(results[0].hour_is_certain); // the 9pm match comes first
    }
}
