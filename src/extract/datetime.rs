//! Date/time extraction: parser delegation, day-part defaults, regex
//! fallbacks, and granularity-dependent formatting.
//!
//! The natural-language parser does the heavy lifting; this module takes
//! its first result, infers a default hour from day-part keywords when the
//! parsed time-of-day is uncertain, and renders one of the two
//! granularities. The regex fallbacks only fire when the parser found
//! nothing at all.

use std::sync::LazyLock;

use chrono::{Duration, NaiveDateTime, Timelike};
use regex::Regex;

use crate::extract::Granularity;
use crate::lexicon::DAY_PART_HOURS;
use crate::timeparse::NaturalDateParser;

static RE_HOUR_ISH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:around\s+|about\s+)?(\d{1,2})\s*(am|pm)?\s*ish\b").unwrap()
});

static RE_AROUND_CLOCK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\b(?:around|about)\s+(\d{1,2})\s*(am|pm)\b").unwrap());

static RE_TOMORROW: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\btomorrow\b").unwrap());

static RE_TONIGHT: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(?i)\btonight\b").unwrap());

static RE_DAY_PART: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(morning|sunrise|dawn|noon|afternoon|evening|sunset|dusk|midnight|tonight|night)\b",
    )
    .unwrap()
});

pub(crate) fn extract_datetime(
    text: &str,
    reference: NaiveDateTime,
    granularity: Granularity,
    parser: &dyn NaturalDateParser,
) -> Option<String> {
    if let Some(first) = parser.parse(text, reference).into_iter().next() {
        let mut instant = first.instant;
        if granularity == Granularity::DateTime && !first.hour_is_certain {
            if let Some(hour) = default_hour(text) {
                instant = instant.date().and_hms_opt(hour, 0, 0)?;
            }
        }
        return Some(format_instant(instant, granularity));
    }

    // Fallback a: "7ish" / "around 8pm".
    if let Some((hour, pm)) = clockish(text) {
        let hour = (hour % 12) + if pm { 12 } else { 0 };
        let instant = reference.date().and_hms_opt(hour, 0, 0)?;
        return Some(format_instant(instant, granularity));
    }

    // Fallback b: a bare "tomorrow", refined by a day-part keyword.
    if RE_TOMORROW.is_match(text) {
        let mut instant = reference + Duration::days(1);
        if let Some(hour) = default_hour(text) {
            instant = instant.date().and_hms_opt(hour, 0, 0)?;
        }
        return Some(format_instant(instant, granularity));
    }

    // Fallback c: a bare "tonight".
    if RE_TONIGHT.is_match(text) {
        return Some(format_instant(reference.date().and_hms_opt(22, 0, 0)?, granularity));
    }

    None
}

/// Default hour implied by the first day-part keyword, in table priority
/// order (morning before night, so "tomorrow morning, not tonight" reads
/// as morning).
fn default_hour(text: &str) -> Option<u32> {
    let found: Vec<String> = RE_DAY_PART
        .find_iter(text)
        .map(|m| m.as_str().to_lowercase())
        .collect();
    DAY_PART_HOURS
        .iter()
        .find(|(word, _)| found.iter().any(|f| f == word))
        .map(|&(_, hour)| hour)
}

fn clockish(text: &str) -> Option<(u32, bool)> {
    let caps = RE_HOUR_ISH
        .captures(text)
        .or_else(|| RE_AROUND_CLOCK.captures(text))?;
    let hour: u32 = caps[1].parse().ok()?;
    if hour == 0 || hour > 12 {
        return None;
    }
    let pm = caps
        .get(2)
        .is_some_and(|m| m.as_str().eq_ignore_ascii_case("pm"));
    Some((hour, pm))
}

/// Render an instant at the requested granularity.
///
/// Both renderings derive from the same instant, so the `date` form always
/// equals the date component of the `datetime` form. The `datetime` form
/// rounds down to the hour.
pub(crate) fn format_instant(instant: NaiveDateTime, granularity: Granularity) -> String {
    let date = instant.format("%b %d, %Y");
    match granularity {
        Granularity::Date => date.to_string(),
        Granularity::DateTime => {
            let hour = instant.hour();
            let (hour12, meridiem) = match hour {
                0 => (12, "AM"),
                1..=11 => (hour, "AM"),
                12 => (12, "PM"),
                _ => (hour - 12, "PM"),
            };
            format!("{date}, {hour12} {meridiem}")
        }
    }
}

// ── Tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timeparse::{ParsedInstant, RelativeDateParser};
    use chrono::NaiveDate;

    /// A parser that never finds anything, exercising the fallbacks.
    struct NullParser;

    impl NaturalDateParser for NullParser {
        fn parse(&self, _text: &str, _reference: NaiveDateTime) -> Vec<ParsedInstant> {
            Vec::new()
        }
    }

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn extract(text: &str, granularity: Granularity) -> Option<String> {
        extract_datetime(text, reference(), granularity, &RelativeDateParser)
    }

    #[test]
    fn day_part_default_hour_applies_when_uncertain() {
        let rendered = extract("Let's meet tomorrow evening at the cafe.", Granularity::DateTime);
        assert_eq!(rendered.as_deref(), Some("Aug 06, 2026, 7 PM"));
    }

    #[test]
    fn certain_hour_is_not_overridden() {
        // "tonight" resolves with a certain 22:00; "evening" in the text
        // must not rewrite it.
        let rendered = extract("the storm arrives tonight, not this evening", Granularity::DateTime);
        assert_eq!(rendered.as_deref(), Some("Aug 05, 2026, 10 PM"));
    }

    #[test]
    fn date_granularity_renders_date_only() {
        let rendered = extract("Let's meet tomorrow evening.", Granularity::Date);
        assert_eq!(rendered.as_deref(), Some("Aug 06, 2026"));
    }

    #[test]
    fn granularities_agree_on_the_date_component() {
        let text = "see you tomorrow evening";
        let date = extract(text, Granularity::Date).unwrap();
        let datetime = extract(text, Granularity::DateTime).unwrap();
        assert!(datetime.starts_with(&date));
    }

    #[test]
    fn fallback_hour_ish() {
        let rendered =
            extract_datetime("see you at 7ish", reference(), Granularity::DateTime, &NullParser);
        assert_eq!(rendered.as_deref(), Some("Aug 05, 2026, 7 AM"));
    }

    #[test]
    fn fallback_around_pm() {
        let rendered =
            extract_datetime("around 8pm works", reference(), Granularity::DateTime, &NullParser);
        assert_eq!(rendered.as_deref(), Some("Aug 05, 2026, 8 PM"));
    }

    #[test]
    fn fallback_tomorrow_with_day_part() {
        let rendered = extract_datetime(
            "tomorrow morning then",
            reference(),
            Granularity::DateTime,
            &NullParser,
        );
        assert_eq!(rendered.as_deref(), Some("Aug 06, 2026, 9 AM"));
    }

    #[test]
    fn fallback_tonight() {
        let rendered =
            extract_datetime("tonight it ends", reference(), Granularity::DateTime, &NullParser);
        assert_eq!(rendered.as_deref(), Some("Aug 05, 2026, 10 PM"));
    }

    #[test]
    fn nothing_temporal_yields_none() {
        assert_eq!(extract("the ledger sat on the desk", Granularity::DateTime), None);
    }

    #[test]
    fn midnight_renders_as_twelve_am() {
        let instant = NaiveDate::from_ymd_opt(2026, 8, 6)
            .unwrap()
            .and_hms_opt(0, 15, 0)
            .unwrap();
        assert_eq!(format_instant(instant, Granularity::DateTime), "Aug 06, 2026, 12 AM");
    }
}
