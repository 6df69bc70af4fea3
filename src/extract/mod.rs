//! The extraction orchestrator and its field strategies.
//!
//! [`HeuristicExtractor`] is the public entry point: it runs the four
//! field extractors independently over one text block and assembles a
//! [`ScenePatch`] containing only the fields with a confident new value.
//! Every strategy is a pure, synchronous function over the immutable
//! lexicon — fail-open by construction, so one field can never prevent
//! another from being evaluated. The extractors share nothing and may run
//! in any order.

pub mod datetime;
pub mod mood;
pub mod place;
pub mod weather;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::lexicon::Lexicon;
use crate::score::MIN_ACCEPT_SCORE;
use crate::state::{Field, ScenePatch, SceneState};
use crate::timeparse::{NaturalDateParser, RelativeDateParser};

/// Character radius inspected for negation markers around a match.
pub const NEGATION_WINDOW: usize = 16;

/// Character span after a match inspected for blacklisted context words.
pub const BLACKLIST_WINDOW: usize = 20;

// ── Granularity ─────────────────────────────────────────────────────────

/// How precisely a resolved date/time is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Calendar date only.
    #[default]
    Date,
    /// Date plus the hour, rounded down.
    DateTime,
}

// ── Options ─────────────────────────────────────────────────────────────

/// Tuning knobs for the heuristic extractor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtractorOptions {
    pub granularity: Granularity,
    /// Minimum candidate score for a field to enter the patch.
    pub min_score: f32,
}

impl Default for ExtractorOptions {
    fn default() -> Self {
        Self {
            granularity: Granularity::default(),
            min_score: MIN_ACCEPT_SCORE,
        }
    }
}

// ── PatchSource ─────────────────────────────────────────────────────────

/// Anything that can turn a text block plus the previous state into a
/// patch. The heuristic engine and the remote classifier are the two
/// implementations; configuration decides which one the caller holds.
pub trait PatchSource {
    fn extract(&self, text: &str, previous: &SceneState, reference: NaiveDateTime) -> ScenePatch;
}

// ── HeuristicExtractor ──────────────────────────────────────────────────

/// The deterministic rule-based extraction engine.
///
/// Holds no mutable state; repeated calls with the same text, previous
/// state and reference instant return identical patches.
pub struct HeuristicExtractor {
    options: ExtractorOptions,
    parser: Box<dyn NaturalDateParser>,
}

impl HeuristicExtractor {
    /// Engine with the built-in [`RelativeDateParser`].
    pub fn new(options: ExtractorOptions) -> Self {
        Self::with_parser(options, Box::new(RelativeDateParser))
    }

    /// Engine with a caller-supplied natural-language date parser.
    pub fn with_parser(options: ExtractorOptions, parser: Box<dyn NaturalDateParser>) -> Self {
        Self { options, parser }
    }

    pub fn options(&self) -> &ExtractorOptions {
        &self.options
    }

    /// Run all four field extractors and assemble the patch.
    ///
    /// The previous state is accepted for interface parity with the
    /// remote classifier; the heuristic strategies look at the text only.
    pub fn extract(
        &self,
        text: &str,
        _previous: &SceneState,
        reference: NaiveDateTime,
    ) -> ScenePatch {
        let lex = Lexicon::global();
        let mut patch = ScenePatch::default();

        if let Some(value) =
            datetime::extract_datetime(text, reference, self.options.granularity, self.parser.as_ref())
        {
            tracing::debug!(field = %Field::DateTime, value = %value, "field resolved");
            patch.set(Field::DateTime, value);
        }
        if let Some(value) = place::extract_place(lex, text, self.options.min_score) {
            tracing::debug!(field = %Field::Place, value = %value, "field resolved");
            patch.set(Field::Place, value);
        }
        if let Some(value) = mood::extract_mood(lex, text, self.options.min_score) {
            tracing::debug!(field = %Field::Mood, value = %value, "field resolved");
            patch.set(Field::Mood, value.to_string());
        }
        if let Some(value) = weather::extract_weather(lex, text, self.options.min_score) {
            tracing::debug!(field = %Field::Weather, value = %value, "field resolved");
            patch.set(Field::Weather, value.to_string());
        }

        patch
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new(ExtractorOptions::default())
    }
}

impl PatchSource for HeuristicExtractor {
    fn extract(&self, text: &str, previous: &SceneState, reference: NaiveDateTime) -> ScenePatch {
        HeuristicExtractor::extract(self, text, previous, reference)
    }
}

// ── Window helpers ──────────────────────────────────────────────────────

/// Char-boundary-safe window `[start - radius, end + radius]` clamped to
/// the text.
pub(crate) fn window_bounds(
    text: &str,
    start: usize,
    end: usize,
    radius: usize,
) -> (usize, usize) {
    let mut lo = start.saturating_sub(radius);
    while lo > 0 && !text.is_char_boundary(lo) {
        lo -= 1;
    }
    let mut hi = (end + radius).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    (lo, hi)
}

pub(crate) fn window_around(text: &str, start: usize, end: usize, radius: usize) -> &str {
    let (lo, hi) = window_bounds(text, start, end, radius);
    &text[lo..hi]
}

/// Window after a match. `end` must lie on a char boundary (regex match
/// ends always do).
pub(crate) fn window_after(text: &str, end: usize, radius: usize) -> &str {
    let mut hi = (end + radius).min(text.len());
    while hi < text.len() && !text.is_char_boundary(hi) {
        hi += 1;
    }
    &text[end..hi]
}

// ── Tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn reference() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 8, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    }

    fn extract(text: &str) -> ScenePatch {
        let extractor = HeuristicExtractor::new(ExtractorOptions {
            granularity: Granularity::DateTime,
            ..ExtractorOptions::default()
        });
        extractor.extract(text, &SceneState::default(), reference())
    }

    #[test]
    fn patch_contains_only_confident_fields() {
        let patch = extract("The ledger sat unopened on the desk.");
        assert!(patch.is_empty());
    }

    #[test]
    fn fields_are_extracted_independently() {
        let patch = extract("I'm feeling a bit anxious about the storm rolling in tonight.");
        assert_eq!(patch.mood.as_deref(), Some("anxious"));
        assert_eq!(patch.weather.as_deref(), Some("storm"));
        assert!(patch.date_time.is_some());
    }

    #[test]
    fn extraction_is_deterministic() {
        let text = "Let's meet tomorrow evening at the cafe.";
        let first = extract(text);
        for _ in 0..3 {
            assert_eq!(extract(text), first);
        }
    }

    #[test]
    fn patch_never_contains_empty_values() {
        let patch = extract("Let's meet tomorrow evening at the cafe.");
        for field in Field::ALL {
            if let Some(value) = patch.get(field) {
                assert!(!value.is_empty(), "{field} is empty");
            }
        }
    }

    #[test]
    fn window_helpers_respect_char_boundaries() {
        let text = "café et thé";
        // Index 4 is inside the 'é' encoding when offset by the window.
        let (lo, hi) = window_bounds(text, 5, 6, 3);
        assert!(text.is_char_boundary(lo));
        assert!(text.is_char_boundary(hi));
        let _ = window_around(text, 5, 6, 3);
        let _ = window_after(text, 6, 3);
    }
}
