//! Vocabulary tables, normalization, and the compiled pattern set.
//!
//! The [`Lexicon`] is the single source of truth for everything the
//! extractors match against: canonical mood/place/weather vocabularies,
//! synonym maps, intensity and affect-axis tables, and the regexes built
//! from them. It is constructed once behind a `LazyLock` and read-only
//! thereafter, so concurrent extraction calls never interfere.

pub mod moods;
pub mod places;
pub mod weather;
pub mod words;

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

use crate::error::LexiconError;

pub use moods::{MoodAxes, CANONICAL_MOODS, MOOD_AXES, MOOD_CONTEXT_BLACKLIST, MOOD_INTENSITY, MOOD_SYNONYMS};
pub use places::{AMBIGUOUS_PLACE_NOUNS, GENERIC_PLACE_PHRASES, LOCATIONAL_ADJECTIVES, PLACE_NOUNS};
pub use weather::{WEATHER_ANCHORS, WEATHER_CONDITIONS, WEATHER_PHENOMENA, WEATHER_SYNONYMS};
pub use words::DAY_PART_HOURS;

static GLOBAL: LazyLock<Lexicon> = LazyLock::new(Lexicon::new);

// ── Normalization ───────────────────────────────────────────────────────

/// Normalize a token for table lookup: NFKD-decompose, lower-case, keep
/// alphabetic characters only. "Café " and "cafe" share a key; "on edge"
/// becomes "onedge".
pub fn normalize_key(input: &str) -> String {
    input
        .nfkd()
        .filter(|c| c.is_alphabetic())
        .flat_map(char::to_lowercase)
        .collect()
}

/// Mood lookup result. Total: unresolved input yields the neutral default.
#[derive(Debug, Clone, PartialEq)]
pub struct MoodFeatures {
    /// Canonical mood, or `None` when the input did not resolve.
    pub canonical: Option<&'static str>,
    /// Intensity hint centered at 0.5.
    pub intensity: f32,
    /// Affect axes, `MoodAxes::NEUTRAL` when unmapped.
    pub axes: MoodAxes,
}

// ── Pattern building ────────────────────────────────────────────────────

/// Escape a vocabulary phrase for embedding in a regex, with interior
/// whitespace loosened to `\s+`.
fn phrase_pattern(word: &str) -> String {
    regex::escape(word).replace(' ', r"\s+")
}

/// Longest-first alternation over a word list, so "coffee shop" beats
/// "shop" at the same position.
fn alternation(words: &[&str]) -> String {
    let mut sorted: Vec<&str> = words.to_vec();
    sorted.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    sorted
        .iter()
        .map(|w| phrase_pattern(w))
        .collect::<Vec<_>>()
        .join("|")
}

// ── Lexicon ─────────────────────────────────────────────────────────────

/// Immutable vocabulary tables plus the regexes compiled from them.
pub struct Lexicon {
    mood_canonical: HashSet<&'static str>,
    mood_synonyms: HashMap<&'static str, &'static str>,
    mood_canonical_by_key: HashMap<String, &'static str>,
    mood_synonym_by_key: HashMap<String, &'static str>,
    mood_intensity: HashMap<String, f32>,
    mood_axes: HashMap<String, MoodAxes>,

    weather_canonical: HashSet<&'static str>,
    weather_synonyms: HashMap<&'static str, &'static str>,
    weather_canonical_by_key: HashMap<String, &'static str>,
    weather_synonym_by_key: HashMap<String, &'static str>,

    ambiguous_place_nouns: HashSet<&'static str>,
    generic_place_phrases: HashSet<&'static str>,
    locational_adjectives: HashSet<&'static str>,

    // Place patterns
    pub(crate) place_noun_re: Regex,
    pub(crate) determiner_lookback_re: Regex,
    pub(crate) ambiguous_determiner_re: Regex,
    pub(crate) ambiguous_preposition_re: Regex,
    pub(crate) ambiguous_verb_re: Regex,
    pub(crate) proper_place_re: Regex,
    pub(crate) quoted_place_re: Regex,
    pub(crate) span_place_re: Regex,
    pub(crate) trailing_filler_re: Regex,

    // Mood patterns
    pub(crate) feeling_re: Regex,
    pub(crate) mood_scan_re: Regex,

    // Weather patterns
    pub(crate) weather_copula_re: Regex,
    pub(crate) weather_phenomenon_re: Regex,
    pub(crate) weather_condition_re: Regex,
    pub(crate) weather_anchor_re: Regex,

    // Shared
    pub(crate) negation_re: Regex,
}

impl Lexicon {
    /// The process-wide lexicon, built on first use.
    pub fn global() -> &'static Lexicon {
        &GLOBAL
    }

    fn new() -> Self {
        let mood_canonical: HashSet<&'static str> = CANONICAL_MOODS.iter().copied().collect();
        let mood_synonyms: HashMap<&'static str, &'static str> =
            MOOD_SYNONYMS.iter().copied().collect();
        let mood_canonical_by_key = CANONICAL_MOODS
            .iter()
            .map(|&m| (normalize_key(m), m))
            .collect();
        let mood_synonym_by_key = MOOD_SYNONYMS
            .iter()
            .map(|&(s, t)| (normalize_key(s), t))
            .collect();
        let mood_intensity = MOOD_INTENSITY
            .iter()
            .map(|&(m, i)| (normalize_key(m), i))
            .collect();
        let mood_axes = MOOD_AXES
            .iter()
            .map(|&(m, a)| (normalize_key(m), a))
            .collect();

        let weather_synonyms: HashMap<&'static str, &'static str> =
            WEATHER_SYNONYMS.iter().copied().collect();
        let weather_canonical: HashSet<&'static str> = WEATHER_PHENOMENA
            .iter()
            .chain(WEATHER_CONDITIONS.iter())
            .copied()
            .filter(|term| !weather_synonyms.contains_key(term))
            .collect();
        let weather_canonical_by_key = weather_canonical
            .iter()
            .map(|&w| (normalize_key(w), w))
            .collect();
        let weather_synonym_by_key = WEATHER_SYNONYMS
            .iter()
            .map(|&(s, t)| (normalize_key(s), t))
            .collect();

        let determiners = words::DETERMINERS.join("|");
        let ambiguous_nouns = alternation(AMBIGUOUS_PLACE_NOUNS);
        let location_preps = words::LOCATION_PREPOSITIONS.join("|");
        let span_preps = words::SPAN_PREPOSITIONS.join("|");
        let motion_preps = words::MOTION_PREPOSITIONS.join("|");
        let motion_verbs = words::MOTION_VERBS.join("|");
        let intensifiers = alternation(words::INTENSIFIERS);
        // Up to three descriptor words between context and noun.
        let descriptor = r"(?:[\w'-]+\s+){0,3}";

        let mood_scan_vocab: Vec<&str> = CANONICAL_MOODS
            .iter()
            .chain(MOOD_SYNONYMS.iter().map(|(s, _)| s))
            .copied()
            .filter(|m| !moods::SCAN_EXCLUDED_SYNONYMS.contains(m))
            .collect();
        let weather_scan_conditions: Vec<&str> = WEATHER_CONDITIONS.to_vec();
        let weather_scan_phenomena: Vec<&str> = WEATHER_PHENOMENA.to_vec();

        Lexicon {
            place_noun_re: Regex::new(&format!(r"(?i)\b({})\b", alternation(PLACE_NOUNS))).unwrap(),
            determiner_lookback_re: Regex::new(&format!(r"(?i)\b({determiners})\s+$")).unwrap(),
            ambiguous_determiner_re: Regex::new(&format!(
                r"(?i)\b((?:{determiners})\s+{descriptor}(?:{ambiguous_nouns}))\b"
            ))
            .unwrap(),
            ambiguous_preposition_re: Regex::new(&format!(
                r"(?i)\b(?:{location_preps})\s+((?:(?:{determiners})\s+)?{descriptor}(?:{ambiguous_nouns}))\b"
            ))
            .unwrap(),
            ambiguous_verb_re: Regex::new(&format!(
                r"(?i)\b(?:{motion_verbs})\b(?:\s+[\w'-]+){{0,3}}\s+(?:to|at|into|toward|towards|from|past)?\s*((?:(?:{determiners})\s+)?{descriptor}(?:{ambiguous_nouns}))\b"
            ))
            .unwrap(),
            proper_place_re: Regex::new(&format!(
                r"\b(?i:{location_preps}|{motion_preps})\s+((?:(?i:the)\s+)?[A-Z][A-Za-z'’-]+(?:\s+(?:[A-Z][A-Za-z'’-]+|of|the)){{0,3}})"
            ))
            .unwrap(),
            quoted_place_re: Regex::new(&format!(
                r#"(?i)\b(?:{location_preps})\s+["“”']([^"“”'\n]{{2,60}})["“”']"#
            ))
            .unwrap(),
            span_place_re: Regex::new(&format!(
                r"(?i)\b(?:{span_preps})\s+(?:(?:{determiners})\s+)?([^\n.,;:!?]{{3,60}})"
            ))
            .unwrap(),
            trailing_filler_re: Regex::new(&format!(
                r"(?i)\s+(?:{})\s*$",
                alternation(words::TEMPORAL_FILLERS)
            ))
            .unwrap(),
            feeling_re: Regex::new(&format!(
                r"(?i)\b(?:i[’']m\s+feeling|i\s+am\s+feeling|i[’']m|i\s+am|i\s+was|feel(?:s|ing)?|felt)\s+(?:(?:{intensifiers})\s+)*([a-zA-Z'’-]+(?:\s+[a-zA-Z'’-]+){{0,2}})"
            ))
            .unwrap(),
            mood_scan_re: Regex::new(&format!(r"(?i)\b({})\b", alternation(&mood_scan_vocab)))
                .unwrap(),
            weather_copula_re: Regex::new(&format!(
                r"(?i)\b(?:it[’']s|it\s+is|it\s+was|that[’']s|is|was|are|were|feels|felt|getting)\s+(?:(?:{intensifiers})\s+)*([a-zA-Z'’-]+(?:\s+[a-zA-Z'’-]+){{0,1}})"
            ))
            .unwrap(),
            weather_phenomenon_re: Regex::new(&format!(
                r"(?i)\b({})\b",
                alternation(&weather_scan_phenomena)
            ))
            .unwrap(),
            weather_condition_re: Regex::new(&format!(
                r"(?i)\b({})\b",
                alternation(&weather_scan_conditions)
            ))
            .unwrap(),
            weather_anchor_re: Regex::new(&format!(r"(?i)\b(?:{})\b", alternation(WEATHER_ANCHORS)))
                .unwrap(),
            negation_re: Regex::new(&format!(
                r"(?i)\b(?:{})\b",
                alternation(words::NEGATION_MARKERS)
            ))
            .unwrap(),

            mood_canonical,
            mood_synonyms,
            mood_canonical_by_key,
            mood_synonym_by_key,
            mood_intensity,
            mood_axes,
            weather_canonical,
            weather_synonyms,
            weather_canonical_by_key,
            weather_synonym_by_key,
            ambiguous_place_nouns: AMBIGUOUS_PLACE_NOUNS.iter().copied().collect(),
            generic_place_phrases: GENERIC_PLACE_PHRASES.iter().copied().collect(),
            locational_adjectives: LOCATIONAL_ADJECTIVES.iter().copied().collect(),
        }
    }

    // ── Mood lookups ────────────────────────────────────────────────

    /// Resolve a token or phrase to a canonical mood.
    ///
    /// Tries, in order: exact canonical match, exact synonym match,
    /// normalized-key canonical match, normalized-key synonym match.
    pub fn normalize_mood_token(&self, input: &str) -> Option<&'static str> {
        let token = input.trim().to_lowercase();
        if token.is_empty() {
            return None;
        }
        if let Some(&canonical) = self.mood_canonical.get(token.as_str()) {
            return Some(canonical);
        }
        if let Some(&canonical) = self.mood_synonyms.get(token.as_str()) {
            return Some(canonical);
        }
        let key = normalize_key(&token);
        if key.is_empty() {
            return None;
        }
        self.mood_canonical_by_key
            .get(&key)
            .or_else(|| self.mood_synonym_by_key.get(&key))
            .copied()
    }

    /// Full mood lookup: normalization composed with intensity and axis
    /// tables. Never fails — unresolved input yields the neutral default.
    pub fn mood_features(&self, input: &str) -> MoodFeatures {
        match self.normalize_mood_token(input) {
            Some(canonical) => {
                let key = normalize_key(canonical);
                MoodFeatures {
                    canonical: Some(canonical),
                    intensity: self.mood_intensity.get(&key).copied().unwrap_or(0.5),
                    axes: self
                        .mood_axes
                        .get(&key)
                        .copied()
                        .unwrap_or(MoodAxes::NEUTRAL),
                }
            }
            None => MoodFeatures {
                canonical: None,
                intensity: 0.5,
                axes: MoodAxes::NEUTRAL,
            },
        }
    }

    // ── Weather lookups ─────────────────────────────────────────────

    /// Resolve a weather term to its canonical form, same cascade as
    /// [`Self::normalize_mood_token`].
    pub fn normalize_weather_token(&self, input: &str) -> Option<&'static str> {
        let token = input.trim().to_lowercase();
        if token.is_empty() {
            return None;
        }
        if let Some(&canonical) = self.weather_canonical.get(token.as_str()) {
            return Some(canonical);
        }
        if let Some(&canonical) = self.weather_synonyms.get(token.as_str()) {
            return Some(canonical);
        }
        let key = normalize_key(&token);
        if key.is_empty() {
            return None;
        }
        self.weather_canonical_by_key
            .get(&key)
            .or_else(|| self.weather_synonym_by_key.get(&key))
            .copied()
    }

    // ── Place predicates ────────────────────────────────────────────

    /// Whether a captured phrase is too generic to keep: a bare ambiguous
    /// noun (optionally with a determiner), an over-generic fixed phrase,
    /// or a short non-capitalized single word.
    pub fn is_generic_place(&self, phrase: &str) -> bool {
        let trimmed = phrase.trim();
        if trimmed.is_empty() {
            return true;
        }
        let lower = trimmed.to_lowercase();
        if self.generic_place_phrases.contains(lower.as_str()) {
            return true;
        }

        let stripped = words::DETERMINERS
            .iter()
            .find_map(|det| lower.strip_prefix(&format!("{det} ")))
            .unwrap_or(lower.as_str());
        if self.ambiguous_place_nouns.contains(stripped) {
            return true;
        }

        let mut word_iter = trimmed.split_whitespace();
        if let (Some(word), None) = (word_iter.next(), word_iter.next()) {
            let starts_upper = word.chars().next().is_some_and(char::is_uppercase);
            if !starts_upper && word.chars().count() <= 5 {
                return true;
            }
        }
        false
    }

    /// Whether any word of the phrase is a descriptive locational
    /// adjective.
    pub fn has_locational_adjective(&self, phrase: &str) -> bool {
        phrase
            .split_whitespace()
            .any(|w| self.locational_adjectives.contains(w.to_lowercase().as_str()))
    }

    /// Whether a negation marker occurs in the given text window.
    pub(crate) fn contains_negation(&self, window: &str) -> bool {
        self.negation_re.is_match(window)
    }

    // ── Validation ──────────────────────────────────────────────────

    /// Verify that the tables are internally consistent: every synonym
    /// resolves to a canonical value and every intensity/axis entry names
    /// a canonical mood. A failure is a lexicon defect, not a runtime
    /// condition; the test suite keeps this honest.
    pub fn validate(&self) -> Result<(), LexiconError> {
        for &(synonym, target) in MOOD_SYNONYMS {
            let resolved = self.mood_canonical.contains(target)
                || self.mood_canonical_by_key.contains_key(&normalize_key(target));
            if !resolved {
                return Err(LexiconError::DanglingSynonym {
                    kind: "mood",
                    synonym: synonym.to_string(),
                    target: target.to_string(),
                });
            }
        }
        for &(synonym, target) in WEATHER_SYNONYMS {
            let resolved = self.weather_canonical.contains(target)
                || self
                    .weather_canonical_by_key
                    .contains_key(&normalize_key(target));
            if !resolved {
                return Err(LexiconError::DanglingSynonym {
                    kind: "weather",
                    synonym: synonym.to_string(),
                    target: target.to_string(),
                });
            }
        }
        for &(mood, _) in MOOD_INTENSITY {
            if !self.mood_canonical_by_key.contains_key(&normalize_key(mood)) {
                return Err(LexiconError::OrphanMetadata {
                    kind: "intensity",
                    key: mood.to_string(),
                });
            }
        }
        for &(mood, _) in MOOD_AXES {
            if !self.mood_canonical_by_key.contains_key(&normalize_key(mood)) {
                return Err(LexiconError::OrphanMetadata {
                    kind: "axes",
                    key: mood.to_string(),
                });
            }
        }
        Ok(())
    }
}

// ── Tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn lex() -> &'static Lexicon {
        Lexicon::global()
    }

    // ── Normalization ───────────────────────────────────────────────

    #[test]
    fn normalize_key_strips_non_letters_and_case() {
        assert_eq!(normalize_key("On Edge!"), "onedge");
        assert_eq!(normalize_key("Café"), "cafe");
        assert_eq!(normalize_key("  7pm  "), "pm");
    }

    #[test]
    fn mood_token_exact_canonical() {
        assert_eq!(lex().normalize_mood_token("anxious"), Some("anxious"));
        assert_eq!(lex().normalize_mood_token("  Tired "), Some("tired"));
    }

    #[test]
    fn mood_token_synonym() {
        assert_eq!(lex().normalize_mood_token("exhausted"), Some("tired"));
        assert_eq!(lex().normalize_mood_token("tense"), Some("nervous"));
        assert_eq!(lex().normalize_mood_token("livid"), Some("angry"));
    }

    #[test]
    fn mood_token_normalized_key_path() {
        // Punctuation and spacing insensitive.
        assert_eq!(lex().normalize_mood_token("on-edge"), Some("anxious"));
        assert_eq!(lex().normalize_mood_token("ON EDGE"), Some("anxious"));
    }

    #[test]
    fn mood_token_unresolved() {
        assert_eq!(lex().normalize_mood_token("quixotic"), None);
        assert_eq!(lex().normalize_mood_token(""), None);
        assert_eq!(lex().normalize_mood_token("!!"), None);
    }

    #[test]
    fn mood_features_never_fails() {
        let features = lex().mood_features("not a mood at all");
        assert_eq!(features.canonical, None);
        assert_eq!(features.intensity, 0.5);
        assert_eq!(features.axes, MoodAxes::NEUTRAL);
    }

    #[test]
    fn mood_features_resolved() {
        let features = lex().mood_features("panicked");
        assert_eq!(features.canonical, Some("terrified"));
        assert!(features.intensity > 0.9);
        assert!(features.axes.valence < -0.5);
    }

    #[test]
    fn mood_features_neutral_axes_for_bland_moods() {
        // okay/ok/fine/meh intentionally have no axis entry.
        let features = lex().mood_features("meh");
        assert_eq!(features.canonical, Some("meh"));
        assert_eq!(features.axes, MoodAxes::NEUTRAL);
    }

    #[test]
    fn weather_token_resolution() {
        assert_eq!(lex().normalize_weather_token("pouring"), Some("rainy"));
        assert_eq!(lex().normalize_weather_token("Storm"), Some("storm"));
        assert_eq!(lex().normalize_weather_token("heat wave"), Some("heatwave"));
        assert_eq!(lex().normalize_weather_token("plasma"), None);
    }

    // ── Place predicates ────────────────────────────────────────────

    #[test]
    fn generic_place_detection() {
        assert!(lex().is_generic_place("area"));
        assert!(lex().is_generic_place("the area"));
        assert!(lex().is_generic_place("the city"));
        assert!(lex().is_generic_place("somewhere"));
        assert!(lex().is_generic_place("spot")); // short, lowercase, single word
        assert!(!lex().is_generic_place("the Grand Library"));
        assert!(!lex().is_generic_place("the cafe across the street"));
    }

    #[test]
    fn locational_adjective_detection() {
        assert!(lex().has_locational_adjective("the Grand Library"));
        assert!(lex().has_locational_adjective("old mill"));
        assert!(!lex().has_locational_adjective("a cafe"));
    }

    // ── Totality ────────────────────────────────────────────────────

    #[test]
    fn lexicon_tables_are_consistent() {
        lex().validate().unwrap();
    }

    #[test]
    fn every_mood_synonym_resolves_to_canonical() {
        for &(synonym, _) in MOOD_SYNONYMS {
            let canonical = lex().normalize_mood_token(synonym);
            assert!(
                canonical.is_some_and(|c| CANONICAL_MOODS.contains(&c)),
                "synonym \"{synonym}\" does not resolve to a canonical mood"
            );
        }
    }

    #[test]
    fn every_weather_synonym_resolves_to_canonical() {
        for &(synonym, _) in WEATHER_SYNONYMS {
            assert!(
                lex().normalize_weather_token(synonym).is_some(),
                "weather synonym \"{synonym}\" does not resolve"
            );
        }
    }

    // ── Patterns ────────────────────────────────────────────────────

    #[test]
    fn place_noun_pattern_is_word_bounded() {
        // "inn" must not match inside "dinner".
        assert!(!lex().place_noun_re.is_match("we had dinner early"));
        assert!(lex().place_noun_re.is_match("we stayed at the inn"));
    }

    #[test]
    fn place_noun_pattern_prefers_longest_phrase() {
        let m = lex().place_noun_re.find("met at the coffee shop today").unwrap();
        assert_eq!(m.as_str(), "coffee shop");
    }

    #[test]
    fn negation_pattern_matches_markers() {
        assert!(lex().contains_negation("i'm not happy"));
        assert!(lex().contains_negation("no longer cheerful"));
        assert!(!lex().contains_negation("notably cheerful"));
    }
}
