//! Mood extraction: first-person feeling pattern + vocabulary scan.
//!
//! Both strategies funnel through the same suppression filters (negation
//! window, contextual blacklist) and emit canonical moods only. Scores
//! are nudged by the mood's intensity hint so extreme moods edge out mild
//! ones when competing.

use crate::extract::{window_after, window_around, BLACKLIST_WINDOW, NEGATION_WINDOW};
use crate::lexicon::{moods::MOOD_CONTEXT_BLACKLIST, Lexicon};
use crate::score::{choose_best, Candidate};

/// "I am/I'm/feel/feeling <phrase>" match.
pub const FEELING_SCORE: f32 = 0.85;
/// Bare vocabulary occurrence anywhere in the text.
pub const SCAN_SCORE: f32 = 0.65;
/// Scale applied to `(intensity − 0.5)` when adjusting a base score.
pub const INTENSITY_SCALE: f32 = 0.2;

pub(crate) fn extract_mood(lex: &Lexicon, text: &str, min_score: f32) -> Option<&'static str> {
    let mut pool: Vec<Candidate<&'static str>> = Vec::new();

    // Strategy 1: first-person feeling pattern. The capture may run past
    // the mood ("anxious about the"); resolve the longest prefix that
    // normalizes to a canonical mood.
    for caps in lex.feeling_re.captures_iter(text) {
        let phrase = caps.get(1).unwrap();
        if let Some((canonical, surface_len)) = resolve_prefix(lex, phrase.as_str()) {
            let start = phrase.start();
            let end = start + surface_len;
            if passes_filters(lex, text, start, end) {
                pool.push(Candidate::new(canonical, adjusted(lex, canonical, FEELING_SCORE)));
            }
        }
    }

    // Strategy 2: vocabulary scan over canonical moods and synonym
    // surface forms.
    for m in lex.mood_scan_re.find_iter(text) {
        if let Some(canonical) = lex.normalize_mood_token(m.as_str()) {
            if passes_filters(lex, text, m.start(), m.end()) {
                pool.push(Candidate::new(canonical, adjusted(lex, canonical, SCAN_SCORE)));
            }
        }
    }

    choose_best(pool, min_score).map(|c| c.value)
}

/// Longest prefix of the captured phrase that resolves to a canonical
/// mood. Returns the canonical mood and the byte length of the resolved
/// surface within the phrase.
fn resolve_prefix(lex: &Lexicon, phrase: &str) -> Option<(&'static str, usize)> {
    let ends = word_end_offsets(phrase);
    for &end in ends.iter().rev() {
        if let Some(canonical) = lex.normalize_mood_token(&phrase[..end]) {
            return Some((canonical, end));
        }
    }
    None
}

/// Byte offsets of the end of each whitespace-separated word.
fn word_end_offsets(phrase: &str) -> Vec<usize> {
    let mut ends = Vec::new();
    let mut in_word = false;
    for (i, c) in phrase.char_indices() {
        if c.is_whitespace() {
            if in_word {
                ends.push(i);
            }
            in_word = false;
        } else {
            in_word = true;
        }
    }
    if in_word {
        ends.push(phrase.len());
    }
    ends
}

/// Negation window + contextual blacklist, shared by both strategies.
fn passes_filters(lex: &Lexicon, text: &str, start: usize, end: usize) -> bool {
    if lex.contains_negation(window_around(text, start, end, NEGATION_WINDOW)) {
        return false;
    }
    let surface = text[start..end].to_lowercase();
    // Whole-word containment: punctuation collapses to spaces so "today"
    // can never satisfy a blacklisted "a".
    let cleaned: String = window_after(text, end, BLACKLIST_WINDOW)
        .to_lowercase()
        .chars()
        .map(|c| if c.is_alphanumeric() { c } else { ' ' })
        .collect();
    let padded = format!(" {cleaned} ");
    for &(word, context) in MOOD_CONTEXT_BLACKLIST {
        if surface == word && padded.contains(&format!(" {context} ")) {
            return false;
        }
    }
    true
}

/// Nudge the base score by the canonical mood's intensity hint.
fn adjusted(lex: &Lexicon, canonical: &str, base: f32) -> f32 {
    let intensity = lex.mood_features(canonical).intensity;
    (base + (intensity - 0.5) * INTENSITY_SCALE).clamp(0.0, 1.0)
}

// ── Tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::score::MIN_ACCEPT_SCORE;

    fn mood(text: &str) -> Option<&'static str> {
        extract_mood(Lexicon::global(), text, MIN_ACCEPT_SCORE)
    }

    #[test]
    fn feeling_pattern_resolves_canonical() {
        assert_eq!(mood("I'm feeling a bit anxious about the storm."), Some("anxious"));
        assert_eq!(mood("I am so tired."), Some("tired"));
        assert_eq!(mood("She felt homesick in the big city."), Some("homesick"));
    }

    #[test]
    fn feeling_pattern_resolves_synonyms() {
        assert_eq!(mood("I'm exhausted."), Some("tired"));
        assert_eq!(mood("I'm feeling down today."), Some("sad"));
    }

    #[test]
    fn vocabulary_scan_finds_bare_moods() {
        assert_eq!(mood("A tired smile crossed her face."), Some("tired"));
    }

    #[test]
    fn scan_resolves_synonym_to_canonical() {
        assert_eq!(mood("The mood was tense, but the room was warm."), Some("nervous"));
    }

    #[test]
    fn negation_suppresses_mood() {
        assert_eq!(mood("I'm not happy today"), None);
        assert_eq!(mood("She was no longer cheerful."), None);
    }

    #[test]
    fn birthday_blacklist_suppresses_happy() {
        assert_eq!(mood("He was happy. Happy birthday!"), None);
    }

    #[test]
    fn blacklist_does_not_suppress_other_text() {
        // A second, clean signal still wins.
        assert_eq!(mood("Happy birthday! She felt nervous all the same."), Some("nervous"));
    }

    #[test]
    fn intensity_tilts_competition_toward_extremes() {
        // Both from the scan path; "terrified" (0.95) outscores "calm" (0.3).
        assert_eq!(mood("calm on the surface, terrified underneath"), Some("terrified"));
    }

    #[test]
    fn no_mood_in_plain_text() {
        assert_eq!(mood("The ledger sat unopened on the desk."), None);
    }

    #[test]
    fn sat_down_is_not_sad() {
        assert_eq!(mood("He sat down and opened the ledger."), None);
    }
}
