//! Weather extraction: descriptive phrase pattern + anchored vocabulary
//! scan.
//!
//! Phenomenon nouns (storm, blizzard, downpour) are weather on their own.
//! Condition terms (cold, warm, clear) only count near an environmental
//! anchor word at a distinct span — "I have a cold" must never anchor
//! itself.

use crate::extract::{window_around, NEGATION_WINDOW};
use crate::lexicon::Lexicon;
use crate::score::{choose_best, Candidate};

/// Descriptive copula phrase ("it's cold", "the room was warm").
pub const COPULA_SCORE: f32 = 0.80;
/// Self-evident phenomenon term anywhere in the text.
pub const PHENOMENON_SCORE: f32 = 0.75;
/// Condition term gated by a nearby environmental anchor.
pub const ANCHORED_SCORE: f32 = 0.60;
/// Character radius searched for an anchor word.
pub const ANCHOR_WINDOW: usize = 40;

pub(crate) fn extract_weather(lex: &Lexicon, text: &str, min_score: f32) -> Option<&'static str> {
    let mut pool: Vec<Candidate<&'static str>> = Vec::new();

    // Strategy 1: copula phrase matched against the weather vocabulary.
    for caps in lex.weather_copula_re.captures_iter(text) {
        let phrase = caps.get(1).unwrap();
        if let Some((canonical, surface_len)) = resolve_prefix(lex, phrase.as_str()) {
            let start = phrase.start();
            let end = start + surface_len;
            if !negated(lex, text, start, end) {
                pool.push(Candidate::new(canonical, COPULA_SCORE));
            }
        }
    }

    // Strategy 2a: phenomenon terms need no anchor.
    for m in lex.weather_phenomenon_re.find_iter(text) {
        if let Some(canonical) = lex.normalize_weather_token(m.as_str()) {
            if !negated(lex, text, m.start(), m.end()) {
                pool.push(Candidate::new(canonical, PHENOMENON_SCORE));
            }
        }
    }

    // Strategy 2b: condition terms require a distinct anchor nearby.
    for m in lex.weather_condition_re.find_iter(text) {
        if !has_distinct_anchor(lex, text, m.start(), m.end()) {
            continue;
        }
        if let Some(canonical) = lex.normalize_weather_token(m.as_str()) {
            if !negated(lex, text, m.start(), m.end()) {
                pool.push(Candidate::new(canonical, ANCHORED_SCORE));
            }
        }
    }

    choose_best(pool, min_score).map(|c| c.value)
}

/// Longest prefix of the captured phrase that resolves to a weather term.
fn resolve_prefix(lex: &Lexicon, phrase: &str) -> Option<(&'static str, usize)> {
    let mut ends: Vec<usize> = Vec::new();
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
    for &end in ends.iter().rev() {
        if let Some(canonical) = lex.normalize_weather_token(&phrase[..end]) {
            return Some((canonical, end));
        }
    }
    None
}

fn negated(lex: &Lexicon, text: &str, start: usize, end: usize) -> bool {
    lex.contains_negation(window_around(text, start, end, NEGATION_WINDOW))
}

/// An anchor word within the window whose span does not overlap the
/// candidate match itself.
fn has_distinct_anchor(lex: &Lexicon, text: &str, start: usize, end: usize) -> bool {
    let (lo, hi) = crate::extract::window_bounds(text, start, end, ANCHOR_WINDOW);
    lex.weather_anchor_re.find_iter(&text[lo..hi]).any(|m| {
        let a_start = lo + m.start();
        let a_end = lo + m.end();
        a_end <= start || a_start >= end
    })
}

// ── Tests ───────────────────────────────────────────────────────────────
