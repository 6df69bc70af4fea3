//! Place extraction: an ordered cascade of scoring strategies.
//!
//! All strategies run over the full text and pool their candidates; the
//! shared selection in [`choose_best`] picks the winner. Strategy order
//! matters only for tie-breaks.

use crate::lexicon::Lexicon;
use crate::score::{choose_best, Candidate};

/// Known canonical place-noun match.
pub const KNOWN_NOUN_SCORE: f32 = 0.70;
/// Proper-noun phrase after a location/motion preposition.
pub const PROPER_NOUN_SCORE: f32 = 0.90;
/// Quoted phrase after a location preposition.
pub const QUOTED_SCORE: f32 = 0.85;
/// Generic preposition + short free-text span.
pub const SPAN_SCORE: f32 = 0.60;
/// Ambiguous noun adjacent to a determiner.
pub const AMBIGUOUS_DETERMINER_SCORE: f32 = 0.50;
/// Ambiguous noun after a location preposition.
pub const AMBIGUOUS_PREPOSITION_SCORE: f32 = 0.50;
/// Ambiguous noun near a motion verb.
pub const AMBIGUOUS_VERB_SCORE: f32 = 0.45;
/// Boost for a capitalized proper-noun-looking token.
pub const PROPER_NOUN_BOOST: f32 = 0.10;
/// Boost for a descriptive locational adjective.
pub const ADJECTIVE_BOOST: f32 = 0.05;
/// Penalty pushing over-generic phrases under the acceptance threshold.
pub const GENERIC_PENALTY: f32 = 0.30;

/// How far back to look for a determiner before a known place noun.
const DETERMINER_LOOKBACK: usize = 8;

/// Free-text spans longer than this many words are no longer place-like.
const MAX_SPAN_WORDS: usize = 6;

/// Calendar words the proper-noun strategy must not read as places
/// ("on Monday", "in March").
const CALENDAR_WORDS: &[&str] = &[
    "monday", "tuesday", "wednesday", "thursday", "friday", "saturday", "sunday", "january",
    "february", "march", "april", "may", "june", "july", "august", "september", "october",
    "november", "december",
];

/// Run every place strategy, select the winner, and re-apply the
/// genericness test once more — an ambiguous-pattern win that barely
/// cleared the threshold must not survive on a bare generic phrase.
pub(crate) fn extract_place(lex: &Lexicon, text: &str, min_score: f32) -> Option<String> {
    let winner = choose_best(collect_candidates(lex, text), min_score)?;
    if lex.is_generic_place(&winner.value) {
        return None;
    }
    Some(winner.value)
}

fn collect_candidates(lex: &Lexicon, text: &str) -> Vec<Candidate<String>> {
    let mut pool = Vec::new();
    known_nouns(lex, text, &mut pool);
    proper_phrases(lex, text, &mut pool);
    quoted_phrases(lex, text, &mut pool);
    free_spans(lex, text, &mut pool);
    ambiguous_nouns(lex, text, &mut pool);
    pool
}

/// Strategy 1: known place nouns, with a determiner/possessive folded in
/// when one immediately precedes the noun.
fn known_nouns(lex: &Lexicon, text: &str, pool: &mut Vec<Candidate<String>>) {
    for m in lex.place_noun_re.find_iter(text) {
        let mut value = m.as_str().to_string();
        let lookback_start = floor_boundary(text, m.start().saturating_sub(DETERMINER_LOOKBACK));
        if let Some(caps) = lex.determiner_lookback_re.captures(&text[lookback_start..m.start()]) {
            value = format!("{} {}", &caps[1], value);
        }
        push(lex, pool, value, KNOWN_NOUN_SCORE);
    }
}

/// Strategy 2: capitalized multi-word names after a location or motion
/// preposition ("at The Grand Library", "through the Grand Library").
fn proper_phrases(lex: &Lexicon, text: &str, pool: &mut Vec<Candidate<String>>) {
    for caps in lex.proper_place_re.captures_iter(text) {
        let mut value = caps[1].trim().to_string();
        // The connector tail may leave a dangling "of"/"the".
        loop {
            let lower = value.to_lowercase();
            if let Some(stripped) = lower
                .strip_suffix(" of")
                .or_else(|| lower.strip_suffix(" the"))
            {
                value.truncate(stripped.len());
                value = value.trim_end().to_string();
            } else {
                break;
            }
        }
        push(lex, pool, value, PROPER_NOUN_SCORE);
    }
}

/// Strategy 3: quoted phrase after a location preposition.
fn quoted_phrases(lex: &Lexicon, text: &str, pool: &mut Vec<Candidate<String>>) {
    for caps in lex.quoted_place_re.captures_iter(text) {
        let value = caps[1].trim().to_string();
        if !value.is_empty() {
            push(lex, pool, value, QUOTED_SCORE);
        }
    }
}

/// Strategy 4: generic preposition + short free-text span, trailing
/// temporal filler trimmed.
fn free_spans(lex: &Lexicon, text: &str, pool: &mut Vec<Candidate<String>>) {
    for caps in lex.span_place_re.captures_iter(text) {
        let trimmed = lex.trailing_filler_re.replace(&caps[1], "");
        let value = trimmed.trim();
        if value.len() < 3 || value.split_whitespace().count() > MAX_SPAN_WORDS {
            continue;
        }
        // A span that is nothing but temporal filler ("in tonight") is not
        // a place.
        if crate::lexicon::words::TEMPORAL_FILLERS.contains(&value.to_lowercase().as_str()) {
            continue;
        }
        push(lex, pool, value.to_string(), SPAN_SCORE);
    }
}

/// Strategy 5: ambiguous nouns, only with qualifying context nearby.
fn ambiguous_nouns(lex: &Lexicon, text: &str, pool: &mut Vec<Candidate<String>>) {
    for caps in lex.ambiguous_determiner_re.captures_iter(text) {
        push(lex, pool, caps[1].trim().to_string(), AMBIGUOUS_DETERMINER_SCORE);
    }
    for caps in lex.ambiguous_preposition_re.captures_iter(text) {
        push(lex, pool, caps[1].trim().to_string(), AMBIGUOUS_PREPOSITION_SCORE);
    }
    for caps in lex.ambiguous_verb_re.captures_iter(text) {
        push(lex, pool, caps[1].trim().to_string(), AMBIGUOUS_VERB_SCORE);
    }
}

fn push(lex: &Lexicon, pool: &mut Vec<Candidate<String>>, value: String, base: f32) {
    if value.is_empty() {
        return;
    }
    let first_word = value
        .split_whitespace()
        .next()
        .map(str::to_lowercase)
        .unwrap_or_default();
    if CALENDAR_WORDS.contains(&first_word.as_str()) {
        return;
    }
    let score = adjust(lex, &value, base);
    pool.push(Candidate::new(value, score));
}

/// Apply the shared boosts and the genericness penalty.
fn adjust(lex: &Lexicon, value: &str, base: f32) -> f32 {
    let mut score = base;
    if has_capitalized_token(value) {
        score += PROPER_NOUN_BOOST;
    }
    if lex.has_locational_adjective(value) {
        score += ADJECTIVE_BOOST;
    }
    if lex.is_generic_place(value) {
        score -= GENERIC_PENALTY;
    }
    score.clamp(0.0, 1.0)
}

fn has_capitalized_token(phrase: &str) -> bool {
    phrase
        .split_whitespace()
        .any(|w| w.chars().next().is_some_and(char::is_uppercase))
}

fn floor_boundary(text: &str, mut index: usize) -> usize {
    while index > 0 && !text.is_char_boundary(index) {
        index -= 1;
    }
    index
}

// ── Tests ───────────────────────────────────────────────────────────────
