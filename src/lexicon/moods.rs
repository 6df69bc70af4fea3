//! Canonical mood vocabulary, synonyms, intensity hints, and affect axes.

use serde::{Deserialize, Serialize};

// ── Affect axes ─────────────────────────────────────────────────────────

/// Four-dimensional affect summary for a canonical mood.
///
/// Valence, dominance and attachment are nominally in [-1, 1]; arousal in
/// [0, 1]. Canonical moods without an explicit entry fall back to
/// [`MoodAxes::NEUTRAL`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MoodAxes {
    pub valence: f32,
    pub arousal: f32,
    pub dominance: f32,
    pub attachment: f32,
}

impl MoodAxes {
    /// Neutral fallback vector.
    pub const NEUTRAL: MoodAxes = MoodAxes {
        valence: 0.0,
        arousal: 0.5,
        dominance: 0.0,
        attachment: 0.0,
    };
}

const fn axes(valence: f32, arousal: f32, dominance: f32, attachment: f32) -> MoodAxes {
    MoodAxes {
        valence,
        arousal,
        dominance,
        attachment,
    }
}

// ── Vocabulary ──────────────────────────────────────────────────────────

/// Closed canonical mood vocabulary. All synonym resolution lands here.
pub const CANONICAL_MOODS: &[&str] = &[
    "happy",
    "sad",
    "angry",
    "excited",
    "nervous",
    "calm",
    "anxious",
    "tired",
    "relaxed",
    "romantic",
    "scared",
    "fearful",
    "confident",
    "playful",
    "serious",
    "flirty",
    "melancholy",
    "joyful",
    "furious",
    "hopeful",
    "okay",
    "ok",
    "fine",
    "meh",
    "bored",
    "curious",
    "lonely",
    "guilty",
    "ashamed",
    "embarrassed",
    "surprised",
    "shocked",
    "annoyed",
    "frustrated",
    "focused",
    "determined",
    "content",
    "satisfied",
    "worried",
    "terrified",
    "cheerful",
    "miserable",
    "homesick",
    "blissful",
];

/// Many-to-one synonym map onto [`CANONICAL_MOODS`].
///
/// Resolution is total: every right-hand value must be canonical
/// (checked by `Lexicon::validate`).
pub const MOOD_SYNONYMS: &[(&str, &str)] = &[
    ("thrilled", "excited"),
    ("ecstatic", "excited"),
    ("pumped", "excited"),
    ("stoked", "excited"),
    ("giddy", "excited"),
    ("delighted", "happy"),
    ("glad", "happy"),
    ("elated", "happy"),
    ("overjoyed", "joyful"),
    ("depressed", "sad"),
    ("down", "sad"),
    ("blue", "sad"),
    ("heartbroken", "sad"),
    ("gloomy", "melancholy"),
    ("wistful", "melancholy"),
    ("pissed", "angry"),
    ("mad", "angry"),
    ("irate", "angry"),
    ("livid", "angry"),
    ("enraged", "furious"),
    ("tense", "nervous"),
    ("jittery", "nervous"),
    ("on edge", "anxious"),
    ("uneasy", "anxious"),
    ("chill", "relaxed"),
    ("serene", "calm"),
    ("peaceful", "calm"),
    ("exhausted", "tired"),
    ("sleepy", "tired"),
    ("drained", "tired"),
    ("weary", "tired"),
    ("affectionate", "romantic"),
    ("afraid", "scared"),
    ("spooked", "scared"),
    ("panicked", "terrified"),
    ("upbeat", "cheerful"),
    ("optimistic", "hopeful"),
];

// ── Intensity hints ─────────────────────────────────────────────────────

/// Emotional intensity per canonical mood, centered at 0.5.
///
/// Keyed by normalized canonical key; moods without an entry read as 0.5.
/// Used to nudge vocabulary-scan scores so extreme moods beat mild ones
/// when competing.
pub const MOOD_INTENSITY: &[(&str, f32)] = &[
    ("happy", 0.6),
    ("sad", 0.55),
    ("angry", 0.7),
    ("excited", 0.7),
    ("nervous", 0.55),
    ("calm", 0.3),
    ("anxious", 0.6),
    ("tired", 0.45),
    ("relaxed", 0.35),
    ("romantic", 0.5),
    ("scared", 0.7),
    ("fearful", 0.65),
    ("confident", 0.55),
    ("playful", 0.5),
    ("serious", 0.45),
    ("flirty", 0.5),
    ("melancholy", 0.5),
    ("joyful", 0.7),
    ("furious", 0.9),
    ("hopeful", 0.55),
    ("okay", 0.3),
    ("ok", 0.3),
    ("fine", 0.3),
    ("meh", 0.25),
    ("bored", 0.35),
    ("curious", 0.45),
    ("lonely", 0.55),
    ("guilty", 0.55),
    ("ashamed", 0.6),
    ("embarrassed", 0.55),
    ("surprised", 0.6),
    ("shocked", 0.75),
    ("annoyed", 0.45),
    ("frustrated", 0.6),
    ("focused", 0.45),
    ("determined", 0.55),
    ("content", 0.35),
    ("satisfied", 0.4),
    ("worried", 0.6),
    ("terrified", 0.95),
    ("cheerful", 0.6),
    ("miserable", 0.8),
    ("homesick", 0.55),
    ("blissful", 0.7),
];

// ── Affect axis table ───────────────────────────────────────────────────

/// Affect axes per canonical mood. The bland placeholder moods
/// (okay/ok/fine/meh) intentionally have no entry and read as
/// [`MoodAxes::NEUTRAL`].
pub const MOOD_AXES: &[(&str, MoodAxes)] = &[
    ("happy", axes(0.8, 0.6, 0.4, 0.3)),
    ("sad", axes(-0.7, 0.3, -0.3, -0.2)),
    ("angry", axes(-0.6, 0.8, 0.5, -0.4)),
    ("excited", axes(0.7, 0.85, 0.4, 0.2)),
    ("nervous", axes(-0.4, 0.7, -0.4, -0.1)),
    ("calm", axes(0.5, 0.2, 0.3, 0.2)),
    ("anxious", axes(-0.5, 0.75, -0.4, -0.1)),
    ("tired", axes(-0.3, 0.2, -0.2, 0.0)),
    ("relaxed", axes(0.6, 0.2, 0.3, 0.2)),
    ("romantic", axes(0.7, 0.55, 0.2, 0.8)),
    ("scared", axes(-0.7, 0.8, -0.6, -0.2)),
    ("fearful", axes(-0.65, 0.75, -0.6, -0.2)),
    ("confident", axes(0.6, 0.55, 0.7, 0.1)),
    ("playful", axes(0.7, 0.65, 0.4, 0.4)),
    ("serious", axes(0.0, 0.45, 0.4, 0.0)),
    ("flirty", axes(0.65, 0.6, 0.4, 0.7)),
    ("melancholy", axes(-0.5, 0.3, -0.2, -0.1)),
    ("joyful", axes(0.85, 0.7, 0.45, 0.35)),
    ("furious", axes(-0.8, 0.95, 0.6, -0.5)),
    ("hopeful", axes(0.6, 0.5, 0.3, 0.2)),
    ("bored", axes(-0.3, 0.15, -0.1, -0.2)),
    ("curious", axes(0.4, 0.55, 0.2, 0.1)),
    ("lonely", axes(-0.6, 0.35, -0.4, -0.7)),
    ("guilty", axes(-0.55, 0.5, -0.5, 0.1)),
    ("ashamed", axes(-0.6, 0.5, -0.6, -0.1)),
    ("embarrassed", axes(-0.45, 0.6, -0.5, 0.0)),
    ("surprised", axes(0.2, 0.8, -0.1, 0.0)),
    ("shocked", axes(-0.3, 0.85, -0.3, -0.1)),
    ("annoyed", axes(-0.4, 0.55, 0.1, -0.3)),
    ("frustrated", axes(-0.55, 0.65, 0.0, -0.3)),
    ("focused", axes(0.3, 0.55, 0.5, -0.1)),
    ("determined", axes(0.4, 0.65, 0.7, 0.0)),
    ("content", axes(0.6, 0.25, 0.3, 0.3)),
    ("satisfied", axes(0.6, 0.3, 0.4, 0.2)),
    ("worried", axes(-0.5, 0.65, -0.3, 0.1)),
    ("terrified", axes(-0.9, 0.95, -0.8, -0.3)),
    ("cheerful", axes(0.75, 0.6, 0.4, 0.3)),
    ("miserable", axes(-0.85, 0.4, -0.5, -0.3)),
    ("homesick", axes(-0.5, 0.4, -0.3, 0.6)),
    ("blissful", axes(0.9, 0.45, 0.3, 0.5)),
];

// ── Contextual blacklist ────────────────────────────────────────────────

/// Known false-positive contexts: when the matched surface form is
/// immediately followed by the context word within a short window, the
/// match is not a mood signal ("Happy birthday!", "down the street").
pub const MOOD_CONTEXT_BLACKLIST: &[(&str, &str)] = &[
    ("happy", "birthday"),
    ("happy", "hour"),
    ("happy", "anniversary"),
    ("happy", "new year"),
    ("down", "the"),
    ("down", "a"),
    ("down", "to"),
    ("blue", "sky"),
    ("blue", "skies"),
    ("content", "of"),
];

/// Synonyms too noisy for the whole-text vocabulary scan ("sat down",
/// "blue car"). Still resolved when captured by the first-person feeling
/// pattern.
pub const SCAN_EXCLUDED_SYNONYMS: &[&str] = &["down", "blue"];
