//! Generic word lists shared by the pattern matchers.
//!
//! These feed the compiled alternations in [`super::Lexicon`]; the
//! extractors never touch them directly.

/// Markers that suppress a mood/weather candidate when found inside the
/// negation window around a match.
pub const NEGATION_MARKERS: &[&str] = &[
    "not",
    "no longer",
    "isn't",
    "isnt",
    "ain't",
    "aint",
    "wasn't",
    "wasnt",
    "without",
    "never",
    "hardly",
    "no sign of",
];

/// Determiners and possessives folded into place values when they
/// immediately precede a known place noun.
pub const DETERMINERS: &[&str] = &["the", "my", "our", "his", "her", "their", "a", "an", "your"];

/// Prepositions that introduce a location.
pub const LOCATION_PREPOSITIONS: &[&str] =
    &["at", "in", "inside", "outside", "by", "near", "around", "on"];

/// Motion prepositions accepted by the proper-noun strategy ("wandered
/// through the Grand Library", "headed into Ravenwood").
pub const MOTION_PREPOSITIONS: &[&str] = &["through", "into", "to", "toward", "towards", "onto"];

/// Wider preposition set for the generic free-text span strategy.
pub const SPAN_PREPOSITIONS: &[&str] = &[
    "at", "in", "on", "inside", "by", "near", "around", "outside", "behind", "beside", "under",
    "over", "between",
];

/// Motion verbs that let an ambiguous noun count as a place.
pub const MOTION_VERBS: &[&str] = &[
    "arrive", "arrived", "arrives", "leave", "left", "leaves", "walk", "walked", "walks", "drive",
    "drove", "drives", "go", "goes", "went", "head", "headed", "heads", "enter", "entered",
    "enters", "exit", "exited", "exits", "wander", "wandered", "wanders",
];

/// Trailing temporal filler trimmed from captured place spans.
pub const TEMPORAL_FILLERS: &[&str] = &[
    "now",
    "today",
    "tonight",
    "this morning",
    "this afternoon",
    "this evening",
    "this night",
];

/// Intensifiers skipped between a feeling verb and the mood phrase.
pub const INTENSIFIERS: &[&str] = &[
    "a bit", "a little", "kind of", "kinda", "sort of", "sorta", "so", "really", "very", "quite",
    "pretty", "somewhat", "slightly", "rather",
];

/// Day-part keywords and the default hour each implies when the parsed
/// time-of-day is uncertain.
pub const DAY_PART_HOURS: &[(&str, u32)] = &[
    ("morning", 9),
    ("sunrise", 9),
    ("dawn", 9),
    ("noon", 12),
    ("afternoon", 15),
    ("evening", 19),
    ("sunset", 19),
    ("dusk", 19),
    ("midnight", 0),
    ("tonight", 22),
    ("night", 22),
];
