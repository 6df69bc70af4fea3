//! Weather vocabulary, synonyms, and environmental anchors.
//!
//! The vocabulary is split in two tiers. Phenomenon nouns (a storm, a
//! blizzard) are unambiguous weather on their own. Condition terms (cold,
//! warm, clear) are everyday words that only count near an environmental
//! anchor — "cold shoulder" and "I have a cold" must never read as weather.

/// Self-evident weather phenomena; no anchor required.
pub const WEATHER_PHENOMENA: &[&str] = &[
    "storm",
    "stormy",
    "thunderstorm",
    "rainstorm",
    "snowstorm",
    "blizzard",
    "thunder",
    "lightning",
    "drizzle",
    "drizzling",
    "downpour",
    "sleet",
    "hail",
    "hailstorm",
    "heatwave",
    "heat wave",
    "raining",
    "pouring",
    "snowing",
    "freezing rain",
];

/// Condition terms; require an anchor word nearby.
pub const WEATHER_CONDITIONS: &[&str] = &[
    "sunny",
    "rain",
    "rainy",
    "cloudy",
    "overcast",
    "clear",
    "clear skies",
    "snow",
    "snowy",
    "fog",
    "foggy",
    "misty",
    "wind",
    "windy",
    "breeze",
    "breezy",
    "shower",
    "showers",
    "humid",
    "muggy",
    "hot",
    "cold",
    "warm",
    "chilly",
    "freezing",
    "icy",
    "crisp",
];

/// Many-to-one normalization onto the canonical weather vocabulary.
pub const WEATHER_SYNONYMS: &[(&str, &str)] = &[
    ("raining", "rainy"),
    ("pouring", "rainy"),
    ("drizzling", "drizzle"),
    ("snowing", "snowy"),
    ("thunderstorm", "storm"),
    ("rainstorm", "storm"),
    ("snowstorm", "blizzard"),
    ("stormy", "storm"),
    ("hailstorm", "hail"),
    ("heat wave", "heatwave"),
    ("misty", "foggy"),
    ("showers", "shower"),
];

/// Environmental anchor words that gate condition-term matches.
pub const WEATHER_ANCHORS: &[&str] = &[
    "outside",
    "outdoors",
    "weather",
    "sky",
    "skies",
    "air",
    "temperature",
    "forecast",
    "storm",
    "rain",
    "snow",
    "wind",
    "sun",
    "heat",
    "cold",
    "clouds",
    "breeze",
    "horizon",
];
