//! Candidate scoring and selection.
//!
//! Every text-derived field (place, mood, weather) runs a set of
//! independent strategies, each producing scored [`Candidate`]s; the pooled
//! candidates go through [`choose_best`], which enforces the minimum
//! acceptance threshold. The date/time field carries its own
//! parser-provided confidence and does not use this path.

/// Minimum score a winning candidate must reach to appear in a patch.
pub const MIN_ACCEPT_SCORE: f32 = 0.6;

/// An extractor's hypothesis for a field value, before selection.
#[derive(Debug, Clone, PartialEq)]
pub struct Candidate<T> {
    pub value: T,
    /// Confidence in [0.0, 1.0].
    pub score: f32,
}

impl<T> Candidate<T> {
    pub fn new(value: T, score: f32) -> Self {
        Self { value, score }
    }
}

/// Select the highest-scoring candidate, if it clears `min_score`.
///
/// Ties resolve to the first-generated candidate (strict-greater scan), so
/// strategy generation order doubles as the priority order. Returns `None`
/// for an empty pool or a below-threshold maximum.
pub fn choose_best<T>(candidates: Vec<Candidate<T>>, min_score: f32) -> Option<Candidate<T>> {
    let mut best: Option<Candidate<T>> = None;
    for candidate in candidates {
        match &best {
            Some(current) if candidate.score <= current.score => {}
            _ => best = Some(candidate),
        }
    }
    best.filter(|b| b.score >= min_score)
}

// ── Tests ───────────────────────────────────────────────────────────────
