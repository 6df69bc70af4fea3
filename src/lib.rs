//! # stagehand
//!
//! A heuristic scene-state extraction engine: scans one block of free-form
//! narrative text and produces a partial update (a patch) to a small
//! structured scene record — in-story date/time, place, mood, and weather.
//!
//! ## Architecture
//!
//! - **Lexicon** (`lexicon`): immutable vocabulary tables, synonym maps,
//!   affect metadata, and the regexes compiled from them
//! - **Scoring** (`score`): shared candidate selection with threshold and
//!   tie-break logic
//! - **Extractors** (`extract`): independent per-field strategy cascades
//!   pooled through one selection function
//! - **Date/time** (`timeparse`): pluggable natural-language parser with a
//!   deterministic rule-based default
//! - **Remote** (`remote`): optional network classifier that falls back to
//!   the heuristic path on any failure
//! - **State** (`state`): scene records, patches, field-level diff and a
//!   human-readable change summary
//!
//! The engine is deterministic: the caller supplies the reference instant,
//! and nothing in library code reads the wall clock.
//!
//! ## Library usage
//!
//! ```
//! use chrono::NaiveDate;
//! use stagehand::{ExtractorOptions, Granularity, HeuristicExtractor, SceneState};
//!
//! let engine = HeuristicExtractor::new(ExtractorOptions {
//!     granularity: Granularity::DateTime,
//!     ..ExtractorOptions::default()
//! });
//! let now = NaiveDate::from_ymd_opt(2026, 8, 5)
//!     .unwrap()
//!     .and_hms_opt(14, 0, 0)
//!     .unwrap();
//! let patch = engine.extract(
//!     "Let's meet tomorrow evening at the cafe.",
//!     &SceneState::default(),
//!     now,
//! );
//! assert_eq!(patch.place.as_deref(), Some("the cafe"));
//! assert_eq!(patch.date_time.as_deref(), Some("Aug 06, 2026, 7 PM"));
//! ```

pub mod error;
pub mod extract;
pub mod lexicon;
pub mod remote;
pub mod score;
pub mod state;
pub mod timeparse;

pub use error::{LexiconError, RemoteError, StagehandError, StagehandResult};
pub use extract::{ExtractorOptions, Granularity, HeuristicExtractor, PatchSource};
pub use lexicon::{Lexicon, MoodAxes, MoodFeatures};
pub use remote::{RemoteClassifier, RemoteOptions};
pub use score::{choose_best, Candidate, MIN_ACCEPT_SCORE};
pub use state::{diff, summarize, Field, FieldChange, ScenePatch, SceneState, StateDiff};
pub use timeparse::{NaturalDateParser, ParsedInstant, RelativeDateParser};
