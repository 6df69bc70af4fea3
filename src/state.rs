//! Scene state records, patches, and the field-level differ.
//!
//! A [`SceneState`] is the caller-owned "current known" record of scene
//! facts; the engine never holds one across calls. Extraction produces a
//! [`ScenePatch`] — the subset of fields the engine is confident about.
//! An absent patch field means "no new information", never "clear this
//! field".

use serde::{Deserialize, Serialize};

// ── Field ───────────────────────────────────────────────────────────────

/// The five scene-state fields, in canonical (declaration) order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Field {
    DateTime,
    Place,
    Mood,
    Weather,
    Notes,
}

impl Field {
    /// All fields in canonical order. Diff output follows this order.
    pub const ALL: [Field; 5] = [
        Field::DateTime,
        Field::Place,
        Field::Mood,
        Field::Weather,
        Field::Notes,
    ];
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DateTime => write!(f, "dateTime"),
            Self::Place => write!(f, "place"),
            Self::Mood => write!(f, "mood"),
            Self::Weather => write!(f, "weather"),
            Self::Notes => write!(f, "notes"),
        }
    }
}

// ── SceneState ──────────────────────────────────────────────────────────

/// The current known scene facts. All fields default to the empty string.
///
/// Wire names are camelCase to match the remote-classifier payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SceneState {
    /// In-story date/time, free-form (e.g. "Aug 05, 2026, 7 PM").
    pub date_time: String,
    /// Where the scene takes place.
    pub place: String,
    /// Dominant mood, canonical vocabulary where extracted heuristically.
    pub mood: String,
    /// Weather condition.
    pub weather: String,
    /// Free-form scene notes (never produced by the heuristic engine).
    pub notes: String,
}

impl SceneState {
    /// Read one field by name.
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::DateTime => &self.date_time,
            Field::Place => &self.place,
            Field::Mood => &self.mood,
            Field::Weather => &self.weather,
            Field::Notes => &self.notes,
        }
    }
}

// ── ScenePatch ──────────────────────────────────────────────────────────

/// A partial update to a [`SceneState`].
///
/// Invariant: a present field is never an empty string — extractors emit
/// either a non-empty value or nothing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ScenePatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mood: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weather: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

impl ScenePatch {
    /// Whether the patch carries no new information at all.
    pub fn is_empty(&self) -> bool {
        self.date_time.is_none()
            && self.place.is_none()
            && self.mood.is_none()
            && self.weather.is_none()
            && self.notes.is_none()
    }

    /// Read one field by name.
    pub fn get(&self, field: Field) -> Option<&str> {
        match field {
            Field::DateTime => self.date_time.as_deref(),
            Field::Place => self.place.as_deref(),
            Field::Mood => self.mood.as_deref(),
            Field::Weather => self.weather.as_deref(),
            Field::Notes => self.notes.as_deref(),
        }
    }

    /// Set one field by name. Empty values are ignored, preserving the
    /// non-empty invariant.
    pub fn set(&mut self, field: Field, value: String) {
        if value.is_empty() {
            return;
        }
        match field {
            Field::DateTime => self.date_time = Some(value),
            Field::Place => self.place = Some(value),
            Field::Mood => self.mood = Some(value),
            Field::Weather => self.weather = Some(value),
            Field::Notes => self.notes = Some(value),
        }
    }

    /// Merge this patch into a state, returning the updated state.
    /// Absent fields keep their previous values.
    pub fn apply_to(&self, prev: &SceneState) -> SceneState {
        let mut next = prev.clone();
        for field in Field::ALL {
            if let Some(value) = self.get(field) {
                match field {
                    Field::DateTime => next.date_time = value.to_string(),
                    Field::Place => next.place = value.to_string(),
                    Field::Mood => next.mood = value.to_string(),
                    Field::Weather => next.weather = value.to_string(),
                    Field::Notes => next.notes = value.to_string(),
                }
            }
        }
        next
    }
}

// ── Diff ────────────────────────────────────────────────────────────────

/// One changed field between two state snapshots.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    pub field: Field,
    pub from: String,
    pub to: String,
}

/// Field-level diff between two [`SceneState`] snapshots, in canonical
/// field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateDiff {
    pub changes: Vec<FieldChange>,
}

impl StateDiff {
    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Look up the change for one field, if any.
    pub fn get(&self, field: Field) -> Option<&FieldChange> {
        self.changes.iter().find(|c| c.field == field)
    }
}

/// Compare two snapshots field by field; empty string is the default value.
pub fn diff(prev: &SceneState, next: &SceneState) -> StateDiff {
    let mut changes = Vec::new();
    for field in Field::ALL {
        let from = prev.get(field);
        let to = next.get(field);
        if from != to {
            changes.push(FieldChange {
                field,
                from: from.to_string(),
                to: to.to_string(),
            });
        }
    }
    StateDiff { changes }
}

/// Render a diff for humans: `"No changes."` when empty, otherwise one
/// `field: "from" → "to"` line per changed field.
pub fn summarize(diff: &StateDiff) -> String {
    if diff.is_empty() {
        return "No changes.".to_string();
    }
    diff.changes
        .iter()
        .map(|c| format!("{}: \"{}\" → \"{}\"", c.field, c.from, c.to))
        .collect::<Vec<_>>()
        .join("\n")
}

// ── Tests ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn state(place: &str, mood: &str) -> SceneState {
        SceneState {
            place: place.to_string(),
            mood: mood.to_string(),
            ..SceneState::default()
        }
    }

    #[test]
    fn diff_reports_changed_fields_only() {
        let prev = state("cafe", "calm");
        let next = state("station", "calm");

        let d = diff(&prev, &next);
        assert_eq!(d.changes.len(), 1);
        let change = d.get(Field::Place).unwrap();
        assert_eq!(change.from, "cafe");
        assert_eq!(change.to, "station");
        assert!(d.get(Field::Mood).is_none());
    }

    #[test]
    fn diff_is_ordered_by_field_declaration() {
        let prev = SceneState::default();
        let next = SceneState {
            date_time: "Aug 05, 2026".to_string(),
            place: "cafe".to_string(),
            weather: "rainy".to_string(),
            ..SceneState::default()
        };

        let d = diff(&prev, &next);
        let fields: Vec<Field> = d.changes.iter().map(|c| c.field).collect();
        assert_eq!(fields, vec![Field::DateTime, Field::Place, Field::Weather]);
    }

    #[test]
    fn summarize_empty_diff() {
        assert_eq!(summarize(&StateDiff::default()), "No changes.");
    }

    #[test]
    fn summarize_renders_one_line_per_change() {
        let d = diff(&state("cafe", ""), &state("station", "tired"));
        let rendered = summarize(&d);
        assert_eq!(rendered, "place: \"cafe\" → \"station\"\nmood: \"\" → \"tired\"");
    }

    #[test]
    fn patch_apply_keeps_absent_fields() {
        let prev = state("cafe", "calm");
        let patch = ScenePatch {
            place: Some("station".to_string()),
            ..ScenePatch::default()
        };

        let next = patch.apply_to(&prev);
        assert_eq!(next.place, "station");
        assert_eq!(next.mood, "calm");
    }

    #[test]
    fn patch_set_ignores_empty_values() {
        let mut patch = ScenePatch::default();
        patch.set(Field::Mood, String::new());
        assert!(patch.is_empty());

        patch.set(Field::Mood, "tired".to_string());
        assert_eq!(patch.get(Field::Mood), Some("tired"));
    }

    #[test]
    fn patch_serializes_only_present_fields() {
        let patch = ScenePatch {
            mood: Some("anxious".to_string()),
            ..ScenePatch::default()
        };
        let json = serde_json::to_string(&patch).unwrap();
        assert_eq!(json, r#"{"mood":"anxious"}"#);
    }

    #[test]
    fn state_uses_camel_case_wire_names() {
        let state = SceneState {
            date_time: "tonight".to_string(),
            ..SceneState::default()
        };
        let json = serde_json::to_string(&state).unwrap();
        assert!(json.contains("\"dateTime\":\"tonight\""));
    }
}
