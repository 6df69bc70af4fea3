//! Diagnostic error types for the stagehand engine.
//!
//! The engine is fail-open: extractor strategies never raise past the
//! orchestrator, and an unmatched field is simply absent from the patch.
//! The error types here cover the two places where something *can* be
//! wrong — a defective lexicon table (caught by tests via
//! `Lexicon::validate`) and the remote classifier transport (logged and
//! converted into "use the heuristic path").

use miette::Diagnostic;
use thiserror::Error;

/// Top-level error type for stagehand.
#[derive(Debug, Error, Diagnostic)]
pub enum StagehandError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Lexicon(#[from] LexiconError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Remote(#[from] RemoteError),
}

// ---------------------------------------------------------------------------
// Lexicon errors
// ---------------------------------------------------------------------------

/// Defects in the static vocabulary tables.
///
/// These are latent data bugs, not runtime conditions: `Lexicon::validate`
/// exists so the test suite can prove resolution is total.
#[derive(Debug, Error, Diagnostic)]
pub enum LexiconError {
    #[error("dangling {kind} synonym: \"{synonym}\" resolves to non-canonical \"{target}\"")]
    #[diagnostic(
        code(stagehand::lexicon::dangling_synonym),
        help(
            "Every synonym must map onto a member of the canonical vocabulary. \
             Add the target to the canonical list or fix the synonym entry."
        )
    )]
    DanglingSynonym {
        kind: &'static str,
        synonym: String,
        target: String,
    },

    #[error("{kind} table entry \"{key}\" does not name a canonical mood")]
    #[diagnostic(
        code(stagehand::lexicon::orphan_metadata),
        help(
            "Intensity and affect-axis entries are keyed by canonical mood. \
             Remove the entry or add the mood to the canonical list."
        )
    )]
    OrphanMetadata { kind: &'static str, key: String },
}

// ---------------------------------------------------------------------------
// Remote classifier errors
// ---------------------------------------------------------------------------

/// Failures of the remote field classifier (Collaborator B).
///
/// Never surfaced to callers: `RemoteClassifier` logs these at `warn` and
/// falls back to the heuristic extractor.
#[derive(Debug, Error, Diagnostic)]
pub enum RemoteError {
    #[error("no endpoint configured for remote extraction")]
    #[diagnostic(
        code(stagehand::remote::no_endpoint),
        help("Set a non-empty endpoint URL in RemoteOptions.")
    )]
    NoEndpoint,

    #[error("remote classifier returned HTTP {status}")]
    #[diagnostic(
        code(stagehand::remote::http_status),
        help("The endpoint must answer 2xx with a JSON object body.")
    )]
    HttpStatus { status: u16 },

    #[error("transport error talking to remote classifier: {message}")]
    #[diagnostic(
        code(stagehand::remote::transport),
        help(
            "Connection failed or the configured timeout elapsed. \
             The heuristic extractor is used instead."
        )
    )]
    Transport { message: String },

    #[error("remote classifier returned a malformed payload: {message}")]
    #[diagnostic(
        code(stagehand::remote::malformed_payload),
        help("The response body must be a JSON object with optional string fields.")
    )]
    MalformedPayload { message: String },
}

/// Convenience alias for functions returning stagehand results.
pub type StagehandResult<T> = std::result::Result<T, StagehandError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lexicon_error_converts_to_top_level() {
        let err = LexiconError::DanglingSynonym {
            kind: "mood",
            synonym: "wistful".into(),
            target: "nostalgic".into(),
        };
        let top: StagehandError = err.into();
        assert!(matches!(
            top,
            StagehandError::Lexicon(LexiconError::DanglingSynonym { .. })
        ));
    }

    #[test]
    fn remote_error_messages_are_descriptive() {
        let err = RemoteError::HttpStatus { status: 503 };
        assert!(format!("{err}").contains("503"));
    }
}
