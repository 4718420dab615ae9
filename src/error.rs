//! Typed errors for the drafting core

use thiserror::Error;

/// Outcome classification for a generation request.
///
/// `Validation` and `InFlight` are produced before any network traffic;
/// `Network` and `Server` classify what came back (or didn't).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerationError {
    /// Input was blank after trimming; nothing was sent.
    #[error("empty content")]
    Validation,
    /// A previous request is still awaiting its response.
    #[error("a generation request is already in flight")]
    InFlight,
    /// The request never reached the generation service.
    #[error("could not reach the generation service: {0}")]
    Network(String),
    /// The service responded with a failure status. Carries the body's
    /// `detail` field verbatim when present.
    #[error("{0}")]
    Server(String),
}

/// Selection referenced a reply id that is not in the current collection.
/// This is a logic bug in the caller, not a user error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("no reply with id {id} in the current collection")]
    NotFound { id: String },
}

/// The platform denied the clipboard write.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("clipboard error: {0}")]
pub struct ClipboardError(pub String);
