use thiserror::Error;

/// Errors surfaced by the practice-session controllers.
///
/// All variants are local and recoverable: they are reported to the caller
/// (and the `SessionDelegate`, when one is attached) and never retried
/// automatically. The user retries by issuing the operation again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error("microphone permission denied")]
    PermissionDenied,

    #[error("capture device unavailable")]
    DeviceUnavailable,

    #[error("playback failed: {0}")]
    PlaybackError(String),

    #[error("invalid session state: {0}")]
    InvalidState(&'static str),

    #[error("storage error: {0}")]
    StorageError(String),
}
