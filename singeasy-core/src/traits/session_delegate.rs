use crate::models::artifact::RecordingArtifact;
use crate::models::error::SessionError;
use crate::models::state::SessionPhase;

/// Event sink for recording-session notifications.
///
/// This is where the presentation layer hangs its toasts: the controller
/// only promises to signal success and failure, not how they are shown.
/// All methods are called synchronously from the controller's thread.
pub trait SessionDelegate {
    /// Called whenever the session transitions to a new phase.
    fn on_state_changed(&self, phase: SessionPhase);

    /// Called when an operation fails (permission denied, device error, ...).
    fn on_error(&self, error: &SessionError);

    /// Called when a take is finalized into an artifact.
    fn on_recording_finished(&self, artifact: &RecordingArtifact);
}
