use std::mem;
use std::sync::Arc;
use std::time::Instant;

use parking_lot::Mutex;

use crate::models::artifact::{ArtifactExport, RecordingArtifact};
use crate::models::error::SessionError;
use crate::models::state::SessionPhase;
use crate::traits::capture_source::{CaptureSource, ChunkSink};
use crate::traits::session_delegate::SessionDelegate;

/// Controller for one microphone-recording attempt at a time.
///
/// Generic over the host capture capability via `CaptureSource`. Owns the
/// full lifecycle:
/// ```text
/// [CaptureSource] → chunk sink → [arrival-order buffer] → stop() → [RecordingArtifact]
/// ```
///
/// At most one take can be recording per controller; the capture device is
/// held exclusively between a successful `start()` and the matching
/// `stop()`/`reset()`, and is released on every exit path, including drop.
pub struct RecordingSession<C: CaptureSource> {
    source: C,
    phase: SessionPhase,
    // Shared with the chunk sink; the capture thread appends, stop() drains.
    buffer: Arc<Mutex<Vec<u8>>>,
    artifact: Option<RecordingArtifact>,
    delegate: Option<Arc<dyn SessionDelegate>>,
    started_at: Option<Instant>,
    device_held: bool,
}

impl<C: CaptureSource> RecordingSession<C> {
    pub fn new(source: C) -> Self {
        Self {
            source,
            phase: SessionPhase::Idle,
            buffer: Arc::new(Mutex::new(Vec::new())),
            artifact: None,
            delegate: None,
            started_at: None,
            device_held: false,
        }
    }

    pub fn set_delegate(&mut self, delegate: Arc<dyn SessionDelegate>) {
        self.delegate = Some(delegate);
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    /// The finalized artifact, if the session is stopped.
    pub fn artifact(&self) -> Option<&RecordingArtifact> {
        self.artifact.as_ref()
    }

    /// Playable URL of the current artifact. Invalidated by `reset()`.
    pub fn artifact_url(&self) -> Option<&str> {
        self.artifact.as_ref().map(RecordingArtifact::url)
    }

    /// Request microphone access and begin buffering chunks.
    ///
    /// Only valid from idle; a `start()` while recording or stopped is
    /// rejected with `InvalidState`. On grant the session transitions to
    /// recording. On denial or device failure it stays idle, the error is
    /// surfaced to the delegate, and the device is never held.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if !self.phase.is_idle() {
            return Err(SessionError::InvalidState("start() requires an idle session"));
        }

        // Fresh buffer per take, so a straggling chunk from a previous
        // source callback can never leak into this one.
        let buffer = Arc::new(Mutex::new(Vec::new()));
        let sink: ChunkSink = {
            let buffer = Arc::clone(&buffer);
            Arc::new(move |chunk: &[u8]| {
                buffer.lock().extend_from_slice(chunk);
            })
        };

        match self.source.start(sink) {
            Ok(()) => {
                self.buffer = buffer;
                self.device_held = true;
                self.started_at = Some(Instant::now());
                self.set_phase(SessionPhase::Recording);
                log::info!("recording started on {}", self.source.device_info().name);
                Ok(())
            }
            Err(err) => {
                log::warn!("could not start recording: {err}");
                if let Some(delegate) = &self.delegate {
                    delegate.on_error(&err);
                }
                Err(err)
            }
        }
    }

    /// Finalize the take into an immutable artifact and release the device.
    ///
    /// Effective only while recording; in idle or stopped this is a no-op
    /// returning `None`. The artifact payload is the chunk concatenation in
    /// arrival order, and every take yields a distinct identity and URL.
    pub fn stop(&mut self) -> Option<&RecordingArtifact> {
        if !self.phase.is_recording() {
            return None;
        }

        self.release_device();

        let data = mem::take(&mut *self.buffer.lock());
        let duration_secs = self
            .started_at
            .take()
            .map(|t| t.elapsed().as_secs_f64())
            .unwrap_or(0.0);

        let artifact = RecordingArtifact::new(data, duration_secs);
        log::info!(
            "recording stopped: {} bytes over {:.1}s",
            artifact.len(),
            artifact.duration_secs()
        );

        self.set_phase(SessionPhase::Stopped);
        if let Some(delegate) = &self.delegate {
            delegate.on_recording_finished(&artifact);
        }
        self.artifact = Some(artifact);
        self.artifact.as_ref()
    }

    /// Discard the current take and return to idle.
    ///
    /// Valid from any phase. While recording this is the cancellation path
    /// (page navigation, "try again"): the device is force-released and the
    /// buffered chunks are dropped without producing an artifact. Any
    /// previously issued artifact URL becomes invalid.
    pub fn reset(&mut self) {
        if self.phase.is_recording() {
            self.release_device();
            self.buffer.lock().clear();
            self.started_at = None;
            log::info!("recording discarded without an artifact");
        }
        if let Some(artifact) = self.artifact.take() {
            log::debug!("invalidated artifact {}", artifact.id());
        }
        self.set_phase(SessionPhase::Idle);
    }

    /// Package the artifact for download.
    ///
    /// Available only once stopped; the artifact itself is immutable, so
    /// there is no failure path beyond the phase guard.
    pub fn export_artifact(&self) -> Result<ArtifactExport, SessionError> {
        match (&self.phase, &self.artifact) {
            (SessionPhase::Stopped, Some(artifact)) => Ok(artifact.export()),
            _ => Err(SessionError::InvalidState(
                "export_artifact() requires a stopped session",
            )),
        }
    }

    /// The capture source backing this session.
    pub fn source(&self) -> &C {
        &self.source
    }

    fn set_phase(&mut self, phase: SessionPhase) {
        if self.phase != phase {
            self.phase = phase;
            if let Some(delegate) = &self.delegate {
                delegate.on_state_changed(phase);
            }
        }
    }

    /// Release the capture device, exactly once per take.
    ///
    /// A failing `CaptureSource::stop()` is logged and surfaced but still
    /// counts as released — the session never holds the device afterwards.
    fn release_device(&mut self) {
        if !self.device_held {
            return;
        }
        self.device_held = false;
        if let Err(err) = self.source.stop() {
            log::warn!("capture source did not stop cleanly: {err}");
            if let Some(delegate) = &self.delegate {
                delegate.on_error(&err);
            }
        }
    }
}

impl<C: CaptureSource> Drop for RecordingSession<C> {
    fn drop(&mut self) {
        // Leaving the page mid-take must not leak the microphone.
        self.release_device();
    }
}
