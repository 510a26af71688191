use std::sync::Arc;

use parking_lot::Mutex;

use crate::models::error::SessionError;
use crate::traits::playback_host::{EndedCallback, PlaybackHost};

/// Playback state of one reference clip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackPhase {
    Idle,
    Playing,
    Ended,
}

/// Plays one externally supplied audio clip to completion.
///
/// Thin state wrapper over an injected `PlaybackHost`: `play()` while a clip
/// is already playing is a no-op, and the host's ended notification flips
/// the controller to `Ended`. No seeking, no looping.
pub struct ReferencePlayback<P: PlaybackHost> {
    host: P,
    url: String,
    // Flipped to Ended by the host callback, possibly from another thread.
    phase: Arc<Mutex<PlaybackPhase>>,
}

impl<P: PlaybackHost> ReferencePlayback<P> {
    pub fn new(host: P, url: impl Into<String>) -> Self {
        Self {
            host,
            url: url.into(),
            phase: Arc::new(Mutex::new(PlaybackPhase::Idle)),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn phase(&self) -> PlaybackPhase {
        *self.phase.lock()
    }

    pub fn is_playing(&self) -> bool {
        self.phase() == PlaybackPhase::Playing
    }

    /// Whether the clip has played through to its natural end.
    pub fn has_ended(&self) -> bool {
        self.phase() == PlaybackPhase::Ended
    }

    /// Start the clip from the beginning.
    ///
    /// No-op while already playing. A clip that ended can be played again.
    /// If the resource cannot load, fails with `PlaybackError` and the
    /// controller keeps its previous phase; no automatic retry.
    pub fn play(&mut self) -> Result<(), SessionError> {
        if self.is_playing() {
            return Ok(());
        }

        let on_ended: EndedCallback = {
            let phase = Arc::clone(&self.phase);
            Arc::new(move || {
                *phase.lock() = PlaybackPhase::Ended;
            })
        };

        match self.host.begin(&self.url, on_ended) {
            Ok(()) => {
                *self.phase.lock() = PlaybackPhase::Playing;
                log::debug!("playing reference clip {}", self.url);
                Ok(())
            }
            Err(err) => {
                log::warn!("reference clip {} failed to play: {err}", self.url);
                Err(err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    /// Host fake that records begin() calls and hands the ended callback
    /// back to the test for manual triggering.
    struct ScriptedHost {
        outcome: Result<(), SessionError>,
        begins: Arc<AtomicUsize>,
        captured_ended: Arc<Mutex<Option<EndedCallback>>>,
    }

    impl ScriptedHost {
        fn working() -> Self {
            Self {
                outcome: Ok(()),
                begins: Arc::new(AtomicUsize::new(0)),
                captured_ended: Arc::new(Mutex::new(None)),
            }
        }

        fn broken() -> Self {
            Self {
                outcome: Err(SessionError::PlaybackError("resource failed to load".into())),
                begins: Arc::new(AtomicUsize::new(0)),
                captured_ended: Arc::new(Mutex::new(None)),
            }
        }
    }

    impl PlaybackHost for ScriptedHost {
        fn begin(&mut self, _url: &str, on_ended: EndedCallback) -> Result<(), SessionError> {
            self.begins.fetch_add(1, Ordering::SeqCst);
            self.outcome.clone()?;
            *self.captured_ended.lock() = Some(on_ended);
            Ok(())
        }
    }

    #[test]
    fn play_starts_the_clip_once() {
        let host = ScriptedHost::working();
        let begins = Arc::clone(&host.begins);
        let mut playback = ReferencePlayback::new(host, "https://example.com/scale.mp3");

        playback.play().unwrap();
        assert!(playback.is_playing());

        // Second play() while playing is a no-op, not a restart.
        playback.play().unwrap();
        assert_eq!(begins.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn ended_notification_flips_phase() {
        let host = ScriptedHost::working();
        let ended = Arc::clone(&host.captured_ended);
        let mut playback = ReferencePlayback::new(host, "https://example.com/melody.mp3");

        playback.play().unwrap();
        let callback = ended.lock().take().unwrap();
        (*callback)();

        assert!(playback.has_ended());
        assert!(!playback.is_playing());
    }

    #[test]
    fn clip_can_replay_after_ending() {
        let host = ScriptedHost::working();
        let begins = Arc::clone(&host.begins);
        let ended = Arc::clone(&host.captured_ended);
        let mut playback = ReferencePlayback::new(host, "https://example.com/scale.mp3");

        playback.play().unwrap();
        let callback = ended.lock().take().unwrap();
        (*callback)();
        playback.play().unwrap();

        assert!(playback.is_playing());
        assert_eq!(begins.load(Ordering::SeqCst), 2);
    }

    #[test]
    fn load_failure_surfaces_playback_error() {
        let mut playback =
            ReferencePlayback::new(ScriptedHost::broken(), "https://example.com/missing.mp3");

        let err = playback.play().unwrap_err();
        assert!(matches!(err, SessionError::PlaybackError(_)));
        assert_eq!(playback.phase(), PlaybackPhase::Idle);
    }
}
