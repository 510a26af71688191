//! # singeasy-core
//!
//! Platform-agnostic core for the SingEasy practice app.
//!
//! Owns the microphone recording lifecycle, reference-clip playback, the
//! canned feedback picker, and WAV export. Host environments (a cpal desktop
//! backend, a test harness) implement the `CaptureSource` and `PlaybackHost`
//! traits and plug into the generic controllers.
//!
//! ## Architecture
//!
//! ```text
//! singeasy-core (this crate)
//! ├── traits/       ← CaptureSource, PlaybackHost, SessionDelegate
//! ├── models/       ← SessionError, SessionPhase, RecordingArtifact, CaptureFormat
//! ├── session/      ← RecordingSession, ReferencePlayback (the controllers)
//! ├── processing/   ← WAV header generation, PCM conversion helpers
//! ├── storage/      ← WAV export + JSON metadata sidecar
//! ├── feedback      ← random pick from the five canned messages
//! └── content       ← static lesson/exercise/tip/tune tables
//! ```

pub mod content;
pub mod feedback;
pub mod models;
pub mod processing;
pub mod session;
pub mod storage;
pub mod traits;

// Re-export key types at crate root for convenience.
pub use models::artifact::{ArtifactExport, RecordingArtifact};
pub use models::device::{CaptureDevice, CaptureFormat};
pub use models::error::SessionError;
pub use models::state::SessionPhase;
pub use session::playback::{PlaybackPhase, ReferencePlayback};
pub use session::recorder::RecordingSession;
pub use traits::capture_source::{CaptureSource, ChunkSink};
pub use traits::playback_host::{EndedCallback, PlaybackHost};
pub use traits::session_delegate::SessionDelegate;
