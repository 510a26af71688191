//! # singeasy-cpal
//!
//! cpal-backed microphone capture for singeasy-core.
//!
//! Provides:
//! - `CpalMicSource` — `CaptureSource` over the default input device,
//!   delivering mono 16-bit PCM chunks
//! - `practice` binary — terminal stand-in for the practice/test pages
//!
//! ## Usage
//! ```ignore
//! use singeasy_core::RecordingSession;
//! use singeasy_cpal::CpalMicSource;
//!
//! let source = CpalMicSource::default_device()?;
//! let mut session = RecordingSession::new(source);
//! session.start()?;
//! ```

pub mod mic;

pub use mic::CpalMicSource;
