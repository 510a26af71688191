use std::sync::Arc;

use crate::models::device::{CaptureDevice, CaptureFormat};
use crate::models::error::SessionError;

/// Callback invoked when a chunk of captured audio is available.
///
/// Chunks are opaque encoded bytes, delivered in capture order. Backends may
/// fire this on a dedicated audio thread — keep processing minimal.
pub type ChunkSink = Arc<dyn Fn(&[u8]) + Send + Sync + 'static>;

/// Injectable capability for host microphone capture.
///
/// Implemented by:
/// - `CpalMicSource` (singeasy-cpal) — real microphone via cpal
/// - scripted fakes in tests — canned chunks and grant/deny outcomes
///
/// A source owns the device exclusively between a successful `start()` and
/// the matching `stop()`.
pub trait CaptureSource {
    /// Request device access and begin delivering chunks to `sink`.
    ///
    /// Denial by the host maps to `PermissionDenied`; a missing or broken
    /// device maps to `DeviceUnavailable`. On any error the device is not
    /// held when this returns.
    fn start(&mut self, sink: ChunkSink) -> Result<(), SessionError>;

    /// Stop capturing and release the device.
    fn stop(&mut self) -> Result<(), SessionError>;

    /// PCM layout of the delivered chunks.
    fn format(&self) -> CaptureFormat;

    /// Information about the device backing this source.
    fn device_info(&self) -> CaptureDevice;
}
