use std::sync::Arc;

use crate::models::error::SessionError;

/// Callback fired once when a clip reaches its natural end.
///
/// Not invoked on load errors or interruption.
pub type EndedCallback = Arc<dyn Fn() + Send + Sync + 'static>;

/// Injectable capability for playing one external audio resource.
///
/// The `ReferencePlayback` controller drives this; the host (an `<audio>`
/// element, a decoder + output stream, a test fake) does the actual work.
pub trait PlaybackHost {
    /// Begin playing `url` from the start.
    ///
    /// A resource that cannot load fails with `PlaybackError`. No automatic
    /// retry, no seeking, no looping.
    fn begin(&mut self, url: &str, on_ended: EndedCallback) -> Result<(), SessionError>;
}
