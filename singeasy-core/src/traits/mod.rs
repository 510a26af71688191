pub mod capture_source;
pub mod playback_host;
pub mod session_delegate;
