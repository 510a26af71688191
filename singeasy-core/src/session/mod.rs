pub mod playback;
pub mod recorder;
