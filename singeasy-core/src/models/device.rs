/// PCM layout of the chunks a capture source delivers.
///
/// The session treats chunks as opaque bytes; the format only matters when
/// the finalized artifact is written out as a WAV file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CaptureFormat {
    /// Sample rate in Hz (e.g. 44100, 48000).
    pub sample_rate: u32,

    /// Number of interleaved channels (1 = mono, 2 = stereo).
    pub channels: u16,

    /// Bit depth of the PCM samples. Valid values: 16, 24, 32.
    pub bit_depth: u16,
}

impl Default for CaptureFormat {
    fn default() -> Self {
        Self {
            sample_rate: 44100,
            channels: 1,
            bit_depth: 16,
        }
    }
}

/// A capture device as reported by the host backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureDevice {
    pub id: String,
    pub name: String,
    pub is_default: bool,
}
