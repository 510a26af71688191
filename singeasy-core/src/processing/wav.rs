//! WAV file format helpers.
//!
//! Generates the standard 44-byte RIFF header placed in front of the raw
//! PCM payload when an artifact is saved to disk.

use crate::models::device::CaptureFormat;

/// Size of the standard WAV RIFF header in bytes.
pub const WAV_HEADER_SIZE: usize = 44;

/// Generate a 44-byte WAV RIFF header for PCM data (format code 1,
/// little-endian).
///
/// Layout:
/// ```text
/// [0-3]    "RIFF"
/// [4-7]    file size - 8  (= 36 + data_size)
/// [8-11]   "WAVE"
/// [12-15]  "fmt "
/// [16-19]  16 (PCM format chunk size)
/// [20-21]  1 (PCM format code)
/// [22-23]  channels
/// [24-27]  sample_rate
/// [28-31]  byte_rate = sample_rate * channels * bit_depth / 8
/// [32-33]  block_align = channels * bit_depth / 8
/// [34-35]  bit_depth
/// [36-39]  "data"
/// [40-43]  data_size
/// ```
pub fn generate_header(format: CaptureFormat, data_size: u32) -> [u8; WAV_HEADER_SIZE] {
    let CaptureFormat {
        sample_rate,
        channels,
        bit_depth,
    } = format;
    let byte_rate = sample_rate * channels as u32 * bit_depth as u32 / 8;
    let block_align = channels * bit_depth / 8;
    let chunk_size = 36 + data_size;

    let mut header = [0u8; WAV_HEADER_SIZE];

    header[0..4].copy_from_slice(b"RIFF");
    header[4..8].copy_from_slice(&chunk_size.to_le_bytes());
    header[8..12].copy_from_slice(b"WAVE");

    header[12..16].copy_from_slice(b"fmt ");
    header[16..20].copy_from_slice(&16u32.to_le_bytes());
    header[20..22].copy_from_slice(&1u16.to_le_bytes());
    header[22..24].copy_from_slice(&channels.to_le_bytes());
    header[24..28].copy_from_slice(&sample_rate.to_le_bytes());
    header[28..32].copy_from_slice(&byte_rate.to_le_bytes());
    header[32..34].copy_from_slice(&block_align.to_le_bytes());
    header[34..36].copy_from_slice(&bit_depth.to_le_bytes());

    header[36..40].copy_from_slice(b"data");
    header[40..44].copy_from_slice(&data_size.to_le_bytes());

    header
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono_44k() -> CaptureFormat {
        CaptureFormat {
            sample_rate: 44100,
            channels: 1,
            bit_depth: 16,
        }
    }

    #[test]
    fn header_magic_and_size() {
        let header = generate_header(mono_44k(), 0);
        assert_eq!(header.len(), WAV_HEADER_SIZE);
        assert_eq!(&header[0..4], b"RIFF");
        assert_eq!(&header[8..12], b"WAVE");
        assert_eq!(&header[12..16], b"fmt ");
        assert_eq!(&header[36..40], b"data");
        // Format code 1 = PCM.
        assert_eq!(u16::from_le_bytes([header[20], header[21]]), 1);
    }

    #[test]
    fn header_mono_16bit_fields() {
        let header = generate_header(mono_44k(), 88200);

        assert_eq!(u16::from_le_bytes([header[22], header[23]]), 1);
        assert_eq!(
            u32::from_le_bytes([header[24], header[25], header[26], header[27]]),
            44100
        );
        // byte_rate = 44100 * 1 * 16/8
        assert_eq!(
            u32::from_le_bytes([header[28], header[29], header[30], header[31]]),
            88200
        );
        // block_align = 1 * 16/8
        assert_eq!(u16::from_le_bytes([header[32], header[33]]), 2);
        assert_eq!(u16::from_le_bytes([header[34], header[35]]), 16);
        assert_eq!(
            u32::from_le_bytes([header[40], header[41], header[42], header[43]]),
            88200
        );
        assert_eq!(
            u32::from_le_bytes([header[4], header[5], header[6], header[7]]),
            36 + 88200
        );
    }
}
