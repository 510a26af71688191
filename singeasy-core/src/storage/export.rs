//! Disk export for finalized recordings.
//!
//! The download action writes the artifact as a real WAV file (header +
//! PCM payload) plus a `.metadata.json` sidecar describing the take.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use crate::models::artifact::{ArtifactMetadata, RecordingArtifact};
use crate::models::device::CaptureFormat;
use crate::models::error::SessionError;
use crate::processing::wav;

/// Write `artifact` into `dir` under its suggested filename.
///
/// The artifact payload is prefixed with a RIFF header describing `format`.
/// Returns the path of the written WAV file; a metadata sidecar lands next
/// to it as `<file>.metadata.json`.
pub fn save_wav(
    artifact: &RecordingArtifact,
    format: CaptureFormat,
    dir: &Path,
) -> Result<PathBuf, SessionError> {
    let export = artifact.export();

    fs::create_dir_all(dir)
        .map_err(|e| SessionError::StorageError(format!("failed to create directory: {e}")))?;

    let path = dir.join(&export.file_name);
    let header = wav::generate_header(format, export.data.len() as u32);

    let mut file = File::create(&path)
        .map_err(|e| SessionError::StorageError(format!("failed to create file: {e}")))?;
    file.write_all(&header)
        .map_err(|e| SessionError::StorageError(format!("failed to write header: {e}")))?;
    file.write_all(&export.data)
        .map_err(|e| SessionError::StorageError(format!("failed to write audio data: {e}")))?;

    write_metadata(&artifact.metadata(&export.file_name), &path)?;

    log::info!("saved recording to {}", path.display());
    Ok(path)
}

/// Write artifact metadata as a JSON sidecar next to the recording.
pub fn write_metadata(metadata: &ArtifactMetadata, recording_path: &Path) -> Result<(), SessionError> {
    let metadata_path = recording_path.with_extension("metadata.json");
    let json = serde_json::to_string_pretty(metadata)
        .map_err(|e| SessionError::StorageError(format!("failed to serialize metadata: {e}")))?;
    fs::write(&metadata_path, json)
        .map_err(|e| SessionError::StorageError(format!("failed to write metadata: {e}")))?;
    Ok(())
}

/// Read the metadata sidecar for a saved recording.
pub fn read_metadata(recording_path: &Path) -> Result<ArtifactMetadata, SessionError> {
    let metadata_path = recording_path.with_extension("metadata.json");
    let json = fs::read_to_string(&metadata_path)
        .map_err(|e| SessionError::StorageError(format!("failed to read metadata: {e}")))?;
    serde_json::from_str(&json)
        .map_err(|e| SessionError::StorageError(format!("failed to parse metadata: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mono_format() -> CaptureFormat {
        CaptureFormat {
            sample_rate: 44100,
            channels: 1,
            bit_depth: 16,
        }
    }

    #[test]
    fn saved_file_is_header_plus_payload() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = RecordingArtifact::new(vec![1, 2, 3, 4], 0.5);

        let path = save_wav(&artifact, mono_format(), dir.path()).unwrap();
        let bytes = fs::read(&path).unwrap();

        assert_eq!(bytes.len(), wav::WAV_HEADER_SIZE + 4);
        assert_eq!(&bytes[0..4], b"RIFF");
        assert_eq!(&bytes[wav::WAV_HEADER_SIZE..], &[1, 2, 3, 4]);
        // data_size field matches the payload.
        assert_eq!(
            u32::from_le_bytes([bytes[40], bytes[41], bytes[42], bytes[43]]),
            4
        );
    }

    #[test]
    fn metadata_sidecar_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = RecordingArtifact::new(vec![7u8; 16], 2.25);

        let path = save_wav(&artifact, mono_format(), dir.path()).unwrap();
        let metadata = read_metadata(&path).unwrap();

        assert_eq!(metadata.id, artifact.id());
        assert_eq!(metadata.checksum, artifact.checksum());
        assert_eq!(metadata.mime_type, "audio/wav");
        assert!((metadata.duration_secs - 2.25).abs() < 1e-9);
        assert_eq!(
            metadata.file_name,
            path.file_name().unwrap().to_string_lossy()
        );
    }

    #[test]
    fn missing_sidecar_is_a_storage_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_metadata(&dir.path().join("nope.wav")).unwrap_err();
        assert!(matches!(err, SessionError::StorageError(_)));
    }
}
