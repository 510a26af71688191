use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// MIME type attached to finalized recordings.
pub const ARTIFACT_MIME_TYPE: &str = "audio/wav";

/// The immutable audio blob produced by a completed recording session.
///
/// The payload is exactly the capture chunks concatenated in arrival order.
/// Each artifact carries a fresh identity and playable URL; a URL is never
/// reused by a later take.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordingArtifact {
    id: String,
    data: Vec<u8>,
    duration_millis: u64,
    created_at: DateTime<Utc>,
    checksum: String,
    url: String,
}

impl RecordingArtifact {
    pub fn new(data: Vec<u8>, duration_secs: f64) -> Self {
        let id = uuid::Uuid::new_v4().to_string();
        let checksum = hex_digest(&data);
        let url = format!("blob:{id}");
        Self {
            id,
            data,
            duration_millis: (duration_secs * 1000.0).round() as u64,
            created_at: Utc::now(),
            checksum,
            url,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_millis as f64 / 1000.0
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// SHA-256 of the payload, lowercase hex.
    pub fn checksum(&self) -> &str {
        &self.checksum
    }

    /// Playable object URL, valid until the session is reset.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Package the blob for a download action.
    ///
    /// The suggested filename embeds the capture timestamp:
    /// `singing-practice-<epoch-millis>.wav`.
    pub fn export(&self) -> ArtifactExport {
        ArtifactExport {
            file_name: format!("singing-practice-{}.wav", self.created_at.timestamp_millis()),
            mime_type: ARTIFACT_MIME_TYPE,
            data: self.data.clone(),
        }
    }

    /// Metadata describing this artifact, for the JSON sidecar.
    pub fn metadata(&self, file_name: &str) -> ArtifactMetadata {
        ArtifactMetadata {
            id: self.id.clone(),
            file_name: file_name.to_string(),
            mime_type: ARTIFACT_MIME_TYPE.to_string(),
            duration_secs: self.duration_secs(),
            checksum: self.checksum.clone(),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// Everything a download action needs: bytes, filename, MIME type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactExport {
    pub file_name: String,
    pub mime_type: &'static str,
    pub data: Vec<u8>,
}

/// Metadata stored alongside an exported recording.
///
/// Serializable for the JSON sidecar written next to the WAV file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtifactMetadata {
    pub id: String,
    pub file_name: String,
    pub mime_type: String,
    pub duration_secs: f64,
    pub checksum: String,
    pub created_at: String,
}

fn hex_digest(data: &[u8]) -> String {
    let digest = Sha256::digest(data);
    let mut out = String::with_capacity(digest.len() * 2);
    for byte in digest {
        out.push_str(&format!("{byte:02x}"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn artifact_keeps_payload_verbatim() {
        let artifact = RecordingArtifact::new(b"chunk1chunk2".to_vec(), 1.5);
        assert_eq!(artifact.data(), b"chunk1chunk2");
        assert_eq!(artifact.len(), 12);
        assert!(!artifact.is_empty());
        assert!((artifact.duration_secs() - 1.5).abs() < 1e-9);
    }

    #[test]
    fn url_embeds_artifact_id() {
        let artifact = RecordingArtifact::new(vec![1, 2, 3], 0.0);
        assert_eq!(artifact.url(), format!("blob:{}", artifact.id()));
    }

    #[test]
    fn artifacts_have_distinct_identities() {
        let a = RecordingArtifact::new(vec![0u8; 4], 1.0);
        let b = RecordingArtifact::new(vec![0u8; 4], 1.0);
        assert_ne!(a.id(), b.id());
        assert_ne!(a.url(), b.url());
        // Same payload still hashes the same.
        assert_eq!(a.checksum(), b.checksum());
    }

    #[test]
    fn checksum_is_sha256_hex() {
        let artifact = RecordingArtifact::new(b"abc".to_vec(), 0.0);
        assert_eq!(
            artifact.checksum(),
            "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad"
        );
    }

    #[test]
    fn export_filename_pattern() {
        let artifact = RecordingArtifact::new(vec![9u8; 8], 2.0);
        let export = artifact.export();
        assert!(export.file_name.starts_with("singing-practice-"));
        assert!(export.file_name.ends_with(".wav"));
        assert_eq!(export.mime_type, "audio/wav");
        assert_eq!(export.data, artifact.data());
    }
}
