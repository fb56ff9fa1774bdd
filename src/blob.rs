// Versioned binary blobs for caching decoded snapshots. [version: u8][wincode payload].

use crate::models::StatSnapshot;

pub const BLOB_VERSION: u8 = 1;

#[derive(Debug, thiserror::Error)]
pub enum BlobError {
    #[error("empty blob")]
    Empty,
    #[error("unsupported blob version {found} (expected {})", BLOB_VERSION)]
    UnsupportedVersion { found: u8 },
    #[error("wincode: {0}")]
    Codec(String),
}

fn with_version_prefix(version: u8, payload: Vec<u8>) -> Vec<u8> {
    let mut out = Vec::with_capacity(1 + payload.len());
    out.push(version);
    out.extend_from_slice(&payload);
    out
}

pub fn blob_version(bytes: &[u8]) -> Option<u8> {
    bytes.first().copied()
}

pub fn encode_snapshot(snapshot: &StatSnapshot) -> Result<Vec<u8>, BlobError> {
    let payload = wincode::serialize(snapshot).map_err(|e| BlobError::Codec(e.to_string()))?;
    Ok(with_version_prefix(BLOB_VERSION, payload))
}

pub fn decode_snapshot_blob(bytes: &[u8]) -> Result<StatSnapshot, BlobError> {
    match bytes.split_first() {
        None => Err(BlobError::Empty),
        Some((&BLOB_VERSION, payload)) => {
            wincode::deserialize(payload).map_err(|e| BlobError::Codec(e.to_string()))
        }
        Some((&found, _)) => Err(BlobError::UnsupportedVersion { found }),
    }
}
