use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

/// Versioned contract for the bundled boundary asset: the asset is only
/// trusted if its bytes hash to the recorded digest and it parses into
/// the recorded number of features.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BoundaryManifest {
    pub version: String,
    pub feature_count: usize,
    pub sha256: String,
}

impl BoundaryManifest {
    /// Describe an asset as currently shipped.
    pub fn describe(version: &str, bytes: &[u8], feature_count: usize) -> Self {
        Self {
            version: version.to_string(),
            feature_count,
            sha256: sha256_hex(bytes),
        }
    }

    pub fn read_from_json(path: &Path) -> Result<Self> {
        let bytes = fs::read(path)
            .with_context(|| format!("[manifest] failed to read {}", path.display()))?;
        serde_json::from_slice(&bytes).context("[manifest] failed to parse manifest JSON")
    }

    pub fn write_to_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_vec_pretty(self)?;
        fs::write(path, json)
            .with_context(|| format!("[manifest] failed to write {}", path.display()))
    }

    /// Check the asset bytes and parsed feature count against this
    /// manifest.
    pub fn verify(&self, bytes: &[u8], feature_count: usize) -> Result<()> {
        let digest = sha256_hex(bytes);
        if digest != self.sha256 {
            bail!(
                "[manifest] checksum mismatch for version {}: expected {}, got {}",
                self.version,
                self.sha256,
                digest,
            );
        }
        if feature_count != self.feature_count {
            bail!(
                "[manifest] feature count drift for version {}: expected {}, got {}",
                self.version,
                self.feature_count,
                feature_count,
            );
        }
        Ok(())
    }
}

fn sha256_hex(bytes: &[u8]) -> String {
    hex::encode(Sha256::digest(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn describe_then_verify_round_trips() {
        let bytes = b"{\"type\":\"FeatureCollection\",\"features\":[]}";
        let manifest = BoundaryManifest::describe("2024-1", bytes, 0);
        assert!(manifest.verify(bytes, 0).is_ok());
    }

    #[test]
    fn verify_rejects_tampered_bytes() {
        let manifest = BoundaryManifest::describe("2024-1", b"original", 25);
        let err = manifest.verify(b"tampered", 25).unwrap_err();
        assert!(err.to_string().contains("checksum mismatch"));
    }

    #[test]
    fn verify_rejects_feature_count_drift() {
        let manifest = BoundaryManifest::describe("2024-1", b"asset", 25);
        let err = manifest.verify(b"asset", 24).unwrap_err();
        assert!(err.to_string().contains("feature count drift"));
    }
}
