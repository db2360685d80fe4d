use sha2::{Digest, Sha256};
use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("Model artifact not found: {0}")]
    NotFound(PathBuf),
    #[error("Model artifact is empty: {0}")]
    Empty(PathBuf),
    #[error("Hash mismatch for {path}: expected {expected}, got {actual}")]
    HashMismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },
    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

/// Returns the default location of the trained classifier artifact.
///
/// Resolution order: the `READMIT_MODEL` environment variable, then the
/// platform data directory, then `model.onnx` in the working directory.
pub fn default_model_path() -> PathBuf {
    if let Ok(path) = env::var("READMIT_MODEL") {
        return PathBuf::from(path);
    }

    if let Some(data_dir) = dirs::data_local_dir() {
        return data_dir.join("readmit").join("model.onnx");
    }

    PathBuf::from("model.onnx")
}

/// A vetted handle to the trained classifier file.
///
/// Opening fails when the file is missing or empty, and when a `.sha256`
/// sidecar file exists but does not match the artifact's actual digest.
/// The process must not proceed to inference without one of these.
#[derive(Debug, Clone)]
pub struct ModelArtifact {
    path: PathBuf,
    fingerprint: String,
}

impl ModelArtifact {
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, ArtifactError> {
        let path = path.as_ref().to_path_buf();
        if !path.exists() {
            return Err(ArtifactError::NotFound(path));
        }

        let bytes = fs::read(&path)?;
        if bytes.is_empty() {
            return Err(ArtifactError::Empty(path));
        }

        let mut hasher = Sha256::new();
        hasher.update(&bytes);
        let fingerprint = format!("{:x}", hasher.finalize());
        log::info!("Model artifact: {:?} ({} bytes)", path, bytes.len());
        log::info!("Model fingerprint: {}", fingerprint);

        if let Some(expected) = Self::read_sidecar_hash(&path)? {
            if expected != fingerprint {
                log::error!("Model artifact failed checksum verification");
                return Err(ArtifactError::HashMismatch {
                    path,
                    expected,
                    actual: fingerprint,
                });
            }
            log::info!("Model artifact checksum verified");
        }

        Ok(Self { path, fingerprint })
    }

    /// Reads `<artifact>.sha256` when present. The sidecar holds the hex
    /// digest, optionally followed by a file name (`sha256sum` output).
    fn read_sidecar_hash(path: &Path) -> Result<Option<String>, ArtifactError> {
        let mut sidecar = path.as_os_str().to_owned();
        sidecar.push(".sha256");
        let sidecar = PathBuf::from(sidecar);
        if !sidecar.exists() {
            return Ok(None);
        }

        let contents = fs::read_to_string(&sidecar)?;
        Ok(contents
            .split_whitespace()
            .next()
            .map(|hash| hash.to_ascii_lowercase()))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Hex SHA-256 digest of the artifact's bytes.
    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }
}
