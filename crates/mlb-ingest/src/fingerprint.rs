//! SHA-256 fingerprints identifying an input file in the run manifest.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::Serialize;
use sha2::{Digest, Sha256};

use crate::error::{IngestError, Result};

/// Buffer size for reading files during hashing.
const BUFFER_SIZE: usize = 65536;

/// Identity of one input file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SourceFingerprint {
    pub path: PathBuf,
    pub sha256: String,
    pub bytes: u64,
}

/// Computes the lowercase hex SHA-256 digest of a file.
pub fn fingerprint_file(path: &Path) -> Result<SourceFingerprint> {
    let file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;
    let mut reader = BufReader::with_capacity(BUFFER_SIZE, file);

    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; BUFFER_SIZE];
    let mut bytes = 0u64;

    loop {
        let bytes_read = reader.read(&mut buffer).map_err(|e| IngestError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        if bytes_read == 0 {
            break;
        }
        hasher.update(&buffer[..bytes_read]);
        bytes += bytes_read as u64;
    }

    let sha256 = hex::encode(hasher.finalize());
    tracing::debug!(path = %path.display(), %sha256, bytes, "fingerprinted input");

    Ok(SourceFingerprint {
        path: path.to_path_buf(),
        sha256,
        bytes,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn fingerprint_known_digest() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "hello world").unwrap();

        let fingerprint = fingerprint_file(file.path()).unwrap();
        assert_eq!(
            fingerprint.sha256,
            "b94d27b9934d3e08a52e52d7da7dabfac484efe37a5380ee9088f7ace2efcde9"
        );
        assert_eq!(fingerprint.bytes, 11);
    }

    #[test]
    fn fingerprint_empty_file() {
        let file = NamedTempFile::new().unwrap();
        let fingerprint = fingerprint_file(file.path()).unwrap();
        assert_eq!(
            fingerprint.sha256,
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
        assert_eq!(fingerprint.bytes, 0);
    }

    #[test]
    fn fingerprint_missing_file() {
        let result = fingerprint_file(Path::new("/nonexistent/Batting.csv"));
        assert!(matches!(result, Err(IngestError::FileNotFound { .. })));
    }
}
