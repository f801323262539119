use crate::domain::ports::Storage;
use crate::utils::error::{OrderError, Result};
use std::fs;
use std::path::PathBuf;

/// Filesystem storage rooted at `base_path`. Absolute paths bypass the root.
#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    pub fn current_dir() -> Self {
        Self::new(".")
    }

    pub fn resolve(&self, path: &str) -> PathBuf {
        self.base_path.join(path)
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        let full_path = self.resolve(path);
        tracing::debug!("Reading {}", full_path.display());
        let bytes = fs::read(&full_path).map_err(|source| OrderError::FileNotFound {
            path: full_path.display().to_string(),
            source,
        })?;

        // 非 UTF-8 位元組以 U+FFFD 取代，不視為讀取失敗
        match String::from_utf8(bytes) {
            Ok(text) => Ok(text),
            Err(e) => {
                tracing::warn!("{} is not valid UTF-8, decoding lossily", full_path.display());
                Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
            }
        }
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        let full_path = self.resolve(path);

        if let Some(parent) = full_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)?;
        }

        fs::write(&full_path, data)?;
        tracing::debug!("Wrote {} bytes to {}", data.len(), full_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ErrorKind;
    use tempfile::TempDir;

    #[test]
    fn test_write_then_read_under_base() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        storage.write_file("nested/out.txt", b"1;Widget;19.99\n").unwrap();

        assert!(dir.path().join("nested").join("out.txt").exists());
        assert_eq!(
            storage.read_to_string("nested/out.txt").unwrap(),
            "1;Widget;19.99\n"
        );
    }

    #[test]
    fn test_missing_file_is_file_not_found() {
        let dir = TempDir::new().unwrap();
        let storage = LocalStorage::new(dir.path());

        let err = storage.read_to_string("absent.csv").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.to_string().contains("absent.csv"));
    }

    #[test]
    fn test_non_utf8_file_is_decoded_lossily() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join("1_9.csv"), b"1;\xD1\xF2\xEE\xEB;19.99\n").unwrap();
        let storage = LocalStorage::new(dir.path());

        let content = storage.read_to_string("1_9.csv").unwrap();
        assert_eq!(content, "1;\u{FFFD}\u{FFFD}\u{FFFD}\u{FFFD};19.99\n");
    }

    #[test]
    fn test_absolute_path_replaces_base() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("orders.csv");
        std::fs::write(&file, "1;Widget;19.99\n").unwrap();

        let storage = LocalStorage::new("/definitely/not/here");
        let content = storage.read_to_string(file.to_str().unwrap()).unwrap();
        assert_eq!(content, "1;Widget;19.99\n");
    }
}
