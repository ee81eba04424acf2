use std::path::Path;

use anyhow::Result;

use crate::errors::GeneratorError;

/// A service for working with the file system.
pub trait FsService: Sync + Send {
    /// Make sure the given directory exists, creating it and any parents if needed.
    ///
    /// # Arguments
    ///
    /// * `path` - Directory that should exist.
    fn ensure_directory(&self, path: &Path) -> Result<()>;

    /// Write the given contents to a file, replacing anything already there.
    ///
    /// # Arguments
    ///
    /// * `path` - File to write.
    /// * `contents` - Contents to write to the file.
    fn write_file(&self, path: &Path, contents: &str) -> Result<()>;
}

pub struct FsServiceImpl {}

/// Implementation of FsService.
impl FsServiceImpl {
    /// Create a new instance of FsServiceImpl.
    pub fn new() -> Self {
        Self {}
    }
}

impl FsService for FsServiceImpl {
    fn ensure_directory(&self, path: &Path) -> Result<()> {
        std::fs::create_dir_all(path).map_err(|source| GeneratorError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }

    fn write_file(&self, path: &Path, contents: &str) -> Result<()> {
        std::fs::write(path, contents).map_err(|source| GeneratorError::FileWrite {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempdir::TempDir;

    #[test]
    fn test_ensure_directory_should_create_missing_directories() {
        let tmp_dir = TempDir::new("fs_service").unwrap();
        let target = tmp_dir.path().join("nested").join("dir");
        let fs_service = FsServiceImpl::new();

        fs_service.ensure_directory(&target).unwrap();

        assert!(target.is_dir());
    }

    #[test]
    fn test_ensure_directory_should_succeed_if_directory_exists() {
        let tmp_dir = TempDir::new("fs_service").unwrap();
        let fs_service = FsServiceImpl::new();

        fs_service.ensure_directory(tmp_dir.path()).unwrap();
        fs_service.ensure_directory(tmp_dir.path()).unwrap();

        assert!(tmp_dir.path().is_dir());
    }

    #[test]
    fn test_write_file_should_overwrite_existing_contents() {
        let tmp_dir = TempDir::new("fs_service").unwrap();
        let target = tmp_dir.path().join("config.json");
        let fs_service = FsServiceImpl::new();

        fs_service.write_file(&target, "first").unwrap();
        fs_service.write_file(&target, "second").unwrap();

        assert_eq!(std::fs::read_to_string(&target).unwrap(), "second");
    }

    #[test]
    fn test_write_file_to_missing_directory_should_fail() {
        let tmp_dir = TempDir::new("fs_service").unwrap();
        let target = tmp_dir.path().join("missing").join("config.json");
        let fs_service = FsServiceImpl::new();

        let result = fs_service.write_file(&target, "contents");

        let err = result.unwrap_err();
        assert!(matches!(
            err.downcast_ref::<GeneratorError>(),
            Some(GeneratorError::FileWrite { .. })
        ));
    }
}
