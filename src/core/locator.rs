use crate::domain::model::BaseDir;
use crate::utils::error::{FixtureError, Result};
use serde::de::DeserializeOwned;
use std::fs;
use std::path::{Path, PathBuf};

/// Joins fixture names onto a base directory and reads them.
#[derive(Debug, Clone)]
pub struct FixtureLocator {
    base_dir: BaseDir,
}

impl FixtureLocator {
    pub fn new(base_dir: BaseDir) -> Self {
        Self { base_dir }
    }

    pub fn base_dir(&self) -> &BaseDir {
        &self.base_dir
    }

    pub fn path(&self, name: impl AsRef<Path>) -> PathBuf {
        self.base_dir.join(name)
    }

    pub fn exists(&self, name: impl AsRef<Path>) -> bool {
        self.path(name).is_file()
    }

    /// Names from `names` with no file under the base directory.
    pub fn missing<'a, I>(&self, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        names
            .into_iter()
            .filter(|name| !self.exists(name))
            .map(str::to_string)
            .collect()
    }

    pub fn read(&self, name: impl AsRef<Path>) -> Result<Vec<u8>> {
        let path = self.path(name);
        tracing::debug!(path = %path.display(), "Reading fixture");
        fs::read(&path).map_err(|e| FixtureError::io(path, e))
    }

    pub fn read_to_string(&self, name: impl AsRef<Path>) -> Result<String> {
        let path = self.path(name);
        tracing::debug!(path = %path.display(), "Reading fixture");
        fs::read_to_string(&path).map_err(|e| FixtureError::io(path, e))
    }

    pub fn read_json<T: DeserializeOwned>(&self, name: impl AsRef<Path>) -> Result<T> {
        let path = self.path(name);
        tracing::debug!(path = %path.display(), "Reading JSON fixture");
        let content = fs::read(&path).map_err(|e| FixtureError::io(&path, e))?;
        serde_json::from_slice(&content).map_err(|source| FixtureError::JsonError { path, source })
    }
}

impl From<BaseDir> for FixtureLocator {
    fn from(base_dir: BaseDir) -> Self {
        Self::new(base_dir)
    }
}
