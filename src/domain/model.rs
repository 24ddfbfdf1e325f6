use std::ffi::OsString;
use std::fmt;
use std::path::{Path, PathBuf};

/// Configuration key holding the fixture base directory.
pub const BASEDIR_PROPERTY: &str = "basedir";

/// Directory used when no base directory is configured.
pub const DEFAULT_BASEDIR: &str = ".";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BaseDirOrigin {
    Configured,
    Default,
}

/// Root directory a test suite resolves its fixture files against.
///
/// The path is kept exactly as configured: it is not canonicalised and may
/// not exist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BaseDir {
    path: PathBuf,
    origin: BaseDirOrigin,
}

impl BaseDir {
    pub fn configured(value: impl Into<OsString>) -> Self {
        Self {
            path: PathBuf::from(value.into()),
            origin: BaseDirOrigin::Configured,
        }
    }

    pub fn current() -> Self {
        Self {
            path: PathBuf::from(DEFAULT_BASEDIR),
            origin: BaseDirOrigin::Default,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> BaseDirOrigin {
        self.origin
    }

    pub fn is_default(&self) -> bool {
        self.origin == BaseDirOrigin::Default
    }

    pub fn join(&self, name: impl AsRef<Path>) -> PathBuf {
        self.path.join(name)
    }

    pub fn into_path_buf(self) -> PathBuf {
        self.path
    }
}

impl Default for BaseDir {
    fn default() -> Self {
        Self::current()
    }
}

impl AsRef<Path> for BaseDir {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

impl fmt::Display for BaseDir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path.display())
    }
}
