use crate::config::env::EnvSource;
use crate::domain::model::{BaseDir, BASEDIR_PROPERTY};
use crate::domain::ports::PropertySource;

/// Resolves the fixture base directory from an injected property source.
#[derive(Debug, Clone)]
pub struct BaseDirResolver<S: PropertySource> {
    source: S,
}

impl BaseDirResolver<EnvSource> {
    pub fn from_env() -> Self {
        Self::new(EnvSource::new())
    }
}

impl<S: PropertySource> BaseDirResolver<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    /// Returns the configured `basedir`, or `.` when it is absent.
    ///
    /// The value is not checked: a missing or unreadable directory surfaces
    /// on the caller's first fixture read.
    pub fn resolve(&self) -> BaseDir {
        resolve_base_dir(&self.source)
    }
}

pub fn resolve_base_dir<S: PropertySource + ?Sized>(source: &S) -> BaseDir {
    match source.property(BASEDIR_PROPERTY) {
        Some(value) => {
            tracing::debug!(basedir = ?value, "Using configured base directory");
            BaseDir::configured(value)
        }
        None => {
            tracing::debug!("No basedir configured, using current directory");
            BaseDir::current()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::map::MapSource;
    use crate::domain::model::BaseDirOrigin;
    use std::path::Path;

    #[test]
    fn test_resolve_unset_defaults_to_current_dir() {
        let resolver = BaseDirResolver::new(MapSource::new());
        let dir = resolver.resolve();
        assert_eq!(dir.path(), Path::new("."));
        assert_eq!(dir.origin(), BaseDirOrigin::Default);
    }

    #[test]
    fn test_resolve_uses_configured_value() {
        let resolver = BaseDirResolver::new(MapSource::new().with("basedir", "/srv/fixtures"));
        let dir = resolver.resolve();
        assert_eq!(dir.path(), Path::new("/srv/fixtures"));
        assert_eq!(dir.origin(), BaseDirOrigin::Configured);
    }

    #[test]
    fn test_resolve_does_not_require_existing_path() {
        let missing = "/definitely/not/a/real/dir/for/fixtures";
        let resolver = BaseDirResolver::new(MapSource::new().with("basedir", missing));
        assert_eq!(resolver.resolve().path(), Path::new(missing));
    }

    #[test]
    fn test_resolve_ignores_other_keys() {
        let source = MapSource::new().with("BASEDIR_OTHER", "/x").with("base_dir", "/y");
        assert!(resolve_base_dir(&source).is_default());
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let resolver = BaseDirResolver::new(MapSource::new().with("basedir", "fixtures"));
        assert_eq!(resolver.resolve(), resolver.resolve());

        let unset = BaseDirResolver::new(MapSource::new());
        assert_eq!(unset.resolve(), unset.resolve());
    }
}
