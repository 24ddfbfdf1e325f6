use crate::config::env::EnvSource;
use crate::core::{resolve_base_dir, FixtureLocator};
use crate::domain::model::BaseDir;
use crate::domain::ports::PropertySource;

/// Base for test suites that read their inputs from a fixture directory.
///
/// Suites override [`FixtureCase::properties`] to inject configuration; the
/// default reads the process environment.
pub trait FixtureCase {
    type Source: PropertySource;

    fn properties(&self) -> Self::Source;

    fn base_dir(&self) -> BaseDir {
        resolve_base_dir(&self.properties())
    }

    fn fixtures(&self) -> FixtureLocator {
        FixtureLocator::new(self.base_dir())
    }
}

/// A [`FixtureCase`] backed by the process environment.
#[derive(Debug, Clone, Default)]
pub struct EnvFixtureCase {
    source: EnvSource,
}

impl EnvFixtureCase {
    pub fn new(source: EnvSource) -> Self {
        Self { source }
    }
}

impl FixtureCase for EnvFixtureCase {
    type Source = EnvSource;

    fn properties(&self) -> EnvSource {
        self.source.clone()
    }
}
