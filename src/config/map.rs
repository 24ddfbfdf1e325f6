use crate::domain::ports::PropertySource;
use std::collections::HashMap;
use std::ffi::OsString;

/// In-memory properties, injected at suite setup.
#[derive(Debug, Clone, Default)]
pub struct MapSource {
    values: HashMap<String, OsString>,
}

impl MapSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<OsString>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<OsString>) {
        self.values.insert(key.into(), value.into());
    }
}

impl PropertySource for MapSource {
    fn property(&self, key: &str) -> Option<OsString> {
        self.values.get(key).cloned()
    }
}

impl<K: Into<String>, V: Into<OsString>> FromIterator<(K, V)> for MapSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut source = Self::new();
        for (key, value) in iter {
            source.insert(key, value);
        }
        source
    }
}
