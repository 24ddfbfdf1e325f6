use crate::domain::ports::PropertySource;
use std::env;
use std::ffi::OsString;

/// Property source over the process environment.
///
/// [`EnvSource::new`] reads the variable named exactly like the key
/// (`basedir`). [`EnvSource::upper_case`] reads `BASEDIR` instead, and
/// [`EnvSource::with_prefix`] with `SUITE` reads `SUITE_BASEDIR`.
#[derive(Debug, Clone, Default)]
pub struct EnvSource {
    naming: VariableNaming,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
enum VariableNaming {
    #[default]
    Verbatim,
    UpperCase,
    Prefixed(String),
}

impl EnvSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upper_case() -> Self {
        Self {
            naming: VariableNaming::UpperCase,
        }
    }

    pub fn with_prefix(prefix: impl Into<String>) -> Self {
        Self {
            naming: VariableNaming::Prefixed(prefix.into()),
        }
    }

    /// Environment variable consulted for `key`.
    pub fn variable_name(&self, key: &str) -> String {
        match &self.naming {
            VariableNaming::Verbatim => key.to_string(),
            VariableNaming::UpperCase => to_env_name(key),
            VariableNaming::Prefixed(prefix) => {
                format!("{}_{}", to_env_name(prefix), to_env_name(key))
            }
        }
    }
}

impl PropertySource for EnvSource {
    fn property(&self, key: &str) -> Option<OsString> {
        let name = self.variable_name(key);
        let value = env::var_os(&name);
        if value.is_some() {
            tracing::trace!(variable = %name, "Found environment property");
        }
        value
    }
}

fn to_env_name(key: &str) -> String {
    key.chars()
        .map(|c| match c {
            '.' | '-' | ' ' => '_',
            c => c.to_ascii_uppercase(),
        })
        .collect()
}
