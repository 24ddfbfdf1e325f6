use crate::domain::model::BASEDIR_PROPERTY;
use crate::domain::ports::PropertySource;
use crate::utils::error::{FixtureError, Result};
use crate::utils::validation::{validate_fixture_name, validate_unique, Validate};
use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

/// Default file name looked up by the CLI.
pub const DEFAULT_CONFIG_FILE: &str = "fixtures.toml";

/// Contents of a `fixtures.toml` file.
///
/// `${VAR}` references in `basedir` and `files` are replaced with the value of
/// environment variable `VAR` after parsing. A relative `basedir` in a file
/// loaded with [`TomlConfig::from_file`] is resolved against the directory
/// containing that file.
///
/// ```toml
/// [fixtures]
/// basedir = "${CARGO_MANIFEST_DIR}/tests/data"
/// files = ["ean13/valid.txt", "code128/valid.txt"]
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub fixtures: FixturesSection,
    #[serde(skip)]
    config_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FixturesSection {
    pub basedir: Option<String>,
    #[serde(default)]
    pub files: Vec<String>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|e| FixtureError::io(path, e))?;
        tracing::debug!(path = %path.display(), "Loaded fixture configuration");
        let mut config = Self::from_toml_str(&content)?;
        config.config_dir = path.parent().map(Path::to_path_buf);
        Ok(config)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let mut config: Self = toml::from_str(content).map_err(|e| FixtureError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })?;

        if let Some(basedir) = &mut config.fixtures.basedir {
            *basedir = substitute_env_vars(basedir);
        }
        for file in &mut config.fixtures.files {
            *file = substitute_env_vars(file);
        }
        Ok(config)
    }

    /// Directory of the file this configuration was loaded from.
    pub fn config_dir(&self) -> Option<&Path> {
        self.config_dir.as_deref()
    }

    pub fn basedir(&self) -> Option<&str> {
        self.fixtures.basedir.as_deref()
    }

    pub fn files(&self) -> &[String] {
        &self.fixtures.files
    }
}

impl PropertySource for TomlConfig {
    fn property(&self, key: &str) -> Option<OsString> {
        if key != BASEDIR_PROPERTY {
            return None;
        }
        let basedir = self.fixtures.basedir.as_deref()?;
        match &self.config_dir {
            Some(dir) if Path::new(basedir).is_relative() => {
                Some(dir.join(basedir).into_os_string())
            }
            _ => Some(OsString::from(basedir)),
        }
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        for file in &self.fixtures.files {
            validate_fixture_name("fixtures.files", file)?;
        }
        validate_unique("fixtures.files", &self.fixtures.files)?;
        Ok(())
    }
}

/// Replaces `${VAR}` with the value of environment variable `VAR`.
/// Unset variables are left as written.
fn substitute_env_vars(value: &str) -> String {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    let re = PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("valid regex"));

    re.replace_all(value, |caps: &Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .into_owned()
}
