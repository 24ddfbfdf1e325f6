use crate::config::{EnvSource, MapSource, TomlConfig};
use crate::core::FixtureLocator;
use crate::domain::model::BASEDIR_PROPERTY;
use crate::domain::ports::{Chain, PropertySource};
use crate::utils::error::Result;
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Parser)]
#[command(name = "fixture-basedir")]
#[command(about = "Resolve the base directory test fixtures are loaded from")]
pub struct CliConfig {
    /// Base directory, overriding the environment and config file
    #[arg(long)]
    pub basedir: Option<PathBuf>,

    /// Fixture configuration file; `fixtures.toml` is used when present
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Exit non-zero when a named or configured fixture is missing
    #[arg(long)]
    pub check: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    /// Fixture names to resolve against the base directory
    pub names: Vec<String>,
}

pub type CliSource = Chain<Chain<MapSource, EnvSource>, Option<TomlConfig>>;

impl CliConfig {
    /// Loads the config file named by `--config`, or `fixtures.toml` if it
    /// exists in the current directory.
    pub fn load_file_config(&self) -> Result<Option<TomlConfig>> {
        self.load_file_config_in(Path::new("."))
    }

    /// Like [`CliConfig::load_file_config`], discovering `fixtures.toml` in `dir`.
    pub fn load_file_config_in(&self, dir: &Path) -> Result<Option<TomlConfig>> {
        match &self.config {
            Some(path) => TomlConfig::from_file(path).map(Some),
            None => {
                let default = dir.join(super::toml_config::DEFAULT_CONFIG_FILE);
                if default.is_file() {
                    TomlConfig::from_file(default).map(Some)
                } else {
                    tracing::debug!(dir = %dir.display(), "No fixture configuration file found");
                    Ok(None)
                }
            }
        }
    }

    /// Command-line names followed by the config file's `files`, without repeats.
    pub fn fixture_names(&self, file_config: Option<&TomlConfig>) -> Vec<String> {
        let mut names = self.names.clone();
        if let Some(file_config) = file_config {
            for file in file_config.files() {
                if !names.contains(file) {
                    names.push(file.clone());
                }
            }
        }
        names
    }

    /// Fixtures `--check` reports as missing; empty when `--check` is off.
    pub fn check_fixtures(&self, locator: &FixtureLocator, names: &[String]) -> Vec<String> {
        if !self.check {
            return Vec::new();
        }
        locator.missing(names.iter().map(String::as_str))
    }

    pub fn exit_code(&self, missing: &[String]) -> i32 {
        if missing.is_empty() {
            0
        } else {
            1
        }
    }

    /// `--basedir`, then the environment, then the config file.
    pub fn property_source(&self, file_config: Option<TomlConfig>) -> CliSource {
        let mut flags = MapSource::new();
        if let Some(basedir) = &self.basedir {
            flags.insert(BASEDIR_PROPERTY, basedir.as_os_str());
        }
        flags.or(EnvSource::new()).or(file_config)
    }
}
