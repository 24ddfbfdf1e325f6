#[cfg(feature = "cli")]
pub mod cli;
pub mod env;
pub mod map;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use env::EnvSource;
pub use map::MapSource;
pub use toml_config::TomlConfig;
