pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use self::core::{
    resolve_base_dir, BaseDirResolver, EnvFixtureCase, FixtureCase, FixtureLocator,
};
pub use config::{EnvSource, MapSource, TomlConfig};
pub use domain::model::{BaseDir, BaseDirOrigin, BASEDIR_PROPERTY, DEFAULT_BASEDIR};
pub use domain::ports::{Chain, PropertySource};
pub use utils::error::{FixtureError, Result};
