pub mod case;
pub mod locator;
pub mod resolver;

pub use case::{EnvFixtureCase, FixtureCase};
pub use locator::FixtureLocator;
pub use resolver::{resolve_base_dir, BaseDirResolver};
