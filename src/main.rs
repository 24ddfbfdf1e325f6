use anyhow::Context;
use clap::Parser;
use fixture_basedir::utils::{logger, validation::Validate};
use fixture_basedir::{resolve_base_dir, CliConfig, FixtureLocator};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    if config.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(config.verbose);
    }
    tracing::debug!("CLI config: {:?}", config);

    let file_config = config
        .load_file_config()
        .context("Failed to load fixture configuration")?;
    if let Some(file_config) = &file_config {
        file_config
            .validate()
            .context("Invalid fixture configuration")?;
    }

    let names = config.fixture_names(file_config.as_ref());

    let base_dir = resolve_base_dir(&config.property_source(file_config));
    tracing::info!(basedir = %base_dir, origin = ?base_dir.origin(), "Resolved base directory");
    println!("{}", base_dir);

    let locator = FixtureLocator::new(base_dir);
    for name in &names {
        println!("{}", locator.path(name).display());
    }

    let missing = config.check_fixtures(&locator, &names);
    for name in &missing {
        tracing::error!(fixture = %name, "Fixture not found");
        eprintln!("❌ missing fixture: {}", locator.path(name).display());
    }
    if config.check && missing.is_empty() {
        tracing::info!("✅ All {} fixtures present", names.len());
    }

    let exit_code = config.exit_code(&missing);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }

    Ok(())
}
