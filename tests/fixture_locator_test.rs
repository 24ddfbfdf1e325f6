use fixture_basedir::utils::validation::Validate;
use fixture_basedir::{
    BaseDirResolver, FixtureError, FixtureLocator, MapSource, Result, TomlConfig,
};
use serde::Deserialize;
use std::fs;
use tempfile::TempDir;

#[derive(Debug, Deserialize, PartialEq)]
struct SymbolCase {
    message: String,
    checksum: bool,
}

fn setup_fixtures() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();

    fs::create_dir_all(root.join("ean13")).unwrap();
    fs::write(root.join("ean13/input.txt"), "4006381333931\n").unwrap();
    fs::write(root.join("ean13/case.json"), r#"{"message": "400638133393", "checksum": true}"#)
        .unwrap();
    fs::write(root.join("broken.json"), "{ not json").unwrap();

    temp_dir
}

fn locator_for(temp_dir: &TempDir) -> FixtureLocator {
    let source = MapSource::new().with("basedir", temp_dir.path().as_os_str());
    FixtureLocator::new(BaseDirResolver::new(source).resolve())
}

#[test]
fn test_reads_fixtures_under_configured_base_dir() -> Result<()> {
    let temp_dir = setup_fixtures();
    let locator = locator_for(&temp_dir);

    assert_eq!(locator.read_to_string("ean13/input.txt")?, "4006381333931\n");
    assert_eq!(locator.read("ean13/input.txt")?, b"4006381333931\n".to_vec());

    let case: SymbolCase = locator.read_json("ean13/case.json")?;
    assert_eq!(
        case,
        SymbolCase {
            message: "400638133393".to_string(),
            checksum: true,
        }
    );
    Ok(())
}

#[test]
fn test_missing_fixture_fails_on_read_not_on_resolve() {
    let temp_dir = setup_fixtures();
    let gone = temp_dir.path().join("removed");
    let source = MapSource::new().with("basedir", gone.as_os_str());

    let base_dir = BaseDirResolver::new(source).resolve();
    assert_eq!(base_dir.path(), gone.as_path());

    let err = FixtureLocator::new(base_dir).read("ean13/input.txt").unwrap_err();
    assert!(matches!(err, FixtureError::IoError { .. }));
    assert!(err.to_string().contains("ean13"));
}

#[test]
fn test_invalid_json_fixture() {
    let temp_dir = setup_fixtures();
    let locator = locator_for(&temp_dir);

    let err = locator.read_json::<SymbolCase>("broken.json").unwrap_err();
    match err {
        FixtureError::JsonError { path, .. } => assert_eq!(path, temp_dir.path().join("broken.json")),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_missing_lists_absent_fixtures() {
    let temp_dir = setup_fixtures();
    let locator = locator_for(&temp_dir);

    assert!(locator.exists("ean13/input.txt"));
    assert!(!locator.exists("ean13"));
    assert_eq!(
        locator.missing(["ean13/input.txt", "upca/input.txt", "ean13/case.json"]),
        vec!["upca/input.txt".to_string()]
    );
}

#[test]
fn test_config_file_drives_locator() -> Result<()> {
    let temp_dir = setup_fixtures();
    let config_path = temp_dir.path().join("fixtures.toml");
    fs::write(
        &config_path,
        format!(
            "[fixtures]\nbasedir = {:?}\nfiles = [\"ean13/input.txt\", \"ean13/missing.txt\"]\n",
            temp_dir.path().to_str().unwrap()
        ),
    )
    .unwrap();

    let config = TomlConfig::from_file(&config_path)?;
    config.validate()?;

    let files: Vec<&str> = config.files().iter().map(String::as_str).collect();
    let locator = FixtureLocator::new(BaseDirResolver::new(config.clone()).resolve());
    assert_eq!(locator.missing(files), vec!["ean13/missing.txt".to_string()]);
    Ok(())
}

#[test]
fn test_missing_config_file_is_io_error() {
    let temp_dir = TempDir::new().unwrap();
    let err = TomlConfig::from_file(temp_dir.path().join("nope.toml")).unwrap_err();
    assert!(matches!(err, FixtureError::IoError { .. }));
}
