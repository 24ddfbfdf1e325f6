use crate::utils::error::{FixtureError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

/// Checks a fixture name is usable as a relative path under the base directory.
pub fn validate_fixture_name(field_name: &str, name: &str) -> Result<()> {
    validate_non_empty_string(field_name, name)?;

    if name.contains('\0') {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Fixture name contains null bytes".to_string(),
        });
    }

    if std::path::Path::new(name).is_absolute() {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: name.to_string(),
            reason: "Fixture name must be relative to the base directory".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(FixtureError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_unique(field_name: &str, values: &[String]) -> Result<()> {
    let mut seen = HashSet::new();
    for value in values {
        if !seen.insert(value.as_str()) {
            return Err(FixtureError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: value.clone(),
                reason: "Duplicate entry".to_string(),
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_fixture_name() {
        assert!(validate_fixture_name("files", "ean13/sample.txt").is_ok());
        assert!(validate_fixture_name("files", "").is_err());
        assert!(validate_fixture_name("files", "   ").is_err());
        assert!(validate_fixture_name("files", "a\0b").is_err());
        assert!(validate_fixture_name("files", "/etc/passwd").is_err());
    }

    #[test]
    fn test_validate_unique() {
        let files = vec!["a.txt".to_string(), "b.txt".to_string()];
        assert!(validate_unique("files", &files).is_ok());

        let dupes = vec!["a.txt".to_string(), "a.txt".to_string()];
        assert!(validate_unique("files", &dupes).is_err());
    }
}
