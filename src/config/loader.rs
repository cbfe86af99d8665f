//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::ResolverConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse and validate a manifest from TOML text.
pub fn parse_config(content: &str) -> Result<ResolverConfig, ConfigError> {
    let config: ResolverConfig = toml::from_str(content)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Load and validate a manifest from a TOML file.
pub fn load_config(path: &Path) -> Result<ResolverConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    parse_config(&content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[project]\nname = \"App\"\n\
             configurations = [\"Debug|AnyCPU\", \"Release|AnyCPU\"]\n\
             active = \"Release|AnyCPU\""
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.project.configurations.len(), 2);
        assert_eq!(config.project.active.unwrap().name(), "Release|AnyCPU");
    }

    #[test]
    fn test_missing_file() {
        let err = load_config(Path::new("/nonexistent/active-configs.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_error_message() {
        let err = parse_config("[project]\nconfigurations = [\"Debug|AnyCPU\", \"Debug|AnyCPU\"]")
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Validation failed: configuration 'Debug|AnyCPU' is declared more than once"
        );
    }

    #[test]
    fn test_demo_manifest_is_valid() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("demos/active-configs.toml");
        let config = load_config(&path).unwrap();
        assert_eq!(config.project.configurations.len(), 4);
    }

    #[test]
    fn test_parse_error() {
        let err = parse_config("[project\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
