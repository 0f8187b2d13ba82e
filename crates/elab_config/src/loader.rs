//! Configuration file loading and validation.

use crate::error::ConfigError;
use crate::types::ElabConfig;
use std::path::Path;

/// Loads and validates an `elab.toml` configuration from a project directory.
pub fn load_config(project_dir: &Path) -> Result<ElabConfig, ConfigError> {
    let config_path = project_dir.join("elab.toml");
    let content = std::fs::read_to_string(&config_path)?;
    load_config_from_str(&content)
}

/// Parses and validates an `elab.toml` configuration from a string.
///
/// Useful for testing without filesystem dependencies.
pub fn load_config_from_str(content: &str) -> Result<ElabConfig, ConfigError> {
    let config: ElabConfig = toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))?;
    validate_config(&config)?;
    Ok(config)
}

fn validate_config(config: &ElabConfig) -> Result<(), ConfigError> {
    if config.gate_library.is_empty() {
        return Err(ConfigError::MissingField("gate_library".to_string()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NameMode;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
gate_library = "basic"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.gate_library, "basic");
        assert_eq!(config.name_mode, NameMode::CaseSensitive);
        assert_eq!(config.top_entity, None);
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
name_mode = "case-insensitive"
gate_library = "basic"
top_entity = "top"
"#;
        let config = load_config_from_str(toml).unwrap();
        assert_eq!(config.name_mode, NameMode::CaseInsensitive);
        assert_eq!(config.top_entity.as_deref(), Some("top"));
    }

    #[test]
    fn missing_gate_library_is_rejected() {
        let toml = r#"
gate_library = ""
"#;
        let err = load_config_from_str(toml).unwrap_err();
        assert!(matches!(err, ConfigError::MissingField(_)));
    }

    #[test]
    fn malformed_toml_is_rejected() {
        let err = load_config_from_str("not valid toml {{{").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }
}
